use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("cannot build a palette tree from an empty palette")]
    Empty,
}
