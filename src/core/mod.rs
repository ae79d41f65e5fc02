pub mod config;
pub mod printer;
pub mod terminal;
