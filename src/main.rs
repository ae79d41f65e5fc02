use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, error};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use imgcat::color::table::{ansi_8_tree, xterm_256_tree};
use imgcat::core::config::{Settings, ShowOptions};
use imgcat::core::printer::{format_tree, print_image};
use imgcat::core::terminal::TerminalInfo;
use imgcat::renderer::OutputFormat;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print images to the terminal
    Show {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output format; detected from the terminal when omitted
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Maximum width in columns
        #[arg(short, long)]
        width: Option<u32>,
        /// Maximum height in rows
        #[arg(short = 'H', long)]
        height: Option<u32>,
        /// Print at the image's native size
        #[arg(long, default_value_t = false)]
        no_resize: bool,
    },
    /// Report detected terminal capabilities as JSON
    Detect,
    /// Print a reference palette's k-d tree, depth first
    Palette {
        #[arg(short, long, value_enum, default_value_t = PaletteChoice::Xterm256)]
        colors: PaletteChoice,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PaletteChoice {
    #[value(name = "8")]
    Ansi8,
    #[value(name = "256")]
    Xterm256,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_micros()
        .init();

    match &cli.command {
        Commands::Show { files, format, width, height, no_resize } => {
            let options = ShowOptions {
                format: *format,
                width: *width,
                height: *height,
                no_resize: *no_resize,
            };
            show(files, &options)?;
        }
        Commands::Detect => {
            let info = TerminalInfo::detect();
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::Palette { colors } => {
            let tree = match colors {
                PaletteChoice::Ansi8 => ansi_8_tree(),
                PaletteChoice::Xterm256 => xterm_256_tree(),
            };
            print!("{}", format_tree(tree));
        }
    }

    Ok(())
}

fn show(files: &[PathBuf], options: &ShowOptions) -> Result<()> {
    let terminal = TerminalInfo::detect();
    let settings = Settings::resolve(options, &terminal);
    debug!("printing {} file(s) as {:?}", files.len(), settings.format);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut failures = 0;

    for path in files {
        if let Err(e) = print_image(path, &settings, &mut out) {
            error!("{:#}", e);
            failures += 1;
        }
    }
    out.flush()?;

    if failures > 0 {
        bail!("{} of {} image(s) could not be printed", failures, files.len());
    }
    Ok(())
}
