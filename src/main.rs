//! hex0 command-line compiler.

use std::{
    fs::{File, OpenOptions},
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(name = "hex0")]
#[command(version, about = "Compile hex0 source into raw binary")]
struct Cli {
    /// hex0 source file (defaults to standard input)
    input: Option<PathBuf>,

    /// Output binary file (defaults to standard output)
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(
            File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };

    let output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            create_output(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    hex0::avec::compile(input, output).context("failed to compile hex0 source")
}

/// Create (or truncate) an output file, executable on Unix.
fn create_output(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o755);
    }

    options.open(path)
}
