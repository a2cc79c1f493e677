#![forbid(unsafe_code)]

//! # Themevars CLI
//!
//! Publishes theme files as CSS custom properties.
//!
//! ## Usage
//!
//! ```bash
//! themevars css dracula.json           # :root block for the theme
//! themevars json dracula.json --pretty # theme as JSON
//! themevars vars "font size"           # --font-size
//! ```

use std::process::ExitCode;

use themevars_cli::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match themevars_cli::run(&cli) {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{output}");
            } else {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
