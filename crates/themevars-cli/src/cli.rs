//! Command-line interface for `themevars`.
//!
//! # Examples
//!
//! ```bash
//! # Print the first theme as a :root block
//! themevars css dracula.json nord.toml
//!
//! # Pick a theme and scope it to a selector
//! themevars css dracula.json nord.toml --theme Nord --selector '[data-theme="nord"]'
//!
//! # Export a theme back to JSON
//! themevars json dracula.json
//!
//! # Show the custom property name for a parameter
//! themevars vars "font size" --rgb
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Publish theme files as CSS custom properties.
#[derive(Parser, Debug, Clone)]
#[command(name = "themevars", author, version, about)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render a theme as a CSS rule of custom properties
    Css(CssArgs),

    /// Print a theme as JSON
    Json(JsonArgs),

    /// Print the custom property name for a parameter
    Vars(VarsArgs),
}

/// Theme files and theme selection shared by `css` and `json`.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Theme files (.json, .toml, .yaml). The first one is selected.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Theme name to use instead of the first file's theme
    #[arg(long, short = 't')]
    pub theme: Option<String>,
}

/// Arguments for the `css` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CssArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Replacement for characters not allowed in property names
    #[arg(long, short = 's', default_value = "-", env = "THEMEVARS_SPACING")]
    pub spacing: String,

    /// Selector of the emitted rule
    #[arg(long, default_value = ":root")]
    pub selector: String,

    /// Skip the --rgb-* companions of hex colors
    #[arg(long)]
    pub no_rgb: bool,
}

/// Arguments for the `json` subcommand.
#[derive(Args, Debug, Clone)]
pub struct JsonArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Indent the output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `vars` subcommand.
#[derive(Args, Debug, Clone)]
pub struct VarsArgs {
    /// Theme parameter, e.g. "font size"
    pub param: String,

    /// Print the --rgb-* name instead
    #[arg(long)]
    pub rgb: bool,

    /// Replacement for characters not allowed in property names
    #[arg(long, short = 's', default_value = "-", env = "THEMEVARS_SPACING")]
    pub spacing: String,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Default `tracing` filter directive for the verbosity level.
    ///
    /// `RUST_LOG` takes precedence over this.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
