#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Themevars CLI
//!
//! Loads theme files into a [`ThemeRegistry`] and prints them as CSS custom
//! properties or JSON.
//!
//! ## Quick start (library)
//!
//! ```rust,no_run
//! use themevars_cli::{Config, Session};
//!
//! fn main() -> Result<(), themevars_cli::CliError> {
//!     let mut session = Session::new(Config::new().selector(".dark").rgb_variants(false));
//!     session.load_files(["dracula.json", "nord.toml"])?;
//!     println!("{}", session.stylesheet()?);
//!     Ok(())
//! }
//! ```
//!
//! ## CLI usage
//!
//! ```bash
//! themevars css dracula.json
//! themevars css dracula.json nord.toml --theme Nord --no-rgb
//! themevars json dracula.json --pretty
//! themevars vars "font size" --spacing _
//! ```

pub mod cli;

use std::path::{Path, PathBuf};

use themevars::{
    ApplyConfig, DEFAULT_SPACING, ThemeLoadError, ThemeRegistry, ThemeSaveError, VarKind,
    css_var_name,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::cli::{Cli, Command};

/// Error raised by the command-line front end.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to load {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: ThemeLoadError,
    },
    #[error("theme not found: {0}")]
    ThemeNotFound(String),
    #[error("no theme loaded")]
    NoTheme,
    #[error(transparent)]
    Save(#[from] ThemeSaveError),
}

/// Output settings for a session.
///
/// Defaults:
/// - spacing `"-"`
/// - selector `":root"`
/// - `--rgb-*` companions enabled
/// - the first loaded theme is used
///
/// # Example
///
/// ```rust
/// use themevars_cli::Config;
///
/// let config = Config::new()
///     .spacing("_")
///     .selector("[data-theme=\"nord\"]")
///     .theme("Nord");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    spacing: String,
    selector: String,
    rgb_variants: bool,
    theme: Option<String>,
}

impl Config {
    /// Creates a new configuration with default settings.
    pub fn new() -> Self {
        Self {
            spacing: DEFAULT_SPACING.to_string(),
            selector: ":root".to_string(),
            rgb_variants: true,
            theme: None,
        }
    }

    /// Sets the replacement for invalid property-name characters.
    pub fn spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = spacing.into();
        self
    }

    /// Sets the rule selector.
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    /// Enables or disables `--rgb-*` companions.
    pub fn rgb_variants(mut self, enabled: bool) -> Self {
        self.rgb_variants = enabled;
        self
    }

    /// Selects a theme by name instead of the first loaded one.
    pub fn theme(mut self, name: impl Into<String>) -> Self {
        self.theme = Some(name.into());
        self
    }

    fn apply_config(&self) -> ApplyConfig {
        ApplyConfig::new()
            .spacing(self.spacing.clone())
            .selector(self.selector.clone())
            .rgb_variants(self.rgb_variants)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// A registry populated from files plus the settings to print it with.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    registry: ThemeRegistry,
}

impl Session {
    /// Creates an empty session.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: ThemeRegistry::new(),
        }
    }

    /// Returns the underlying registry.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// Loads theme files in order. The first theme loaded becomes current.
    ///
    /// Files that parse to an empty document are skipped with a warning.
    pub fn load_files<I, P>(&mut self, paths: I) -> Result<(), CliError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            let path = path.as_ref();
            let select = self.registry.selected_index().is_none();
            let loaded = self
                .registry
                .load_theme_file(path, select)
                .map_err(|source| CliError::Load {
                    path: path.to_path_buf(),
                    source,
                })?;
            if loaded {
                debug!(theme.path = %path.display(), theme.selected = select, "Loaded theme file");
            } else {
                warn!(theme.path = %path.display(), "Skipping empty theme file");
            }
        }
        Ok(())
    }

    /// Renders the configured theme as a CSS rule.
    pub fn stylesheet(&self) -> Result<String, CliError> {
        let name = self.target()?;
        Ok(self
            .registry
            .render_stylesheet(name, &self.config.apply_config()))
    }

    /// Serializes the configured theme as JSON.
    pub fn json(&self, pretty: bool) -> Result<String, CliError> {
        let name = self.target()?;
        match self.registry.resolve(name) {
            Some(theme) if pretty => Ok(theme.to_json()?),
            _ => Ok(self.registry.theme_to_json(name)),
        }
    }

    fn target(&self) -> Result<Option<&str>, CliError> {
        let name = self.config.theme.as_deref();
        if self.registry.resolve(name).is_some() {
            return Ok(name);
        }
        Err(match name {
            Some(name) if !name.is_empty() => CliError::ThemeNotFound(name.to_string()),
            _ => CliError::NoTheme,
        })
    }
}

/// Runs a parsed command line and returns what should be printed.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    match &cli.command {
        Command::Css(args) => {
            let mut config = Config::new()
                .spacing(args.spacing.as_str())
                .selector(args.selector.as_str())
                .rgb_variants(!args.no_rgb);
            if let Some(theme) = &args.source.theme {
                config = config.theme(theme.as_str());
            }
            let mut session = Session::new(config);
            session.load_files(&args.source.files)?;
            session.stylesheet()
        }
        Command::Json(args) => {
            let mut config = Config::new();
            if let Some(theme) = &args.source.theme {
                config = config.theme(theme.as_str());
            }
            let mut session = Session::new(config);
            session.load_files(&args.source.files)?;
            session.json(args.pretty)
        }
        Command::Vars(args) => {
            let kind = if args.rgb { VarKind::Rgb } else { VarKind::Normal };
            Ok(css_var_name(&args.param, kind, &args.spacing))
        }
    }
}
