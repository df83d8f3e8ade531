//! Settings for the `prereq` command
//!
//!     Three layers are merged, later ones winning: the defaults compiled in from
//!     `defaults/prereq.default.toml`, an optional TOML file chosen by the caller, and values
//!     taken from command-line flags. [`Loader::build`] merges them and then checks the result
//!     against the [`FormatRegistry`], so an unknown `output.format` is reported before any
//!     input is read.
//!
//! Keys
//!
//!     output.format      name of a registered format (json, json-compact, yaml, treeviz)
//!     output.echo_input  print each input line above its tree

use crate::prereq::formats::FormatRegistry;
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const DEFAULT_TOML: &str = include_str!("../../defaults/prereq.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct PrereqConfig {
    pub output: OutputConfig,
}

/// How parsed trees are printed.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Always a name known to [`FormatRegistry::with_defaults`] once loaded.
    pub format: String,
    pub echo_input: bool,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    /// A layer could not be read, or the merged values have the wrong shape.
    #[error("could not load settings: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("unknown output format '{format}' (available: {})", .available.join(", "))]
    UnknownFormat {
        format: String,
        available: Vec<String>,
    },
}

/// Merges the settings layers. Flag values are kept aside and applied last in [`build`].
///
/// [`build`]: Loader::build
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
    format: Option<String>,
    echo_input: Option<bool>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
            format: None,
            echo_input: None,
        }
    }

    /// Layer a TOML file over the defaults. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_echo_input(mut self, echo: bool) -> Self {
        self.echo_input = Some(echo);
        self
    }

    pub fn build(self) -> Result<PrereqConfig, SettingsError> {
        let mut builder = self.builder;
        if let Some(format) = self.format {
            builder = builder.set_override("output.format", format)?;
        }
        if let Some(echo) = self.echo_input {
            builder = builder.set_override("output.echo_input", echo)?;
        }
        let settings: PrereqConfig = builder.build()?.try_deserialize()?;

        let registry = FormatRegistry::with_defaults();
        if !registry.has(&settings.output.format) {
            return Err(SettingsError::UnknownFormat {
                format: settings.output.format,
                available: registry.list_formats(),
            });
        }
        log::debug!("settings loaded: {:?}", settings);
        Ok(settings)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<PrereqConfig, SettingsError> {
    Loader::new().build()
}
