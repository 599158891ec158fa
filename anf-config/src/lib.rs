//! Shared configuration loader for the anf toolchain.
//!
//! `defaults/anf.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`AnfConfig`].

use anf_compiler::{CompilerOptions, ElementMapping, ElementMappings};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/anf.default.toml");

/// Top-level configuration consumed by anf applications.
#[derive(Debug, Clone, Deserialize)]
pub struct AnfConfig {
    pub compiler: CompilerConfig,
    pub elements: Vec<ElementMapping>,
}

/// Mirrors the switches of [`CompilerOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct CompilerConfig {
    pub debug: bool,
    pub embed_styles: bool,
}

impl AnfConfig {
    /// The configured role table.
    pub fn mappings(&self) -> ElementMappings {
        ElementMappings::from(self.elements.clone())
    }
}

impl From<&AnfConfig> for CompilerOptions {
    fn from(config: &AnfConfig) -> Self {
        CompilerOptions {
            debug: config.compiler.debug,
            embed_styles: config.compiler.embed_styles,
            mappings: config.mappings(),
        }
    }
}

impl From<AnfConfig> for CompilerOptions {
    fn from(config: AnfConfig) -> Self {
        CompilerOptions {
            debug: config.compiler.debug,
            embed_styles: config.compiler.embed_styles,
            mappings: ElementMappings::from(config.elements),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AnfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AnfConfig, ConfigError> {
    Loader::new().build()
}
