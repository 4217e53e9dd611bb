//! Shared configuration loader for the adf toolchain.
//!
//! `defaults/adf.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`AdfConfig`].

use adf_babel::formats::{HtmlOptions, PanelStyle, TextOptions};
use adf_babel::report::ReportOptions;
use adf_babel::transduce::TransduceOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/adf.default.toml");

/// Top-level configuration consumed by adf applications.
#[derive(Debug, Clone, Deserialize)]
pub struct AdfConfig {
    pub transduce: TransduceConfig,
    pub report: ReportConfig,
    pub convert: ConvertConfig,
}

/// Limits applied while walking markup trees.
#[derive(Debug, Clone, Deserialize)]
pub struct TransduceConfig {
    pub max_depth: usize,
    pub max_list_level: usize,
}

impl From<&TransduceConfig> for TransduceOptions {
    fn from(config: &TransduceConfig) -> Self {
        TransduceOptions {
            max_depth: config.max_depth,
            max_list_level: config.max_list_level,
        }
    }
}

/// Section labels, placeholders and issue field names for reports.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub summary_label: String,
    pub references_label: String,
    pub environment_label: String,
    pub description_label: String,
    pub comments_label: String,
    pub missing: String,
    pub no_description: String,
    pub no_comments: String,
    pub empty_comment: String,
    pub unknown_author: String,
    pub references_field: String,
    pub environment_field: String,
    pub timestamp_format: String,
}

impl From<ReportConfig> for ReportOptions {
    fn from(config: ReportConfig) -> Self {
        ReportOptions {
            summary_label: config.summary_label,
            references_label: config.references_label,
            environment_label: config.environment_label,
            description_label: config.description_label,
            comments_label: config.comments_label,
            missing: config.missing,
            no_description: config.no_description,
            no_comments: config.no_comments,
            empty_comment: config.empty_comment,
            unknown_author: config.unknown_author,
            references_field: config.references_field,
            environment_field: config.environment_field,
            timestamp_format: config.timestamp_format,
        }
    }
}

impl From<&ReportConfig> for ReportOptions {
    fn from(config: &ReportConfig) -> Self {
        config.clone().into()
    }
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub text: TextConfig,
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    pub bullet: String,
    pub indent: String,
}

impl From<&TextConfig> for TextOptions {
    fn from(config: &TextConfig) -> Self {
        TextOptions {
            bullet: config.bullet.clone(),
            indent: config.indent.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    /// Path of a stylesheet appended after the baseline CSS.
    #[serde(default)]
    pub custom_css: Option<String>,
    pub panel_background: String,
    pub panel_border_color: String,
    pub panel_border_width: String,
}

/// The stylesheet path is not read here; callers pass it to the `html`
/// format as the `css-path` parameter.
impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        HtmlOptions::default().with_panel(PanelStyle {
            background: adf_babel::normalize_color(&config.panel_background),
            border_color: adf_babel::normalize_color(&config.panel_border_color),
            border_width: config.panel_border_width.clone(),
        })
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
    pub fn build(self) -> Result<AdfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AdfConfig, ConfigError> {
    Loader::new().build()
}
