//! Configuration System
//!
//! Layered configuration for the widget host: defaults, the global config
//! file, an explicit `--config` file and environment overrides. The
//! `[profiles]` table becomes the widget's registry filter.

use crate::error::WidgetError;
use crate::logging::LoggingConfig;
use crate::registry::{ProfileEntry, ProfileRegistry};
use crate::widget::{ProfileWidget, STYLE_SRC};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge;
mod sources;

pub use sources::environment::ENV_PREFIX;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Widget placement settings
    #[serde(default)]
    pub widget: WidgetSection,

    /// Registry customization
    #[serde(default)]
    pub profiles: ProfilesConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Placement settings used by the reference host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSection {
    /// Placement number used for form field naming
    #[serde(default = "default_number")]
    pub number: u32,

    /// Where the host serves the widget stylesheet
    #[serde(default = "default_stylesheet_src")]
    pub stylesheet_src: String,
}

fn default_number() -> u32 {
    1
}

fn default_stylesheet_src() -> String {
    STYLE_SRC.to_string()
}

impl Default for WidgetSection {
    fn default() -> Self {
        Self {
            number: default_number(),
            stylesheet_src: default_stylesheet_src(),
        }
    }
}

/// Changes applied to the default registry, in order: add, remove, reorder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilesConfig {
    /// New networks, or new titles for existing ones
    #[serde(default)]
    pub add: Vec<ProfileEntry>,

    /// Keys to drop
    #[serde(default)]
    pub remove: Vec<String>,

    /// Keys to move to the front, in this order
    #[serde(default)]
    pub order: Vec<String>,
}

impl ProfilesConfig {
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty() && self.order.is_empty()
    }

    /// Apply the configured changes to a registry
    pub fn apply(&self, mut registry: ProfileRegistry) -> ProfileRegistry {
        for entry in &self.add {
            registry.insert(entry.key.clone(), entry.title.clone());
        }
        for key in &self.remove {
            registry.remove(key);
        }
        registry.reorder(&self.order[..]);
        registry
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        for entry in &self.add {
            if !is_valid_key(&entry.key) {
                errors.push(ValidationError::Profile(
                    entry.key.clone(),
                    "key must be a non-empty lowercase slug (a-z, 0-9, '-', '_')".to_string(),
                ));
            }
            if entry.title.trim().is_empty() {
                errors.push(ValidationError::Profile(
                    entry.key.clone(),
                    "title cannot be empty".to_string(),
                ));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Profile(String, String),
    Widget(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Profile(key, msg) => write!(f, "Profile '{}': {}", key, msg),
            ValidationError::Widget(msg) => write!(f, "Widget: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl WidgetConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = match self.profiles.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => errors,
        };

        if self.widget.stylesheet_src.trim().is_empty() {
            errors.push(ValidationError::Widget(
                "stylesheet_src cannot be empty".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, WidgetError> {
        toml::to_string_pretty(self)
            .map_err(|e| WidgetError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Build the widget this configuration describes
    pub fn build_widget(&self) -> ProfileWidget {
        let mut builder =
            ProfileWidget::builder().stylesheet_src(self.widget.stylesheet_src.clone());
        if !self.profiles.is_empty() {
            let profiles = self.profiles.clone();
            builder = builder.registry_filter(move |registry| profiles.apply(registry));
        }
        builder.build()
    }
}

/// Loads [`WidgetConfig`] from its layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, global file, environment
    pub fn load() -> Result<WidgetConfig, WidgetError> {
        Self::load_layers(Self::global_config_path().as_deref(), None)
    }

    /// Defaults, the given file, environment. The global file is skipped.
    pub fn load_from_file(path: &Path) -> Result<WidgetConfig, WidgetError> {
        Self::load_layers(None, Some(path))
    }

    /// Path of the global config file, if the platform has a config directory
    pub fn global_config_path() -> Option<PathBuf> {
        sources::global_file::global_config_path()
    }

    /// Load from explicit layers and validate the result
    pub fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<WidgetConfig, WidgetError> {
        let mut builder = merge::merge_policy::builder_with_defaults()?;
        builder = sources::global_file::add_to_builder(builder, global)?;
        if let Some(path) = explicit {
            builder = sources::explicit_file::add_to_builder(builder, path)?;
        }
        builder = sources::environment::add_to_builder(builder);

        let config: WidgetConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            WidgetError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
