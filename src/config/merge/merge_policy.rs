//! Merge rules: defaults applied before any source.
//!
//! Override order (lowest to highest): defaults, global file, explicit file,
//! environment.

use crate::widget::STYLE_SRC;
use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("widget.number", 1)?
        .set_default("widget.stylesheet_src", STYLE_SRC)
}
