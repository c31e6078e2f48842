//! CLI route: single route table and run context.

use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{format_profiles_json, format_profiles_text, format_widgets_text};
use crate::config::{ConfigLoader, WidgetConfig};
use crate::error::WidgetError;
use crate::host::{StyleQueue, WidgetArgs, WidgetCatalog, WidgetFieldNames};
use crate::instance::WidgetInstance;
use crate::widget::{ProfileWidget, STYLESHEET, WIDGET_ID};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Runtime context for CLI execution: configuration, the widget and the catalog it is registered in.
pub struct RunContext {
    config: WidgetConfig,
    widget: Arc<ProfileWidget>,
    catalog: WidgetCatalog,
}

impl RunContext {
    /// Create run context from an optional config path.
    pub fn new(config_path: Option<&Path>) -> Result<Self, WidgetError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Self::from_config(config)
    }

    /// Build the widget from configuration and register it.
    pub fn from_config(config: WidgetConfig) -> Result<Self, WidgetError> {
        let widget = Arc::new(config.build_widget());
        let mut catalog = WidgetCatalog::new();
        catalog.register(widget.clone())?;
        Ok(Self {
            config,
            widget,
            catalog,
        })
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn catalog(&self) -> &WidgetCatalog {
        &self.catalog
    }

    /// Execute a command and return its stdout text.
    pub fn execute(&self, command: &Commands) -> Result<String, WidgetError> {
        match command {
            Commands::Profiles { format } => Ok(match format {
                OutputFormat::Text => format_profiles_text(self.widget.registry()),
                OutputFormat::Json => format_profiles_json(self.widget.registry()),
            }),
            Commands::Widgets => Ok(format_widgets_text(&self.catalog.list())),
            Commands::Render {
                instance,
                bare,
                with_styles,
            } => {
                let widget = self.catalog.get_or_error(WIDGET_ID)?;
                let instance = read_optional_instance(instance.as_deref())?;
                let args = if *bare {
                    WidgetArgs::bare()
                } else {
                    WidgetArgs::for_widget(WIDGET_ID)
                };
                let mut styles = StyleQueue::new();
                let html = widget.render(&args, &instance, &mut styles);
                info!(styles = styles.assets().len(), "Rendered widget");
                if *with_styles && !styles.is_empty() {
                    Ok(format!("{}\n{}", styles.to_link_tags(), html))
                } else {
                    Ok(html)
                }
            }
            Commands::Form { instance, number } => {
                let widget = self.catalog.get_or_error(WIDGET_ID)?;
                let instance = read_optional_instance(instance.as_deref())?;
                let naming =
                    WidgetFieldNames::new(WIDGET_ID, number.unwrap_or(self.config.widget.number));
                Ok(widget.form(&instance, &naming))
            }
            Commands::Save {
                submitted,
                previous,
                output,
            } => {
                let widget = self.catalog.get_or_error(WIDGET_ID)?;
                let submitted = read_instance(submitted)?;
                let previous = read_optional_instance(previous.as_deref())?;
                let saved = widget.update(&submitted, &previous);
                let json = serde_json::to_string_pretty(&saved)?;
                match output {
                    Some(path) => {
                        std::fs::write(path, format!("{}\n", json))?;
                        info!(path = %path.display(), fields = saved.len(), "Saved instance");
                        Ok(format!("Saved {} field(s) to {}", saved.len(), path.display()))
                    }
                    None => Ok(json),
                }
            }
            Commands::Stylesheet => Ok(STYLESHEET.trim_end().to_string()),
            Commands::Config => self.config.to_toml(),
        }
    }
}

fn read_optional_instance(path: Option<&Path>) -> Result<WidgetInstance, WidgetError> {
    match path {
        Some(path) => read_instance(path),
        None => Ok(WidgetInstance::new()),
    }
}

/// Read an instance JSON object from a file, or stdin for "-".
fn read_instance(path: &Path) -> Result<WidgetInstance, WidgetError> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            WidgetError::InvalidArgument(format!("Cannot read {}: {}", path.display(), e))
        })?
    };
    if content.trim().is_empty() {
        return Ok(WidgetInstance::new());
    }
    Ok(serde_json::from_str(&content)?)
}
