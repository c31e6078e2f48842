//! Host integration surface
//!
//! Everything a page host supplies to or collects from a widget: the widget
//! contract, explicit registration, wrapper markup, form field naming and the
//! stylesheet queue.

use crate::error::CatalogError;
use crate::instance::WidgetInstance;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identity a widget type is listed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    /// Stable identifier, also the base of form field ids
    pub id_base: String,
    /// Human readable name
    pub name: String,
    pub description: String,
}

/// Contract between a host and a widget type.
///
/// None of the operations fail: missing or malformed input is normalized.
pub trait Widget: Send + Sync {
    fn descriptor(&self) -> &WidgetDescriptor;

    /// Front-end fragment for a saved instance
    fn render(&self, args: &WidgetArgs, instance: &WidgetInstance, styles: &mut StyleQueue)
        -> String;

    /// Admin form for a saved instance
    fn form(&self, instance: &WidgetInstance, naming: &dyn FieldNaming) -> String;

    /// Sanitized replacement instance for submitted form values
    fn update(&self, submitted: &WidgetInstance, previous: &WidgetInstance) -> WidgetInstance;
}

/// Widget types available for placement, in registration order
#[derive(Default)]
pub struct WidgetCatalog {
    widgets: Vec<Arc<dyn Widget>>,
}

impl WidgetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget type; ids must be unique
    pub fn register(&mut self, widget: Arc<dyn Widget>) -> Result<(), CatalogError> {
        let id = &widget.descriptor().id_base;
        if self.get(id).is_some() {
            return Err(CatalogError::Duplicate(id.clone()));
        }
        tracing::debug!(widget = %id, "Registered widget");
        self.widgets.push(widget);
        Ok(())
    }

    pub fn get(&self, id_base: &str) -> Option<Arc<dyn Widget>> {
        self.widgets
            .iter()
            .find(|w| w.descriptor().id_base == id_base)
            .cloned()
    }

    pub fn get_or_error(&self, id_base: &str) -> Result<Arc<dyn Widget>, CatalogError> {
        self.get(id_base)
            .ok_or_else(|| CatalogError::NotFound(id_base.to_string()))
    }

    pub fn list(&self) -> Vec<&WidgetDescriptor> {
        self.widgets.iter().map(|w| w.descriptor()).collect()
    }
}

/// Wrapper markup the host places around a rendered widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetArgs {
    pub before_widget: String,
    pub after_widget: String,
    pub before_title: String,
    pub after_title: String,
}

impl WidgetArgs {
    /// No wrapper markup at all
    pub fn bare() -> Self {
        Self {
            before_widget: String::new(),
            after_widget: String::new(),
            before_title: String::new(),
            after_title: String::new(),
        }
    }

    /// Default wrapper for a widget id
    pub fn for_widget(id_base: &str) -> Self {
        Self {
            before_widget: format!(r#"<section class="widget {}">"#, id_base),
            after_widget: "</section>".to_string(),
            before_title: r#"<h2 class="widget-title">"#.to_string(),
            after_title: "</h2>".to_string(),
        }
    }
}

/// Host convention for turning a field key into form input identity
pub trait FieldNaming {
    fn field_id(&self, key: &str) -> String;
    fn field_name(&self, key: &str) -> String;
}

/// Classic widget field naming: `widget-<id_base>-<number>-<key>` ids and
/// `widget-<id_base>[<number>][<key>]` names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetFieldNames {
    pub id_base: String,
    pub number: u32,
}

impl WidgetFieldNames {
    pub fn new(id_base: impl Into<String>, number: u32) -> Self {
        Self {
            id_base: id_base.into(),
            number,
        }
    }
}

impl FieldNaming for WidgetFieldNames {
    fn field_id(&self, key: &str) -> String {
        format!("widget-{}-{}-{}", self.id_base, self.number, key)
    }

    fn field_name(&self, key: &str) -> String {
        format!("widget-{}[{}][{}]", self.id_base, self.number, key)
    }
}

/// A stylesheet the page should link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleAsset {
    pub handle: String,
    pub src: String,
}

impl StyleAsset {
    pub fn new(handle: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            src: src.into(),
        }
    }
}

/// Stylesheets requested while rendering a page. Enqueueing a handle twice is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleQueue {
    assets: Vec<StyleAsset>,
}

impl StyleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the asset was newly queued
    pub fn enqueue(&mut self, asset: StyleAsset) -> bool {
        if self.contains(&asset.handle) {
            return false;
        }
        self.assets.push(asset);
        true
    }

    pub fn contains(&self, handle: &str) -> bool {
        self.assets.iter().any(|a| a.handle == handle)
    }

    pub fn assets(&self) -> &[StyleAsset] {
        &self.assets
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// `<link>` tags for every queued stylesheet
    pub fn to_link_tags(&self) -> String {
        self.assets
            .iter()
            .map(|a| {
                format!(
                    r#"<link rel="stylesheet" id="{}-css" href="{}">"#,
                    crate::sanitize::escape_attr(&a.handle),
                    crate::sanitize::escape_attr(&a.src)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
