//! Profile Links: social media profile link widget
//!
//! A widget that keeps an ordered registry of social networks, renders saved
//! profile URLs as a link list, produces the admin edit form and sanitizes
//! submitted values. A small reference host (catalog, field naming, style
//! queue, config and CLI) drives it end to end.

pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod instance;
pub mod logging;
pub mod registry;
pub mod sanitize;
pub mod widget;

pub use error::{CatalogError, WidgetError};
pub use host::{
    FieldNaming, StyleAsset, StyleQueue, Widget, WidgetArgs, WidgetCatalog, WidgetDescriptor,
    WidgetFieldNames,
};
pub use instance::WidgetInstance;
pub use registry::{ProfileEntry, ProfileRegistry};
pub use widget::{ProfileWidget, ProfileWidgetBuilder};
