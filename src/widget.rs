//! Profile link widget
//!
//! Renders the configured profile URLs as a link list, produces the admin
//! form, and sanitizes submitted values. The registry is fixed when the
//! widget is built; both extension points are injected through
//! [`ProfileWidgetBuilder`].

use crate::host::{FieldNaming, StyleAsset, StyleQueue, Widget, WidgetArgs, WidgetDescriptor};
use crate::instance::{WidgetInstance, TITLE_FIELD};
use crate::registry::ProfileRegistry;
use crate::sanitize::{clean_url, escape_attr, escape_html, strip_tags};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

pub const WIDGET_ID: &str = "social_profiles_widget";
pub const WIDGET_NAME: &str = "Social Profiles Widget";
pub const WIDGET_DESCRIPTION: &str = "A Widget to show links to the social media profiles";

/// Class of the rendered `<ul>`
pub const LIST_CLASS: &str = "social-media-profiles-widget-list";

pub const STYLE_HANDLE: &str = "social-media-profiles-widget";
pub const STYLE_SRC: &str = "social-media-profiles-widget.css";

/// Bundled stylesheet served under [`STYLE_SRC`]
pub const STYLESHEET: &str = include_str!("../assets/social-media-profiles-widget.css");

/// Form pre-fill when no title has been saved
pub const DEFAULT_TITLE_PLACEHOLDER: &str = "Title";

/// Transforms the default registry once, at build time
pub type RegistryFilter = Box<dyn FnOnce(ProfileRegistry) -> ProfileRegistry>;

/// Transforms the title right before display
pub type TitleFilter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Builder for [`ProfileWidget`]
pub struct ProfileWidgetBuilder {
    registry: ProfileRegistry,
    registry_filter: Option<RegistryFilter>,
    title_filter: Option<TitleFilter>,
    stylesheet: StyleAsset,
}

impl ProfileWidgetBuilder {
    fn new() -> Self {
        Self {
            registry: ProfileRegistry::defaults(),
            registry_filter: None,
            title_filter: None,
            stylesheet: StyleAsset::new(STYLE_HANDLE, STYLE_SRC),
        }
    }

    /// Filter applied to the default registry; its result is the widget's registry
    pub fn registry_filter<F>(mut self, filter: F) -> Self
    where
        F: FnOnce(ProfileRegistry) -> ProfileRegistry + 'static,
    {
        self.registry_filter = Some(Box::new(filter));
        self
    }

    /// Filter applied to the saved title on every render
    pub fn title_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.title_filter = Some(Arc::new(filter));
        self
    }

    /// Override where the stylesheet is served from
    pub fn stylesheet_src(mut self, src: impl Into<String>) -> Self {
        self.stylesheet.src = src.into();
        self
    }

    pub fn build(self) -> ProfileWidget {
        let registry = match self.registry_filter {
            Some(filter) => filter(self.registry),
            None => self.registry,
        };
        debug!(
            profiles = registry.len(),
            keys = ?registry.keys().collect::<Vec<_>>(),
            "Profile registry initialized"
        );

        ProfileWidget {
            descriptor: WidgetDescriptor {
                id_base: WIDGET_ID.to_string(),
                name: WIDGET_NAME.to_string(),
                description: WIDGET_DESCRIPTION.to_string(),
            },
            registry,
            title_filter: self.title_filter,
            stylesheet: self.stylesheet,
        }
    }
}

/// Widget listing links to social media profiles
pub struct ProfileWidget {
    descriptor: WidgetDescriptor,
    registry: ProfileRegistry,
    title_filter: Option<TitleFilter>,
    stylesheet: StyleAsset,
}

impl ProfileWidget {
    /// Widget with the default registry and no filters
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ProfileWidgetBuilder {
        ProfileWidgetBuilder::new()
    }

    /// Effective registry
    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    pub fn stylesheet(&self) -> &StyleAsset {
        &self.stylesheet
    }

    fn display_title(&self, title: &str) -> String {
        match &self.title_filter {
            Some(filter) => filter(title),
            None => title.to_string(),
        }
    }
}

impl Default for ProfileWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProfileWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileWidget")
            .field("descriptor", &self.descriptor)
            .field("registry", &self.registry)
            .field("title_filter", &self.title_filter.is_some())
            .field("stylesheet", &self.stylesheet)
            .finish()
    }
}

impl Widget for ProfileWidget {
    fn descriptor(&self) -> &WidgetDescriptor {
        &self.descriptor
    }

    fn render(
        &self,
        args: &WidgetArgs,
        instance: &WidgetInstance,
        styles: &mut StyleQueue,
    ) -> String {
        styles.enqueue(self.stylesheet.clone());

        let mut out = String::new();
        out.push_str(&args.before_widget);

        if let Some(title) = instance.title() {
            out.push_str(&args.before_title);
            out.push_str(&escape_html(&self.display_title(title)));
            out.push_str(&args.after_title);
        }

        out.push_str(&format!(r#"<ul class="{}">"#, LIST_CLASS));
        for entry in &self.registry {
            // Stored values are cleaned again: the instance may not have come through update().
            let href = match instance.get(&entry.key).map(clean_url) {
                Some(href) if !href.is_empty() => href,
                _ => continue,
            };
            let title = escape_attr(&entry.title);
            out.push_str(&format!(
                r#"<li><a href="{}" class="{}" title="{}">{}</a></li>"#,
                escape_attr(&href),
                escape_attr(&entry.key),
                title,
                title
            ));
        }
        out.push_str("</ul>");

        out.push_str(&args.after_widget);
        out
    }

    fn form(&self, instance: &WidgetInstance, naming: &dyn FieldNaming) -> String {
        let mut out = form_field(
            naming,
            TITLE_FIELD,
            "Title",
            instance.title().unwrap_or(DEFAULT_TITLE_PLACEHOLDER),
        );
        for entry in &self.registry {
            out.push_str(&form_field(
                naming,
                &entry.key,
                &entry.title,
                instance.get(&entry.key).unwrap_or_default(),
            ));
        }
        out
    }

    fn update(&self, submitted: &WidgetInstance, _previous: &WidgetInstance) -> WidgetInstance {
        let mut instance = WidgetInstance::new();
        instance.set(
            TITLE_FIELD,
            submitted.title().map(strip_tags).unwrap_or_default(),
        );

        for entry in &self.registry {
            let url = submitted
                .get(&entry.key)
                .map(clean_url)
                .unwrap_or_default();
            if url.is_empty() && submitted.get(&entry.key).is_some() {
                debug!(profile = %entry.key, "Submitted URL discarded by sanitization");
            }
            instance.set(entry.key.as_str(), url);
        }
        instance
    }
}

fn form_field(naming: &dyn FieldNaming, key: &str, label: &str, value: &str) -> String {
    let id = escape_attr(&naming.field_id(key));
    format!(
        r#"<p><label for="{id}">{label}:</label><input class="widefat" id="{id}" name="{name}" type="text" value="{value}"></p>"#,
        id = id,
        label = escape_html(label),
        name = escape_attr(&naming.field_name(key)),
        value = escape_attr(value),
    )
}
