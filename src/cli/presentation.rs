//! CLI presentation: text and json formatters.

use crate::host::WidgetDescriptor;
use crate::registry::ProfileRegistry;
use comfy_table::Table;
use serde_json::json;

pub fn format_profiles_text(registry: &ProfileRegistry) -> String {
    if registry.is_empty() {
        return "No profiles configured.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["#", "Key", "Title"]);
    for (index, entry) in registry.iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), entry.key.clone(), entry.title.clone()]);
    }
    format!("{}\n\nTotal: {} profile(s)", table, registry.len())
}

pub fn format_profiles_json(registry: &ProfileRegistry) -> String {
    let out = json!({ "profiles": registry, "total": registry.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_widgets_text(widgets: &[&WidgetDescriptor]) -> String {
    if widgets.is_empty() {
        return "No widgets registered.".to_string();
    }
    let mut output = String::from("Registered Widgets:\n");
    for widget in widgets {
        output.push_str(&format!(
            "  {:<28} {:<24} {}\n",
            widget.id_base, widget.name, widget.description
        ));
    }
    output.push_str(&format!("\nTotal: {} widget(s)", widgets.len()));
    output
}
