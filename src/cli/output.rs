//! CLI output: error mapping from domain errors to the CLI surface.

use crate::error::WidgetError;

/// Map domain errors to a message for stderr.
pub fn map_error(e: &WidgetError) -> String {
    match e {
        WidgetError::InvalidInstance(inner) => {
            format!("Instance file is not a JSON object of strings: {}", inner)
        }
        other => other.to_string(),
    }
}
