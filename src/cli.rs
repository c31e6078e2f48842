//! CLI domain: parse, route, output and presentation only.
//! The route table dispatches to the registered widget.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_profiles_json, format_profiles_text, format_widgets_text,
};
pub use route::RunContext;
