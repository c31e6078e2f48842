//! Integration tests for the profile links widget

mod cli_commands;
mod config_integration;
mod registry_filter;
