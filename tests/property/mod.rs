//! Property-based tests for rendering and sanitization guarantees

mod widget_properties;
