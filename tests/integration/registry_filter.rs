//! Integration tests for registry extension through the builder

use super::test_utils::{instance, render_bare, rendered_keys};
use profile_links::{ProfileRegistry, ProfileWidget, Widget, WidgetFieldNames, WidgetInstance};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_removed_key_is_neither_saved_nor_rendered() {
    let widget = ProfileWidget::builder()
        .registry_filter(|mut registry| {
            registry.remove("googleplus");
            registry
        })
        .build();

    let stale = instance(&[("googleplus", "https://plus.google.com/+me")]);
    assert!(rendered_keys(&render_bare(&widget, &stale)).is_empty());

    let saved = widget.update(&stale, &WidgetInstance::new());
    assert_eq!(saved.raw("googleplus"), None);
    assert_eq!(saved.len(), 6);
}

#[test]
fn test_added_and_reordered_profiles() {
    let widget = ProfileWidget::builder()
        .registry_filter(|mut registry| {
            registry.insert("mastodon", "Mastodon");
            registry.reorder(&["mastodon", "twitter"]);
            registry
        })
        .build();

    let data = instance(&[
        ("github", "https://github.com/me"),
        ("twitter", "https://twitter.com/me"),
        ("mastodon", "https://mastodon.social/@me"),
    ]);
    let html = render_bare(&widget, &data);
    assert_eq!(rendered_keys(&html), vec!["mastodon", "twitter", "github"]);
    assert!(html.contains("title=\"Mastodon\">Mastodon</a>"));

    let form = widget.form(&data, &WidgetFieldNames::new("social_profiles_widget", 1));
    let mastodon = form.find("[mastodon]").unwrap();
    let github = form.find("[github]").unwrap();
    assert!(mastodon < github);
}

#[test]
fn test_replacement_registry() {
    let widget = ProfileWidget::builder()
        .registry_filter(|_| {
            let mut registry = ProfileRegistry::new();
            registry.insert("github", "Code");
            registry
        })
        .build();
    assert_eq!(widget.registry().len(), 1);

    let html = render_bare(
        &widget,
        &instance(&[
            ("github", "https://github.com/me"),
            ("twitter", "https://twitter.com/me"),
        ]),
    );
    assert_eq!(rendered_keys(&html), vec!["github"]);
    assert!(html.contains(">Code</a>"));
}

#[test]
fn test_registry_filter_runs_once_per_construction() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let widget = ProfileWidget::builder()
        .registry_filter(move |registry| {
            counter.set(counter.get() + 1);
            registry
        })
        .build();

    let data = instance(&[("feed", "/feed/")]);
    for _ in 0..3 {
        render_bare(&widget, &data);
        widget.update(&data, &WidgetInstance::new());
    }
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_registry_order_property_for_all_rotations() {
    let keys: Vec<String> = ProfileRegistry::defaults()
        .keys()
        .map(str::to_string)
        .collect();
    let data: WidgetInstance = keys
        .iter()
        .filter(|k| k.as_str() != "wordpress")
        .map(|k| (k.clone(), format!("https://example.com/{}", k)))
        .collect();

    for shift in 0..keys.len() {
        let mut order = keys.clone();
        order.rotate_left(shift);
        let expected: Vec<String> = order
            .iter()
            .filter(|k| k.as_str() != "wordpress")
            .cloned()
            .collect();

        let widget = ProfileWidget::builder()
            .registry_filter(move |mut registry| {
                registry.reorder(&order[..]);
                registry
            })
            .build();
        assert_eq!(rendered_keys(&render_bare(&widget, &data)), expected);
    }
}
