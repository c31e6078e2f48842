//! Properties of save and render over arbitrary input

use profile_links::sanitize::clean_url;
use profile_links::{ProfileRegistry, ProfileWidget, StyleQueue, Widget, WidgetArgs, WidgetInstance};
use proptest::prelude::*;
use regex::Regex;

fn submitted_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    let keys = prop::sample::select(vec![
        "title",
        "feed",
        "wordpress",
        "github",
        "googleplus",
        "facebook",
        "twitter",
        "stale",
    ]);
    let values = prop_oneof![
        Just(String::new()),
        "[a-z]{1,8}\\.com/[a-z]{0,6}",
        "https://[a-z]{1,8}\\.org/[a-z&=?]{0,8}",
        "javascript:[a-z()]{0,10}",
        ".{0,24}",
    ];
    prop::collection::vec((keys, values), 0..10).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    })
}

proptest! {
    #[test]
    fn save_is_deterministic_and_shaped_by_registry(pairs in submitted_strategy()) {
        let widget = ProfileWidget::new();
        let submitted: WidgetInstance = pairs.into_iter().collect();

        let first = widget.update(&submitted, &WidgetInstance::new());
        let second = widget.update(&submitted, &first);
        prop_assert_eq!(&first, &second);

        let mut expected_keys = vec!["title".to_string()];
        expected_keys.extend(ProfileRegistry::defaults().keys().map(str::to_string));
        let keys: Vec<String> = first.keys().map(str::to_string).collect();
        prop_assert_eq!(keys, expected_keys);
    }

    #[test]
    fn rendered_output_never_contains_raw_markup(pairs in submitted_strategy()) {
        let widget = ProfileWidget::new();
        let submitted: WidgetInstance = pairs.into_iter().collect();
        let saved = widget.update(&submitted, &WidgetInstance::new());
        let html = widget.render(&WidgetArgs::bare(), &saved, &mut StyleQueue::new());

        let residue = html
            .replace("<ul class=\"social-media-profiles-widget-list\">", "")
            .replace("</ul>", "")
            .replace("<li>", "")
            .replace("</li>", "")
            .replace("</a>", "");
        let residue = strip_anchor_tags(&residue);
        prop_assert!(!residue.contains('<'), "unescaped '<' in {}", html);
        prop_assert!(!residue.contains('>'), "unescaped '>' in {}", html);
        prop_assert!(!residue.contains('"'), "unescaped '\"' in {}", html);
    }

    #[test]
    fn render_skips_empty_and_follows_registry(pairs in submitted_strategy()) {
        let widget = ProfileWidget::new();
        let submitted: WidgetInstance = pairs.into_iter().collect();
        let html = widget.render(&WidgetArgs::bare(), &submitted, &mut StyleQueue::new());

        let expected: Vec<&str> = widget
            .registry()
            .keys()
            .filter(|k| submitted.get(k).map(|v| !clean_url(v).is_empty()).unwrap_or(false))
            .collect();
        prop_assert_eq!(html.matches("<li>").count(), expected.len());

        let mut cursor = 0;
        for key in expected {
            let marker = format!("class=\"{}\"", key);
            let found = html[cursor..].find(&marker);
            prop_assert!(found.is_some(), "{} missing or out of order in {}", key, html);
            cursor += found.unwrap_or(0) + marker.len();
        }
    }

    #[test]
    fn clean_url_output_is_attribute_safe(input in ".{0,40}") {
        let cleaned = clean_url(&input);
        prop_assert!(!cleaned.contains('<'));
        prop_assert!(!cleaned.contains('>'));
        prop_assert!(!cleaned.contains('"'));
        prop_assert!(!cleaned.to_ascii_lowercase().starts_with("javascript:"));
    }
}

fn strip_anchor_tags(input: &str) -> String {
    let anchor = Regex::new(r#"<a href="[^"<>]*" class="[^"<>]*" title="[^"<>]*">"#).unwrap();
    anchor.replace_all(input, "").into_owned()
}
