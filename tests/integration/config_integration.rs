//! Integration tests for the configuration system

use profile_links::cli::RunContext;
use profile_links::config::{ConfigLoader, WidgetConfig};
use profile_links::{Widget, WidgetInstance};
use tempfile::TempDir;

#[test]
fn test_config_profiles_shape_the_widget() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("profile-links.toml");
    std::fs::write(
        &config_file,
        r#"
[profiles]
remove = ["googleplus", "feed"]
order = ["github"]

[[profiles.add]]
key = "mastodon"
title = "Mastodon"

[[profiles.add]]
key = "twitter"
title = "X"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    let widget = config.build_widget();
    let keys: Vec<&str> = widget.registry().keys().collect();
    assert_eq!(keys, vec!["github", "wordpress", "facebook", "twitter", "mastodon"]);
    assert_eq!(widget.registry().get("twitter").unwrap().title, "X");

    let saved = widget.update(
        &[("feed", "https://example.com/feed"), ("mastodon", "https://mastodon.social/@me")]
            .into_iter()
            .collect::<WidgetInstance>(),
        &WidgetInstance::new(),
    );
    assert_eq!(saved.raw("feed"), None);
    assert_eq!(saved.get("mastodon"), Some("https://mastodon.social/@me"));
}

#[test]
fn test_run_context_uses_configured_number() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("profile-links.toml");
    std::fs::write(&config_file, "[widget]\nnumber = 12\n").unwrap();

    let ctx = RunContext::new(Some(config_file.as_path())).unwrap();
    assert_eq!(ctx.config().widget.number, 12);

    let form = ctx
        .execute(&profile_links::cli::Commands::Form {
            instance: None,
            number: None,
        })
        .unwrap();
    assert!(form.contains("name=\"widget-social_profiles_widget[12][title]\""));
}

#[test]
fn test_config_round_trips_through_toml() {
    let mut config = WidgetConfig::default();
    config.profiles.remove.push("googleplus".to_string());
    let text = config.to_toml().unwrap();

    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("written.toml");
    std::fs::write(&config_file, text).unwrap();

    let loaded = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(loaded.profiles, config.profiles);
    assert_eq!(loaded.widget.number, config.widget.number);
}
