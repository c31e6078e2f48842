//! Integration tests for the profile-links binary

use super::test_utils::{stdout_of, CliEnv};

#[test]
fn test_profiles_json_lists_default_registry() {
    let env = CliEnv::new();
    let stdout = stdout_of(&env.run(&["profiles", "--format", "json"]));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["total"], 6);
    assert_eq!(parsed["profiles"][0]["key"], "feed");
    assert_eq!(parsed["profiles"][5]["key"], "twitter");
}

#[test]
fn test_save_then_render() {
    let env = CliEnv::new();
    let submitted = env.write(
        "submitted.json",
        r#"{"title":"<b>My Profiles</b>","twitter":"https://twitter.com/me","facebook":"javascript:alert(1)"}"#,
    );
    let instance = env.path("instance.json");

    let saved = env.run(&[
        "save",
        "--submitted",
        submitted.to_str().unwrap(),
        "--output",
        instance.to_str().unwrap(),
    ]);
    stdout_of(&saved);

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&instance).unwrap()).unwrap();
    assert_eq!(stored["title"], "My Profiles");
    assert_eq!(stored["twitter"], "https://twitter.com/me");
    assert_eq!(stored["facebook"], "");

    let html = stdout_of(&env.run(&["render", "--instance", instance.to_str().unwrap()]));
    assert!(html.contains("<h2 class=\"widget-title\">My Profiles</h2>"));
    assert!(html.contains("class=\"twitter\""));
    assert!(!html.contains("class=\"facebook\""));
}

#[test]
fn test_form_uses_placement_number() {
    let env = CliEnv::new();
    let stdout = stdout_of(&env.run(&["form", "--number", "5"]));
    assert!(stdout.contains("id=\"widget-social_profiles_widget-5-title\""));
    assert!(stdout.contains("value=\"Title\""));
}

#[test]
fn test_config_file_changes_registry() {
    let env = CliEnv::new();
    let config = env.write(
        "config.toml",
        "[profiles]\nremove = [\"googleplus\"]\norder = [\"twitter\"]\n",
    );
    let stdout = stdout_of(&env.run(&[
        "--config",
        config.to_str().unwrap(),
        "profiles",
        "--format",
        "json",
    ]));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["total"], 5);
    assert_eq!(parsed["profiles"][0]["key"], "twitter");
}

#[test]
fn test_invalid_instance_file_fails() {
    let env = CliEnv::new();
    let broken = env.write("broken.json", "[1, 2, 3]");
    let output = env.run(&["render", "--instance", broken.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Instance file is not a JSON object of strings"));
}

#[test]
fn test_stylesheet_command() {
    let env = CliEnv::new();
    let stdout = stdout_of(&env.run(&["stylesheet"]));
    assert!(stdout.contains(".social-media-profiles-widget-list"));
}
