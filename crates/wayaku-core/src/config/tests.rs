use super::*;

#[test]
fn test_overlay_config_default() {
    let overlay = OverlayConfig::default();
    assert_eq!(overlay.debounce_ms, 100);
}

#[test]
fn test_sweep_config_default() {
    let sweep = SweepConfig::default();
    assert!(!sweep.enabled);
    assert_eq!(sweep.interval_secs, 30);
}

#[test]
fn test_config_from_toml() {
    let toml_str = r#"
        [overlay]
        debounce_ms = 250

        [sweep]
        enabled = true
        interval_secs = 5

        [table.extra]
        "Sign Out" = "サインアウト"
    "#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.overlay.debounce_ms, 250);
    assert!(config.sweep.enabled);
    assert_eq!(config.sweep.interval_secs, 5);
    assert_eq!(
        config.table.extra.get("Sign Out").map(String::as_str),
        Some("サインアウト")
    );
}

#[test]
fn test_config_defaults_when_sections_missing() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.overlay.debounce_ms, 100);
    assert!(!config.sweep.enabled);
    assert!(config.table.extra.is_empty());
}

#[test]
fn test_sweep_interval_default_when_missing() {
    let toml_str = r#"
        [sweep]
        enabled = true
    "#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(config.sweep.enabled);
    assert_eq!(config.sweep.interval_secs, 30);
}

#[test]
fn test_load_missing_file_falls_back_to_defaults() {
    let config = load("/nonexistent/wayaku-config.toml").unwrap();
    assert_eq!(config.overlay.debounce_ms, 100);
    assert!(!config.sweep.enabled);
}

#[test]
fn test_load_malformed_file_errors() {
    let tmp = std::env::temp_dir().join("__wayaku_test_bad_config__.toml");
    std::fs::write(&tmp, "[overlay\ndebounce_ms = oops").unwrap();

    let result = load(tmp.to_str().unwrap());
    assert!(result.is_err(), "malformed toml should be a config error");
    assert!(result.unwrap_err().to_string().contains("config error"));

    let _ = std::fs::remove_file(&tmp);
}
