use transcribe_relay::infrastructure::observability::TracingConfig;

#[test]
fn given_no_filter_when_creating_config_then_uses_default_filter() {
    let config = TracingConfig::new("test", false, None);
    assert_eq!(config.filter, "info,transcribe_relay=debug,tower_http=debug");
    assert_eq!(config.environment, "test");
}

#[test]
fn given_blank_filter_when_creating_config_then_uses_default_filter() {
    let config = TracingConfig::new("prod", true, Some("  ".to_string()));
    assert!(config.filter.starts_with("info"));
    assert!(config.json_format);
}

#[test]
fn given_custom_filter_when_creating_config_then_keeps_it() {
    let config = TracingConfig::new("local", false, Some("warn".to_string()));
    assert_eq!(config.filter, "warn");
}
