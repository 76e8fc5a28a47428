use transcribe_relay::domain::ApiCredential;

#[test]
fn given_blank_secret_when_creating_credential_then_returns_none() {
    assert!(ApiCredential::new("").is_none());
    assert!(ApiCredential::new("   ").is_none());
}

#[test]
fn given_padded_secret_when_creating_credential_then_trims() {
    let credential = ApiCredential::new("  sk-test  ").unwrap();
    assert_eq!(credential.expose(), "sk-test");
}

#[test]
fn given_credential_when_debug_formatting_then_secret_is_redacted() {
    let credential = ApiCredential::new("sk-very-secret").unwrap();
    let debug = format!("{:?}", credential);
    assert!(!debug.contains("sk-very-secret"));
    assert!(debug.contains("REDACTED"));
}
