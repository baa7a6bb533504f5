use super::*;

#[test]
fn test_lookup_exact_match() {
    let table = TranslationTable::builtin();
    assert_eq!(table.lookup("Models"), Some("モデル"));
    assert_eq!(table.lookup("Virtual Keys"), Some("バーチャルキー"));
}

#[test]
fn test_lookup_trims_surrounding_whitespace() {
    let table = TranslationTable::builtin();
    assert_eq!(table.lookup("  Usage  "), Some("使用状況"));
    assert_eq!(table.lookup("\n\tTeams "), Some("チーム"));
}

#[test]
fn test_lookup_is_case_sensitive() {
    let table = TranslationTable::builtin();
    assert_eq!(table.lookup("models"), None);
    assert_eq!(table.lookup("MODELS"), None);
}

#[test]
fn test_lookup_no_partial_match() {
    let table = TranslationTable::builtin();
    assert_eq!(
        table.lookup("Models and more"),
        None,
        "longer phrases containing a key should not match"
    );
}

#[test]
fn test_translate_hit() {
    let table = TranslationTable::builtin();
    assert_eq!(table.translate("Create New Key"), "新しいキーを作成");
}

#[test]
fn test_translate_identity_fallback() {
    let table = TranslationTable::builtin();
    assert_eq!(table.translate("Unmapped Label"), "Unmapped Label");
    // The fallback returns the input as given, untrimmed.
    assert_eq!(table.translate("  Unmapped  "), "  Unmapped  ");
}

#[test]
fn test_values_keep_internal_whitespace() {
    let table = TranslationTable::builtin();
    assert_eq!(
        table.lookup("API Reference"),
        Some("API リファレンス"),
        "internal whitespace in the value should be preserved"
    );
}

#[test]
fn test_empty_and_blank_phrases_miss() {
    let table = TranslationTable::builtin();
    assert_eq!(table.lookup(""), None);
    assert_eq!(table.lookup("   "), None);
    assert_eq!(table.translate(""), "");
}

#[test]
fn test_builtin_catalog_complete() {
    let table = TranslationTable::builtin();
    assert_eq!(table.len(), 62);
    for phrase in [
        "Virtual Keys",
        "Create New Key",
        "Key ID",
        "No data",
        "Copy API Key",
    ] {
        assert!(
            table.lookup(phrase).is_some(),
            "builtin phrase '{phrase}' should be mapped"
        );
    }
}

#[test]
fn test_extras_merge_and_override() {
    let mut config = TableConfig::default();
    config.extra.insert("Sign Out".into(), "サインアウト".into());
    config.extra.insert(" Models ".into(), "モデル一覧".into());
    let table = TranslationTable::new(&config);
    assert_eq!(table.lookup("Sign Out"), Some("サインアウト"));
    assert_eq!(
        table.lookup("Models"),
        Some("モデル一覧"),
        "an extra with a trimmed builtin key should override it"
    );
    assert_eq!(table.len(), 63);
}

#[test]
fn test_blank_extra_keys_ignored() {
    let mut config = TableConfig::default();
    config.extra.insert("   ".into(), "無".into());
    let table = TranslationTable::new(&config);
    assert_eq!(table.len(), 62);
    assert_eq!(
        table.lookup("   "),
        None,
        "a blank key would make every blank leaf rewrite"
    );
}

#[test]
fn test_builtin_has_no_colliding_values() {
    let table = TranslationTable::builtin();
    assert!(table.colliding_values().is_empty());
}

#[test]
fn test_to_json_sorted_pairs() {
    let table = TranslationTable::builtin();
    let json = table.to_json().unwrap();
    assert!(json.contains("\"Models\": \"モデル\""));
    let api_key = json.find("\"API Key\"").unwrap();
    let virtual_keys = json.find("\"Virtual Keys\"").unwrap();
    assert!(api_key < virtual_keys, "keys should be sorted");
}

#[test]
fn test_colliding_values_detected() {
    let mut config = TableConfig::default();
    config.extra.insert("Alpha".into(), "Beta".into());
    config.extra.insert("Beta".into(), "Gamma".into());
    let table = TranslationTable::new(&config);
    assert_eq!(
        table.colliding_values(),
        vec![("Alpha", "Beta")],
        "the value 'Beta' is itself a key"
    );
}
