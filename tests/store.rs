use compact_number::{
    compact_registered, locales, parse_cldr, uncompact, CompactNumberError, FormatOptions,
    LocaleData, LocaleStore, Style, DEFAULT_LOCALE,
};
use serde_json::{json, Value};

/// Trimmed CLDR `main/it/numbers.json`
fn italian_cldr() -> Value {
    json!({
        "main": {
            "it": {
                "identity": { "language": "it" },
                "numbers": {
                    "defaultNumberingSystem": "latn",
                    "decimalFormats-numberSystem-latn": {
                        "standard": "#,##0.###",
                        "long": {
                            "decimalFormat": {
                                "1000-count-one": "mille",
                                "1000-count-other": "0 mila",
                                "10000-count-one": "00 mila",
                                "10000-count-other": "00 mila",
                                "1000000-count-one": "0 milione",
                                "1000000-count-other": "0 milioni",
                                "1000000000-count-one": "0 miliardo",
                                "1000000000-count-other": "0 miliardi"
                            }
                        },
                        "short": {
                            "decimalFormat": {
                                "1000-count-one": "0",
                                "1000-count-other": "0",
                                "1000000-count-one": "0 Mln",
                                "1000000-count-other": "0 Mln",
                                "1000000000-count-one": "0 Mrd",
                                "1000000000-count-other": "0 Mrd",
                                "1000000000000000000000-count-other": "0 Z"
                            }
                        }
                    }
                }
            }
        }
    })
}

#[test]
fn test_new_store_has_only_default_locale() {
    let store = LocaleStore::new();
    assert_eq!(store.registered_locales(), vec![DEFAULT_LOCALE.to_string()]);
    assert!(store.contains("en"));
    assert!(!store.contains("es"));
}

#[test]
fn test_register_all_bundled_locales() {
    let mut store = LocaleStore::new();
    store.register_many(locales::all());
    for key in ["en", "de", "es", "fr", "ja", "zh"] {
        assert!(store.contains(key), "{key} should be registered");
    }
}

#[test]
fn test_unregistered_locale_fails_until_registered() {
    let mut store = LocaleStore::new();
    let fr = FormatOptions::new().with_locale("fr");
    assert_eq!(
        compact_registered(&store, 1234, &fr),
        Err(CompactNumberError::LocaleNotRegistered("fr".into()))
    );
    store.register(locales::fr());
    assert_eq!(compact_registered(&store, 1234, &fr).unwrap(), "1.2\u{a0}k");
}

#[test]
fn test_reset_drops_registrations() {
    let mut store = LocaleStore::new();
    store.register_many(locales::all());
    store.reset();
    assert_eq!(store.registered_locales(), vec!["en".to_string()]);
    assert_eq!(
        compact_registered(&store, 1234, &FormatOptions::new().with_locale("de")),
        Err(CompactNumberError::LocaleNotRegistered("de".into()))
    );
}

#[test]
fn test_reset_restores_overridden_default() {
    let mut store = LocaleStore::new();
    let mut data = LocaleData::new();
    let custom = locales::de().get("de").cloned().unwrap();
    data.insert("en", custom);
    store.register(data);
    assert_eq!(
        compact_registered(&store, 1234, &FormatOptions::default()).unwrap(),
        "1.2 Tsd."
    );

    store.reset();
    assert_eq!(
        compact_registered(&store, 1234, &FormatOptions::default()).unwrap(),
        "1.2K"
    );
}

#[test]
fn test_reregistration_refreshes_parse_symbols() {
    let mut store = LocaleStore::new();
    assert_eq!(uncompact(&store, "1.2K", "en"), Ok(1200.0));

    let mut data = LocaleData::new();
    data.insert("en", locales::de().get("de").cloned().unwrap());
    store.register(data);
    assert_eq!(
        uncompact(&store, "1.2K", "en"),
        Err(CompactNumberError::UnknownSymbol("k".into()))
    );
    assert_eq!(uncompact(&store, "1.2 Tsd.", "en"), Ok(1200.0));
}

#[test]
fn test_cldr_ingestion() {
    let mut store = LocaleStore::new();
    store.register_from_cldr(&italian_cldr()).unwrap();

    let short = FormatOptions::new().with_locale("it");
    // Bare "0" templates render without a symbol
    assert_eq!(compact_registered(&store, 1234, &short).unwrap(), "1234");
    assert_eq!(compact_registered(&store, 2_500_000, &short).unwrap(), "2.5 Mln");

    let long = short.with_style(Style::Long);
    assert_eq!(compact_registered(&store, 3_000_000, &long).unwrap(), "3 milioni");
    assert_eq!(compact_registered(&store, 1_000_000, &long).unwrap(), "1 milione");

    assert_eq!(uncompact(&store, "4 Mrd", "it"), Ok(4_000_000_000.0));
    assert_eq!(uncompact(&store, "2 miliardi", "it-CH"), Ok(2_000_000_000.0));
}

#[test]
fn test_cldr_drops_unsafe_divisors() {
    let data = parse_cldr(&italian_cldr()).unwrap();
    let it = data.get("it").unwrap();
    let short = it.rules(Style::Short);
    assert_eq!(short.len(), 3);
    assert_eq!(short.last().unwrap().divisor, 1_000_000_000);
}

#[test]
fn test_cldr_without_placeholder_renders_literal() {
    let data = parse_cldr(&italian_cldr()).unwrap();
    let it = data.get("it").unwrap();
    let thousand = &it.rules(Style::Long)[0];
    assert_eq!(thousand.format.one.pattern(), "mille");
    assert_eq!(thousand.format.one.digits(), 0);
}

#[test]
fn test_cldr_many_and_invalid_documents() {
    let mut store = LocaleStore::new();
    let skipped = json!({ "supplemental": { "version": "44" } });
    store
        .register_from_cldr_many([&skipped, &italian_cldr()])
        .unwrap();
    assert!(store.contains("it"));

    let broken = json!({ "main": { "xx": { "numbers": {} } } });
    assert!(matches!(
        store.register_from_cldr(&broken),
        Err(CompactNumberError::InvalidLocaleData(_))
    ));
}

#[test]
fn test_locale_data_json_roundtrip_through_store() {
    let json = locales::es().to_json().unwrap();
    let mut store = LocaleStore::new();
    store.register(LocaleData::from_json(&json).unwrap());
    assert_eq!(
        compact_registered(&store, 1234, &FormatOptions::new().with_locale("es")).unwrap(),
        "1.2\u{a0}mil"
    );
}

#[test]
fn test_unordered_rules_rejected() {
    let err = LocaleData::from_json(
        r#"{ "xx": { "locale": "xx", "numbers": { "decimal": {
            "short": [
                [1000000, { "one": ["0M", 1], "other": ["0M", 1] }],
                [1000, { "one": ["0K", 1], "other": ["0K", 1] }]
            ],
            "long": []
        } } } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, CompactNumberError::InvalidLocaleData(_)));
}

#[test]
fn test_cloned_store_is_independent() {
    let mut original = LocaleStore::new();
    let snapshot = original.clone();
    original.register(locales::ja());
    assert!(original.contains("ja"));
    assert!(!snapshot.contains("ja"));
}
