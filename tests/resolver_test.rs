use globaldrive::core::resolver::normalize;
use globaldrive::{AliasTable, Country, CountryRegistry, NameResolver};

#[test]
fn test_alias_keys_resolve_to_their_target() {
    let resolver = NameResolver::builtin();

    for (external, canonical) in resolver.aliases().iter() {
        let resolved = resolver
            .resolve(external)
            .unwrap_or_else(|| panic!("alias '{}' did not resolve", external));
        assert_eq!(resolved.name, canonical, "alias '{}'", external);
    }
}

#[test]
fn test_alias_wins_over_normalization() {
    // Without its alias "Nigeria" would be captured by "Niger", which comes first.
    let registry = CountryRegistry::builtin();
    let plain = NameResolver::new(registry, AliasTable::default());
    assert_eq!(plain.resolve("Nigeria").unwrap().name, "Niger");
    assert_eq!(plain.resolve("Romania").unwrap().name, "Oman");

    let resolver = NameResolver::builtin();
    assert_eq!(resolver.resolve("Nigeria").unwrap().name, "Nigeria");
    assert_eq!(resolver.resolve("Romania").unwrap().name, "Romania");
    assert_eq!(resolver.resolve("Congo").unwrap().name, "Congo (Republic)");
}

#[test]
fn test_spellings_that_normalize_identically_resolve_identically() {
    let resolver = NameResolver::builtin();

    let groups: &[&[&str]] = &[
        &["New Zealand", "new-zealand", "NEW ZEALAND", "NewZealand"],
        &["Costa Rica", "costa_rica", "Costa-Rica"],
        &["Saudi Arabia", "Saudi. Arabia"],
        &["United Arab Emirates", "united arab emirates!"],
    ];

    for group in groups {
        let expected = normalize(group[0]);
        let first = resolver.resolve(group[0]).unwrap();
        for spelling in group.iter() {
            assert_eq!(normalize(spelling), expected);
            assert_eq!(resolver.resolve(spelling), Some(first), "spelling '{}'", spelling);
        }
    }
}

#[test]
fn test_long_form_names_match_by_containment() {
    let resolver = NameResolver::builtin();
    assert_eq!(resolver.resolve("Republic of Korea (South Korea)").unwrap().name, "South Korea");
    assert_eq!(resolver.resolve("Northern Cyprus").unwrap().name, "Cyprus");
    assert_eq!(resolver.resolve("Kingdom of Spain").unwrap().name, "Spain");
}

#[test]
fn test_unknown_name_is_no_match() {
    let resolver = NameResolver::builtin();
    assert!(resolver.resolve("Ruritania-not-real").is_none());
    assert!(resolver.resolve("Antarctica").is_none());
}

#[test]
fn test_ambiguous_name_returns_first_in_registry_order() {
    let resolver = NameResolver::builtin();
    // "korea" is contained in both "North Korea" and "South Korea".
    for _ in 0..3 {
        assert_eq!(resolver.resolve("Korea").unwrap().name, "North Korea");
    }

    let forward = CountryRegistry::from_entries(vec![
        Country::new("AA", "Upper Volta", ""),
        Country::new("BB", "Lower Volta", ""),
    ])
    .unwrap();
    let reversed = CountryRegistry::from_entries(forward.all().iter().rev().cloned().collect()).unwrap();

    let a = NameResolver::new(&forward, AliasTable::default());
    let b = NameResolver::new(&reversed, AliasTable::default());

    assert_eq!(a.resolve("Volta").unwrap().code, "AA");
    assert_eq!(b.resolve("Volta").unwrap().code, "BB");
}

#[test]
fn test_alias_with_unknown_target_is_detected() {
    let registry = CountryRegistry::builtin();
    let mut aliases = AliasTable::builtin();
    aliases.insert("Holland", "The Netherlands");

    assert_eq!(aliases.unknown_targets(registry), vec!["The Netherlands".to_string()]);

    let resolver = NameResolver::new(registry, aliases);
    assert!(resolver.resolve("Holland").is_none());
}
