use globaldrive::{
    ClickOutcome, CountryRegistry, NameResolver, Role, SelectionError, SelectionMachine,
    SelectionState,
};

fn state(origin: Option<&str>, destination: Option<&str>, active_role: Role) -> SelectionState {
    SelectionState {
        origin: origin.map(str::to_string),
        destination: destination.map(str::to_string),
        active_role,
    }
}

#[test]
fn test_first_map_click_fills_origin_and_moves_to_destination() {
    let mut machine = SelectionMachine::new();
    assert_eq!(machine.state(), &state(None, None, Role::Origin));

    assert_eq!(machine.select_via_map("France"), Ok(Role::Origin));
    assert_eq!(machine.state(), &state(Some("France"), None, Role::Destination));

    let err = machine.select_via_map("France").unwrap_err();
    assert_eq!(
        err,
        SelectionError::Collision {
            role: Role::Destination,
            country: "France".to_string()
        }
    );
    assert_eq!(machine.state(), &state(Some("France"), None, Role::Destination));
    assert_eq!(machine.notice(), Some(&err));
}

#[test]
fn test_two_clicks_select_origin_then_destination() {
    let mut machine = SelectionMachine::new();
    machine.select_via_map("France").unwrap();
    machine.select_via_map("Germany").unwrap();

    assert_eq!(
        machine.state(),
        &state(Some("France"), Some("Germany"), Role::Destination)
    );
    assert!(machine.notice().is_none());
}

#[test]
fn test_origin_click_matching_destination_is_rejected() {
    let mut machine = SelectionMachine::new();
    machine.select_via_dropdown(Role::Destination, "Germany").unwrap();

    machine.set_active_role(Role::Origin);
    assert!(machine.select_via_map("Germany").is_err());

    assert!(machine.state().origin.is_none());
    assert_eq!(machine.state().destination.as_deref(), Some("Germany"));
    assert_eq!(machine.active_role(), Role::Origin);
}

#[test]
fn test_successful_click_clears_pending_notice() {
    let mut machine = SelectionMachine::new();
    machine.select_via_map("Spain").unwrap();
    assert!(machine.select_via_map("Spain").is_err());
    assert!(machine.notice().is_some());

    machine.select_via_map("Portugal").unwrap();
    assert!(machine.notice().is_none());
}

#[test]
fn test_unresolvable_feature_is_silently_ignored() {
    let resolver = NameResolver::builtin();
    let mut machine = SelectionMachine::new();
    machine.select_via_map("Spain").unwrap();
    assert!(machine.select_via_map("Spain").is_err());
    let before = machine.state().clone();

    let outcome = machine.click_feature(&resolver, "Antarctica").unwrap();

    assert_eq!(outcome, ClickOutcome::Ignored);
    assert_eq!(machine.state(), &before);
    assert!(machine.notice().is_some());
}

#[test]
fn test_feature_click_goes_through_alias_table() {
    let resolver = NameResolver::builtin();
    let mut machine = SelectionMachine::new();

    let first = machine
        .click_feature(&resolver, "United States of America")
        .unwrap();
    let second = machine.click_feature(&resolver, "Viet Nam").unwrap();

    assert_eq!(
        first,
        ClickOutcome::Selected {
            role: Role::Origin,
            country: "United States".to_string()
        }
    );
    assert_eq!(
        second,
        ClickOutcome::Selected {
            role: Role::Destination,
            country: "Vietnam".to_string()
        }
    );
    assert!(machine
        .click_feature(&resolver, "United States")
        .is_err());
}

/// Drives the machine with a long deterministic mix of operations over a
/// small country pool and checks the origin/destination invariant after each.
#[test]
fn test_origin_never_equals_destination() {
    let registry = CountryRegistry::builtin();
    let pool: Vec<&str> = registry.all().iter().take(4).map(|c| c.name.as_str()).collect();
    let mut machine = SelectionMachine::new();

    let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
    let mut next = || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed
    };

    for _ in 0..5_000 {
        let roll = next();
        let country = pool[(roll >> 8) as usize % pool.len()];
        let role = if roll & 0x10 == 0 { Role::Origin } else { Role::Destination };

        let _ = match roll % 4 {
            0 => machine.select_via_map(country).map(|_| ()),
            1 => machine.select_via_dropdown(role, country),
            2 => {
                let other = pool[(roll >> 16) as usize % pool.len()];
                machine.apply_preset(country, other)
            }
            _ => {
                machine.set_active_role(role);
                Ok(())
            }
        };

        if let Some((origin, destination)) = machine.pair() {
            assert_ne!(origin, destination, "invariant broken in {:?}", machine.state());
        }
    }
}
