use wordbuilder_core::{Environment, EnvironmentError, Slot, Structure};

#[test]
fn lone_focus_marker_reads_before() {
    let env = Environment::new(vec![Slot::Focus]);
    assert_eq!(env.pretty().unwrap(), "before ");
}

#[test]
fn focus_after_a_bundle_reads_after() {
    let env = Environment::new(vec![Slot::features(["consonant"]), Slot::Focus]);
    assert_eq!(env.pretty().unwrap(), "after a consonant");
}

#[test]
fn vowel_initial_bundle_takes_an() {
    let env = Environment::new(vec![Slot::Focus, Slot::features(["owl"])]);
    assert_eq!(env.pretty().unwrap(), "before an owl");
}

#[test]
fn interior_focus_reads_between_and_keeps_double_space() {
    let env = Environment::new(vec![
        Slot::features(["vowel"]),
        Slot::Focus,
        Slot::features(["nasal"]),
    ]);
    assert_eq!(env.pretty().unwrap(), "between a vowel,  and a nasal");
}

#[test]
fn candidate_without_focus_marker_is_stored_invalid() {
    let env = Environment::new(vec![Slot::category("a"), Slot::category("b")]);
    assert_eq!(env.get(), &Structure::Invalid);
    assert_eq!(env.pretty(), Err(EnvironmentError::InvalidStructure));
}

#[test]
fn candidate_with_two_focus_markers_is_stored_invalid() {
    let env = Environment::new(vec![Slot::Focus, Slot::Focus]);
    assert_eq!(env.get(), &Structure::Invalid);
}

#[test]
fn reassignment_goes_through_the_same_validation() {
    let mut env = Environment::from_pattern("V _ V");
    assert!(env.get().is_valid());

    env.set(vec![Slot::Focus, Slot::Focus]);
    assert_eq!(env.get(), &Structure::Invalid);

    env.set(vec![Slot::features(["voiceless"]), Slot::Focus]);
    assert_eq!(env.pretty().unwrap(), "after a voiceless");
}

#[test]
fn slots_serialize_with_kind_tags() {
    let focus = serde_json::to_value(Slot::Focus).unwrap();
    assert_eq!(focus, serde_json::json!({ "kind": "focus" }));

    let category = serde_json::to_value(Slot::category("vowel")).unwrap();
    assert_eq!(
        category,
        serde_json::json!({ "kind": "category", "value": "vowel" }),
    );
}

#[test]
fn structures_round_trip_through_json() {
    let env = Environment::new(vec![
        Slot::features(["voiced", "plosive"]),
        Slot::Focus,
        Slot::category("vowel"),
    ]);
    let json = serde_json::to_string(&env).unwrap();
    let decoded: Environment = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, env);
    assert_eq!(decoded.pretty().unwrap(), env.pretty().unwrap());
}
