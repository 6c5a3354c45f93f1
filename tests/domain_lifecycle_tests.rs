// Copyright 2025 Cowboy AI, LLC.

//! Domain lifecycle, relationships and hierarchy scenarios

use cim_equilibrium::{
    Domain, DomainError, DomainHierarchy, DomainRelationship, DomainState, DomainType,
    EquilibriumPolicy, MetaEquilibrium, StateTransitions,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn balanced(name: &str, domain_type: DomainType, meta: &MetaEquilibrium) -> Domain {
    let mut d = Domain::with_equilibrium(name, domain_type, "", meta.clone());
    d.set_duality("positive", 50.0, "negative", 50.0, None).unwrap();
    d
}

#[test]
fn physics_end_to_end() {
    let mut d = Domain::new("Physics", DomainType::Fundamental, "");
    d.set_duality("matter", 100.0, "antimatter", 100.0, Some("md")).unwrap();
    d.add_attribute("energy", 1000.0, "");

    let proof = d.prove_meta_meaning();
    assert_eq!(proof.domain, "Physics");
    assert!(proof.meta_valid);
    assert!(proof.duality.as_ref().unwrap().is_balanced);
    assert_eq!(proof.attributes.len(), 1);

    let value = serde_json::to_value(&proof).unwrap();
    assert_eq!(value["type"], "fundamental");
    assert_eq!(
        value["duality"],
        json!({
            "name": "md",
            "positive": { "name": "matter", "value": 100.0, "percentage": 50.0 },
            "negative": { "name": "antimatter", "value": 100.0, "percentage": 50.0 },
            "is_balanced": true
        })
    );
    assert_eq!(
        value["attributes"][0],
        json!({
            "name": "energy",
            "total": 1000.0,
            "structure": 520.0,
            "flexibility": 480.0,
            "ratio": "52/48",
            "is_operational": true
        })
    );
}

#[test]
fn nascent_active_stable_path() {
    let mut d = Domain::new("Chemistry", DomainType::Derived, "");
    assert_eq!(d.state(), DomainState::Nascent);

    let err = d.activate().unwrap_err();
    assert!(err.is_state_error());
    assert!(err.to_string().contains("no duality set"));

    d.set_duality("bonding", 10.0, "breaking", 10.0, None).unwrap();
    d.activate().unwrap();
    d.stabilize().unwrap();
    assert_eq!(d.state(), DomainState::Stable);

    let transitions: Vec<(DomainState, DomainState)> =
        d.history().iter().map(|t| (t.from, t.to)).collect();
    assert_eq!(
        transitions,
        vec![
            (DomainState::Nascent, DomainState::Active),
            (DomainState::Active, DomainState::Stable),
        ]
    );
}

#[test]
fn stabilize_outside_active_reports_state() {
    let mut d = Domain::new("Biology", DomainType::Fundamental, "");
    let err = d.stabilize().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Domain 'Biology' must be active before stabilizing (currently nascent)"
    );
}

#[test]
fn set_duality_is_legal_in_every_live_state() {
    let meta = MetaEquilibrium::new();
    let mut d = balanced("Ecology", DomainType::Emergent, &meta);
    d.activate().unwrap();
    d.stabilize().unwrap();

    d.set_duality("growth", 7.0, "decay", 7.0, Some("cycle")).unwrap();
    assert_eq!(d.state(), DomainState::Stable);
    assert_eq!(meta.parameter("Ecology_duality").unwrap().name(), "cycle");
    assert_eq!(meta.len(), 1);
}

#[test]
fn transition_to_follows_table() {
    let mut d = Domain::new("Law", DomainType::Composite, "");
    d.set_duality("rights", 1.0, "duties", 1.0, None).unwrap();

    for target in DomainState::Active.valid_transitions() {
        let mut copy = d.clone();
        copy.activate().unwrap();
        copy.transition_to(target).unwrap();
        assert_eq!(copy.state(), target);
    }

    let err = d.transition_to(DomainState::Stable).unwrap_err();
    assert!(matches!(err, DomainError::InvalidStateTransition { .. }));
    assert_eq!(d.state(), DomainState::Nascent);
}

#[test]
fn relationship_between_hierarchy_members() {
    let meta = MetaEquilibrium::new();
    let mut physics = balanced("Physics", DomainType::Fundamental, &meta);
    let chemistry = balanced("Chemistry", DomainType::Derived, &meta);

    let rel = DomainRelationship::new("physics_grounds_chemistry", &physics, &chemistry, 40.0, 40.0)
        .unwrap();
    assert_eq!(rel.prove_meta_meaning().balance, "50.00/50.00");
    physics.add_relationship(rel);

    let err = DomainRelationship::new("lopsided", &physics, &chemistry, 70.0, 30.0).unwrap_err();
    assert!(err.is_balance_violation());

    let err = DomainRelationship::new("opposed", &physics, &chemistry, -5.0, 5.0).unwrap_err();
    assert!(err.is_validation_error());
    assert!(physics.relationships().get("opposed").is_none());

    let mut h = DomainHierarchy::new("Science");
    let chemistry_id = chemistry.id();
    h.add_root_domain(physics);
    h.add_root_domain(chemistry);

    let physics = h.get_domain_by_name("Physics").unwrap();
    let target = physics.relationships()["physics_grounds_chemistry"].target();
    assert_eq!(target.id, chemistry_id);
    assert_eq!(h.get_domain(target.id).unwrap().name(), "Chemistry");
}

#[test]
fn hierarchy_validation_reports_every_domain() {
    let meta = MetaEquilibrium::new();
    let mut physics = balanced("Physics", DomainType::Fundamental, &meta);
    let mut quantum = balanced("Quantum", DomainType::Derived, &meta);
    quantum.activate().unwrap();
    physics.add_sub_domain(quantum);
    physics.add_sub_domain(Domain::new("Speculative", DomainType::Emergent, ""));

    let mut h = DomainHierarchy::new("Science");
    h.add_root_domain(physics);

    let validation = h.validate_hierarchy();
    assert_eq!(validation.total_domains, 3);
    assert_eq!(validation.root_domains, 1);
    assert!(!validation.all_valid);

    let summary: Vec<(String, bool, DomainState)> = validation
        .domains
        .iter()
        .map(|d| (d.name.clone(), d.valid, d.state))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Physics".to_string(), true, DomainState::Nascent),
            ("Quantum".to_string(), true, DomainState::Active),
            ("Speculative".to_string(), false, DomainState::Nascent),
        ]
    );

    let proof = h.prove_meta_meaning();
    let physics_proof = &proof.root_domain_proofs["Physics"];
    assert_eq!(physics_proof.sub_domains_count, 2);
    assert!(!physics_proof.sub_domains_valid);
    assert!(physics_proof.meta_valid);
    assert_eq!(h.to_string(), "DomainHierarchy(Science, domains=3)");
}

#[test]
fn ledger_audit_after_many_domains() {
    let meta = MetaEquilibrium::new();
    for name in ["Physics", "Chemistry", "Biology"] {
        balanced(name, DomainType::Fundamental, &meta);
    }

    let audit = meta.audit();
    assert_eq!(audit.total_parameters, 3);
    assert!(audit.all_balanced);
    let keys: Vec<&str> = audit.parameters.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Physics_duality", "Chemistry_duality", "Biology_duality"]);
}

#[test]
fn tolerant_ledger_still_requires_exact_dualities() {
    let policy = EquilibriumPolicy::from_json(r#"{ "balance_tolerance": 5.0 }"#).unwrap();
    let meta = MetaEquilibrium::with_policy(policy).unwrap();

    meta.register_parameter("approximate", 52.0, 48.0).unwrap();

    let mut d = Domain::with_equilibrium("Art", DomainType::Emergent, "", meta.clone());
    assert!(d.set_duality("form", 52.0, "chaos", 48.0, None).is_err());
    assert!(!meta.contains("Art_duality"));
    assert!(!meta.audit().all_balanced);
}

#[test]
fn structure_share_only_moves_the_operational_check() {
    let policy = EquilibriumPolicy::from_json(r#"{ "structure_share": 0.6 }"#).unwrap();
    let meta = MetaEquilibrium::with_policy(policy).unwrap();

    assert!(meta.validate_operational_enables_meta(60.0, 40.0));
    assert!(!meta.validate_operational_enables_meta(52.0, 48.0));

    let mut d = Domain::with_equilibrium("Music", DomainType::Emergent, "", meta);
    let attr = d.add_attribute("tempo", 100.0, "");
    assert_eq!((attr.structure(), attr.flexibility()), (52.0, 48.0));
}
