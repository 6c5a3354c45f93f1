// Copyright 2025 Cowboy AI, LLC.

//! Seeded knowledge domains sharing one ledger

use cim_equilibrium::catalog::{self, ACCOUNTING, GENETICS, LOGIC, MATHEMATICS};
use cim_equilibrium::{
    seed_hierarchy, ConceptType, DomainSeed, DomainState, KnowledgeDomain, MetaEquilibrium, RelationType,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case(&ACCOUNTING, "assets", "liabilities", ConceptType::Principle, 95.0 ; "accounting")]
#[test_case(&GENETICS, "expression", "suppression", ConceptType::Principle, 95.0 ; "genetics")]
#[test_case(&LOGIC, "true", "false", ConceptType::Law, 100.0 ; "logic")]
#[test_case(&MATHEMATICS, "abstract", "concrete", ConceptType::Axiom, 100.0 ; "mathematics")]
fn seeded_domain_is_active_and_balanced(
    seed: &DomainSeed,
    positive: &str,
    negative: &str,
    kind: ConceptType,
    certainty: f64,
) {
    let kd = KnowledgeDomain::from_seed(seed, MetaEquilibrium::new()).unwrap();

    assert_eq!(kd.domain().state(), DomainState::Active);
    let duality = kd.domain().duality().unwrap();
    assert_eq!(duality.positive().name(), positive);
    assert_eq!(duality.negative().name(), negative);
    assert!(duality.is_balanced());

    assert_eq!(kd.concept_count(), 8);
    assert!(kd
        .domain()
        .concepts()
        .values()
        .all(|c| c.concept_type() == kind && c.certainty() == certainty));
    assert_eq!(kd.fundamental_concepts().len(), 15);
}

#[test]
fn mathematics_tracks_axioms() {
    let kd = KnowledgeDomain::from_seed(&MATHEMATICS, MetaEquilibrium::new()).unwrap();
    assert_eq!(kd.axiom_count(), 8);

    let identity = kd.concept_by_name("identity").unwrap();
    assert_eq!(identity.concept_type(), ConceptType::Axiom);
    assert_eq!(identity.balance(), (100.0, 0.0));
    assert!(kd.concept_by_name("Induction").is_some());

    let logic = KnowledgeDomain::from_seed(&LOGIC, MetaEquilibrium::new()).unwrap();
    assert_eq!(logic.axiom_count(), 0);
}

#[test]
fn seeds_share_one_ledger() {
    let meta = MetaEquilibrium::new();
    let accounting = KnowledgeDomain::from_seed(&ACCOUNTING, meta.clone()).unwrap();
    let genetics = KnowledgeDomain::from_seed(&GENETICS, meta.clone()).unwrap();

    assert!(accounting.domain().equilibrium().is_shared_with(&meta));
    assert!(genetics.domain().equilibrium().is_shared_with(&meta));

    let params = meta.validated_parameters();
    assert_eq!(params.len(), 2);
    assert_eq!(params["Accounting_duality"].name(), "accounting_duality");
    assert_eq!(params["Genetics_duality"].values(), (50.0, 50.0));
}

#[test]
fn relations_extend_a_seeded_domain() {
    let mut kd = KnowledgeDomain::from_seed(&LOGIC, MetaEquilibrium::new()).unwrap();
    let ponens = kd.concept_by_name("Modus Ponens").unwrap().id();
    let tollens = kd.concept_by_name("modus tollens").unwrap().id();
    let syllogism = kd.concept_by_name("Syllogism").unwrap().id();

    kd.create_relation(tollens, ponens, RelationType::DerivesFrom, 90.0);
    kd.create_relation(syllogism, ponens, RelationType::Supports, 40.0);

    assert_eq!(kd.relations_of(ponens).len(), 2);
    assert_eq!(kd.relations_of(syllogism).len(), 1);

    let stats = kd.stats();
    assert_eq!(stats.relations, 2);
    assert_eq!(stats.average_certainty, 100.0);
    assert!(stats.balanced);
}

#[test]
fn catalog_hierarchy_proof() {
    let meta = MetaEquilibrium::new();
    let hierarchy = seed_hierarchy("Knowledge", &catalog::ALL, &meta).unwrap();

    let proof = hierarchy.prove_meta_meaning();
    assert!(proof.validation.all_valid);
    assert_eq!(proof.validation.total_domains, 4);

    let names: Vec<&str> = proof.root_domain_proofs.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Accounting", "Genetics", "Logic", "Mathematics"]);

    let audit = meta.audit();
    assert!(audit.all_balanced);
    assert_eq!(audit.total_parameters, 4);
}

#[test]
fn into_domain_keeps_concepts() {
    let kd = KnowledgeDomain::from_seed(&GENETICS, MetaEquilibrium::new()).unwrap();
    let id = kd.id();
    let domain = kd.into_domain();

    assert_eq!(domain.id(), id);
    assert_eq!(domain.concepts().len(), 8);
    assert!(domain
        .concepts()
        .values()
        .all(|c| c.domain_id() == Some(id)));
}
