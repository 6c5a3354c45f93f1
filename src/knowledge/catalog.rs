// Copyright 2025 Cowboy AI, LLC.

//! Built-in domain seeds
//!
//! | Seed        | Duality                  | Axioms               |
//! |-------------|--------------------------|----------------------|
//! | Accounting  | assets / liabilities     | 8 principles (95%)   |
//! | Genetics    | expression / suppression | 8 principles (95%)   |
//! | Logic       | true / false             | 8 laws (100%)        |
//! | Mathematics | abstract / concrete      | 8 axioms (100%)      |

use tracing::debug;

use super::concepts::ConceptType;
use super::knowledge_domain::{DomainSeed, DualitySeed, KnowledgeDomain};
use crate::domain::{DomainHierarchy, DomainType};
use crate::equilibrium::MetaEquilibrium;
use crate::errors::DomainResult;

/// Assets balanced against liabilities
pub const ACCOUNTING: DomainSeed = DomainSeed {
    name: "Accounting",
    domain_type: DomainType::Fundamental,
    description: "The measurement and communication of financial information",
    duality: DualitySeed {
        name: "accounting_duality",
        positive: "assets",
        negative: "liabilities",
        weight: 50.0,
    },
    axiom_type: ConceptType::Principle,
    axiom_certainty: 95.0,
    axioms: &[
        ("Accounting Equation", "Assets = Liabilities + Equity"),
        ("Double Entry", "Every transaction has two effects"),
        ("Accrual Basis", "Record when earned, not when received"),
        ("Going Concern", "Assume business continues"),
        ("Materiality", "Report significant information"),
        ("Consistency", "Use same methods over time"),
        ("Conservatism", "When uncertain, choose lower values"),
        ("Full Disclosure", "Report all relevant information"),
    ],
    fundamental_concepts: &[
        "Assets",
        "Liabilities",
        "Equity",
        "Revenue",
        "Expense",
        "Debit",
        "Credit",
        "Journal",
        "Ledger",
        "Trial Balance",
        "Income Statement",
        "Balance Sheet",
        "Cash Flow",
        "Audit",
        "GAAP",
    ],
};

/// Expression balanced against suppression
pub const GENETICS: DomainSeed = DomainSeed {
    name: "Genetics",
    domain_type: DomainType::Fundamental,
    description: "The study of heredity, genes, and genetic variation",
    duality: DualitySeed {
        name: "genetics_duality",
        positive: "expression",
        negative: "suppression",
        weight: 50.0,
    },
    axiom_type: ConceptType::Principle,
    axiom_certainty: 95.0,
    axioms: &[
        ("Mendel's First Law", "Alleles segregate during gamete formation"),
        ("Mendel's Second Law", "Genes for different traits assort independently"),
        ("Central Dogma", "Information flows from DNA to RNA to protein"),
        ("Watson-Crick Base Pairing", "A pairs with T, G pairs with C in DNA"),
        ("Semi-Conservative Replication", "Each DNA strand serves as template for new strand"),
        ("One Gene-One Polypeptide", "Each gene encodes one polypeptide chain"),
        ("Genetic Code Universality", "Same codons specify same amino acids in all organisms"),
        ("Mutation is Random", "Mutations occur randomly, not in response to need"),
    ],
    fundamental_concepts: &[
        "Gene",
        "DNA",
        "RNA",
        "Chromosome",
        "Allele",
        "Genotype",
        "Phenotype",
        "Mutation",
        "Heredity",
        "Transcription",
        "Translation",
        "Replication",
        "Recombination",
        "Genome",
        "Epigenetics",
    ],
};

/// Truth balanced against falsity
pub const LOGIC: DomainSeed = DomainSeed {
    name: "Logic",
    domain_type: DomainType::Fundamental,
    description: "The study of valid reasoning and argumentation",
    duality: DualitySeed {
        name: "logic_duality",
        positive: "true",
        negative: "false",
        weight: 50.0,
    },
    axiom_type: ConceptType::Law,
    axiom_certainty: 100.0,
    axioms: &[
        ("Law of Identity", "A is A; everything is identical to itself"),
        ("Law of Non-Contradiction", "A cannot be both A and not-A at the same time"),
        ("Law of Excluded Middle", "Either A or not-A; no third option"),
        ("Modus Ponens", "If P then Q; P; therefore Q"),
        ("Modus Tollens", "If P then Q; not Q; therefore not P"),
        ("Syllogism", "All A are B; all B are C; therefore all A are C"),
        ("Double Negation", "Not-not-A is equivalent to A"),
        ("De Morgan's Laws", "Negation distributes over conjunction and disjunction"),
    ],
    fundamental_concepts: &[
        "Proposition",
        "Argument",
        "Premise",
        "Conclusion",
        "Validity",
        "Soundness",
        "Truth",
        "Fallacy",
        "Inference",
        "Deduction",
        "Induction",
        "Negation",
        "Conjunction",
        "Disjunction",
        "Implication",
    ],
};

/// The abstract balanced against the concrete
pub const MATHEMATICS: DomainSeed = DomainSeed {
    name: "Mathematics",
    domain_type: DomainType::Fundamental,
    description: "The study of numbers, quantities, structures, and patterns",
    duality: DualitySeed {
        name: "mathematics_duality",
        positive: "abstract",
        negative: "concrete",
        weight: 50.0,
    },
    axiom_type: ConceptType::Axiom,
    axiom_certainty: 100.0,
    axioms: &[
        ("Identity", "For any value x, x = x (reflexivity)"),
        ("Non-Contradiction", "A statement cannot be both true and false"),
        ("Excluded Middle", "Every statement is either true or false"),
        ("Substitution", "Equal quantities can be substituted for each other"),
        ("Induction", "If P(0) and P(n)→P(n+1), then P(n) for all n"),
        ("Infinity", "There exists an infinite set"),
        ("Choice", "For any collection of non-empty sets, a choice function exists"),
        ("Extensionality", "Sets with the same elements are equal"),
    ],
    fundamental_concepts: &[
        "Number",
        "Set",
        "Function",
        "Relation",
        "Operation",
        "Proof",
        "Theorem",
        "Definition",
        "Structure",
        "Space",
        "Infinity",
        "Limit",
        "Continuity",
        "Derivative",
        "Integral",
    ],
};

/// Every built-in seed
pub const ALL: [&DomainSeed; 4] = [&ACCOUNTING, &GENETICS, &LOGIC, &MATHEMATICS];

/// Find a built-in seed by name, ignoring case
pub fn seed(name: &str) -> Option<&'static DomainSeed> {
    ALL.into_iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
}

/// Build every seed into one hierarchy sharing `equilibrium`
pub fn seed_hierarchy(
    name: impl Into<String>,
    seeds: &[&DomainSeed],
    equilibrium: &MetaEquilibrium,
) -> DomainResult<DomainHierarchy> {
    let mut hierarchy = DomainHierarchy::new(name);
    for seed in seeds {
        let kd = KnowledgeDomain::from_seed(seed, equilibrium.clone())?;
        hierarchy.add_root_domain(kd.into_domain());
    }
    debug!(
        hierarchy = %hierarchy.name(),
        roots = hierarchy.root_domains().len(),
        ledger = equilibrium.len(),
        "hierarchy seeded"
    );
    Ok(hierarchy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_seed_is_balanced_and_complete() {
        for s in ALL {
            assert_eq!(s.axioms.len(), 8, "{}", s.name);
            assert_eq!(s.fundamental_concepts.len(), 15, "{}", s.name);
            assert!(s.duality.weight > 0.0);
        }
    }

    #[test]
    fn seed_lookup_ignores_case() {
        assert_eq!(seed("logic").unwrap().name, "Logic");
        assert_eq!(seed("MATHEMATICS").unwrap().axiom_type, ConceptType::Axiom);
        assert!(seed("Alchemy").is_none());
    }

    #[test]
    fn seed_hierarchy_shares_one_ledger() {
        let meta = MetaEquilibrium::new();
        let h = seed_hierarchy("Knowledge", &ALL, &meta).unwrap();

        assert_eq!(h.total_domains(), 4);
        assert!(h.validate_hierarchy().all_valid);
        assert_eq!(meta.len(), 4);
        for key in [
            "Accounting_duality",
            "Genetics_duality",
            "Logic_duality",
            "Mathematics_duality",
        ] {
            assert!(meta.contains(key), "{key}");
        }
    }
}
