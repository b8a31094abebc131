use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::classification::{Complexity, ContractClassification};

/// Upper bound on how many tags one contract is asked to contain
pub const MAX_TAGS_PER_CONTRACT: usize = 5;

/// The Slither detector tags a generated contract can be labeled with.
/// Loaded once as process-wide immutable data; always larger than
/// `MAX_TAGS_PER_CONTRACT`, so sampling never fails.
pub const VULNERABILITY_TAGS: &[&str] = &[
    "abiencoderv2-array",
    "arbitrary-send-erc20",
    "arbitrary-send-erc20-permit",
    "arbitrary-send-eth",
    "array-by-reference",
    "controlled-array-length",
    "assert-state-change",
    "backdoor",
    "weak-prng",
    "boolean-cst",
    "boolean-equal",
    "shadowing-built-in",
    "cache-array-length",
    "codex",
    "constant-function-asm",
    "constant-function-state",
    "controlled-delegatecall",
    "costly-loop",
    "constable-states",
    "immutable-states",
    "cyclomatic-complexity",
    "dead-code",
    "delegatecall-loop",
    "deprecated-standards",
    "divide-before-multiply",
    "domain-separator-collision",
    "encode-packed-collision",
    "enum-conversion",
    "external-function",
    "function-init-state",
    "erc20-interface",
    "erc721-interface",
    "incorrect-exp",
    "incorrect-return",
    "incorrect-equality",
    "incorrect-unary",
    "incorrect-using-for",
    "shadowing-local",
    "locked-ether",
    "low-level-calls",
    "mapping-deletion",
    "events-access",
    "events-maths",
    "missing-inheritance",
    "missing-zero-check",
    "incorrect-modifier",
    "msg-value-loop",
    "calls-loop",
    "multiple-constructors",
    "name-reused",
    "naming-convention",
    "out-of-order-retryable",
    "variable-scope",
    "protected-vars",
    "public-mappings-nested",
    "redundant-statements",
    "reentrancy-benign",
    "reentrancy-eth",
    "reentrancy-events",
    "reentrancy-unlimited-gas",
    "reentrancy-no-eth",
    "return-bomb",
    "return-leave",
    "reused-constructor",
    "rtlo",
    "shadowing-abstract",
    "incorrect-shift",
    "shadowing-state",
    "storage-array",
    "suicidal",
    "tautological-compare",
    "timestamp",
    "too-many-digits",
    "tx-origin",
    "tautology",
    "unchecked-lowlevel",
    "unchecked-send",
    "unchecked-transfer",
    "unimplemented-functions",
    "erc20-indexed",
    "uninitialized-fptr-cst",
    "uninitialized-local",
    "uninitialized-state",
    "uninitialized-storage",
    "unprotected-upgrade",
    "unused-return",
    "unused-state",
    "var-read-using-this",
    "void-cst",
    "write-after-write",
];

/// Complexity scale offered to the generation service
pub const COMPLEXITY_LEVELS: &[Complexity] =
    &[Complexity::Low, Complexity::Medium, Complexity::High];

/// Draw a fresh classification: complexity uniformly from the scale, then
/// 1..=5 distinct tags uniformly without replacement from the catalog.
pub fn sample_classification() -> ContractClassification {
    let mut rng = rand::thread_rng();
    sample_with_rng(&mut rng)
}

/// Sampling core, split out so tests can drive it with a seeded generator
pub fn sample_with_rng<R: Rng + ?Sized>(rng: &mut R) -> ContractClassification {
    let complexity = COMPLEXITY_LEVELS[rng.gen_range(0..COMPLEXITY_LEVELS.len())];
    let count = rng.gen_range(1..=MAX_TAGS_PER_CONTRACT);
    let vulnerabilities: Vec<String> = VULNERABILITY_TAGS
        .choose_multiple(rng, count)
        .map(|tag| (*tag).to_string())
        .collect();

    // choose_multiple yields distinct elements, so the invariants of
    // ContractClassification::new hold by construction.
    ContractClassification {
        complexity,
        vulnerabilities,
    }
}
