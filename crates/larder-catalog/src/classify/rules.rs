//! Ordered first-match rule cascades.
//!
//! A classifier is a slice of [`Rule`]s evaluated in order against some
//! precomputed evidence. The first rule whose predicate holds decides the
//! outcome; when none does, the cascade is still undecided and the caller
//! falls back to its default.

/// Name reported when no rule in a cascade matched.
pub const DEFAULT_RULE: &str = "default";

/// One heuristic: if `applies` holds for the evidence, the result is `outcome`.
pub struct Rule<E, T> {
    pub name: &'static str,
    pub applies: fn(&E) -> bool,
    pub outcome: T,
}

/// The outcome of a cascade and the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision<T> {
    pub rule: &'static str,
    pub value: T,
}

/// Returns the outcome of the first rule that applies, or `None` while
/// every rule is still undecided.
pub fn first_match<E, T: Copy>(rules: &[Rule<E, T>], evidence: &E) -> Option<Decision<T>> {
    rules
        .iter()
        .find(|rule| (rule.applies)(evidence))
        .map(|rule| Decision {
            rule: rule.name,
            value: rule.outcome,
        })
}

/// Runs the cascade and resolves an undecided result to `default`.
pub fn decide<E, T: Copy>(rules: &[Rule<E, T>], evidence: &E, default: T) -> Decision<T> {
    first_match(rules, evidence).unwrap_or(Decision {
        rule: DEFAULT_RULE,
        value: default,
    })
}
