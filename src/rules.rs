//! Association rule derivation, scoring and ranking

use crate::candidates::generate;
use crate::error::MiningError;
use crate::itemset::Itemset;
use crate::model::Thresholds;
use crate::support::SupportOracle;
use serde::Serialize;
use std::fmt;

/// A scored rule `body -> head`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationRule {
    pub body: Itemset,
    pub head: Itemset,
    /// `body ∪ head`
    pub itemset: Itemset,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

impl AssociationRule {
    /// Build and score the rule `body -> head`
    pub fn score(
        body: Itemset,
        head: Itemset,
        oracle: &SupportOracle<'_>,
    ) -> Result<Self, MiningError> {
        let itemset = body.union(&head);
        let support = oracle.support(&itemset);
        let confidence = oracle.confidence(&itemset, &body)?;
        let lift = oracle.lift(&body, &head)?;

        Ok(Self {
            body,
            head,
            itemset,
            support,
            confidence,
            lift,
        })
    }

    /// Inclusive test against all three thresholds
    pub fn passes(&self, thresholds: &Thresholds) -> bool {
        self.confidence >= thresholds.min_confidence()
            && self.support >= thresholds.min_support()
            && self.lift >= thresholds.min_lift()
    }
}

impl fmt::Display for AssociationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.body, self.head)
    }
}

/// Every non-empty proper subset of `itemset`, smallest first
///
/// Subsets of size `n + 1` are joined from the subsets of size `n`, starting
/// from the singletons.
pub fn proper_subsets(itemset: &Itemset) -> Vec<Itemset> {
    let mut subsets = Vec::new();
    let mut level = itemset.singletons();

    for size in 1..itemset.len() {
        if size > 1 {
            level = generate(&level, size);
        }
        subsets.extend(level.iter().cloned());
    }

    subsets
}

/// Derive all rules from the frequent itemsets that clear the thresholds
///
/// Rules whose body or head never occurs are rejected with a warning.
pub fn derive_rules(
    frequent_itemsets: &[Itemset],
    oracle: &SupportOracle<'_>,
    thresholds: &Thresholds,
) -> Vec<AssociationRule> {
    let mut rules = Vec::new();

    for itemset in frequent_itemsets.iter().filter(|itemset| itemset.len() >= 2) {
        for body in proper_subsets(itemset) {
            let head = itemset.difference(&body);
            if body.is_empty() || head.is_empty() {
                continue;
            }

            match AssociationRule::score(body, head, oracle) {
                Ok(rule) if rule.passes(thresholds) => rules.push(rule),
                Ok(_) => {}
                Err(e) => tracing::warn!("rejecting rule from {}: {}", itemset, e),
            }
        }
    }

    rules
}

/// Order rules for presentation
///
/// Four stable passes: support, confidence and lift ascending, then itemset
/// size descending. The last pass is the dominant key.
pub fn rank_rules(rules: &mut [AssociationRule]) {
    rules.sort_by(|a, b| a.support.total_cmp(&b.support));
    rules.sort_by(|a, b| a.confidence.total_cmp(&b.confidence));
    rules.sort_by(|a, b| a.lift.total_cmp(&b.lift));
    rules.sort_by(|a, b| b.itemset.len().cmp(&a.itemset.len()));
}
