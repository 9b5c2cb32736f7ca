//! Apriori mining entry point and its configuration

use crate::data::TransactionDb;
use crate::error::MiningError;
use crate::itemset::Itemset;
use crate::rules::{derive_rules, rank_rules, AssociationRule};
use crate::search::{search, LevelStats};
use crate::support::SupportOracle;
use serde::Serialize;

/// Validated minimum support, confidence and lift
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    min_support: f64,
    min_confidence: f64,
    min_lift: f64,
}

impl Thresholds {
    /// Validate the threshold triple
    ///
    /// * `min_support` - in (0, 1]; zero would make every itemset frequent
    /// * `min_confidence` - in [0, 1]
    /// * `min_lift` - finite and non-negative
    pub fn new(min_support: f64, min_confidence: f64, min_lift: f64) -> Result<Self, MiningError> {
        if !min_support.is_finite() || min_support <= 0.0 || min_support > 1.0 {
            return Err(MiningError::InvalidThreshold {
                name: "minsup",
                value: min_support,
                reason: "must be in (0, 1]",
            });
        }
        if !min_confidence.is_finite() || !(0.0..=1.0).contains(&min_confidence) {
            return Err(MiningError::InvalidThreshold {
                name: "minconf",
                value: min_confidence,
                reason: "must be in [0, 1]",
            });
        }
        if !min_lift.is_finite() || min_lift < 0.0 {
            return Err(MiningError::InvalidThreshold {
                name: "minlift",
                value: min_lift,
                reason: "must be finite and non-negative",
            });
        }

        Ok(Self {
            min_support,
            min_confidence,
            min_lift,
        })
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    pub fn min_lift(&self) -> f64 {
        self.min_lift
    }
}

/// Output of a mining run
#[derive(Debug, Clone, Serialize)]
pub struct MiningResult {
    /// Frequent itemsets of every size, smallest first
    pub frequent_itemsets: Vec<Itemset>,
    /// Frequent itemsets of the deepest level that produced any
    pub last_level: Vec<Itemset>,
    /// Rules passing all thresholds, ranked
    pub rules: Vec<AssociationRule>,
    /// Per-level search statistics
    pub levels: Vec<LevelStats>,
}

impl MiningResult {
    /// Frequent itemsets of exactly `size` items
    pub fn itemsets_of_size(&self, size: usize) -> impl Iterator<Item = &Itemset> {
        self.frequent_itemsets
            .iter()
            .filter(move |itemset| itemset.len() == size)
    }
}

/// Mine frequent itemsets and ranked association rules
///
/// # Arguments
/// * `db` - Non-empty transaction database
/// * `thresholds` - Validated minimum support, confidence and lift
///
/// # Returns
/// * `MiningResult` with all frequent itemsets and the ranked rules
pub fn mine(db: &TransactionDb, thresholds: &Thresholds) -> crate::Result<MiningResult> {
    let oracle = SupportOracle::new(db)?;

    tracing::info!(
        "mining {} transactions over {} distinct items",
        db.total_transaction_count(),
        db.distinct_items().len()
    );

    let outcome = search(db, &oracle, thresholds.min_support());
    let mut rules = derive_rules(&outcome.frequent_itemsets, &oracle, thresholds);
    rank_rules(&mut rules);

    tracing::info!(
        "found {} frequent itemsets and {} rules in {} levels",
        outcome.frequent_itemsets.len(),
        rules.len(),
        outcome.levels.len()
    );

    Ok(MiningResult {
        frequent_itemsets: outcome.frequent_itemsets,
        last_level: outcome.last_frontier,
        rules,
        levels: outcome.levels,
    })
}
