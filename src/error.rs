//! Error taxonomy for the mining engine

use crate::itemset::Itemset;

/// Failures raised by the mining core
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MiningError {
    /// A threshold is outside its valid range; raised before any search starts
    #[error("invalid {name} threshold {value}: {reason}")]
    InvalidThreshold {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Support is undefined over zero transactions
    #[error("transaction database is empty, support is undefined")]
    EmptyDatabase,

    /// A confidence or lift denominator is zero because a rule side never occurs
    #[error("rule side {side} has zero support")]
    DegenerateRule { side: Itemset },
}
