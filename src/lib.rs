//! ruleforge: frequent itemset mining and association rule learning
//!
//! This library implements the Apriori algorithm: a level-wise search for
//! frequent itemsets over a transaction database, followed by derivation and
//! ranking of association rules filtered by support, confidence and lift.

pub mod candidates;
pub mod cli;
pub mod data;
pub mod error;
pub mod itemset;
pub mod model;
pub mod rules;
pub mod search;
pub mod support;
pub mod viz;

// Re-export public items for easier access
pub use cli::Args;
pub use data::{load_transactions, parse_transactions, TransactionDb};
pub use error::MiningError;
pub use itemset::Itemset;
pub use model::{mine, MiningResult, Thresholds};
pub use rules::AssociationRule;
pub use search::LevelStats;
pub use support::SupportOracle;

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
