//! Support, confidence and lift computed against the transaction database

use crate::data::TransactionDb;
use crate::error::MiningError;
use crate::itemset::Itemset;
use std::cell::RefCell;
use std::collections::HashMap;

/// Counts itemset occurrences by scanning the encoded database
///
/// Counts are memoized for the lifetime of the oracle. Itemsets are immutable
/// and the database is fixed, so a cached count never goes stale.
#[derive(Debug)]
pub struct SupportOracle<'a> {
    db: &'a TransactionDb,
    cache: RefCell<HashMap<Itemset, usize>>,
}

impl<'a> SupportOracle<'a> {
    pub fn new(db: &'a TransactionDb) -> Result<Self, MiningError> {
        if db.is_empty() {
            return Err(MiningError::EmptyDatabase);
        }
        Ok(Self {
            db,
            cache: RefCell::new(HashMap::new()),
        })
    }

    pub fn total_transactions(&self) -> usize {
        self.db.total_transaction_count()
    }

    /// Number of transactions containing every item of `itemset`
    pub fn count(&self, itemset: &Itemset) -> usize {
        if let Some(&count) = self.cache.borrow().get(itemset) {
            return count;
        }
        let count = self.scan(itemset);
        self.cache.borrow_mut().insert(itemset.clone(), count);
        count
    }

    fn scan(&self, itemset: &Itemset) -> usize {
        let mut columns = Vec::with_capacity(itemset.len());
        for item in itemset {
            match self.db.item_index(item) {
                Some(col) => columns.push(col),
                None => return 0,
            }
        }

        self.db
            .encoded()
            .outer_iter()
            .filter(|row| columns.iter().all(|&col| row[col]))
            .count()
    }

    /// Fraction of transactions containing `itemset`
    pub fn support(&self, itemset: &Itemset) -> f64 {
        self.count(itemset) as f64 / self.total_transactions() as f64
    }

    /// `support(itemset) / support(body)`
    pub fn confidence(&self, itemset: &Itemset, body: &Itemset) -> Result<f64, MiningError> {
        let body_support = self.support(body);
        if body_support == 0.0 {
            return Err(MiningError::DegenerateRule { side: body.clone() });
        }
        Ok(self.support(itemset) / body_support)
    }

    /// `support(body ∪ head) / (support(body) * support(head))`
    pub fn lift(&self, body: &Itemset, head: &Itemset) -> Result<f64, MiningError> {
        let body_support = self.support(body);
        let head_support = self.support(head);
        if body_support == 0.0 {
            return Err(MiningError::DegenerateRule { side: body.clone() });
        }
        if head_support == 0.0 {
            return Err(MiningError::DegenerateRule { side: head.clone() });
        }
        Ok(self.support(&body.union(head)) / (body_support * head_support))
    }
}
