//! Itemset value type shared by the store, the search and the rules

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A set of item labels compared by contents only
///
/// Backed by an ordered set so iteration, display and hashing never depend on
/// the order items were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Itemset(BTreeSet<String>);

impl Itemset {
    /// Build an itemset from any collection of labels; duplicates collapse
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }

    pub fn singleton(item: impl Into<String>) -> Self {
        Self(BTreeSet::from([item.into()]))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.contains(item)
    }

    /// True when every item of `self` is also in `other`
    pub fn is_subset(&self, other: &Itemset) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn is_disjoint(&self, other: &Itemset) -> bool {
        self.0.is_disjoint(&other.0)
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Items of `self` that are not in `other`
    pub fn difference(&self, other: &Itemset) -> Itemset {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    /// Every item of the set as its own size-1 itemset
    pub fn singletons(&self) -> Vec<Itemset> {
        self.0.iter().map(|item| Itemset::singleton(item.as_str())).collect()
    }
}

impl FromIterator<String> for Itemset {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Itemset {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}}")
    }
}
