//! Level-wise breadth-first search for frequent itemsets

use crate::candidates::{generate, prune};
use crate::data::TransactionDb;
use crate::itemset::Itemset;
use crate::support::SupportOracle;
use serde::Serialize;

/// Bookkeeping for one level of the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelStats {
    /// Itemset size examined at this level
    pub size: usize,
    /// Candidates produced by the join step (or distinct items at level 1)
    pub candidates: usize,
    /// Candidates removed by pruning before the support scan
    pub pruned: usize,
    pub frequent: usize,
    pub infrequent: usize,
}

/// Candidates split by the minimum support test
#[derive(Debug, Default)]
pub(crate) struct Partition {
    pub(crate) frequent: Vec<Itemset>,
    pub(crate) infrequent: Vec<Itemset>,
}

/// Result of a full level-wise search
#[derive(Debug, Default)]
pub struct SearchOutcome {
    /// Every frequent itemset of every level, smallest first
    pub frequent_itemsets: Vec<Itemset>,
    /// Frequent itemsets of the deepest level that produced any
    pub last_frontier: Vec<Itemset>,
    pub levels: Vec<LevelStats>,
}

/// Split candidates into frequent (`support >= minsup`) and infrequent
pub(crate) fn partition(
    candidates: Vec<Itemset>,
    oracle: &SupportOracle<'_>,
    minsup: f64,
) -> Partition {
    let mut result = Partition::default();
    for candidate in candidates {
        if oracle.support(&candidate) >= minsup {
            result.frequent.push(candidate);
        } else {
            result.infrequent.push(candidate);
        }
    }
    result
}

/// Run the Apriori search from single items upwards
///
/// Each level joins the previous frontier, prunes with the previous level's
/// infrequent itemsets and scans the survivors. The search stops at the first
/// level with no frequent itemset, keeping the previous frontier.
pub fn search(db: &TransactionDb, oracle: &SupportOracle<'_>, minsup: f64) -> SearchOutcome {
    let seeds: Vec<Itemset> = db
        .distinct_items()
        .iter()
        .map(|item| Itemset::singleton(item.as_str()))
        .collect();
    let seed_count = seeds.len();

    let Partition {
        frequent: mut frontier,
        infrequent: mut infrequent,
    } = partition(seeds, oracle, minsup);

    let mut outcome = SearchOutcome::default();
    outcome.levels.push(LevelStats {
        size: 1,
        candidates: seed_count,
        pruned: 0,
        frequent: frontier.len(),
        infrequent: infrequent.len(),
    });
    tracing::debug!(
        "level 1: {} items, {} frequent",
        seed_count,
        frontier.len()
    );

    if frontier.is_empty() {
        return outcome;
    }
    outcome.frequent_itemsets.extend(frontier.iter().cloned());

    let mut size = 1;
    loop {
        size += 1;

        let generated = generate(&frontier, size);
        let generated_count = generated.len();
        tracing::debug!(
            "level {}: pruning {} candidates against {} infrequent itemsets",
            size,
            generated_count,
            infrequent.len()
        );
        let survivors = prune(generated, &infrequent);
        let pruned = generated_count - survivors.len();

        let next = partition(survivors, oracle, minsup);
        outcome.levels.push(LevelStats {
            size,
            candidates: generated_count,
            pruned,
            frequent: next.frequent.len(),
            infrequent: next.infrequent.len(),
        });
        tracing::debug!(
            "level {}: {} candidates, {} pruned, {} frequent",
            size,
            generated_count,
            pruned,
            next.frequent.len()
        );

        if next.frequent.is_empty() {
            // the frontier still holds the last non-empty level
            break;
        }

        outcome.frequent_itemsets.extend(next.frequent.iter().cloned());
        frontier = next.frequent;
        infrequent = next.infrequent;
    }

    outcome.last_frontier = frontier;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_db() -> TransactionDb {
        TransactionDb::from_transactions(vec![
            vec!["A", "B", "C"],
            vec!["A", "B"],
            vec!["A", "C"],
            vec!["B", "C", "D"],
        ])
    }

    #[test]
    fn test_partition() {
        let db = create_test_db();
        let oracle = SupportOracle::new(&db).unwrap();
        let candidates = vec![Itemset::singleton("A"), Itemset::singleton("D")];

        let result = partition(candidates, &oracle, 0.5);
        assert_eq!(result.frequent, vec![Itemset::singleton("A")]);
        assert_eq!(result.infrequent, vec![Itemset::singleton("D")]);
    }

    #[test]
    fn test_search_stops_after_level_two() {
        let db = create_test_db();
        let oracle = SupportOracle::new(&db).unwrap();

        let outcome = search(&db, &oracle, 0.5);

        let expected: Vec<Itemset> = vec![
            Itemset::from_items(["A"]),
            Itemset::from_items(["B"]),
            Itemset::from_items(["C"]),
            Itemset::from_items(["A", "B"]),
            Itemset::from_items(["A", "C"]),
            Itemset::from_items(["B", "C"]),
        ];
        assert_eq!(outcome.frequent_itemsets, expected);
        // level 3 came back empty, so the level 2 frontier is kept
        assert_eq!(outcome.last_frontier, expected[3..].to_vec());
        assert_eq!(outcome.levels.len(), 3);
        assert_eq!(outcome.levels[2].frequent, 0);
        assert_eq!(outcome.levels[2].infrequent, 1);
    }

    #[test]
    fn test_search_prunes_with_infrequent_items() {
        let db = create_test_db();
        let oracle = SupportOracle::new(&db).unwrap();

        let outcome = search(&db, &oracle, 0.5);
        let level_one = outcome.levels[0];
        assert_eq!(level_one.candidates, 4);
        assert_eq!(level_one.infrequent, 1);
        // D is never joined because it is not in the frontier
        assert_eq!(outcome.levels[1].candidates, 3);
    }

    #[test]
    fn test_level_three_prunes_supersets_of_infrequent_pairs() {
        let db = TransactionDb::from_transactions(vec![
            vec!["A", "B", "C"],
            vec!["A", "B", "C"],
            vec!["B", "D"],
            vec!["B", "D"],
        ]);
        let oracle = SupportOracle::new(&db).unwrap();

        let outcome = search(&db, &oracle, 0.5);

        // ABD contains AD and BCD contains CD, both infrequent at level 2
        let level_three = outcome.levels[2];
        assert_eq!(level_three.candidates, 3);
        assert_eq!(level_three.pruned, 2);
        assert_eq!(level_three.frequent, 1);
        assert_eq!(
            outcome.last_frontier,
            vec![Itemset::from_items(["A", "B", "C"])]
        );
    }

    #[test]
    fn test_nothing_frequent() {
        let db = create_test_db();
        let oracle = SupportOracle::new(&db).unwrap();

        let outcome = search(&db, &oracle, 1.0);
        assert!(outcome.frequent_itemsets.is_empty());
        assert!(outcome.last_frontier.is_empty());
        assert_eq!(outcome.levels.len(), 1);
    }

    #[test]
    fn test_transactions_without_items() {
        let db = TransactionDb::from_transactions(vec![Vec::<String>::new(), Vec::new()]);
        let oracle = SupportOracle::new(&db).unwrap();

        let outcome = search(&db, &oracle, 0.5);
        assert!(outcome.frequent_itemsets.is_empty());
        assert_eq!(outcome.levels[0].candidates, 0);
    }

    #[test]
    fn test_single_full_itemset() {
        let db = TransactionDb::from_transactions(vec![vec!["X", "Y", "Z"]; 3]);
        let oracle = SupportOracle::new(&db).unwrap();

        let outcome = search(&db, &oracle, 1.0);
        assert_eq!(outcome.frequent_itemsets.len(), 7);
        assert_eq!(
            outcome.last_frontier,
            vec![Itemset::from_items(["X", "Y", "Z"])]
        );
    }
}
