//! Candidate generation (join step) and anti-monotone pruning

use crate::itemset::Itemset;
use std::collections::HashSet;

/// Join the frontier with itself, keeping unions of exactly `target_size` items
///
/// Every pair of distinct frontier itemsets is unioned once. Duplicate unions
/// are dropped; output follows first-seen order.
pub fn generate(frontier: &[Itemset], target_size: usize) -> Vec<Itemset> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for (i, left) in frontier.iter().enumerate() {
        for right in &frontier[i + 1..] {
            let union = left.union(right);
            if union.len() == target_size && seen.insert(union.clone()) {
                candidates.push(union);
            }
        }
    }

    candidates
}

/// Drop every candidate that contains a known infrequent itemset
pub fn prune(candidates: Vec<Itemset>, known_infrequent: &[Itemset]) -> Vec<Itemset> {
    if known_infrequent.is_empty() {
        return candidates;
    }

    candidates
        .into_iter()
        .filter(|candidate| {
            !known_infrequent
                .iter()
                .any(|infrequent| infrequent.is_subset(candidate))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets(raw: &[&[&str]]) -> Vec<Itemset> {
        raw.iter().map(|items| Itemset::from_items(items.iter().copied())).collect()
    }

    #[test]
    fn test_generate_pairs() {
        let frontier = sets(&[&["A"], &["B"], &["C"]]);
        let candidates = generate(&frontier, 2);
        assert_eq!(candidates, sets(&[&["A", "B"], &["A", "C"], &["B", "C"]]));
    }

    #[test]
    fn test_generate_dedupes_and_filters_size() {
        let frontier = sets(&[&["A", "B"], &["A", "C"], &["B", "C"], &["D", "E"]]);
        let candidates = generate(&frontier, 3);

        // AB+AC, AB+BC and AC+BC all give ABC; unions with DE have size 4
        assert_eq!(candidates, sets(&[&["A", "B", "C"]]));
    }

    #[test]
    fn test_generate_non_unit_jump() {
        let frontier = sets(&[&["A"], &["B"], &["C"]]);
        assert!(generate(&frontier, 3).is_empty());

        let frontier = sets(&[&["A", "B"], &["C", "D"]]);
        assert_eq!(generate(&frontier, 4), sets(&[&["A", "B", "C", "D"]]));
    }

    #[test]
    fn test_generate_degenerate_frontier() {
        assert!(generate(&[], 2).is_empty());
        assert!(generate(&sets(&[&["A"]]), 2).is_empty());
    }

    #[test]
    fn test_prune_removes_supersets_of_infrequent() {
        let candidates = sets(&[&["A", "B", "C"], &["A", "B", "E"], &["B", "C", "E"]]);
        let infrequent = sets(&[&["A", "E"], &["D"]]);

        let pruned = prune(candidates, &infrequent);
        assert_eq!(pruned, sets(&[&["A", "B", "C"], &["B", "C", "E"]]));
        for candidate in &pruned {
            assert!(infrequent.iter().all(|i| !i.is_subset(candidate)));
        }
    }

    #[test]
    fn test_prune_without_information_is_identity() {
        let candidates = sets(&[&["A", "B"], &["C", "D"]]);
        assert_eq!(prune(candidates.clone(), &[]), candidates);
    }
}
