use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::graph::Relation;

use super::{TOP_ENTITY_PAIRS, TOP_RELATIONS};

/// Frequency summary over the merged relation set; output-only, never fed
/// back into the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationAnalysis {
    /// The most frequent predicates (lower-cased) with their counts.
    pub top_relations: Vec<(String, usize)>,
    /// The most frequent (source, target) pairs (lower-cased) with counts.
    pub common_entity_pairs: Vec<((String, String), usize)>,
}

/// Count predicate and entity-pair frequencies, case-insensitively.
///
/// Counting preserves first-encounter order and the descending sort is
/// stable, so equally frequent keys come out in the order the scan met them;
/// no secondary ordering is imposed.
pub fn analyze_relations(relations: &[Relation]) -> RelationAnalysis {
    let mut predicate_counts: Vec<(String, usize)> = Vec::new();
    let mut predicate_index: HashMap<String, usize> = HashMap::new();
    let mut pair_counts: Vec<((String, String), usize)> = Vec::new();
    let mut pair_index: HashMap<(String, String), usize> = HashMap::new();

    for relation in relations {
        let predicate = relation.predicate().to_lowercase();
        match predicate_index.get(&predicate) {
            Some(&slot) => predicate_counts[slot].1 += 1,
            None => {
                predicate_index.insert(predicate.clone(), predicate_counts.len());
                predicate_counts.push((predicate, 1));
            }
        }

        let pair = (
            relation.source().to_lowercase(),
            relation.target().to_lowercase(),
        );
        match pair_index.get(&pair) {
            Some(&slot) => pair_counts[slot].1 += 1,
            None => {
                pair_index.insert(pair.clone(), pair_counts.len());
                pair_counts.push((pair, 1));
            }
        }
    }

    predicate_counts.sort_by(|a, b| b.1.cmp(&a.1));
    pair_counts.sort_by(|a, b| b.1.cmp(&a.1));
    predicate_counts.truncate(TOP_RELATIONS);
    pair_counts.truncate(TOP_ENTITY_PAIRS);

    RelationAnalysis {
        top_relations: predicate_counts,
        common_entity_pairs: pair_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_are_case_insensitive() {
        let relations = vec![
            Relation::new("Roma", "LIVES_IN", "Italia"),
            Relation::new("Milano", "lives_in", "italia"),
        ];
        let analysis = analyze_relations(&relations);

        assert_eq!(analysis.top_relations, vec![("lives_in".to_string(), 2)]);
        assert_eq!(
            analysis.common_entity_pairs,
            vec![
                (("roma".to_string(), "italia".to_string()), 1),
                (("milano".to_string(), "italia".to_string()), 1),
            ]
        );
    }

    #[test]
    fn test_sorted_descending_by_count() {
        let mut relations = Vec::new();
        for i in 0..3 {
            relations.push(Relation::new(&format!("a{}", i), "mangia", "b"));
        }
        relations.push(Relation::new("a", "caccia", "b"));

        let analysis = analyze_relations(&relations);
        assert_eq!(
            analysis.top_relations,
            vec![("mangia".to_string(), 3), ("caccia".to_string(), 1)]
        );
    }

    #[test]
    fn test_output_is_capped() {
        let mut relations = Vec::new();
        for i in 0..12 {
            relations.push(Relation::new(
                &format!("src{}", i),
                &format!("predicate{}", i),
                &format!("tgt{}", i),
            ));
        }
        let analysis = analyze_relations(&relations);

        assert_eq!(analysis.top_relations.len(), TOP_RELATIONS);
        assert_eq!(analysis.common_entity_pairs.len(), TOP_ENTITY_PAIRS);
    }

    #[test]
    fn test_empty_input() {
        let analysis = analyze_relations(&[]);
        assert!(analysis.top_relations.is_empty());
        assert!(analysis.common_entity_pairs.is_empty());
    }
}
