use lazy_static::lazy_static;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

use crate::clustering::{entity_cluster_map, Cluster};
use crate::graph::Relation;
use crate::TARGET_MERGE;

use super::MIN_PREDICATE_LEN;

lazy_static! {
    /// Non-informative predicates excluded from the merged graph.
    static ref PREDICATE_STOPLIST: HashSet<&'static str> =
        ["is", "has", "of"].iter().copied().collect();
}

/// Rewrite raw relations through the cluster map and filter out the noise.
///
/// Both endpoints resolve to their cluster representative; entities outside
/// every cluster map to themselves. A relation is dropped when its resolved
/// endpoints coincide case-insensitively (checked after resolution, so two
/// differently spelled mentions of one entity still collapse to a
/// self-loop), when its trimmed predicate is shorter than
/// `MIN_PREDICATE_LEN`, or when its lower-cased predicate is stoplisted.
/// Survivors come back deduplicated and sorted lexicographically.
pub fn merge_relations(relations: &HashSet<Relation>, clusters: &[Cluster]) -> Vec<Relation> {
    let map = entity_cluster_map(clusters);
    let mut merged = BTreeSet::new();

    for relation in relations {
        let source = map
            .get(relation.source())
            .map(String::as_str)
            .unwrap_or(relation.source());
        let target = map
            .get(relation.target())
            .map(String::as_str)
            .unwrap_or(relation.target());
        let predicate = relation.predicate();

        if source.to_lowercase() == target.to_lowercase() {
            debug!(
                target: TARGET_MERGE,
                "Dropping self-relation '{}' -> '{}'", relation.source(), relation.target()
            );
            continue;
        }
        if predicate.trim().chars().count() < MIN_PREDICATE_LEN {
            debug!(target: TARGET_MERGE, "Dropping short predicate '{}'", predicate);
            continue;
        }
        if PREDICATE_STOPLIST.contains(predicate.to_lowercase().as_str()) {
            debug!(target: TARGET_MERGE, "Dropping stoplisted predicate '{}'", predicate);
            continue;
        }

        merged.insert(Relation::new(source, predicate, target));
    }

    merged.into_iter().collect()
}
