use std::collections::HashSet;
use tracing::debug;

use crate::entity::normalizer::normalize;
use crate::entity::similarity::{SequenceScorer, SimilarityScorer};
use crate::TARGET_CLUSTER;

use super::types::Cluster;
use super::PREFIX_MATCH_LEN;

/// Greedy single-pass entity clusterer.
///
/// Entities are visited in lexicographic order; each unconsumed entity opens
/// a cluster and claims every later unconsumed entity whose normalized form
/// matches its own. The result is a partition of the input. Which mention of
/// a group becomes the representative depends on sort order, and the
/// first-token and prefix heuristics can pull in unrelated entities sharing a
/// common lead; no attempt is made at a globally optimal grouping.
pub struct Clusterer {
    threshold: f64,
    scorer: Box<dyn SimilarityScorer>,
}

impl Clusterer {
    pub fn new(threshold: f64) -> Self {
        Clusterer {
            threshold,
            scorer: Box::new(SequenceScorer),
        }
    }

    /// Replace the scorer backing the similarity heuristic.
    pub fn with_scorer(mut self, scorer: Box<dyn SimilarityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Partition `entities` into clusters.
    ///
    /// Every input entity lands in exactly one cluster and the union of all
    /// members is the input set.
    pub fn cluster(&self, entities: &HashSet<String>) -> Vec<Cluster> {
        // Sort so the scan order does not depend on how the set happened to
        // store its elements; reruns over identical input are identical.
        let mut ordered: Vec<&str> = entities.iter().map(String::as_str).collect();
        ordered.sort_unstable();

        let normalized: Vec<String> = ordered.iter().map(|e| normalize(e)).collect();
        let mut consumed = vec![false; ordered.len()];
        let mut clusters = Vec::new();

        for i in 0..ordered.len() {
            if consumed[i] {
                continue;
            }
            consumed[i] = true;
            let mut cluster = Cluster::new(ordered[i]);

            for j in i + 1..ordered.len() {
                if consumed[j] {
                    continue;
                }
                if self.matches(&normalized[i], &normalized[j]) {
                    debug!(
                        target: TARGET_CLUSTER,
                        "'{}' joins cluster '{}'", ordered[j], ordered[i]
                    );
                    cluster.push(ordered[j]);
                    consumed[j] = true;
                }
            }
            clusters.push(cluster);
        }
        clusters
    }

    /// A candidate joins the open cluster if any heuristic holds against the
    /// cluster's seed, compared on normalized forms.
    fn matches(&self, seed: &str, candidate: &str) -> bool {
        self.scorer.ratio(seed, candidate) >= self.threshold
            || seed.split_whitespace().next() == candidate.split_whitespace().next()
            || seed
                .chars()
                .take(PREFIX_MATCH_LEN)
                .eq(candidate.chars().take(PREFIX_MATCH_LEN))
    }
}
