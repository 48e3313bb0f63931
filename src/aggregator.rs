use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::clustering::Clusterer;
use crate::graph::{load_graphs_from_directory, GraphFragment, Relation};
use crate::relation::{analyze_relations, merge_relations, RelationAnalysis};
use crate::{PipelineConfig, TARGET_CLUSTER, TARGET_LOAD, TARGET_PERSIST};

pub const CLUSTERED_GRAPH_FILE: &str = "clustered_kg.json";
pub const CLUSTERING_DETAILS_FILE: &str = "clustering_details.json";

/// Summary counters for one run; computed last, never fed back in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub original_entities: usize,
    pub clustered_entities: usize,
    pub original_relations: usize,
    pub merged_relations: usize,
    pub relation_analysis: RelationAnalysis,
}

/// The coalesced graph as persisted to `clustered_kg.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteredGraph {
    /// Sorted cluster representatives.
    pub entities: Vec<String>,
    /// Merged relations, deduplicated and sorted.
    pub relations: Vec<Relation>,
    /// Sorted distinct predicates of the merged relations.
    pub edges: Vec<String>,
    /// Representative mention -> every raw mention in its cluster.
    pub entity_clusters: BTreeMap<String, Vec<String>>,
    pub stats: GraphStats,
}

/// The `clustering_details.json` subset of the clustered graph.
#[derive(Serialize)]
struct ClusteringDetails<'a> {
    entity_clusters: &'a BTreeMap<String, Vec<String>>,
    stats: &'a GraphStats,
}

/// How a pipeline run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// Artifacts were written; carries the coalesced graph.
    Completed(Box<ClusteredGraph>),
    /// No valid fragments were found; nothing was written.
    EmptyInput,
}

/// Union multiple fragments and coalesce them into one canonical graph.
///
/// Entities and relations are set-unioned across fragments, so the order of
/// the input fragments does not affect the result.
pub fn cluster_knowledge_graphs(fragments: &[GraphFragment], threshold: f64) -> ClusteredGraph {
    let mut all_entities: HashSet<String> = HashSet::new();
    let mut all_relations: HashSet<Relation> = HashSet::new();
    for fragment in fragments {
        all_entities.extend(fragment.entities.iter().cloned());
        all_relations.extend(fragment.relations.iter().cloned());
    }

    info!(
        target: TARGET_CLUSTER,
        "Pre-clustering: {} entities, {} relations",
        all_entities.len(),
        all_relations.len()
    );

    let clusters = Clusterer::new(threshold).cluster(&all_entities);
    let merged = merge_relations(&all_relations, &clusters);
    let relation_analysis = analyze_relations(&merged);

    let edges: BTreeSet<String> = merged.iter().map(|r| r.predicate().to_string()).collect();
    let entity_clusters: BTreeMap<String, Vec<String>> = clusters
        .iter()
        .map(|c| (c.representative.clone(), c.members.clone()))
        .collect();
    let entities: Vec<String> = entity_clusters.keys().cloned().collect();

    let stats = GraphStats {
        original_entities: all_entities.len(),
        clustered_entities: clusters.len(),
        original_relations: all_relations.len(),
        merged_relations: merged.len(),
        relation_analysis,
    };

    ClusteredGraph {
        entities,
        relations: merged,
        edges: edges.into_iter().collect(),
        entity_clusters,
        stats,
    }
}

/// Run the full pipeline for one input directory.
///
/// Loads fragments, clusters, merges, analyzes, and writes the two output
/// artifacts. Finding no valid fragments is a distinct outcome, not an
/// error: the run stops early and nothing is written.
pub fn process_directory(config: &PipelineConfig) -> Result<RunOutcome> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "creating output directory {}",
            config.output_dir.display()
        )
    })?;

    info!(
        target: TARGET_LOAD,
        "Loading knowledge graphs from {}", config.input_dir.display()
    );
    let fragments = load_graphs_from_directory(&config.input_dir);
    if fragments.is_empty() {
        warn!(
            target: TARGET_LOAD,
            "No valid knowledge graphs found in {}", config.input_dir.display()
        );
        return Ok(RunOutcome::EmptyInput);
    }

    info!(
        target: TARGET_CLUSTER,
        "Clustering {} knowledge graphs (similarity threshold: {})",
        fragments.len(),
        config.similarity_threshold
    );
    let graph = cluster_knowledge_graphs(&fragments, config.similarity_threshold);

    let graph_path = config.output_dir.join(CLUSTERED_GRAPH_FILE);
    save_json(&graph, &graph_path)?;
    info!(target: TARGET_PERSIST, "Clustered graph saved to {}", graph_path.display());

    let details = ClusteringDetails {
        entity_clusters: &graph.entity_clusters,
        stats: &graph.stats,
    };
    let details_path = config.output_dir.join(CLUSTERING_DETAILS_FILE);
    save_json(&details, &details_path)?;
    info!(target: TARGET_PERSIST, "Clustering details saved to {}", details_path.display());

    report(&graph.stats);
    Ok(RunOutcome::Completed(Box::new(graph)))
}

fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing output artifact")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

fn report(stats: &GraphStats) {
    info!("Clusterization results:");
    info!("- Original entities: {}", stats.original_entities);
    let reduction = if stats.original_entities == 0 {
        0.0
    } else {
        100.0 * (1.0 - stats.clustered_entities as f64 / stats.original_entities as f64)
    };
    info!(
        "- Clustered entities: {} (reduction: {:.1}%)",
        stats.clustered_entities, reduction
    );
    info!("- Original relations: {}", stats.original_relations);
    info!("- Merged relations: {}", stats.merged_relations);

    info!("Top relations:");
    for (predicate, count) in &stats.relation_analysis.top_relations {
        info!("  {}: {} occurrences", predicate, count);
    }
}
