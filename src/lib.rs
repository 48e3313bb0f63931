pub mod aggregator;
pub mod clustering;
pub mod entity;
pub mod graph;
pub mod logging;
pub mod relation;

use std::path::PathBuf;

pub const TARGET_LOAD: &str = "graph_load";
pub const TARGET_CLUSTER: &str = "clustering";
pub const TARGET_MERGE: &str = "relation_merge";
pub const TARGET_PERSIST: &str = "persist";

/// Configuration for a full clustering run.
///
/// Passed explicitly into the pipeline entry point; there are no
/// process-wide defaults.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Directory scanned (recursively) for knowledge-graph fragment files.
    pub input_dir: PathBuf,
    /// Directory the two output artifacts are written to.
    pub output_dir: PathBuf,
    /// Similarity threshold for entity clustering, in (0, 1].
    pub similarity_threshold: f64,
}
