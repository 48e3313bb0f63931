pub mod partition;
pub mod types;

pub use partition::Clusterer;
pub use types::{entity_cluster_map, Cluster, EntityClusterMap};

/// Default similarity threshold for entity clustering.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;

/// Number of leading characters compared by the prefix heuristic.
pub const PREFIX_MATCH_LEN: usize = 5;
