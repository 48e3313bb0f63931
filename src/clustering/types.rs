use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A group of entity mentions judged to name the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// First mention encountered for the group; names the cluster in output.
    pub representative: String,
    /// All raw mentions in the group, representative first.
    pub members: Vec<String>,
}

impl Cluster {
    pub fn new(seed: &str) -> Self {
        Cluster {
            representative: seed.to_string(),
            members: vec![seed.to_string()],
        }
    }

    pub fn push(&mut self, member: &str) {
        self.members.push(member.to_string());
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Lookup from every raw mention to its cluster's representative.
pub type EntityClusterMap = HashMap<String, String>;

/// Build the member -> representative map for a list of clusters.
pub fn entity_cluster_map(clusters: &[Cluster]) -> EntityClusterMap {
    let mut map = EntityClusterMap::new();
    for cluster in clusters {
        for member in &cluster.members {
            map.insert(member.clone(), cluster.representative.clone());
        }
    }
    map
}
