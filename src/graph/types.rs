use serde::{Deserialize, Serialize};

/// A subject-predicate-object fact linking two entities.
///
/// Serializes as a three-element JSON array, matching the fragment schema.
/// The derived ordering is lexicographic over (source, predicate, target).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Relation(String, String, String);

impl Relation {
    pub fn new(source: &str, predicate: &str, target: &str) -> Self {
        Relation(
            source.to_string(),
            predicate.to_string(),
            target.to_string(),
        )
    }

    pub fn source(&self) -> &str {
        &self.0
    }

    pub fn predicate(&self) -> &str {
        &self.1
    }

    pub fn target(&self) -> &str {
        &self.2
    }
}

/// One knowledge-graph fragment, typically produced per source document by
/// the upstream extractor.
///
/// A JSON file counts as a fragment only if it is an object carrying an
/// `entities` key; missing `relations`/`edges` read as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphFragment {
    pub entities: Vec<String>,
    #[serde(default)]
    pub relations: Vec<Relation>,
    #[serde(default)]
    pub edges: Vec<String>,
}
