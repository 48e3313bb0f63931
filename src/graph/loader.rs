use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::TARGET_LOAD;

use super::types::GraphFragment;

/// Load every knowledge-graph fragment found under `dir`, recursively.
///
/// Only `.json` files are considered, and files named `aggregated*` are
/// skipped (the producer's own roll-up outputs). A file that cannot be read
/// or does not parse as a fragment is logged and skipped; an unreadable
/// directory yields no fragments rather than an error. Traversal is sorted
/// so the load order is stable across runs.
pub fn load_graphs_from_directory(dir: &Path) -> Vec<GraphFragment> {
    let mut fragments = Vec::new();
    walk(dir, &mut fragments);
    fragments
}

fn walk(dir: &Path, fragments: &mut Vec<GraphFragment>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(
                target: TARGET_LOAD,
                "Error reading directory {}: {}", dir.display(), err
            );
            return;
        }
    };

    let mut paths: Vec<_> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
    paths.sort();

    for path in paths {
        if path.is_dir() {
            walk(&path, fragments);
            continue;
        }
        if path.extension().map_or(true, |ext| ext != "json") {
            continue;
        }
        let skip = path
            .file_name()
            .and_then(|name| name.to_str())
            .map_or(false, |name| name.starts_with("aggregated"));
        if skip {
            continue;
        }

        match load_fragment(&path) {
            Ok(fragment) => {
                info!(target: TARGET_LOAD, "Loaded graph from {}", path.display());
                fragments.push(fragment);
            }
            Err(err) => {
                warn!(target: TARGET_LOAD, "Error loading {}: {}", path.display(), err);
            }
        }
    }
}

fn load_fragment(path: &Path) -> anyhow::Result<GraphFragment> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_loads_fragments_and_skips_the_rest() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        fs::write(
            root.join("one.json"),
            r#"{"entities": ["Il Cane"], "relations": [["Il Cane", "mangia", "carne"]], "edges": ["mangia"]}"#,
        )
        .unwrap();
        // Valid fragment in a nested directory.
        fs::create_dir(root.join("nested")).unwrap();
        fs::write(root.join("nested/two.json"), r#"{"entities": ["Gatto"]}"#).unwrap();
        // Not a fragment: no entities key.
        fs::write(root.join("bad_shape.json"), r#"{"relations": []}"#).unwrap();
        // Not JSON at all.
        fs::write(root.join("broken.json"), "{not json").unwrap();
        // Wrong extension and producer roll-up.
        fs::write(root.join("notes.txt"), "ignore me").unwrap();
        fs::write(root.join("aggregated_kg.json"), r#"{"entities": []}"#).unwrap();

        let fragments = load_graphs_from_directory(root);
        assert_eq!(fragments.len(), 2);

        let entities: Vec<_> = fragments
            .iter()
            .flat_map(|f| f.entities.iter().cloned())
            .collect();
        assert!(entities.contains(&"Il Cane".to_string()));
        assert!(entities.contains(&"Gatto".to_string()));
    }

    #[test]
    fn test_missing_directory_yields_nothing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does_not_exist");
        assert!(load_graphs_from_directory(&missing).is_empty());
    }
}
