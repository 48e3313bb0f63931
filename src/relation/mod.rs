pub mod analyzer;
pub mod merger;

pub use analyzer::{analyze_relations, RelationAnalysis};
pub use merger::merge_relations;

/// Predicates shorter than this (after trimming) carry no signal.
pub const MIN_PREDICATE_LEN: usize = 3;

/// How many of the most frequent predicates the analyzer reports.
pub const TOP_RELATIONS: usize = 10;

/// How many of the most frequent entity pairs the analyzer reports.
pub const TOP_ENTITY_PAIRS: usize = 5;
