pub mod normalizer;
pub mod similarity;

pub use normalizer::normalize;
pub use similarity::{JaroWinklerScorer, SequenceScorer, SimilarityScorer};
