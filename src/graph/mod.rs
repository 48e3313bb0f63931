pub mod loader;
pub mod types;

pub use loader::load_graphs_from_directory;
pub use types::{GraphFragment, Relation};
