pub mod traits;
pub mod directed;
pub mod generators;
pub mod loader;

pub use traits::{Graph, MutableGraph, NodeId, Weight};
pub use directed::DirectedGraph;
pub use loader::{load_edge_list, load_edge_list_file, load_edge_list_str, LoadReport};
