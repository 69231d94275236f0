pub mod traits;
pub mod heuristic;
pub mod best_first;
pub mod dijkstra;
pub mod astar;
pub mod path;
pub mod query;

pub use traits::{SearchResult, SearchStats, SearchStatus, ShortestPathAlgorithm};
pub use best_first::{BestFirstSearch, QueueKind};
pub use path::{path_cost, reconstruct};
pub use query::{run_queries, Query, QueryAnswer};
