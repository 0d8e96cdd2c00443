pub mod summary;

pub use summary::{load_edge_summaries, EdgeSummary};
