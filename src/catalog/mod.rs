pub mod families;
pub mod mechanisms;
pub mod sources;
pub mod structure;
pub mod types;

pub use families::{dose_families, dose_family, response_families, response_family};
pub use mechanisms::{mechanism, mechanisms};
pub use sources::{candidate_source, candidate_sources, CandidateSource, SourceKind};
pub use structure::{latent_nodes, node_columns, structural_edges, EdgeKind, StructuralEdge};
pub use types::{Category, DoseFamily, Mechanism, ResponseFamily, Timescale, VariableClass};
