pub mod classifier;

pub use classifier::{
    best_column, classify, coverage_report, testable_ids, CoverageReport, MechanismStatus,
    Testability,
};
