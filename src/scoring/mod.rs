pub mod config;
pub mod engine;
pub mod validation;

pub use config::{ScoringWeights, TierThresholds};
pub use engine::{
    evaluate_candidate, rank_candidates, FactorContribution, MarginalValue, Tier, MAX_SCORE,
};
pub use validation::validate_weights;
