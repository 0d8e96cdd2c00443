use serde::{Deserialize, Serialize};

/// Marginal-value scoring weights.
///
/// Each factor awards a fixed number of points per counted item, capped per
/// factor; the composite score is capped at 100. Every field is optional and
/// falls back to the built-in default.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   new_mechanism_points: 15
///   new_mechanism_cap: 40
///   confounder_points: 12
///   confounder_cap: 30
///   boost_points: 10
///   boost_cap: 30
///   tiers:
///     high: 70
///     moderate: 40
///     marginal: 15
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringWeights {
    /// Points per newly testable mechanism (default: 15.0)
    #[serde(default)]
    pub new_mechanism_points: Option<f64>,

    /// Cap on the new-mechanism factor (default: 40.0)
    #[serde(default)]
    pub new_mechanism_cap: Option<f64>,

    /// Points per resolved latent confounder (default: 12.0)
    #[serde(default)]
    pub confounder_points: Option<f64>,

    /// Cap on the confounder factor (default: 30.0)
    #[serde(default)]
    pub confounder_cap: Option<f64>,

    /// Points per boosted fitted edge (default: 10.0)
    #[serde(default)]
    pub boost_points: Option<f64>,

    /// Cap on the signal-boost factor (default: 30.0)
    #[serde(default)]
    pub boost_cap: Option<f64>,

    /// Composite-score thresholds for tier labels
    #[serde(default)]
    pub tiers: Option<TierThresholds>,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            new_mechanism_points: Some(15.0),
            new_mechanism_cap: Some(40.0),
            confounder_points: Some(12.0),
            confounder_cap: Some(30.0),
            boost_points: Some(10.0),
            boost_cap: Some(30.0),
            tiers: Some(TierThresholds::default()),
        }
    }
}

/// Composite-score thresholds separating tier labels.
///
/// A score at or above `high` is High, at or above `moderate` is Moderate,
/// at or above `marginal` is Marginal; below that is Minimal.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TierThresholds {
    pub high: f64,
    pub moderate: f64,
    pub marginal: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: 70.0,
            moderate: 40.0,
            marginal: 15.0,
        }
    }
}
