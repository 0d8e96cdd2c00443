//! Marginal-value scoring: what a candidate source would add on top of the
//! columns already available.
//!
//! Three factors, each capped, composite capped at 100:
//! - newly testable mechanisms
//! - latent confounders the candidate's columns would observe
//! - already-fitted edges the candidate's data would sharpen

use std::collections::HashSet;

use crate::catalog::{self, CandidateSource, Category};
use crate::coverage::testable_ids;
use crate::edges::EdgeSummary;

use super::config::{ScoringWeights, TierThresholds};

pub const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    High,
    Moderate,
    Marginal,
    Minimal,
}

impl Tier {
    pub fn from_score(score: f64, thresholds: &TierThresholds) -> Self {
        if score >= thresholds.high {
            Tier::High
        } else if score >= thresholds.moderate {
            Tier::Moderate
        } else if score >= thresholds.marginal {
            Tier::Marginal
        } else {
            Tier::Minimal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::High => "High",
            Tier::Moderate => "Moderate",
            Tier::Marginal => "Marginal",
            Tier::Minimal => "Minimal",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FactorContribution {
    pub label: String,       // e.g. "New mechanisms", "Confounders resolved"
    pub description: String, // e.g. "4 newly testable (+15 each, cap 40)"
    pub points: f64,
}

#[derive(Debug, Clone)]
pub struct MarginalValue {
    pub source: &'static CandidateSource,
    pub score: f64,
    pub tier: Tier,
    /// Mechanism ids newly testable with this source, in catalog order.
    pub unlocked: Vec<&'static str>,
    /// Latent confounder nodes this source would observe.
    pub resolved: Vec<&'static str>,
    /// Edge keys of fitted edges this source would sharpen.
    pub boosted: Vec<String>,
    pub factors: Vec<FactorContribution>,
}

/// Latent nodes a source observes directly, beyond what column naming reveals.
fn resolved_by_rule(source_id: &str) -> &'static [&'static str] {
    match source_id {
        "cgm" => &["insulin_sensitivity"],
        "food_log" => &["energy_expenditure"],
        "dexa_scan" => &["leptin"],
        _ => &[],
    }
}

/// Categories whose fitted edges a source's extra data would sharpen.
fn boosted_categories(source_id: &str) -> &'static [Category] {
    match source_id {
        "autosleep" | "oura_ring" => &[Category::Sleep, Category::Recovery],
        "hrv_chest_strap" | "apple_watch" => &[Category::Recovery],
        "gps_watch" => &[Category::Cardio, Category::Recovery],
        "cgm" | "food_log" => &[Category::Metabolic],
        _ => &[],
    }
}

/// Score one candidate against the currently available columns.
pub fn evaluate_candidate(
    source: &'static CandidateSource,
    available: &HashSet<String>,
    summaries: &[EdgeSummary],
    weights: &ScoringWeights,
) -> MarginalValue {
    let defaults = ScoringWeights::default();
    let new_points = weights
        .new_mechanism_points
        .or(defaults.new_mechanism_points)
        .unwrap_or(15.0);
    let new_cap = weights
        .new_mechanism_cap
        .or(defaults.new_mechanism_cap)
        .unwrap_or(40.0);
    let conf_points = weights
        .confounder_points
        .or(defaults.confounder_points)
        .unwrap_or(12.0);
    let conf_cap = weights
        .confounder_cap
        .or(defaults.confounder_cap)
        .unwrap_or(30.0);
    let boost_points = weights.boost_points.or(defaults.boost_points).unwrap_or(10.0);
    let boost_cap = weights.boost_cap.or(defaults.boost_cap).unwrap_or(30.0);
    let thresholds = weights.tiers.or(defaults.tiers).unwrap_or_default();

    let new_columns: Vec<&'static str> = source
        .columns
        .iter()
        .filter(|c| !available.contains(**c))
        .copied()
        .collect();

    // A source whose columns are all already available adds nothing.
    if new_columns.is_empty() {
        return MarginalValue {
            source,
            score: 0.0,
            tier: Tier::from_score(0.0, &thresholds),
            unlocked: Vec::new(),
            resolved: Vec::new(),
            boosted: Vec::new(),
            factors: Vec::new(),
        };
    }

    let before = testable_ids(available);
    let mut simulated = available.clone();
    for col in &new_columns {
        simulated.insert(col.to_string());
    }
    let after = testable_ids(&simulated);

    // Catalog order keeps the listing stable across runs.
    let unlocked: Vec<&'static str> = catalog::mechanisms()
        .iter()
        .map(|m| m.id)
        .filter(|id| after.contains(id) && !before.contains(id))
        .collect();

    let resolved: Vec<&'static str> = catalog::latent_nodes()
        .into_iter()
        .filter(|node| {
            resolved_by_rule(source.id).contains(node)
                || new_columns.iter().any(|c| c.contains(node))
        })
        .collect();

    let boost_cats = boosted_categories(source.id);
    let mut boosted = Vec::new();
    for summary in summaries {
        if summary.degenerate {
            continue;
        }
        let by_category = summary
            .category()
            .map(|c| boost_cats.contains(&c))
            .unwrap_or(false);
        let by_family = summary
            .response_family
            .as_deref()
            .and_then(catalog::response_family)
            .map(|fam| fam.columns.iter().any(|c| new_columns.contains(c)))
            .unwrap_or(false);
        if (by_category || by_family) && !boosted.contains(&summary.edge_key) {
            boosted.push(summary.edge_key.clone());
        }
    }

    let mut factors = Vec::new();
    let mut score = 0.0;

    if !unlocked.is_empty() {
        let points = (unlocked.len() as f64 * new_points).min(new_cap);
        factors.push(FactorContribution {
            label: "New mechanisms".to_string(),
            description: format!(
                "{} newly testable (+{} each, cap {})",
                unlocked.len(),
                new_points,
                new_cap
            ),
            points,
        });
        score += points;
    }

    if !resolved.is_empty() {
        let points = (resolved.len() as f64 * conf_points).min(conf_cap);
        factors.push(FactorContribution {
            label: "Confounders resolved".to_string(),
            description: format!(
                "{} latent node{} observed (+{} each, cap {})",
                resolved.len(),
                if resolved.len() == 1 { "" } else { "s" },
                conf_points,
                conf_cap
            ),
            points,
        });
        score += points;
    }

    if !boosted.is_empty() {
        let points = (boosted.len() as f64 * boost_points).min(boost_cap);
        factors.push(FactorContribution {
            label: "Signal boost".to_string(),
            description: format!(
                "{} fitted edge{} sharpened (+{} each, cap {})",
                boosted.len(),
                if boosted.len() == 1 { "" } else { "s" },
                boost_points,
                boost_cap
            ),
            points,
        });
        score += points;
    }

    let score = score.min(MAX_SCORE);

    MarginalValue {
        source,
        score,
        tier: Tier::from_score(score, &thresholds),
        unlocked,
        resolved,
        boosted,
        factors,
    }
}

/// Score every candidate not already owned and rank by score descending,
/// breaking ties by source id ascending.
pub fn rank_candidates(
    available: &HashSet<String>,
    owned: &HashSet<String>,
    summaries: &[EdgeSummary],
    weights: &ScoringWeights,
) -> Vec<MarginalValue> {
    let mut ranked: Vec<MarginalValue> = catalog::candidate_sources()
        .iter()
        .filter(|s| !owned.contains(s.id))
        .map(|s| evaluate_candidate(s, available, summaries, weights))
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.source.id.cmp(b.source.id))
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn columns(cols: &[&str]) -> HashSet<String> {
        cols.iter().map(|c| c.to_string()).collect()
    }

    /// Columns from the sources a long-time runner with regular blood work
    /// would already have.
    fn runner_with_labs() -> HashSet<String> {
        let mut available = HashSet::new();
        for id in ["gps_watch", "cbc_panel"] {
            for col in catalog::candidate_source(id).unwrap().columns {
                available.insert(col.to_string());
            }
        }
        available
    }

    fn summary(edge_key: &str, category: &str, response_family: Option<&str>) -> EdgeSummary {
        EdgeSummary {
            edge_key: edge_key.to_string(),
            name: edge_key.to_string(),
            category: category.to_string(),
            response_family: response_family.map(|s| s.to_string()),
            n_obs: 10,
            confidence: 0.6,
            fitted_at: Some(Utc::now()),
            degenerate: false,
        }
    }

    #[test]
    fn test_hormone_panel_unlocks_endocrine_mechanisms() {
        let available = runner_with_labs();
        let source = catalog::candidate_source("hormone_panel").unwrap();
        let result = evaluate_candidate(source, &available, &[], &ScoringWeights::default());

        assert_eq!(
            result.unlocked,
            vec![
                "training_hrs_testosterone",
                "training_hrs_cortisol",
                "training_hrs_dhea",
                "training_hrs_shbg",
            ]
        );
        // 4 mechanisms at +15 each hits the 40-point cap.
        assert_eq!(result.score, 40.0);
        assert_eq!(result.tier, Tier::Moderate);
        assert!(result.resolved.is_empty());
        assert!(result.boosted.is_empty());
    }

    #[test]
    fn test_cgm_resolves_insulin_sensitivity() {
        let available = runner_with_labs();
        let source = catalog::candidate_source("cgm").unwrap();
        let result = evaluate_candidate(source, &available, &[], &ScoringWeights::default());

        assert_eq!(result.unlocked, vec!["training_hrs_glucose"]);
        assert_eq!(result.resolved, vec!["insulin_sensitivity"]);
        // 15 for the mechanism + 12 for the confounder.
        assert_eq!(result.score, 27.0);
        assert_eq!(result.tier, Tier::Marginal);
    }

    #[test]
    fn test_new_mechanism_cap_applies() {
        let available = runner_with_labs();
        let source = catalog::candidate_source("autosleep").unwrap();
        let result = evaluate_candidate(source, &available, &[], &ScoringWeights::default());

        // Sleep staging unlocks far more than the cap covers.
        assert!(result.unlocked.len() > 3);
        let new_factor = result
            .factors
            .iter()
            .find(|f| f.label == "New mechanisms")
            .unwrap();
        assert_eq!(new_factor.points, 40.0);
    }

    #[test]
    fn test_boost_by_category_skips_degenerate() {
        let available = runner_with_labs();
        let mut fitted = vec![
            summary("weekly_run_km->glucose", "metabolic", Some("glucose")),
            summary("acwr->hrv_daily", "recovery", Some("hrv_daily")),
        ];
        fitted[1].degenerate = true;

        let source = catalog::candidate_source("cgm").unwrap();
        let result = evaluate_candidate(source, &available, &fitted, &ScoringWeights::default());
        assert_eq!(result.boosted, vec!["weekly_run_km->glucose"]);

        // The degenerate recovery edge never boosts, even for a recovery source.
        let strap = catalog::candidate_source("hrv_chest_strap").unwrap();
        let result = evaluate_candidate(strap, &available, &fitted, &ScoringWeights::default());
        assert!(result.boosted.is_empty());
    }

    #[test]
    fn test_boost_by_response_family_redundancy() {
        // A fitted cardio edge landing on resting HR gets sharper once a second
        // resting-HR stream arrives, regardless of category rules.
        let available = runner_with_labs();
        let fitted = vec![summary(
            "weekly_run_km->resting_hr",
            "cardio",
            Some("resting_hr"),
        )];

        let source = catalog::candidate_source("oura_ring").unwrap();
        let result = evaluate_candidate(source, &available, &fitted, &ScoringWeights::default());
        assert!(result.boosted.contains(&"weekly_run_km->resting_hr".to_string()));
    }

    #[test]
    fn test_fully_owned_source_scores_zero() {
        let available = runner_with_labs();
        let source = catalog::candidate_source("gps_watch").unwrap();
        let fitted = vec![summary("acwr->hrv_daily", "recovery", Some("hrv_daily"))];
        let result = evaluate_candidate(source, &available, &fitted, &ScoringWeights::default());

        assert_eq!(result.score, 0.0);
        assert_eq!(result.tier, Tier::Minimal);
        assert!(result.unlocked.is_empty());
        assert!(result.boosted.is_empty());
        assert!(result.factors.is_empty());
    }

    #[test]
    fn test_composite_capped_at_100() {
        let weights = ScoringWeights {
            new_mechanism_points: Some(50.0),
            new_mechanism_cap: Some(60.0),
            confounder_points: Some(50.0),
            confounder_cap: Some(60.0),
            boost_points: Some(50.0),
            boost_cap: Some(60.0),
            tiers: None,
        };
        let available = runner_with_labs();
        let fitted = vec![summary("weekly_run_km->glucose", "metabolic", Some("glucose"))];
        let source = catalog::candidate_source("cgm").unwrap();
        let result = evaluate_candidate(source, &available, &fitted, &weights);

        assert_eq!(result.score, 100.0);
        assert_eq!(result.tier, Tier::High);
    }

    #[test]
    fn test_rank_excludes_owned_and_sorts() {
        let available = runner_with_labs();
        let owned: HashSet<String> =
            ["gps_watch", "cbc_panel"].iter().map(|s| s.to_string()).collect();
        let ranked = rank_candidates(&available, &owned, &[], &ScoringWeights::default());

        assert_eq!(ranked.len(), catalog::candidate_sources().len() - 2);
        assert!(ranked.iter().all(|r| r.source.id != "gps_watch"));
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(pair[0].source.id < pair[1].source.id);
            }
        }
    }

    #[test]
    fn test_rank_deterministic() {
        let available = columns(&["daily_run_km"]);
        let owned = HashSet::new();
        let first = rank_candidates(&available, &owned, &[], &ScoringWeights::default());
        let second = rank_candidates(&available, &owned, &[], &ScoringWeights::default());
        let ids: Vec<_> = first.iter().map(|r| r.source.id).collect();
        let ids2: Vec<_> = second.iter().map(|r| r.source.id).collect();
        assert_eq!(ids, ids2);
    }

    #[test]
    fn test_tier_thresholds() {
        let t = TierThresholds::default();
        assert_eq!(Tier::from_score(85.0, &t), Tier::High);
        assert_eq!(Tier::from_score(70.0, &t), Tier::High);
        assert_eq!(Tier::from_score(69.9, &t), Tier::Moderate);
        assert_eq!(Tier::from_score(40.0, &t), Tier::Moderate);
        assert_eq!(Tier::from_score(15.0, &t), Tier::Marginal);
        assert_eq!(Tier::from_score(0.0, &t), Tier::Minimal);
    }
}
