use super::config::ScoringWeights;

/// Validate scoring weights at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_weights(weights: &ScoringWeights) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let non_negative = [
        ("scoring.new_mechanism_points", weights.new_mechanism_points),
        ("scoring.new_mechanism_cap", weights.new_mechanism_cap),
        ("scoring.confounder_points", weights.confounder_points),
        ("scoring.confounder_cap", weights.confounder_cap),
        ("scoring.boost_points", weights.boost_points),
        ("scoring.boost_cap", weights.boost_cap),
    ];
    for (name, value) in non_negative {
        if let Some(v) = value {
            if v < 0.0 {
                errors.push(format!("{}: must be non-negative", name));
            }
        }
    }

    // A cap below its per-item points would make the first item overshoot it.
    let pairs = [
        (
            "scoring.new_mechanism_cap",
            weights.new_mechanism_cap,
            weights.new_mechanism_points,
        ),
        (
            "scoring.confounder_cap",
            weights.confounder_cap,
            weights.confounder_points,
        ),
        ("scoring.boost_cap", weights.boost_cap, weights.boost_points),
    ];
    for (name, cap, points) in pairs {
        if let (Some(cap), Some(points)) = (cap, points) {
            if cap < points {
                errors.push(format!(
                    "{}: cap {} is below the per-item points {}",
                    name, cap, points
                ));
            }
        }
    }

    if let Some(tiers) = weights.tiers {
        if !(tiers.high > tiers.moderate && tiers.moderate > tiers.marginal) {
            errors.push(format!(
                "scoring.tiers: thresholds must be strictly descending (high {} > moderate {} > marginal {})",
                tiers.high, tiers.moderate, tiers.marginal
            ));
        }
        if tiers.marginal < 0.0 {
            errors.push("scoring.tiers.marginal: must be non-negative".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::TierThresholds;

    #[test]
    fn test_default_weights_valid() {
        assert!(validate_weights(&ScoringWeights::default()).is_ok());
    }

    #[test]
    fn test_empty_weights_valid() {
        let weights = ScoringWeights {
            new_mechanism_points: None,
            new_mechanism_cap: None,
            confounder_points: None,
            confounder_cap: None,
            boost_points: None,
            boost_cap: None,
            tiers: None,
        };
        assert!(validate_weights(&weights).is_ok());
    }

    #[test]
    fn test_negative_points() {
        let weights = ScoringWeights {
            new_mechanism_points: Some(-5.0),
            ..ScoringWeights::default()
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert!(errors[0].contains("new_mechanism_points"));
    }

    #[test]
    fn test_cap_below_points() {
        let weights = ScoringWeights {
            boost_points: Some(10.0),
            boost_cap: Some(5.0),
            ..ScoringWeights::default()
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert!(errors[0].contains("scoring.boost_cap"));
    }

    #[test]
    fn test_tier_ordering() {
        let weights = ScoringWeights {
            tiers: Some(TierThresholds {
                high: 40.0,
                moderate: 70.0,
                marginal: 15.0,
            }),
            ..ScoringWeights::default()
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert!(errors[0].contains("strictly descending"));
    }

    #[test]
    fn test_collects_all_errors() {
        let weights = ScoringWeights {
            confounder_points: Some(-1.0),
            boost_points: Some(10.0),
            boost_cap: Some(5.0),
            ..ScoringWeights::default()
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
