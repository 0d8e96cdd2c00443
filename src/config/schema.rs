use serde::{Deserialize, Serialize};

use crate::scoring::ScoringWeights;

/// User configuration: what data is already flowing, plus scoring overrides.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Ids of candidate sources already owned. Their columns count as
    /// available and they are excluded from the ranking.
    #[serde(default)]
    pub sources: Vec<String>,

    /// Extra timeline columns available outside any catalog source
    /// (manual entries, one-off imports).
    #[serde(default)]
    pub columns: Vec<String>,

    /// Path to the fitted edge summary JSON export, if one exists.
    #[serde(default)]
    pub edge_summary: Option<String>,

    /// Scoring weight overrides.
    #[serde(default)]
    pub scoring: Option<ScoringWeights>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
sources:
  - gps_watch
  - cbc_panel
columns:
  - bodyweight_manual
edge_summary: /data/edge_summary.json
scoring:
  new_mechanism_points: 20
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.sources, vec!["gps_watch", "cbc_panel"]);
        assert_eq!(config.columns, vec!["bodyweight_manual"]);
        assert_eq!(config.edge_summary.as_deref(), Some("/data/edge_summary.json"));
        assert_eq!(
            config.scoring.unwrap().new_mechanism_points,
            Some(20.0)
        );
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.sources.is_empty());
        assert!(config.columns.is_empty());
        assert!(config.edge_summary.is_none());
        assert!(config.scoring.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.sources.is_empty());
        assert!(config.scoring.is_none());
    }
}
