//! Fitted edge summaries: the JSON export of edges the inference pipeline has
//! already fitted. Drives the signal-boost factor when ranking candidates.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::catalog::Category;

/// One fitted edge record from the edge summary export.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeSummary {
    /// "dose->response" key, e.g. "weekly_run_km->ferritin".
    pub edge_key: String,
    pub name: String,
    pub category: String,
    /// Response family the fitted edge lands on, if known.
    #[serde(default)]
    pub response_family: Option<String>,
    pub n_obs: u32,
    /// Posterior confidence in [0, 1].
    pub confidence: f64,
    #[serde(default)]
    pub fitted_at: Option<DateTime<Utc>>,
    /// Degenerate fits are kept in the export but excluded from boosting.
    #[serde(default)]
    pub degenerate: bool,
}

impl EdgeSummary {
    pub fn category(&self) -> Option<Category> {
        Category::parse(&self.category)
    }

    /// Age of the fit, for display.
    pub fn age(&self) -> Option<chrono::Duration> {
        self.fitted_at.map(|t| Utc::now() - t)
    }
}

/// Load fitted edge summaries from a JSON file (an array of records).
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or is not
/// valid JSON for the expected shape.
pub fn load_edge_summaries(path: &Path) -> Result<Vec<EdgeSummary>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read edge summary at {}", path.display()))?;

    let summaries: Vec<EdgeSummary> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse edge summary: invalid JSON in {}", path.display()))?;

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {
            "edge_key": "weekly_run_km->ferritin",
            "name": "Running Volume -> Ferritin",
            "category": "metabolic",
            "response_family": "ferritin",
            "n_obs": 14,
            "confidence": 0.72,
            "fitted_at": "2026-06-01T00:00:00Z"
        },
        {
            "edge_key": "acwr->hscrp",
            "name": "ACWR -> Inflammation",
            "category": "recovery",
            "n_obs": 9,
            "confidence": 0.41,
            "degenerate": true
        }
    ]"#;

    #[test]
    fn test_parse_sample() {
        let summaries: Vec<EdgeSummary> = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].edge_key, "weekly_run_km->ferritin");
        assert_eq!(summaries[0].category(), Some(Category::Metabolic));
        assert_eq!(summaries[0].response_family.as_deref(), Some("ferritin"));
        assert!(!summaries[0].degenerate);
        assert!(summaries[0].fitted_at.is_some());
    }

    #[test]
    fn test_optional_fields_default() {
        let summaries: Vec<EdgeSummary> = serde_json::from_str(SAMPLE).unwrap();
        assert!(summaries[1].degenerate);
        assert!(summaries[1].response_family.is_none());
        assert!(summaries[1].fitted_at.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let summaries = load_edge_summaries(file.path()).unwrap();
        assert_eq!(summaries.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_edge_summaries(Path::new("/nonexistent/edge_summary.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read edge summary"));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        let err = load_edge_summaries(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_unknown_category_maps_to_none() {
        let raw = r#"[{"edge_key": "a->b", "name": "A -> B", "category": "strength",
                       "n_obs": 3, "confidence": 0.5}]"#;
        let summaries: Vec<EdgeSummary> = serde_json::from_str(raw).unwrap();
        assert_eq!(summaries[0].category(), None);
    }
}
