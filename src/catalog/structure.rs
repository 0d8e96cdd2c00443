//! Structural causal graph: domain-knowledge edges the data cannot discover
//! (confounders, mediators, common causes), plus the node -> column mapping
//! that determines which nodes are observable and which remain latent.

/// Edge type in the structural graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Direct cause.
    Causal,
    /// Common-cause / confounding link.
    Confounds,
}

/// A directed structural edge between abstract graph nodes.
#[derive(Debug, Clone, Copy)]
pub struct StructuralEdge {
    pub source: &'static str,
    pub target: &'static str,
    pub kind: EdgeKind,
}

const fn causal(source: &'static str, target: &'static str) -> StructuralEdge {
    StructuralEdge { source, target, kind: EdgeKind::Causal }
}

const fn confounds(source: &'static str, target: &'static str) -> StructuralEdge {
    StructuralEdge { source, target, kind: EdgeKind::Confounds }
}

static STRUCTURAL_EDGES: &[StructuralEdge] = &[
    // Environment confounds many things
    confounds("season", "training_volume"),
    confounds("season", "vitamin_d"),
    confounds("season", "testosterone"),
    confounds("season", "sleep_duration"),
    confounds("season", "omega3_index"),
    confounds("location", "training_volume"),
    confounds("location", "sleep_quality"),
    confounds("travel_load", "sleep_quality"),
    confounds("travel_load", "hrv_daily"),
    confounds("travel_load", "resting_hr"),
    confounds("is_weekend", "training_volume"),
    confounds("is_weekend", "sleep_duration"),
    confounds("is_weekend", "bedtime"),
    confounds("vitamin_d", "testosterone"),
    // Training structure
    causal("acwr", "hscrp"),
    causal("acwr", "resting_hr"),
    causal("acwr", "testosterone"),
    causal("training_consistency", "vo2_peak"),
    causal("monotony", "hscrp"),
    // Iron pathway: the full mediating chain
    causal("running_volume", "ground_contacts"),
    causal("ground_contacts", "iron_total"),
    causal("iron_total", "ferritin"),
    causal("ferritin", "hemoglobin"),
    causal("hemoglobin", "vo2_peak"),
    causal("ferritin", "vo2_peak"),
    causal("running_volume", "sweat_iron_loss"),
    causal("high_intensity", "gi_iron_loss"),
    // Hormone pathway
    causal("training_volume", "cortisol"),
    causal("cortisol", "testosterone"),
    causal("sleep_duration", "testosterone"),
    // Lipid pathway
    causal("zone2_volume", "lipoprotein_lipase"),
    causal("lipoprotein_lipase", "triglycerides"),
    causal("zone2_volume", "reverse_cholesterol_transport"),
    causal("reverse_cholesterol_transport", "hdl"),
    // Sleep-recovery chain
    causal("training_load", "core_temperature"),
    causal("core_temperature", "sleep_quality"),
    causal("sleep_duration", "hrv_daily"),
    causal("sleep_quality", "hrv_daily"),
    causal("hrv_daily", "resting_hr"),
    // Body composition pathway
    causal("training_volume", "energy_expenditure"),
    causal("energy_expenditure", "body_fat_pct"),
    causal("body_fat_pct", "leptin"),
    // Immune pathway
    causal("training_volume", "wbc"),
    causal("sleep_duration", "wbc"),
    causal("cortisol", "wbc"),
    // Metabolic pathway
    causal("training_volume", "insulin_sensitivity"),
    causal("insulin_sensitivity", "glucose"),
    causal("insulin_sensitivity", "insulin"),
    // Liver / kidney
    causal("training_volume", "ast"),
    causal("training_volume", "creatinine"),
    // Micronutrient depletion
    causal("running_volume", "zinc"),
    causal("running_volume", "magnesium_rbc"),
    // Methylation / inflammation cross-links
    causal("omega3_index", "hscrp"),
    causal("b12", "homocysteine"),
    causal("homocysteine", "hscrp"),
];

/// Node -> timeline columns. Nodes with an empty column list are latent
/// mediators: no device or panel currently measures them directly.
static NODE_COLUMNS: &[(&str, &[&str])] = &[
    ("running_volume", &["daily_run_km", "run_distance_km", "weekly_run_km"]),
    ("training_volume", &["daily_distance_km", "daily_duration_min", "weekly_volume_km"]),
    ("zone2_volume", &["daily_zone2_min", "zone2_minutes", "weekly_zone2_min"]),
    ("training_load", &["daily_trimp", "atl"]),
    ("high_intensity", &["daily_high_intensity_min", "weekly_high_intensity_min"]),
    ("ground_contacts", &["daily_ground_contacts", "weekly_ground_contacts"]),
    ("iron_total", &["iron_total_smoothed", "iron_total_raw"]),
    ("ferritin", &["ferritin_smoothed", "ferritin_raw"]),
    ("hemoglobin", &["hemoglobin_smoothed", "hemoglobin_raw"]),
    ("vo2_peak", &["vo2_peak_smoothed", "vo2max_apple"]),
    ("testosterone", &["testosterone_smoothed", "testosterone_raw"]),
    ("cortisol", &["cortisol_smoothed", "cortisol_raw"]),
    ("triglycerides", &["triglycerides_smoothed", "triglycerides_raw"]),
    ("hdl", &["hdl_smoothed", "hdl_raw"]),
    ("hscrp", &["hscrp_smoothed", "hscrp_raw"]),
    ("sleep_quality", &["sleep_quality_score"]),
    ("sleep_duration", &["sleep_duration_hrs"]),
    ("deep_sleep", &["deep_sleep_min", "ah_deep_sleep_min"]),
    ("hrv_daily", &["hrv_daily_mean", "sleep_hrv_ms"]),
    ("resting_hr", &["resting_hr", "sleep_hr_bpm", "resting_hr_7d_mean"]),
    ("body_fat_pct", &["body_fat_pct"]),
    ("vitamin_d", &["vitamin_d_smoothed", "vitamin_d_raw"]),
    ("bedtime", &["bedtime_hour"]),
    ("steps", &["steps"]),
    ("acwr", &["acwr"]),
    ("training_consistency", &["training_consistency", "training_consistency_90d"]),
    ("monotony", &["monotony"]),
    ("sleep_debt", &["sleep_debt_14d"]),
    // Environment nodes
    ("season", &["season"]),
    ("location", &["location"]),
    ("travel_load", &["travel_load"]),
    ("is_weekend", &["is_weekend"]),
    // Marker nodes
    ("wbc", &["wbc_smoothed", "wbc_raw"]),
    ("glucose", &["glucose_smoothed", "glucose_raw"]),
    ("insulin", &["insulin_smoothed", "insulin_raw"]),
    ("ast", &["ast_smoothed", "ast_raw"]),
    ("creatinine", &["creatinine_smoothed", "creatinine_raw"]),
    ("zinc", &["zinc_smoothed", "zinc_raw"]),
    ("magnesium_rbc", &["magnesium_rbc_smoothed", "magnesium_rbc_raw"]),
    ("homocysteine", &["homocysteine_smoothed", "homocysteine_raw"]),
    ("omega3_index", &["omega3_index_derived", "omega3_index_smoothed"]),
    ("b12", &["b12_smoothed", "b12_raw"]),
    // Latent mediators (not directly observed by any current source)
    ("sweat_iron_loss", &[]),
    ("gi_iron_loss", &[]),
    ("lipoprotein_lipase", &[]),
    ("reverse_cholesterol_transport", &[]),
    ("core_temperature", &[]),
    ("energy_expenditure", &[]),
    ("leptin", &[]),
    ("insulin_sensitivity", &[]),
];

/// All structural edges.
pub fn structural_edges() -> &'static [StructuralEdge] {
    STRUCTURAL_EDGES
}

/// Columns mapped to a structural node. Empty slice for latent nodes and
/// unknown node names.
pub fn node_columns(node: &str) -> &'static [&'static str] {
    NODE_COLUMNS
        .iter()
        .find(|(name, _)| *name == node)
        .map(|(_, cols)| *cols)
        .unwrap_or(&[])
}

/// Nodes with no mapped columns: the latent confounders and mediators a new
/// data source could resolve.
pub fn latent_nodes() -> Vec<&'static str> {
    NODE_COLUMNS
        .iter()
        .filter(|(_, cols)| cols.is_empty())
        .map(|(name, _)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_latent_nodes() {
        let latent = latent_nodes();
        assert_eq!(latent.len(), 8);
        assert!(latent.contains(&"insulin_sensitivity"));
        assert!(latent.contains(&"core_temperature"));
        assert!(!latent.contains(&"ferritin"));
    }

    #[test]
    fn test_node_columns_priority_order() {
        let cols = node_columns("ferritin");
        assert_eq!(cols[0], "ferritin_smoothed");
    }

    #[test]
    fn test_unknown_node_has_no_columns() {
        assert!(node_columns("psa").is_empty());
    }

    #[test]
    fn test_every_structural_node_is_mapped() {
        let known: HashSet<_> = NODE_COLUMNS.iter().map(|(name, _)| *name).collect();
        for edge in structural_edges() {
            assert!(known.contains(edge.source), "unmapped node {}", edge.source);
            assert!(known.contains(edge.target), "unmapped node {}", edge.target);
        }
    }

    #[test]
    fn test_confound_edges_present() {
        let n = structural_edges()
            .iter()
            .filter(|e| e.kind == EdgeKind::Confounds)
            .count();
        assert!(n >= 10);
    }
}
