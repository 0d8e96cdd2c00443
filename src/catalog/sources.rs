//! Candidate data sources: devices, apps, panels, and scans Serif knows how to
//! ingest, each mapped to the timeline columns it would provide.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Wearable,
    App,
    Sensor,
    LabPanel,
    Scan,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SourceKind::Wearable => "wearable",
            SourceKind::App => "app",
            SourceKind::Sensor => "sensor",
            SourceKind::LabPanel => "lab panel",
            SourceKind::Scan => "scan",
        };
        write!(f, "{}", s)
    }
}

/// A data source that could be added, with the columns it would contribute.
#[derive(Debug, Clone, Copy)]
pub struct CandidateSource {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: SourceKind,
    pub columns: &'static [&'static str],
    pub description: &'static str,
}

static CANDIDATE_SOURCES: &[CandidateSource] = &[
    CandidateSource {
        id: "gps_watch",
        label: "GPS Watch",
        kind: SourceKind::Wearable,
        columns: &[
            "daily_run_km",
            "daily_duration_min",
            "daily_zone2_min",
            "daily_trimp",
            "daily_distance_km",
            "acwr",
            "training_consistency",
        ],
        description: "Workout GPX export: distance, duration, HR zones, training load",
    },
    CandidateSource {
        id: "apple_watch",
        label: "Apple Watch",
        kind: SourceKind::Wearable,
        columns: &[
            "resting_hr",
            "hrv_daily_mean",
            "steps",
            "active_energy_kcal",
            "exercise_time_min",
            "vo2max_apple",
            "body_mass_kg",
        ],
        description: "Apple Health export: activity, heart, and body metrics",
    },
    CandidateSource {
        id: "autosleep",
        label: "AutoSleep",
        kind: SourceKind::App,
        columns: &[
            "sleep_duration_hrs",
            "sleep_efficiency_pct",
            "deep_sleep_min",
            "sleep_quality_score",
            "bedtime_hour",
            "sleep_debt_14d",
            "sleep_hrv_ms",
            "sleep_hr_bpm",
        ],
        description: "Nightly sleep staging, efficiency, and overnight HRV/HR",
    },
    CandidateSource {
        id: "oura_ring",
        label: "Oura Ring",
        kind: SourceKind::Wearable,
        columns: &[
            "sleep_duration_hrs",
            "sleep_efficiency_pct",
            "deep_sleep_min",
            "bedtime_hour",
            "hrv_daily_mean",
            "resting_hr",
        ],
        description: "Sleep architecture plus overnight autonomic metrics",
    },
    CandidateSource {
        id: "hrv_chest_strap",
        label: "Morning HRV Strap",
        kind: SourceKind::Wearable,
        columns: &["hrv_daily_mean", "hrv_7d_mean", "resting_hr"],
        description: "Dedicated morning HRV readings with a 7-day baseline",
    },
    CandidateSource {
        id: "cgm",
        label: "Continuous Glucose Monitor",
        kind: SourceKind::Sensor,
        columns: &["glucose_raw", "glucose_smoothed"],
        description: "Continuous interstitial glucose, daily fasting estimate",
    },
    CandidateSource {
        id: "advanced_lipid_panel",
        label: "Advanced Lipid Panel",
        kind: SourceKind::LabPanel,
        columns: &[
            "apob_raw",
            "ldl_particle_number_raw",
            "non_hdl_cholesterol_raw",
            "total_cholesterol_raw",
        ],
        description: "ApoB, LDL particle count, and extended cholesterol markers",
    },
    CandidateSource {
        id: "hormone_panel",
        label: "Hormone Panel",
        kind: SourceKind::LabPanel,
        columns: &["testosterone_raw", "cortisol_raw", "dhea_s_raw", "shbg_raw"],
        description: "Quarterly endocrine panel: T, cortisol, DHEA-S, SHBG",
    },
    CandidateSource {
        id: "micronutrient_panel",
        label: "Micronutrient Panel",
        kind: SourceKind::LabPanel,
        columns: &[
            "zinc_raw",
            "magnesium_rbc_raw",
            "b12_raw",
            "vitamin_d_raw",
            "homocysteine_raw",
            "omega3_index_derived",
        ],
        description: "Zinc, RBC magnesium, B12, vitamin D, homocysteine, omega-3 index",
    },
    CandidateSource {
        id: "cbc_panel",
        label: "CBC + Iron Panel",
        kind: SourceKind::LabPanel,
        columns: &[
            "wbc_raw",
            "rbc_raw",
            "mcv_raw",
            "rdw_raw",
            "nlr",
            "hemoglobin_raw",
            "ferritin_raw",
            "iron_total_raw",
            "iron_saturation_pct_smoothed",
        ],
        description: "Complete blood count with ferritin, serum iron, and saturation",
    },
    CandidateSource {
        id: "dexa_scan",
        label: "DEXA Scan",
        kind: SourceKind::Scan,
        columns: &["body_fat_pct", "body_mass_kg"],
        description: "Quarterly body composition scan",
    },
    CandidateSource {
        id: "food_log",
        label: "Food Log",
        kind: SourceKind::App,
        columns: &["dietary_protein_g", "dietary_energy_kcal"],
        description: "Daily macro tracking: protein and total energy intake",
    },
    CandidateSource {
        id: "travel_calendar",
        label: "Travel Calendar",
        kind: SourceKind::App,
        columns: &["travel_load", "location"],
        description: "Trip and timezone history, converted to a jet-lag load index",
    },
];

/// All candidate sources, in catalog order.
pub fn candidate_sources() -> &'static [CandidateSource] {
    CANDIDATE_SOURCES
}

/// Look up a candidate source by id.
pub fn candidate_source(id: &str) -> Option<&'static CandidateSource> {
    CANDIDATE_SOURCES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_source_ids_unique() {
        let ids: HashSet<_> = candidate_sources().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), candidate_sources().len());
    }

    #[test]
    fn test_source_lookup() {
        let src = candidate_source("cgm").unwrap();
        assert_eq!(src.kind, SourceKind::Sensor);
        assert!(src.columns.contains(&"glucose_raw"));
    }

    #[test]
    fn test_unknown_source() {
        assert!(candidate_source("fitbit").is_none());
    }

    #[test]
    fn test_every_source_has_columns() {
        for src in candidate_sources() {
            assert!(!src.columns.is_empty(), "source {} has no columns", src.id);
        }
    }
}
