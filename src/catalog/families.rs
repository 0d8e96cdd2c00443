//! Dose and response families: named groups of timeline columns that measure
//! the same underlying quantity, in priority order.

use super::types::{DoseFamily, ResponseFamily, Timescale, VariableClass};

static DOSE_FAMILIES: &[DoseFamily] = &[
    // Exercise volume doses
    DoseFamily {
        id: "running_volume",
        label: "Running Volume",
        columns: &["daily_run_km", "run_distance_km", "distance_walking_running_km"],
        unit: "km",
        class: VariableClass::Choice,
    },
    DoseFamily {
        id: "training_duration",
        label: "Training Duration",
        columns: &[
            "daily_duration_min",
            "workout_duration_min",
            "ah_workout_duration_min",
            "exercise_time_min",
        ],
        unit: "min",
        class: VariableClass::Choice,
    },
    DoseFamily {
        id: "zone2_volume",
        label: "Zone 2 Volume",
        columns: &["daily_zone2_min", "zone2_minutes"],
        unit: "min",
        class: VariableClass::Choice,
    },
    DoseFamily {
        id: "active_energy",
        label: "Active Energy",
        columns: &["active_energy_kcal", "ah_workout_energy_kcal"],
        unit: "kcal",
        class: VariableClass::Choice,
    },
    DoseFamily {
        id: "daily_steps",
        label: "Daily Steps",
        columns: &["steps"],
        unit: "steps",
        class: VariableClass::Choice,
    },
    DoseFamily {
        id: "training_load",
        label: "Training Load (TRIMP)",
        columns: &["daily_trimp"],
        unit: "TRIMP",
        class: VariableClass::Choice,
    },
    // Timing doses
    DoseFamily {
        id: "workout_end_time",
        label: "Workout End Time",
        columns: &["last_workout_end_hour", "latest_workout_hour"],
        unit: "hour",
        class: VariableClass::Choice,
    },
    DoseFamily {
        id: "bedtime",
        label: "Bedtime",
        columns: &["bedtime_hour"],
        unit: "hour",
        class: VariableClass::Choice,
    },
    // Load-based doses
    DoseFamily {
        id: "acwr",
        label: "ACWR",
        columns: &["acwr"],
        unit: "ratio",
        class: VariableClass::Load,
    },
    DoseFamily {
        id: "training_consistency",
        label: "Training Consistency",
        columns: &["training_consistency", "training_consistency_90d"],
        unit: "fraction",
        class: VariableClass::Load,
    },
    DoseFamily {
        id: "sleep_debt",
        label: "Sleep Debt",
        columns: &["sleep_debt_14d"],
        unit: "hours deficit",
        class: VariableClass::Load,
    },
    DoseFamily {
        id: "sleep_duration",
        label: "Sleep Duration",
        columns: &["sleep_duration_hrs"],
        unit: "hours",
        class: VariableClass::Choice,
    },
    // Travel dose
    DoseFamily {
        id: "travel_load",
        label: "Travel/Jet Lag Load",
        columns: &["travel_load"],
        unit: "jet lag score",
        class: VariableClass::Load,
    },
    // Dietary doses
    DoseFamily {
        id: "dietary_protein",
        label: "Dietary Protein",
        columns: &["dietary_protein_g"],
        unit: "g",
        class: VariableClass::Choice,
    },
    DoseFamily {
        id: "dietary_energy",
        label: "Dietary Energy",
        columns: &["dietary_energy_kcal"],
        unit: "kcal",
        class: VariableClass::Choice,
    },
    // Marker-as-dose (cross-links)
    DoseFamily {
        id: "iron_sat_level",
        label: "Iron Saturation",
        columns: &[
            "iron_saturation_pct_smoothed",
            "iron_saturation_pct_computed_smoothed",
        ],
        unit: "%",
        class: VariableClass::Marker,
    },
    DoseFamily {
        id: "vitamin_d_level",
        label: "Vitamin D Level",
        columns: &["vitamin_d_smoothed", "vitamin_d_raw"],
        unit: "ng/mL",
        class: VariableClass::Marker,
    },
    DoseFamily {
        id: "omega3_level",
        label: "Omega-3 Index",
        columns: &["omega3_index_derived", "omega3_index_smoothed"],
        unit: "%",
        class: VariableClass::Marker,
    },
    DoseFamily {
        id: "b12_level",
        label: "B12 Level",
        columns: &["b12_smoothed", "b12_raw"],
        unit: "pg/mL",
        class: VariableClass::Marker,
    },
    DoseFamily {
        id: "homocysteine_level",
        label: "Homocysteine Level",
        columns: &["homocysteine_smoothed", "homocysteine_raw"],
        unit: "umol/L",
        class: VariableClass::Marker,
    },
    DoseFamily {
        id: "ferritin_level",
        label: "Ferritin Level",
        columns: &["ferritin_smoothed", "ferritin_raw"],
        unit: "ng/mL",
        class: VariableClass::Marker,
    },
];

static RESPONSE_FAMILIES: &[ResponseFamily] = &[
    // Iron / hematology markers (slow)
    ResponseFamily {
        id: "iron_total",
        label: "Serum Iron",
        columns: &["iron_total_smoothed", "iron_total_raw"],
        unit: "mcg/dL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "ferritin",
        label: "Ferritin",
        columns: &["ferritin_smoothed", "ferritin_raw"],
        unit: "ng/mL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "hemoglobin",
        label: "Hemoglobin",
        columns: &["hemoglobin_smoothed", "hemoglobin_raw"],
        unit: "g/dL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    // Hormones (slow)
    ResponseFamily {
        id: "testosterone",
        label: "Testosterone",
        columns: &["testosterone_smoothed", "testosterone_raw"],
        unit: "ng/dL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "cortisol",
        label: "Cortisol",
        columns: &["cortisol_smoothed", "cortisol_raw"],
        unit: "mcg/dL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "dhea_s",
        label: "DHEA-S",
        columns: &["dhea_s_smoothed", "dhea_s_raw"],
        unit: "mcg/dL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "shbg",
        label: "Sex Hormone Binding Globulin",
        columns: &["shbg_smoothed", "shbg_raw"],
        unit: "nmol/L",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    // Lipids (slow)
    ResponseFamily {
        id: "triglycerides",
        label: "Triglycerides",
        columns: &["triglycerides_smoothed", "triglycerides_raw"],
        unit: "mg/dL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "hdl",
        label: "HDL Cholesterol",
        columns: &["hdl_smoothed", "hdl_raw"],
        unit: "mg/dL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "ldl",
        label: "LDL Cholesterol",
        columns: &["ldl_smoothed", "ldl_raw"],
        unit: "mg/dL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "apob",
        label: "Apolipoprotein B",
        columns: &["apob_smoothed", "apob_raw"],
        unit: "mg/dL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "ldl_particle_number",
        label: "LDL Particle Number",
        columns: &["ldl_particle_number_smoothed", "ldl_particle_number_raw"],
        unit: "nmol/L",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "non_hdl_cholesterol",
        label: "Non-HDL Cholesterol",
        columns: &["non_hdl_cholesterol_smoothed", "non_hdl_cholesterol_raw"],
        unit: "mg/dL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "total_cholesterol",
        label: "Total Cholesterol",
        columns: &["total_cholesterol_smoothed", "total_cholesterol_raw"],
        unit: "mg/dL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    // Inflammation (medium)
    ResponseFamily {
        id: "hscrp",
        label: "hs-CRP",
        columns: &["hscrp_smoothed", "hscrp_raw"],
        unit: "mg/L",
        class: VariableClass::Marker,
        timescale: Timescale::Medium,
    },
    // Fitness markers (slow)
    ResponseFamily {
        id: "vo2peak",
        label: "VO2peak",
        columns: &["vo2_peak_smoothed", "vo2max_apple"],
        unit: "ml/min/kg",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    // Sleep outcomes (fast)
    ResponseFamily {
        id: "sleep_efficiency",
        label: "Sleep Efficiency",
        columns: &["sleep_efficiency_pct", "sleep_efficiency_7d"],
        unit: "%",
        class: VariableClass::Outcome,
        timescale: Timescale::Fast,
    },
    ResponseFamily {
        id: "sleep_quality",
        label: "Sleep Quality",
        columns: &["sleep_quality_score"],
        unit: "min quality",
        class: VariableClass::Outcome,
        timescale: Timescale::Fast,
    },
    ResponseFamily {
        id: "deep_sleep",
        label: "Deep Sleep",
        columns: &["deep_sleep_min", "ah_deep_sleep_min"],
        unit: "min",
        class: VariableClass::Outcome,
        timescale: Timescale::Fast,
    },
    // HRV / autonomic outcomes
    ResponseFamily {
        id: "hrv_daily",
        label: "Daily HRV",
        columns: &["hrv_daily_mean", "sleep_hrv_ms", "hrv_ms"],
        unit: "ms",
        class: VariableClass::Outcome,
        timescale: Timescale::Fast,
    },
    ResponseFamily {
        id: "hrv_baseline",
        label: "HRV 7-Day Baseline",
        columns: &["hrv_7d_mean", "sleep_hrv_7d"],
        unit: "ms",
        class: VariableClass::Outcome,
        timescale: Timescale::Medium,
    },
    // Resting HR outcomes
    ResponseFamily {
        id: "resting_hr",
        label: "Resting Heart Rate",
        columns: &["resting_hr", "sleep_hr_bpm"],
        unit: "bpm",
        class: VariableClass::Outcome,
        timescale: Timescale::Fast,
    },
    ResponseFamily {
        id: "resting_hr_trend",
        label: "Resting HR 7-Day Avg",
        columns: &["resting_hr_7d_mean", "sleep_hr_7d"],
        unit: "bpm",
        class: VariableClass::Outcome,
        timescale: Timescale::Medium,
    },
    // Body composition (slow)
    ResponseFamily {
        id: "body_fat",
        label: "Body Fat %",
        columns: &["body_fat_pct"],
        unit: "%",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "body_mass",
        label: "Body Mass",
        columns: &["body_mass_kg"],
        unit: "kg",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    // CBC / immune markers (slow)
    ResponseFamily {
        id: "wbc",
        label: "White Blood Cells",
        columns: &["wbc_smoothed", "wbc_raw"],
        unit: "K/uL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "rbc",
        label: "Red Blood Cells",
        columns: &["rbc_smoothed", "rbc_raw"],
        unit: "M/uL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "mcv",
        label: "Mean Corpuscular Volume",
        columns: &["mcv_smoothed", "mcv_raw"],
        unit: "fL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "rdw",
        label: "Red Cell Distribution Width",
        columns: &["rdw_smoothed", "rdw_raw"],
        unit: "%",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "nlr",
        label: "Neutrophil-to-Lymphocyte Ratio",
        columns: &["nlr"],
        unit: "ratio",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    // Metabolic (slow)
    ResponseFamily {
        id: "glucose",
        label: "Fasting Glucose",
        columns: &["glucose_smoothed", "glucose_raw"],
        unit: "mg/dL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "hba1c",
        label: "HbA1c",
        columns: &["hba1c_smoothed", "hba1c_raw"],
        unit: "%",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "insulin",
        label: "Insulin",
        columns: &["insulin_smoothed", "insulin_raw"],
        unit: "uIU/mL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "homocysteine",
        label: "Homocysteine",
        columns: &["homocysteine_smoothed", "homocysteine_raw"],
        unit: "umol/L",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    // Micronutrients (slow)
    ResponseFamily {
        id: "b12",
        label: "Vitamin B12",
        columns: &["b12_smoothed", "b12_raw"],
        unit: "pg/mL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "zinc",
        label: "Zinc",
        columns: &["zinc_smoothed", "zinc_raw"],
        unit: "mcg/dL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "magnesium",
        label: "Magnesium (RBC)",
        columns: &["magnesium_rbc_smoothed", "magnesium_rbc_raw"],
        unit: "mg/dL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "vitamin_d",
        label: "Vitamin D",
        columns: &["vitamin_d_smoothed", "vitamin_d_raw"],
        unit: "ng/mL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    // Omega-3 (slow)
    ResponseFamily {
        id: "omega3_index",
        label: "Omega-3 Index",
        columns: &["omega3_index_derived", "omega3_index_smoothed"],
        unit: "%",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    // Kidney / liver (slow)
    ResponseFamily {
        id: "creatinine",
        label: "Creatinine",
        columns: &["creatinine_smoothed", "creatinine_raw"],
        unit: "mg/dL",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "ast",
        label: "AST",
        columns: &["ast_smoothed", "ast_raw"],
        unit: "U/L",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
    ResponseFamily {
        id: "alt",
        label: "ALT",
        columns: &["alt_smoothed", "alt_raw"],
        unit: "U/L",
        class: VariableClass::Marker,
        timescale: Timescale::Slow,
    },
];

/// All dose families, in catalog order.
pub fn dose_families() -> &'static [DoseFamily] {
    DOSE_FAMILIES
}

/// All response families, in catalog order.
pub fn response_families() -> &'static [ResponseFamily] {
    RESPONSE_FAMILIES
}

/// Look up a dose family by id.
pub fn dose_family(id: &str) -> Option<&'static DoseFamily> {
    DOSE_FAMILIES.iter().find(|f| f.id == id)
}

/// Look up a response family by id.
pub fn response_family(id: &str) -> Option<&'static ResponseFamily> {
    RESPONSE_FAMILIES.iter().find(|f| f.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dose_family_lookup() {
        let fam = dose_family("running_volume").unwrap();
        assert_eq!(fam.label, "Running Volume");
        assert_eq!(fam.columns[0], "daily_run_km");
    }

    #[test]
    fn test_response_family_lookup() {
        let fam = response_family("ferritin").unwrap();
        assert_eq!(fam.unit, "ng/mL");
    }

    #[test]
    fn test_unknown_family() {
        assert!(dose_family("bench_press_volume").is_none());
        assert!(response_family("psa").is_none());
    }

    #[test]
    fn test_family_ids_unique() {
        let dose_ids: HashSet<_> = dose_families().iter().map(|f| f.id).collect();
        assert_eq!(dose_ids.len(), dose_families().len());
        let resp_ids: HashSet<_> = response_families().iter().map(|f| f.id).collect();
        assert_eq!(resp_ids.len(), response_families().len());
    }

    #[test]
    fn test_every_family_has_columns() {
        for fam in dose_families() {
            assert!(!fam.columns.is_empty(), "dose family {} has no columns", fam.id);
        }
        for fam in response_families() {
            assert!(!fam.columns.is_empty(), "response family {} has no columns", fam.id);
        }
    }
}
