//! The mechanism catalog: every known dose -> response relationship Serif can
//! test once data is available for both sides.

use super::types::{Category, Mechanism};

static MECHANISMS: &[Mechanism] = &[
    // Exercise volume -> iron / hematology
    Mechanism {
        id: "run_vol_iron",
        name: "Running Volume -> Iron",
        dose_family: "running_volume",
        response_family: "iron_total",
        category: Category::Metabolic,
        response_lag_days: 7,
        per_unit: "per 40 km/mo",
        min_observations: 4,
        rationale: "Foot-strike hemolysis destroys red blood cells; iron lost via hemolysis, sweat, and GI ischemia",
    },
    Mechanism {
        id: "run_vol_ferritin",
        name: "Running Volume -> Ferritin",
        dose_family: "running_volume",
        response_family: "ferritin",
        category: Category::Metabolic,
        response_lag_days: 14,
        per_unit: "per 40 km/mo",
        min_observations: 4,
        rationale: "Chronic endurance running depletes iron stores through multiple loss pathways",
    },
    Mechanism {
        id: "run_vol_hemoglobin",
        name: "Running Volume -> Hemoglobin",
        dose_family: "running_volume",
        response_family: "hemoglobin",
        category: Category::Metabolic,
        response_lag_days: 14,
        per_unit: "per 40 km/mo",
        min_observations: 4,
        rationale: "Iron depletion impairs hemoglobin synthesis; chronic running can cause sports anemia",
    },
    Mechanism {
        id: "run_vol_rbc",
        name: "Running Volume -> RBC",
        dose_family: "running_volume",
        response_family: "rbc",
        category: Category::Metabolic,
        response_lag_days: 7,
        per_unit: "per 40 km/mo",
        min_observations: 4,
        rationale: "Endurance running causes plasma volume expansion, diluting red cell concentration",
    },
    Mechanism {
        id: "run_vol_mcv",
        name: "Running Volume -> MCV",
        dose_family: "running_volume",
        response_family: "mcv",
        category: Category::Metabolic,
        response_lag_days: 14,
        per_unit: "per 40 km/mo",
        min_observations: 4,
        rationale: "Iron depletion from chronic running leads to microcytic red cells",
    },
    Mechanism {
        id: "run_vol_rdw",
        name: "Running Volume -> RDW",
        dose_family: "running_volume",
        response_family: "rdw",
        category: Category::Metabolic,
        response_lag_days: 14,
        per_unit: "per 40 km/mo",
        min_observations: 4,
        rationale: "Mixed cell populations from iron depletion increase red cell size variation",
    },
    // Training -> hormones
    Mechanism {
        id: "training_hrs_testosterone",
        name: "Training Hours -> Testosterone",
        dose_family: "training_duration",
        response_family: "testosterone",
        category: Category::Metabolic,
        response_lag_days: 14,
        per_unit: "per 4 hrs/mo",
        min_observations: 3,
        rationale: "Overtraining suppresses the hypothalamic-pituitary-gonadal axis",
    },
    Mechanism {
        id: "training_hrs_cortisol",
        name: "Training Hours -> Cortisol",
        dose_family: "training_duration",
        response_family: "cortisol",
        category: Category::Metabolic,
        response_lag_days: 14,
        per_unit: "per 4 hrs/mo",
        min_observations: 3,
        rationale: "Chronic training stress elevates baseline cortisol via HPA axis activation",
    },
    Mechanism {
        id: "training_hrs_dhea",
        name: "Training Hours -> DHEA-S",
        dose_family: "training_duration",
        response_family: "dhea_s",
        category: Category::Metabolic,
        response_lag_days: 14,
        per_unit: "per 4 hrs/mo",
        min_observations: 3,
        rationale: "Moderate exercise stimulates adrenal DHEA production; overtraining may deplete it",
    },
    Mechanism {
        id: "training_hrs_shbg",
        name: "Training Hours -> SHBG",
        dose_family: "training_duration",
        response_family: "shbg",
        category: Category::Metabolic,
        response_lag_days: 14,
        per_unit: "per 4 hrs/mo",
        min_observations: 3,
        rationale: "Exercise increases SHBG production, affecting free testosterone availability",
    },
    // Zone 2 -> lipids
    Mechanism {
        id: "zone2_triglycerides",
        name: "Zone 2 Volume -> Triglycerides",
        dose_family: "zone2_volume",
        response_family: "triglycerides",
        category: Category::Cardio,
        response_lag_days: 14,
        per_unit: "per 120 min/mo",
        min_observations: 3,
        rationale: "Aerobic exercise increases lipoprotein lipase activity, clearing triglycerides",
    },
    Mechanism {
        id: "zone2_hdl",
        name: "Zone 2 Volume -> HDL",
        dose_family: "zone2_volume",
        response_family: "hdl",
        category: Category::Cardio,
        response_lag_days: 14,
        per_unit: "per 120 min/mo",
        min_observations: 3,
        rationale: "Regular aerobic exercise upregulates HDL production and reverse cholesterol transport",
    },
    Mechanism {
        id: "zone2_ldl",
        name: "Zone 2 Volume -> LDL",
        dose_family: "zone2_volume",
        response_family: "ldl",
        category: Category::Cardio,
        response_lag_days: 14,
        per_unit: "per 120 min/mo",
        min_observations: 3,
        rationale: "Aerobic exercise shifts LDL particle size from small-dense to large-buoyant",
    },
    Mechanism {
        id: "zone2_apob",
        name: "Zone 2 Volume -> ApoB",
        dose_family: "zone2_volume",
        response_family: "apob",
        category: Category::Cardio,
        response_lag_days: 14,
        per_unit: "per 120 min/mo",
        min_observations: 3,
        rationale: "Aerobic exercise reduces atherogenic particle count via increased LDL receptor activity",
    },
    Mechanism {
        id: "zone2_non_hdl",
        name: "Zone 2 Volume -> Non-HDL Cholesterol",
        dose_family: "zone2_volume",
        response_family: "non_hdl_cholesterol",
        category: Category::Cardio,
        response_lag_days: 14,
        per_unit: "per 120 min/mo",
        min_observations: 3,
        rationale: "Aerobic exercise reduces atherogenic lipoproteins (LDL + VLDL + IDL)",
    },
    Mechanism {
        id: "zone2_total_chol",
        name: "Zone 2 Volume -> Total Cholesterol",
        dose_family: "zone2_volume",
        response_family: "total_cholesterol",
        category: Category::Cardio,
        response_lag_days: 14,
        per_unit: "per 120 min/mo",
        min_observations: 3,
        rationale: "Aerobic exercise net effect on total cholesterol (HDL up, LDL down)",
    },
    // ACWR -> inflammation, recovery, immune
    Mechanism {
        id: "acwr_hscrp",
        name: "ACWR -> Inflammation",
        dose_family: "acwr",
        response_family: "hscrp",
        category: Category::Recovery,
        response_lag_days: 7,
        per_unit: "per 0.1 ACWR",
        min_observations: 4,
        rationale: "Acute overreaching triggers systemic inflammation via muscle damage and oxidative stress",
    },
    Mechanism {
        id: "acwr_resting_hr",
        name: "ACWR -> Resting HR Trend",
        dose_family: "acwr",
        response_family: "resting_hr_trend",
        category: Category::Recovery,
        response_lag_days: 0,
        per_unit: "per 0.1 ACWR",
        min_observations: 30,
        rationale: "Chronic overreaching elevates baseline sympathetic tone and resting heart rate",
    },
    Mechanism {
        id: "acwr_wbc",
        name: "ACWR -> White Blood Cells",
        dose_family: "acwr",
        response_family: "wbc",
        category: Category::Recovery,
        response_lag_days: 7,
        per_unit: "per 0.1 ACWR",
        min_observations: 4,
        rationale: "Acute overreaching triggers open-window immunosuppression with transient leukopenia",
    },
    Mechanism {
        id: "acwr_nlr",
        name: "ACWR -> Neutrophil-Lymphocyte Ratio",
        dose_family: "acwr",
        response_family: "nlr",
        category: Category::Recovery,
        response_lag_days: 7,
        per_unit: "per 0.1 ACWR",
        min_observations: 4,
        rationale: "Training stress shifts immune balance: neutrophilia plus lymphopenia raises NLR",
    },
    // Fitness adaptation
    Mechanism {
        id: "consistency_vo2",
        name: "Training Consistency -> VO2peak",
        dose_family: "training_consistency",
        response_family: "vo2peak",
        category: Category::Cardio,
        response_lag_days: 0,
        per_unit: "per 0.1",
        min_observations: 2,
        rationale: "Consistent aerobic training drives mitochondrial biogenesis and cardiac remodeling",
    },
    Mechanism {
        id: "ferritin_vo2",
        name: "Ferritin -> VO2peak",
        dose_family: "ferritin_level",
        response_family: "vo2peak",
        category: Category::Metabolic,
        response_lag_days: 0,
        per_unit: "per 10 ng/mL",
        min_observations: 2,
        rationale: "Iron stores limit oxygen transport capacity via hemoglobin synthesis",
    },
    // Workout timing -> sleep
    Mechanism {
        id: "workout_time_sleep_eff",
        name: "Workout Time -> Sleep Efficiency",
        dose_family: "workout_end_time",
        response_family: "sleep_efficiency",
        category: Category::Sleep,
        response_lag_days: 0,
        per_unit: "per hr later",
        min_observations: 30,
        rationale: "Late workouts elevate core temperature and sympathetic tone, delaying sleep onset",
    },
    Mechanism {
        id: "bedtime_sleep_quality",
        name: "Bedtime -> Sleep Quality",
        dose_family: "bedtime",
        response_family: "sleep_quality",
        category: Category::Sleep,
        response_lag_days: 0,
        per_unit: "per hr later",
        min_observations: 30,
        rationale: "Later bedtimes misalign with circadian melatonin onset, reducing sleep architecture quality",
    },
    Mechanism {
        id: "bedtime_deep_sleep",
        name: "Bedtime -> Deep Sleep",
        dose_family: "bedtime",
        response_family: "deep_sleep",
        category: Category::Sleep,
        response_lag_days: 0,
        per_unit: "per hr later",
        min_observations: 30,
        rationale: "Earlier bedtime captures more slow-wave sleep in the first half of the night",
    },
    // Sleep -> recovery
    Mechanism {
        id: "sleep_dur_hrv",
        name: "Sleep Duration -> Next-Day HRV",
        dose_family: "sleep_duration",
        response_family: "hrv_daily",
        category: Category::Recovery,
        response_lag_days: 1,
        per_unit: "per hr",
        min_observations: 30,
        rationale: "Adequate sleep restores parasympathetic tone; insufficient sleep elevates sympathetic activity",
    },
    Mechanism {
        id: "sleep_debt_resting_hr",
        name: "Sleep Debt -> Resting HR",
        dose_family: "sleep_debt",
        response_family: "resting_hr",
        category: Category::Recovery,
        response_lag_days: 0,
        per_unit: "per hr deficit",
        min_observations: 30,
        rationale: "Accumulated sleep deficit elevates sympathetic tone and baseline heart rate",
    },
    // Training load -> recovery
    Mechanism {
        id: "trimp_hrv",
        name: "Daily Training Load -> Next-Day HRV",
        dose_family: "training_load",
        response_family: "hrv_daily",
        category: Category::Recovery,
        response_lag_days: 1,
        per_unit: "per 50 TRIMP",
        min_observations: 30,
        rationale: "Acute training load drives autonomic nervous system fatigue measured via HRV depression",
    },
    Mechanism {
        id: "trimp_resting_hr",
        name: "Daily Training Load -> Next-Day Resting HR",
        dose_family: "training_load",
        response_family: "resting_hr",
        category: Category::Recovery,
        response_lag_days: 1,
        per_unit: "per 50 TRIMP",
        min_observations: 30,
        rationale: "Acute training elevates next-day resting HR via sympathetic activation and cardiac fatigue",
    },
    // Activity -> sleep
    Mechanism {
        id: "steps_sleep_eff",
        name: "Daily Steps -> Sleep Efficiency",
        dose_family: "daily_steps",
        response_family: "sleep_efficiency",
        category: Category::Sleep,
        response_lag_days: 0,
        per_unit: "per 2000 steps",
        min_observations: 30,
        rationale: "Moderate daily activity promotes sleep; excessive activity may impair it via overarousal",
    },
    Mechanism {
        id: "energy_deep_sleep",
        name: "Active Energy -> Deep Sleep",
        dose_family: "active_energy",
        response_family: "deep_sleep",
        category: Category::Sleep,
        response_lag_days: 0,
        per_unit: "per 100 kcal",
        min_observations: 30,
        rationale: "Physical activity increases slow-wave sleep need via adenosine accumulation",
    },
    Mechanism {
        id: "duration_sleep_eff",
        name: "Training Duration -> Sleep Efficiency",
        dose_family: "training_duration",
        response_family: "sleep_efficiency",
        category: Category::Sleep,
        response_lag_days: 0,
        per_unit: "per 30 min/day",
        min_observations: 30,
        rationale: "Moderate exercise promotes sleep onset and consolidation via thermoregulatory and adenosine pathways",
    },
    Mechanism {
        id: "duration_deep_sleep",
        name: "Training Duration -> Deep Sleep",
        dose_family: "training_duration",
        response_family: "deep_sleep",
        category: Category::Sleep,
        response_lag_days: 0,
        per_unit: "per 30 min/day",
        min_observations: 30,
        rationale: "Exercise increases slow-wave sleep need proportional to volume",
    },
    Mechanism {
        id: "trimp_sleep_eff",
        name: "Training Load -> Sleep Efficiency",
        dose_family: "training_load",
        response_family: "sleep_efficiency",
        category: Category::Sleep,
        response_lag_days: 0,
        per_unit: "per 50 TRIMP",
        min_observations: 30,
        rationale: "High-intensity training elevates sympathetic tone and core temperature, impairing sleep efficiency at high loads",
    },
    Mechanism {
        id: "trimp_deep_sleep",
        name: "Training Load -> Deep Sleep",
        dose_family: "training_load",
        response_family: "deep_sleep",
        category: Category::Sleep,
        response_lag_days: 0,
        per_unit: "per 50 TRIMP",
        min_observations: 30,
        rationale: "Training intensity drives deep sleep need but extreme loads suppress SWS via cortisol",
    },
    Mechanism {
        id: "running_sleep_eff",
        name: "Running Volume -> Sleep Efficiency",
        dose_family: "running_volume",
        response_family: "sleep_efficiency",
        category: Category::Sleep,
        response_lag_days: 0,
        per_unit: "per 2 km/day",
        min_observations: 30,
        rationale: "Aerobic running improves sleep quality via cardiovascular and thermoregulatory mechanisms",
    },
    Mechanism {
        id: "zone2_deep_sleep",
        name: "Zone 2 Volume -> Deep Sleep",
        dose_family: "zone2_volume",
        response_family: "deep_sleep",
        category: Category::Sleep,
        response_lag_days: 0,
        per_unit: "per 15 min/day",
        min_observations: 30,
        rationale: "Zone 2 aerobic exercise specifically increases slow-wave sleep via sustained adenosine accumulation",
    },
    // Weekly volume -> recovery
    Mechanism {
        id: "weekly_km_hrv",
        name: "Weekly Volume -> HRV Baseline",
        dose_family: "running_volume",
        response_family: "hrv_baseline",
        category: Category::Recovery,
        response_lag_days: 0,
        per_unit: "per 10 km/wk",
        min_observations: 30,
        rationale: "Moderate volume improves vagal tone; excessive volume suppresses it via overtraining",
    },
    // Travel / jet lag -> recovery
    Mechanism {
        id: "travel_sleep_eff",
        name: "Travel Load -> Sleep Efficiency",
        dose_family: "travel_load",
        response_family: "sleep_efficiency",
        category: Category::Sleep,
        response_lag_days: 0,
        per_unit: "per 0.2 load",
        min_observations: 20,
        rationale: "Jet lag disrupts circadian rhythm, delaying melatonin onset and reducing sleep efficiency",
    },
    Mechanism {
        id: "travel_hrv",
        name: "Travel Load -> Daily HRV",
        dose_family: "travel_load",
        response_family: "hrv_daily",
        category: Category::Recovery,
        response_lag_days: 0,
        per_unit: "per 0.2 load",
        min_observations: 20,
        rationale: "Travel stress and circadian misalignment suppress parasympathetic tone measured via HRV",
    },
    Mechanism {
        id: "travel_rhr",
        name: "Travel Load -> Resting HR",
        dose_family: "travel_load",
        response_family: "resting_hr",
        category: Category::Recovery,
        response_lag_days: 0,
        per_unit: "per 0.2 load",
        min_observations: 20,
        rationale: "Circadian disruption and travel fatigue elevate sympathetic tone and resting heart rate",
    },
    Mechanism {
        id: "travel_deep_sleep",
        name: "Travel Load -> Deep Sleep",
        dose_family: "travel_load",
        response_family: "deep_sleep",
        category: Category::Sleep,
        response_lag_days: 0,
        per_unit: "per 0.2 load",
        min_observations: 20,
        rationale: "Jet lag disrupts slow-wave sleep architecture via circadian misalignment",
    },
    // Activity -> body composition
    Mechanism {
        id: "training_vol_body_fat",
        name: "Training Volume -> Body Fat",
        dose_family: "training_duration",
        response_family: "body_fat",
        category: Category::Metabolic,
        response_lag_days: 0,
        per_unit: "per 10 hrs/mo",
        min_observations: 10,
        rationale: "Higher training volume increases energy expenditure and fat oxidation",
    },
    Mechanism {
        id: "steps_body_mass",
        name: "Daily Activity -> Body Mass",
        dose_family: "daily_steps",
        response_family: "body_mass",
        category: Category::Metabolic,
        response_lag_days: 0,
        per_unit: "per 2000 steps",
        min_observations: 10,
        rationale: "Higher daily activity creates energy deficit supporting weight management",
    },
    // Training -> liver / muscle enzymes
    Mechanism {
        id: "training_hrs_ast",
        name: "Training Hours -> AST",
        dose_family: "training_duration",
        response_family: "ast",
        category: Category::Metabolic,
        response_lag_days: 7,
        per_unit: "per 4 hrs/mo",
        min_observations: 3,
        rationale: "Skeletal muscle damage during exercise releases AST into bloodstream",
    },
    Mechanism {
        id: "training_hrs_alt",
        name: "Training Hours -> ALT",
        dose_family: "training_duration",
        response_family: "alt",
        category: Category::Metabolic,
        response_lag_days: 7,
        per_unit: "per 4 hrs/mo",
        min_observations: 3,
        rationale: "Exercise-induced hepatic stress and muscle damage elevate ALT",
    },
    // Training -> metabolic markers
    Mechanism {
        id: "training_hrs_glucose",
        name: "Training Hours -> Glucose",
        dose_family: "training_duration",
        response_family: "glucose",
        category: Category::Metabolic,
        response_lag_days: 14,
        per_unit: "per 4 hrs/mo",
        min_observations: 3,
        rationale: "Exercise upregulates GLUT4 transporters, improving glucose disposal",
    },
    Mechanism {
        id: "training_hrs_hba1c",
        name: "Training Hours -> HbA1c",
        dose_family: "training_duration",
        response_family: "hba1c",
        category: Category::Metabolic,
        response_lag_days: 14,
        per_unit: "per 4 hrs/mo",
        min_observations: 3,
        rationale: "Chronic exercise improves long-term glycemic control through insulin sensitization",
    },
    Mechanism {
        id: "training_hrs_insulin",
        name: "Training Hours -> Insulin",
        dose_family: "training_duration",
        response_family: "insulin",
        category: Category::Metabolic,
        response_lag_days: 14,
        per_unit: "per 4 hrs/mo",
        min_observations: 3,
        rationale: "Regular exercise improves insulin sensitivity, lowering fasting insulin levels",
    },
    Mechanism {
        id: "training_hrs_homocysteine",
        name: "Training Hours -> Homocysteine",
        dose_family: "training_duration",
        response_family: "homocysteine",
        category: Category::Metabolic,
        response_lag_days: 14,
        per_unit: "per 4 hrs/mo",
        min_observations: 3,
        rationale: "Exercise increases B6/B12/folate demand for methylation; may lower homocysteine",
    },
    Mechanism {
        id: "training_hrs_creatinine",
        name: "Training Hours -> Creatinine",
        dose_family: "training_duration",
        response_family: "creatinine",
        category: Category::Metabolic,
        response_lag_days: 14,
        per_unit: "per 4 hrs/mo",
        min_observations: 3,
        rationale: "Higher muscle mass and exercise increase creatine turnover and serum creatinine",
    },
    // Exercise -> micronutrients
    Mechanism {
        id: "run_vol_zinc",
        name: "Running Volume -> Zinc",
        dose_family: "running_volume",
        response_family: "zinc",
        category: Category::Metabolic,
        response_lag_days: 14,
        per_unit: "per 40 km/mo",
        min_observations: 3,
        rationale: "Zinc lost through sweat during endurance exercise; heavy training depletes stores",
    },
    Mechanism {
        id: "run_vol_magnesium",
        name: "Running Volume -> Magnesium",
        dose_family: "running_volume",
        response_family: "magnesium",
        category: Category::Metabolic,
        response_lag_days: 14,
        per_unit: "per 40 km/mo",
        min_observations: 3,
        rationale: "Magnesium lost through sweat and increased renal excretion during exercise",
    },
    // Sleep -> slow markers
    Mechanism {
        id: "sleep_dur_cortisol",
        name: "Sleep Duration -> Cortisol",
        dose_family: "sleep_duration",
        response_family: "cortisol",
        category: Category::Recovery,
        response_lag_days: 0,
        per_unit: "per hr",
        min_observations: 4,
        rationale: "Sleep restriction elevates next-morning cortisol via HPA axis dysregulation",
    },
    Mechanism {
        id: "sleep_dur_testosterone",
        name: "Sleep Duration -> Testosterone",
        dose_family: "sleep_duration",
        response_family: "testosterone",
        category: Category::Recovery,
        response_lag_days: 0,
        per_unit: "per hr",
        min_observations: 4,
        rationale: "Testosterone is primarily produced during sleep; restriction suppresses production",
    },
    Mechanism {
        id: "sleep_dur_glucose",
        name: "Sleep Duration -> Glucose",
        dose_family: "sleep_duration",
        response_family: "glucose",
        category: Category::Recovery,
        response_lag_days: 0,
        per_unit: "per hr",
        min_observations: 4,
        rationale: "Chronic sleep restriction impairs insulin sensitivity and glucose tolerance",
    },
    // Cross-links: marker -> marker
    Mechanism {
        id: "iron_sat_hemoglobin",
        name: "Iron Saturation -> Hemoglobin",
        dose_family: "iron_sat_level",
        response_family: "hemoglobin",
        category: Category::Metabolic,
        response_lag_days: 0,
        per_unit: "per 5%",
        min_observations: 2,
        rationale: "Iron saturation determines iron availability for hemoglobin synthesis",
    },
    Mechanism {
        id: "vitamin_d_testosterone",
        name: "Vitamin D -> Testosterone",
        dose_family: "vitamin_d_level",
        response_family: "testosterone",
        category: Category::Metabolic,
        response_lag_days: 0,
        per_unit: "per 10 ng/mL",
        min_observations: 2,
        rationale: "Vitamin D receptors in Leydig cells; deficiency is associated with lower testosterone",
    },
    Mechanism {
        id: "omega3_hscrp",
        name: "Omega-3 Index -> hsCRP",
        dose_family: "omega3_level",
        response_family: "hscrp",
        category: Category::Metabolic,
        response_lag_days: 0,
        per_unit: "per 1%",
        min_observations: 2,
        rationale: "EPA/DHA compete with arachidonic acid, reducing pro-inflammatory eicosanoid production",
    },
    Mechanism {
        id: "ferritin_rbc",
        name: "Ferritin -> RBC",
        dose_family: "ferritin_level",
        response_family: "rbc",
        category: Category::Metabolic,
        response_lag_days: 0,
        per_unit: "per 10 ng/mL",
        min_observations: 2,
        rationale: "Iron stores support erythropoiesis; depletion impairs red blood cell production",
    },
    Mechanism {
        id: "ferritin_hemoglobin",
        name: "Ferritin -> Hemoglobin",
        dose_family: "ferritin_level",
        response_family: "hemoglobin",
        category: Category::Metabolic,
        response_lag_days: 0,
        per_unit: "per 10 ng/mL",
        min_observations: 2,
        rationale: "Low ferritin limits iron availability for hemoglobin synthesis",
    },
    Mechanism {
        id: "b12_homocysteine",
        name: "B12 -> Homocysteine",
        dose_family: "b12_level",
        response_family: "homocysteine",
        category: Category::Metabolic,
        response_lag_days: 0,
        per_unit: "per 100 pg/mL",
        min_observations: 2,
        rationale: "B12 is a cofactor for methionine synthase which clears homocysteine",
    },
    Mechanism {
        id: "homocysteine_hscrp",
        name: "Homocysteine -> hsCRP",
        dose_family: "homocysteine_level",
        response_family: "hscrp",
        category: Category::Metabolic,
        response_lag_days: 0,
        per_unit: "per umol/L",
        min_observations: 2,
        rationale: "Elevated homocysteine promotes endothelial dysfunction and vascular inflammation",
    },
    // Dietary -> body composition
    Mechanism {
        id: "protein_body_fat",
        name: "Dietary Protein -> Body Fat",
        dose_family: "dietary_protein",
        response_family: "body_fat",
        category: Category::Metabolic,
        response_lag_days: 0,
        per_unit: "per 10 g/day",
        min_observations: 10,
        rationale: "Higher protein intake increases thermic effect and satiety, supporting fat loss",
    },
    Mechanism {
        id: "energy_body_mass",
        name: "Dietary Energy -> Body Mass",
        dose_family: "dietary_energy",
        response_family: "body_mass",
        category: Category::Metabolic,
        response_lag_days: 0,
        per_unit: "per 100 kcal/day",
        min_observations: 10,
        rationale: "Chronic energy surplus/deficit drives body mass changes via energy balance",
    },
];

/// The full mechanism catalog.
pub fn mechanisms() -> &'static [Mechanism] {
    MECHANISMS
}

/// Look up a mechanism by id.
pub fn mechanism(id: &str) -> Option<&'static Mechanism> {
    MECHANISMS.iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::families::{dose_family, response_family};
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(mechanisms().len(), 65);
    }

    #[test]
    fn test_mechanism_ids_unique() {
        let ids: HashSet<_> = mechanisms().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), mechanisms().len());
    }

    #[test]
    fn test_every_mechanism_references_defined_families() {
        for mech in mechanisms() {
            assert!(
                dose_family(mech.dose_family).is_some(),
                "{} references unknown dose family {}",
                mech.id,
                mech.dose_family
            );
            assert!(
                response_family(mech.response_family).is_some(),
                "{} references unknown response family {}",
                mech.id,
                mech.response_family
            );
        }
    }

    #[test]
    fn test_mechanism_lookup() {
        let mech = mechanism("run_vol_ferritin").unwrap();
        assert_eq!(mech.dose_family, "running_volume");
        assert_eq!(mech.response_family, "ferritin");
    }

    #[test]
    fn test_min_observations_positive() {
        for mech in mechanisms() {
            assert!(mech.min_observations > 0, "{} has zero min_observations", mech.id);
        }
    }
}
