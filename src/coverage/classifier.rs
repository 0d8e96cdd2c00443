//! Testability classification: which mechanisms can currently be fitted,
//! given the set of available timeline columns.

use std::collections::HashSet;

use crate::catalog::{self, Category, Mechanism};

/// Whether a mechanism can be tested with the available columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Testability {
    /// Both sides have data. Carries the chosen column per side.
    Testable {
        dose_column: &'static str,
        response_column: &'static str,
    },
    MissingDose,
    MissingResponse,
    MissingBoth,
}

impl Testability {
    pub fn is_testable(&self) -> bool {
        matches!(self, Testability::Testable { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Testability::Testable { .. } => "testable",
            Testability::MissingDose => "missing dose",
            Testability::MissingResponse => "missing response",
            Testability::MissingBoth => "missing both",
        }
    }
}

/// A mechanism paired with its classification.
#[derive(Debug, Clone, Copy)]
pub struct MechanismStatus {
    pub mechanism: &'static Mechanism,
    pub testability: Testability,
}

/// First available column from a priority-ordered family column list.
pub fn best_column(columns: &[&'static str], available: &HashSet<String>) -> Option<&'static str> {
    columns.iter().find(|c| available.contains(**c)).copied()
}

/// Classify every catalog mechanism against the available columns.
pub fn classify(available: &HashSet<String>) -> Vec<MechanismStatus> {
    catalog::mechanisms()
        .iter()
        .map(|mech| MechanismStatus {
            mechanism: mech,
            testability: classify_one(mech, available),
        })
        .collect()
}

fn classify_one(mech: &Mechanism, available: &HashSet<String>) -> Testability {
    // Families are validated by catalog tests; an unknown id reads as no columns.
    let dose_cols = catalog::dose_family(mech.dose_family).map(|f| f.columns).unwrap_or(&[]);
    let resp_cols = catalog::response_family(mech.response_family)
        .map(|f| f.columns)
        .unwrap_or(&[]);

    let dose = best_column(dose_cols, available);
    let resp = best_column(resp_cols, available);

    match (dose, resp) {
        (Some(dose_column), Some(response_column)) => Testability::Testable {
            dose_column,
            response_column,
        },
        (None, Some(_)) => Testability::MissingDose,
        (Some(_), None) => Testability::MissingResponse,
        (None, None) => Testability::MissingBoth,
    }
}

/// Ids of the mechanisms testable with the available columns.
pub fn testable_ids(available: &HashSet<String>) -> HashSet<&'static str> {
    classify(available)
        .iter()
        .filter(|s| s.testability.is_testable())
        .map(|s| s.mechanism.id)
        .collect()
}

/// Aggregate coverage counts, overall and per category.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    pub total: usize,
    pub testable: usize,
    pub missing_dose: usize,
    pub missing_response: usize,
    pub missing_both: usize,
    /// (category, testable, total) in fixed category order.
    pub by_category: Vec<(Category, usize, usize)>,
}

pub fn coverage_report(statuses: &[MechanismStatus]) -> CoverageReport {
    let mut report = CoverageReport {
        total: statuses.len(),
        testable: 0,
        missing_dose: 0,
        missing_response: 0,
        missing_both: 0,
        by_category: Category::ALL.iter().map(|c| (*c, 0, 0)).collect(),
    };

    for status in statuses {
        match status.testability {
            Testability::Testable { .. } => report.testable += 1,
            Testability::MissingDose => report.missing_dose += 1,
            Testability::MissingResponse => report.missing_response += 1,
            Testability::MissingBoth => report.missing_both += 1,
        }
        if let Some(entry) = report
            .by_category
            .iter_mut()
            .find(|(c, _, _)| *c == status.mechanism.category)
        {
            entry.2 += 1;
            if status.testability.is_testable() {
                entry.1 += 1;
            }
        }
    }

    report
}
