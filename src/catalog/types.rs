use std::fmt;

/// COMPLE variable class: Choice, Load, Marker, Outcome, Environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableClass {
    Choice,
    Load,
    Marker,
    Outcome,
    Environment,
}

impl fmt::Display for VariableClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            VariableClass::Choice => "C",
            VariableClass::Load => "L",
            VariableClass::Marker => "M",
            VariableClass::Outcome => "O",
            VariableClass::Environment => "E",
        };
        write!(f, "{}", c)
    }
}

/// How fast a response variable reacts to its dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timescale {
    /// 1-7 days: HRV, resting HR, sleep quality
    Fast,
    /// 7-28 days: hsCRP, body composition trends
    Medium,
    /// 28-90 days: iron, hormones, VO2peak, lipids
    Slow,
}

impl fmt::Display for Timescale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Timescale::Fast => "fast",
            Timescale::Medium => "medium",
            Timescale::Slow => "slow",
        };
        write!(f, "{}", s)
    }
}

/// Insight category a mechanism belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Metabolic,
    Cardio,
    Recovery,
    Sleep,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Metabolic,
        Category::Cardio,
        Category::Recovery,
        Category::Sleep,
    ];

    pub fn parse(s: &str) -> Option<Category> {
        match s.to_ascii_lowercase().as_str() {
            "metabolic" => Some(Category::Metabolic),
            "cardio" => Some(Category::Cardio),
            "recovery" => Some(Category::Recovery),
            "sleep" => Some(Category::Sleep),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Metabolic => "metabolic",
            Category::Cardio => "cardio",
            Category::Recovery => "recovery",
            Category::Sleep => "sleep",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A group of columns that measure the same underlying dose concept.
/// Columns are listed in priority order; the first available one is used.
#[derive(Debug, Clone, Copy)]
pub struct DoseFamily {
    pub id: &'static str,
    pub label: &'static str,
    pub columns: &'static [&'static str],
    pub unit: &'static str,
    pub class: VariableClass,
}

/// A group of columns that measure the same underlying response.
#[derive(Debug, Clone, Copy)]
pub struct ResponseFamily {
    pub id: &'static str,
    pub label: &'static str,
    pub columns: &'static [&'static str],
    pub unit: &'static str,
    pub class: VariableClass,
    pub timescale: Timescale,
}

/// A hypothesized dose -> response causal relationship that can be tested
/// once a column is available for both families.
#[derive(Debug, Clone, Copy)]
pub struct Mechanism {
    pub id: &'static str,
    pub name: &'static str,
    pub dose_family: &'static str,
    pub response_family: &'static str,
    pub category: Category,
    pub response_lag_days: u32,
    pub per_unit: &'static str,
    pub min_observations: u32,
    pub rationale: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_roundtrip() {
        for cat in Category::ALL {
            assert_eq!(Category::parse(cat.label()), Some(cat));
        }
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!(Category::parse("Sleep"), Some(Category::Sleep));
        assert_eq!(Category::parse("METABOLIC"), Some(Category::Metabolic));
    }

    #[test]
    fn test_category_parse_unknown() {
        assert_eq!(Category::parse("strength"), None);
    }

    #[test]
    fn test_variable_class_display() {
        assert_eq!(VariableClass::Choice.to_string(), "C");
        assert_eq!(VariableClass::Marker.to_string(), "M");
        assert_eq!(VariableClass::Outcome.to_string(), "O");
    }
}
