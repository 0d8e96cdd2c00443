use chrono::Duration;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::catalog;
use crate::coverage::{CoverageReport, MechanismStatus};
use crate::edges::EdgeSummary;
use crate::scoring::{MarginalValue, Tier};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format a score for display: whole number, no padding decisions here
pub fn format_score(score: f64) -> String {
    format!("{:.0}", score)
}

fn tier_colored(tier: Tier) -> String {
    match tier {
        Tier::High => tier.label().green().bold().to_string(),
        Tier::Moderate => tier.label().yellow().to_string(),
        Tier::Marginal => tier.label().cyan().to_string(),
        Tier::Minimal => tier.label().dimmed().to_string(),
    }
}

/// Format ranked candidates as a table: Index, Score, Tier, Label, counts
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column is right-aligned, 3 chars wide (scores are capped at 100)
pub fn format_ranked_table(results: &[MarginalValue], use_colors: bool) -> String {
    if results.is_empty() {
        return "No candidate sources to rank.".to_string();
    }

    let term_width = get_terminal_width();
    let separator = "  ";

    results
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>3}", format_score(result.score));
            let tier_padded = format!("{:<8}", result.tier.label());
            let counts = format!(
                "{} new / {} confounders / {} boosts",
                result.unlocked.len(),
                result.resolved.len(),
                result.boosted.len()
            );

            let fixed_width = 3 + 1 + 3 + separator.len() * 3 + 8 + counts.len();
            let label = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_label(result.source.label, width - fixed_width)
                } else {
                    truncate_label(result.source.label, 20)
                }
            } else {
                result.source.label.to_string()
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    format!("{:<8}", tier_colored(result.tier)),
                    separator,
                    label,
                    separator,
                    counts.dimmed()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_padded, separator, tier_padded, separator, label, separator,
                    counts
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one candidate with full factor breakdown (for the explain command)
pub fn format_candidate_detail(
    result: &MarginalValue,
    summaries: &[EdgeSummary],
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();
    let source = result.source;

    if use_colors {
        lines.push(format!("{} ({})", source.label.bold(), source.id.dimmed()));
        lines.push(format!("  Kind: {}", source.kind.cyan()));
    } else {
        lines.push(format!("{} ({})", source.label, source.id));
        lines.push(format!("  Kind: {}", source.kind));
    }
    lines.push(format!("  {}", source.description));
    lines.push(format!(
        "  Score: {} ({})",
        format_score(result.score),
        if use_colors {
            tier_colored(result.tier)
        } else {
            result.tier.label().to_string()
        }
    ));

    if result.factors.is_empty() {
        lines.push("  Adds nothing: every column is already available.".to_string());
        return lines.join("\n");
    }

    for factor in &result.factors {
        lines.push(format!(
            "  {:+} {}: {}",
            factor.points as i64, factor.label, factor.description
        ));
    }

    if !result.unlocked.is_empty() {
        lines.push("  Newly testable:".to_string());
        for id in &result.unlocked {
            // Catalog tests guarantee every mechanism id resolves.
            if let Some(mech) = catalog::mechanism(id) {
                lines.push(format!("    - {} [{}]", mech.name, mech.category.label()));
            }
        }
    }

    if !result.resolved.is_empty() {
        lines.push(format!(
            "  Latent confounders observed: {}",
            result.resolved.join(", ")
        ));
    }

    if !result.boosted.is_empty() {
        lines.push("  Fitted edges sharpened:".to_string());
        for key in &result.boosted {
            let annotation = summaries
                .iter()
                .find(|s| &s.edge_key == key)
                .map(|s| match s.age() {
                    Some(age) => format!(" ({} obs, fitted {} ago)", s.n_obs, format_age(age)),
                    None => format!(" ({} obs)", s.n_obs),
                })
                .unwrap_or_default();
            lines.push(format!("    - {}{}", key, annotation));
        }
    }

    lines.join("\n")
}

/// Format the coverage report: overall counts, then per category
pub fn format_coverage_report(report: &CoverageReport, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let headline = format!(
        "{}/{} mechanisms testable",
        report.testable, report.total
    );
    if use_colors {
        lines.push(headline.bold().to_string());
    } else {
        lines.push(headline);
    }
    lines.push(format!(
        "  missing dose: {}  missing response: {}  missing both: {}",
        report.missing_dose, report.missing_response, report.missing_both
    ));

    for (category, testable, total) in &report.by_category {
        let bar_width = 20usize;
        let filled = if *total == 0 {
            0
        } else {
            (bar_width * testable) / total
        };
        let bar = format!("{}{}", "#".repeat(filled), "-".repeat(bar_width - filled));
        if use_colors {
            lines.push(format!(
                "  {:<10} {} {:>2}/{}",
                category.label(),
                bar.dimmed(),
                testable,
                total
            ));
        } else {
            lines.push(format!(
                "  {:<10} {} {:>2}/{}",
                category.label(),
                bar,
                testable,
                total
            ));
        }
    }

    lines.join("\n")
}

/// Format the mechanism catalog with testability labels, one line each
pub fn format_mechanism_table(statuses: &[MechanismStatus], use_colors: bool) -> String {
    statuses
        .iter()
        .map(|status| {
            let label = status.testability.label();
            let line = format!(
                "{:<16} {:<45} [{}]",
                label,
                status.mechanism.name,
                status.mechanism.category.label()
            );
            if use_colors && status.testability.is_testable() {
                line.green().to_string()
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the candidate source catalog, marking owned sources
pub fn format_source_list(owned: &[String], use_colors: bool) -> String {
    catalog::candidate_sources()
        .iter()
        .map(|source| {
            let marker = if owned.iter().any(|o| o == source.id) {
                "*"
            } else {
                " "
            };
            let line = format!(
                "{} {:<22} {:<10} {}",
                marker, source.id, source.kind, source.description
            );
            if use_colors && marker == "*" {
                line.dimmed().to_string()
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked candidates as tab-separated values for scripting
/// Columns: score, source_id, tier, new, confounders, boosts (no headers, no colors)
pub fn format_tsv(results: &[MarginalValue]) -> String {
    if results.is_empty() {
        return String::new();
    }

    results
        .iter()
        .map(|result| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                format_score(result.score),
                result.source.id,
                result.tier.label(),
                result.unlocked.len(),
                result.resolved.len(),
                result.boosted.len()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::{classify, coverage_report};
    use crate::scoring::{evaluate_candidate, rank_candidates, ScoringWeights};
    use std::collections::HashSet;

    fn runner_columns() -> HashSet<String> {
        catalog::candidate_source("gps_watch")
            .unwrap()
            .columns
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn test_format_ranked_table_empty() {
        let result = format_ranked_table(&[], false);
        assert_eq!(result, "No candidate sources to rank.");
    }

    #[test]
    fn test_format_ranked_table_lines() {
        let available = runner_columns();
        let ranked = rank_candidates(
            &available,
            &HashSet::new(),
            &[],
            &ScoringWeights::default(),
        );
        let output = format_ranked_table(&ranked, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), ranked.len());
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[1].starts_with(" 2."));
        assert!(lines[0].contains("new /"));
    }

    #[test]
    fn test_format_candidate_detail() {
        let available = runner_columns();
        let source = catalog::candidate_source("cbc_panel").unwrap();
        let result = evaluate_candidate(source, &available, &[], &ScoringWeights::default());
        let output = format_candidate_detail(&result, &[], false);

        assert!(output.contains("CBC + Iron Panel (cbc_panel)"));
        assert!(output.contains("Kind: lab panel"));
        assert!(output.contains("New mechanisms"));
        assert!(output.contains("Newly testable:"));
        assert!(output.contains("Running Volume -> Ferritin"));
    }

    #[test]
    fn test_format_candidate_detail_nothing_to_add() {
        let available = runner_columns();
        let source = catalog::candidate_source("gps_watch").unwrap();
        let result = evaluate_candidate(source, &available, &[], &ScoringWeights::default());
        let output = format_candidate_detail(&result, &[], false);
        assert!(output.contains("Adds nothing"));
    }

    #[test]
    fn test_format_candidate_detail_annotates_boosted_edges() {
        let available = runner_columns();
        let fitted = vec![EdgeSummary {
            edge_key: "weekly_run_km->glucose".to_string(),
            name: "Running Volume -> Glucose".to_string(),
            category: "metabolic".to_string(),
            response_family: Some("glucose".to_string()),
            n_obs: 14,
            confidence: 0.72,
            fitted_at: Some(chrono::Utc::now() - Duration::days(3)),
            degenerate: false,
        }];
        let source = catalog::candidate_source("cgm").unwrap();
        let result = evaluate_candidate(source, &available, &fitted, &ScoringWeights::default());
        let output = format_candidate_detail(&result, &fitted, false);

        assert!(output.contains("Fitted edges sharpened:"));
        assert!(output.contains("weekly_run_km->glucose (14 obs, fitted 3d ago)"));
    }

    #[test]
    fn test_format_coverage_report() {
        let available = runner_columns();
        let statuses = classify(&available);
        let report = coverage_report(&statuses);
        let output = format_coverage_report(&report, false);

        assert!(output.contains("mechanisms testable"));
        assert!(output.contains("missing dose:"));
        assert!(output.contains("metabolic"));
        assert!(output.contains("sleep"));
    }

    #[test]
    fn test_format_mechanism_table() {
        let available = runner_columns();
        let statuses = classify(&available);
        let output = format_mechanism_table(&statuses, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 65);
        assert!(lines.iter().any(|l| l.starts_with("missing response")));
    }

    #[test]
    fn test_format_source_list_marks_owned() {
        let owned = vec!["gps_watch".to_string()];
        let output = format_source_list(&owned, false);
        let gps_line = output
            .lines()
            .find(|l| l.contains("gps_watch"))
            .unwrap();
        assert!(gps_line.starts_with('*'));
        let cgm_line = output.lines().find(|l| l.contains("cgm")).unwrap();
        assert!(cgm_line.starts_with(' '));
    }

    #[test]
    fn test_format_tsv_empty() {
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_format_tsv_columns() {
        let available = runner_columns();
        let ranked = rank_candidates(
            &available,
            &HashSet::new(),
            &[],
            &ScoringWeights::default(),
        );
        let output = format_tsv(&ranked);
        let first = output.lines().next().unwrap();
        assert_eq!(first.split('\t').count(), 6);
    }

    #[test]
    fn test_format_score_whole() {
        assert_eq!(format_score(40.0), "40");
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(99.6), "100");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Short", 20), "Short");
        assert_eq!(truncate_label("This is a very long label", 15), "This is a ve...");
        assert_eq!(truncate_label("Hello world", 3), "Hel");
    }

    #[test]
    fn test_format_age_buckets() {
        assert_eq!(format_age(Duration::hours(3)), "3h");
        assert_eq!(format_age(Duration::days(2)), "2d");
        assert_eq!(format_age(Duration::weeks(2)), "2w");
        assert_eq!(format_age(Duration::minutes(30)), "30m");
        assert_eq!(format_age(Duration::seconds(30)), "now");
    }
}
