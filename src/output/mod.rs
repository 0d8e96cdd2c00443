pub mod formatter;

pub use formatter::{
    format_age, format_candidate_detail, format_coverage_report, format_mechanism_table,
    format_ranked_table, format_score, format_source_list, format_tsv, should_use_colors,
};
