//! Subcommands for the CLI

pub mod compare;
pub mod config;
pub mod range;
pub mod shift;
pub mod show;

use semester_year::models::SemesterAndYear;

/// Parse a short-format term argument, mapping failures to user-facing text
pub(crate) fn parse_term(input: &str) -> Result<SemesterAndYear, String> {
    SemesterAndYear::from_short_format(input).map_err(|e| format!("✗ Invalid term '{input}': {e}"))
}
