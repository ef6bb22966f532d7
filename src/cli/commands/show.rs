//! Show command handler
//!
//! Parses a short-format term and prints its components.

use super::parse_term;
use semester_year::config::Config;
use semester_year::{debug, error};

/// Run the show command.
///
/// # Arguments
/// * `term` - Term in short format, e.g. `H-2024`
/// * `config` - Configuration controlling display options
pub fn run(term: &str, config: &Config) {
    if let Err(err) = show(term, config) {
        error!("Show failed for '{term}': {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn show(term: &str, config: &Config) -> Result<(), String> {
    let parsed = parse_term(term)?;
    debug!("Parsed '{term}' as {parsed}");

    println!("Term:     {}", parsed.short_format());
    println!("Year:     {}", parsed.year());
    if config.display.long_names {
        println!(
            "Semester: {} ({})",
            parsed.semester().code(),
            parsed.semester_name()
        );
    } else {
        println!("Semester: {}", parsed.semester().code());
    }

    Ok(())
}
