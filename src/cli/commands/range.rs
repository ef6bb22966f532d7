//! Range command handler
//!
//! Lists every semester between two terms, inclusive.

use super::parse_term;
use semester_year::config::Config;
use semester_year::{error, info};

/// Run the range command.
///
/// # Arguments
/// * `from` - Start term in short format
/// * `to` - End term in short format
/// * `config` - Configuration controlling display options
pub fn run(from: &str, to: &str, config: &Config) {
    if let Err(err) = list_range(from, to, config) {
        error!("Range failed for '{from}'..'{to}': {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn list_range(from: &str, to: &str, config: &Config) -> Result<(), String> {
    let start = parse_term(from)?;
    let end = parse_term(to)?;

    if start.is_after(end) {
        return Err(format!("✗ Start term {start} is after end term {end}"));
    }

    let mut count = 0usize;
    for term in start.range_to(end) {
        if config.display.long_names {
            println!("{} ({} {})", term, term.semester_name(), term.year());
        } else {
            println!("{term}");
        }
        count += 1;
    }
    info!("Listed {count} term(s) from {start} to {end}");

    Ok(())
}
