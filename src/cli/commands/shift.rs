//! Next/prev command handler
//!
//! Steps a term forward or backward over the two-semester cycle.

use super::parse_term;
use semester_year::config::Config;
use semester_year::models::SemesterAndYear;
use semester_year::{error, info};

/// Direction of a shift operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Step toward later semesters
    Forward,
    /// Step toward earlier semesters
    Backward,
}

/// Run the next/prev command.
///
/// # Arguments
/// * `term` - Term in short format, e.g. `V-2024`
/// * `steps` - Number of semesters to move
/// * `direction` - Forward for `next`, backward for `prev`
/// * `config` - Configuration controlling display options
pub fn run(term: &str, steps: u32, direction: Direction, config: &Config) {
    if let Err(err) = shift(term, steps, direction, config) {
        error!("Shift failed for '{term}': {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn shift(term: &str, steps: u32, direction: Direction, config: &Config) -> Result<(), String> {
    let start = parse_term(term)?;

    let result = match direction {
        Direction::Forward => start.incremented_by(steps),
        Direction::Backward => start.decremented_by(steps),
    };
    info!("Shifted {start} by {steps} step(s) to {result}");

    print_term(result, config);
    Ok(())
}

fn print_term(term: SemesterAndYear, config: &Config) {
    if config.display.long_names {
        println!("{} ({} {})", term, term.semester_name(), term.year());
    } else {
        println!("{term}");
    }
}
