//! Compare command handler
//!
//! Reports the chronological relation between two terms.

use super::parse_term;
use semester_year::{debug, error};

/// Run the compare command.
///
/// # Arguments
/// * `a` - First term in short format
/// * `b` - Second term in short format
pub fn run(a: &str, b: &str) {
    if let Err(err) = compare(a, b) {
        error!("Compare failed for '{a}' vs '{b}': {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn compare(a: &str, b: &str) -> Result<(), String> {
    let first = parse_term(a)?;
    let second = parse_term(b)?;
    debug!("Comparing {first} against {second}");

    if first == second {
        println!("{first} equals {second}");
    } else if first.is_after(second) {
        println!("{first} is after {second}");
    } else {
        println!("{first} is before {second}");
    }

    Ok(())
}
