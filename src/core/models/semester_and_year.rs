//! Semester-and-year value object
//!
//! A pair of a 4-digit year and a [`Semester`], with a canonical short
//! string form `"<code>-<year>"` (e.g. `"H-2024"`). Arithmetic over the
//! two-semester cycle is pure: every operation returns a new value.

use super::Semester;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Years below this are treated as short form and shifted into the 2000s
const SHORT_YEAR_LIMIT: i32 = 100;

/// A specific semester of a specific academic year
///
/// Ordering is chronological: `Spring(Y) < Autumn(Y) < Spring(Y+1)`.
/// Field order matters for the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemesterAndYear {
    /// The absolute 4-digit-scale year
    year: i32,
    /// The semester within that year
    semester: Semester,
}

/// Error returned when a short-format string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSemesterAndYearError {
    /// Input did not split into exactly `"<semester>-<year>"`
    Malformed(String),
    /// The semester part was neither a short code nor a known alias
    InvalidSemester(String),
    /// The year part was not an integer
    InvalidYear(String),
}

impl fmt::Display for ParseSemesterAndYearError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(input) => {
                write!(f, "Expected \"<semester>-<year>\", got: {input}")
            }
            Self::InvalidSemester(part) => write!(f, "Unknown semester: {part}"),
            Self::InvalidYear(part) => write!(f, "Invalid year: {part}"),
        }
    }
}

impl Error for ParseSemesterAndYearError {}

impl SemesterAndYear {
    /// Create a new semester/year pair
    ///
    /// Two-digit years are supported as a short form: any `year` below
    /// 100 (including negative values, matching the original contract)
    /// is normalized to `2000 + year`, so `new(24, Autumn)` means
    /// autumn 2024.
    #[must_use]
    pub const fn new(year: i32, semester: Semester) -> Self {
        let year = if year < SHORT_YEAR_LIMIT {
            2000 + year
        } else {
            year
        };
        Self { year, semester }
    }

    /// Create from a year and a semester string
    ///
    /// The semester may be a short code ("H", "V") or a long-form alias
    /// ("HØST", "VÅR"). The year is normalized as in [`new`].
    ///
    /// # Errors
    /// Returns [`ParseSemesterAndYearError::InvalidSemester`] if the
    /// semester string does not resolve.
    ///
    /// [`new`]: Self::new
    pub fn from_parts(year: i32, semester: &str) -> Result<Self, ParseSemesterAndYearError> {
        let semester = semester
            .parse::<Semester>()
            .map_err(|_| ParseSemesterAndYearError::InvalidSemester(semester.to_string()))?;
        Ok(Self::new(year, semester))
    }

    /// Parse the canonical short format `"<semester>-<year>"`
    ///
    /// The input must contain exactly one `-` delimiter with a
    /// resolvable semester before it and an integer year after it.
    /// Short-form years normalize, so `"V-99"` parses to spring 2099.
    ///
    /// # Errors
    /// Returns a [`ParseSemesterAndYearError`] describing the first
    /// problem found: wrong shape, unknown semester, or non-numeric
    /// year. Malformed input is never truncated into a best guess.
    pub fn from_short_format(short_format: &str) -> Result<Self, ParseSemesterAndYearError> {
        let parts: Vec<&str> = short_format.split('-').collect();
        let [semester, year] = parts[..] else {
            return Err(ParseSemesterAndYearError::Malformed(
                short_format.to_string(),
            ));
        };
        let year: i32 = year
            .parse()
            .map_err(|_| ParseSemesterAndYearError::InvalidYear(year.to_string()))?;
        Self::from_parts(year, semester)
    }

    /// Year accessor (always post-normalization)
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Semester accessor
    #[must_use]
    pub const fn semester(self) -> Semester {
        self.semester
    }

    /// Long display name of the semester (VÅR or HØST)
    #[must_use]
    pub const fn semester_name(self) -> &'static str {
        self.semester.name()
    }

    /// Render the canonical short format, e.g. `"H-2024"`
    ///
    /// The year is emitted in full, so short-form construction input
    /// does not round-trip back to two digits.
    #[must_use]
    pub fn short_format(self) -> String {
        format!("{}-{}", self.semester.code(), self.year)
    }

    /// Strict chronological comparison
    ///
    /// True iff `self` comes strictly later than `other`. Equal values
    /// compare false, same as any earlier value.
    #[must_use]
    pub fn is_after(self, other: Self) -> bool {
        self > other
    }

    /// The next semester: spring stays in the year, autumn rolls over
    #[must_use]
    pub const fn incremented(self) -> Self {
        match self.semester {
            Semester::Spring => Self {
                year: self.year,
                semester: Semester::Autumn,
            },
            Semester::Autumn => Self {
                year: self.year + 1,
                semester: Semester::Spring,
            },
        }
    }

    /// The previous semester: spring rolls back a year, autumn stays
    #[must_use]
    pub const fn decremented(self) -> Self {
        match self.semester {
            Semester::Spring => Self {
                year: self.year - 1,
                semester: Semester::Autumn,
            },
            Semester::Autumn => Self {
                year: self.year,
                semester: Semester::Spring,
            },
        }
    }

    /// Step forward `steps` semesters; zero steps is a no-op
    #[must_use]
    pub const fn incremented_by(self, steps: u32) -> Self {
        let mut current = self;
        let mut remaining = steps;
        while remaining > 0 {
            current = current.incremented();
            remaining -= 1;
        }
        current
    }

    /// Step backward `steps` semesters; exact inverse of [`incremented_by`]
    ///
    /// [`incremented_by`]: Self::incremented_by
    #[must_use]
    pub const fn decremented_by(self, steps: u32) -> Self {
        let mut current = self;
        let mut remaining = steps;
        while remaining > 0 {
            current = current.decremented();
            remaining -= 1;
        }
        current
    }

    /// Iterate every semester from `self` through `end`, inclusive
    ///
    /// The range is empty when `self` is after `end`.
    #[must_use]
    pub const fn range_to(self, end: Self) -> SemesterRange {
        SemesterRange {
            next: Some(self),
            end,
        }
    }
}

impl FromStr for SemesterAndYear {
    type Err = ParseSemesterAndYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_short_format(s)
    }
}

impl fmt::Display for SemesterAndYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.semester.code(), self.year)
    }
}

impl Serialize for SemesterAndYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.short_format())
    }
}

impl<'de> Deserialize<'de> for SemesterAndYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShortFormatVisitor;

        impl Visitor<'_> for ShortFormatVisitor {
            type Value = SemesterAndYear;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a short-format semester string like \"H-2024\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<SemesterAndYear, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ShortFormatVisitor)
    }
}

/// Inclusive forward iterator over consecutive semesters
#[derive(Debug, Clone)]
pub struct SemesterRange {
    next: Option<SemesterAndYear>,
    end: SemesterAndYear,
}

impl Iterator for SemesterRange {
    type Item = SemesterAndYear;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = if current == self.end {
            None
        } else {
            Some(current.incremented())
        };
        Some(current)
    }
}
