//! Semester model
//!
//! The two-valued semester axis: spring ("V"/"VÅR") and autumn
//! ("H"/"HØST"). Variant order matters: within one year spring sorts
//! before autumn, which gives the derived ordering used by
//! [`SemesterAndYear`](super::SemesterAndYear).

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the two semesters of an academic year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Semester {
    /// Spring semester, short code "V" (VÅR)
    Spring,
    /// Autumn semester, short code "H" (HØST)
    Autumn,
}

impl Semester {
    /// Get the single-letter short code for this semester
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Spring => "V",
            Self::Autumn => "H",
        }
    }

    /// Get the long Norwegian display name for this semester
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "VÅR",
            Self::Autumn => "HØST",
        }
    }

    /// The other semester of the year
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Spring => Self::Autumn,
            Self::Autumn => Self::Spring,
        }
    }

    /// Check whether a string is a valid short code ("H" or "V")
    ///
    /// Long-form names are deliberately not accepted here; they are
    /// aliases resolved at construction time only.
    #[must_use]
    pub fn is_acceptable_code(value: &str) -> bool {
        matches!(value, "H" | "V")
    }
}

impl FromStr for Semester {
    type Err = String;

    /// Parse a short code or long-form alias into a semester.
    ///
    /// Accepts "V"/"VÅR" for spring and "H"/"HØST" for autumn.
    /// Anything else is an error; there is no silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "V" | "VÅR" => Ok(Self::Spring),
            "H" | "HØST" => Ok(Self::Autumn),
            _ => Err(format!("Unknown semester: {s}")),
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for Semester {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Semester {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SemesterVisitor;

        impl Visitor<'_> for SemesterVisitor {
            type Value = Semester;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a semester code (\"H\" or \"V\")")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Semester, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(SemesterVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_names() {
        assert_eq!(Semester::Autumn.code(), "H");
        assert_eq!(Semester::Spring.code(), "V");
        assert_eq!(Semester::Autumn.name(), "HØST");
        assert_eq!(Semester::Spring.name(), "VÅR");
    }

    #[test]
    fn test_parse_short_codes() {
        assert_eq!("H".parse::<Semester>(), Ok(Semester::Autumn));
        assert_eq!("V".parse::<Semester>(), Ok(Semester::Spring));
    }

    #[test]
    fn test_parse_long_form_aliases() {
        assert_eq!("HØST".parse::<Semester>(), Ok(Semester::Autumn));
        assert_eq!("VÅR".parse::<Semester>(), Ok(Semester::Spring));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("X".parse::<Semester>().is_err());
        assert!("h".parse::<Semester>().is_err());
        assert!("".parse::<Semester>().is_err());
    }

    #[test]
    fn test_acceptable_code() {
        assert!(Semester::is_acceptable_code("H"));
        assert!(Semester::is_acceptable_code("V"));
        assert!(!Semester::is_acceptable_code("HØST"));
        assert!(!Semester::is_acceptable_code("VÅR"));
        assert!(!Semester::is_acceptable_code("X"));
    }

    #[test]
    fn test_spring_sorts_before_autumn() {
        assert!(Semester::Spring < Semester::Autumn);
    }

    #[test]
    fn test_flipped() {
        assert_eq!(Semester::Spring.flipped(), Semester::Autumn);
        assert_eq!(Semester::Autumn.flipped(), Semester::Spring);
    }

    #[test]
    fn test_display_is_short_code() {
        assert_eq!(Semester::Autumn.to_string(), "H");
        assert_eq!(Semester::Spring.to_string(), "V");
    }
}
