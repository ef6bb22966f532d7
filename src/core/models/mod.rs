//! Data models for `semester-and-year`

pub mod semester;
pub mod semester_and_year;

pub use semester::Semester;
pub use semester_and_year::{ParseSemesterAndYearError, SemesterAndYear, SemesterRange};
