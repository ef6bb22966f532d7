//! Shared library for `semester-and-year`
//! Contains the semester/year value objects, configuration and logging
//! used by the `semyear` CLI.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::models;
