//! Core module for common functionality across the library and CLI

pub mod config;
pub mod models;

/// Returns the current version of the `semester-and-year` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
