//! Shared test fixtures for RosterForge crates.
//!
//! This crate provides ready-made wards, rosters, and requests for testing.
//! Defaults follow a typical ward setup: minimum staffing 3/2/2, at most 3
//! consecutive nights, 8 rest hours, mixed experience required.
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! rosterforge-test = { workspace = true }
//! ```
//!
//! Then build scenarios from the fixtures:
//!
//! ```
//! use rosterforge_test::{roster, ward};
//! use rosterforge_core::ExperienceLevel;
//!
//! let ward = ward("icu-3f");
//! let nurses = roster(
//!     &ward.id,
//!     &[ExperienceLevel::Senior, ExperienceLevel::Junior, ExperienceLevel::Junior],
//! );
//! assert_eq!(nurses[0].id.as_str(), "n1");
//! ```

mod requests;
mod roster;

pub use requests::{approved_vacation, shift_request, vacation};
pub use roster::{config, inactive_nurse, nurse, roster, ward, ward_with_staffing};

use chrono::NaiveDate;

/// Shorthand for a calendar date; panics on invalid input, which a test
/// wants to hear about immediately.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
