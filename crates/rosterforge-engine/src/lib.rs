//! RosterForge Engine - Greedy monthly shift assignment
//!
//! This crate turns a ward's roster, rules, and requests into one schedule
//! entry per active nurse per day of a target month:
//! - Run state tracking per nurse (consecutive-day counters, tallies)
//! - Feasibility rules (work streaks, night streaks, rest after night)
//! - Priority scoring against per-shift monthly quotas
//! - Preference-first selection with experience-mix correction
//! - Date-ascending orchestration with a deterministic ordering contract
//!
//! The engine is a pure in-memory computation: no I/O, no suspension, no
//! locking. Heuristic shortfalls (understaffed shifts, unmixed teams) are
//! silent outcomes, never errors.

pub mod feasibility;
pub mod generator;
pub mod priority;
pub mod state;
pub mod stats;

#[cfg(test)]
mod generator_tests;
#[cfg(test)]
mod stats_tests;

pub use feasibility::{assess, DenialReason, WorkRules};
pub use generator::ScheduleGenerator;
pub use priority::{shift_priority, ShiftQuota};
pub use state::{MonthlyTally, NurseRunState};
pub use stats::{monthly_stats, NurseMonthlyStats};
