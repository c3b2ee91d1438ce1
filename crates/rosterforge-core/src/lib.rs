//! RosterForge Core - Domain types for ward shift scheduling
//!
//! This crate provides the fundamental building blocks for RosterForge:
//! - Domain records for wards, nurses, requests, and schedule entries
//! - Closed shift-type and experience-level enumerations
//! - Calendar utilities for month enumeration and weekend classification
//! - The shared error type

pub mod calendar;
pub mod domain;
pub mod error;


pub use domain::{
    ExperienceLevel, Nurse, NurseId, RequestStatus, ScheduleEntry, ShiftRequest, ShiftType,
    VacationRequest, VacationType, Ward, WardId,
};
pub use error::{Result, RosterError};
