//! RosterForge - Monthly ward shift assignment in Rust
//!
//! One-call API: snapshot a ward's roster and requests, call
//! [`generate_roster`], persist the returned entries.
//!
//! # Example
//!
//! ```rust
//! use rosterforge::prelude::*;
//!
//! let ward = Ward {
//!     id: WardId::from("icu-3f"),
//!     name: "ICU 3F".into(),
//!     min_staff_day: 2,
//!     min_staff_evening: 1,
//!     min_staff_night: 1,
//!     max_consecutive_nights: 2,
//!     min_rest_hours: 8,
//!     require_mixed_experience: true,
//! };
//! let nurses = vec![
//!     Nurse {
//!         id: NurseId::from("n1"),
//!         ward_id: ward.id.clone(),
//!         name: "Kim".into(),
//!         employee_number: "E-001".into(),
//!         experience_level: ExperienceLevel::Senior,
//!         annual_leave_total: 15,
//!         annual_leave_used: 0,
//!         is_active: true,
//!     },
//! ];
//! let config = GenerationConfig::for_ward(&ward, 2025, 6);
//!
//! let entries = generate_roster(ward, nurses, config, vec![], vec![]).unwrap();
//! // One entry per active nurse per day of June.
//! assert_eq!(entries.len(), 30);
//! ```

// Domain types
pub use rosterforge_core::{
    ExperienceLevel, Nurse, NurseId, RequestStatus, ScheduleEntry, ShiftRequest, ShiftType,
    VacationRequest, VacationType, Ward, WardId,
};

// Calendar utilities
pub use rosterforge_core::calendar;

// Errors
pub use rosterforge_core::{Result, RosterError};

// Configuration
pub use rosterforge_config::{ConfigError, GenerationConfig};

// Engine
pub use rosterforge_engine::{
    monthly_stats, DenialReason, MonthlyTally, NurseMonthlyStats, NurseRunState, ScheduleGenerator,
    ShiftQuota, WorkRules,
};

mod generate;
pub use generate::generate_roster;

pub mod prelude {
    pub use super::generate_roster;
    pub use super::{
        ExperienceLevel, GenerationConfig, Nurse, NurseId, RequestStatus, ScheduleEntry,
        ScheduleGenerator, ShiftRequest, ShiftType, VacationRequest, VacationType, Ward, WardId,
    };
}
