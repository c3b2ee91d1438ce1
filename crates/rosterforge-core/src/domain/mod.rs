//! Domain model for ward shift scheduling
//!
//! These types describe the inputs and outputs of a generation run:
//! - `Ward`, `Nurse`: long-lived roster records
//! - `ShiftRequest`, `VacationRequest`: per-nurse wishes and approved leave
//! - `ScheduleEntry`: one assignment per nurse per day, the engine's output
//! - `ShiftType`, `ExperienceLevel`: closed enumerations matched exhaustively

mod experience;
mod ids;
mod nurse;
mod request;
mod schedule;
mod shift;
mod ward;


pub use experience::ExperienceLevel;
pub use ids::{NurseId, WardId};
pub use nurse::Nurse;
pub use request::{RequestStatus, ShiftRequest, VacationRequest, VacationType};
pub use schedule::ScheduleEntry;
pub use shift::ShiftType;
pub use ward::Ward;
