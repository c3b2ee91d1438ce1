//! Generation entry point that hides the run wiring.

use rosterforge_config::GenerationConfig;
use rosterforge_core::{Nurse, Result, ScheduleEntry, ShiftRequest, VacationRequest, Ward};
use rosterforge_engine::ScheduleGenerator;

/// Generates one month of schedule entries for a ward.
///
/// Takes a consistent snapshot of roster-store records and returns one
/// entry per active nurse per day of the config's month. The caller is
/// responsible for persisting the result by replacing all existing entries
/// for that ward and month, locked ones included (vacation approvals may
/// have changed since the previous run).
///
/// # Errors
///
/// Fails only for a config month outside `1..=12`.
pub fn generate_roster(
    ward: Ward,
    nurses: Vec<Nurse>,
    config: GenerationConfig,
    shift_requests: Vec<ShiftRequest>,
    vacation_requests: Vec<VacationRequest>,
) -> Result<Vec<ScheduleEntry>> {
    ScheduleGenerator::new(ward, nurses, config, shift_requests, vacation_requests).generate()
}
