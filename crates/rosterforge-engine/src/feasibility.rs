//! Feasibility rules: whether a nurse may take a given shift today.

use thiserror::Error;

use rosterforge_config::GenerationConfig;
use rosterforge_core::ShiftType;

use crate::state::NurseRunState;

/// Why a candidate assignment was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DenialReason {
    #[error("On vacation")]
    OnVacation,
    #[error("Max consecutive work days reached")]
    ConsecutiveWorkDays,
    #[error("Max consecutive nights reached")]
    ConsecutiveNights,
    #[error("Need rest after night shift")]
    RestAfterNight,
}

/// The work-rule limits a run enforces, lifted out of the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkRules {
    pub max_consecutive_work_days: u32,
    pub max_consecutive_nights: u32,
    pub min_rest_after_night: bool,
}

impl WorkRules {
    /// Extracts the limits from a generation config.
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            max_consecutive_work_days: config.max_consecutive_work_days,
            max_consecutive_nights: config.max_consecutive_nights,
            min_rest_after_night: config.min_rest_after_night,
        }
    }
}

/// Checks a candidate shift against a nurse's current run state.
///
/// Pure: never mutates the state. Vacation preemption is checked by the
/// orchestrator before this is reached, since it depends on the calendar
/// rather than on run state.
///
/// The rest rule blocks NIGHT followed by DAY only; NIGHT followed by
/// EVENING stays allowed.
///
/// # Examples
///
/// ```
/// use rosterforge_core::ShiftType;
/// use rosterforge_engine::{assess, NurseRunState, WorkRules};
///
/// let rules = WorkRules {
///     max_consecutive_work_days: 5,
///     max_consecutive_nights: 2,
///     min_rest_after_night: true,
/// };
///
/// let mut state = NurseRunState::default();
/// assert!(assess(&state, ShiftType::Night, &rules).is_ok());
///
/// state.record(ShiftType::Night, false);
/// state.record(ShiftType::Night, false);
/// assert!(assess(&state, ShiftType::Night, &rules).is_err());
/// assert!(assess(&state, ShiftType::Evening, &rules).is_ok());
/// ```
pub fn assess(
    state: &NurseRunState,
    shift: ShiftType,
    rules: &WorkRules,
) -> Result<(), DenialReason> {
    if shift != ShiftType::Off && state.consecutive_work_days >= rules.max_consecutive_work_days {
        return Err(DenialReason::ConsecutiveWorkDays);
    }

    if shift == ShiftType::Night && state.consecutive_nights >= rules.max_consecutive_nights {
        return Err(DenialReason::ConsecutiveNights);
    }

    if rules.min_rest_after_night
        && state.last_shift == Some(ShiftType::Night)
        && shift == ShiftType::Day
    {
        return Err(DenialReason::RestAfterNight);
    }

    Ok(())
}
