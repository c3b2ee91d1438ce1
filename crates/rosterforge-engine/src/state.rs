//! Per-nurse run state, accumulated over one generation run.

use rosterforge_core::ShiftType;

/// Monthly per-shift counters for one nurse.
///
/// Rest assignments (Off, Vacation, AnnualLeave) all land in `off`; a
/// separate vacation count exists only in the stored-entry view computed by
/// [`crate::stats::monthly_stats`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthlyTally {
    pub day: u32,
    pub evening: u32,
    pub night: u32,
    pub off: u32,
    pub split: u32,
    /// Weekend days spent on a working shift.
    pub weekend_work: u32,
}

/// Mutable scheduling state for one nurse during one generation run.
///
/// Created fresh at the start of a run, owned exclusively by that run, and
/// discarded afterwards - never persisted, never shared between runs.
#[derive(Debug, Clone, Default)]
pub struct NurseRunState {
    /// Uninterrupted working days up to and including the last recorded day.
    pub consecutive_work_days: u32,
    /// Uninterrupted night shifts up to and including the last recorded day.
    pub consecutive_nights: u32,
    /// The most recently recorded assignment.
    pub last_shift: Option<ShiftType>,
    /// Running monthly counters.
    pub tally: MonthlyTally,
}

impl NurseRunState {
    /// Applies one day's assignment to the counters.
    ///
    /// Rest assignments reset both consecutive counters; working
    /// assignments extend the work streak, and only Night extends the night
    /// streak.
    pub fn record(&mut self, shift: ShiftType, is_weekend: bool) {
        match shift {
            ShiftType::Off | ShiftType::Vacation | ShiftType::AnnualLeave => {
                self.consecutive_work_days = 0;
                self.consecutive_nights = 0;
                self.tally.off += 1;
            }
            ShiftType::Night => {
                self.consecutive_work_days += 1;
                self.consecutive_nights += 1;
                self.tally.night += 1;
                if is_weekend {
                    self.tally.weekend_work += 1;
                }
            }
            ShiftType::Day => {
                self.consecutive_work_days += 1;
                self.consecutive_nights = 0;
                self.tally.day += 1;
                if is_weekend {
                    self.tally.weekend_work += 1;
                }
            }
            ShiftType::Evening => {
                self.consecutive_work_days += 1;
                self.consecutive_nights = 0;
                self.tally.evening += 1;
                if is_weekend {
                    self.tally.weekend_work += 1;
                }
            }
            ShiftType::Split => {
                self.consecutive_work_days += 1;
                self.consecutive_nights = 0;
                self.tally.split += 1;
                if is_weekend {
                    self.tally.weekend_work += 1;
                }
            }
        }
        self.last_shift = Some(shift);
    }
}
