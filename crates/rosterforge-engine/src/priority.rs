//! Priority scoring: how much a nurse "deserves" a shift type today.

use rosterforge_core::ShiftType;

use crate::state::MonthlyTally;

/// Monthly quota fraction of DAY shifts per nurse.
const DAY_FRACTION: f64 = 0.25;
/// Monthly quota fraction of EVENING shifts per nurse.
const EVENING_FRACTION: f64 = 0.25;
/// Monthly quota fraction of NIGHT shifts per nurse.
const NIGHT_FRACTION: f64 = 0.2;
/// Monthly quota fraction of OFF days per nurse.
const OFF_FRACTION: f64 = 0.3;

/// Score granted while a nurse is still under the OFF quota.
const OFF_UNDER_QUOTA: i32 = 10;
/// Score once the OFF quota has been met.
const OFF_OVER_QUOTA: i32 = -10;

/// Per-nurse monthly shift quotas, derived from the month length.
///
/// Quotas steer the ranking; they are not guaranteed to be met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftQuota {
    pub day: i32,
    pub evening: i32,
    pub night: i32,
    pub off: i32,
}

impl ShiftQuota {
    /// Computes the quotas as floor(days x fraction).
    ///
    /// # Examples
    ///
    /// ```
    /// use rosterforge_engine::ShiftQuota;
    ///
    /// let quota = ShiftQuota::for_month(30);
    /// assert_eq!(quota.day, 7);
    /// assert_eq!(quota.night, 6);
    /// assert_eq!(quota.off, 9);
    /// ```
    pub fn for_month(days_in_month: usize) -> Self {
        let days = days_in_month as f64;
        Self {
            day: (days * DAY_FRACTION).floor() as i32,
            evening: (days * EVENING_FRACTION).floor() as i32,
            night: (days * NIGHT_FRACTION).floor() as i32,
            off: (days * OFF_FRACTION).floor() as i32,
        }
    }
}

/// Scores assigning `shift` to a nurse with the given tally; higher means
/// more deserving today.
///
/// Day/Evening/Night score by quota deficit. Off scores a coarse binary
/// bias rather than a proportional deficit. Every other shift type scores
/// zero.
pub fn shift_priority(tally: &MonthlyTally, quota: &ShiftQuota, shift: ShiftType) -> i32 {
    match shift {
        ShiftType::Day => quota.day - tally.day as i32,
        ShiftType::Evening => quota.evening - tally.evening as i32,
        ShiftType::Night => quota.night - tally.night as i32,
        ShiftType::Off => {
            if (tally.off as i32) < quota.off {
                OFF_UNDER_QUOTA
            } else {
                OFF_OVER_QUOTA
            }
        }
        ShiftType::Split | ShiftType::Vacation | ShiftType::AnnualLeave => 0,
    }
}
