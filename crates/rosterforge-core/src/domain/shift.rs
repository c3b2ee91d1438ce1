//! Shift type enumeration

use std::fmt;

/// The kind of assignment a nurse holds on a given day.
///
/// This is a closed enumeration: every place that branches on a shift type
/// matches exhaustively, so adding a variant is a compile-time-checked
/// exercise rather than a silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ShiftType {
    /// Regular daytime shift.
    Day,
    /// Evening shift.
    Evening,
    /// Overnight shift.
    Night,
    /// Scheduled day off.
    Off,
    /// Split shift (09:00-18:00), recorded when a nurse requested it for a
    /// day the selector staffed as DAY.
    Split,
    /// Approved vacation; always emitted locked.
    Vacation,
    /// Annual leave day.
    AnnualLeave,
}

impl ShiftType {
    /// Returns true for non-working assignments (Off, Vacation, AnnualLeave).
    ///
    /// Rest assignments reset a nurse's consecutive-day counters.
    #[inline]
    pub fn is_rest(&self) -> bool {
        matches!(
            self,
            ShiftType::Off | ShiftType::Vacation | ShiftType::AnnualLeave
        )
    }

    /// Returns true for working assignments (Day, Evening, Night, Split).
    #[inline]
    pub fn is_working(&self) -> bool {
        !self.is_rest()
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ShiftType::Day => "DAY",
            ShiftType::Evening => "EVENING",
            ShiftType::Night => "NIGHT",
            ShiftType::Off => "OFF",
            ShiftType::Split => "SPLIT",
            ShiftType::Vacation => "VACATION",
            ShiftType::AnnualLeave => "ANNUAL_LEAVE",
        };
        f.write_str(label)
    }
}
