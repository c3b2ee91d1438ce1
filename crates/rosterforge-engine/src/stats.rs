//! Monthly statistics derived from stored schedule entries.

use std::collections::HashMap;

use rosterforge_core::calendar::is_weekend;
use rosterforge_core::{NurseId, ScheduleEntry, ShiftType};

/// Per-nurse shift counts for one stored month.
///
/// Unlike the run tallies, this view gives vacation its own bucket:
/// Vacation and AnnualLeave entries count under `vacation`, not `off`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NurseMonthlyStats {
    pub day: u32,
    pub evening: u32,
    pub night: u32,
    pub off: u32,
    pub split: u32,
    pub vacation: u32,
    pub weekend_work: u32,
}

/// Aggregates stored entries into per-nurse monthly counts.
///
/// `weekend_work` counts weekend entries of any type except Off and
/// Vacation; a weekend AnnualLeave entry still counts.
pub fn monthly_stats(entries: &[ScheduleEntry]) -> HashMap<NurseId, NurseMonthlyStats> {
    let mut stats: HashMap<NurseId, NurseMonthlyStats> = HashMap::new();

    for entry in entries {
        let nurse_stats = stats.entry(entry.nurse_id.clone()).or_default();

        match entry.shift_type {
            ShiftType::Day => nurse_stats.day += 1,
            ShiftType::Evening => nurse_stats.evening += 1,
            ShiftType::Night => nurse_stats.night += 1,
            ShiftType::Off => nurse_stats.off += 1,
            ShiftType::Split => nurse_stats.split += 1,
            ShiftType::Vacation | ShiftType::AnnualLeave => nurse_stats.vacation += 1,
        }

        if is_weekend(entry.date)
            && entry.shift_type != ShiftType::Off
            && entry.shift_type != ShiftType::Vacation
        {
            nurse_stats.weekend_work += 1;
        }
    }

    stats
}
