//! Schedule entry record

use chrono::NaiveDate;

use super::{NurseId, ShiftType, WardId};

/// One shift assignment for one nurse on one date - the unit of engine
/// output. A single run emits exactly one entry per (nurse, date).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScheduleEntry {
    pub ward_id: WardId,
    pub nurse_id: NurseId,
    pub date: NaiveDate,
    pub shift_type: ShiftType,
    /// Locked entries (always vacation-derived) must not be overwritten by
    /// downstream editors.
    pub is_locked: bool,
    /// Free-text annotation, filled by downstream editors, never by the
    /// engine.
    pub note: Option<String>,
}

impl ScheduleEntry {
    /// Creates an entry with the given locked flag and an empty note.
    pub fn new(
        ward_id: WardId,
        nurse_id: NurseId,
        date: NaiveDate,
        shift_type: ShiftType,
        is_locked: bool,
    ) -> Self {
        Self {
            ward_id,
            nurse_id,
            date,
            shift_type,
            is_locked,
            note: None,
        }
    }
}
