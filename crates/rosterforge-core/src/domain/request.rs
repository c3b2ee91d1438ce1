//! Shift and vacation request records

use chrono::NaiveDate;

use super::{NurseId, ShiftType};

/// Review status of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// The category of a vacation request. Carried on the record for the roster
/// store; the engine treats every approved vacation day the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum VacationType {
    AnnualLeave,
    SickLeave,
    SpecialLeave,
}

/// A nurse's wish to work a specific shift on a specific date.
///
/// Pending and approved requests influence generation; rejected requests are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ShiftRequest {
    pub nurse_id: NurseId,
    pub date: NaiveDate,
    pub requested_shift: ShiftType,
    pub status: RequestStatus,
    pub reason: Option<String>,
}

/// An inclusive date range of requested leave.
///
/// Only approved ranges affect generation: every covered date produces a
/// locked VACATION entry that preempts normal selection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VacationRequest {
    pub nurse_id: NurseId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub vacation_type: VacationType,
    pub status: RequestStatus,
    pub reason: Option<String>,
}

impl VacationRequest {
    /// Iterates every date of the range, both endpoints included.
    ///
    /// An inverted range (end before start) yields nothing.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(|d| *d <= self.end_date)
    }
}
