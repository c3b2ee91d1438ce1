//! Shift and vacation request fixtures.

use chrono::NaiveDate;

use rosterforge_core::{
    NurseId, RequestStatus, ShiftRequest, ShiftType, VacationRequest, VacationType,
};

/// A shift request with the given status and no reason text.
pub fn shift_request(
    nurse_id: &str,
    date: NaiveDate,
    shift: ShiftType,
    status: RequestStatus,
) -> ShiftRequest {
    ShiftRequest {
        nurse_id: NurseId::from(nurse_id),
        date,
        requested_shift: shift,
        status,
        reason: None,
    }
}

/// A vacation request over an inclusive date range.
pub fn vacation(
    nurse_id: &str,
    start: NaiveDate,
    end: NaiveDate,
    status: RequestStatus,
) -> VacationRequest {
    VacationRequest {
        nurse_id: NurseId::from(nurse_id),
        start_date: start,
        end_date: end,
        vacation_type: VacationType::AnnualLeave,
        status,
        reason: None,
    }
}

/// An approved vacation request over an inclusive date range.
pub fn approved_vacation(nurse_id: &str, start: NaiveDate, end: NaiveDate) -> VacationRequest {
    vacation(nurse_id, start, end, RequestStatus::Approved)
}
