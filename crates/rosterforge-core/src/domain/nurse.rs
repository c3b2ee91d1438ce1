//! Nurse record

use super::{ExperienceLevel, NurseId, WardId};

/// A nurse on a ward's roster. Immutable input to a generation run; the
/// engine never mutates nurse records (`annual_leave_used` is maintained by
/// the roster store).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Nurse {
    pub id: NurseId,
    pub ward_id: WardId,
    pub name: String,
    pub employee_number: String,
    pub experience_level: ExperienceLevel,
    /// Annual leave budget in days.
    pub annual_leave_total: u32,
    /// Annual leave days already taken.
    pub annual_leave_used: u32,
    /// Inactive nurses are excluded from generation.
    pub is_active: bool,
}
