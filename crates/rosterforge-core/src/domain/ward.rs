//! Ward record

use super::WardId;

/// An organizational unit with its own staffing minimums and scheduling
/// rules. Immutable input to a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Ward {
    pub id: WardId,
    pub name: String,
    /// Minimum staff on the DAY shift.
    pub min_staff_day: usize,
    /// Minimum staff on the EVENING shift.
    pub min_staff_evening: usize,
    /// Minimum staff on the NIGHT shift.
    pub min_staff_night: usize,
    /// Maximum allowed consecutive NIGHT shifts.
    pub max_consecutive_nights: u32,
    /// Minimum rest hours after a night shift. Carried as roster data; the
    /// engine enforces rest as the boolean `min_rest_after_night` config
    /// flag, not as an hour count.
    pub min_rest_hours: u32,
    /// Whether multi-person teams must include a senior-or-above nurse.
    pub require_mixed_experience: bool,
}
