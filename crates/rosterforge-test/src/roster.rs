//! Ward, nurse, and config fixtures.

use rosterforge_config::GenerationConfig;
use rosterforge_core::{ExperienceLevel, Nurse, NurseId, Ward, WardId};

/// A ward with typical settings: staffing 3/2/2, 3 consecutive nights, 8
/// rest hours, mixed experience required.
pub fn ward(id: &str) -> Ward {
    ward_with_staffing(id, 3, 2, 2)
}

/// A ward with explicit minimum staffing per shift.
pub fn ward_with_staffing(id: &str, day: usize, evening: usize, night: usize) -> Ward {
    Ward {
        id: WardId::from(id),
        name: format!("Ward {id}"),
        min_staff_day: day,
        min_staff_evening: evening,
        min_staff_night: night,
        max_consecutive_nights: 3,
        min_rest_hours: 8,
        require_mixed_experience: true,
    }
}

/// An active nurse with the given id and experience level.
pub fn nurse(id: &str, ward_id: &WardId, level: ExperienceLevel) -> Nurse {
    Nurse {
        id: NurseId::from(id),
        ward_id: ward_id.clone(),
        name: format!("Nurse {id}"),
        employee_number: format!("E-{id}"),
        experience_level: level,
        annual_leave_total: 15,
        annual_leave_used: 0,
        is_active: true,
    }
}

/// An inactive nurse; generation must skip it entirely.
pub fn inactive_nurse(id: &str, ward_id: &WardId, level: ExperienceLevel) -> Nurse {
    Nurse {
        is_active: false,
        ..nurse(id, ward_id, level)
    }
}

/// Nurses `n1..nN` with the given experience levels, in order.
pub fn roster(ward_id: &WardId, levels: &[ExperienceLevel]) -> Vec<Nurse> {
    levels
        .iter()
        .enumerate()
        .map(|(i, level)| nurse(&format!("n{}", i + 1), ward_id, *level))
        .collect()
}

/// A generation config for the ward with default tunables, copying the
/// ward's night limit and mix requirement.
pub fn config(ward: &Ward, year: i32, month: u32) -> GenerationConfig {
    GenerationConfig::for_ward(ward, year, month)
}
