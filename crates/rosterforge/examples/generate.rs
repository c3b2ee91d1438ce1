//! Generates one month for a small demo ward and prints the grid.
//!
//! Run with: cargo run -p rosterforge --example generate
//! Set RUST_LOG=rosterforge_engine=debug to watch the day-by-day events.

use rosterforge::prelude::*;
use rosterforge::monthly_stats;

fn nurse(id: &str, ward: &Ward, name: &str, level: ExperienceLevel) -> Nurse {
    Nurse {
        id: NurseId::from(id),
        ward_id: ward.id.clone(),
        name: name.into(),
        employee_number: format!("E-{id}"),
        experience_level: level,
        annual_leave_total: 15,
        annual_leave_used: 3,
        is_active: true,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let ward = Ward {
        id: WardId::from("icu-3f"),
        name: "ICU 3F".into(),
        min_staff_day: 2,
        min_staff_evening: 1,
        min_staff_night: 1,
        max_consecutive_nights: 2,
        min_rest_hours: 8,
        require_mixed_experience: true,
    };

    let nurses = vec![
        nurse("n1", &ward, "Kim", ExperienceLevel::Charge),
        nurse("n2", &ward, "Lee", ExperienceLevel::Senior),
        nurse("n3", &ward, "Park", ExperienceLevel::Junior),
        nurse("n4", &ward, "Choi", ExperienceLevel::Junior),
        nurse("n5", &ward, "Jung", ExperienceLevel::Intern),
    ];

    let year = 2025;
    let month = 6;
    let config = GenerationConfig::for_ward(&ward, year, month);

    let first = chrono::NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let requests = vec![ShiftRequest {
        nurse_id: NurseId::from("n3"),
        date: first + chrono::Days::new(9),
        requested_shift: ShiftType::Night,
        status: RequestStatus::Pending,
        reason: Some("prefers the quiet shift".into()),
    }];
    let vacations = vec![VacationRequest {
        nurse_id: NurseId::from("n4"),
        start_date: first + chrono::Days::new(14),
        end_date: first + chrono::Days::new(18),
        vacation_type: VacationType::AnnualLeave,
        status: RequestStatus::Approved,
        reason: None,
    }];

    let entries =
        generate_roster(ward, nurses.clone(), config, requests, vacations).expect("valid month");

    // One row per nurse, one letter per day.
    for nurse in &nurses {
        let row: String = entries
            .iter()
            .filter(|e| e.nurse_id == nurse.id)
            .map(|e| match e.shift_type {
                ShiftType::Day => 'D',
                ShiftType::Evening => 'E',
                ShiftType::Night => 'N',
                ShiftType::Off => '.',
                ShiftType::Split => 'S',
                ShiftType::Vacation => 'V',
                ShiftType::AnnualLeave => 'A',
            })
            .collect();
        println!("{:<6} {row}", nurse.name);
    }

    println!();
    let stats = monthly_stats(&entries);
    for nurse in &nurses {
        let s = &stats[&nurse.id];
        println!(
            "{:<6} day={:<2} evening={:<2} night={:<2} off={:<2} vacation={:<2} weekend={}",
            nurse.name, s.day, s.evening, s.night, s.off, s.vacation, s.weekend_work
        );
    }
}
