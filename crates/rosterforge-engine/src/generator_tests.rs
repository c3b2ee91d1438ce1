//! End-to-end tests for the generation run.
//!
//! September 2025 is the reference month: the 1st is a Monday and the
//! weekends fall on the 6/7, 13/14, 20/21, and 27/28.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use rosterforge_core::{
    ExperienceLevel, NurseId, RequestStatus, ScheduleEntry, ShiftType,
};
use rosterforge_test::{
    approved_vacation, config, date, inactive_nurse, roster, shift_request, ward,
    ward_with_staffing,
};

use crate::generator::ScheduleGenerator;

const SENIOR: ExperienceLevel = ExperienceLevel::Senior;
const JUNIOR: ExperienceLevel = ExperienceLevel::Junior;

fn entry_on<'a>(entries: &'a [ScheduleEntry], nurse: &str, date: NaiveDate) -> &'a ScheduleEntry {
    entries
        .iter()
        .find(|e| e.nurse_id.as_str() == nurse && e.date == date)
        .unwrap_or_else(|| panic!("no entry for {nurse} on {date}"))
}

fn nurses_on_shift(entries: &[ScheduleEntry], date: NaiveDate, shift: ShiftType) -> HashSet<String> {
    entries
        .iter()
        .filter(|e| e.date == date && e.shift_type == shift)
        .map(|e| e.nurse_id.as_str().to_owned())
        .collect()
}

/// Per-nurse entries in date order (the output is date-major already).
fn by_nurse(entries: &[ScheduleEntry]) -> HashMap<NurseId, Vec<ScheduleEntry>> {
    let mut grouped: HashMap<NurseId, Vec<ScheduleEntry>> = HashMap::new();
    for entry in entries {
        grouped.entry(entry.nurse_id.clone()).or_default().push(entry.clone());
    }
    for per_nurse in grouped.values_mut() {
        per_nurse.sort_by_key(|e| e.date);
    }
    grouped
}

#[test]
fn test_one_entry_per_nurse_per_day() {
    let ward = ward("w1");
    let nurses = roster(&ward.id, &[SENIOR, JUNIOR, JUNIOR, JUNIOR]);
    let config = config(&ward, 2025, 9);

    let mut generator = ScheduleGenerator::new(ward, nurses, config, vec![], vec![]);
    let entries = generator.generate().unwrap();

    assert_eq!(entries.len(), 4 * 30);
    let keys: HashSet<(NurseId, NaiveDate)> = entries
        .iter()
        .map(|e| (e.nurse_id.clone(), e.date))
        .collect();
    assert_eq!(keys.len(), 4 * 30);
}

#[test]
fn test_empty_roster_produces_empty_schedule() {
    let ward = ward("w1");
    let config = config(&ward, 2025, 9);

    let mut generator = ScheduleGenerator::new(ward, vec![], config, vec![], vec![]);
    assert!(generator.generate().unwrap().is_empty());
}

#[test]
fn test_invalid_month_is_rejected() {
    let ward = ward("w1");
    let nurses = roster(&ward.id, &[SENIOR]);
    let mut config = config(&ward, 2025, 9);
    config.month = 13;

    let mut generator = ScheduleGenerator::new(ward, nurses, config, vec![], vec![]);
    assert!(generator.generate().is_err());
}

#[test]
fn test_full_month_vacation_is_locked_everywhere() {
    let ward = ward_with_staffing("w1", 2, 1, 1);
    let nurses = roster(&ward.id, &[SENIOR, JUNIOR, JUNIOR, JUNIOR]);
    let config = config(&ward, 2025, 9);
    let vacations = vec![approved_vacation("n1", date(2025, 9, 1), date(2025, 9, 30))];

    let mut generator = ScheduleGenerator::new(ward, nurses, config, vec![], vacations);
    let entries = generator.generate().unwrap();

    let n1_entries: Vec<_> = entries.iter().filter(|e| e.nurse_id.as_str() == "n1").collect();
    assert_eq!(n1_entries.len(), 30);
    assert!(n1_entries
        .iter()
        .all(|e| e.shift_type == ShiftType::Vacation && e.is_locked));

    // Only vacation-derived entries carry the locked flag.
    assert!(entries
        .iter()
        .filter(|e| e.nurse_id.as_str() != "n1")
        .all(|e| !e.is_locked));
}

#[test]
fn test_vacation_overrides_shift_request() {
    let ward = ward_with_staffing("w1", 1, 1, 1);
    let nurses = roster(&ward.id, &[SENIOR, JUNIOR, JUNIOR]);
    let config = config(&ward, 2025, 9);
    let requests = vec![shift_request(
        "n1",
        date(2025, 9, 2),
        ShiftType::Day,
        RequestStatus::Approved,
    )];
    let vacations = vec![approved_vacation("n1", date(2025, 9, 1), date(2025, 9, 5))];

    let mut generator = ScheduleGenerator::new(ward, nurses, config, requests, vacations);
    let entries = generator.generate().unwrap();

    let entry = entry_on(&entries, "n1", date(2025, 9, 2));
    assert_eq!(entry.shift_type, ShiftType::Vacation);
    assert!(entry.is_locked);
}

#[test]
fn test_mixed_experience_corrects_the_day_team() {
    // The senior sorts last in the pool, so the initial DAY ranking picks
    // two juniors; mix enforcement must swap the senior in.
    let ward = ward_with_staffing("w1", 2, 1, 1);
    let nurses = roster(&ward.id, &[JUNIOR, JUNIOR, JUNIOR, SENIOR]);
    let mut config = config(&ward, 2025, 9);
    config.max_consecutive_nights = 2;

    let mut generator = ScheduleGenerator::new(ward, nurses, config, vec![], vec![]);
    let entries = generator.generate().unwrap();

    let first = date(2025, 9, 1);
    let day_team = nurses_on_shift(&entries, first, ShiftType::Day);
    assert_eq!(day_team.len(), 2);
    assert!(day_team.contains("n4"), "senior must be swapped in: {day_team:?}");
    assert!(day_team.contains("n2"));

    assert_eq!(nurses_on_shift(&entries, first, ShiftType::Evening).len(), 1);
    assert_eq!(nurses_on_shift(&entries, first, ShiftType::Night).len(), 1);
    // Two teams of one absorb the rest: nobody is left for OFF.
    assert!(nurses_on_shift(&entries, first, ShiftType::Off).is_empty());
}

#[test]
fn test_pending_night_request_beats_ranking() {
    let ward = ward_with_staffing("w1", 2, 1, 1);
    let nurses = roster(&ward.id, &[SENIOR, JUNIOR, JUNIOR, JUNIOR, JUNIOR]);
    let config = config(&ward, 2025, 9);
    // Without the request, the NIGHT stage pool is [n4, n5] and the stable
    // tie-break would pick n4.
    let requests = vec![shift_request(
        "n5",
        date(2025, 9, 1),
        ShiftType::Night,
        RequestStatus::Pending,
    )];

    let mut generator = ScheduleGenerator::new(ward, nurses, config, requests, vec![]);
    let entries = generator.generate().unwrap();

    assert_eq!(
        entry_on(&entries, "n5", date(2025, 9, 1)).shift_type,
        ShiftType::Night
    );
    assert_eq!(
        entry_on(&entries, "n4", date(2025, 9, 1)).shift_type,
        ShiftType::Off
    );
}

#[test]
fn test_rejected_request_is_ignored() {
    let ward = ward_with_staffing("w1", 1, 0, 0);
    let nurses = roster(&ward.id, &[SENIOR, JUNIOR]);
    let config = config(&ward, 2025, 9);
    let requests = vec![shift_request(
        "n2",
        date(2025, 9, 1),
        ShiftType::Day,
        RequestStatus::Rejected,
    )];

    let mut generator = ScheduleGenerator::new(ward, nurses, config, requests, vec![]);
    let entries = generator.generate().unwrap();

    // The stable tie-break keeps n1 on the day shift; the rejected request
    // must not promote n2.
    assert_eq!(
        entry_on(&entries, "n1", date(2025, 9, 1)).shift_type,
        ShiftType::Day
    );
    assert_eq!(
        entry_on(&entries, "n2", date(2025, 9, 1)).shift_type,
        ShiftType::Off
    );
}

#[test]
fn test_duplicate_requests_last_indexed_wins() {
    let ward = ward_with_staffing("w1", 1, 1, 0);
    let nurses = roster(&ward.id, &[SENIOR, JUNIOR]);
    let config = config(&ward, 2025, 9);
    let requests = vec![
        shift_request("n2", date(2025, 9, 1), ShiftType::Evening, RequestStatus::Pending),
        shift_request("n2", date(2025, 9, 1), ShiftType::Day, RequestStatus::Pending),
    ];

    let mut generator = ScheduleGenerator::new(ward, nurses, config, requests, vec![]);
    let entries = generator.generate().unwrap();

    // The later DAY request supersedes the earlier EVENING one, so n2 takes
    // the day shift ahead of the tie-break favorite n1.
    assert_eq!(
        entry_on(&entries, "n2", date(2025, 9, 1)).shift_type,
        ShiftType::Day
    );
    assert_eq!(
        entry_on(&entries, "n1", date(2025, 9, 1)).shift_type,
        ShiftType::Evening
    );
}

#[test]
fn test_split_request_substitutes_day_assignment() {
    let ward = ward_with_staffing("w1", 4, 0, 0);
    let nurses = roster(&ward.id, &[SENIOR, JUNIOR, JUNIOR, JUNIOR]);
    let config = config(&ward, 2025, 9);
    let requests = vec![shift_request(
        "n2",
        date(2025, 9, 1),
        ShiftType::Split,
        RequestStatus::Approved,
    )];

    let mut generator = ScheduleGenerator::new(ward, nurses, config, requests, vec![]);
    let entries = generator.generate().unwrap();

    let entry = entry_on(&entries, "n2", date(2025, 9, 1));
    assert_eq!(entry.shift_type, ShiftType::Split);
    assert!(!entry.is_locked);
    assert_eq!(
        entry_on(&entries, "n1", date(2025, 9, 1)).shift_type,
        ShiftType::Day
    );

    let tallies = generator.run_tallies();
    assert_eq!(tallies[&NurseId::from("n2")].split, 1);
}

#[test]
fn test_inactive_nurses_are_excluded() {
    let ward = ward("w1");
    let mut nurses = roster(&ward.id, &[SENIOR, JUNIOR, JUNIOR]);
    nurses.push(inactive_nurse("n4", &ward.id, JUNIOR));
    let config = config(&ward, 2025, 9);

    let mut generator = ScheduleGenerator::new(ward, nurses, config, vec![], vec![]);
    let entries = generator.generate().unwrap();

    assert_eq!(entries.len(), 3 * 30);
    assert!(entries.iter().all(|e| e.nurse_id.as_str() != "n4"));
}

#[test]
fn test_understaffing_is_silent() {
    let ward = ward("w1");
    let nurses = roster(&ward.id, &[SENIOR]);
    let config = config(&ward, 2025, 9);

    let mut generator = ScheduleGenerator::new(ward, nurses, config, vec![], vec![]);
    let entries = generator.generate().unwrap();

    // One nurse cannot meet 3/2/2 staffing; the run still completes with
    // one entry per day.
    assert_eq!(entries.len(), 30);
    assert!(entries.iter().all(|e| e.nurse_id.as_str() == "n1"));
}

fn tight_roster_run() -> Vec<ScheduleEntry> {
    let ward = ward_with_staffing("w1", 2, 1, 1);
    let nurses = roster(&ward.id, &[SENIOR, JUNIOR, JUNIOR, JUNIOR]);
    let mut config = config(&ward, 2025, 9);
    config.max_consecutive_nights = 2;

    let mut generator = ScheduleGenerator::new(ward, nurses, config, vec![], vec![]);
    generator.generate().unwrap()
}

#[test]
fn test_work_streaks_never_exceed_limit() {
    for per_nurse in by_nurse(&tight_roster_run()).values() {
        let mut streak = 0u32;
        for entry in per_nurse {
            if entry.shift_type.is_working() {
                streak += 1;
                assert!(streak <= 5, "work streak {streak} on {}", entry.date);
            } else {
                streak = 0;
            }
        }
    }
}

#[test]
fn test_night_streaks_never_exceed_limit() {
    for per_nurse in by_nurse(&tight_roster_run()).values() {
        let mut streak = 0u32;
        for entry in per_nurse {
            if entry.shift_type == ShiftType::Night {
                streak += 1;
                assert!(streak <= 2, "night streak {streak} on {}", entry.date);
            } else {
                streak = 0;
            }
        }
    }
}

#[test]
fn test_no_day_shift_directly_after_night() {
    for per_nurse in by_nurse(&tight_roster_run()).values() {
        for pair in per_nurse.windows(2) {
            assert!(
                !(pair[0].shift_type == ShiftType::Night && pair[1].shift_type == ShiftType::Day),
                "night on {} followed by day",
                pair[0].date
            );
        }
    }
}

#[test]
fn test_weekend_work_stays_balanced() {
    let ward = ward_with_staffing("w1", 1, 0, 0);
    let nurses = roster(&ward.id, &[JUNIOR, JUNIOR]);
    let config = config(&ward, 2025, 9);

    let mut generator = ScheduleGenerator::new(ward, nurses, config, vec![], vec![]);
    generator.generate().unwrap();

    let tallies = generator.run_tallies();
    let first = tallies[&NurseId::from("n1")].weekend_work as i32;
    let second = tallies[&NurseId::from("n2")].weekend_work as i32;
    assert!(
        (first - second).abs() <= 1,
        "weekend work diverged: {first} vs {second}"
    );
}

#[test]
fn test_identical_snapshots_generate_identical_output() {
    let build = || {
        let ward = ward_with_staffing("w1", 2, 1, 1);
        let nurses = roster(&ward.id, &[SENIOR, JUNIOR, JUNIOR, JUNIOR, JUNIOR]);
        let config = config(&ward, 2025, 9);
        let requests = vec![
            shift_request("n3", date(2025, 9, 4), ShiftType::Night, RequestStatus::Pending),
            shift_request("n2", date(2025, 9, 10), ShiftType::Split, RequestStatus::Approved),
        ];
        let vacations = vec![approved_vacation("n4", date(2025, 9, 8), date(2025, 9, 12))];
        ScheduleGenerator::new(ward, nurses, config, requests, vacations)
    };

    let first = build().generate().unwrap();
    let second = build().generate().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_run_tallies_fold_vacation_into_off() {
    let ward = ward_with_staffing("w1", 1, 0, 0);
    let nurses = roster(&ward.id, &[JUNIOR, JUNIOR]);
    let config = config(&ward, 2025, 9);
    let vacations = vec![approved_vacation("n2", date(2025, 9, 1), date(2025, 9, 5))];

    let mut generator = ScheduleGenerator::new(ward, nurses, config, vec![], vacations);
    let entries = generator.generate().unwrap();

    let tallies = generator.run_tallies();
    let n2 = &tallies[&NurseId::from("n2")];
    // Five vacation days land in the off tally, not a separate bucket.
    let n2_off_entries = entries
        .iter()
        .filter(|e| e.nurse_id.as_str() == "n2" && e.shift_type == ShiftType::Off)
        .count() as u32;
    assert_eq!(n2.off, n2_off_entries + 5);
}
