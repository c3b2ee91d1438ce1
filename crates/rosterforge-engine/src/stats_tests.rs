//! Tests for stored-entry statistics.

use rosterforge_core::{NurseId, ScheduleEntry, ShiftType, WardId};
use rosterforge_test::date;

use crate::stats::monthly_stats;

fn entry(nurse: &str, y: i32, m: u32, d: u32, shift: ShiftType) -> ScheduleEntry {
    ScheduleEntry::new(
        WardId::from("w1"),
        NurseId::from(nurse),
        date(y, m, d),
        shift,
        shift == ShiftType::Vacation,
    )
}

#[test]
fn test_empty_input_yields_empty_stats() {
    assert!(monthly_stats(&[]).is_empty());
}

#[test]
fn test_shift_types_land_in_their_buckets() {
    // 2025-09-01..05 are weekdays.
    let entries = vec![
        entry("n1", 2025, 9, 1, ShiftType::Day),
        entry("n1", 2025, 9, 2, ShiftType::Evening),
        entry("n1", 2025, 9, 3, ShiftType::Night),
        entry("n1", 2025, 9, 4, ShiftType::Off),
        entry("n1", 2025, 9, 5, ShiftType::Split),
    ];

    let stats = monthly_stats(&entries);
    let n1 = &stats[&NurseId::from("n1")];
    assert_eq!(n1.day, 1);
    assert_eq!(n1.evening, 1);
    assert_eq!(n1.night, 1);
    assert_eq!(n1.off, 1);
    assert_eq!(n1.split, 1);
    assert_eq!(n1.vacation, 0);
    assert_eq!(n1.weekend_work, 0);
}

#[test]
fn test_vacation_has_its_own_bucket_here() {
    let entries = vec![
        entry("n1", 2025, 9, 1, ShiftType::Vacation),
        entry("n1", 2025, 9, 2, ShiftType::AnnualLeave),
        entry("n1", 2025, 9, 3, ShiftType::Off),
    ];

    let stats = monthly_stats(&entries);
    let n1 = &stats[&NurseId::from("n1")];
    // Unlike the run tallies, vacation and annual leave do not fold into off.
    assert_eq!(n1.vacation, 2);
    assert_eq!(n1.off, 1);
}

#[test]
fn test_weekend_work_counting() {
    // 2025-09-06 and 07 are the first weekend of the month.
    let entries = vec![
        entry("n1", 2025, 9, 6, ShiftType::Night),
        entry("n1", 2025, 9, 7, ShiftType::Off),
        entry("n2", 2025, 9, 6, ShiftType::Vacation),
        // A weekend annual-leave entry still counts as weekend work; only
        // OFF and VACATION are excluded.
        entry("n2", 2025, 9, 7, ShiftType::AnnualLeave),
    ];

    let stats = monthly_stats(&entries);
    assert_eq!(stats[&NurseId::from("n1")].weekend_work, 1);
    assert_eq!(stats[&NurseId::from("n2")].weekend_work, 1);
}

#[test]
fn test_stats_are_grouped_per_nurse() {
    let entries = vec![
        entry("n1", 2025, 9, 1, ShiftType::Day),
        entry("n2", 2025, 9, 1, ShiftType::Night),
        entry("n1", 2025, 9, 2, ShiftType::Day),
    ];

    let stats = monthly_stats(&entries);
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[&NurseId::from("n1")].day, 2);
    assert_eq!(stats[&NurseId::from("n2")].night, 1);
}
