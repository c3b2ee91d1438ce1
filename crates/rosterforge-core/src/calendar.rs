//! Calendar utilities for month enumeration and weekend classification.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{Result, RosterError};

/// Returns every date of the given month in ascending order.
///
/// # Errors
///
/// Returns [`RosterError::InvalidMonth`] if `month` is outside `1..=12`.
///
/// # Examples
///
/// ```
/// use rosterforge_core::calendar::month_days;
///
/// let days = month_days(2025, 2).unwrap();
/// assert_eq!(days.len(), 28);
///
/// let leap = month_days(2024, 2).unwrap();
/// assert_eq!(leap.len(), 29);
/// ```
pub fn month_days(year: i32, month: u32) -> Result<Vec<NaiveDate>> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(RosterError::InvalidMonth { year, month })?;

    let days = first
        .iter_days()
        .take_while(|d| d.month() == month)
        .collect();
    Ok(days)
}

/// Returns true for Saturday and Sunday.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rosterforge_core::calendar::is_weekend;
///
/// // 2025-03-01 is a Saturday.
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
