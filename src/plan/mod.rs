//! The fixed 30-day call plan: daily quotas, week boundaries and weekly content.
//!
//! Everything here is pure. Day and week indices are 0-based; passing an index
//! outside the plan is a caller bug.

pub mod content;

pub use content::{WeekInfo, WEEKLY_INFO};

/// Number of days in the plan
pub const PLAN_DAYS: usize = 30;

/// Number of weeks the days are grouped into
pub const WEEK_COUNT: usize = 4;

/// Inclusive (start, end) day indices for each week
const WEEK_RANGES: [(usize, usize); WEEK_COUNT] = [(0, 6), (7, 13), (14, 20), (21, 29)];

/// Calls planned for a day: 2 in week 1, rising by one each week to 5 in week 4.
pub fn day_target(day: usize) -> usize {
    debug_assert!(day < PLAN_DAYS, "day index {} outside the plan", day);
    match day {
        0..=6 => 2,
        7..=13 => 3,
        14..=20 => 4,
        _ => 5,
    }
}

/// The fixed partition of the 30 days into 4 weeks
pub fn week_ranges() -> &'static [(usize, usize); WEEK_COUNT] {
    &WEEK_RANGES
}

/// Static focus/script/quote content for a week
pub fn week_info(week: usize) -> &'static WeekInfo {
    &WEEKLY_INFO[week]
}

/// Week that owns a day index
pub fn week_of_day(day: usize) -> Option<usize> {
    WEEK_RANGES
        .iter()
        .position(|&(start, end)| (start..=end).contains(&day))
}

pub fn total_planned_calls() -> usize {
    (0..PLAN_DAYS).map(day_target).sum()
}

pub fn week_planned_calls(week: usize) -> usize {
    let (start, end) = WEEK_RANGES[week];
    (start..=end).map(day_target).sum()
}
