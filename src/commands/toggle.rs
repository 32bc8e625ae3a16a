use std::path::Path;

use crate::commands::{open, CommandError};
use crate::plan;
use crate::progress::CompletionGrid;

pub fn run(dir: &Path, day: usize, call: usize) -> Result<(), CommandError> {
    let mut progress = open(dir);
    let (day_index, call_index) = locate(progress.grid(), day, call)?;

    progress.toggle_call(day_index, call_index);

    let done = progress
        .grid()
        .day(day_index)
        .and_then(|calls| calls.get(call_index).copied());
    let state = if done == Some(true) { "done" } else { "not done" };
    match plan::week_of_day(day_index) {
        Some(week) => println!(
            "Day {} call {}: {} ({})",
            day,
            call,
            state,
            plan::week_info(week).title
        ),
        None => println!("Day {} call {}: {}", day, call, state),
    }

    Ok(())
}

/// Map 1-based day/call numbers onto the stored grid, which may not match the plan
fn locate(grid: &CompletionGrid, day: usize, call: usize) -> Result<(usize, usize), CommandError> {
    let days = grid.days().len();
    if days == 0 {
        return Err(CommandError::NoSavedDays);
    }
    let calls = match day.checked_sub(1).and_then(|d| grid.day(d)) {
        Some(calls) => calls.len(),
        None => return Err(CommandError::DayOutOfRange { day, days }),
    };

    if call == 0 || call > calls {
        return Err(CommandError::CallOutOfRange { day, call, calls });
    }

    Ok((day - 1, call - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_within_plan() {
        let grid = CompletionGrid::fresh();
        assert_eq!(locate(&grid, 1, 1).unwrap(), (0, 0));
        assert_eq!(locate(&grid, 30, 5).unwrap(), (29, 4));
    }

    #[test]
    fn test_locate_rejects_missing_calls() {
        let grid = CompletionGrid::fresh();
        assert!(matches!(
            locate(&grid, 0, 1),
            Err(CommandError::DayOutOfRange { day: 0, days: 30 })
        ));
        assert!(matches!(
            locate(&grid, 31, 1),
            Err(CommandError::DayOutOfRange { day: 31, days: 30 })
        ));
        assert!(matches!(
            locate(&grid, 1, 3),
            Err(CommandError::CallOutOfRange { day: 1, call: 3, calls: 2 })
        ));
        assert!(locate(&grid, 8, 0).is_err());
    }

    #[test]
    fn test_locate_on_empty_grid() {
        let grid = CompletionGrid::from_days(Vec::new());
        let err = locate(&grid, 1, 1).unwrap_err();
        assert!(matches!(err, CommandError::NoSavedDays));
        assert!(!err.to_string().contains("1-0"));
    }

    #[test]
    fn test_locate_follows_stored_shape() {
        let grid = CompletionGrid::from_days(vec![vec![false; 3]]);
        assert_eq!(locate(&grid, 1, 3).unwrap(), (0, 2));
        assert!(locate(&grid, 2, 1).is_err());
    }
}
