use std::path::Path;

use thiserror::Error;

use crate::progress::ProgressStore;
use crate::storage::{FileStore, StorageError};

pub mod plan;
pub mod reflect;
pub mod reset;
pub mod reshape;
pub mod status;
pub mod toggle;
pub mod week;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("saved progress has no days; run `soi reshape` or `soi reset`")]
    NoSavedDays,
    #[error("day {day} is not in saved progress (days 1-{days})")]
    DayOutOfRange { day: usize, days: usize },
    #[error("day {day} has no call {call} (calls 1-{calls})")]
    CallOutOfRange { day: usize, call: usize, calls: usize },
    #[error("week {week} does not exist (weeks 1-{weeks})")]
    WeekOutOfRange { week: usize, weeks: usize },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Load progress from the slots under `dir`
pub fn open(dir: &Path) -> ProgressStore<FileStore> {
    ProgressStore::load(FileStore::new(dir))
}

/// Convert a 1-based week number into an index below `weeks`
pub fn week_index(week: usize, weeks: usize) -> Result<usize, CommandError> {
    if week == 0 || week > weeks {
        return Err(CommandError::WeekOutOfRange { week, weeks });
    }
    Ok(week - 1)
}
