use std::path::Path;

use crate::commands::{open, week_index, CommandError};
use crate::plan::WEEK_COUNT;

pub fn run(dir: &Path, week: usize, text: &str) -> Result<(), CommandError> {
    let index = week_index(week, WEEK_COUNT)?;
    let mut progress = open(dir);

    progress.set_reflection(index, text);

    println!("Saved reflection for week {}", week);
    Ok(())
}
