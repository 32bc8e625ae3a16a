use std::path::Path;

use crate::commands::{open, week_index, CommandError};
use crate::plan::{self, WEEK_COUNT};
use crate::utils::format::progress_label;

pub fn run(dir: &Path, week: usize) -> Result<(), CommandError> {
    let index = week_index(week, WEEK_COUNT)?;
    let progress = open(dir);
    let info = plan::week_info(index);
    let (start, end) = plan::week_ranges()[index];

    println!("{}: Days {}-{}", info.title, start + 1, end + 1);
    println!("Focus:      {}", info.focus);
    println!("Script:     {}", info.script);
    println!("Quote:      {}", info.quote);
    println!(
        "Progress:   {}",
        progress_label(
            progress.week_progress_percent(index),
            progress.week_completed_call_count(index),
            plan::week_planned_calls(index),
        )
    );

    let reflection = progress.reflections().get(index);
    if reflection.is_empty() {
        println!("Reflection: (none)");
    } else {
        println!("Reflection: {}", reflection);
    }

    Ok(())
}
