use std::path::Path;

use crate::commands::{open, CommandError};
use crate::plan::{self, PLAN_DAYS, WEEK_COUNT};
use crate::progress::ProgressStore;
use crate::storage::FileStore;
use crate::utils::format::{checklist, progress_label};
use crate::utils::fs::{last_saved, saved_slots};

pub fn run(dir: &Path) -> Result<(), CommandError> {
    let progress = open(dir);
    print!("{}", render(&progress));
    Ok(())
}

fn render(progress: &ProgressStore<FileStore>) -> String {
    let mut out = String::new();

    out.push_str("SOI 30-Day Call Plan\n");
    out.push_str("────────────────────\n");
    out.push_str(&format!(
        "Progress: {} complete\n",
        progress_label(
            progress.overall_progress_percent(),
            progress.completed_call_count(),
            plan::total_planned_calls(),
        )
    ));

    let slots = saved_slots(progress.backend());
    let saved = match last_saved(&slots) {
        Some(date) => {
            let keys: Vec<&str> = slots.iter().map(|(key, _)| key.as_str()).collect();
            format!("{} ({})", date.format("%Y-%m-%dT%H:%M:%SZ"), keys.join(", "))
        }
        None => "never".to_string(),
    };
    out.push_str(&format!("Saved:    {}\n\n", saved));

    for week in 0..WEEK_COUNT {
        out.push_str(&format!(
            "{}: {}\n",
            plan::week_info(week).title,
            progress_label(
                progress.week_progress_percent(week),
                progress.week_completed_call_count(week),
                plan::week_planned_calls(week),
            )
        ));
    }
    out.push('\n');

    // Rows follow the plan; stored days past it are not shown, missing ones are blank
    for day in 0..PLAN_DAYS {
        let calls = progress.grid().day(day).unwrap_or(&[]);
        let row = format!("Day {:>2}  {}", day + 1, checklist(calls));
        out.push_str(row.trim_end());
        out.push('\n');
    }

    let mismatches = progress.shape_mismatches();
    if !mismatches.is_empty() {
        out.push_str(&format!(
            "\nWarning: saved progress does not match the plan on {} day(s). \
Run `soi reshape` to fix.\n",
            mismatches.len()
        ));
    }

    out
}
