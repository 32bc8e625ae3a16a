use std::path::Path;

use crate::commands::{open, CommandError};
use crate::plan::WEEK_COUNT;

pub fn run(dir: &Path) -> Result<(), CommandError> {
    let mut progress = open(dir);
    let mismatches = progress.shape_mismatches();
    let reflections_ok = progress.reflections().is_plan_shaped();

    if mismatches.is_empty() && reflections_ok {
        println!("Saved progress already matches the plan");
        return Ok(());
    }

    for mismatch in &mismatches {
        match mismatch.stored {
            Some(stored) if mismatch.planned == 0 => {
                println!("Day {}: dropped ({} calls, not in plan)", mismatch.day + 1, stored);
            }
            Some(stored) => {
                println!(
                    "Day {}: {} -> {} calls",
                    mismatch.day + 1,
                    stored,
                    mismatch.planned
                );
            }
            None => {
                println!("Day {}: added ({} calls)", mismatch.day + 1, mismatch.planned);
            }
        }
    }
    if !reflections_ok {
        println!(
            "Reflections: {} -> {} weeks",
            progress.reflections().notes().len(),
            WEEK_COUNT
        );
    }

    progress.reshape_to_plan()?;

    println!("Reshaped saved progress to the 30-day plan");
    Ok(())
}
