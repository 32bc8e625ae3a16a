use std::path::Path;

use crate::commands::{open, CommandError};

pub fn run(dir: &Path) -> Result<(), CommandError> {
    let mut progress = open(dir);
    let removed = progress.clear()?;

    if removed.is_empty() {
        println!("Nothing to reset in {}", dir.display());
    } else {
        for key in removed {
            println!("Removed: {}", key);
        }
        println!("Progress reset to a fresh 30-day plan");
    }

    Ok(())
}
