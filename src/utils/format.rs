/// Whole-number percentage for display; "n/a" when there was nothing to divide by
pub fn percent_label(percent: f64) -> String {
    if percent.is_finite() {
        format!("{}%", percent.round() as i64)
    } else {
        "n/a".to_string()
    }
}

/// "62% (67/108 calls)"
pub fn progress_label(percent: f64, done: usize, planned: usize) -> String {
    format!("{} ({}/{} calls)", percent_label(percent), done, planned)
}

/// Numbered checkboxes for one day, e.g. "[x] 1  [ ] 2"
pub fn checklist(calls: &[bool]) -> String {
    calls
        .iter()
        .enumerate()
        .map(|(i, &done)| format!("[{}] {}", if done { "x" } else { " " }, i + 1))
        .collect::<Vec<_>>()
        .join("  ")
}
