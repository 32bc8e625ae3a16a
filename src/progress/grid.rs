use serde::{Deserialize, Serialize};

use crate::plan::{self, PLAN_DAYS};

/// Per-day, per-call completion flags.
///
/// Serialized as a bare JSON array of arrays of booleans. A loaded grid keeps
/// whatever shape was stored, even when it no longer matches the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionGrid(Vec<Vec<bool>>);

impl CompletionGrid {
    /// All calls unchecked, sized to the current plan
    pub fn fresh() -> Self {
        CompletionGrid(
            (0..PLAN_DAYS)
                .map(|day| vec![false; plan::day_target(day)])
                .collect(),
        )
    }

    #[cfg(test)]
    pub fn from_days(days: Vec<Vec<bool>>) -> Self {
        CompletionGrid(days)
    }

    pub fn days(&self) -> &[Vec<bool>] {
        &self.0
    }

    pub fn day(&self, day: usize) -> Option<&[bool]> {
        self.0.get(day).map(Vec::as_slice)
    }

    /// Flip one call. Returns false and changes nothing if the call is not stored.
    pub fn toggle(&mut self, day: usize, call: usize) -> bool {
        match self.0.get_mut(day).and_then(|calls| calls.get_mut(call)) {
            Some(done) => {
                *done = !*done;
                true
            }
            None => false,
        }
    }

    pub fn completed(&self) -> usize {
        self.completed_in(0, self.0.len().saturating_sub(1))
    }

    /// Completed calls on days `start..=end`, clamped to the stored days
    pub fn completed_in(&self, start: usize, end: usize) -> usize {
        self.0
            .iter()
            .skip(start)
            .take(end.saturating_sub(start) + 1)
            .map(|calls| calls.iter().filter(|&&done| done).count())
            .sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Days whose stored call count differs from the plan, plus the plan's
    /// days missing from the store. Stored days past the plan are reported
    /// with a target of 0.
    pub fn shape_mismatches(&self) -> Vec<ShapeMismatch> {
        let span = self.0.len().max(PLAN_DAYS);
        (0..span)
            .filter_map(|day| {
                let planned = if day < PLAN_DAYS { plan::day_target(day) } else { 0 };
                let stored = self.0.get(day).map(Vec::len);
                if stored == Some(planned) {
                    None
                } else {
                    Some(ShapeMismatch {
                        day,
                        planned,
                        stored,
                    })
                }
            })
            .collect()
    }

    /// Resize to the current plan, keeping existing flags where they still fit
    pub fn reshape_to_plan(&mut self) {
        self.0.truncate(PLAN_DAYS);
        while self.0.len() < PLAN_DAYS {
            self.0.push(Vec::new());
        }
        for (day, calls) in self.0.iter_mut().enumerate() {
            calls.resize(plan::day_target(day), false);
        }
    }
}

/// A day whose stored calls disagree with the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMismatch {
    pub day: usize,
    pub planned: usize,
    /// `None` when the day is missing from the stored grid entirely
    pub stored: Option<usize>,
}
