use tracing::{debug, warn};

use super::{CompletionGrid, ReflectionSet, ShapeMismatch};
use crate::plan;
use crate::storage::{KeyValueStore, StorageError, GRID_KEY, REFLECTIONS_KEY};

/// The mutable record of calls made and weekly reflections.
///
/// Loaded once from its slots when constructed; every successful mutation
/// writes the affected structure back as a whole. Write failures are logged
/// and otherwise ignored.
#[derive(Debug)]
pub struct ProgressStore<S: KeyValueStore> {
    store: S,
    grid: CompletionGrid,
    reflections: ReflectionSet,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Adopt persisted state as-is, or start fresh for any slot that is
    /// missing, unreadable or malformed.
    pub fn load(store: S) -> Self {
        let grid = load_slot(&store, GRID_KEY, CompletionGrid::from_json, CompletionGrid::fresh);
        let reflections = load_slot(
            &store,
            REFLECTIONS_KEY,
            ReflectionSet::from_json,
            ReflectionSet::fresh,
        );

        ProgressStore {
            store,
            grid,
            reflections,
        }
    }

    pub fn grid(&self) -> &CompletionGrid {
        &self.grid
    }

    pub fn reflections(&self) -> &ReflectionSet {
        &self.reflections
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    pub fn toggle_call(&mut self, day: usize, call: usize) {
        if !self.grid.toggle(day, call) {
            debug!(day, call, "toggle outside stored grid ignored");
            return;
        }
        self.persist_grid();
    }

    pub fn set_reflection(&mut self, week: usize, text: &str) {
        self.reflections.set(week, text);
        self.persist_reflections();
    }

    pub fn completed_call_count(&self) -> usize {
        self.grid.completed()
    }

    pub fn week_completed_call_count(&self, week: usize) -> usize {
        let (start, end) = plan::week_ranges()[week];
        self.grid.completed_in(start, end)
    }

    /// Percent of the plan's calls completed. NaN if the plan had no calls.
    pub fn overall_progress_percent(&self) -> f64 {
        percent(self.completed_call_count(), plan::total_planned_calls())
    }

    pub fn week_progress_percent(&self, week: usize) -> f64 {
        percent(
            self.week_completed_call_count(week),
            plan::week_planned_calls(week),
        )
    }

    /// Where the stored grid disagrees with the plan. Reported, never fixed on load.
    pub fn shape_mismatches(&self) -> Vec<ShapeMismatch> {
        self.grid.shape_mismatches()
    }

    /// Resize both structures to the current plan and persist them
    pub fn reshape_to_plan(&mut self) -> Result<(), StorageError> {
        self.grid.reshape_to_plan();
        self.reflections.reshape_to_plan();
        self.save_grid()?;
        self.save_reflections()
    }

    /// Delete both slots and start over in memory. Returns the slots that existed.
    pub fn clear(&mut self) -> Result<Vec<&'static str>, StorageError> {
        let results = [GRID_KEY, REFLECTIONS_KEY].map(|key| (key, self.store.remove(key)));

        // Memory starts over even if a slot could not be removed
        self.grid = CompletionGrid::fresh();
        self.reflections = ReflectionSet::fresh();

        let mut removed = Vec::new();
        for (key, result) in results {
            if result? {
                removed.push(key);
            }
        }
        Ok(removed)
    }

    pub fn save_grid(&mut self) -> Result<(), StorageError> {
        let json = self.grid.to_json().map_err(encode_error(GRID_KEY))?;
        self.store.set(GRID_KEY, &json)
    }

    pub fn save_reflections(&mut self) -> Result<(), StorageError> {
        let json = self
            .reflections
            .to_json()
            .map_err(encode_error(REFLECTIONS_KEY))?;
        self.store.set(REFLECTIONS_KEY, &json)
    }

    fn persist_grid(&mut self) {
        if let Err(e) = self.save_grid() {
            warn!(error = %e, "failed to save completion grid");
        }
    }

    fn persist_reflections(&mut self) {
        if let Err(e) = self.save_reflections() {
            warn!(error = %e, "failed to save reflections");
        }
    }
}

fn load_slot<S, T>(
    store: &S,
    key: &str,
    parse: fn(&str) -> serde_json::Result<T>,
    fresh: fn() -> T,
) -> T
where
    S: KeyValueStore,
{
    let content = match store.get(key) {
        Ok(Some(content)) => content,
        Ok(None) => {
            debug!(key, "no saved state, starting fresh");
            return fresh();
        }
        Err(e) => {
            warn!(key, error = %e, "could not read saved state, starting fresh");
            return fresh();
        }
    };

    match parse(&content) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "saved state is malformed, starting fresh");
            fresh()
        }
    }
}

fn encode_error(key: &'static str) -> impl Fn(serde_json::Error) -> StorageError {
    move |source| StorageError::Encode {
        key: key.to_string(),
        source,
    }
}

fn percent(done: usize, planned: usize) -> f64 {
    100.0 * done as f64 / planned as f64
}
