use serde::{Deserialize, Serialize};

use crate::plan::WEEK_COUNT;

/// One free-text note per week, stored verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReflectionSet(Vec<String>);

impl ReflectionSet {
    pub fn fresh() -> Self {
        ReflectionSet(vec![String::new(); WEEK_COUNT])
    }

    pub fn notes(&self) -> &[String] {
        &self.0
    }

    /// Missing weeks read as empty
    pub fn get(&self, week: usize) -> &str {
        self.0.get(week).map(String::as_str).unwrap_or("")
    }

    /// Replace one week's note, padding any missing earlier weeks with empty notes
    pub fn set(&mut self, week: usize, text: &str) {
        if self.0.len() <= week {
            self.0.resize(week + 1, String::new());
        }
        self.0[week] = text.to_string();
    }

    pub fn is_plan_shaped(&self) -> bool {
        self.0.len() == WEEK_COUNT
    }

    pub fn reshape_to_plan(&mut self) {
        self.0.resize(WEEK_COUNT, String::new());
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}
