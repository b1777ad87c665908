//! Selection snapshot persisted by the host across suspend/resume.
//!
//! Only the two normalized positions are kept. Bounds and value mode are
//! reconfigured by the host before restoring.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    pub normalized_min: f64,
    pub normalized_max: f64,
}

impl Default for SavedState {
    fn default() -> Self {
        Self { normalized_min: 0.0, normalized_max: 1.0 }
    }
}

impl SavedState {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
