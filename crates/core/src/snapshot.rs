use crate::goals::WeeklyGoals;
use crate::trade::Trade;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors from loading a progress snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// IO error reading the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything goal tracking needs, as exported by the journal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    #[serde(default)]
    pub goals: Option<WeeklyGoals>,
    #[serde(default)]
    pub trades: Vec<Trade>,
    #[serde(default)]
    pub checkin_count: u32,
}

impl ProgressSnapshot {
    /// Loads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid snapshot.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let snapshot: Self = serde_json::from_reader(reader)?;

        info!(
            "Loaded snapshot from {}: {} trades, {} check-ins, goals {}",
            path.display(),
            snapshot.trades.len(),
            snapshot.checkin_count,
            if snapshot.goals.is_some() { "present" } else { "absent" }
        );

        Ok(snapshot)
    }

    /// Parses a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not a valid snapshot.
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}
