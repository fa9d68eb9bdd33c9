use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single archive call that failed during a bulk clear.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveFailure {
    pub id: String,
    pub reason: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActivityError {
    /// Some archive calls of a clear-all failed. Archived records stay archived.
    #[error("{}", describe_incomplete_clear(.archived, .failed))]
    ClearAllIncomplete {
        archived: Vec<String>,
        failed: Vec<ArchiveFailure>,
    },
}

fn describe_incomplete_clear(archived: &[String], failed: &[ArchiveFailure]) -> String {
    let failures = failed
        .iter()
        .map(|f| format!("{} ({})", f.id, f.reason))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Cleared {} of {} activities; failed to archive: {}",
        archived.len(),
        archived.len() + failed.len(),
        failures
    )
}
