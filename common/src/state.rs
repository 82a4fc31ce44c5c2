use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// Lifecycle state of a unit of work (experiment, trial, task).
///
/// The wire labels are the uppercase forms used across the REST API and the
/// database, e.g. `"ACTIVE"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunState {
    /// Work is in progress and may still transition
    Active,
    /// Stopped on user request
    Canceled,
    /// Finished successfully
    Completed,
    /// Removed along with its artifacts
    Deleted,
    /// Stopped by a failure
    Error,
}

impl RunState {
    /// Every lifecycle label, in a fixed order for deterministic iteration.
    pub const ALL: [RunState; 5] = [
        RunState::Active,
        RunState::Canceled,
        RunState::Completed,
        RunState::Deleted,
        RunState::Error,
    ];

    /// States after which no further transition happens.
    pub const TERMINAL: [RunState; 3] = [RunState::Completed, RunState::Canceled, RunState::Error];

    /// Check if this unit of work will not transition again
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled | Self::Error)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            RunState::Active => "ACTIVE",
            RunState::Canceled => "CANCELED",
            RunState::Completed => "COMPLETED",
            RunState::Deleted => "DELETED",
            RunState::Error => "ERROR",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunState {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(RunState::Active),
            "CANCELED" => Ok(RunState::Canceled),
            "COMPLETED" => Ok(RunState::Completed),
            "DELETED" => Ok(RunState::Deleted),
            "ERROR" => Ok(RunState::Error),
            other => Err(StateError::UnknownRunState(other.to_string())),
        }
    }
}
