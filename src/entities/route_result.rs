use serde::{Deserialize, Serialize};

use crate::entities::Location;
use crate::error::{invalid_state_error, Error};

/// The record kept per token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum RouteResult {
    InProgress,
    Success {
        path: Vec<Location>,
        total_distance: u64,
        total_time: u64,
    },
    Failure {
        error: String,
    },
}

impl RouteResult {
    pub fn success(path: Vec<Location>, total_distance: u64, total_time: u64) -> Self {
        Self::Success {
            path,
            total_distance,
            total_time,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Success { .. } => "success",
            Self::Failure { .. } => "failure",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Moves an in-progress result to the terminal `next` state.
    #[tracing::instrument(skip(next), fields(to = next.name()))]
    pub fn transition(&self, next: RouteResult) -> Result<RouteResult, Error> {
        match (self, &next) {
            (Self::InProgress, next) if next.is_terminal() => Ok(next.clone()),
            _ => Err(invalid_state_error()),
        }
    }
}
