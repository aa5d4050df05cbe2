//! Trait abstraction for the login call to enable mocking in tests

use crate::state::{FormSnapshot, Status};
use anyhow::Result;
use async_trait::async_trait;

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)] // Accepted and Rejected are returned by real backends, not the stub
pub enum LoginOutcome {
    Accepted,
    Rejected(String),
    /// No backend is wired up
    NotImplemented,
}

impl LoginOutcome {
    /// Status bar message for this outcome
    pub fn status(&self) -> Status {
        match self {
            Self::Accepted => Status::Info("Logged in".to_string()),
            Self::Rejected(reason) => Status::Blocked(format!("Login rejected: {reason}")),
            Self::NotImplemented => {
                Status::Info("Login is not implemented in this demo".to_string())
            }
        }
    }
}

/// Receives a validated form snapshot when the user presses "Log In"
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginHandler: Send + Sync {
    async fn submit(&self, snapshot: &FormSnapshot) -> Result<LoginOutcome>;
}
