//! Stub login handler

use super::traits::{LoginHandler, LoginOutcome};
use crate::state::{FormSnapshot, EMAIL_TITLE};
use anyhow::Result;
use async_trait::async_trait;

/// Logs the attempt and does nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLoginHandler;

#[async_trait]
impl LoginHandler for NoopLoginHandler {
    async fn submit(&self, snapshot: &FormSnapshot) -> Result<LoginOutcome> {
        let user = snapshot
            .by_title(EMAIL_TITLE)
            .map(|f| f.text.as_str())
            .unwrap_or_default();
        tracing::info!(user, fields = snapshot.fields.len(), "login submitted");
        Ok(LoginOutcome::NotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{login_sections, FormModel, PasswordPolicy, Status};

    #[test]
    fn test_noop_returns_not_implemented() {
        let form = FormModel::initialize(login_sections(&PasswordPolicy::default())).unwrap();
        let snapshot = form.collect_snapshot();
        let outcome = tokio_test::block_on(NoopLoginHandler.submit(&snapshot)).unwrap();
        assert_eq!(outcome, LoginOutcome::NotImplemented);
    }

    #[test]
    fn test_noop_accepts_empty_snapshot() {
        let outcome = tokio_test::block_on(NoopLoginHandler.submit(&FormSnapshot::default()));
        assert!(outcome.is_ok());
    }

    #[test]
    fn test_outcome_status() {
        assert_eq!(
            LoginOutcome::Accepted.status(),
            Status::Info("Logged in".to_string())
        );
        assert_eq!(
            LoginOutcome::Rejected("bad password".to_string()).status(),
            Status::Blocked("Login rejected: bad password".to_string())
        );
        assert!(matches!(LoginOutcome::NotImplemented.status(), Status::Info(_)));
    }
}
