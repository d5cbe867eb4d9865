//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    auth::{AuthServiceError, Credentials, Session, SessionRole},
    config::SimulatedLatency,
};

/// The only accepted username, compared case-insensitively.
pub const ADMIN_USERNAME: &str = "admin";

/// The only accepted password.
pub const ADMIN_PASSWORD: &str = "admin";

/// Accepts the hard-coded admin pair after the login latency.
#[derive(Debug, Clone)]
pub struct PlaceholderAuthService {
    latency: SimulatedLatency,
}

impl PlaceholderAuthService {
    /// A login gate that answers after `latency`.
    #[must_use]
    pub fn new(latency: SimulatedLatency) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl AuthService for PlaceholderAuthService {
    #[tracing::instrument(
        name = "auth.service.login",
        skip(self, credentials),
        fields(username = %credentials.username),
        err
    )]
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthServiceError> {
        self.latency.wait().await;

        let accepted = credentials.username.to_lowercase() == ADMIN_USERNAME
            && credentials.password.as_str() == ADMIN_PASSWORD;

        if !accepted {
            warn!("rejected login");

            return Err(AuthServiceError::InvalidCredentials);
        }

        info!("session started");

        Ok(Session {
            username: credentials.username,
            role: SessionRole::Admin,
        })
    }
}

#[automock]
#[async_trait]
/// Login check for the dashboard.
pub trait AuthService: Send + Sync {
    /// Exchanges credentials for an administrator session.
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn admin_credentials_open_a_session() -> TestResult {
        let ctx = TestContext::new();

        let session = ctx.auth.login(Credentials::new("admin", "admin")).await?;

        assert_eq!(session.username, "admin");
        assert_eq!(session.role, SessionRole::Admin);

        Ok(())
    }

    #[tokio::test]
    async fn username_is_case_insensitive_and_kept_as_typed() -> TestResult {
        let ctx = TestContext::new();

        let session = ctx.auth.login(Credentials::new("AdMiN", "admin")).await?;

        assert_eq!(session.username, "AdMiN");

        Ok(())
    }

    #[tokio::test]
    async fn password_is_case_sensitive() {
        let ctx = TestContext::new();

        let result = ctx.auth.login(Credentials::new("admin", "ADMIN")).await;

        assert_eq!(result, Err(AuthServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn wrong_username_is_rejected() {
        let ctx = TestContext::new();

        let result = ctx.auth.login(Credentials::new("root", "admin")).await;

        assert_eq!(result, Err(AuthServiceError::InvalidCredentials));
        assert_eq!(
            result.map_err(|error| error.to_string()),
            Err("invalid credentials".to_string())
        );
    }

    #[test]
    fn credentials_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("admin", "admin-password"));

        assert!(!rendered.contains("admin-password"), "leaked: {rendered}");
    }

    #[tokio::test(start_paused = true)]
    async fn login_waits_for_the_configured_latency() -> TestResult {
        let auth = PlaceholderAuthService::new(SimulatedLatency::from_millis(800));
        let start = tokio::time::Instant::now();

        auth.login(Credentials::new("admin", "admin")).await?;

        assert!(
            start.elapsed() >= std::time::Duration::from_millis(800),
            "login should wait for the simulated latency"
        );

        Ok(())
    }
}
