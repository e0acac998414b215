//! Simulated sign-in. Any non-empty username/password pair is accepted after
//! a fixed delay; there is no credential store behind it.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter both username and password";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter both username and password")]
    MissingCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Who is signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub username: String,
}

#[derive(Debug, Clone, Copy)]
pub struct LoginGate {
    delay: Duration,
}

impl LoginGate {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Checks that both credentials are present, then waits out the login
    /// delay. An empty field fails immediately; whitespace counts as input.
    pub async fn authenticate(
        &self,
        credentials: Credentials,
    ) -> Result<UserSession, LoginError> {
        if credentials.username.is_empty() || credentials.password.is_empty() {
            debug!("login rejected: missing credentials");
            return Err(LoginError::MissingCredentials);
        }

        tokio::time::sleep(self.delay).await;
        info!(username = %credentials.username, "signed in");
        Ok(UserSession {
            username: credentials.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn accepts_any_non_empty_pair_after_the_delay() {
        let gate = LoginGate::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();

        let session = gate
            .authenticate(Credentials::new("chemist", "secret"))
            .await
            .unwrap();

        assert_eq!(session.username, "chemist");
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn blank_fields_fail_without_waiting() {
        let gate = LoginGate::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();

        for (user, pass) in [("", "secret"), ("chemist", ""), ("", "")] {
            let err = gate
                .authenticate(Credentials::new(user, pass))
                .await
                .unwrap_err();
            assert_eq!(err, LoginError::MissingCredentials);
        }

        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn whitespace_username_is_accepted_after_the_delay() {
        let gate = LoginGate::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();

        let session = gate
            .authenticate(Credentials::new("   ", "x"))
            .await
            .unwrap();

        assert_eq!(session.username, "   ");
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[test]
    fn error_text_matches_the_login_screen() {
        assert_eq!(
            LoginError::MissingCredentials.to_string(),
            MISSING_CREDENTIALS_MESSAGE
        );
    }
}
