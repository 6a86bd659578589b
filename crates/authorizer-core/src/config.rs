//! Authorizer runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into the validator by reference. The intent is to avoid reading process-wide
//! environment variables during request handling: the credential pair is fixed for the lifetime
//! of a function instance, so concurrent invocations can share it without synchronisation.

use crate::error::{AuthorizerError, AuthorizerResult};
use std::fmt;

/// The configured Basic auth identity, resolved at cold start.
///
/// # Construction
/// - [`AuthConfig::new`] validates an explicit pair.
/// - [`AuthConfig::from_env_values`] accepts the raw `Option<String>` results of reading
///   `BASIC_AUTH_USERNAME` / `BASIC_AUTH_PASSWORD`, so the environment read stays at the
///   process entrypoint.
///
/// # Errors
/// An unset or empty username or password is a configuration error, not a credential pair to
/// compare against. Comparing against empty strings would let an empty `Authorization` decode
/// match, so construction refuses instead.
#[derive(Clone)]
pub struct AuthConfig {
    username: String,
    password: String,
}

impl AuthConfig {
    /// Create a new `AuthConfig` from an already-resolved credential pair.
    pub fn new(username: String, password: String) -> AuthorizerResult<Self> {
        if username.is_empty() {
            return Err(AuthorizerError::MissingCredentialConfig(
                "BASIC_AUTH_USERNAME",
            ));
        }
        if password.is_empty() {
            return Err(AuthorizerError::MissingCredentialConfig(
                "BASIC_AUTH_PASSWORD",
            ));
        }

        Ok(Self { username, password })
    }

    /// Build the configuration from optional environment values.
    ///
    /// `None` and `Some("")` are treated identically: both mean the deployment forgot to supply
    /// the credential and the process must not start.
    pub fn from_env_values(
        username: Option<String>,
        password: Option<String>,
    ) -> AuthorizerResult<Self> {
        Self::new(username.unwrap_or_default(), password.unwrap_or_default())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Manual impl so the password can never leak through debug logging.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pair_is_accepted() {
        let config = AuthConfig::new("alice".into(), "s3cr3t".into()).unwrap();

        assert_eq!(config.username(), "alice");
        assert_eq!(config.password(), "s3cr3t");
    }

    #[test]
    fn test_missing_username_is_rejected() {
        let result = AuthConfig::from_env_values(None, Some("s3cr3t".into()));

        match result {
            Err(AuthorizerError::MissingCredentialConfig(var)) => {
                assert_eq!(var, "BASIC_AUTH_USERNAME");
            }
            _ => panic!("Expected MissingCredentialConfig error"),
        }
    }

    #[test]
    fn test_missing_password_is_rejected() {
        let result = AuthConfig::from_env_values(Some("alice".into()), None);

        match result {
            Err(AuthorizerError::MissingCredentialConfig(var)) => {
                assert_eq!(var, "BASIC_AUTH_PASSWORD");
            }
            _ => panic!("Expected MissingCredentialConfig error"),
        }
    }

    #[test]
    fn test_empty_string_is_treated_as_missing() {
        assert!(AuthConfig::from_env_values(Some(String::new()), Some("s3cr3t".into())).is_err());
        assert!(AuthConfig::from_env_values(Some("alice".into()), Some(String::new())).is_err());
    }

    #[test]
    fn test_debug_never_shows_the_password() {
        let config = AuthConfig::new("alice".into(), "s3cr3t".into()).unwrap();
        let rendered = format!("{config:?}");

        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("s3cr3t"));
    }
}
