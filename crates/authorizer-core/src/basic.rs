//! HTTP Basic credential parsing and validation.
//!
//! The validator is a pure function over the raw `Authorization` header value and the
//! configured pair: no I/O, no retries, no state. A missing, malformed, or mismatched header
//! is a normal unauthenticated outcome, never an error, so every failure mode collapses to
//! `false` and is indistinguishable from a wrong password by the caller.
//!
//! Nothing in this module logs or embeds the presented header or credential values.

use crate::config::AuthConfig;
use base64::{engine::general_purpose, Engine as _};
use std::fmt;

/// The case-sensitive scheme prefix a Basic `Authorization` header must carry.
const BASIC_SCHEME_PREFIX: &str = "Basic ";

/// A username/password pair decoded from a `Basic <base64>` header value.
///
/// Construction only succeeds for a well-formed header; possession of a value therefore
/// guarantees the scheme, base64, and `:` separator were all present. It says nothing about
/// whether the pair matches the configured identity — that is [`BasicCredentials::matches`].
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    username: String,
    password: String,
}

impl BasicCredentials {
    /// Decode a raw `Authorization` header value.
    ///
    /// Returns `None` when the scheme prefix is absent (case-sensitive), the payload is not
    /// valid standard-alphabet base64, the decoded bytes are not UTF-8, or no `:` separator is
    /// found. The username is everything before the first `:`; the password may itself
    /// contain `:` bytes.
    pub fn from_header(header: &str) -> Option<Self> {
        let encoded = header.strip_prefix(BASIC_SCHEME_PREFIX)?;
        let decoded = general_purpose::STANDARD.decode(encoded).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Compare against the configured pair. Exact, case-sensitive, no trimming.
    pub fn matches(&self, config: &AuthConfig) -> bool {
        self.username == config.username() && self.password == config.password()
    }

    /// The decoded username, used as the principal on an allow decision.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validate an optional `Authorization` header against the configured identity.
///
/// Returns `true` if and only if the header carries well-formed Basic credentials whose
/// username and password both byte-for-byte match the configured pair.
pub fn validate(header: Option<&str>, config: &AuthConfig) -> bool {
    let Some(header) = header else {
        return false;
    };

    match BasicCredentials::from_header(header) {
        Some(credentials) => credentials.matches(config),
        None => false,
    }
}
