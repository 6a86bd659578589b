//! Lambda entrypoint for the Basic auth API Gateway authorizer.
//!
//! ## Purpose
//! Adapts the pure decision core in `authorizer-core` to the Lambda runtime: deserialises the
//! REQUEST-authorizer event, validates the `Authorization` header against the configured
//! identity, and returns either an allow policy or the runtime error the gateway maps to a
//! 401 `WWW-Authenticate: Basic` challenge.
//!
//! Every failure path — missing header, malformed Basic payload, wrong credentials, an ARN
//! the core cannot parse — collapses to the same "Unauthorized" error, so callers cannot
//! distinguish a bad password from any other denial.

use std::collections::HashMap;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use authorizer_core::{respond, AuthConfig, AuthorizerResponse, BasicCredentials, Decision, MethodArn};

/// The error text API Gateway's REQUEST-authorizer integration turns into a 401 response.
const UNAUTHORIZED: &str = "Unauthorized";

/// The REQUEST-authorizer invocation event, reduced to the fields this function reads.
#[derive(Debug, Deserialize)]
struct AuthorizerRequest {
    #[serde(default)]
    headers: HashMap<String, String>,
    #[serde(rename = "methodArn")]
    method_arn: String,
}

impl AuthorizerRequest {
    /// HTTP APIs forward the header lowercased; REST APIs preserve the client's casing.
    fn authorization_header(&self) -> Option<&str> {
        self.headers
            .get("Authorization")
            .or_else(|| self.headers.get("authorization"))
            .map(String::as_str)
    }
}

/// Handle one authorizer invocation.
///
/// # Returns
/// * `Ok(AuthorizerResponse)` - an allow policy covering the invoked API stage
/// * `Err` - the "Unauthorized" error on every denial path; the gateway converts it to a 401
///
/// Denials log only the failure class. The presented header value never reaches a log event
/// or the returned error.
async fn authorize(
    config: &AuthConfig,
    event: LambdaEvent<AuthorizerRequest>,
) -> Result<AuthorizerResponse, Error> {
    let (request, _context) = event.into_parts();

    let Some(header) = request.authorization_header() else {
        tracing::warn!("authorization header not present");
        return Err(UNAUTHORIZED.into());
    };

    let Some(credentials) = BasicCredentials::from_header(header) else {
        tracing::warn!("authorization header is not well-formed Basic");
        return Err(UNAUTHORIZED.into());
    };

    let method_arn: MethodArn = match request.method_arn.parse() {
        Ok(arn) => arn,
        Err(err) => {
            tracing::error!(error = %err, "could not parse method ARN");
            return Err(UNAUTHORIZED.into());
        }
    };

    match respond(credentials.matches(config), credentials.username(), &method_arn) {
        Decision::Allow(response) => {
            tracing::info!(principal = credentials.username(), "request authorized");
            Ok(response)
        }
        Decision::Deny => {
            tracing::warn!("credentials do not match the configured pair");
            Err(UNAUTHORIZED.into())
        }
    }
}

/// Main entry point for the authorizer function.
///
/// Resolves the credential pair from the environment once at cold start and refuses to start
/// when either value is missing or empty, then hands invocations to [`authorize`].
///
/// # Environment Variables
/// - `BASIC_AUTH_USERNAME`: the configured username (required, non-empty)
/// - `BASIC_AUTH_PASSWORD`: the configured password (required, non-empty)
/// - `RUST_LOG`: log filter (default: `basicauth_authorizer=info`)
#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("basicauth_authorizer=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AuthConfig::from_env_values(
        std::env::var("BASIC_AUTH_USERNAME").ok(),
        std::env::var("BASIC_AUTH_PASSWORD").ok(),
    )?;
    let config = &config;

    tracing::info!("-- Starting Basic auth authorizer");

    lambda_runtime::run(service_fn(move |event| async move {
        authorize(config, event).await
    }))
    .await
}
