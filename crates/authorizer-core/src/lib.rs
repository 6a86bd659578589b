//! # Authorizer Core
//!
//! Credential validation and policy responses for the Basic auth gateway authorizer.
//!
//! Contains:
//! - [`AuthConfig`] — the credential pair, resolved once at cold start
//! - [`basic`] — the Basic `Authorization` header validator
//! - [`MethodArn`] — typed parsing of the invoked API Gateway resource
//! - [`policy`] — allow/deny decisions in the gateway's wire shape
//!
//! Everything here is pure and platform-agnostic; the Lambda entrypoint in the workspace
//! root binary adapts [`Decision`] to the runtime's error convention.

#![warn(rust_2018_idioms)]

pub mod arn;
pub mod basic;
pub mod config;
pub mod error;
pub mod policy;

pub use arn::MethodArn;
pub use basic::{validate, BasicCredentials};
pub use config::AuthConfig;
pub use error::{AuthorizerError, AuthorizerResult};
pub use policy::{respond, AuthorizerResponse, Decision};
