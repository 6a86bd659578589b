//! Authorization responses in the gateway's wire shape.
//!
//! The platform expects an IAM-style policy document back from the authorizer:
//!
//! ```json
//! {
//!   "principalId": "alice",
//!   "policyDocument": {
//!     "Version": "2012-10-17",
//!     "Statement": [
//!       { "Action": "execute-api:Invoke", "Effect": "Allow", "Resource": "arn:..." }
//!     ]
//!   }
//! }
//! ```
//!
//! Denial is not a `Deny` policy here: the REQUEST-authorizer integration signals it by
//! failing the invocation with an "Unauthorized" error, which the gateway translates into a
//! 401 with a `WWW-Authenticate: Basic` challenge. That translation lives at the Lambda
//! boundary; this module only produces the explicit [`Decision`].

use crate::arn::MethodArn;
use serde::Serialize;
use std::collections::HashMap;

/// IAM policy language version. Always this value.
pub const POLICY_VERSION: &str = "2012-10-17";

/// The only action an API Gateway authorizer policy ever grants or withholds.
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Effect {
    Allow,
    Deny,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Statement {
    #[serde(rename = "Action")]
    action: String,
    #[serde(rename = "Effect")]
    effect: Effect,
    #[serde(rename = "Resource")]
    resource: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PolicyDocument {
    #[serde(rename = "Version")]
    version: String,
    #[serde(rename = "Statement")]
    statement: Vec<Statement>,
}

/// The success payload returned to the gateway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthorizerResponse {
    #[serde(rename = "principalId")]
    principal_id: String,
    #[serde(rename = "policyDocument")]
    policy_document: PolicyDocument,
    /// Extra key/values the gateway exposes downstream as `$context.authorizer.<key>`.
    /// Cached together with the decision.
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<HashMap<String, String>>,
}

impl AuthorizerResponse {
    /// An allow response granting the whole API stage named by `method_arn`.
    ///
    /// Granting the stage-wide wildcard rather than the single method means the gateway's
    /// cached decision (keyed on the `Authorization` header) stays valid across every route,
    /// trading policy scope for one authorizer invocation per TTL window.
    pub fn allow(principal: &str, method_arn: &MethodArn) -> Self {
        let resource = method_arn.wildcard_resource();
        tracing::debug!(%resource, "granting stage-wide invoke");

        Self {
            principal_id: principal.to_string(),
            policy_document: PolicyDocument {
                version: POLICY_VERSION.to_string(),
                statement: vec![Statement {
                    action: INVOKE_ACTION.to_string(),
                    effect: Effect::Allow,
                    resource,
                }],
            },
            context: None,
        }
    }

    /// Attach authorizer context to pass downstream.
    pub fn with_context(mut self, context: HashMap<String, String>) -> Self {
        self.context = Some(context);
        self
    }

    pub fn principal_id(&self) -> &str {
        &self.principal_id
    }
}

/// The outcome of an authorization check.
///
/// Kept explicit rather than folded into an error so the core stays pure; the Lambda
/// boundary decides how a `Deny` is signalled to the platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow(AuthorizerResponse),
    Deny,
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }
}

/// Map a validation outcome to a gateway decision.
///
/// `principal` is only attached on the allow path; a denial carries no identity at all, so
/// nothing about the presented credentials can leak through the response.
pub fn respond(authenticated: bool, principal: &str, method_arn: &MethodArn) -> Decision {
    if authenticated {
        Decision::Allow(AuthorizerResponse::allow(principal, method_arn))
    } else {
        Decision::Deny
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method_arn() -> MethodArn {
        "arn:aws:execute-api:us-east-1:123456789012:abcdef123/prod/GET/widgets"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_allow_response_wire_shape() {
        let response = AuthorizerResponse::allow("alice", &method_arn());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["principalId"], "alice");
        assert_eq!(json["policyDocument"]["Version"], "2012-10-17");
        let statement = &json["policyDocument"]["Statement"][0];
        assert_eq!(statement["Action"], "execute-api:Invoke");
        assert_eq!(statement["Effect"], "Allow");
        assert_eq!(
            statement["Resource"],
            "arn:aws:execute-api:us-east-1:123456789012:abcdef123/prod/*/*"
        );
    }

    #[test]
    fn test_context_is_omitted_unless_set() {
        let response = AuthorizerResponse::allow("alice", &method_arn());
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("context").is_none());
    }

    #[test]
    fn test_context_rides_along_when_set() {
        let context = HashMap::from([("team".to_string(), "ops".to_string())]);
        let response = AuthorizerResponse::allow("alice", &method_arn()).with_context(context);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["context"]["team"], "ops");
    }

    #[test]
    fn test_respond_allows_with_principal() {
        let decision = respond(true, "alice", &method_arn());

        match decision {
            Decision::Allow(response) => assert_eq!(response.principal_id(), "alice"),
            Decision::Deny => panic!("Expected an allow decision"),
        }
    }

    #[test]
    fn test_respond_denies_without_detail() {
        let decision = respond(false, "alice", &method_arn());

        assert!(!decision.is_allow());
        assert_eq!(decision, Decision::Deny);
    }
}
