//! Method ARN parsing.
//!
//! API Gateway hands the authorizer the exact resource being invoked as a *method ARN*:
//!
//! `arn:<partition>:execute-api:<region>:<account>:<api-id>/<stage>/<verb>/<resource-path>`
//!
//! The policy responder needs the API id and stage out of that string so it can grant a
//! wildcard covering the whole stage rather than the single method, letting one cached
//! decision serve every route behind the same gateway.

use crate::error::{AuthorizerError, AuthorizerResult};
use std::fmt;
use std::str::FromStr;

/// A parsed API Gateway method ARN.
///
/// Use [`MethodArn::from_str`] (via `str::parse`) to validate an externally supplied value.
/// The resource path may be empty (the API root) and may span multiple `/` segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodArn {
    partition: String,
    service: String,
    region: String,
    account_id: String,
    api_id: String,
    stage: String,
    verb: String,
    resource_path: String,
}

impl MethodArn {
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn api_id(&self) -> &str {
        &self.api_id
    }

    pub fn stage(&self) -> &str {
        &self.stage
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    /// The resource pattern granting every verb and path under this ARN's API stage.
    pub fn wildcard_resource(&self) -> String {
        format!(
            "arn:{}:{}:{}:{}:{}/{}/*/*",
            self.partition, self.service, self.region, self.account_id, self.api_id, self.stage
        )
    }
}

impl FromStr for MethodArn {
    type Err = AuthorizerError;

    fn from_str(s: &str) -> AuthorizerResult<Self> {
        let invalid = || AuthorizerError::InvalidMethodArn(s.to_string());

        let mut fields = s.splitn(6, ':');
        let scheme = fields.next().ok_or_else(invalid)?;
        if scheme != "arn" {
            return Err(invalid());
        }
        let partition = fields.next().ok_or_else(invalid)?;
        let service = fields.next().ok_or_else(invalid)?;
        let region = fields.next().ok_or_else(invalid)?;
        let account_id = fields.next().ok_or_else(invalid)?;
        let resource = fields.next().ok_or_else(invalid)?;

        // api-id/stage/verb are mandatory; everything after the third slash is the path.
        let mut segments = resource.splitn(4, '/');
        let api_id = segments.next().filter(|v| !v.is_empty()).ok_or_else(invalid)?;
        let stage = segments.next().filter(|v| !v.is_empty()).ok_or_else(invalid)?;
        let verb = segments.next().filter(|v| !v.is_empty()).ok_or_else(invalid)?;
        let resource_path = segments.next().unwrap_or("");

        Ok(Self {
            partition: partition.to_string(),
            service: service.to_string(),
            region: region.to_string(),
            account_id: account_id.to_string(),
            api_id: api_id.to_string(),
            stage: stage.to_string(),
            verb: verb.to_string(),
            resource_path: resource_path.to_string(),
        })
    }
}

impl fmt::Display for MethodArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}/{}/{}/{}",
            self.partition,
            self.service,
            self.region,
            self.account_id,
            self.api_id,
            self.stage,
            self.verb,
            self.resource_path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARN: &str = "arn:aws:execute-api:us-east-1:123456789012:abcdef123/prod/GET/widgets/42";

    #[test]
    fn test_parse_full_method_arn() {
        let arn: MethodArn = ARN.parse().unwrap();

        assert_eq!(arn.region(), "us-east-1");
        assert_eq!(arn.account_id(), "123456789012");
        assert_eq!(arn.api_id(), "abcdef123");
        assert_eq!(arn.stage(), "prod");
        assert_eq!(arn.verb(), "GET");
        assert_eq!(arn.resource_path(), "widgets/42");
    }

    #[test]
    fn test_display_round_trips() {
        let arn: MethodArn = ARN.parse().unwrap();
        assert_eq!(arn.to_string(), ARN);
    }

    #[test]
    fn test_empty_resource_path_is_allowed() {
        let arn: MethodArn = "arn:aws:execute-api:us-east-1:123456789012:abcdef123/prod/GET/"
            .parse()
            .unwrap();

        assert_eq!(arn.verb(), "GET");
        assert_eq!(arn.resource_path(), "");
    }

    #[test]
    fn test_wildcard_resource_covers_the_stage() {
        let arn: MethodArn = ARN.parse().unwrap();

        assert_eq!(
            arn.wildcard_resource(),
            "arn:aws:execute-api:us-east-1:123456789012:abcdef123/prod/*/*"
        );
    }

    #[test]
    fn test_missing_arn_fields_are_rejected() {
        let result = "arn:aws:execute-api:us-east-1:123456789012".parse::<MethodArn>();

        match result {
            Err(AuthorizerError::InvalidMethodArn(msg)) => {
                assert!(msg.contains("123456789012"));
            }
            _ => panic!("Expected InvalidMethodArn error"),
        }
    }

    #[test]
    fn test_missing_resource_segments_are_rejected() {
        assert!("arn:aws:execute-api:us-east-1:123456789012:abcdef123/prod"
            .parse::<MethodArn>()
            .is_err());
        assert!("arn:aws:execute-api:us-east-1:123456789012:abcdef123"
            .parse::<MethodArn>()
            .is_err());
    }

    #[test]
    fn test_non_arn_input_is_rejected() {
        assert!("not-an-arn".parse::<MethodArn>().is_err());
        assert!("".parse::<MethodArn>().is_err());
    }
}
