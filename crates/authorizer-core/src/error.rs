#[derive(Debug, thiserror::Error)]
pub enum AuthorizerError {
    #[error("{0} is not set or is empty; refusing to start")]
    MissingCredentialConfig(&'static str),
    #[error("invalid method ARN: {0}")]
    InvalidMethodArn(String),
}

pub type AuthorizerResult<T> = std::result::Result<T, AuthorizerError>;
