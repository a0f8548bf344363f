use shared_types::IssuerId;
use strum::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Issuers config not accessible: {reason}")]
    ConfigUnavailable { reason: String },
    #[error("Invalid issuer id `{0}`")]
    InvalidIssuerId(IssuerId),
    #[error("Mapping error: `{0}`")]
    MappingError(String),
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorCode {
    BR_0001,
    BR_0002,
    BR_0003,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0001 => "Issuers config not accessible",
            ErrorCode::BR_0002 => "Invalid issuer id",
            ErrorCode::BR_0003 => "Issuers config malformed",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::ConfigUnavailable { .. } => ErrorCode::BR_0001,
            ServiceError::InvalidIssuerId(_) => ErrorCode::BR_0002,
            ServiceError::MappingError(_) => ErrorCode::BR_0003,
        }
    }
}
