use thiserror::Error;

/// Main error type for password policy control operations
#[derive(Error, Debug)]
pub enum PpolicyError {
    #[error("Invalid OID string: {0}")]
    InvalidOid(String),

    #[error("Malformed control value: {0}")]
    MalformedRoot(String),

    #[error("Untagged element in password policy sequence")]
    UntaggedElement,

    #[error("Invalid tag for password policy warning: [{0}]")]
    InvalidWarningTag(u32),

    #[error("Invalid password policy element tag: [{0}]")]
    InvalidElementTag(u32),

    #[error("Primitive decode failure: {0}")]
    PrimitiveDecodeFailure(String),

    #[error("BER decoding error: {0}")]
    Decoding(String),

    #[error("BER encoding error: {0}")]
    Encoding(String),
}

/// Result type alias for password policy control operations
pub type PpolicyResult<T> = Result<T, PpolicyError>;
