use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Unknown gateway kind: {0}")]
    UnknownKind(String),
    #[error("Unknown gateway code: {0}")]
    UnknownCode(u8),
}

pub type Result<T> = std::result::Result<T, GatewayError>;
