use mu_protocol::PacketError;

#[derive(Debug, thiserror::Error)]
pub enum InspectorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid hex input at position {position}: {reason}")]
    InvalidHex { position: usize, reason: &'static str },

    #[error("Protocol error: {0}")]
    Protocol(#[from] PacketError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Usage error: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, InspectorError>;
