#[derive(Debug, thiserror::Error)]
pub enum DischargeError {
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),
    #[error("failed to serialize record: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize record: {0}")]
    Deserialization(serde_json::Error),
    #[error("completion request failed: {0}")]
    ProviderRequest(#[from] reqwest::Error),
    #[error("completion provider returned status {status}: {body}")]
    ProviderStatus { status: u16, body: String },
}

pub type DischargeResult<T> = std::result::Result<T, DischargeError>;
