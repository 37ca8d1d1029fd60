use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid term '{value}' (expected one of Y2S1, Y2S2, Y3S1, Y3S2)")]
    InvalidTerm { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
