use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextInputError {
    #[error("width ({width}) and height ({height}) must be bigger than 2 times the padding ({padding})")]
    PaddingTooLarge { width: f32, height: f32, padding: f32 },

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid text input config: {0}")]
    Config(#[from] serde_json::Error),
}
