use thiserror::Error;

#[derive(Error, Debug)]
pub enum BomError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cycle detected: attaching '{child}' under '{parent}' would make it its own descendant")]
    CycleDetected { parent: String, child: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BomError>;
