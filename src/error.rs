use thiserror::Error;

/// Errors raised while loading or applying field options.
#[derive(Debug, Error)]
pub enum Error {
    #[error("minimum speed {min} exceeds maximum speed {max}")]
    SpeedRange { min: f32, max: f32 },
    #[error("speed {0} must be finite and non-negative")]
    InvalidSpeed(f32),
    #[error("dot distance {0} must be finite and positive")]
    InvalidDotDistance(f32),
    #[error("failed to read options: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse options: {0}")]
    Json(#[from] serde_json::Error),
}
