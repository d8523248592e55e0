//! Crate error type
//!
//! Gameplay itself never fails; these cover caller bugs and the storage seam.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A percentage outside `[0, 100]` was passed to a chance roll
    #[error("percent param ({0}) must be within 0..=100")]
    PercentOutOfRange(f32),

    /// Settings or an input trace could not be (de)serialized
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings storage could not be read or written
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
