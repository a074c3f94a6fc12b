use thiserror::Error;

use crate::api::ObjectId;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("view scale must be finite and > 0, got {scale}")]
    InvalidScale { scale: f64 },

    #[error("operation `{operation}` rejected: {kind} objects do not support it")]
    CapabilityRejected {
        operation: &'static str,
        kind: &'static str,
    },

    #[error("object {id} is not a member of this surface")]
    UnknownObject { id: ObjectId },
}
