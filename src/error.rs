use thiserror::Error;

pub type WaveResult<T> = Result<T, WaveError>;

#[derive(Debug, Error)]
pub enum WaveError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
