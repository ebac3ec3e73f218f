use thiserror::Error;

/// Single failure taxonomy of the crate. Every variant is detected at a
/// component boundary, before any RNG consumption or drawing, so a failed
/// call never leaves a partially built scene behind.
#[derive(Debug, Error)]
pub enum Error {
  /// Out-of-range parameter, unknown palette mode token,
  /// or degenerate geometry request.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),
}

impl Error {
  pub fn invalid_argument(msg: impl Into<String>) -> Self {
    Error::InvalidArgument(msg.into())
  }
}

pub type Result<T> = std::result::Result<T, Error>;
