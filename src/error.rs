use thiserror::Error;

/// Reasons the audio/visual session can fail to come up.
///
/// None of these are retried; the owning task logs the error and the plane is
/// never drawn.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetching {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("reading the selected file failed: {0}")]
    FileRead(String),

    #[error("audio decode failed: {0}")]
    Decode(String),

    #[error("{0} is not available in this browser")]
    Unsupported(&'static str),

    #[error("WebGPU setup failed: {0}")]
    Gpu(String),
}

impl LoadError {
    /// Wrap a debug-printable JS failure as a decode error.
    pub fn decode(err: impl std::fmt::Debug) -> Self {
        LoadError::Decode(format!("{:?}", err))
    }

    pub fn fetch(url: &str, err: impl std::fmt::Debug) -> Self {
        LoadError::Fetch {
            url: url.to_string(),
            reason: format!("{:?}", err),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("fallback URL must not be empty")]
    EmptyFallbackUrl,

    #[error("smoothing time constant {0} is outside 0..=1")]
    SmoothingOutOfRange(f32),

    #[error("output volume {0} must be finite and non-negative")]
    InvalidVolume(f32),
}
