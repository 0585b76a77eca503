use crate::constants::{
    DEFAULT_FALLBACK_URL, DEFAULT_OUTPUT_VOLUME, DEFAULT_SMOOTHING_TIME_CONSTANT,
};
use crate::error::ConfigError;

/// Per-instance settings chosen at `start` time.
///
/// The analysis window size is fixed (see `ANALYSER_FFT_SIZE`) because the
/// shader declares a fixed-length frequency array.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizerConfig {
    pub fallback_url: String,
    pub smoothing_time_constant: f32,
    pub output_volume: f32,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
            smoothing_time_constant: DEFAULT_SMOOTHING_TIME_CONSTANT,
            output_volume: DEFAULT_OUTPUT_VOLUME,
        }
    }
}

impl VisualizerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fallback_url.trim().is_empty() {
            return Err(ConfigError::EmptyFallbackUrl);
        }
        let s = self.smoothing_time_constant;
        if !(0.0..=1.0).contains(&s) {
            return Err(ConfigError::SmoothingOutOfRange(s));
        }
        let v = self.output_volume;
        if !v.is_finite() || v < 0.0 {
            return Err(ConfigError::InvalidVolume(v));
        }
        Ok(())
    }
}
