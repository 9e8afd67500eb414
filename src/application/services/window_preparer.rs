use crate::domain::{AudioWindow, DecodedAudio};

pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;
/// One second at the default sample rate.
pub const DEFAULT_WINDOW_SIZE: usize = 48_000;
pub const DEFAULT_SILENCE_THRESHOLD: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowConfig {
    pub sample_rate: u32,
    pub window_size: usize,
    pub silence_threshold: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            window_size: DEFAULT_WINDOW_SIZE,
            silence_threshold: DEFAULT_SILENCE_THRESHOLD,
        }
    }
}

/// Cuts a centered, fixed-length window out of a recording and scales it so
/// its peak amplitude is exactly 1.
#[derive(Debug, Clone)]
pub struct WindowPreparer {
    config: WindowConfig,
}

impl WindowPreparer {
    pub fn new(config: WindowConfig) -> Self {
        Self { config }
    }

    pub fn prepare(&self, samples: &[f32]) -> Result<AudioWindow, PrepareError> {
        let need = self.config.window_size;
        if samples.len() < need {
            return Err(PrepareError::TooShort {
                got: samples.len(),
                need,
            });
        }

        let start = (samples.len() / 2).saturating_sub(need / 2);
        let window = &samples[start..start + need];

        let mut peak = 0.0f32;
        for (offset, sample) in window.iter().enumerate() {
            if !sample.is_finite() {
                return Err(PrepareError::NonFiniteSample {
                    index: start + offset,
                });
            }
            peak = peak.max(sample.abs());
        }

        if peak == 0.0 || peak < self.config.silence_threshold {
            return Err(PrepareError::SignalTooWeak {
                peak,
                threshold: self.config.silence_threshold,
            });
        }

        // s / peak maps the peak sample to exactly 1.0; s * (1 / peak) may not.
        let normalized: Vec<f32> = window.iter().map(|s| s / peak).collect();

        tracing::debug!(
            recorded = samples.len(),
            start,
            window = need,
            peak,
            "Audio window prepared"
        );

        AudioWindow::new(normalized, self.config.sample_rate)
            .map_err(|e| PrepareError::Normalization(e.to_string()))
    }

    pub fn prepare_decoded(&self, audio: DecodedAudio) -> Result<AudioWindow, PrepareError> {
        if audio.sample_rate != self.config.sample_rate {
            return Err(PrepareError::SampleRateMismatch {
                got: audio.sample_rate,
                expected: self.config.sample_rate,
            });
        }
        self.prepare(&audio.samples)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PrepareError {
    #[error("recording too short: got {got} samples, need {need}")]
    TooShort { got: usize, need: usize },
    #[error("audio signal too weak: peak {peak} below threshold {threshold}")]
    SignalTooWeak { peak: f32, threshold: f32 },
    #[error("non-finite sample at index {index}")]
    NonFiniteSample { index: usize },
    #[error("invalid sample rate: {got}Hz, required {expected}Hz")]
    SampleRateMismatch { got: u32, expected: u32 },
    #[error("normalization failed: {0}")]
    Normalization(String),
}
