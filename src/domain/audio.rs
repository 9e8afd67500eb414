#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl DecodedAudio {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

/// Fixed-length, peak-normalized sample buffer handed to an inference module.
///
/// Every sample is finite and lies in `[-1, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioWindow {
    samples: Vec<f32>,
    sample_rate: u32,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AudioWindowError {
    #[error("sample {index} outside [-1, 1]: {value}")]
    OutOfRange { index: usize, value: f32 },
}

impl AudioWindow {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self, AudioWindowError> {
        if let Some((index, &value)) = samples
            .iter()
            .enumerate()
            .find(|(_, s)| !s.is_finite() || s.abs() > 1.0)
        {
            return Err(AudioWindowError::OutOfRange { index, value });
        }

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |peak, s| peak.max(s.abs()))
    }
}
