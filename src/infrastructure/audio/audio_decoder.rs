use std::io::Cursor;

use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioDecoder, AudioDecoderError};
use crate::domain::DecodedAudio;

const RESAMPLE_CHUNK: usize = 1024;

#[derive(Debug, Clone, Copy)]
pub struct SymphoniaAudioDecoder {
    target_sample_rate: u32,
}

impl SymphoniaAudioDecoder {
    pub fn new(target_sample_rate: u32) -> Self {
        Self { target_sample_rate }
    }
}

impl AudioDecoder for SymphoniaAudioDecoder {
    fn decode(&self, data: &[u8]) -> Result<DecodedAudio, AudioDecoderError> {
        if data.is_empty() {
            return Err(AudioDecoderError::DecodingFailed("empty input".to_string()));
        }

        let source = read_mono(data)?;
        let samples = if source.sample_rate == self.target_sample_rate {
            source.samples
        } else {
            resample_mono(&source.samples, source.sample_rate, self.target_sample_rate)?
        };

        tracing::debug!(
            samples = samples.len(),
            source_rate = source.sample_rate,
            target_rate = self.target_sample_rate,
            "Audio decoded to mono PCM"
        );

        Ok(DecodedAudio::new(samples, self.target_sample_rate))
    }
}

fn read_mono(data: &[u8]) -> Result<DecodedAudio, AudioDecoderError> {
    let stream = MediaSourceStream::new(Box::new(Cursor::new(data.to_vec())), Default::default());
    let probed = symphonia::default::get_probe()
        .format(
            &Hint::new(),
            stream,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AudioDecoderError::DecodingFailed(format!("probe: {}", e)))?;
    let mut reader = probed.format;

    let track = reader
        .default_track()
        .ok_or_else(|| AudioDecoderError::DecodingFailed("no audio track found".to_string()))?;
    let track_id = track.id;
    let params = track.codec_params.clone();
    let sample_rate = params
        .sample_rate
        .ok_or_else(|| AudioDecoderError::DecodingFailed("unknown sample rate".to_string()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&params, &DecoderOptions::default())
        .map_err(|e| AudioDecoderError::UnsupportedFormat(format!("codec: {}", e)))?;

    let mut mono = Vec::new();
    let mut buffer: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match reader.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(AudioDecoderError::DecodingFailed(format!("packet: {}", e))),
        };
        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
                continue;
            }
            Err(e) => return Err(AudioDecoderError::DecodingFailed(format!("decode: {}", e))),
        };
        if decoded.frames() == 0 {
            continue;
        }

        let spec = *decoded.spec();
        let channels = spec.channels.count();
        let frames = decoded.capacity();
        if buffer.as_ref().is_some_and(|b| b.capacity() < frames * channels) {
            buffer = None;
        }
        let buf = buffer.get_or_insert_with(|| SampleBuffer::new(frames as u64, spec));
        buf.copy_interleaved_ref(decoded);
        downmix_into(&mut mono, buf.samples(), channels);
    }

    if mono.is_empty() {
        return Err(AudioDecoderError::DecodingFailed(
            "no audio samples decoded".to_string(),
        ));
    }

    Ok(DecodedAudio::new(mono, sample_rate))
}

fn downmix_into(mono: &mut Vec<f32>, interleaved: &[f32], channels: usize) {
    if channels <= 1 {
        mono.extend_from_slice(interleaved);
        return;
    }
    let scale = 1.0 / channels as f32;
    mono.extend(
        interleaved
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() * scale),
    );
}

fn resample_mono(
    samples: &[f32],
    from_rate: u32,
    to_rate: u32,
) -> Result<Vec<f32>, AudioDecoderError> {
    let resample_err = |e: rubato::ResampleError| {
        AudioDecoderError::DecodingFailed(format!("resample: {}", e))
    };

    let ratio = to_rate as f64 / from_rate as f64;
    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };
    let mut resampler = SincFixedIn::<f32>::new(ratio, 1.0, params, RESAMPLE_CHUNK, 1)
        .map_err(|e| AudioDecoderError::DecodingFailed(format!("resampler init: {}", e)))?;

    let delay = resampler.output_delay();
    let expected = (samples.len() as f64 * ratio).round() as usize;
    let mut output = Vec::with_capacity(expected + delay + RESAMPLE_CHUNK);

    let mut chunks = samples.chunks_exact(RESAMPLE_CHUNK);
    for chunk in &mut chunks {
        let frames = resampler.process(&[chunk], None).map_err(resample_err)?;
        output.extend_from_slice(&frames[0]);
    }
    let tail = chunks.remainder();
    if !tail.is_empty() {
        let frames = resampler
            .process_partial(Some(&[tail][..]), None)
            .map_err(resample_err)?;
        output.extend_from_slice(&frames[0]);
    }

    // Flush the filter until the delayed tail is out.
    while output.len() < expected + delay {
        let frames = resampler
            .process_partial(None::<&[&[f32]]>, None)
            .map_err(resample_err)?;
        if frames[0].is_empty() {
            break;
        }
        output.extend_from_slice(&frames[0]);
    }

    output.drain(..delay.min(output.len()));
    output.truncate(expected);
    Ok(output)
}
