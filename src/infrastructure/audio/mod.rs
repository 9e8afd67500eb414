mod audio_decoder;
mod wav_encoder;

pub use audio_decoder::SymphoniaAudioDecoder;
pub use wav_encoder::encode_pcm16_wav;
