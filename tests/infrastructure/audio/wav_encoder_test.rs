use birdcall::infrastructure::audio::encode_pcm16_wav;

#[test]
fn given_window_when_encoding_then_writes_mono_16_bit_pcm() {
    let wav = encode_pcm16_wav(&[0.0, 0.5, -0.5, 1.0], 48_000).unwrap();

    let mut reader = hound::WavReader::new(&wav[..]).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 48_000);
    assert_eq!(spec.bits_per_sample, 16);

    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples, vec![0, 16_384, -16_384, i16::MAX]);
}

#[test]
fn given_samples_beyond_full_scale_when_encoding_then_clamps() {
    let wav = encode_pcm16_wav(&[2.0, -3.0], 8_000).unwrap();

    let mut reader = hound::WavReader::new(&wav[..]).unwrap();
    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();

    assert_eq!(samples, vec![i16::MAX, -i16::MAX]);
}
