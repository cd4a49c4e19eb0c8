//! Audio playback using cpal
//! Resamples from the stream rate to the native device rate if needed

use anyhow::{Context, Result};
use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, FromSample, SampleFormat, SizedSample, Stream, StreamConfig, SupportedStreamConfig};
use rubato::{FftFixedIn, Resampler};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::Playback;
use crate::speech::types::AudioData;

/// Plays synthesized speech through the default output device.
pub struct AudioPlayer {
    device: Device,
    supported_config: SupportedStreamConfig,
}

impl AudioPlayer {
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .context("no output device available")?;

        let supported_config = device
            .default_output_config()
            .context("failed to get default output config")?;

        Ok(Self {
            device,
            supported_config,
        })
    }

    fn start_stream(&self, audio: &AudioData) -> Result<(Stream, Arc<AtomicBool>)> {
        let native_rate = self.supported_config.sample_rate().0;
        let native_channels = self.supported_config.channels() as usize;
        let sample_format = self.supported_config.sample_format();
        let config: StreamConfig = self.supported_config.clone().into();

        let mut samples = pcm_i16_to_f32(&audio.pcm_data);
        if audio.sample_rate != native_rate {
            samples = resample(&samples, audio.sample_rate, native_rate)?;
        }
        if audio.channels == 1 && native_channels > 1 {
            samples = spread_channels(&samples, native_channels);
        }

        let samples = Arc::new(samples);
        let cursor = Arc::new(AtomicUsize::new(0));
        let done = Arc::new(AtomicBool::new(false));

        let stream = match sample_format {
            SampleFormat::F32 => {
                self.build_stream::<f32>(&config, samples, cursor, done.clone())?
            }
            SampleFormat::I16 => {
                self.build_stream::<i16>(&config, samples, cursor, done.clone())?
            }
            format => anyhow::bail!("unsupported sample format: {:?}", format),
        };

        stream.play().context("failed to start playback stream")?;
        Ok((stream, done))
    }

    fn build_stream<T>(
        &self,
        config: &StreamConfig,
        samples: Arc<Vec<f32>>,
        cursor: Arc<AtomicUsize>,
        done: Arc<AtomicBool>,
    ) -> Result<Stream>
    where
        T: SizedSample + FromSample<f32> + Default + Send + 'static,
    {
        self.device
            .build_output_stream(
                config,
                move |out: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let pos = cursor.load(Ordering::SeqCst);
                    let remaining = samples.len().saturating_sub(pos);

                    if remaining == 0 {
                        out.fill(T::default());
                        done.store(true, Ordering::SeqCst);
                        return;
                    }

                    let count = remaining.min(out.len());
                    for (slot, &sample) in out.iter_mut().zip(&samples[pos..pos + count]) {
                        *slot = T::from_sample(sample);
                    }
                    if count < out.len() {
                        out[count..].fill(T::default());
                    }

                    cursor.store(pos + count, Ordering::SeqCst);
                },
                move |err| {
                    tracing::error!(error = ?err, "playback stream error");
                },
                None,
            )
            .context("failed to build output stream")
    }
}

#[async_trait(?Send)]
impl Playback for AudioPlayer {
    async fn play_to_end(&self, audio: AudioData) -> Result<()> {
        let (stream, done) = self.start_stream(&audio)?;

        while !done.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        drop(stream);
        Ok(())
    }
}

fn pcm_i16_to_f32(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect()
}

fn resample(samples: &[f32], source_rate: u32, target_rate: u32) -> Result<Vec<f32>> {
    let chunk_size = 1024;
    let mut resampler =
        FftFixedIn::<f32>::new(source_rate as usize, target_rate as usize, chunk_size, 2, 1)
            .context("failed to create resampler")?;

    let mut output = Vec::new();
    let mut pos = 0;

    while pos < samples.len() {
        let needed = resampler.input_frames_next();
        let end = (pos + needed).min(samples.len());

        let mut chunk = samples[pos..end].to_vec();
        // Final partial chunk gets zero-padded.
        chunk.resize(needed, 0.0);

        let resampled = resampler
            .process(&[chunk], None)
            .map_err(|e| anyhow::anyhow!("resampling failed: {e:?}"))?;
        if let Some(frames) = resampled.into_iter().next() {
            output.extend(frames);
        }

        pos = end;
    }

    Ok(output)
}

fn spread_channels(samples: &[f32], channels: usize) -> Vec<f32> {
    let mut output = Vec::with_capacity(samples.len() * channels);
    for &sample in samples {
        output.extend(std::iter::repeat(sample).take(channels));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcm_decode_maps_full_scale() {
        let bytes = [0x00, 0x00, 0xff, 0x7f, 0x00, 0x80];
        let samples = pcm_i16_to_f32(&bytes);

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], 0.0);
        assert!((samples[1] - (i16::MAX as f32 / 32768.0)).abs() < 1e-6);
        assert_eq!(samples[2], -1.0);
    }

    #[test]
    fn pcm_decode_ignores_trailing_odd_byte() {
        let samples = pcm_i16_to_f32(&[0x00, 0x00, 0x01]);
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn spread_duplicates_each_sample() {
        let spread = spread_channels(&[0.1, 0.2], 2);
        assert_eq!(spread, vec![0.1, 0.1, 0.2, 0.2]);
    }

    #[test]
    fn resample_preserves_duration_roughly() {
        let one_second: Vec<f32> = vec![0.25; 16_000];
        let out = resample(&one_second, 16_000, 48_000).unwrap();
        // Chunked FFT resampling trims edges; expect within 10% of 48k.
        let expected = 48_000.0;
        assert!((out.len() as f32 - expected).abs() < expected * 0.1);
    }
}
