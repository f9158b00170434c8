//! Cross-platform microphone capture using cpal
//!
//! Captured samples are kept in memory as mono 16-bit PCM at the device
//! sample rate and encoded to WAV when the session stops.

use std::io::Cursor;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Instant;

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, StreamConfig};
use tokio::sync::oneshot;
use tokio::time::Duration as TokioDuration;

use crate::application::ports::{Recorder, RecorderError};
use crate::domain::analysis::{AudioClip, AudioMimeType};

/// Microphone recorder using cpal
///
/// The stream is owned by a dedicated capture thread because cpal::Stream
/// is not Send. The thread keeps the stream alive until the recording flag
/// is cleared.
pub struct CpalRecorder {
    /// Captured audio samples (mono, i16, at device sample rate)
    audio_buffer: Arc<StdMutex<Vec<i16>>>,
    /// Device sample rate, set once the stream is running
    device_sample_rate: Arc<AtomicU32>,
    /// Recording state
    is_recording: Arc<AtomicBool>,
    /// Elapsed time in milliseconds
    elapsed_ms: Arc<AtomicU64>,
}

impl CpalRecorder {
    /// Create a new cpal-based recorder
    pub fn new() -> Self {
        Self {
            audio_buffer: Arc::new(StdMutex::new(Vec::new())),
            device_sample_rate: Arc::new(AtomicU32::new(0)),
            is_recording: Arc::new(AtomicBool::new(false)),
            elapsed_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Map a device-level failure, surfacing permission problems distinctly
    fn device_error(message: String) -> RecorderError {
        let lower = message.to_lowercase();
        if lower.contains("permission") || lower.contains("access denied") {
            RecorderError::PermissionDenied(message)
        } else {
            RecorderError::DeviceError(message)
        }
    }

    /// Mix stereo (or wider) frames down to mono
    fn mix_to_mono(samples: &[i16], channels: u16) -> Vec<i16> {
        if channels == 1 {
            return samples.to_vec();
        }

        samples
            .chunks(channels as usize)
            .map(|frame| {
                let sum: i32 = frame.iter().map(|&s| s as i32).sum();
                (sum / channels as i32) as i16
            })
            .collect()
    }

    /// Encode PCM samples to an in-memory mono 16-bit WAV
    fn encode_wav(samples: &[i16], sample_rate: u32) -> Result<AudioClip, RecorderError> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec)
                .map_err(|e| RecorderError::EncodingFailed(e.to_string()))?;
            for &sample in samples {
                writer
                    .write_sample(sample)
                    .map_err(|e| RecorderError::EncodingFailed(e.to_string()))?;
            }
            writer
                .finalize()
                .map_err(|e| RecorderError::EncodingFailed(e.to_string()))?;
        }

        Ok(AudioClip::new(cursor.into_inner(), AudioMimeType::Wav))
    }
}

impl Default for CpalRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Recorder for CpalRecorder {
    async fn start(&self) -> Result<(), RecorderError> {
        if self
            .is_recording
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(RecorderError::AlreadyRecording);
        }

        {
            let mut buffer = self.audio_buffer.lock().unwrap();
            buffer.clear();
        }
        self.elapsed_ms.store(0, Ordering::SeqCst);

        let audio_buffer = Arc::clone(&self.audio_buffer);
        let device_sample_rate = Arc::clone(&self.device_sample_rate);
        let is_recording = Arc::clone(&self.is_recording);
        let elapsed_ms = Arc::clone(&self.elapsed_ms);

        // The capture thread reports its startup outcome once, then keeps
        // the stream alive until the recording flag is cleared.
        let (ready_tx, ready_rx) = oneshot::channel::<Result<(), RecorderError>>();

        std::thread::spawn(move || {
            let host = cpal::default_host();
            let device = match host.default_input_device() {
                Some(d) => d,
                None => {
                    is_recording.store(false, Ordering::SeqCst);
                    let _ = ready_tx.send(Err(RecorderError::NoInputDevice));
                    return;
                }
            };

            let supported = match device.default_input_config() {
                Ok(c) => c,
                Err(e) => {
                    is_recording.store(false, Ordering::SeqCst);
                    let _ = ready_tx.send(Err(CpalRecorder::device_error(e.to_string())));
                    return;
                }
            };

            let sample_format = supported.sample_format();
            let channels = supported.channels();
            let sample_rate = supported.sample_rate().0;
            let config: StreamConfig = supported.into();

            device_sample_rate.store(sample_rate, Ordering::SeqCst);

            let audio_buffer_clone = Arc::clone(&audio_buffer);
            let is_recording_clone = Arc::clone(&is_recording);

            let stream_result = match sample_format {
                SampleFormat::I16 => device.build_input_stream(
                    &config,
                    move |data: &[i16], _: &cpal::InputCallbackInfo| {
                        if is_recording_clone.load(Ordering::SeqCst) {
                            let mono = CpalRecorder::mix_to_mono(data, channels);
                            if let Ok(mut buffer) = audio_buffer_clone.lock() {
                                buffer.extend_from_slice(&mono);
                            }
                        }
                    },
                    |err| eprintln!("Audio stream error: {}", err),
                    None,
                ),

                SampleFormat::F32 => {
                    let audio_buffer_clone = Arc::clone(&audio_buffer);
                    let is_recording_clone = Arc::clone(&is_recording);

                    device.build_input_stream(
                        &config,
                        move |data: &[f32], _: &cpal::InputCallbackInfo| {
                            if is_recording_clone.load(Ordering::SeqCst) {
                                let i16_data: Vec<i16> =
                                    data.iter().map(|&s| (s * 32767.0) as i16).collect();
                                let mono = CpalRecorder::mix_to_mono(&i16_data, channels);
                                if let Ok(mut buffer) = audio_buffer_clone.lock() {
                                    buffer.extend_from_slice(&mono);
                                }
                            }
                        },
                        |err| eprintln!("Audio stream error: {}", err),
                        None,
                    )
                }

                other => {
                    is_recording.store(false, Ordering::SeqCst);
                    let _ = ready_tx.send(Err(RecorderError::DeviceError(format!(
                        "Unsupported sample format: {:?}",
                        other
                    ))));
                    return;
                }
            };

            let stream = match stream_result {
                Ok(s) => s,
                Err(e) => {
                    is_recording.store(false, Ordering::SeqCst);
                    let _ = ready_tx.send(Err(CpalRecorder::device_error(e.to_string())));
                    return;
                }
            };

            if let Err(e) = stream.play() {
                is_recording.store(false, Ordering::SeqCst);
                let _ = ready_tx.send(Err(CpalRecorder::device_error(e.to_string())));
                return;
            }

            let _ = ready_tx.send(Ok(()));

            // Keep the stream alive until stopped
            let started = Instant::now();
            while is_recording.load(Ordering::SeqCst) {
                elapsed_ms.store(started.elapsed().as_millis() as u64, Ordering::SeqCst);
                std::thread::sleep(std::time::Duration::from_millis(100));
            }

            drop(stream);
        });

        match ready_rx.await {
            Ok(outcome) => outcome,
            Err(_) => {
                self.is_recording.store(false, Ordering::SeqCst);
                Err(RecorderError::DeviceError(
                    "Capture thread exited before reporting status".to_string(),
                ))
            }
        }
    }

    async fn stop(&self) -> Result<Option<AudioClip>, RecorderError> {
        // Stopping while idle is a no-op
        if !self.is_recording.load(Ordering::SeqCst) {
            return Ok(None);
        }

        self.is_recording.store(false, Ordering::SeqCst);

        // Give the capture thread a moment to release the stream
        tokio::time::sleep(TokioDuration::from_millis(100)).await;

        let sample_rate = self.device_sample_rate.load(Ordering::SeqCst);
        if sample_rate == 0 {
            return Err(RecorderError::StreamError(
                "Input stream never reported a sample rate".to_string(),
            ));
        }

        let samples = {
            let mut buffer = self.audio_buffer.lock().unwrap();
            std::mem::take(&mut *buffer)
        };

        if samples.is_empty() {
            return Err(RecorderError::StreamError(
                "No audio data captured".to_string(),
            ));
        }

        // Encode in a blocking task, the buffer may hold minutes of audio
        let clip = tokio::task::spawn_blocking(move || Self::encode_wav(&samples, sample_rate))
            .await
            .map_err(|e| RecorderError::EncodingFailed(format!("Encode task error: {}", e)))??;

        Ok(Some(clip))
    }

    async fn cancel(&self) -> Result<(), RecorderError> {
        self.is_recording.store(false, Ordering::SeqCst);

        // Give the capture thread a moment to release the stream
        tokio::time::sleep(TokioDuration::from_millis(100)).await;

        {
            let mut buffer = self.audio_buffer.lock().unwrap();
            buffer.clear();
        }
        self.elapsed_ms.store(0, Ordering::SeqCst);

        Ok(())
    }

    fn is_recording(&self) -> bool {
        self.is_recording.load(Ordering::SeqCst)
    }

    fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms.load(Ordering::SeqCst)
    }
}
