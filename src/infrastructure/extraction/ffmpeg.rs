//! FFmpeg-based video audio extraction adapter

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::fs;
use tokio::process::{Child, Command};

use crate::application::ports::{AudioExtractor, ExtractionError};
use crate::domain::analysis::{AudioClip, AudioMimeType};
use crate::domain::recording::Duration;

/// Byte length of a bare PCM WAV header
const WAV_HEADER_BYTES: usize = 44;

/// Temp file for the extracted audio track
struct TempAudioFile {
    path: PathBuf,
}

impl TempAudioFile {
    fn new() -> Self {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        let path = std::env::temp_dir().join(format!("emeowtions-{}.wav", timestamp));
        Self { path }
    }

    fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Drop for TempAudioFile {
    fn drop(&mut self) {
        // Best-effort cleanup
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Pulls the audio track out of a video file by shelling out to ffmpeg
pub struct FfmpegExtractor;

impl FfmpegExtractor {
    /// Create a new FFmpeg extractor
    pub fn new() -> Self {
        Self
    }

    /// Build FFmpeg args for stripping the audio track
    fn build_ffmpeg_args(input: &Path, output: &Path) -> Vec<String> {
        vec![
            "-i".to_string(),
            input.to_string_lossy().to_string(),
            "-vn".to_string(), // Drop the video stream
            "-acodec".to_string(),
            "pcm_s16le".to_string(), // 16-bit PCM
            "-ar".to_string(),
            "16000".to_string(), // 16kHz sample rate
            "-ac".to_string(),
            "1".to_string(), // Mono
            "-f".to_string(),
            "wav".to_string(),
            "-y".to_string(), // Overwrite output
            output.to_string_lossy().to_string(),
        ]
    }

    /// Spawn FFmpeg process
    fn spawn_ffmpeg(args: Vec<String>) -> Result<Child, ExtractionError> {
        Command::new("ffmpeg")
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ExtractionError::FfmpegNotFound
                } else {
                    ExtractionError::ExtractionFailed(e.to_string())
                }
            })
    }

    /// Map an FFmpeg failure to a port error using the stderr tail
    fn classify_failure(stderr: &str) -> ExtractionError {
        let detail = stderr
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("unknown error")
            .trim()
            .to_string();

        let lower = detail.to_lowercase();
        if lower.contains("does not contain any stream") {
            // -vn left nothing to encode, the video has no audio track
            ExtractionError::EmptyAudio
        } else if lower.contains("invalid data")
            || lower.contains("moov atom")
            || lower.contains("invalid argument")
            || lower.contains("could not find codec")
            || lower.contains("corrupt")
        {
            ExtractionError::LoadFailed(detail)
        } else {
            ExtractionError::ExtractionFailed(detail)
        }
    }
}

impl Default for FfmpegExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioExtractor for FfmpegExtractor {
    async fn extract(&self, path: &Path, timeout: Duration) -> Result<AudioClip, ExtractionError> {
        let temp_file = TempAudioFile::new();
        let output_path = temp_file.path().clone();

        let args = Self::build_ffmpeg_args(path, &output_path);
        let child = Self::spawn_ffmpeg(args)?;

        // Dropping the wait future on timeout kills the process (kill_on_drop)
        let output = match tokio::time::timeout(timeout.as_std(), child.wait_with_output()).await {
            Ok(result) => {
                result.map_err(|e| ExtractionError::ExtractionFailed(e.to_string()))?
            }
            Err(_) => return Err(ExtractionError::Timeout(timeout)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Self::classify_failure(&stderr));
        }

        let data = fs::read(&output_path)
            .await
            .map_err(|e| ExtractionError::ReadFailed(e.to_string()))?;

        // A bare WAV header means the track decoded to nothing
        if data.len() <= WAV_HEADER_BYTES {
            return Err(ExtractionError::EmptyAudio);
        }

        Ok(AudioClip::new(data, AudioMimeType::Wav))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ffmpeg_args_strip_video_and_request_wav() {
        let input = Path::new("/videos/cat.mp4");
        let output = Path::new("/tmp/out.wav");
        let args = FfmpegExtractor::build_ffmpeg_args(input, output);

        assert_eq!(args[0], "-i");
        assert_eq!(args[1], "/videos/cat.mp4");
        assert!(args.contains(&"-vn".to_string()));
        assert!(args.contains(&"pcm_s16le".to_string()));
        assert_eq!(args.last(), Some(&"/tmp/out.wav".to_string()));
    }

    #[test]
    fn classify_failure_detects_corrupt_input() {
        let stderr = "frame parsing\nmoov atom not found\n";
        let err = FfmpegExtractor::classify_failure(stderr);
        assert!(matches!(err, ExtractionError::LoadFailed(_)));
    }

    #[test]
    fn classify_failure_detects_missing_audio_track() {
        let stderr = "Output file #0 does not contain any stream\n";
        let err = FfmpegExtractor::classify_failure(stderr);
        assert!(matches!(err, ExtractionError::EmptyAudio));
    }

    #[test]
    fn classify_failure_falls_back_to_generic_error() {
        let stderr = "Conversion failed!\n";
        let err = FfmpegExtractor::classify_failure(stderr);
        assert!(matches!(err, ExtractionError::ExtractionFailed(_)));
    }

    #[test]
    fn temp_file_cleans_up_on_drop() {
        let path = {
            let temp = TempAudioFile::new();
            std::fs::write(temp.path(), b"scratch").unwrap();
            assert!(temp.path().exists());
            temp.path().clone()
        };
        assert!(!path.exists());
    }
}
