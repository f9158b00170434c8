//! Audio provenance labels and media kind detection

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::domain::error::InvalidSourceError;

/// Where a piece of analyzed audio came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioSource {
    LiveRecording,
    AudioUpload,
    VideoAnalysis,
}

impl AudioSource {
    /// Get the provenance label shown alongside results
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LiveRecording => "Live Recording",
            Self::AudioUpload => "Audio upload",
            Self::VideoAnalysis => "Video analysis",
        }
    }

    /// Get the short string identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LiveRecording => "live",
            Self::AudioUpload => "upload",
            Self::VideoAnalysis => "video",
        }
    }
}

impl FromStr for AudioSource {
    type Err = InvalidSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "live" => Ok(Self::LiveRecording),
            "upload" => Ok(Self::AudioUpload),
            "video" => Ok(Self::VideoAnalysis),
            _ => Err(InvalidSourceError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for AudioSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Video container extensions routed through audio extraction
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mkv", "mov", "avi"];

/// Audio container extensions ingested directly
const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "ogg", "oga", "flac", "m4a", "aac"];

/// Kind of media file handed to the analyzer pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    /// Judge the media kind from a file extension.
    /// Returns None for extensions the pipeline does not accept.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Video)
        } else if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Audio)
        } else {
            None
        }
    }

    /// The provenance label uploads of this kind carry
    pub const fn source(&self) -> AudioSource {
        match self {
            Self::Audio => AudioSource::AudioUpload,
            Self::Video => AudioSource::VideoAnalysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn source_labels() {
        assert_eq!(AudioSource::LiveRecording.label(), "Live Recording");
        assert_eq!(AudioSource::AudioUpload.label(), "Audio upload");
        assert_eq!(AudioSource::VideoAnalysis.label(), "Video analysis");
    }

    #[test]
    fn parse_sources() {
        assert_eq!("live".parse::<AudioSource>().unwrap(), AudioSource::LiveRecording);
        assert_eq!("upload".parse::<AudioSource>().unwrap(), AudioSource::AudioUpload);
        assert_eq!("VIDEO".parse::<AudioSource>().unwrap(), AudioSource::VideoAnalysis);
        assert!("microphone".parse::<AudioSource>().is_err());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(AudioSource::LiveRecording.to_string(), "Live Recording");
    }

    #[test]
    fn media_kind_audio_extensions() {
        assert_eq!(
            MediaKind::from_path(&PathBuf::from("meow.wav")),
            Some(MediaKind::Audio)
        );
        assert_eq!(
            MediaKind::from_path(&PathBuf::from("purr.MP3")),
            Some(MediaKind::Audio)
        );
    }

    #[test]
    fn media_kind_video_extensions() {
        assert_eq!(
            MediaKind::from_path(&PathBuf::from("cat.mp4")),
            Some(MediaKind::Video)
        );
        assert_eq!(
            MediaKind::from_path(&PathBuf::from("clip.webm")),
            Some(MediaKind::Video)
        );
    }

    #[test]
    fn media_kind_rejects_unknown() {
        assert_eq!(MediaKind::from_path(&PathBuf::from("notes.txt")), None);
        assert_eq!(MediaKind::from_path(&PathBuf::from("noext")), None);
    }

    #[test]
    fn media_kind_source_labels() {
        assert_eq!(MediaKind::Audio.source(), AudioSource::AudioUpload);
        assert_eq!(MediaKind::Video.source(), AudioSource::VideoAnalysis);
    }
}
