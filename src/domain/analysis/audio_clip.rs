//! Audio clip value object

use std::fmt;

/// Supported audio MIME types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioMimeType {
    Wav,
    Mp3,
    Ogg,
    Flac,
    Webm,
    M4a,
}

impl AudioMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::Ogg => "audio/ogg",
            Self::Flac => "audio/flac",
            Self::Webm => "audio/webm",
            Self::M4a => "audio/mp4",
        }
    }

    /// Get the file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Ogg => "ogg",
            Self::Flac => "flac",
            Self::Webm => "webm",
            Self::M4a => "m4a",
        }
    }

    /// Look up the MIME type for a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "ogg" | "oga" => Some(Self::Ogg),
            "flac" => Some(Self::Flac),
            "webm" => Some(Self::Webm),
            "m4a" | "aac" => Some(Self::M4a),
            _ => None,
        }
    }
}

impl fmt::Display for AudioMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for AudioMimeType {
    fn default() -> Self {
        Self::Wav
    }
}

/// Value object holding a finished piece of audio ready for analysis.
/// Carries the raw encoded bytes and their MIME type.
#[derive(Debug, Clone)]
pub struct AudioClip {
    data: Vec<u8>,
    mime_type: AudioMimeType,
}

impl AudioClip {
    /// Create a clip from raw bytes
    pub fn new(data: Vec<u8>, mime_type: AudioMimeType) -> Self {
        Self { data, mime_type }
    }

    /// Get the raw audio bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw audio bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the MIME type
    pub fn mime_type(&self) -> AudioMimeType {
        self.mime_type
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Whether the clip carries no audio bytes at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }

    /// Encode the audio bytes as base64
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_type_as_str() {
        assert_eq!(AudioMimeType::Wav.as_str(), "audio/wav");
        assert_eq!(AudioMimeType::Mp3.as_str(), "audio/mpeg");
        assert_eq!(AudioMimeType::Webm.as_str(), "audio/webm");
    }

    #[test]
    fn mime_type_extension() {
        assert_eq!(AudioMimeType::Wav.extension(), "wav");
        assert_eq!(AudioMimeType::Flac.extension(), "flac");
        assert_eq!(AudioMimeType::M4a.extension(), "m4a");
    }

    #[test]
    fn mime_type_from_extension() {
        assert_eq!(AudioMimeType::from_extension("wav"), Some(AudioMimeType::Wav));
        assert_eq!(AudioMimeType::from_extension("WAV"), Some(AudioMimeType::Wav));
        assert_eq!(AudioMimeType::from_extension("oga"), Some(AudioMimeType::Ogg));
        assert_eq!(AudioMimeType::from_extension("mkv"), None);
        assert_eq!(AudioMimeType::from_extension(""), None);
    }

    #[test]
    fn default_mime_type_is_wav() {
        assert_eq!(AudioMimeType::default(), AudioMimeType::Wav);
    }

    #[test]
    fn clip_size() {
        let clip = AudioClip::new(vec![0u8; 1024], AudioMimeType::Wav);
        assert_eq!(clip.size_bytes(), 1024);
        assert!(!clip.is_empty());
    }

    #[test]
    fn empty_clip() {
        let clip = AudioClip::new(Vec::new(), AudioMimeType::Wav);
        assert!(clip.is_empty());
        assert_eq!(clip.size_bytes(), 0);
    }

    #[test]
    fn human_readable_size_bytes() {
        let clip = AudioClip::new(vec![0u8; 500], AudioMimeType::Wav);
        assert_eq!(clip.human_readable_size(), "500 B");
    }

    #[test]
    fn human_readable_size_kb() {
        let clip = AudioClip::new(vec![0u8; 2048], AudioMimeType::Wav);
        assert_eq!(clip.human_readable_size(), "2.0 KB");
    }

    #[test]
    fn human_readable_size_mb() {
        let clip = AudioClip::new(vec![0u8; 2 * 1024 * 1024], AudioMimeType::Wav);
        assert_eq!(clip.human_readable_size(), "2.0 MB");
    }

    #[test]
    fn to_base64_roundtrip() {
        let clip = AudioClip::new(vec![1, 2, 3, 4], AudioMimeType::Ogg);
        use base64::Engine;
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(clip.to_base64())
            .unwrap();
        assert_eq!(decoded, vec![1, 2, 3, 4]);
    }
}
