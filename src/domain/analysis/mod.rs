//! Analysis domain module

mod audio_clip;
mod emotion;
mod result;
mod source;

pub use audio_clip::{AudioClip, AudioMimeType};
pub use emotion::{Confidence, Emotion, ALL_EMOTIONS};
pub use result::{AnalysisResult, RECOMMENDATIONS};
pub use source::{AudioSource, MediaKind};
