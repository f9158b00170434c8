//! Video audio extraction infrastructure module

mod ffmpeg;

pub use ffmpeg::FfmpegExtractor;
