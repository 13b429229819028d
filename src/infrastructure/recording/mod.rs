//! Recording infrastructure module
//!
//! Captures microphone audio with an FFmpeg subprocess.

mod ffmpeg;

pub use ffmpeg::FfmpegRecorder;
