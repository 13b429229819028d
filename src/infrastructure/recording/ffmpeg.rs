//! FFmpeg-based audio recorder adapter

use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tokio::time::timeout;

use crate::application::ports::{Recorder, RecorderError};

/// How long a stopped FFmpeg gets to flush and exit before SIGKILL
const STOP_GRACE_SECS: u64 = 5;

/// FFmpeg recorder capturing the default PulseAudio source.
///
/// Records 16 kHz mono WAV, the input format whisper.cpp expects.
/// `stop` sends SIGINT so FFmpeg finalizes the file header; a process
/// that ignores the signal is killed after [`STOP_GRACE_SECS`].
pub struct FfmpegRecorder {
    process: Arc<Mutex<Option<Child>>>,
}

impl FfmpegRecorder {
    pub fn new() -> Self {
        Self {
            process: Arc::new(Mutex::new(None)),
        }
    }

    /// Build FFmpeg args for capturing speech audio
    fn build_args(output: &Path) -> Vec<String> {
        vec![
            "-f".to_string(),
            "pulse".to_string(),
            "-i".to_string(),
            "default".to_string(),
            "-ar".to_string(),
            "16000".to_string(), // 16kHz sample rate
            "-ac".to_string(),
            "1".to_string(), // Mono
            "-y".to_string(),
            "-loglevel".to_string(),
            "quiet".to_string(),
            output.to_string_lossy().to_string(),
        ]
    }

    async fn spawn_ffmpeg(args: Vec<String>) -> Result<Child, RecorderError> {
        Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RecorderError::FfmpegNotFound
                } else {
                    RecorderError::StartFailed(e.to_string())
                }
            })
    }

    fn send_signal(child: &Child, sig: Signal) -> Result<(), RecorderError> {
        if let Some(id) = child.id() {
            signal::kill(Pid::from_raw(id as i32), sig)
                .map_err(|e| RecorderError::StopFailed(format!("Signal failed: {}", e)))?;
        }
        Ok(())
    }
}

impl Default for FfmpegRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Recorder for FfmpegRecorder {
    async fn start(&self, output: &Path) -> Result<(), RecorderError> {
        let mut process_guard = self.process.lock().await;
        if process_guard.is_some() {
            return Err(RecorderError::AlreadyRecording);
        }

        let args = Self::build_args(output);
        let child = Self::spawn_ffmpeg(args).await?;
        *process_guard = Some(child);

        Ok(())
    }

    async fn stop(&self) -> Result<(), RecorderError> {
        let mut process_guard = self.process.lock().await;
        let mut child = process_guard.take().ok_or(RecorderError::NotRecording)?;

        // SIGINT lets FFmpeg write the WAV header before exiting
        Self::send_signal(&child, Signal::SIGINT)?;

        match timeout(Duration::from_secs(STOP_GRACE_SECS), child.wait()).await {
            Ok(Ok(_status)) => Ok(()),
            Ok(Err(e)) => Err(RecorderError::StopFailed(e.to_string())),
            Err(_elapsed) => {
                let _ = child.kill().await;
                Err(RecorderError::StopTimeout(STOP_GRACE_SECS))
            }
        }
    }

    async fn abort(&self) -> Result<(), RecorderError> {
        let mut process_guard = self.process.lock().await;
        if let Some(mut child) = process_guard.take() {
            let _ = child.kill().await;
        }
        Ok(())
    }
}
