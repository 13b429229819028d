//! Recording controller use case

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use crate::domain::preset::{PresetIndexError, PresetRegistry};
use crate::domain::session::{RecordingSession, SessionState};

use super::pipeline::{PipelineResult, TranscriptionPipeline};
use super::ports::{Clipboard, NotificationIcon, Notifier, Recorder, RecorderError, Refiner, Transcriber};

/// Events emitted for the daemon front end (terminal output, tray, ...)
#[derive(Debug, Clone)]
pub enum DaemonEvent {
    /// Recording began with the named preset
    RecordingStarted { preset: String },

    /// Recorder stopped cleanly; the pipeline is now running
    ProcessingStarted,

    /// Recorder could not be started or stopped; session is back to idle
    RecorderFailed(RecorderError),

    /// Pipeline finished; session is back to idle
    PipelineFinished(PipelineResult),
}

/// The recording state machine.
///
/// Owns the session (Idle -> Recording -> Processing -> Idle), drives the
/// recorder adapter, and launches the pipeline on its own task when a
/// recording stops. Commands that are invalid for the current state are
/// dropped silently: `start` while busy, `stop` while idle, and `toggle`
/// while processing all leave the session and the recorder untouched.
pub struct RecordingController<R, T, F, C, N>
where
    R: Recorder,
    T: Transcriber + 'static,
    F: Refiner + 'static,
    C: Clipboard + 'static,
    N: Notifier + 'static,
{
    recorder: R,
    pipeline: Arc<TranscriptionPipeline<T, F, C, N>>,
    notifier: N,
    registry: Arc<PresetRegistry>,
    session: Arc<Mutex<RecordingSession>>,
    audio_file: PathBuf,
    events: mpsc::UnboundedSender<DaemonEvent>,
}

impl<R, T, F, C, N> RecordingController<R, T, F, C, N>
where
    R: Recorder,
    T: Transcriber + 'static,
    F: Refiner + 'static,
    C: Clipboard + 'static,
    N: Notifier + 'static,
{
    /// Create a controller and the receiving end of its event channel
    pub fn new(
        recorder: R,
        pipeline: Arc<TranscriptionPipeline<T, F, C, N>>,
        notifier: N,
        registry: Arc<PresetRegistry>,
        audio_file: PathBuf,
    ) -> (Self, mpsc::UnboundedReceiver<DaemonEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        (
            Self {
                recorder,
                pipeline,
                notifier,
                registry,
                session: Arc::new(Mutex::new(RecordingSession::new())),
                audio_file,
                events,
            },
            receiver,
        )
    }

    /// Get the current session state
    pub async fn state(&self) -> SessionState {
        self.session.lock().await.state()
    }

    /// Switch the selected preset. Has no effect on a cycle already in
    /// flight; the session keeps the snapshot taken when it started.
    pub fn select_preset(&self, index: usize) -> Result<(), PresetIndexError> {
        self.registry.select(index)
    }

    /// Start recording. Effective only while idle; otherwise dropped.
    pub async fn start(&self) {
        let snapshot = self.registry.current();
        let preset_name = snapshot.name.clone();
        {
            let mut session = self.session.lock().await;
            if session.begin_recording(snapshot).is_err() {
                // Already recording or processing: the command is dropped.
                return;
            }
        }

        match self.recorder.start(&self.audio_file).await {
            Ok(()) => {
                let _ = self
                    .notifier
                    .notify("Recording", "Recording started", NotificationIcon::Recording)
                    .await;
                let _ = self.events.send(DaemonEvent::RecordingStarted {
                    preset: preset_name,
                });
            }
            Err(err) => {
                {
                    let mut session = self.session.lock().await;
                    let _ = session.abort_recording();
                }
                let _ = self
                    .notifier
                    .notify(
                        "Error",
                        "Could not start the audio recorder",
                        NotificationIcon::Error,
                    )
                    .await;
                let _ = self.events.send(DaemonEvent::RecorderFailed(err));
            }
        }
    }

    /// Stop recording and launch the pipeline. Effective only while
    /// recording; otherwise dropped.
    pub async fn stop_if_possible(&self) {
        let snapshot = {
            let mut session = self.session.lock().await;
            match session.begin_processing() {
                Ok(snapshot) => snapshot,
                // Idle or already processing: the command is dropped.
                Err(_) => return,
            }
        };

        if let Err(err) = self.recorder.stop().await {
            {
                let mut session = self.session.lock().await;
                let _ = session.finish_processing();
            }
            let _ = self
                .notifier
                .notify(
                    "Error",
                    "Recorder did not stop cleanly",
                    NotificationIcon::Error,
                )
                .await;
            let _ = self.events.send(DaemonEvent::RecorderFailed(err));
            return;
        }

        let _ = self
            .notifier
            .notify(
                "Recording",
                "Recording stopped, processing...",
                NotificationIcon::Processing,
            )
            .await;
        let _ = self.events.send(DaemonEvent::ProcessingStarted);

        let pipeline = Arc::clone(&self.pipeline);
        let session = Arc::clone(&self.session);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = pipeline.run(&snapshot).await;
            {
                let mut session = session.lock().await;
                let _ = session.finish_processing();
            }
            let _ = events.send(DaemonEvent::PipelineFinished(result));
        });
    }

    /// Toggle: start while idle, stop while recording, dropped while
    /// processing (not queued)
    pub async fn toggle(&self) {
        let state = self.session.lock().await.state();
        match state {
            SessionState::Idle => self.start().await,
            SessionState::Recording => self.stop_if_possible().await,
            SessionState::Processing => {}
        }
    }

    /// Kill any live recording before the daemon exits
    pub async fn shutdown(&self) {
        let was_recording = {
            let mut session = self.session.lock().await;
            session.abort_recording().is_ok()
        };
        if was_recording {
            let _ = self.recorder.abort().await;
        }
    }
}
