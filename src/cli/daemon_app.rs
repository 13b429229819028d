//! Daemon app runner

use std::process::ExitCode;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::SettingsStore;
use crate::application::{DaemonEvent, RecordingController, TranscriptionPipeline};
use crate::domain::preset::PresetRegistry;
use crate::infrastructure::{
    CommandClipboard, FfmpegRecorder, JsonSettingsStore, NotifySendNotifier, OllamaRefiner,
    WhisperCliTranscriber,
};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::pid_file::{PidFile, PidFileError};
use super::presenter::Presenter;
use super::signals::ShutdownSignal;
use super::socket::{ControlCommand, ControlSocketServer};

/// Command channel depth. Senders fire and forget, so the buffer only
/// has to absorb short bursts of hotkey presses.
const COMMAND_BUFFER: usize = 16;

type DaemonController = RecordingController<
    FfmpegRecorder,
    WhisperCliTranscriber,
    OllamaRefiner,
    CommandClipboard,
    NotifySendNotifier,
>;

/// Run daemon mode
pub async fn run_daemon(store: &JsonSettingsStore) -> ExitCode {
    let presenter = Presenter::new();

    // Single instance guard
    let pid_file = PidFile::new();
    if let Err(e) = pid_file.acquire() {
        match e {
            PidFileError::AlreadyRunning(pid) => {
                presenter.error(&format!("Another daemon is already running (PID: {})", pid));
            }
            _ => presenter.error(&e.to_string()),
        }
        return ExitCode::from(EXIT_ERROR);
    }

    let settings = match store.load().await {
        Ok(settings) => settings,
        Err(e) => {
            presenter.error(&e.to_string());
            presenter.info("Create a settings file with: voxd config init");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let registry = Arc::new(PresetRegistry::new(settings.presets.clone()));

    let pipeline = Arc::new(TranscriptionPipeline::new(
        WhisperCliTranscriber::new(settings.whisper_path.clone()),
        OllamaRefiner::new(settings.ollama_url.clone(), settings.ollama_port),
        CommandClipboard::new(),
        NotifySendNotifier::new(),
        settings.audio_file.clone(),
        settings.output_file.clone(),
    ));

    let (controller, events) = RecordingController::new(
        FfmpegRecorder::new(),
        pipeline,
        NotifySendNotifier::new(),
        Arc::clone(&registry),
        settings.audio_file.clone(),
    );

    let mut shutdown = match ShutdownSignal::listen() {
        Ok(s) => s,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let mut server = ControlSocketServer::new(settings.socket_path.clone());
    if let Err(e) = server.bind() {
        presenter.error(&format!(
            "Failed to bind socket {}: {}",
            settings.socket_path.display(),
            e
        ));
        return ExitCode::from(EXIT_ERROR);
    }

    let (command_tx, commands) = mpsc::channel(COMMAND_BUFFER);
    tokio::spawn(async move {
        let _ = server.run(command_tx).await;
    });

    presenter.daemon_status("Started, waiting for commands...");
    presenter.info(&format!(
        "PID: {} | Socket: {} | Preset: {}",
        std::process::id(),
        settings.socket_path.display(),
        registry.current().name
    ));

    daemon_loop(&controller, commands, events, &mut shutdown, &presenter).await;

    // Kill a recording left running, then clear socket and PID file.
    // The socket server task still owns the listener, so its Drop never
    // runs here.
    controller.shutdown().await;
    let _ = std::fs::remove_file(&settings.socket_path);
    let _ = pid_file.release();

    ExitCode::from(EXIT_SUCCESS)
}

/// Serialize socket commands, controller events and shutdown requests
/// through one dispatch point
async fn daemon_loop(
    controller: &DaemonController,
    mut commands: mpsc::Receiver<ControlCommand>,
    mut events: mpsc::UnboundedReceiver<DaemonEvent>,
    shutdown: &mut ShutdownSignal,
    presenter: &Presenter,
) {
    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(command) => {
                    presenter.received(command.as_str());
                    match command {
                        ControlCommand::Start => controller.start().await,
                        ControlCommand::Stop => controller.stop_if_possible().await,
                        ControlCommand::Toggle => controller.toggle().await,
                    }
                }
                None => break,
            },
            event = events.recv() => match event {
                Some(event) => present_event(presenter, event),
                None => break,
            },
            _ = shutdown.recv() => {
                presenter.daemon_status("Shutting down...");
                break;
            }
        }
    }
}

fn present_event(presenter: &Presenter, event: DaemonEvent) {
    match event {
        DaemonEvent::RecordingStarted { preset } => {
            presenter.daemon_status(&format!("Recording ({})...", preset));
        }
        DaemonEvent::ProcessingStarted => {
            presenter.daemon_status("Processing...");
        }
        DaemonEvent::RecorderFailed(err) => {
            presenter.error(&err.to_string());
            presenter.daemon_status("Idle (error)");
        }
        DaemonEvent::PipelineFinished(result) => match result.error {
            None => {
                presenter.output(&result.refined_text);
                presenter.success("Copied to clipboard");
                presenter.daemon_status("Idle");
            }
            Some(err) => {
                presenter.error(&err.to_string());
                presenter.daemon_status("Idle (error)");
            }
        },
    }
}
