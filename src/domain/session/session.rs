//! Recording session state machine

use std::fmt;
use thiserror::Error;

use crate::domain::preset::Preset;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Recording,
    Processing,
}

impl SessionState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Processing => "processing",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: SessionState,
    pub action: String,
}

/// Recording session entity.
/// Tracks the state of one record-transcribe cycle and carries the preset
/// snapshot captured when recording started, so that preset switches made
/// while a cycle is in flight never affect it.
///
/// State machine:
///   IDLE -> RECORDING (begin_recording, stores the snapshot)
///   RECORDING -> PROCESSING (begin_processing, takes the snapshot)
///   RECORDING -> IDLE (abort_recording, recorder never started or died)
///   PROCESSING -> IDLE (finish_processing)
#[derive(Debug, Default)]
pub struct RecordingSession {
    state: SessionState,
    snapshot: Option<Preset>,
}

impl RecordingSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            snapshot: None,
        }
    }

    /// Get the current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if currently idle
    pub fn is_idle(&self) -> bool {
        self.state == SessionState::Idle
    }

    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        self.state == SessionState::Recording
    }

    /// Check if currently processing
    pub fn is_processing(&self) -> bool {
        self.state == SessionState::Processing
    }

    /// Transition from IDLE to RECORDING, capturing the preset snapshot
    pub fn begin_recording(&mut self, snapshot: Preset) -> Result<(), InvalidStateTransition> {
        if self.state != SessionState::Idle {
            return Err(self.rejected("start recording"));
        }
        self.snapshot = Some(snapshot);
        self.state = SessionState::Recording;
        Ok(())
    }

    /// Transition from RECORDING to PROCESSING, yielding the snapshot
    /// captured when recording started
    pub fn begin_processing(&mut self) -> Result<Preset, InvalidStateTransition> {
        if self.state != SessionState::Recording {
            return Err(self.rejected("stop recording"));
        }
        let snapshot = self
            .snapshot
            .take()
            .ok_or_else(|| self.rejected("stop recording"))?;
        self.state = SessionState::Processing;
        Ok(snapshot)
    }

    /// Transition from RECORDING to IDLE, discarding the snapshot
    pub fn abort_recording(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != SessionState::Recording {
            return Err(self.rejected("abort recording"));
        }
        self.snapshot = None;
        self.state = SessionState::Idle;
        Ok(())
    }

    /// Transition from PROCESSING to IDLE
    pub fn finish_processing(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != SessionState::Processing {
            return Err(self.rejected("finish processing"));
        }
        self.state = SessionState::Idle;
        Ok(())
    }

    fn rejected(&self, action: &str) -> InvalidStateTransition {
        InvalidStateTransition {
            current_state: self.state,
            action: action.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(name: &str) -> Preset {
        Preset {
            name: name.to_string(),
            transcription_model: "/models/ggml-base.bin".to_string(),
            language: "en".to_string(),
            refinement_model: "llama3.2".to_string(),
            refinement_prompt: "Clean up: ".to_string(),
        }
    }

    #[test]
    fn new_session_is_idle() {
        let session = RecordingSession::new();
        assert!(session.is_idle());
        assert!(!session.is_recording());
        assert!(!session.is_processing());
    }

    #[test]
    fn begin_recording_from_idle() {
        let mut session = RecordingSession::new();
        assert!(session.begin_recording(preset("a")).is_ok());
        assert!(session.is_recording());
    }

    #[test]
    fn begin_recording_while_recording_fails() {
        let mut session = RecordingSession::new();
        session.begin_recording(preset("a")).unwrap();

        let err = session.begin_recording(preset("b")).unwrap_err();
        assert_eq!(err.current_state, SessionState::Recording);
        assert!(err.action.contains("start recording"));
    }

    #[test]
    fn begin_recording_while_processing_fails() {
        let mut session = RecordingSession::new();
        session.begin_recording(preset("a")).unwrap();
        session.begin_processing().unwrap();

        let err = session.begin_recording(preset("b")).unwrap_err();
        assert_eq!(err.current_state, SessionState::Processing);
    }

    #[test]
    fn begin_processing_yields_the_snapshot() {
        let mut session = RecordingSession::new();
        session.begin_recording(preset("a")).unwrap();

        let snapshot = session.begin_processing().unwrap();
        assert_eq!(snapshot.name, "a");
        assert!(session.is_processing());
    }

    #[test]
    fn begin_processing_from_idle_fails() {
        let mut session = RecordingSession::new();

        let err = session.begin_processing().unwrap_err();
        assert_eq!(err.current_state, SessionState::Idle);
    }

    #[test]
    fn rejected_begin_recording_keeps_original_snapshot() {
        let mut session = RecordingSession::new();
        session.begin_recording(preset("a")).unwrap();
        let _ = session.begin_recording(preset("b"));

        let snapshot = session.begin_processing().unwrap();
        assert_eq!(snapshot.name, "a");
    }

    #[test]
    fn abort_recording_from_recording() {
        let mut session = RecordingSession::new();
        session.begin_recording(preset("a")).unwrap();

        assert!(session.abort_recording().is_ok());
        assert!(session.is_idle());
    }

    #[test]
    fn abort_recording_from_idle_fails() {
        let mut session = RecordingSession::new();

        let err = session.abort_recording().unwrap_err();
        assert_eq!(err.current_state, SessionState::Idle);
    }

    #[test]
    fn abort_discards_the_snapshot() {
        let mut session = RecordingSession::new();
        session.begin_recording(preset("a")).unwrap();
        session.abort_recording().unwrap();
        session.begin_recording(preset("b")).unwrap();

        let snapshot = session.begin_processing().unwrap();
        assert_eq!(snapshot.name, "b");
    }

    #[test]
    fn finish_processing_from_processing() {
        let mut session = RecordingSession::new();
        session.begin_recording(preset("a")).unwrap();
        session.begin_processing().unwrap();

        assert!(session.finish_processing().is_ok());
        assert!(session.is_idle());
    }

    #[test]
    fn finish_processing_from_recording_fails() {
        let mut session = RecordingSession::new();
        session.begin_recording(preset("a")).unwrap();

        let err = session.finish_processing().unwrap_err();
        assert_eq!(err.current_state, SessionState::Recording);
    }

    #[test]
    fn full_cycle() {
        let mut session = RecordingSession::new();
        assert!(session.is_idle());

        session.begin_recording(preset("a")).unwrap();
        assert!(session.is_recording());

        session.begin_processing().unwrap();
        assert!(session.is_processing());

        session.finish_processing().unwrap();
        assert!(session.is_idle());

        // Can start another cycle with a fresh snapshot
        session.begin_recording(preset("b")).unwrap();
        assert!(session.is_recording());
    }

    #[test]
    fn state_display() {
        assert_eq!(SessionState::Idle.to_string(), "idle");
        assert_eq!(SessionState::Recording.to_string(), "recording");
        assert_eq!(SessionState::Processing.to_string(), "processing");
    }

    #[test]
    fn error_display() {
        let err = InvalidStateTransition {
            current_state: SessionState::Processing,
            action: "start recording".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("start recording"));
        assert!(msg.contains("processing"));
    }
}
