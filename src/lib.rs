//! voxd - push-to-talk voice typing for the Linux desktop
//!
//! Records speech on command, transcribes it with a local whisper.cpp
//! binary, cleans the transcript up through an Ollama model and puts
//! the result on the clipboard. A Unix domain socket accepts
//! start/stop/toggle commands from hotkey daemons and scripts.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Session state machine, presets, settings, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (FFmpeg, whisper.cpp, Ollama, clipboard, notifications)
//! - **CLI**: Command-line interface, control socket, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
