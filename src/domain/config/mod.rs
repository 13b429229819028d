//! Configuration domain module

mod settings;

pub use settings::{Settings, DEFAULT_SOCKET_PATH};
