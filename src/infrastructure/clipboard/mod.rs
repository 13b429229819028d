//! Clipboard infrastructure module
//!
//! Publishes text through the session's clipboard tool (wl-copy on
//! Wayland, xclip on X11).

mod command;

pub use command::CommandClipboard;
