//! Clipboard adapter shelling out to wl-copy or xclip

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{Clipboard, ClipboardError};

/// Clipboard tool matching the current session type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tool {
    WlCopy,
    Xclip,
}

impl Tool {
    fn from_session(session: Option<&str>) -> Self {
        match session {
            Some(s) if s.eq_ignore_ascii_case("wayland") => Tool::WlCopy,
            _ => Tool::Xclip,
        }
    }

    fn detect() -> Self {
        Self::from_session(std::env::var("XDG_SESSION_TYPE").ok().as_deref())
    }

    fn command(&self) -> &'static str {
        match self {
            Tool::WlCopy => "wl-copy",
            Tool::Xclip => "xclip",
        }
    }

    fn args(&self) -> &'static [&'static str] {
        match self {
            Tool::WlCopy => &[],
            Tool::Xclip => &["-selection", "clipboard"],
        }
    }
}

/// Clipboard adapter piping text into the session's clipboard tool.
///
/// `XDG_SESSION_TYPE=wayland` selects wl-copy; anything else falls back
/// to `xclip -selection clipboard`.
pub struct CommandClipboard {
    tool: Tool,
}

impl CommandClipboard {
    pub fn new() -> Self {
        Self {
            tool: Tool::detect(),
        }
    }
}

impl Default for CommandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(self.tool.command())
            .args(self.tool.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ClipboardError::ToolNotFound(self.tool.command().to_string())
                } else {
                    ClipboardError::CopyFailed(e.to_string())
                }
            })?;

        // Write text to stdin, then close it so the tool sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::CopyFailed(format!(
                "{} exited with status: {}",
                self.tool.command(),
                status
            )));
        }

        Ok(())
    }
}
