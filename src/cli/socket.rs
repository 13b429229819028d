//! Unix domain socket control channel

use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::mpsc;

/// Longest payload a client may send; anything past this is ignored
const MAX_COMMAND_BYTES: usize = 1024;

/// Commands understood on the control socket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Start,
    Stop,
    Toggle,
}

impl ControlCommand {
    /// Parse a raw socket payload. Unknown or malformed input is None;
    /// the protocol has no error replies.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "start" => Some(Self::Start),
            "stop" => Some(Self::Stop),
            "toggle" => Some(Self::Toggle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Toggle => "toggle",
        }
    }
}

/// Control socket server feeding the daemon loop.
///
/// Connections are accepted and read one at a time, so commands reach
/// the daemon in the order clients connected. The protocol is fire and
/// forget: one short payload per connection, no reply. A client that
/// sends garbage gets its connection closed and nothing else happens.
pub struct ControlSocketServer {
    path: PathBuf,
    listener: Option<UnixListener>,
}

impl ControlSocketServer {
    /// Create a new socket server
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            listener: None,
        }
    }

    /// Bind the listener, replacing a stale socket file
    pub fn bind(&mut self) -> io::Result<()> {
        self.remove_socket_file()?;

        let listener = UnixListener::bind(&self.path)?;

        // Any local session process (hotkey daemons, scripts) may send
        // commands
        std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o666))?;

        self.listener = Some(listener);
        Ok(())
    }

    /// Get the socket path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Accept connections and forward parsed commands to the channel.
    ///
    /// Returns when the receiving side of the channel is dropped.
    pub async fn run(&self, tx: mpsc::Sender<ControlCommand>) -> io::Result<()> {
        let listener = self
            .listener
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "Socket not bound"))?;

        loop {
            match listener.accept().await {
                Ok((stream, _addr)) => {
                    if let Some(command) = read_command(stream).await {
                        if tx.send(command).await.is_err() {
                            // Daemon loop is gone
                            return Ok(());
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Socket accept error: {}", e);
                }
            }
        }
    }

    fn remove_socket_file(&self) -> io::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Remove the socket file
    pub fn cleanup(&self) {
        let _ = self.remove_socket_file();
    }
}

impl Drop for ControlSocketServer {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Read one payload from a client and parse it. Any read failure or
/// unparseable payload is dropped silently.
async fn read_command(mut stream: UnixStream) -> Option<ControlCommand> {
    let mut buf = [0u8; MAX_COMMAND_BYTES];
    let n = stream.read(&mut buf).await.ok()?;
    let payload = std::str::from_utf8(&buf[..n]).ok()?;
    ControlCommand::parse(payload)
}

/// Control socket client used by `voxd send`
pub struct ControlSocketClient {
    path: PathBuf,
}

impl ControlSocketClient {
    /// Create a new socket client
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the socket path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if a daemon appears to be listening (socket file exists)
    pub fn is_daemon_running(&self) -> bool {
        self.path.exists()
    }

    /// Send a command; no reply is expected
    pub async fn send(&self, command: ControlCommand) -> io::Result<()> {
        let mut stream = UnixStream::connect(&self.path).await?;
        stream.write_all(command.as_str().as_bytes()).await?;
        stream.shutdown().await?;
        Ok(())
    }
}
