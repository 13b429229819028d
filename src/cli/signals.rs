//! Signal handling for the daemon

use colored::Colorize;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;

/// Shutdown signal listener.
///
/// SIGINT and SIGTERM both request a clean daemon exit; everything else
/// keeps its default disposition.
pub struct ShutdownSignal {
    receiver: mpsc::Receiver<()>,
}

impl ShutdownSignal {
    /// Register the handlers. Must be called from within the runtime.
    pub fn listen() -> Result<Self, std::io::Error> {
        let (tx, rx) = mpsc::channel(1);

        let tx_int = tx.clone();
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::spawn(async move {
            sigint.recv().await;
            eprintln!("{} Received SIGINT (shutdown)", "↓".cyan());
            let _ = tx_int.send(()).await;
        });

        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::spawn(async move {
            sigterm.recv().await;
            eprintln!("{} Received SIGTERM (shutdown)", "↓".cyan());
            let _ = tx.send(()).await;
        });

        Ok(Self { receiver: rx })
    }

    /// Wait for the next shutdown request
    pub async fn recv(&mut self) -> Option<()> {
        self.receiver.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn listen_registers_the_handlers() {
        assert!(ShutdownSignal::listen().is_ok());
    }
}
