//! OS termination signals mapped onto `Message::Quit`

use tokio::sync::mpsc;
use youstream_core::prelude::*;

use crate::message::Message;

/// Listen for SIGINT/SIGTERM (Ctrl+C on Windows) and ask the app to quit.
///
/// In raw mode Ctrl+C arrives as a key press instead, so this mostly
/// matters for `kill` and closing the hosting terminal.
pub fn spawn_signal_handler(msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(()) => {
                info!("Termination signal received, quitting");
                let _ = msg_tx.send(Message::Quit).await;
            }
            Err(e) => error!("Signal handler unavailable: {}", e),
        }
    });
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("Failed to install SIGINT handler: {e}")))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("Failed to install SIGTERM handler: {e}")))?;

    tokio::select! {
        _ = sigint.recv() => debug!("SIGINT"),
        _ = sigterm.recv() => debug!("SIGTERM"),
    }
    Ok(())
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<()> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {e}")))
}
