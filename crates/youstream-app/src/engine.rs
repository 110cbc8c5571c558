//! Engine - orchestration state shared by the TUI runner and tests
//!
//! The Engine owns the TEA state, the message channel, the backend client,
//! pending timers, and the shutdown signal for in-flight service calls.

use tokio::sync::{mpsc, watch};
use youstream_api::Backend;
use youstream_core::prelude::*;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::state::AppState;
use crate::timers::TimerRegistry;

/// Capacity of the message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for the YouStream client.
pub struct Engine<B: Backend> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the message channel.
    /// Clone this to give to input sources and background tasks.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Auth, Catalog and Video services
    backend: B,

    timers: TimerRegistry,

    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl<B: Backend> Engine<B> {
    pub fn new(settings: Settings, backend: B) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            state: AppState::with_settings(settings),
            msg_tx,
            msg_rx,
            backend,
            timers: TimerRegistry::new(),
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Process a single message through the TEA update loop.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.backend,
            &mut self.timers,
            &self.shutdown_rx,
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from a background task or timer and process it.
    ///
    /// Returns `false` if the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Cancel timers and abandon in-flight service calls.
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        self.timers.cancel_all();
        let _ = self.shutdown_tx.send(true);
    }
}
