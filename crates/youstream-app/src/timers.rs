//! Cancellable delayed messages
//!
//! Each [`TimerKind`] has at most one pending timer. Scheduling a kind that is
//! already pending aborts the old task first, which is what gives the username
//! check its debounce.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use youstream_core::prelude::*;

use crate::handler::TimerKind;
use crate::message::Message;

#[derive(Debug, Default)]
pub struct TimerRegistry {
    pending: HashMap<TimerKind, JoinHandle<()>>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `message` on `msg_tx` after `delay`, replacing any pending timer
    /// of the same kind
    pub fn schedule(
        &mut self,
        kind: TimerKind,
        delay: Duration,
        message: Message,
        msg_tx: mpsc::Sender<Message>,
    ) {
        self.cancel(kind);
        trace!("Scheduling {:?} in {:?}", kind, delay);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if msg_tx.send(message).await.is_err() {
                debug!("Timer {:?} fired after the channel closed", kind);
            }
        });
        self.pending.insert(kind, handle);
    }

    /// Abort the pending timer of `kind`, if any
    pub fn cancel(&mut self, kind: TimerKind) {
        if let Some(handle) = self.pending.remove(&kind) {
            if !handle.is_finished() {
                trace!("Cancelling {:?}", kind);
            }
            handle.abort();
        }
    }

    /// Whether a timer of `kind` is still waiting to fire
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending
            .get(&kind)
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }
}

impl Drop for TimerRegistry {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
