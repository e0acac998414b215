use std::{collections::HashMap, time::Duration};

use recipe_core::form::{SaveTicket, SaveTimer};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tracing::debug;

/// [`SaveTimer`] backed by tokio tasks. Due tickets arrive on the receiver
/// returned by [`TokioSaveTimer::new`].
///
/// `schedule` spawns, so it must be called from inside a runtime.
#[derive(Debug)]
pub struct TokioSaveTimer {
    due: UnboundedSender<SaveTicket>,
    tasks: HashMap<SaveTicket, JoinHandle<()>>,
}

impl TokioSaveTimer {
    pub fn new() -> (Self, UnboundedReceiver<SaveTicket>) {
        let (due, rx) = mpsc::unbounded_channel();
        let timer = Self {
            due,
            tasks: HashMap::new(),
        };
        (timer, rx)
    }

    /// Scheduled tickets whose task has not finished.
    pub fn pending_count(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl SaveTimer for TokioSaveTimer {
    fn schedule(
        &mut self,
        ticket: SaveTicket,
        delay: Duration,
    ) {
        self.tasks.retain(|_, task| !task.is_finished());

        let due = self.due.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session was torn down.
            let _ = due.send(ticket);
        });
        debug!(%ticket, delay_ms = delay.as_millis() as u64, "save scheduled");
        if let Some(previous) = self.tasks.insert(ticket, task) {
            previous.abort();
        }
    }

    fn cancel(
        &mut self,
        ticket: SaveTicket,
    ) {
        if let Some(task) = self.tasks.remove(&ticket) {
            task.abort();
            debug!(%ticket, "save cancelled");
        }
    }
}

impl Drop for TokioSaveTimer {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
