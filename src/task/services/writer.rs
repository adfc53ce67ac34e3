//! Background writer that persists collection snapshots in order.
//!
//! Snapshots queued while a save is in flight are coalesced, so only the
//! newest one is written: every snapshot is the full list, and the last
//! write wins.

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use crate::task::{domain::Task, ports::TaskStorage};

enum WriterCommand {
    Save(Vec<Task>),
    Flush(oneshot::Sender<()>),
}

/// Handle to the spawned writer task. Dropping it lets the writer drain its
/// queue and exit.
#[derive(Debug)]
pub(super) struct SnapshotWriter {
    sender: mpsc::UnboundedSender<WriterCommand>,
}

impl SnapshotWriter {
    /// Spawns the writer onto the current tokio runtime.
    pub(super) fn spawn<S>(storage: Arc<S>) -> Self
    where
        S: TaskStorage + 'static,
    {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(storage, receiver));
        Self { sender }
    }

    /// Queues a snapshot without waiting for it to be written.
    pub(super) fn enqueue(&self, snapshot: Vec<Task>) {
        if self.sender.send(WriterCommand::Save(snapshot)).is_err() {
            tracing::warn!("snapshot writer has stopped; dropping save");
        }
    }

    /// Waits until every snapshot queued so far has been handled.
    pub(super) async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        if self.sender.send(WriterCommand::Flush(ack)).is_err() {
            tracing::warn!("snapshot writer has stopped; nothing to flush");
            return;
        }
        if done.await.is_err() {
            tracing::warn!("snapshot writer exited before acknowledging flush");
        }
    }
}

async fn run_writer<S>(storage: Arc<S>, mut receiver: mpsc::UnboundedReceiver<WriterCommand>)
where
    S: TaskStorage + 'static,
{
    while let Some(command) = receiver.recv().await {
        let (mut snapshot, mut pending_ack) = match command {
            WriterCommand::Save(snapshot) => (snapshot, None),
            WriterCommand::Flush(ack) => {
                acknowledge(ack);
                continue;
            }
        };
        while pending_ack.is_none() {
            match receiver.try_recv() {
                Ok(WriterCommand::Save(newer)) => snapshot = newer,
                Ok(WriterCommand::Flush(ack)) => pending_ack = Some(ack),
                Err(_) => break,
            }
        }

        if let Err(err) = storage.save(&snapshot).await {
            tracing::warn!(error = %err, task_count = snapshot.len(), "failed to save tasks");
        } else {
            tracing::debug!(task_count = snapshot.len(), "saved tasks");
        }
        if let Some(ack) = pending_ack {
            acknowledge(ack);
        }
    }
}

fn acknowledge(ack: oneshot::Sender<()>) {
    if ack.send(()).is_err() {
        tracing::debug!("flush requester went away before acknowledgement");
    }
}
