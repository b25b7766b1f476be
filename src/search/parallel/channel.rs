//! Queues and messages connecting the coordinator with its workers.

use crate::search::state::SearchNode;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Message sent from workers to the coordinator.
#[derive(Debug, Clone)]
pub enum WorkerMessage<S> {
    /// Worker took one node off the backlog.
    Claimed { worker_id: usize },
    /// Worker finished expanding its node. Successors are unclassified.
    Expanded {
        worker_id: usize,
        successors: Vec<SearchNode<S>>,
    },
    /// Worker caught a panic while expanding its node.
    Failed { worker_id: usize, message: String },
}

/// State shared by every worker without going through a channel.
#[derive(Debug, Default)]
pub struct SharedControl {
    /// Flag to signal all workers to stop.
    should_stop: AtomicBool,
}

impl SharedControl {
    /// Check if workers should stop taking work.
    pub fn should_stop(&self) -> bool {
        self.should_stop.load(Ordering::SeqCst)
    }

    /// Signal all workers to stop.
    pub fn signal_stop(&self) {
        self.should_stop.store(true, Ordering::SeqCst);
    }
}

/// Channel endpoints for a worker.
pub struct WorkerChannels<S> {
    /// Receive nodes to expand.
    pub backlog: Receiver<SearchNode<S>>,
    /// Send messages to coordinator.
    pub to_coordinator: Sender<WorkerMessage<S>>,
    /// Shared stop flag.
    pub shared: Arc<SharedControl>,
    /// Bounded wait on the backlog between stop-flag checks.
    pub dequeue_timeout: Duration,
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels<S> {
    /// Send nodes to workers. Dropping it disconnects every worker.
    pub backlog: Option<Sender<SearchNode<S>>>,
    /// Receive messages from workers.
    pub from_workers: Receiver<WorkerMessage<S>>,
    /// Shared state.
    pub shared: Arc<SharedControl>,
    backlog_rx: Receiver<SearchNode<S>>,
    worker_tx: Sender<WorkerMessage<S>>,
    dequeue_timeout: Duration,
}

impl<S> CoordinatorChannels<S> {
    /// Endpoints for a newly spawned worker.
    pub fn worker_channels(&self) -> WorkerChannels<S> {
        WorkerChannels {
            backlog: self.backlog_rx.clone(),
            to_coordinator: self.worker_tx.clone(),
            shared: Arc::clone(&self.shared),
            dequeue_timeout: self.dequeue_timeout,
        }
    }

    /// Stop workers and disconnect the backlog.
    pub fn close(&mut self) {
        self.shared.signal_stop();
        self.backlog = None;
    }
}

/// Create the backlog and results queues.
///
/// Both are unbounded: the coordinator never blocks when feeding the backlog
/// and workers never block when reporting.
pub fn create_channels<S>(dequeue_timeout: Duration) -> CoordinatorChannels<S> {
    let (backlog_tx, backlog_rx) = unbounded();
    let (worker_tx, results_rx) = unbounded();

    CoordinatorChannels {
        backlog: Some(backlog_tx),
        from_workers: results_rx,
        shared: Arc::new(SharedControl::default()),
        backlog_rx,
        worker_tx,
        dequeue_timeout,
    }
}
