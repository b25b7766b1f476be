//! Parallel search coordinator that manages worker threads.
//!
//! The coordinator owns every piece of mutable search state: footprints,
//! solutions, the number of queued nodes and the number of workers currently
//! expanding a node. Workers only expand; they report through the results
//! channel and the coordinator classifies what they produce. The search ends
//! once no node is queued and no worker is mid-expansion.

use crate::search::config::Algorithm;
use crate::search::error::SearchError;
use crate::search::parallel::channel::{
    CoordinatorChannels, WorkerChannels, WorkerMessage, create_channels,
};
use crate::search::parallel::config::ParallelConfig;
use crate::search::result::{SearchResult, SearchStatistics};
use crate::search::state::{Backtrackable, SearchNode};
use crossbeam_channel::RecvTimeoutError;
use std::any::Any;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, trace, warn};

/// Search everything reachable from `states` using a pool of worker threads.
///
/// Workers are spawned on demand while queued nodes outnumber idle workers,
/// never more than `config.max_workers`. Without a solution ceiling the
/// result is the same set the iterative strategy finds.
pub fn parallel_search<S, I>(
    states: I,
    config: &ParallelConfig,
) -> Result<SearchResult<S>, SearchError>
where
    S: Backtrackable,
    I: IntoIterator<Item = S>,
{
    config.validate()?;

    let start_time = Instant::now();
    let mut coordinator = Coordinator::new(config);
    coordinator.seed(states);

    debug!(
        initial = coordinator.pending,
        max_workers = config.max_workers,
        max_solutions = ?config.max_solutions,
        "starting parallel search"
    );

    let outcome = coordinator.run();
    coordinator.shutdown();
    outcome?;

    let mut statistics = coordinator.statistics;
    statistics.footprints = coordinator.footprints.len();
    statistics.elapsed_time = start_time.elapsed();
    debug!(
        solutions = coordinator.solutions.len(),
        expansions = statistics.expansions,
        workers = statistics.workers_spawned,
        "parallel search finished"
    );

    Ok(SearchResult::new(coordinator.solutions, statistics))
}

/// Whether the coordinator keeps going after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

struct Coordinator<'a, S> {
    config: &'a ParallelConfig,
    channels: CoordinatorChannels<S>,
    workers: Vec<JoinHandle<()>>,
    footprints: HashSet<S>,
    solutions: HashSet<S>,
    /// Nodes sent to the backlog and not yet claimed by a worker
    pending: usize,
    /// Workers that claimed a node and have not reported back
    active: usize,
    statistics: SearchStatistics,
}

impl<'a, S: Backtrackable> Coordinator<'a, S> {
    fn new(config: &'a ParallelConfig) -> Self {
        Self {
            config,
            channels: create_channels(config.dequeue_timeout),
            workers: Vec::with_capacity(config.max_workers),
            footprints: HashSet::new(),
            solutions: HashSet::new(),
            pending: 0,
            active: 0,
            statistics: SearchStatistics::new(Algorithm::Parallel),
        }
    }

    /// Queue every distinct initial state at depth 0.
    fn seed<I: IntoIterator<Item = S>>(&mut self, states: I) {
        for state in states {
            if self.footprints.insert(state.clone()) {
                self.dispatch(SearchNode::root(state));
            }
        }
    }

    fn run(&mut self) -> Result<(), SearchError> {
        while self.pending > 0 || self.active > 0 {
            self.scale_workers()?;

            let first = match self
                .channels
                .from_workers
                .recv_timeout(self.config.dequeue_timeout)
            {
                Ok(msg) => msg,
                // The coordinator holds a results sender, so the channel
                // cannot disconnect; both arms mean "nothing yet".
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    self.check_workers()?;
                    continue;
                }
            };

            if self.handle(first)? == Flow::Stop {
                return Ok(());
            }

            // Drain whatever else arrived meanwhile
            while let Ok(msg) = self.channels.from_workers.try_recv() {
                if self.handle(msg)? == Flow::Stop {
                    return Ok(());
                }
            }

            trace!(
                backlog = self.pending,
                active = self.active,
                footprints = self.footprints.len(),
                "parallel search progress"
            );
        }

        Ok(())
    }

    fn handle(&mut self, msg: WorkerMessage<S>) -> Result<Flow, SearchError> {
        match msg {
            WorkerMessage::Claimed { .. } => {
                self.pending = self.pending.saturating_sub(1);
                self.active += 1;
                Ok(Flow::Continue)
            }
            WorkerMessage::Expanded { successors, .. } => {
                self.active = self.active.saturating_sub(1);
                self.statistics.expansions += 1;
                for node in successors {
                    if self.classify(node) == Flow::Stop {
                        self.statistics.early_terminated = true;
                        debug!(solutions = self.solutions.len(), "solution limit reached");
                        return Ok(Flow::Stop);
                    }
                }
                Ok(Flow::Continue)
            }
            WorkerMessage::Failed { worker_id, message } => {
                self.active = self.active.saturating_sub(1);
                warn!(worker_id, %message, "expansion panicked");
                Err(SearchError::ExpansionPanicked { worker_id, message })
            }
        }
    }

    /// Discard footprinted states, record solutions, queue everything else.
    fn classify(&mut self, node: SearchNode<S>) -> Flow {
        if self.footprints.contains(&node.state) {
            return Flow::Continue;
        }

        if node.state.is_solution() {
            self.solutions.insert(node.state);
            let reached = self
                .config
                .max_solutions
                .is_some_and(|max| self.solutions.len() >= max);
            return if reached { Flow::Stop } else { Flow::Continue };
        }

        self.footprints.insert(node.state.clone());
        self.dispatch(node);
        Flow::Continue
    }

    fn dispatch(&mut self, node: SearchNode<S>) {
        let Some(backlog) = self.channels.backlog.as_ref() else {
            return;
        };
        // The coordinator keeps a backlog receiver alive, so sending succeeds
        if backlog.send(node).is_ok() {
            self.pending += 1;
            self.statistics.observe_backlog(self.pending);
        }
    }

    fn idle_workers(&self) -> usize {
        self.workers.len().saturating_sub(self.active)
    }

    /// Spawn workers while queued nodes outnumber idle workers, up to the cap.
    fn scale_workers(&mut self) -> Result<(), SearchError> {
        while self.pending > self.idle_workers() && self.workers.len() < self.config.max_workers {
            let worker_id = self.workers.len();
            let channels = self.channels.worker_channels();
            let handle = thread::Builder::new()
                .name(format!("backtracker-worker-{}", worker_id))
                .spawn(move || run_worker(worker_id, channels))?;

            self.workers.push(handle);
            self.statistics.workers_spawned += 1;
            trace!(worker_id, "spawned worker");
        }
        Ok(())
    }

    /// Workers only exit after `shutdown`; one that already finished died.
    ///
    /// Expansion panics are caught inside the worker loop, so this only
    /// fires if a worker thread dies some other way. It keeps the
    /// coordinator from waiting forever on an `active` count nobody will
    /// decrement.
    fn check_workers(&self) -> Result<(), SearchError> {
        match self.workers.iter().position(JoinHandle::is_finished) {
            Some(worker_id) => Err(SearchError::WorkerLost { worker_id }),
            None => Ok(()),
        }
    }

    /// Stop the pool and wait for every worker to exit.
    fn shutdown(&mut self) {
        self.channels.close();
        for (worker_id, handle) in self.workers.drain(..).enumerate() {
            if handle.join().is_err() {
                warn!(worker_id, "worker thread panicked");
            }
        }
    }
}

/// Worker loop: take a node, expand it, report the successors.
///
/// Exits when the coordinator raises the stop flag or drops the backlog.
/// Every claimed node is answered with exactly one `Expanded` or `Failed`,
/// so the coordinator's active count always returns to zero.
fn run_worker<S: Backtrackable>(worker_id: usize, channels: WorkerChannels<S>) {
    loop {
        if channels.shared.should_stop() {
            break;
        }

        let node = match channels.backlog.recv_timeout(channels.dequeue_timeout) {
            Ok(node) => node,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };

        if channels.shared.should_stop() {
            break;
        }

        if channels
            .to_coordinator
            .send(WorkerMessage::Claimed { worker_id })
            .is_err()
        {
            break;
        }

        let message = match panic::catch_unwind(AssertUnwindSafe(|| node.state.expand())) {
            Ok(next) => WorkerMessage::Expanded {
                worker_id,
                successors: next.into_iter().map(|state| node.child(state)).collect(),
            },
            Err(payload) => WorkerMessage::Failed {
                worker_id,
                message: panic_message(&*payload),
            },
        };

        if channels.to_coordinator.send(message).is_err() {
            break;
        }
    }

    trace!(worker_id, "worker exiting");
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
