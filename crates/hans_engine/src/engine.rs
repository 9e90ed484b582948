use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_info, engine_warn};
use hans_core::Submission;

use crate::Submitter;

enum EngineCommand {
    Submit(Submission),
}

/// Background executor for submissions.
///
/// Each submission becomes its own task: independent and unordered. Outcomes
/// are logged and otherwise dropped. Tasks still running when the shutdown
/// grace period ends are abandoned with the runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    worker: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    pub fn new(submitter: Arc<dyn Submitter>, shutdown_grace: Duration) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        let worker = thread::Builder::new()
            .name("hans-submit".to_string())
            .spawn(move || {
                let mut in_flight: Vec<tokio::task::JoinHandle<()>> = Vec::new();
                while let Ok(command) = cmd_rx.recv() {
                    in_flight.retain(|task| !task.is_finished());
                    let submitter = submitter.clone();
                    in_flight.push(runtime.spawn(async move {
                        handle_command(submitter.as_ref(), command).await;
                    }));
                }
                runtime.block_on(drain(in_flight, shutdown_grace));
            })?;

        Ok(Self {
            cmd_tx,
            worker: Some(worker),
        })
    }

    pub fn submit(&self, submission: Submission) {
        if self.cmd_tx.send(EngineCommand::Submit(submission)).is_err() {
            engine_warn!("Submission dropped: engine worker is gone");
        }
    }

    /// Stop accepting work and wait for in-flight posts up to the grace period.
    pub fn shutdown(mut self) {
        self.join_worker();
    }

    fn join_worker(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        // Closing the channel ends the worker loop.
        let (closed_tx, _) = mpsc::channel();
        drop(std::mem::replace(&mut self.cmd_tx, closed_tx));
        if worker.join().is_err() {
            engine_warn!("Submission worker panicked");
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.join_worker();
    }
}

async fn handle_command(submitter: &dyn Submitter, command: EngineCommand) {
    match command {
        EngineCommand::Submit(submission) => match submitter.submit(&submission).await {
            Ok(status) => engine_debug!("Submitted id={} status={}", submission.id, status),
            Err(err) => engine_info!("Submission id={} not delivered: {}", submission.id, err),
        },
    }
}

async fn drain(in_flight: Vec<tokio::task::JoinHandle<()>>, grace: Duration) {
    let pending = in_flight.len();
    let wait_all = async {
        for task in in_flight {
            let _ = task.await;
        }
    };
    if tokio::time::timeout(grace, wait_all).await.is_err() {
        engine_warn!("Abandoning unfinished submissions ({} pending at shutdown)", pending);
    }
}
