use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::core::api;

/// Runs the blocking work off the UI thread and hands results back over a
/// channel the app drains once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));
        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// One-shot startup fetch of the candidate pool. No retry: a failure is
    /// reported and the session lands in its Empty state.
    pub fn fetch_pool(&self, limit: u32) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender
                .send(TaskResult::LoadingMessage("Fetching cats from cataas.com...".to_string()));

            let result = runtime
                .block_on(async { api::fetch_cats(limit).await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::PoolLoaded(result));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
