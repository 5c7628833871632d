// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cs-queue: bounded parallel work queue
//!
//! A fixed pool of workers drains a rendezvous jobs channel; completed
//! jobs flow through a results channel into a per-job statistics
//! aggregator, and each worker publishes its processed count on exit
//! into a per-worker aggregator. Each aggregator task exclusively owns
//! its [`StatBlock`] and hands it back on join, so no stat is ever
//! touched from two tasks.
//!
//! Shutdown mirrors the channel-closing protocol: dropping the jobs
//! sender lets every worker drain and exit, which in turn closes the
//! results and pools channels and lets the aggregators finish.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use cs_core::{BoxError, Clock, Job, JobError, StatBlock, SystemClock};

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("work queue has not been started")]
    NotStarted,
    #[error("work queue is no longer accepting jobs")]
    Closed,
    #[error("work queue was cancelled")]
    Cancelled,
}

/// Finalized per-job and per-worker statistics.
#[derive(Debug, Clone)]
pub struct WorkQueueStats {
    job_stats: StatBlock,
    pool_stats: StatBlock,
}

impl WorkQueueStats {
    /// Job duration statistics, in milliseconds.
    pub fn job_stats(&self) -> &StatBlock {
        &self.job_stats
    }

    /// Jobs-processed-per-worker statistics.
    pub fn pool_stats(&self) -> &StatBlock {
        &self.pool_stats
    }
}

/// Bounded worker pool executing [`Job`]s.
pub struct WorkQueue<C: Clock = SystemClock> {
    name: String,
    num_pools: usize,
    clock: C,
    cancel: CancellationToken,
    start_time_ms: u64,
    finish_time_ms: u64,
    jobs_tx: Option<mpsc::Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
    job_agg: Option<JoinHandle<(StatBlock, Vec<JobError>)>>,
    pool_agg: Option<JoinHandle<StatBlock>>,
    stats: Option<WorkQueueStats>,
    errors: Vec<JobError>,
}

impl WorkQueue<SystemClock> {
    pub fn new(name: impl Into<String>, num_pools: usize) -> Self {
        Self::with_clock(name, num_pools, SystemClock)
    }
}

impl<C: Clock> WorkQueue<C> {
    pub fn with_clock(name: impl Into<String>, num_pools: usize, clock: C) -> Self {
        Self {
            name: name.into(),
            num_pools: num_pools.max(1),
            clock,
            cancel: CancellationToken::new(),
            start_time_ms: 0,
            finish_time_ms: 0,
            jobs_tx: None,
            workers: Vec::new(),
            job_agg: None,
            pool_agg: None,
            stats: None,
            errors: Vec::new(),
        }
    }

    /// Build a job carrying this queue's name prefix.
    pub fn new_job<F, Fut>(&self, id: u32, task: F) -> Job
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Result<(), BoxError>> + Send + 'static,
    {
        Job::new(id, &self.name, self.clock.epoch_ms(), task)
    }

    /// Token observed by workers; cancelling it stops job intake while
    /// letting in-flight jobs finish, so a partial summary is still
    /// produced.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Spawn the worker pool and both aggregator tasks.
    pub fn start(&mut self) {
        let (jobs_tx, jobs_rx) = mpsc::channel::<Job>(1);
        let (results_tx, results_rx) = mpsc::channel::<Job>(1);
        let (pools_tx, pools_rx) = mpsc::channel::<u64>(self.num_pools);

        let jobs_rx = Arc::new(Mutex::new(jobs_rx));
        for pool_id in 0..self.num_pools {
            self.workers.push(tokio::spawn(pool_handler(
                pool_id,
                Arc::clone(&jobs_rx),
                results_tx.clone(),
                pools_tx.clone(),
                self.cancel.clone(),
                self.clock.clone(),
            )));
        }
        // Workers hold the only senders from here on, so the results
        // and pools channels close exactly when the last worker exits.
        drop(results_tx);
        drop(pools_tx);

        self.job_agg = Some(tokio::spawn(job_results_handler(results_rx)));
        self.pool_agg = Some(tokio::spawn(pool_results_handler(pools_rx)));
        self.jobs_tx = Some(jobs_tx);
    }

    /// Submit a job; blocks while every worker is busy and the
    /// rendezvous slot is taken.
    pub async fn add(&mut self, job: Job) -> Result<(), QueueError> {
        if self.cancel.is_cancelled() {
            return Err(QueueError::Cancelled);
        }
        let jobs_tx = self.jobs_tx.as_ref().ok_or(QueueError::NotStarted)?;
        if self.start_time_ms == 0 {
            self.start_time_ms = self.clock.epoch_ms();
        }
        jobs_tx.send(job).await.map_err(|_| QueueError::Closed)
    }

    /// Close the jobs channel, join every worker and both aggregators,
    /// and finalize stats and errors.
    pub async fn wait_for_completion(&mut self) {
        drop(self.jobs_tx.take());

        for worker in self.workers.drain(..) {
            if let Err(err) = worker.await {
                tracing::error!(error = %err, "worker task aborted");
            }
        }
        self.finish_time_ms = self.clock.epoch_ms();

        if let Some(handle) = self.job_agg.take() {
            if let Ok((job_stats, errors)) = handle.await {
                self.errors = errors;
                if let Some(handle) = self.pool_agg.take() {
                    if let Ok(pool_stats) = handle.await {
                        self.stats = Some(WorkQueueStats { job_stats, pool_stats });
                    }
                }
            }
        }
    }

    /// All job failures observed so far; final after
    /// [`wait_for_completion`](Self::wait_for_completion).
    pub fn errors(&self) -> &[JobError] {
        &self.errors
    }

    /// Finalized statistics; `None` until completion.
    pub fn stats(&self) -> Option<&WorkQueueStats> {
        self.stats.as_ref()
    }

    pub fn start_time_ms(&self) -> u64 {
        self.start_time_ms
    }

    pub fn finish_time_ms(&self) -> u64 {
        self.finish_time_ms
    }
}

async fn pool_handler<C: Clock>(
    pool_id: usize,
    jobs: Arc<Mutex<mpsc::Receiver<Job>>>,
    results: mpsc::Sender<Job>,
    pools: mpsc::Sender<u64>,
    cancel: CancellationToken,
    clock: C,
) {
    tracing::debug!(pool_id, "worker started");

    let mut processed: u64 = 0;
    loop {
        let job = {
            let mut rx = jobs.lock().await;
            tokio::select! {
                biased;
                _ = cancel.cancelled() => None,
                job = rx.recv() => job,
            }
        };
        let Some(mut job) = job else { break };

        let started = clock.now();
        job.started_at_ms = clock.epoch_ms();
        let result = match job.take_task() {
            Some(task) => task().await,
            None => Ok(()),
        };
        job.finished_at_ms = clock.epoch_ms();
        job.duration_ms = clock.now().saturating_duration_since(started).as_secs_f64() * 1000.0;

        if let Err(source) = result {
            job.fail(source);
        }

        if results.send(job).await.is_err() {
            break;
        }
        processed += 1;
    }

    tracing::debug!(pool_id, processed, "worker finished");
    let _ = pools.send(processed).await;
}

async fn job_results_handler(mut results: mpsc::Receiver<Job>) -> (StatBlock, Vec<JobError>) {
    let mut stats = StatBlock::new("Job", "ms");
    let mut errors = Vec::new();

    while let Some(mut job) = results.recv().await {
        if let Some(error) = job.error.take() {
            errors.push(error);
        }
        stats.update(job.duration_ms, job.started_at_ms, job.finished_at_ms);
    }

    (stats, errors)
}

async fn pool_results_handler(mut pools: mpsc::Receiver<u64>) -> StatBlock {
    let mut stats = StatBlock::new("Pool", "");

    while let Some(processed) = pools.recv().await {
        stats.update(processed as f64, 0, 0);
    }

    stats
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
