// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Work-queue jobs.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

/// Boxed error type returned by job tasks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The future a job task resolves to.
pub type TaskFuture = Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send>>;

/// A boxed, not-yet-started task.
pub type TaskFn = Box<dyn FnOnce() -> TaskFuture + Send>;

/// A task failure wrapped with the owning job's name.
#[derive(Debug, Error)]
#[error("job {name:?} failed: {source}")]
pub struct JobError {
    pub name: String,
    #[source]
    pub source: BoxError,
}

/// One unit of work submitted to a [work queue](../queue/index.html).
///
/// The task is executed exactly once by exactly one worker; the worker
/// records the start/finish stamps and attaches any failure.
pub struct Job {
    pub id: u32,
    pub name: String,
    task: Option<TaskFn>,
    pub created_at_ms: u64,
    pub started_at_ms: u64,
    pub finished_at_ms: u64,
    /// Task run time in fractional milliseconds.
    pub duration_ms: f64,
    pub error: Option<JobError>,
}

impl Job {
    pub fn new<F, Fut>(id: u32, prefix: &str, created_at_ms: u64, task: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
    {
        Self {
            id,
            name: format!("{prefix}_{id:08}"),
            task: Some(Box::new(move || Box::pin(task()))),
            created_at_ms,
            started_at_ms: 0,
            finished_at_ms: 0,
            duration_ms: 0.0,
            error: None,
        }
    }

    /// Hand out the task for execution; `None` on any later call.
    pub fn take_task(&mut self) -> Option<TaskFn> {
        self.task.take()
    }

    /// Record a task failure, wrapping it with the job name.
    pub fn fail(&mut self, source: BoxError) {
        self.error = Some(JobError { name: self.name.clone(), source });
    }
}

impl std::fmt::Debug for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Job")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("pending", &self.task.is_some())
            .field("duration_ms", &self.duration_ms)
            .field("error", &self.error)
            .finish()
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
