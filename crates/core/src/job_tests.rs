// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn io_error(msg: &str) -> BoxError {
    Box::new(std::io::Error::other(msg.to_string()))
}

#[test]
fn job_name_is_zero_padded_prefix_and_id() {
    let job = Job::new(7, "register", 0, || async { Ok(()) });
    assert_eq!(job.name, "register_00000007");

    let job = Job::new(123_456_789, "update", 0, || async { Ok(()) });
    assert_eq!(job.name, "update_123456789");
}

#[tokio::test]
async fn task_can_be_taken_exactly_once() {
    let mut job = Job::new(1, "job", 0, || async { Ok(()) });

    let task = job.take_task().expect("first take yields the task");
    assert!(job.take_task().is_none());
    assert!(task().await.is_ok());
}

#[tokio::test]
async fn task_failure_wraps_job_name() {
    let mut job = Job::new(2, "register", 0, || async { Err(io_error("boom")) });

    let task = job.take_task().unwrap();
    let err = task().await.unwrap_err();
    job.fail(err);

    let wrapped = job.error.as_ref().unwrap();
    assert_eq!(wrapped.to_string(), "job \"register_00000002\" failed: boom");
}

#[test]
fn debug_omits_the_task_closure() {
    let job = Job::new(3, "job", 0, || async { Ok(()) });
    let debug = format!("{job:?}");
    assert!(debug.contains("pending: true"));
    assert!(debug.contains("job_00000003"));
}
