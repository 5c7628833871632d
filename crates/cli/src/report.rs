// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Summary report formatting and the on-disk stats log.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use cs_core::SummaryOpts;
use cs_queue::WorkQueueStats;

/// Render the end-of-run report: framed job and per-worker stat
/// blocks.
pub fn summary_report(action: &str, at: DateTime<Utc>, stats: &WorkQueueStats) -> String {
    let job_opts = SummaryOpts {
        header: true,
        footer: true,
        name: None,
        rate: true,
        min_max: true,
        extra_stats: true,
    };
    let pool_opts = SummaryOpts {
        header: true,
        footer: false,
        name: None,
        rate: false,
        min_max: true,
        extra_stats: false,
    };

    let mut lines = Vec::new();
    lines.push(format!(
        "[Start of client {action} summary statistics at {}]",
        at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(stats.job_stats().summary(&job_opts));
    lines.push(stats.pool_stats().summary(&pool_opts));
    lines.push("[End of summary statistics]".to_string());
    lines.join("\n")
}

/// Write the report under `<root>/stats/<date>_<time>_<action>_<N>.log`
/// and return the path.
pub fn write_summary_log(
    root: &Path,
    action: &str,
    num_clients: u32,
    at: DateTime<Utc>,
    report: &str,
) -> io::Result<PathBuf> {
    let stats_dir = root.join("stats");
    std::fs::create_dir_all(&stats_dir)?;

    let name = format!(
        "{}_{}_{}_{}.log",
        at.format("%Y-%m-%d"),
        at.format("%H%M%S"),
        action,
        num_clients
    );
    let path = stats_dir.join(name);
    std::fs::write(&path, report)?;
    Ok(path)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
