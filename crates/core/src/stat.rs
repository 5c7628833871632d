// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming statistics blocks.
//!
//! Mean and variance are maintained with Welford's online recurrence,
//! so a block never stores its samples and stays numerically stable
//! over long runs.

/// Options controlling which lines [`StatBlock::summary`] emits.
#[derive(Debug, Clone, Default)]
pub struct SummaryOpts {
    /// Emit the leading `<name> Stats:` line.
    pub header: bool,
    /// Append a trailing blank separator line.
    pub footer: bool,
    /// Override the block's own name in the header.
    pub name: Option<String>,
    /// Include elapsed time and sample rate.
    pub rate: bool,
    /// Include min and max lines.
    pub min_max: bool,
    /// Include variance, standard deviation and RMS lines.
    pub extra_stats: bool,
}

/// Streaming count/min/max/mean/variance plus a wall-clock window.
///
/// `start`/`end` track the earliest started and latest finished
/// timestamps seen across updates (epoch milliseconds, zero meaning
/// unset), from which the sample rate is derived.
#[derive(Debug, Clone)]
pub struct StatBlock {
    name: String,
    unit_sfx: String,
    count: u64,
    min: f64,
    max: f64,
    mean: f64,
    m2: f64,
    start_ms: u64,
    end_ms: u64,
}

impl StatBlock {
    pub fn new(name: impl Into<String>, unit_sfx: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit_sfx: unit_sfx.into(),
            count: 0,
            min: f64::MAX,
            max: 0.0,
            mean: 0.0,
            m2: 0.0,
            start_ms: 0,
            end_ms: 0,
        }
    }

    /// Fold one sample into the block.
    ///
    /// `started_ms`/`finished_ms` are epoch-millisecond stamps for the
    /// event the sample was measured from; zero leaves the wall-clock
    /// window untouched.
    pub fn update(&mut self, sample: f64, started_ms: u64, finished_ms: u64) {
        self.count += 1;

        if started_ms != 0 && (self.start_ms == 0 || started_ms < self.start_ms) {
            self.start_ms = started_ms;
        }
        if finished_ms != 0 && finished_ms > self.end_ms {
            self.end_ms = finished_ms;
        }

        if sample < self.min {
            self.min = sample;
        }
        if sample > self.max {
            self.max = sample;
        }

        let delta1 = sample - self.mean;
        self.mean += delta1 / self.count as f64;
        let delta2 = sample - self.mean;
        self.m2 += delta1 * delta2;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_suffix(&self) -> &str {
        &self.unit_sfx
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn average(&self) -> f64 {
        self.mean
    }

    /// Population variance.
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.m2 / self.count as f64
    }

    /// Sample variance (Bessel's correction).
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        self.m2 / (self.count - 1) as f64
    }

    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn sample_standard_deviation(&self) -> f64 {
        self.sample_variance().sqrt()
    }

    pub fn root_mean_square(&self) -> f64 {
        (self.variance() + self.mean * self.mean).sqrt()
    }

    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    pub fn end_ms(&self) -> u64 {
        self.end_ms
    }

    /// Wall-clock window covered by the samples, in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        if self.end_ms <= self.start_ms {
            return 0.0;
        }
        (self.end_ms - self.start_ms) as f64 / 1000.0
    }

    /// Samples per second over the wall-clock window, 0 if the window
    /// is empty.
    pub fn rate(&self) -> f64 {
        let elapsed = self.elapsed_secs();
        if elapsed == 0.0 {
            return 0.0;
        }
        self.count as f64 / elapsed
    }

    /// Render the block as a multi-line human-readable summary.
    pub fn summary(&self, opts: &SummaryOpts) -> String {
        let label = opts.name.as_deref().unwrap_or(&self.name);
        let mut lines = Vec::new();

        if opts.header {
            lines.push(format!("{label} Stats:"));
        }

        lines.push(format_count("Total", self.count, ""));
        if opts.min_max {
            lines.push(format_value("Min", self.min, &self.unit_sfx));
            lines.push(format_value("Max", self.max, &self.unit_sfx));
        }
        lines.push(format_value("Average", self.average(), &self.unit_sfx));
        if opts.extra_stats {
            lines.push(format_value("Variance", self.variance(), &self.unit_sfx));
            lines.push(format_value("StdDev", self.standard_deviation(), &self.unit_sfx));
            lines.push(format_value("RMS", self.root_mean_square(), &self.unit_sfx));
        }
        if opts.rate {
            lines.push(format_value("Elapsed", self.elapsed_secs(), "s"));
            lines.push(format_value("Rate", self.rate(), "/s"));
        }
        if opts.footer {
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

fn format_count(name: &str, value: u64, unit: &str) -> String {
    let line = format!("  {:<16} {:13} {}", format!("{name}:"), value, unit);
    line.trim_end().to_string()
}

fn format_value(name: &str, value: f64, unit: &str) -> String {
    let line = format!("  {:<16} {:13.6} {}", format!("{name}:"), value, unit);
    line.trim_end().to_string()
}

#[cfg(test)]
#[path = "stat_tests.rs"]
mod tests;
