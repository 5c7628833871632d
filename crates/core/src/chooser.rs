// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Weighted random choice.

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChooseError {
    #[error("cannot choose from an empty choice table")]
    Empty,
    #[error("choice weights must be strictly positive")]
    ZeroWeight,
}

/// One weighted entry in a choice table.
#[derive(Debug, Clone)]
pub struct Choice<V> {
    pub weight: u32,
    pub value: V,
}

/// Pick one value with probability `weight / total_weight`.
///
/// Forms the prefix-sum table, draws a uniform integer in
/// `[0, total)`, and returns the first entry whose prefix exceeds the
/// draw. Weights must be strictly positive so prefix ties cannot
/// arise. Draws come from the process-wide thread-local PRNG rather
/// than a per-call wall-clock seed, so rapid successive calls stay
/// independent.
pub fn choose<V>(choices: &[Choice<V>]) -> Result<&V, ChooseError> {
    if choices.is_empty() {
        return Err(ChooseError::Empty);
    }

    let mut total: u64 = 0;
    let mut prefixes = Vec::with_capacity(choices.len());
    for choice in choices {
        if choice.weight == 0 {
            return Err(ChooseError::ZeroWeight);
        }
        total += u64::from(choice.weight);
        prefixes.push(total);
    }

    let draw = rand::thread_rng().gen_range(0..total);
    for (choice, prefix) in choices.iter().zip(prefixes) {
        if draw < prefix {
            return Ok(&choice.value);
        }
    }

    // draw < total and the final prefix equals total
    unreachable!("uniform draw exceeded the prefix-sum table")
}

#[cfg(test)]
#[path = "chooser_tests.rs"]
mod tests;
