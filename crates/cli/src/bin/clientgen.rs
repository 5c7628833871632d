// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

use cs_cli::clientgen;

fn main() {
    cs_cli::init_tracing();

    let cli = clientgen::Cli::parse();
    if let Err(err) = clientgen::run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(err.code);
    }
}
