// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

use cs_cli::clientctl;

#[tokio::main]
async fn main() {
    cs_cli::init_tracing();

    let cli = clientctl::Cli::parse();
    if let Err(err) = clientctl::run(cli).await {
        eprintln!("Error: {err}");
        std::process::exit(err.code);
    }
}
