// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Halal Scanner — command-line ingredient checker.
//
// Entry point. Initialises logging, loads configuration and the catalog, then
// runs one command. Exit status: 0 halal, 1 not halal, 2 usage or setup error.

mod cli;
mod report;
mod services;

use std::process::ExitCode;

use clap::Parser;
use halalscan_core::HalalCheckResult;
use halalscan_core::error::Result;
use tokio::io::AsyncReadExt;

use cli::{Cli, Commands};
use services::app_services::{AppServices, ConfigOverrides};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "halalscan starting");

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "halalscan failed");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let svc = AppServices::init(ConfigOverrides {
        catalog_path: cli.catalog,
        fuzzy_threshold: cli.threshold,
    })
    .await?;

    match cli.command {
        Commands::Check { text, file } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => tokio::fs::read_to_string(&path).await?,
                (None, None) => {
                    let mut buf = String::new();
                    tokio::io::stdin().read_to_string(&mut buf).await?;
                    buf
                }
            };
            emit_result(&svc.check_text(&text), cli.json)
        }
        Commands::Scan { image } => {
            let outcome = svc.scan_image(&image).await?;
            if outcome.text.trim().is_empty() {
                eprintln!("no text could be read from {}", image.display());
            }
            emit_result(&outcome.result, cli.json)
        }
        Commands::Catalog => {
            let threshold = svc.config().fuzzy_threshold;
            let rendered = if cli.json {
                report::render_catalog_json(svc.catalog(), threshold)?
            } else {
                report::render_catalog(svc.catalog(), threshold)
            };
            println!("{rendered}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn emit_result(result: &HalalCheckResult, json: bool) -> Result<ExitCode> {
    let rendered = if json {
        report::render_result_json(result)?
    } else {
        report::render_result(result)
    };
    println!("{rendered}");
    Ok(if result.is_halal() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
