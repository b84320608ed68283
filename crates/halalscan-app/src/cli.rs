// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "halalscan",
    version,
    about = "Check ingredient lists for haram substances"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Catalog JSON file to use instead of the bundled one"
    )]
    pub catalog: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        value_name = "0-100",
        value_parser = clap::value_parser!(u8).range(0..=100),
        help = "Minimum fuzzy similarity for a match"
    )]
    pub threshold: Option<u8>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check typed ingredient text (reads stdin when no text is given).
    Check {
        text: Option<String>,
        #[arg(long, value_name = "PATH", conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Extract text from a label photo and check it.
    Scan { image: PathBuf },
    /// List the loaded catalog.
    Catalog,
}
