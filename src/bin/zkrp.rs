/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Command line tool for generating and verifying interval proofs

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use zkrp::{
    common::*,
    rangeproof::{IntervalParams, IntervalProof},
};

#[derive(Parser)]
#[command(name = "zkrp")]
#[command(about = "Zero-knowledge proofs that a secret lies in an interval")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prove that a secret is in [lower, upper)
    Generate {
        /// The secret value
        #[arg(short, long, allow_negative_numbers = true)]
        secret: i64,
        /// Lower bound (inclusive)
        #[arg(short, long, allow_negative_numbers = true)]
        lower: i64,
        /// Upper bound (exclusive)
        #[arg(short, long, allow_negative_numbers = true)]
        upper: i64,
        /// Output file for the proof
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Verify a proof written by `generate`
    Verify {
        /// Proof file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn generate(secret: i64, lower: i64, upper: i64, out: &Path) -> anyhow::Result<()> {
    if lower >= upper {
        bail!("Range distance invalid.");
    }
    if secret < lower {
        bail!("Secret out of lower range.");
    }
    if secret >= upper {
        bail!("Secret out of upper range.");
    }

    let params = IntervalParams::setup_generic(&Scalar::from(lower), &Scalar::from(upper))?;
    let proof = params.prove_generic(&Scalar::from(secret))?;
    let bytes = proof.to_bytes()?;
    std::fs::write(out, &bytes)
        .with_context(|| format!("failed to write proof to {}", out.display()))?;
    info!(bytes = bytes.len(), path = %out.display(), "proof written");
    return Ok(());
}

fn verify(input: &Path) -> anyhow::Result<bool> {
    let bytes = std::fs::read(input)
        .with_context(|| format!("failed to read proof from {}", input.display()))?;
    let proof = IntervalProof::from_bytes(&bytes)?;
    info!(a = %proof.a, b = %proof.b, "proof read");
    return Ok(proof.verify()?);
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate { secret, lower, upper, out } => {
            generate(secret, lower, upper, &out)?;
        }
        Commands::Verify { input } => {
            if verify(&input)? {
                println!("Proof successfully verified.");
            } else {
                println!("Proof verification failed.");
            }
        }
    }
    return Ok(());
}
