//! Batch round-trip verifier for circuit input documents.
//!
//! For every file: parse the JSON, shape-validate it against the declared
//! family and profile, decode it to bytes, re-encode, and require the
//! re-encoded document to match the input bit for bit. Files are checked in
//! parallel; any failure makes the process exit non-zero.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use cin::{CipherInputCodec as _, CircuitInputDocument, EncodeRequest, Family};
use clap::Parser;
use indicatif::ProgressBar;
use rayon::prelude::*;

#[derive(Parser)]
#[command(name = "cin-checker")]
#[command(about = "Round-trip verifier for circuit input documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Circuit family the documents target
    #[arg(short, long, value_parser = parse_family)]
    family: Family,

    /// Registered size profile name (64B, 1KB, 10KB, 20KB)
    #[arg(short, long)]
    profile: String,

    /// Document JSON files to verify
    #[arg(value_name = "FILES", required = true)]
    files: Vec<PathBuf>,
}

fn parse_family(s: &str) -> Result<Family, String> {
    s.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pb = ProgressBar::new(cli.files.len() as u64);
    let failures: Vec<(PathBuf, anyhow::Error)> = cli
        .files
        .par_iter()
        .filter_map(|path| {
            let result = check_file(path, cli.family, &cli.profile);
            pb.inc(1);
            result.err().map(|e| (path.clone(), e))
        })
        .collect();
    pb.finish_and_clear();

    println!(
        "Checked {} document(s): {} ok, {} failed",
        cli.files.len(),
        cli.files.len() - failures.len(),
        failures.len()
    );
    for (path, err) in &failures {
        eprintln!("FAIL {}: {err:#}", path.display());
    }
    if !failures.is_empty() {
        bail!("{} document(s) failed verification", failures.len());
    }
    Ok(())
}

fn check_file(path: &Path, family: Family, profile: &str) -> Result<()> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let document =
        CircuitInputDocument::from_reader(file, family, profile).context("shape validation")?;

    let codec = family.codec();
    let decoded = codec.decode(&document, profile).context("decode")?;
    let reencoded = codec
        .encode(
            &EncodeRequest {
                key: &decoded.key,
                nonce: &decoded.nonce,
                counter: decoded.counter,
                payload: &decoded.payload,
            },
            profile,
        )
        .context("re-encode")?;

    // The decoded payload is already at capacity, so a clean document
    // re-encodes without any padding advisory.
    if reencoded.padding.is_lossy() {
        bail!("decoded payload did not match profile capacity");
    }
    if reencoded.document != document {
        bail!("re-encoded document differs from input");
    }
    Ok(())
}
