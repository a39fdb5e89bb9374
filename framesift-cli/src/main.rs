use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Analyze GifBolt frame dumps left in the scratch directory.
///
/// Reads `gifbolt_frame_*.txt` metadata records (and counts the matching
/// `.raw` pixel dumps), then reports sequence gaps and the double-buffer
/// alternation pattern. The scratch directory comes from the `TEMP`
/// environment variable, falling back to the platform temp directory.
#[derive(Parser, Debug)]
#[command(name = "framesift", version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    let dir = scratch_dir();
    let report = framesift::analyze_directory(&dir, framesift::ReportOptions::default())?;

    let stdout = std::io::stdout();
    report
        .render(&mut stdout.lock())
        .context("write report to stdout")?;
    Ok(())
}

fn scratch_dir() -> PathBuf {
    std::env::var_os("TEMP")
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
}
