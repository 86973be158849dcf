//! One-shot generator for the edge-distance table. Writes the nested
//! array literal that `src/generated.rs` includes into the crate; run it
//! again only if the table semantics ever change.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chesstools::distance::EdgeDistances;
use clap::Parser;

#[derive(Parser)]
#[command(about = "Generate the per-square edge-distance table", version)]
struct Args {
    /// File the table literal is written to.
    #[arg(long, default_value = "generated/edge_distances.rs")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let serialized = EdgeDistances::build().serialize()?;
    fs::write(&args.output, format!("{serialized}\n"))
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("wrote {}", args.output.display());
    Ok(())
}
