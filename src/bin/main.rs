mod args;

use std::fs::File;
use std::process;

use anyhow::{Context, Result};
use csvjoin::join::join;
use csvjoin::reader;
use csvjoin::table::MemoryTable;

use crate::args::Args;

fn main() {
    match Args::parse().and_then(run) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut left = reader::from_path(args.left_path())
        .with_context(|| format!("failed to read the left file {}", args.left_path().display()))?;
    let mut right = reader::from_path(args.right_path())
        .with_context(|| format!("failed to read the right file {}", args.right_path().display()))?;
    let out_file = File::create(args.output_path()).with_context(|| {
        format!(
            "failed to create the output file {}",
            args.output_path().display()
        )
    })?;
    let mut out = csv::Writer::from_writer(out_file);

    let table = MemoryTable::read_from(&mut right, args.join_column())
        .with_context(|| format!("failed to index the right file {}", args.right_path().display()))?;
    join(&mut left, &table, args.join_column(), &mut out)
        .with_context(|| format!("failed to join the left file {}", args.left_path().display()))?;
    out.flush().with_context(|| {
        format!(
            "failed to flush the output file {}",
            args.output_path().display()
        )
    })?;
    Ok(())
}
