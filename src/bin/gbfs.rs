use std::io;

use anyhow::{Context, Result};
use eight_puzzle::{cli, search};

fn main() -> Result<()> {
    cli::init_logging();

    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    let start = cli::prompt_state(&mut input, &mut output, "Enter the start state: ")
        .context("invalid start state")?;
    let goal = cli::prompt_state(&mut input, &mut output, "Enter goal state: ")
        .context("invalid goal state")?;

    let report = search::gbfs(&start, &goal)
        .with_context(|| format!("cannot compare {} against {}", start, goal))?;
    println!("{}", cli::gbfs_summary(&report));

    Ok(())
}
