use std::io;

use anyhow::{Context, Result};
use eight_puzzle::{cli, search};

fn main() -> Result<()> {
    cli::init_logging();

    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    let start = cli::prompt_state(&mut input, &mut output, "Enter given board string: ")
        .context("invalid start state")?;
    let goal = cli::prompt_state(&mut input, &mut output, "Enter given goal state: ")
        .context("invalid goal state")?;

    let report = search::bfs(&start, &goal);
    println!("{}", cli::bfs_summary(&report));

    Ok(())
}
