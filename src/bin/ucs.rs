use std::io;

use anyhow::{Context, Result};
use eight_puzzle::{cli, cost::CostTable, search};

fn main() -> Result<()> {
    cli::init_logging();

    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    let start = cli::prompt_state(&mut input, &mut output, "Enter start state: ")
        .context("invalid start state")?;
    let goal = cli::prompt_state(&mut input, &mut output, "Enter goal state: ")
        .context("invalid goal state")?;

    let report = search::ucs(&start, &goal, &CostTable::UP_HEAVY);
    println!("{}", cli::ucs_summary(&report));

    Ok(())
}
