//! Prompt handling and output formatting shared by the `bfs`, `gbfs` and
//! `ucs` binaries.

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use crate::{
    board::State,
    error::{Error, Result},
    search::Report,
};

/// Length printed when the goal could not be reached.
pub const NOT_FOUND: i64 = -1;

/// Sends diagnostics to stderr, filtered by `RUST_LOG` (default `warn`), so
/// stdout only carries the prompts and the summary line.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn io_error(operation: &str) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| Error::Io {
        operation: operation.to_owned(),
        source,
    }
}

/// Writes `message`, then reads one line and parses it as a state.
pub fn prompt_state<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<State> {
    write!(output, "{}", message).map_err(io_error("write prompt"))?;
    output.flush().map_err(io_error("flush prompt"))?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(io_error("read state"))?;
    if read == 0 {
        return Err(io_error("read state")(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a state was entered",
        )));
    }

    State::new(line.trim())
}

fn length(report: &Report) -> i64 {
    report.length().map_or(NOT_FOUND, i64::from)
}

pub fn bfs_summary(report: &Report) -> String {
    let goal = match report.goal() {
        Some(goal) => goal.grid().to_string(),
        None => "None".to_owned(),
    };
    format!("Solved in {} moves and goal state is {}", length(report), goal)
}

pub fn gbfs_summary(report: &Report) -> String {
    format!("Solved in {} moves", length(report))
}

pub fn ucs_summary(report: &Report) -> String {
    format!(
        "Solved with cost {} after {} expansions",
        length(report),
        report.expanded
    )
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{
        cost::CostTable,
        search::{self, Outcome},
    };

    fn s(id: &str) -> State {
        State::new(id).unwrap()
    }

    #[test]
    fn prompt_reads_trimmed_line() {
        let mut input = Cursor::new("  1234567#8 \n12345678#\n");
        let mut output = Vec::new();

        let start = prompt_state(&mut input, &mut output, "start: ").unwrap();
        let goal = prompt_state(&mut input, &mut output, "goal: ").unwrap();

        assert_eq!(start, s("1234567#8"));
        assert_eq!(goal, s("12345678#"));
        assert_eq!(String::from_utf8(output).unwrap(), "start: goal: ");
    }

    #[test]
    fn prompt_surfaces_malformed_input() {
        let mut input = Cursor::new("1234\n");
        let err = prompt_state(&mut input, &mut Vec::new(), "start: ").unwrap_err();
        assert!(matches!(err, Error::MalformedState { .. }));
    }

    #[test]
    fn prompt_reports_closed_input() {
        let mut input = Cursor::new("");
        let err = prompt_state(&mut input, &mut Vec::new(), "start: ").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn summaries_for_found_goals() {
        let start = s("1234567#8");
        let goal = s("12345678#");

        assert_eq!(
            bfs_summary(&search::bfs(&start, &goal)),
            "Solved in 1 moves and goal state is 123/456/78#"
        );
        assert_eq!(gbfs_summary(&search::gbfs(&start, &goal).unwrap()), "Solved in 1 moves");
        assert_eq!(
            ucs_summary(&search::ucs(&goal, &s("12345#786"), &CostTable::UP_HEAVY)),
            "Solved with cost 5 after 3 expansions"
        );
    }

    #[test]
    fn summaries_use_sentinel_when_not_found() {
        let report = Report {
            outcome: Outcome::NotFound,
            expanded: 4,
            generated: 9,
        };
        assert_eq!(bfs_summary(&report), "Solved in -1 moves and goal state is None");
        assert_eq!(gbfs_summary(&report), "Solved in -1 moves");
        assert_eq!(ucs_summary(&report), "Solved with cost -1 after 4 expansions");
    }
}
