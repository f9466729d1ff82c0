use pathfinding::directed::bfs::bfs as breadth_first;
use tracing::info;

use super::Report;
use crate::{board::State, moves::successors};

/// Breadth-first search under a unit cost per move.
///
/// Successors are tested against `goal` as they are generated, which keeps
/// the returned depth minimal since every move costs the same. The reported
/// goal is the state that was reached, i.e. `goal` itself.
pub fn bfs(start: &State, goal: &State) -> Report {
    info!(event = "search_start", strategy = "bfs", start = %start, goal = %goal);

    if start == goal {
        info!(event = "search_end", strategy = "bfs", length = 0, expanded = 0);
        return Report::found(0, *start, 0, 0);
    }

    let mut expanded = 0;
    let mut generated = 0;

    let path = breadth_first(
        start,
        |state| {
            let next = successors(state);

            expanded += 1;
            generated += next.len();

            next.into_iter().map(|(_, state)| state)
        },
        |state| state == goal,
    );

    let report = match path.as_deref() {
        Some(steps @ [.., reached]) => {
            Report::found((steps.len() - 1) as u32, *reached, expanded, generated)
        }
        _ => Report::not_found(expanded, generated),
    };

    info!(
        event = "search_end",
        strategy = "bfs",
        length = ?report.length(),
        expanded = report.expanded,
        generated = report.generated,
    );
    report
}
