use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, info, trace};

use super::{Entry, Report};
use crate::{board::State, cost::CostTable, moves::successors};

/// Uniform-cost search: finds the cheapest way to `goal` when each move is
/// charged according to `costs`.
///
/// Frontier entries are ordered by accumulated cost, then by state
/// identifier. A state's cost is final the first time it is popped; entries
/// for it pushed earlier at a higher cost are dropped on pop without being
/// expanded, and do not count towards `expanded`.
pub fn ucs(start: &State, goal: &State, costs: &CostTable) -> Report {
    info!(
        event = "search_start",
        strategy = "ucs",
        start = %start,
        goal = %goal,
        costs = ?costs,
    );

    if start == goal {
        info!(event = "search_end", strategy = "ucs", length = 0, expanded = 0);
        return Report::found(0, *start, 0, 0);
    }

    let mut frontier = BinaryHeap::new();
    let mut finalized: HashMap<State, u32> = HashMap::new();
    let mut expanded = 0;
    let mut generated = 0;
    let mut stale = 0;

    frontier.push(Entry {
        priority: 0,
        state: *start,
        depth: 0,
    });

    while let Some(Entry {
        priority: cost,
        state,
        depth,
    }) = frontier.pop()
    {
        if finalized.get(&state).is_some_and(|&best| best <= cost) {
            stale += 1;
            continue;
        }
        finalized.insert(state, cost);

        if state == *goal {
            debug!(stale, moves = depth, "goal popped");
            info!(
                event = "search_end",
                strategy = "ucs",
                length = cost,
                expanded,
                generated,
            );
            return Report::found(cost, state, expanded, generated);
        }

        trace!(state = %state, cost, depth, "expanding");
        expanded += 1;

        for (mv, next) in successors(&state) {
            generated += 1;
            let next_cost = cost + costs.cost(mv);
            if finalized.get(&next).map_or(true, |&best| next_cost < best) {
                frontier.push(Entry {
                    priority: next_cost,
                    state: next,
                    depth: depth + 1,
                });
            }
        }
    }

    debug!(stale, "frontier exhausted");
    info!(event = "search_end", strategy = "ucs", length = -1, expanded, generated);
    Report::not_found(expanded, generated)
}
