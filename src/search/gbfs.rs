use std::collections::{BinaryHeap, HashSet};

use tracing::{info, trace};

use super::{Entry, Report};
use crate::{
    board::State,
    error::Result,
    heuristic::{Heuristic, Manhattan},
    moves::successors,
};

/// Greedy best-first search guided by Manhattan distance.
pub fn gbfs(start: &State, goal: &State) -> Result<Report> {
    gbfs_with(start, goal, &Manhattan)
}

/// Greedy best-first search: always expands the frontier state the heuristic
/// puts closest to `goal`, ties going to the lower state identifier.
///
/// The returned length is the depth at which the goal was popped and is not
/// necessarily minimal. No move costs are involved.
///
/// The heuristic is evaluated on `start` before anything is expanded, so a
/// goal missing one of the start's tiles is reported as `TileNotFound` up
/// front rather than after exhausting the state space.
pub fn gbfs_with<H: Heuristic>(start: &State, goal: &State, heuristic: &H) -> Result<Report> {
    let estimate = heuristic.estimate(start, goal)?;

    info!(
        event = "search_start",
        strategy = "gbfs",
        start = %start,
        goal = %goal,
        estimate,
    );

    if start == goal {
        info!(event = "search_end", strategy = "gbfs", length = 0, expanded = 0);
        return Ok(Report::found(0, *start, 0, 0));
    }

    let mut frontier = BinaryHeap::new();
    let mut visited = HashSet::new();
    let mut expanded = 0;
    let mut generated = 0;

    frontier.push(Entry {
        priority: estimate,
        state: *start,
        depth: 0,
    });
    visited.insert(*start);

    while let Some(Entry {
        priority,
        state,
        depth,
    }) = frontier.pop()
    {
        if state == *goal {
            info!(
                event = "search_end",
                strategy = "gbfs",
                length = depth,
                expanded,
                generated,
            );
            return Ok(Report::found(depth, state, expanded, generated));
        }

        trace!(state = %state, estimate = priority, depth, "expanding");
        expanded += 1;

        for (_, next) in successors(&state) {
            generated += 1;
            if visited.insert(next) {
                frontier.push(Entry {
                    priority: heuristic.estimate(&next, goal)?,
                    state: next,
                    depth: depth + 1,
                });
            }
        }
    }

    info!(event = "search_end", strategy = "gbfs", length = -1, expanded, generated);
    Ok(Report::not_found(expanded, generated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, heuristic::MisplacedTiles, search::Outcome};

    fn s(id: &str) -> State {
        State::new(id).unwrap()
    }

    #[test]
    fn identical_start_and_goal() {
        let state = s("8672543#1");
        let report = gbfs(&state, &state).unwrap();
        assert_eq!(report.length(), Some(0));
        assert_eq!(report.expanded, 0);
    }

    #[test]
    fn follows_the_heuristic_straight_home() {
        let goal = s("12345678#");
        let report = gbfs(&s("1#2453786"), &goal).unwrap();
        assert_eq!(report.outcome, Outcome::Found { length: 3, goal });
        // each step strictly lowers the distance, so nothing else is expanded
        assert_eq!(report.expanded, 3);
    }

    #[test]
    fn one_move_away() {
        let goal = s("12345678#");
        let report = gbfs(&s("1234567#8"), &goal).unwrap();
        assert_eq!(report.length(), Some(1));
        assert_eq!(report.expanded, 1);
    }

    #[test]
    fn solves_the_hardest_instance() {
        let report = gbfs(&s("8672543#1"), &s("12345678#")).unwrap();
        assert!(report.length().unwrap() >= 31);
    }

    #[test]
    fn mismatched_tiles_fail_before_expanding() {
        let err = gbfs(&s("12345678#"), &s("1234567x#")).unwrap_err();
        assert!(matches!(err, Error::TileNotFound { tile: '8', .. }));

        let err = gbfs_with(&s("abcdefgh#"), &s("12345678#"), &MisplacedTiles).unwrap_err();
        assert!(matches!(err, Error::TileNotFound { tile: 'a', .. }));
    }

    #[test]
    fn misplaced_tiles_heuristic_also_solves() {
        let goal = s("12345678#");
        let report = gbfs_with(&s("1#2453786"), &goal, &MisplacedTiles).unwrap();
        assert_eq!(report.length(), Some(3));
    }

    #[test]
    fn odd_permutation_is_unreachable() {
        let report = gbfs(&s("21345678#"), &s("12345678#")).unwrap();
        assert_eq!(report.outcome, Outcome::NotFound);
        assert_eq!(report.expanded, 181_440);
    }
}
