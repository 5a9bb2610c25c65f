//! Shortest-path search and the parallel pursuit sweep
//!
//! - [`shortest_path`]: single-source single-target breadth-first search
//! - [`nearest_exit`]: one search per exit, fanned out with rayon and
//!   merged to the minimum-length path
//!
//! Both operate on `&Network`: searches never mutate shared graph state,
//! so a whole sweep can run against one immutable borrow.

use std::collections::VecDeque;

use rayon::prelude::*;
use tracing::debug;

use crate::error::{FirebreakError, Result};
use crate::graph::{Network, NodeId};

/// Outcome of a shortest-path search
///
/// The zero-length cases are deliberately distinct: standing on the
/// target is not the same as failing to reach it, even though neither
/// yields a path to walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Start and target are the same node; there is nothing to traverse
    AlreadyThere,
    /// No remaining route connects start and target
    Unreachable,
    /// Ordered node sequence from start to target inclusive
    Path(Vec<NodeId>),
}

impl PathOutcome {
    /// Number of links along the path (zero for the non-path cases)
    pub fn link_len(&self) -> usize {
        match self {
            PathOutcome::Path(path) => path.len().saturating_sub(1),
            _ => 0,
        }
    }

    /// The node sequence, if this outcome carries one
    pub fn as_path(&self) -> Option<&[NodeId]> {
        match self {
            PathOutcome::Path(path) => Some(path),
            _ => None,
        }
    }

    /// Whether this outcome carries a walkable path
    pub fn is_path(&self) -> bool {
        matches!(self, PathOutcome::Path(_))
    }
}

/// Find a shortest path between two nodes by breadth-first search
///
/// Records a BFS parent for every node on first discovery; the start
/// node is never re-enqueued. The search stops as soon as the target's
/// parent is known, or when the frontier is exhausted. Given the same
/// adjacency order the result is deterministic, but removals permute
/// adjacency order, so equally short paths may differ between runs.
pub fn shortest_path(network: &Network, start: NodeId, end: NodeId) -> PathOutcome {
    if start == end {
        return PathOutcome::AlreadyThere;
    }
    let count = network.node_count();
    if start >= count || end >= count {
        return PathOutcome::Unreachable;
    }

    const UNDISCOVERED: NodeId = NodeId::MAX;
    let mut parent = vec![UNDISCOVERED; count];
    let mut queue = VecDeque::new();
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        for &next in network.neighbors(current) {
            if next != start && parent[next] == UNDISCOVERED {
                parent[next] = current;
                queue.push_back(next);
            }
        }
        if parent[end] != UNDISCOVERED {
            break;
        }
    }
    if parent[end] == UNDISCOVERED {
        return PathOutcome::Unreachable;
    }

    // walk the parent chain back from the target; it terminates at the
    // start, whose parent was never set
    let mut path = vec![end];
    let mut cursor = end;
    while parent[cursor] != UNDISCOVERED {
        cursor = parent[cursor];
        path.push(cursor);
    }
    path.reverse();
    PathOutcome::Path(path)
}

/// Find the shortest path from the intruder to the nearest reachable exit
///
/// Spawns one [`shortest_path`] search per exit and joins them all
/// before merging; completion order does not affect the result. Among
/// walkable paths the fewest-link one wins, ties broken by collection
/// order. A zero-length result (`AlreadyThere`) is reported only when no
/// exit is reachable by an actual path, matching the merge's preference
/// for something to cut.
///
/// # Errors
///
/// [`FirebreakError::IntruderUnknown`] if no intruder position has been
/// recorded, returned before any search is spawned.
pub fn nearest_exit(network: &Network) -> Result<PathOutcome> {
    let start = network
        .intruder()
        .ok_or(FirebreakError::IntruderUnknown)?;
    let exits = network.exits();
    if exits.is_empty() {
        return Ok(PathOutcome::Unreachable);
    }
    debug!("{} paths to compute", exits.len());

    let outcomes: Vec<PathOutcome> = exits
        .par_iter()
        .map(|&exit| shortest_path(network, start, exit))
        .collect();

    let mut best: Option<Vec<NodeId>> = None;
    let mut at_exit = false;
    for outcome in outcomes {
        match outcome {
            PathOutcome::AlreadyThere => at_exit = true,
            PathOutcome::Unreachable => {}
            PathOutcome::Path(path) => {
                if best.as_ref().map_or(true, |b| path.len() < b.len()) {
                    best = Some(path);
                }
            }
        }
    }
    Ok(match best {
        Some(path) => PathOutcome::Path(path),
        None if at_exit => PathOutcome::AlreadyThere,
        None => PathOutcome::Unreachable,
    })
}
