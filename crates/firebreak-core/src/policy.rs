//! Cut-selection policy
//!
//! Decides which link to sever each round. Cutting the final link of
//! the shortest route to the nearest exit is the move that most
//! directly lengthens the intruder's remaining distance to every exit;
//! when there is no route to sever, cutting a link next to the intruder
//! at least reduces its future mobility. The policy is a heuristic: it
//! does not guarantee permanent containment or a globally optimal cut.

use tracing::debug;

use crate::error::{FirebreakError, Result};
use crate::graph::{Link, Network, NodeId};
use crate::search::PathOutcome;

/// Pick the link to cut along a pursuit path
///
/// Walks the path from its end toward its start one pair at a time,
/// beginning with the final pair (the link entering the exit). The
/// first pair still connected in the network is selected, oriented
/// closer-to-exit node first. A missing pair normally cannot happen on
/// a fresh path, but stale paths are tolerated: the walk retreats two
/// positions and retries until fewer than two nodes remain.
pub fn cut_from_path(network: &Network, path: &[NodeId]) -> Result<Link> {
    let mut end = path.len();
    while end >= 2 {
        let near_exit = path[end - 1];
        let inner = path[end - 2];
        if network.has_link(near_exit, inner) {
            return Ok(Link::new(near_exit, inner));
        }
        end -= 2;
    }
    Err(FirebreakError::NoCuttableLink)
}

/// Pick an arbitrary link incident to the given node
///
/// The first adjacency entry is as good as any other. Oriented with the
/// given node first.
pub fn cut_from_node(network: &Network, node: NodeId) -> Result<Link> {
    match network.neighbors(node).first() {
        Some(&neighbor) => Ok(Link::new(node, neighbor)),
        None => Err(FirebreakError::NodeIsolated(node)),
    }
}

/// Select the link to cut for a round, chaining primary and fallback
///
/// The primary policy applies to a walkable path; when there is none,
/// or when the primary walk finds no remaining link, the fallback picks
/// a link next to the intruder's current node.
pub fn select_cut(network: &Network, outcome: &PathOutcome) -> Result<Link> {
    let primary = match outcome.as_path() {
        Some(path) => cut_from_path(network, path),
        None => Err(FirebreakError::NoCuttableLink),
    };
    primary.or_else(|err| {
        debug!("primary cut policy failed ({err}), trying intruder-incident link");
        let intruder = network
            .intruder()
            .ok_or(FirebreakError::IntruderUnknown)?;
        cut_from_node(network, intruder)
    })
}
