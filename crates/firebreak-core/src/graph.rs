//! Undirected network model
//!
//! Provides an arena-backed graph structure sized once at setup:
//! - Nodes live in a single owned table addressed by [`NodeId`]
//! - Adjacency lists are a cached view of the canonical link list
//! - Link identity is the unordered endpoint pair, indexed by its
//!   canonical `(min, max)` key for O(1) lookup
//! - Only links are ever removed; nodes and exits are fixed for the
//!   process lifetime

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{FirebreakError, Result};

/// Stable node identifier: an index into the network's node table,
/// assigned at construction and never reused
pub type NodeId = usize;

/// An undirected link between two distinct nodes
///
/// Identity is the *unordered* endpoint pair: two links are the same
/// link iff [`Link::canonical`] agrees. Field order is kept as the
/// reporting orientation (see the cut policy), not as an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// First endpoint in reporting order
    pub a: NodeId,
    /// Second endpoint in reporting order
    pub b: NodeId,
}

impl Link {
    /// Create a new link with the given reporting orientation
    pub fn new(a: NodeId, b: NodeId) -> Self {
        Self { a, b }
    }

    /// Get the canonical (ordered) endpoints used for identity and lookup
    pub fn canonical(&self) -> (NodeId, NodeId) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    /// Get the other endpoint of the link given one endpoint
    pub fn other(&self, v: NodeId) -> Option<NodeId> {
        if self.a == v {
            Some(self.b)
        } else if self.b == v {
            Some(self.a)
        } else {
            None
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.a, self.b)
    }
}

/// A node in the network
#[derive(Debug, Clone)]
pub struct Node {
    /// Arena index of this node
    pub id: NodeId,
    /// Whether this node is a designated exit (fixed at construction)
    pub is_exit: bool,
    /// Whether the intruder currently occupies this node
    pub intruder_present: bool,
    links: Vec<NodeId>,
}

impl Node {
    fn new(id: NodeId) -> Self {
        Self {
            id,
            is_exit: false,
            intruder_present: false,
            links: Vec::new(),
        }
    }

    /// Current neighbors of this node
    ///
    /// Order carries no meaning and may be permuted by link removals.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.links
    }

    /// Number of links currently incident to this node
    pub fn degree(&self) -> usize {
        self.links.len()
    }
}

impl fmt::Display for Node {
    /// `3>*(1,2)`: id, `>` marks an exit, `*` marks the intruder,
    /// then the neighbor list
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if self.is_exit {
            write!(f, ">")?;
        }
        if self.intruder_present {
            write!(f, "*")?;
        }
        write!(f, "(")?;
        for (i, neighbor) in self.links.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{neighbor}")?;
        }
        write!(f, ")")
    }
}

/// Snapshot of network shape and degree distribution
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Number of nodes in the network
    pub num_nodes: usize,
    /// Number of remaining links
    pub num_links: usize,
    /// Number of designated exits
    pub num_exits: usize,
    /// Minimum node degree
    pub min_degree: usize,
    /// Maximum node degree
    pub max_degree: usize,
    /// Average node degree
    pub avg_degree: f64,
}

/// The network under containment
///
/// Owns the full node table (fixed size), the canonical link list
/// (shrinks monotonically, links are never re-added), the exit set
/// (fixed subset of nodes) and the intruder's current position.
///
/// # Lifecycle
///
/// Constructed once via [`NetworkBuilder`](crate::NetworkBuilder). Per
/// round, the intruder position is overwritten before any search runs
/// and at most one link is removed afterwards; searches only ever take
/// `&Network`, so no mutation can overlap an in-flight search.
#[derive(Debug, Clone)]
pub struct Network {
    nodes: Vec<Node>,
    links: Vec<Link>,
    link_index: HashMap<(NodeId, NodeId), usize>,
    exits: Vec<NodeId>,
    intruder: Option<NodeId>,
}

impl Network {
    pub(crate) fn with_nodes(count: usize) -> Self {
        Self {
            nodes: (0..count).map(Node::new).collect(),
            links: Vec::new(),
            link_index: HashMap::new(),
            exits: Vec::new(),
            intruder: None,
        }
    }

    pub(crate) fn add_link(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        if a == b || a >= self.nodes.len() || b >= self.nodes.len() {
            return Err(FirebreakError::InvalidLink(a, b));
        }
        let link = Link::new(a, b);
        if self.link_index.contains_key(&link.canonical()) {
            return Err(FirebreakError::DuplicateLink(a, b));
        }
        self.link_index.insert(link.canonical(), self.links.len());
        self.links.push(link);
        self.nodes[a].links.push(b);
        self.nodes[b].links.push(a);
        Ok(())
    }

    pub(crate) fn mark_exit(&mut self, id: NodeId) -> Result<()> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or(FirebreakError::InvalidExit(id))?;
        if !node.is_exit {
            node.is_exit = true;
            self.exits.push(id);
        }
        Ok(())
    }

    /// Number of nodes (fixed for the process lifetime)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of remaining links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Get a node by id
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Current neighbors of a node (empty for an out-of-range id)
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(Node::neighbors).unwrap_or(&[])
    }

    /// Number of links currently incident to a node
    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    /// The designated exit nodes
    pub fn exits(&self) -> &[NodeId] {
        &self.exits
    }

    /// Whether a node is a designated exit
    pub fn is_exit(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.is_exit)
    }

    /// The intruder's current node, if known
    pub fn intruder(&self) -> Option<NodeId> {
        self.intruder
    }

    /// All remaining links
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Whether a link currently connects the two nodes (order-insensitive)
    pub fn has_link(&self, a: NodeId, b: NodeId) -> bool {
        self.link_index.contains_key(&Link::new(a, b).canonical())
    }

    /// Find the stored link connecting the two nodes, if any
    pub fn find_link(&self, a: NodeId, b: NodeId) -> Option<Link> {
        self.link_index
            .get(&Link::new(a, b).canonical())
            .map(|&slot| self.links[slot])
    }

    /// Record the intruder's position for this round
    ///
    /// Clears the flag on the previously occupied node. An out-of-range
    /// value (including a negative sentinel) records "position unknown"
    /// and flags nothing; it is not an error.
    pub fn set_intruder_position(&mut self, raw: i64) {
        if let Some(prev) = self.intruder.take() {
            self.nodes[prev].intruder_present = false;
        }
        if raw >= 0 && (raw as usize) < self.nodes.len() {
            let id = raw as usize;
            self.nodes[id].intruder_present = true;
            self.intruder = Some(id);
        }
    }

    /// Remove a link, keeping both representations consistent
    ///
    /// Both endpoints drop each other from their adjacency lists and the
    /// canonical list drops the unordered pair. Removing an absent link
    /// is a silent no-op: it indicates a logic error upstream, so it is
    /// logged, but it never fails.
    pub fn remove_link(&mut self, link: &Link) {
        let Some(slot) = self.link_index.remove(&link.canonical()) else {
            warn!("remove_link: {link} not found, ignoring");
            return;
        };
        self.detach(link.a, link.b);
        self.detach(link.b, link.a);
        self.links.swap_remove(slot);
        if slot < self.links.len() {
            self.link_index.insert(self.links[slot].canonical(), slot);
        }
    }

    // Drops `to` from `from`'s adjacency list. Swap-remove: neighbor
    // order is not preserved.
    fn detach(&mut self, from: NodeId, to: NodeId) {
        if let Some(node) = self.nodes.get_mut(from) {
            if let Some(pos) = node.links.iter().position(|&n| n == to) {
                node.links.swap_remove(pos);
            }
        }
    }

    /// Get network statistics
    pub fn stats(&self) -> NetworkStats {
        let num_nodes = self.nodes.len();
        if num_nodes == 0 {
            return NetworkStats::default();
        }
        let mut min_degree = usize::MAX;
        let mut max_degree = 0;
        let mut total = 0usize;
        for node in &self.nodes {
            let d = node.degree();
            min_degree = min_degree.min(d);
            max_degree = max_degree.max(d);
            total += d;
        }
        NetworkStats {
            num_nodes,
            num_links: self.links.len(),
            num_exits: self.exits.len(),
            min_degree,
            max_degree,
            avg_degree: total as f64 / num_nodes as f64,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{nodes: [")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, "], links: [")?;
        for (i, link) in self.links.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{link}")?;
        }
        write!(f, "], exits: {:?}}}", self.exits)
    }
}
