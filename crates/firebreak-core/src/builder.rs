//! Fluent construction of a [`Network`]

use crate::error::Result;
use crate::graph::{Network, NodeId};

/// Builder for a [`Network`]
///
/// Collects the setup description (node count, links, exits) and
/// validates it as a whole on [`build`](NetworkBuilder::build):
/// endpoints must be in range, self-loops and duplicate links are
/// rejected, exit ids must name existing nodes.
///
/// # Examples
///
/// ```
/// use firebreak_core::NetworkBuilder;
///
/// let network = NetworkBuilder::new(4)
///     .link(0, 1)
///     .link(1, 2)
///     .link(2, 3)
///     .exit(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(network.node_count(), 4);
/// assert_eq!(network.link_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    node_count: usize,
    links: Vec<(NodeId, NodeId)>,
    exits: Vec<NodeId>,
}

impl NetworkBuilder {
    /// Start a builder for a network of `node_count` nodes
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            links: Vec::new(),
            exits: Vec::new(),
        }
    }

    /// Add one undirected link
    pub fn link(mut self, a: NodeId, b: NodeId) -> Self {
        self.links.push((a, b));
        self
    }

    /// Add a batch of undirected links
    pub fn with_links<I>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        self.links.extend(links);
        self
    }

    /// Designate one exit node
    pub fn exit(mut self, id: NodeId) -> Self {
        self.exits.push(id);
        self
    }

    /// Designate a batch of exit nodes
    pub fn with_exits<I>(mut self, exits: I) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        self.exits.extend(exits);
        self
    }

    /// Validate and build the network
    pub fn build(self) -> Result<Network> {
        let mut network = Network::with_nodes(self.node_count);
        for (a, b) in self.links {
            network.add_link(a, b)?;
        }
        for id in self.exits {
            network.mark_exit(id)?;
        }
        Ok(network)
    }
}
