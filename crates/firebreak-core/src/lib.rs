//! # Firebreak Core
//!
//! Containment engine for undirected networks: track a mobile intruder,
//! find its shortest route to the nearest exit with one parallel search
//! per exit, and sever one link per round to keep it away.
//!
//! ## Quick Start
//!
//! ```rust
//! use firebreak_core::{Engine, NetworkBuilder};
//!
//! // 0 - 1 - 2 - 3, with node 3 as the exit
//! let network = NetworkBuilder::new(4)
//!     .link(0, 1)
//!     .link(1, 2)
//!     .link(2, 3)
//!     .exit(3)
//!     .build()
//!     .unwrap();
//!
//! let mut engine = Engine::new(network);
//!
//! // intruder observed at node 0: cut the last link of its route
//! let cut = engine.play_round(0).unwrap();
//! assert_eq!((cut.a, cut.b), (3, 2));
//! ```
//!
//! ## Architecture
//!
//! - [`graph`]: arena-backed network model with symmetric link removal
//! - [`builder`]: validated network construction
//! - [`search`]: breadth-first shortest path and the parallel
//!   nearest-exit sweep
//! - [`policy`]: which link to cut, given the sweep's outcome
//! - [`engine`]: the round driver tying the pieces together
//!
//! ## Concurrency
//!
//! Per round, the sweep fans out one bounded search per exit and joins
//! them all before aggregating. Searches take `&Network`; the only
//! mutations (position update, link removal) happen on `&mut Network`
//! strictly between sweeps, so the read/write phases cannot overlap.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod builder;
pub mod engine;
pub mod error;
pub mod graph;
pub mod policy;
pub mod search;

pub use builder::NetworkBuilder;
pub use engine::{Engine, EngineStats};
pub use error::{FirebreakError, Result};
pub use graph::{Link, Network, NetworkStats, Node, NodeId};
pub use policy::{cut_from_node, cut_from_path, select_cut};
pub use search::{nearest_exit, shortest_path, PathOutcome};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Prelude module for convenient imports
pub mod prelude {
    //! Commonly used types and functions

    pub use crate::builder::NetworkBuilder;
    pub use crate::engine::{Engine, EngineStats};
    pub use crate::error::{FirebreakError, Result};
    pub use crate::graph::{Link, Network, NetworkStats, Node, NodeId};
    pub use crate::policy::select_cut;
    pub use crate::search::{nearest_exit, shortest_path, PathOutcome};
}
