//! Round driver
//!
//! Orchestrates one containment round: record the intruder's position,
//! run the pursuit sweep, select a cut, apply it. Every error is
//! resolved at the round boundary: a failed round produces no cut and
//! the engine keeps playing.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::graph::{Link, Network};
use crate::policy::select_cut;
use crate::search::nearest_exit;

/// Counters describing an engine's activity so far
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineStats {
    /// Rounds played, successful or not
    pub rounds: u64,
    /// Links actually severed
    pub cuts: u64,
    /// Rounds that ended without a cut
    pub failed_rounds: u64,
    /// Average wall-clock time per round in microseconds
    pub avg_round_time_us: f64,
}

/// The containment engine
///
/// Owns the [`Network`] for the process lifetime and mutates it exactly
/// once per successful round. The pursuit sweep runs against a shared
/// borrow, so the mutation phases (position update, link removal) can
/// never overlap an in-flight search.
pub struct Engine {
    network: Network,
    round: u64,
    stats: Arc<RwLock<EngineStats>>,
}

impl Engine {
    /// Create an engine over a freshly built network
    pub fn new(network: Network) -> Self {
        Self {
            network,
            round: 0,
            stats: Arc::new(RwLock::new(EngineStats::default())),
        }
    }

    /// The network in its current state
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Rounds played so far
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Snapshot of the engine's counters
    pub fn stats(&self) -> EngineStats {
        self.stats.read().clone()
    }

    /// Shared handle to the engine's counters
    ///
    /// Lets an observer watch progress while the engine keeps playing.
    pub fn stats_handle(&self) -> Arc<RwLock<EngineStats>> {
        Arc::clone(&self.stats)
    }

    /// Play one round
    ///
    /// `raw_position` is the intruder's reported node index; any
    /// out-of-range value means "unknown this round". On success the
    /// returned link has already been removed from the network and is
    /// oriented for reporting (closer-to-exit endpoint first for a path
    /// cut, intruder's node first for a fallback cut).
    ///
    /// # Errors
    ///
    /// Round failures ([`FirebreakError::IntruderUnknown`],
    /// [`FirebreakError::NoCuttableLink`],
    /// [`FirebreakError::NodeIsolated`]) mean no link was cut this
    /// round. They never poison the engine; the next round proceeds
    /// normally.
    ///
    /// [`FirebreakError::IntruderUnknown`]: crate::FirebreakError::IntruderUnknown
    /// [`FirebreakError::NoCuttableLink`]: crate::FirebreakError::NoCuttableLink
    /// [`FirebreakError::NodeIsolated`]: crate::FirebreakError::NodeIsolated
    pub fn play_round(&mut self, raw_position: i64) -> Result<Link> {
        let started = Instant::now();
        self.round += 1;
        self.network.set_intruder_position(raw_position);
        debug!("round {}: {}", self.round, self.network);

        let result = self.act();
        match &result {
            Ok(link) => debug!("round {}: cut {}", self.round, link),
            Err(err) => warn!("round {}: no cut ({err})", self.round),
        }

        self.record(started, result.is_ok());
        result
    }

    fn act(&mut self) -> Result<Link> {
        let outcome = nearest_exit(&self.network)?;
        debug!("pursuit outcome: {outcome:?}");
        let link = select_cut(&self.network, &outcome)?;
        self.network.remove_link(&link);
        Ok(link)
    }

    fn record(&self, started: Instant, cut: bool) {
        let elapsed_us = started.elapsed().as_secs_f64() * 1e6;
        let mut stats = self.stats.write();
        stats.rounds += 1;
        if cut {
            stats.cuts += 1;
        } else {
            stats.failed_rounds += 1;
        }
        let n = stats.rounds as f64;
        stats.avg_round_time_us = (stats.avg_round_time_us * (n - 1.0) + elapsed_us) / n;
    }
}
