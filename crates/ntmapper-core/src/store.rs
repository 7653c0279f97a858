//! Topology store: owns the current snapshot and applies mutations
//!
//! The store is the single writer. Readers take an `Arc<Topology>` via
//! [`TopologyStore::snapshot`]; a toggle builds a new snapshot and swaps the
//! `Arc`, so previously handed-out snapshots stay valid and unchanged.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::seed::seed_topology;
use crate::topology::{CablePolicy, ToggleOutcome, Topology};

#[derive(Debug)]
pub struct TopologyStore {
    current: Arc<Topology>,
    /// Incremented on every applied change
    revision: u64,
    policy: CablePolicy,
    rng: StdRng,
}

impl TopologyStore {
    pub fn new(topology: Topology) -> Self {
        Self::with_rng(topology, StdRng::from_entropy())
    }

    /// Store with a deterministic cable-id generator
    pub fn with_rng(topology: Topology, rng: StdRng) -> Self {
        Self {
            current: Arc::new(topology),
            revision: 0,
            policy: CablePolicy::default(),
            rng,
        }
    }

    /// Store seeded with the built-in demo topology
    pub fn with_seed_data() -> Self {
        Self::new(seed_topology())
    }

    pub fn with_policy(mut self, policy: CablePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> CablePolicy {
        self.policy
    }

    /// Shared handle to the current snapshot
    pub fn snapshot(&self) -> Arc<Topology> {
        Arc::clone(&self.current)
    }

    /// Borrow the current snapshot
    pub fn topology(&self) -> &Topology {
        &self.current
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Toggle one port and swap in the resulting snapshot.
    ///
    /// Unknown device or port ids leave the current snapshot in place (the
    /// same `Arc`) and report [`ToggleOutcome::NotFound`].
    pub fn toggle_port(&mut self, device_id: &str, port_id: &str) -> ToggleOutcome {
        let Some((next, outcome)) =
            self.current
                .toggle_port(device_id, port_id, self.policy, &mut self.rng)
        else {
            debug!("toggle ignored, no port {}/{}", device_id, port_id);
            return ToggleOutcome::NotFound {
                device_id: device_id.to_string(),
                port_id: port_id.to_string(),
            };
        };

        if let ToggleOutcome::Connected {
            cable_id,
            fabricated: true,
            ..
        } = &outcome
        {
            if self.policy == CablePolicy::LeaveDangling {
                warn!(
                    "no free cable for {}/{}; attached generated id {} without a cable record",
                    device_id, port_id, cable_id
                );
            }
        }

        self.current = Arc::new(next);
        self.revision += 1;
        info!("{}", outcome.describe());
        outcome
    }
}

impl Default for TopologyStore {
    fn default() -> Self {
        Self::with_seed_data()
    }
}
