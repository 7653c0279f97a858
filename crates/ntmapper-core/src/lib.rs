//! # ntmapper-core - Core Domain Types
//!
//! Foundation crate for NTMapper. Provides the topology model (devices,
//! ports, cables), the copy-on-write topology store, seed data, error
//! handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, rand).
//!
//! ## Public API
//!
//! ### Topology (`topology`)
//! - [`Topology`] - Immutable snapshot of devices and cables
//! - [`Device`], [`Port`], [`Cable`] - Domain entities
//! - [`ToggleOutcome`] - What a port toggle did
//! - [`CablePolicy`] - Handling of generated cable ids
//!
//! ### Store (`store`)
//! - [`TopologyStore`] - Owns the current snapshot, applies toggles
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ntmapper_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod seed;
pub mod store;
pub mod topology;

/// Prelude for common imports used throughout all NTMapper crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use seed::{seed_cables, seed_devices, seed_topology};
pub use store::TopologyStore;
pub use topology::{
    Cable, CablePolicy, DanglingCableRef, Device, Port, PortStatus, ToggleOutcome, Topology,
    CABLE_ID_PREFIX, FABRICATED_ID_RANGE,
};
