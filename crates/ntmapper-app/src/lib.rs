//! ntmapper-app - Application state and orchestration for NTMapper
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the Engine shared by the TUI and headless runners, the scan
//! simulator, the registration form and configuration loading.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod register_form;
pub mod scan;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use register_form::{FormField, RegisterForm};
pub use scan::{ScanSimulator, ScanState};
pub use state::{ActiveView, AppPhase, AppState};
