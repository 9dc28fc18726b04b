//! RDPTrace Session Reconstruction Engine — deterministic, rule-based.
//!
//! Rebuilds user remote-desktop sessions from heterogeneous Windows
//! event-log records and attaches administratively significant events
//! (account creation, privilege changes, service/task installs, log
//! clearing) to the sessions they most plausibly belong to.
//!
//! No AI, no DB, no network; pure computation + in-memory state.

pub mod config;
pub mod correlate;
pub mod engine;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod markers;
pub mod normalize;
pub mod sessions;
pub mod timeline;
pub mod types;

pub use config::Config;
pub use engine::Engine;
pub use error::EngineError;
pub use types::{EventRecord, InboundRecord, Reconstruction, Session};
