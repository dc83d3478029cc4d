//! # Agent interface crate.
//!
//! Provides the client-side interface to a locally running telemetry agent. The agent is a
//! separate process which accepts telemetry over HTTP and forwards it to the remote platform.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

pub mod telem;

/// Network module
pub mod net;

/// Telemetry reporter
pub mod reporter;
