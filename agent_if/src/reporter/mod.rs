//! # Telemetry Reporter
//!
//! This module provides the client used to publish telemetry to a locally running agent.
//!
//! The reporter is fully synchronous: every send blocks the calling thread until the agent's
//! response (or a transport error) arrives, and the outcome is reported as a plain `bool`.
//! Failed sends are never retried or queued.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::error;

use crate::{
    net::{AgentEndpoint, AgentParams, EndpointError},
    telem::{escape_key, Pose, TelemValue},
};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Client that publishes key-value telemetry and pose to the agent.
///
/// A reporter holds a single underlying HTTP client for its lifetime. Concurrent sends on one
/// reporter from multiple threads are not supported, callers must serialise access (or give
/// each thread its own reporter, reporters never share transport state).
///
/// Send failures are handed to the reporter's [`ErrorSink`] and surfaced to the caller as
/// `false`. The return value carries no further detail, callers that need the failure reason
/// should install a `Custom` sink.
pub struct TelemReporter {
    endpoint: AgentEndpoint,

    error_sink: ErrorSink,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Destination for send-failure diagnostics.
///
/// The sink is owned by the reporter instance, there is no process-global error stream.
pub enum ErrorSink {
    /// Discard failures
    Off,

    /// Report failures through the `log` facade at error level
    Log,

    /// Hand each failure to the given callback
    Custom(Box<dyn Fn(&EndpointError) + Send>),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl TelemReporter {
    /// Create a new reporter targeting the agent described by `params`.
    ///
    /// No network I/O is performed here, the connection is established on the first send.
    /// `params.log_errors` selects between the `Log` and `Off` sinks.
    pub fn new(params: &AgentParams) -> Self {
        let error_sink = match params.log_errors {
            true => ErrorSink::Log,
            false => ErrorSink::Off,
        };

        Self::with_error_sink(params, error_sink)
    }

    /// Create a new reporter with an explicit error sink. `params.log_errors` is ignored.
    pub fn with_error_sink(params: &AgentParams, error_sink: ErrorSink) -> Self {
        Self {
            endpoint: AgentEndpoint::new(params),
            error_sink,
        }
    }

    /// Send a key-value pair.
    ///
    /// Every `/` in the key is replaced with `_` before the key is used in the URL path. The
    /// value may be a string, integer, or float (anything with an `Into<TelemValue>` impl) and
    /// is transmitted as its canonical wire string.
    ///
    /// Returns `true` if the agent accepted the data, `false` on any failure.
    pub fn send_key_value<V>(&self, key: &str, value: V) -> bool
    where
        V: Into<TelemValue>,
    {
        self.post(
            &format!("/api/v1/data/{}", escape_key(key)),
            value.into().to_wire_string(),
            "text/plain",
        )
    }

    /// Send the robot pose.
    ///
    /// The attitude quaternion is transmitted verbatim, it is the caller's responsibility to
    /// normalise it if the platform expects a unit quaternion.
    ///
    /// Returns `true` if the agent accepted the pose, `false` on any failure.
    pub fn send_pose(&self, pose: &Pose) -> bool {
        self.post("/api/v1/pose", pose.to_json(), "application/json")
    }

    /// POST a body to the agent, routing any failure into the error sink.
    fn post(&self, path: &str, body: String, content_type: &'static str) -> bool {
        match self.endpoint.post(path, body, content_type) {
            Ok(()) => true,
            Err(e) => {
                self.error_sink.report(&e);
                false
            }
        }
    }
}

impl ErrorSink {
    fn report(&self, e: &EndpointError) {
        match self {
            ErrorSink::Off => (),
            ErrorSink::Log => error!("Telemetry send failed: {}", e),
            ErrorSink::Custom(callback) => callback(e),
        }
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
