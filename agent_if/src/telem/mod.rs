//! # Telemetry Module
//!
//! This module provides the telemetry data types that can be sent to the agent, along with their
//! wire encodings.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// The pose (position and attitude) of the robot in a named reference frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Label identifying the frame of reference the pose is expressed in. Passed to the agent
    /// verbatim and may be empty.
    pub frame_id: String,

    /// The position in the reference frame
    pub position_m: [f64; 3],

    /// The attitude of the robot in the reference frame, as an (i, j, k, w) quaternion. Sent
    /// verbatim, no normalisation is performed.
    pub attitude_q: [f64; 4],
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// The value half of a key-value telemetry pair.
///
/// Values are strings, integers, or floating point numbers. `From` impls are provided for the
/// common primitive types so call sites can hand any of them straight to the reporter.
#[derive(Debug, Clone, PartialEq)]
pub enum TelemValue {
    /// A string value, transmitted verbatim
    Text(String),

    /// An integer value
    Int(i64),

    /// A floating point value
    Float(f64),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl TelemValue {
    /// Get the canonical wire string for this value.
    ///
    /// The body sent to the agent is this bare string, not JSON. Integers encode as plain
    /// decimal, floats always carry six fractional digits (`0.56` encodes as `"0.560000"`),
    /// strings are passed through untouched.
    pub fn to_wire_string(&self) -> String {
        match self {
            TelemValue::Text(s) => s.clone(),
            TelemValue::Int(i) => i.to_string(),
            TelemValue::Float(f) => format!("{:.6}", f),
        }
    }
}

impl From<&str> for TelemValue {
    fn from(value: &str) -> Self {
        TelemValue::Text(value.into())
    }
}

impl From<String> for TelemValue {
    fn from(value: String) -> Self {
        TelemValue::Text(value)
    }
}

impl From<i64> for TelemValue {
    fn from(value: i64) -> Self {
        TelemValue::Int(value)
    }
}

impl From<i32> for TelemValue {
    fn from(value: i32) -> Self {
        TelemValue::Int(value as i64)
    }
}

impl From<f64> for TelemValue {
    fn from(value: f64) -> Self {
        TelemValue::Float(value)
    }
}

impl From<f32> for TelemValue {
    fn from(value: f32) -> Self {
        TelemValue::Float(value as f64)
    }
}

impl Pose {
    /// Create a new pose in the given reference frame.
    pub fn new(frame_id: &str, position_m: [f64; 3], attitude_q: [f64; 4]) -> Self {
        Self {
            frame_id: frame_id.into(),
            position_m,
            attitude_q,
        }
    }

    /// Build the JSON body for the agent's pose endpoint.
    ///
    /// Numeric fields use the same fixed six-decimal encoding as key-value floats, embedded
    /// directly without quoting. The byte layout of the body is part of the wire contract and
    /// is pinned by regression tests.
    pub fn to_json(&self) -> String {
        format!(
            "{{ \"frame_id\": {}, \"x\": {:.6}, \"y\": {:.6}, \"z\": {:.6}, \
             \"q\": {{ \"x\": {:.6}, \"y\": {:.6}, \"z\": {:.6}, \"w\": {:.6}  }} }}",
            serde_json::Value::String(self.frame_id.clone()),
            self.position_m[0],
            self.position_m[1],
            self.position_m[2],
            self.attitude_q[0],
            self.attitude_q[1],
            self.attitude_q[2],
            self.attitude_q[3]
        )
    }
}

// ------------------------------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Escape a telemetry key for use in the data URL path.
///
/// Every `/` in the key is replaced with `_`, nothing else is altered.
pub fn escape_key(key: &str) -> String {
    key.replace('/', "_")
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
