//! # Network Module
//!
//! This module provides the HTTP transport used to reach the agent, built on reqwest's blocking
//! client.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

// Export reqwest
pub use reqwest;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Default hostname the agent is expected to be listening on
pub const DEFAULT_AGENT_HOST: &str = "localhost";

/// Default agent TCP port
pub const DEFAULT_AGENT_PORT: u16 = 5000;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Connection parameters for the local agent.
///
/// All fields carry defaults (`localhost:5000`, errors logged), applied both through `Default`
/// and through serde when a field is missing, so a parameter file only needs to name the fields
/// it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentParams {
    /// Hostname or IP address the agent is listening on
    #[serde(default = "default_host")]
    pub host: String,

    /// Agent TCP port
    #[serde(default = "default_port")]
    pub port: u16,

    /// If true, failed sends are reported through the `log` facade
    #[serde(default = "default_log_errors")]
    pub log_errors: bool,
}

/// An HTTP connection target for the agent.
///
/// Creating an endpoint performs no network I/O, the underlying client connects lazily on the
/// first request. Timeout, retry, and pooling behaviour are inherited from reqwest unmodified.
pub struct AgentEndpoint {
    base_url: String,

    client: Client,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Errors raised by a POST to the agent.
#[derive(thiserror::Error, Debug)]
pub enum EndpointError {
    /// The HTTP exchange could not be completed (connection refused, DNS failure, timeout)
    #[error("Could not complete the HTTP exchange with the agent: {0}")]
    Transport(#[from] reqwest::Error),

    /// The exchange completed but the status was outside the accepted range
    #[error("Agent responded with status {status}: {body}")]
    Status { status: u16, body: String },
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl AgentEndpoint {
    /// Create a new endpoint targeting the agent described by `params`.
    pub fn new(params: &AgentParams) -> Self {
        Self {
            base_url: format!("http://{}:{}", params.host, params.port),
            client: Client::new(),
        }
    }

    /// The base URL requests are sent to, e.g. `"http://localhost:5000"`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `body` to `path` (relative to the base URL) with the given content type.
    ///
    /// Success is a response status in the closed interval [200, 300]. Status 300 itself counts
    /// as a success, the agent's accepted range is one wider than the usual 2xx.
    pub fn post(
        &self,
        path: &str,
        body: String,
        content_type: &'static str,
    ) -> Result<(), EndpointError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()?;

        let status = response.status().as_u16();

        if !status_accepted(status) {
            return Err(EndpointError::Status {
                status,
                body: response.text().unwrap_or_default(),
            });
        }

        Ok(())
    }
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_errors: default_log_errors(),
        }
    }
}

// ------------------------------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Check whether a response status counts as a success.
///
/// The accepted range is the closed interval [200, 300], one wider than the usual 2xx.
fn status_accepted(status: u16) -> bool {
    !(status < 200 || status > 300)
}

fn default_host() -> String {
    DEFAULT_AGENT_HOST.into()
}

fn default_port() -> u16 {
    DEFAULT_AGENT_PORT
}

fn default_log_errors() -> bool {
    true
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let params = AgentParams::default();
        assert_eq!(params.host, "localhost");
        assert_eq!(params.port, 5000);
        assert!(params.log_errors);

        // Missing fields fall back to the same defaults when deserialised
        let params: AgentParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.host, "localhost");
        assert_eq!(params.port, 5000);
        assert!(params.log_errors);

        let params: AgentParams = serde_json::from_str("{\"port\": 8080}").unwrap();
        assert_eq!(params.host, "localhost");
        assert_eq!(params.port, 8080);
    }

    #[test]
    fn test_status_accepted() {
        assert!(!status_accepted(100));
        assert!(!status_accepted(199));
        assert!(status_accepted(200));
        assert!(status_accepted(204));
        assert!(status_accepted(299));

        // 300 exactly is still a success
        assert!(status_accepted(300));

        assert!(!status_accepted(301));
        assert!(!status_accepted(404));
        assert!(!status_accepted(500));
    }

    #[test]
    fn test_base_url() {
        let endpoint = AgentEndpoint::new(&AgentParams::default());
        assert_eq!(endpoint.base_url(), "http://localhost:5000");

        let endpoint = AgentEndpoint::new(&AgentParams {
            host: "10.0.0.2".into(),
            port: 8080,
            ..Default::default()
        });
        assert_eq!(endpoint.base_url(), "http://10.0.0.2:8080");
    }
}
