//! Generic parameters functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::de::DeserializeOwned;
use std::fs::read_to_string;
use std::path::Path;
use thiserror::Error;
use toml;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// An error that occurs during loading of a parameter file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot load the parmeter file: {0}")]
    FileLoadError(std::io::Error),

    #[error("Cannot read the parameter file: {0}")]
    DeserialiseError(toml::de::Error),
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Load a parameter file
///
/// Parameter structs are expected to provide serde defaults for any field
/// that may be omitted from the file, so a file only names overrides.
pub fn load<P>(param_file_path: &Path) -> Result<P, LoadError>
where
    P: DeserializeOwned,
{
    // Load the file into a string
    let params_str = match read_to_string(param_file_path) {
        Ok(s) => s,
        Err(e) => return Err(LoadError::FileLoadError(e)),
    };

    // Parse the string into the parameter struct
    match toml::from_str(params_str.as_str()) {
        Ok(p) => Ok(p),
        Err(e) => Err(LoadError::DeserialiseError(e)),
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use agent_if::net::AgentParams;

    #[test]
    fn test_load_agent_params() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent.toml");

        // An empty file gives all defaults
        std::fs::write(&path, "").unwrap();
        let params: AgentParams = load(&path).unwrap();
        assert_eq!(params.host, "localhost");
        assert_eq!(params.port, 5000);
        assert!(params.log_errors);

        // Named fields override their defaults
        std::fs::write(&path, "host = \"10.0.0.2\"\nport = 8080\nlog_errors = false\n").unwrap();
        let params: AgentParams = load(&path).unwrap();
        assert_eq!(params.host, "10.0.0.2");
        assert_eq!(params.port, 8080);
        assert!(!params.log_errors);
    }

    #[test]
    fn test_load_errors() {
        let res: Result<AgentParams, _> = load(Path::new("/nonexistent/agent.toml"));
        assert!(matches!(res, Err(LoadError::FileLoadError(_))));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent.toml");
        std::fs::write(&path, "port = \"not a number\"\n").unwrap();
        let res: Result<AgentParams, _> = load(&path);
        assert!(matches!(res, Err(LoadError::DeserialiseError(_))));
    }
}
