//! Per-dispatch request values and the bridge envelope.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

impl FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("GET") {
            Ok(Method::Get)
        } else if s.eq_ignore_ascii_case("POST") {
            Ok(Method::Post)
        } else {
            Err(())
        }
    }
}

/// Ephemeral value created for a single dispatch and destroyed when it
/// resolves. No two dispatches ever share one.
#[derive(Debug, Clone)]
pub struct Request {
    /// The path as delivered by the bridge, query string included.
    pub raw_path: String,
    /// The path with the query stripped.
    pub path: String,
    pub method: Method,
    /// Named parameters bound by the matched pattern.
    pub params: HashMap<String, String>,
    /// Flat query key/value map.
    pub query: HashMap<String, String>,
    /// Caller-supplied body; only attached for POST dispatches.
    pub body: Option<serde_json::Value>,
}

/// The envelope the IPC bridge delivers for each call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeMessage {
    pub path: String,
    pub method: Method,
    #[serde(default)]
    pub body: Option<serde_json::Value>,
}

impl BridgeMessage {
    /// Parse a bridge message from raw JSON. Malformed input is rejected,
    /// not an error; the bridge logs and drops it.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}
