//! Error types for CMCI operations.

/// Fixed prefix for every transport, server, or parse failure surfaced by the
/// client. Callers pattern-match on the vendor diagnostic text that follows it
/// (for example "INVALIDPARM", "DUPRES", "NODATA").
pub const CMCI_RESPONSE_ERROR: &str = "Did not receive the expected response from CMCI REST API";

/// Errors that can occur while validating parameters or talking to a CMCI
/// server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmciError {
    /// A required parameter was not supplied at all.
    MissingParameter {
        /// Human-readable label of the parameter, e.g. "CICS Program name".
        label: &'static str,
    },
    /// A required parameter was supplied but is blank.
    BlankParameter {
        /// Human-readable label of the parameter.
        label: &'static str,
    },
    /// The request failed in transport, returned a non-success HTTP status,
    /// returned a non-success CMCI result code, or produced unparseable XML.
    Request {
        /// Server-supplied or transport-supplied diagnostic text.
        details: String,
    },
    /// The underlying HTTP client could not be constructed.
    Client {
        /// Description of the construction failure.
        details: String,
    },
}

impl CmciError {
    /// Wraps diagnostic text in the fixed request-failure message.
    pub fn request<D: Into<String>>(details: D) -> Self {
        CmciError::Request {
            details: details.into(),
        }
    }
}

impl std::fmt::Display for CmciError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingParameter { label } => write!(f, "{} is required", label),
            Self::BlankParameter { label } => {
                write!(f, "Required parameter '{}' must not be blank", label)
            }
            Self::Request { details } => write!(f, "{}: {}", CMCI_RESPONSE_ERROR, details),
            Self::Client { details } => write!(f, "Failed to construct HTTP client: {}", details),
        }
    }
}

impl std::error::Error for CmciError {}

/// Reduces an upstream failure body to the diagnostic text embedded in a
/// request error.
///
/// Some gateways wrap the CMCI diagnostic in a serialized JSON object that
/// carries an internal `stack` field. That field is removed before the payload
/// is surfaced; every sibling field is preserved verbatim. Non-JSON bodies are
/// passed through untouched.
pub fn sanitize_failure_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(mut map)) => {
            map.remove("stack");
            serde_json::Value::Object(map).to_string()
        }
        _ => body.to_string(),
    }
}
