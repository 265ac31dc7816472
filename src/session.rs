//! Connection configuration for a CMCI server.
//!
//! A session carries the immutable host, credentials, and TLS settings for a
//! CICS region's management interface. It is supplied by the caller on client
//! construction and shared by every request; no state accumulates across
//! calls.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scheme used to reach the CMCI server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Plain HTTP.
    Http,
    /// HTTP over TLS.
    #[default]
    Https,
}

impl Display for Protocol {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Protocol::Http => write!(f, "http"),
            Protocol::Https => write!(f, "https"),
        }
    }
}

/// Error returned when a protocol string is neither "http" nor "https".
#[derive(Debug, PartialEq, Eq)]
pub struct ProtocolParseError {
    input: String,
}

impl Display for ProtocolParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Invalid protocol '{}': expected 'http' or 'https'",
            self.input
        )
    }
}

impl std::error::Error for ProtocolParseError {}

impl FromStr for Protocol {
    type Err = ProtocolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            _ => Err(ProtocolParseError {
                input: s.to_string(),
            }),
        }
    }
}

/// Connection settings for one CMCI server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmciSession {
    /// Host name or address of the CMCI server.
    pub host: String,
    /// CMCI port.
    pub port: u16,
    /// User ID for basic authentication.
    pub user: String,
    /// Password for basic authentication.
    pub password: String,
    /// Scheme used to reach the server.
    pub protocol: Protocol,
    /// When false, TLS certificate verification is skipped.
    pub reject_unauthorized: bool,
}

impl CmciSession {
    /// Creates a session with the default protocol (https) and certificate
    /// verification enabled.
    pub fn new(host: impl Into<String>, port: u16, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
            protocol: Protocol::default(),
            reject_unauthorized: true,
        }
    }

    /// Sets the scheme.
    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Sets whether TLS certificate verification is enforced.
    pub fn reject_unauthorized(mut self, reject: bool) -> Self {
        self.reject_unauthorized = reject;
        self
    }

    /// Origin portion of every request URL, e.g. `https://host:1490`.
    pub fn origin(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}
