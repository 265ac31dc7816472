//! Named connection profiles.
//!
//! A profile supplies default host, credentials, and region settings for the
//! CLI so they need not be repeated on every invocation. Profiles are plain
//! YAML or JSON files named `<profile>.yaml`/`.yml`/`.json` in the profile
//! directory (`$CICSCTL_PROFILE_DIR`, or `~/.cicsctl` when unset). Explicit
//! command-line flags always override profile values; the merged result is
//! passed into each operation explicitly, never held as global state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::session::Protocol;

/// Environment variable overriding the profile directory.
pub const PROFILE_DIR_ENV: &str = "CICSCTL_PROFILE_DIR";

/// Connection defaults loaded from a profile file. Every field is optional;
/// whatever the profile omits must come from command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// CMCI host name.
    pub host: Option<String>,
    /// CMCI port.
    pub port: Option<u16>,
    /// User ID for basic authentication.
    pub user: Option<String>,
    /// Password for basic authentication.
    pub password: Option<String>,
    /// Scheme used to reach the server.
    pub protocol: Option<Protocol>,
    /// Whether TLS certificate verification is enforced.
    pub reject_unauthorized: Option<bool>,
    /// Default region for operations.
    pub region_name: Option<String>,
    /// Default CICSPlex for operations.
    pub cics_plex: Option<String>,
}

/// Errors raised while locating or reading a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// No profile file with a recognized extension exists for the name.
    NotFound {
        /// Profile name that was requested.
        name: String,
        /// Directory that was searched.
        directory: PathBuf,
    },
    /// The profile file exists but could not be read.
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Description of the failure.
        message: String,
    },
    /// The profile file is not valid YAML or JSON.
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Description of the failure.
        message: String,
    },
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { name, directory } => write!(
                f,
                "Profile '{}' not found in {}",
                name,
                directory.display()
            ),
            Self::Io { path, message } => {
                write!(f, "Failed to read profile {}: {}", path.display(), message)
            }
            Self::Parse { path, message } => {
                write!(f, "Failed to parse profile {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ProfileError {}

impl Profile {
    /// The directory searched for profile files.
    pub fn directory() -> PathBuf {
        if let Ok(dir) = std::env::var(PROFILE_DIR_ENV) {
            return PathBuf::from(dir);
        }
        match std::env::var("HOME") {
            Ok(home) => Path::new(&home).join(".cicsctl"),
            Err(_) => PathBuf::from(".cicsctl"),
        }
    }

    /// Loads the named profile from the profile directory.
    pub fn load(name: &str) -> Result<Profile, ProfileError> {
        let directory = Self::directory();
        for extension in ["yaml", "yml", "json"] {
            let candidate = directory.join(format!("{}.{}", name, extension));
            if candidate.exists() {
                return Self::from_file(&candidate);
            }
        }
        Err(ProfileError::NotFound {
            name: name.to_string(),
            directory,
        })
    }

    /// Loads a profile from an explicit file path, deciding the format from
    /// the extension and falling back to trying both.
    pub fn from_file(path: &Path) -> Result<Profile, ProfileError> {
        let content = std::fs::read_to_string(path).map_err(|e| ProfileError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let file_name = path.to_string_lossy();
        if file_name.ends_with(".json") {
            serde_json::from_str(&content).map_err(|e| ProfileError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        } else if file_name.ends_with(".yaml") || file_name.ends_with(".yml") {
            serde_yml::from_str(&content).map_err(|e| ProfileError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        } else if let Ok(profile) = serde_json::from_str::<Profile>(&content) {
            Ok(profile)
        } else if let Ok(profile) = serde_yml::from_str::<Profile>(&content) {
            Ok(profile)
        } else {
            Err(ProfileError::Parse {
                path: path.to_path_buf(),
                message: "not valid JSON or YAML".to_string(),
            })
        }
    }
}
