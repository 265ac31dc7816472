//! CMCI resource path construction.
//!
//! Every request addresses
//! `/CICSSystemManagement/<resourceType>/[<plex>/]<region>` with optional
//! `CRITERIA` and `PARAMETER` query items. The CICSPlex segment is tri-state:
//! omitted entirely when no plex is configured, present-but-empty when the
//! caller supplies a blank plex (the server distinguishes the two), or a
//! plex name. Callers therefore hand the plex in as `Option<&str>` and never
//! default it to an empty string.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Management scope segment that prefixes every resource path.
pub const CICS_SYSTEM_MANAGEMENT: &str = "CICSSystemManagement";

/// Program definition resource type.
pub const CICS_DEFINITION_PROGRAM: &str = "CICSDefinitionProgram";
/// Transaction definition resource type.
pub const CICS_DEFINITION_TRANSACTION: &str = "CICSDefinitionTransaction";
/// URIMap definition resource type.
pub const CICS_DEFINITION_URIMAP: &str = "CICSDefinitionURIMap";
/// Web service definition resource type.
pub const CICS_DEFINITION_WEBSERVICE: &str = "CICSDefinitionWebService";
/// Installed program resource type.
pub const CICS_PROGRAM: &str = "CICSProgram";
/// Installed local transaction resource type.
pub const CICS_LOCAL_TRANSACTION: &str = "CICSLocalTransaction";
/// Installed URIMap resource type.
pub const CICS_URIMAP: &str = "CICSURIMap";
/// CSD group resource type.
pub const CICS_CSDGROUP: &str = "CICSCSDGroup";
/// CSD group list-membership resource type.
pub const CICS_CSDGROUP_IN_LIST: &str = "CICSCSDGroupInList";

/// Characters left unencoded by [`encode_uri_component`]: ASCII alphanumerics
/// plus `-`, `_`, `.`, `~`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a criteria or parameter expression as a URI component.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Builder for a CMCI resource path with optional query items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmciPath {
    path: String,
    has_query: bool,
}

impl CmciPath {
    /// Starts a path for the given resource type, optional CICSPlex, and
    /// region.
    pub fn new(resource_type: &str, cics_plex: Option<&str>, region_name: &str) -> Self {
        let path = match cics_plex {
            Some(plex) => format!(
                "/{}/{}/{}/{}",
                CICS_SYSTEM_MANAGEMENT, resource_type, plex, region_name
            ),
            None => format!("/{}/{}/{}", CICS_SYSTEM_MANAGEMENT, resource_type, region_name),
        };
        Self {
            path,
            has_query: false,
        }
    }

    /// Appends a caller-supplied filter expression, percent-encoded and
    /// wrapped in parentheses: `?CRITERIA=(<encoded>)`.
    pub fn criteria(self, expression: &str) -> Self {
        let wrapped = format!("({})", encode_uri_component(expression));
        self.append("CRITERIA", &wrapped)
    }

    /// Appends a programmatically built filter expression verbatim. The
    /// expression must already be parenthesized, e.g. `(NAME=PGM1)` or
    /// `(CSDLIST=='L')%20AND%20(CSDGROUP=='G')`.
    pub fn raw_criteria(self, expression: &str) -> Self {
        self.append("CRITERIA", expression)
    }

    /// Appends a caller-supplied refinement expression, percent-encoded.
    pub fn parameter(self, expression: &str) -> Self {
        let encoded = encode_uri_component(expression);
        self.append("PARAMETER", &encoded)
    }

    /// Appends a programmatically built refinement expression verbatim, e.g.
    /// `CSDGROUP(GRP1)`.
    pub fn raw_parameter(self, expression: &str) -> Self {
        self.append("PARAMETER", expression)
    }

    fn append(mut self, key: &str, value: &str) -> Self {
        self.path.push(if self.has_query { '&' } else { '?' });
        self.path.push_str(key);
        self.path.push('=');
        self.path.push_str(value);
        self.has_query = true;
        self
    }

    /// Finishes the path. Without any criteria or parameter the resource path
    /// is returned unmodified, with no trailing `?`.
    pub fn build(self) -> String {
        self.path
    }
}

/// Builds the `(NAME=<name>)`-style equality criteria used by delete,
/// install, and discard calls.
pub fn name_criteria(field: &str, name: &str) -> String {
    format!("({}={})", field, name)
}

/// Builds the `CSDGROUP(<group>)` refinement used alongside name criteria on
/// definition calls.
pub fn csd_group_parameter(csd_group: &str) -> String {
    format!("CSDGROUP({})", csd_group)
}

/// Builds the quoted two-clause membership criteria used for CSD list
/// lookups, joined with an encoded AND separator.
pub fn list_membership_criteria(csd_list: &str, csd_group: &str) -> String {
    format!("(CSDLIST=='{}')%20AND%20(CSDGROUP=='{}')", csd_list, csd_group)
}
