//! Generic resource queries.
//!
//! `get_resource` reads any CMCI resource table by name, with optional
//! caller-supplied criteria and parameter expressions. Unlike the named
//! operations, both expressions are treated as opaque user input and
//! percent-encoded before they join the query string.

use crate::error::CmciError;
use crate::http::CmciClient;
use crate::path::CmciPath;
use crate::response::CmciResponse;
use crate::validation::required;

const RESOURCE_NAME: &str = "CICS Resource name";
const REGION_NAME: &str = "CICS Region name";

/// Parameters for a generic resource query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceQueryParms {
    /// CMCI resource table name, e.g. "CICSProgram" or "CICSLocalFile".
    pub resource_name: Option<String>,
    /// Region the request addresses.
    pub region_name: Option<String>,
    /// CICSPlex the region belongs to, when addressed through one.
    pub cics_plex: Option<String>,
    /// Filter expression, e.g. `PROGRAM=PGM*`; percent-encoded when sent.
    pub criteria: Option<String>,
    /// Refinement expression, e.g. `CSDGROUP(GRP1)`; percent-encoded when
    /// sent.
    pub parameter: Option<String>,
}

/// Reads records of an arbitrary resource type.
pub async fn get_resource(
    client: &CmciClient,
    parms: &ResourceQueryParms,
) -> Result<CmciResponse, CmciError> {
    let resource_name = required(parms.resource_name.as_deref(), RESOURCE_NAME)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let mut resource_path = CmciPath::new(resource_name, parms.cics_plex.as_deref(), region);
    if let Some(criteria) = parms.criteria.as_deref() {
        resource_path = resource_path.criteria(criteria);
    }
    if let Some(parameter) = parms.parameter.as_deref() {
        resource_path = resource_path.parameter(parameter);
    }
    client.get(&resource_path.build()).await
}
