//! Program definition and runtime-program operations.

use crate::error::CmciError;
use crate::http::CmciClient;
use crate::path::{self, CICS_DEFINITION_PROGRAM, CICS_PROGRAM, CmciPath};
use crate::request::{self, ACTION_CSDINSTALL, ACTION_NEWCOPY};
use crate::response::CmciResponse;
use crate::validation::required;

const PROGRAM_NAME: &str = "CICS Program name";
const CSD_GROUP: &str = "CICS CSD Group name";
const REGION_NAME: &str = "CICS Region name";

/// Parameters for program operations.
///
/// Required fields are optional at the type level so that a never-supplied
/// parameter and a supplied-but-blank one produce their distinct validation
/// messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramParms {
    /// Program name.
    pub name: Option<String>,
    /// CSD group holding the definition.
    pub csd_group: Option<String>,
    /// Region the request addresses.
    pub region_name: Option<String>,
    /// CICSPlex the region belongs to, when addressed through one.
    pub cics_plex: Option<String>,
    /// Definition description, sent only when present.
    pub description: Option<String>,
}

/// Defines a new program in a CSD group.
pub async fn define_program(
    client: &CmciClient,
    parms: &ProgramParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), PROGRAM_NAME)?;
    let csd_group = required(parms.csd_group.as_deref(), CSD_GROUP)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let mut attributes = vec![("name", name), ("csdgroup", csd_group)];
    if let Some(description) = parms.description.as_deref() {
        attributes.push(("description", description));
    }
    let body = request::create_request(&attributes);
    let resource_path =
        CmciPath::new(CICS_DEFINITION_PROGRAM, parms.cics_plex.as_deref(), region).build();
    client.post(&resource_path, &body).await
}

/// Deletes a program definition from its CSD group.
pub async fn delete_program(
    client: &CmciClient,
    parms: &ProgramParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), PROGRAM_NAME)?;
    let csd_group = required(parms.csd_group.as_deref(), CSD_GROUP)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let resource_path = CmciPath::new(CICS_DEFINITION_PROGRAM, parms.cics_plex.as_deref(), region)
        .raw_criteria(&path::name_criteria("NAME", name))
        .raw_parameter(&path::csd_group_parameter(csd_group))
        .build();
    client.delete(&resource_path, None).await
}

/// Installs a defined program into the running region.
pub async fn install_program(
    client: &CmciClient,
    parms: &ProgramParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), PROGRAM_NAME)?;
    let csd_group = required(parms.csd_group.as_deref(), CSD_GROUP)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let resource_path = CmciPath::new(CICS_DEFINITION_PROGRAM, parms.cics_plex.as_deref(), region)
        .raw_criteria(&path::name_criteria("NAME", name))
        .raw_parameter(&path::csd_group_parameter(csd_group))
        .build();
    let body = request::action_request(ACTION_CSDINSTALL);
    client.put(&resource_path, &body).await
}

/// Discards an installed program from the running region. The CSD definition
/// is untouched.
pub async fn discard_program(
    client: &CmciClient,
    parms: &ProgramParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), PROGRAM_NAME)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let resource_path = CmciPath::new(CICS_PROGRAM, parms.cics_plex.as_deref(), region)
        .raw_criteria(&path::name_criteria("PROGRAM", name))
        .build();
    client.delete(&resource_path, None).await
}

/// Loads a new copy of an installed program.
pub async fn refresh_program(
    client: &CmciClient,
    parms: &ProgramParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), PROGRAM_NAME)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let resource_path = CmciPath::new(CICS_PROGRAM, parms.cics_plex.as_deref(), region)
        .raw_criteria(&path::name_criteria("PROGRAM", name))
        .build();
    let body = request::action_request(ACTION_NEWCOPY);
    client.put(&resource_path, &body).await
}
