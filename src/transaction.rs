//! Transaction definition and local-transaction operations.

use crate::error::CmciError;
use crate::http::CmciClient;
use crate::path::{self, CICS_DEFINITION_TRANSACTION, CICS_LOCAL_TRANSACTION, CmciPath};
use crate::request::{self, ACTION_CSDINSTALL};
use crate::response::CmciResponse;
use crate::validation::required;

const TRANSACTION_NAME: &str = "CICS Transaction name";
const PROGRAM_NAME: &str = "CICS Program name";
const CSD_GROUP: &str = "CICS CSD Group name";
const REGION_NAME: &str = "CICS Region name";

/// Parameters for transaction operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionParms {
    /// Transaction identifier.
    pub name: Option<String>,
    /// Program the transaction starts; required when defining.
    pub program_name: Option<String>,
    /// CSD group holding the definition.
    pub csd_group: Option<String>,
    /// Region the request addresses.
    pub region_name: Option<String>,
    /// CICSPlex the region belongs to, when addressed through one.
    pub cics_plex: Option<String>,
    /// Definition description, sent only when present.
    pub description: Option<String>,
}

/// Defines a new transaction in a CSD group.
pub async fn define_transaction(
    client: &CmciClient,
    parms: &TransactionParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), TRANSACTION_NAME)?;
    let program = required(parms.program_name.as_deref(), PROGRAM_NAME)?;
    let csd_group = required(parms.csd_group.as_deref(), CSD_GROUP)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let mut attributes = vec![("name", name), ("program", program), ("csdgroup", csd_group)];
    if let Some(description) = parms.description.as_deref() {
        attributes.push(("description", description));
    }
    let body = request::create_request(&attributes);
    let resource_path =
        CmciPath::new(CICS_DEFINITION_TRANSACTION, parms.cics_plex.as_deref(), region).build();
    client.post(&resource_path, &body).await
}

/// Deletes a transaction definition from its CSD group.
pub async fn delete_transaction(
    client: &CmciClient,
    parms: &TransactionParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), TRANSACTION_NAME)?;
    let csd_group = required(parms.csd_group.as_deref(), CSD_GROUP)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let resource_path =
        CmciPath::new(CICS_DEFINITION_TRANSACTION, parms.cics_plex.as_deref(), region)
            .raw_criteria(&path::name_criteria("NAME", name))
            .raw_parameter(&path::csd_group_parameter(csd_group))
            .build();
    client.delete(&resource_path, None).await
}

/// Installs a defined transaction into the running region.
pub async fn install_transaction(
    client: &CmciClient,
    parms: &TransactionParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), TRANSACTION_NAME)?;
    let csd_group = required(parms.csd_group.as_deref(), CSD_GROUP)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let resource_path =
        CmciPath::new(CICS_DEFINITION_TRANSACTION, parms.cics_plex.as_deref(), region)
            .raw_criteria(&path::name_criteria("NAME", name))
            .raw_parameter(&path::csd_group_parameter(csd_group))
            .build();
    let body = request::action_request(ACTION_CSDINSTALL);
    client.put(&resource_path, &body).await
}

/// Discards an installed local transaction from the running region.
pub async fn discard_transaction(
    client: &CmciClient,
    parms: &TransactionParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), TRANSACTION_NAME)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let resource_path = CmciPath::new(CICS_LOCAL_TRANSACTION, parms.cics_plex.as_deref(), region)
        .raw_criteria(&path::name_criteria("TRANID", name))
        .build();
    client.delete(&resource_path, None).await
}
