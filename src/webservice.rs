//! Web service definition operations.

use crate::error::CmciError;
use crate::http::CmciClient;
use crate::path::{self, CICS_DEFINITION_WEBSERVICE, CmciPath};
use crate::request;
use crate::response::CmciResponse;
use crate::validation::{required, required_flag};

const WEBSERVICE_NAME: &str = "CICS Web service name";
const CSD_GROUP: &str = "CICS CSD Group name";
const PIPELINE_NAME: &str = "CICS Pipeline name";
const WSBIND: &str = "CICS web service binding file";
const VALIDATION: &str = "CICS web service validation flag";
const REGION_NAME: &str = "CICS Region name";

/// Parameters for web service operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebServiceParms {
    /// Web service name.
    pub name: Option<String>,
    /// CSD group holding the definition.
    pub csd_group: Option<String>,
    /// Pipeline the web service runs in; required when defining.
    pub pipeline_name: Option<String>,
    /// HFS path of the web service binding file; required when defining.
    pub wsbind: Option<String>,
    /// Whether full SOAP validation runs for this service; required when
    /// defining and serialized "yes"/"no".
    pub validation: Option<bool>,
    /// Region the request addresses.
    pub region_name: Option<String>,
    /// CICSPlex the region belongs to, when addressed through one.
    pub cics_plex: Option<String>,
    /// Definition description, sent only when present.
    pub description: Option<String>,
    /// HFS path of the WSDL file, sent only when present.
    pub wsdlfile: Option<String>,
}

/// Defines a new web service in a CSD group.
pub async fn define_web_service(
    client: &CmciClient,
    parms: &WebServiceParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), WEBSERVICE_NAME)?;
    let csd_group = required(parms.csd_group.as_deref(), CSD_GROUP)?;
    let pipeline = required(parms.pipeline_name.as_deref(), PIPELINE_NAME)?;
    let wsbind = required(parms.wsbind.as_deref(), WSBIND)?;
    let validation = required_flag(parms.validation, VALIDATION)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let validation_literal = if validation { "yes" } else { "no" };
    let mut attributes = vec![
        ("name", name),
        ("csdgroup", csd_group),
        ("pipeline", pipeline),
        ("wsbind", wsbind),
        ("validation", validation_literal),
    ];
    if let Some(description) = parms.description.as_deref() {
        attributes.push(("description", description));
    }
    if let Some(wsdlfile) = parms.wsdlfile.as_deref() {
        attributes.push(("wsdlfile", wsdlfile));
    }
    let body = request::create_request(&attributes);
    let resource_path =
        CmciPath::new(CICS_DEFINITION_WEBSERVICE, parms.cics_plex.as_deref(), region).build();
    client.post(&resource_path, &body).await
}

/// Deletes a web service definition from its CSD group.
pub async fn delete_web_service(
    client: &CmciClient,
    parms: &WebServiceParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), WEBSERVICE_NAME)?;
    let csd_group = required(parms.csd_group.as_deref(), CSD_GROUP)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let resource_path =
        CmciPath::new(CICS_DEFINITION_WEBSERVICE, parms.cics_plex.as_deref(), region)
            .raw_criteria(&path::name_criteria("NAME", name))
            .raw_parameter(&path::csd_group_parameter(csd_group))
            .build();
    client.delete(&resource_path, None).await
}
