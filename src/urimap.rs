//! URIMap definition and installed-URIMap operations.
//!
//! URIMaps come in three usages (server, client, pipeline) that share one
//! parameter struct; each define operation validates the fields its usage
//! requires and ignores the rest.

use crate::error::CmciError;
use crate::http::CmciClient;
use crate::path::{self, CICS_DEFINITION_URIMAP, CICS_URIMAP, CmciPath};
use crate::request::{self, ACTION_CSDINSTALL};
use crate::response::CmciResponse;
use crate::validation::required;

const URIMAP_NAME: &str = "CICS URIMap name";
const CSD_GROUP: &str = "CICS CSD Group name";
const REGION_NAME: &str = "CICS Region name";
const URIMAP_PATH: &str = "CICS URIMap path";
const URIMAP_HOST: &str = "CICS URIMap host";
const URIMAP_SCHEME: &str = "CICS URIMap scheme";
const PROGRAM_NAME: &str = "CICS Program name";
const PIPELINE_NAME: &str = "CICS Pipeline name";

/// Installed-URIMap status literal for an enabled map.
const STATUS_ENABLED: &str = "ENABLED";
/// Installed-URIMap status literal for a disabled map.
const STATUS_DISABLED: &str = "DISABLED";

/// Parameters for URIMap operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrimapParms {
    /// URIMap name.
    pub name: Option<String>,
    /// CSD group holding the definition.
    pub csd_group: Option<String>,
    /// Region the request addresses.
    pub region_name: Option<String>,
    /// CICSPlex the region belongs to, when addressed through one.
    pub cics_plex: Option<String>,
    /// URI path component the map matches.
    pub urimap_path: Option<String>,
    /// Host component the map matches.
    pub urimap_host: Option<String>,
    /// Scheme the map accepts, e.g. "HTTP" or "HTTPS".
    pub urimap_scheme: Option<String>,
    /// Program serving the map; required for server usage.
    pub program_name: Option<String>,
    /// Pipeline serving the map; required for pipeline usage.
    pub pipeline_name: Option<String>,
    /// Whether the definition is created enabled; serialized as
    /// "ENABLED"/"DISABLED" when present.
    pub enable: Option<bool>,
    /// Definition description, sent only when present.
    pub description: Option<String>,
    /// TCPIPSERVICE restricting the map, sent only when present.
    pub tcpipservice: Option<String>,
    /// Transaction for pipeline usage, sent only when present.
    pub transaction_name: Option<String>,
    /// Web service for pipeline usage, sent only when present.
    pub webservice_name: Option<String>,
    /// Client certificate label, sent only when present.
    pub certificate: Option<String>,
    /// Authentication mode, sent only when present.
    pub authenticate: Option<String>,
}

impl UrimapParms {
    /// Optional attributes shared by all three define usages, in their fixed
    /// body order.
    fn optional_attributes(&self) -> Vec<(&str, &str)> {
        let mut attributes = Vec::new();
        if let Some(enable) = self.enable {
            let status = if enable { STATUS_ENABLED } else { STATUS_DISABLED };
            attributes.push(("enablestatus", status));
        }
        if let Some(description) = self.description.as_deref() {
            attributes.push(("description", description));
        }
        if let Some(tcpipservice) = self.tcpipservice.as_deref() {
            attributes.push(("tcpipservice", tcpipservice));
        }
        if let Some(transaction) = self.transaction_name.as_deref() {
            attributes.push(("transaction", transaction));
        }
        if let Some(webservice) = self.webservice_name.as_deref() {
            attributes.push(("webservice", webservice));
        }
        if let Some(certificate) = self.certificate.as_deref() {
            attributes.push(("certificate", certificate));
        }
        if let Some(authenticate) = self.authenticate.as_deref() {
            attributes.push(("authenticate", authenticate));
        }
        attributes
    }
}

/// Defines a URIMap with server usage, routing matched requests to a program.
pub async fn define_urimap_server(
    client: &CmciClient,
    parms: &UrimapParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), URIMAP_NAME)?;
    let csd_group = required(parms.csd_group.as_deref(), CSD_GROUP)?;
    let uri_path = required(parms.urimap_path.as_deref(), URIMAP_PATH)?;
    let host = required(parms.urimap_host.as_deref(), URIMAP_HOST)?;
    let scheme = required(parms.urimap_scheme.as_deref(), URIMAP_SCHEME)?;
    let program = required(parms.program_name.as_deref(), PROGRAM_NAME)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let mut attributes = vec![
        ("name", name),
        ("csdgroup", csd_group),
        ("usage", "server"),
        ("path", uri_path),
        ("host", host),
        ("scheme", scheme),
        ("program", program),
    ];
    attributes.extend(parms.optional_attributes());
    let body = request::create_request(&attributes);
    let resource_path =
        CmciPath::new(CICS_DEFINITION_URIMAP, parms.cics_plex.as_deref(), region).build();
    client.post(&resource_path, &body).await
}

/// Defines a URIMap with client usage for outbound requests.
pub async fn define_urimap_client(
    client: &CmciClient,
    parms: &UrimapParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), URIMAP_NAME)?;
    let csd_group = required(parms.csd_group.as_deref(), CSD_GROUP)?;
    let uri_path = required(parms.urimap_path.as_deref(), URIMAP_PATH)?;
    let host = required(parms.urimap_host.as_deref(), URIMAP_HOST)?;
    let scheme = required(parms.urimap_scheme.as_deref(), URIMAP_SCHEME)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let mut attributes = vec![
        ("name", name),
        ("csdgroup", csd_group),
        ("usage", "client"),
        ("path", uri_path),
        ("host", host),
        ("scheme", scheme),
    ];
    attributes.extend(parms.optional_attributes());
    let body = request::create_request(&attributes);
    let resource_path =
        CmciPath::new(CICS_DEFINITION_URIMAP, parms.cics_plex.as_deref(), region).build();
    client.post(&resource_path, &body).await
}

/// Defines a URIMap with pipeline usage, routing matched requests into a web
/// service pipeline.
pub async fn define_urimap_pipeline(
    client: &CmciClient,
    parms: &UrimapParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), URIMAP_NAME)?;
    let csd_group = required(parms.csd_group.as_deref(), CSD_GROUP)?;
    let uri_path = required(parms.urimap_path.as_deref(), URIMAP_PATH)?;
    let host = required(parms.urimap_host.as_deref(), URIMAP_HOST)?;
    let scheme = required(parms.urimap_scheme.as_deref(), URIMAP_SCHEME)?;
    let pipeline = required(parms.pipeline_name.as_deref(), PIPELINE_NAME)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let mut attributes = vec![
        ("name", name),
        ("csdgroup", csd_group),
        ("usage", "pipeline"),
        ("path", uri_path),
        ("host", host),
        ("scheme", scheme),
        ("pipeline", pipeline),
    ];
    attributes.extend(parms.optional_attributes());
    let body = request::create_request(&attributes);
    let resource_path =
        CmciPath::new(CICS_DEFINITION_URIMAP, parms.cics_plex.as_deref(), region).build();
    client.post(&resource_path, &body).await
}

/// Deletes a URIMap definition from its CSD group.
pub async fn delete_urimap(
    client: &CmciClient,
    parms: &UrimapParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), URIMAP_NAME)?;
    let csd_group = required(parms.csd_group.as_deref(), CSD_GROUP)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let resource_path = CmciPath::new(CICS_DEFINITION_URIMAP, parms.cics_plex.as_deref(), region)
        .raw_criteria(&path::name_criteria("NAME", name))
        .raw_parameter(&path::csd_group_parameter(csd_group))
        .build();
    client.delete(&resource_path, None).await
}

/// Installs a defined URIMap into the running region.
pub async fn install_urimap(
    client: &CmciClient,
    parms: &UrimapParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), URIMAP_NAME)?;
    let csd_group = required(parms.csd_group.as_deref(), CSD_GROUP)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let resource_path = CmciPath::new(CICS_DEFINITION_URIMAP, parms.cics_plex.as_deref(), region)
        .raw_criteria(&path::name_criteria("NAME", name))
        .raw_parameter(&path::csd_group_parameter(csd_group))
        .build();
    let body = request::action_request(ACTION_CSDINSTALL);
    client.put(&resource_path, &body).await
}

/// Discards an installed URIMap from the running region.
pub async fn discard_urimap(
    client: &CmciClient,
    parms: &UrimapParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), URIMAP_NAME)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let resource_path = CmciPath::new(CICS_URIMAP, parms.cics_plex.as_deref(), region)
        .raw_criteria(&path::name_criteria("NAME", name))
        .build();
    client.delete(&resource_path, None).await
}

/// Enables an installed URIMap.
pub async fn enable_urimap(
    client: &CmciClient,
    parms: &UrimapParms,
) -> Result<CmciResponse, CmciError> {
    set_urimap_status(client, parms, STATUS_ENABLED).await
}

/// Disables an installed URIMap.
pub async fn disable_urimap(
    client: &CmciClient,
    parms: &UrimapParms,
) -> Result<CmciResponse, CmciError> {
    set_urimap_status(client, parms, STATUS_DISABLED).await
}

async fn set_urimap_status(
    client: &CmciClient,
    parms: &UrimapParms,
    status: &str,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), URIMAP_NAME)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let resource_path = CmciPath::new(CICS_URIMAP, parms.cics_plex.as_deref(), region)
        .raw_criteria(&path::name_criteria("NAME", name))
        .build();
    let body = request::update_request(&[("enablestatus", status)]);
    client.put(&resource_path, &body).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::offline_client;

    fn valid_server_parms() -> UrimapParms {
        UrimapParms {
            name: Some("MAP1".to_string()),
            csd_group: Some("GRP1".to_string()),
            region_name: Some("REGION1".to_string()),
            urimap_path: Some("/orders/*".to_string()),
            urimap_host: Some("orders.example.com".to_string()),
            urimap_scheme: Some("HTTP".to_string()),
            program_name: Some("PGM1".to_string()),
            pipeline_name: Some("PIPE1".to_string()),
            ..UrimapParms::default()
        }
    }

    #[tokio::test]
    async fn define_server_rejects_missing_name_first() {
        let client = offline_client();
        let err = define_urimap_server(&client, &UrimapParms::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "CICS URIMap name is required");
    }

    #[tokio::test]
    async fn define_server_requires_path_host_scheme_in_order() {
        let client = offline_client();
        let parms = UrimapParms {
            urimap_path: None,
            urimap_host: None,
            urimap_scheme: None,
            ..valid_server_parms()
        };
        let err = define_urimap_server(&client, &parms).await.unwrap_err();
        assert_eq!(err.to_string(), "CICS URIMap path is required");

        let parms = UrimapParms {
            urimap_host: None,
            urimap_scheme: None,
            ..valid_server_parms()
        };
        let err = define_urimap_server(&client, &parms).await.unwrap_err();
        assert_eq!(err.to_string(), "CICS URIMap host is required");

        let parms = UrimapParms {
            urimap_scheme: None,
            ..valid_server_parms()
        };
        let err = define_urimap_server(&client, &parms).await.unwrap_err();
        assert_eq!(err.to_string(), "CICS URIMap scheme is required");
    }

    #[tokio::test]
    async fn define_server_requires_program() {
        let client = offline_client();
        let parms = UrimapParms {
            program_name: None,
            ..valid_server_parms()
        };
        let err = define_urimap_server(&client, &parms).await.unwrap_err();
        assert_eq!(err.to_string(), "CICS Program name is required");
    }

    #[tokio::test]
    async fn define_client_does_not_require_program() {
        let client = offline_client();
        let parms = UrimapParms {
            program_name: None,
            pipeline_name: None,
            ..valid_server_parms()
        };
        let err = define_urimap_client(&client, &parms).await.unwrap_err();
        assert!(matches!(err, CmciError::Request { .. }));
    }

    #[tokio::test]
    async fn define_pipeline_requires_pipeline_name() {
        let client = offline_client();
        let parms = UrimapParms {
            pipeline_name: None,
            ..valid_server_parms()
        };
        let err = define_urimap_pipeline(&client, &parms).await.unwrap_err();
        assert_eq!(err.to_string(), "CICS Pipeline name is required");
    }

    #[tokio::test]
    async fn enable_requires_only_name_and_region() {
        let client = offline_client();
        let parms = UrimapParms {
            csd_group: None,
            urimap_path: None,
            urimap_host: None,
            urimap_scheme: None,
            program_name: None,
            pipeline_name: None,
            ..valid_server_parms()
        };
        let err = enable_urimap(&client, &parms).await.unwrap_err();
        assert!(matches!(err, CmciError::Request { .. }));
    }

    #[test]
    fn enable_flag_maps_to_domain_status_literals() {
        let enabled = UrimapParms {
            enable: Some(true),
            ..UrimapParms::default()
        };
        assert_eq!(
            enabled.optional_attributes(),
            vec![("enablestatus", "ENABLED")]
        );
        let disabled = UrimapParms {
            enable: Some(false),
            ..UrimapParms::default()
        };
        assert_eq!(
            disabled.optional_attributes(),
            vec![("enablestatus", "DISABLED")]
        );
    }

    #[test]
    fn absent_optional_fields_are_not_serialized() {
        assert!(UrimapParms::default().optional_attributes().is_empty());
    }
}
