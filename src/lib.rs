//! # CMCI: a client for the CICS management interface
//!
//! CMCI (the CICS Management Client Interface) is the XML-over-HTTP REST API
//! a CICS region exposes for systems management. This crate drives it from
//! Rust and from the `cicsctl` command line: defining resources into CSD
//! groups, installing them into the running region, discarding, enabling,
//! disabling, and deleting them, and querying any resource table.
//!
//! The crate is one thin client plus per-resource operations over it:
//!
//! - **Session and client**: [`CmciSession`] carries host, credentials,
//!   protocol, and the TLS-verification flag; [`CmciClient`] issues one
//!   stateless request per operation with basic authentication.
//! - **Paths**: every request addresses
//!   `/CICSSystemManagement/<resourceType>/[<plex>/]<region>`, with optional
//!   `CRITERIA` and `PARAMETER` query items. The CICSPlex segment
//!   distinguishes "no plex" from "blank plex"; [`CmciPath`] preserves that.
//! - **Responses**: XML bodies are converted into the [`XmlNode`] tagged
//!   union (attributes merged as keys, repeated siblings as ordered lists)
//!   and wrapped in [`CmciResponse`], whose result summary must carry the
//!   "1024" success code.
//! - **Operations**: each resource module validates its parameters in a
//!   fixed order, builds the path and XML body, and performs one round trip.
//!   Nothing is retried and no state is shared across calls.
//!
//! ## Usage Example
//!
//! ```no_run
//! use cmci::{CmciClient, CmciSession, ProgramParms, define_program};
//!
//! # async fn example() -> Result<(), cmci::CmciError> {
//! let session = CmciSession::new("mvs1.example.com", 1490, "OPERATOR", "secret");
//! let client = CmciClient::new(session)?;
//!
//! let parms = ProgramParms {
//!     name: Some("PGM1".to_string()),
//!     csd_group: Some("GRP1".to_string()),
//!     region_name: Some("REGION1".to_string()),
//!     ..ProgramParms::default()
//! };
//! define_program(&client, &parms).await?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

mod csdgroup;
mod error;
mod http;
mod path;
mod profile;
mod program;
mod request;
mod resource;
mod response;
mod session;
mod test_utils;
mod transaction;
mod urimap;
mod validation;
mod webservice;
mod xml;

// CLI utility modules

/// Command-line interface utilities for program termination and output formatting.
///
/// This module provides common CLI utilities for the cicsctl binary,
/// including error handling, formatted output, and program termination
/// functions.
pub mod cli_utils;

/// Command-line interface command handlers.
///
/// This module contains organized command handlers for the cicsctl CLI
/// application, with each verb implemented in a dedicated submodule.
pub mod commands;

pub use csdgroup::{CsdGroupParms, add_csd_group_to_list, remove_csd_group_from_list};
pub use error::{CMCI_RESPONSE_ERROR, CmciError, sanitize_failure_body};
pub use http::CmciClient;
pub use path::{
    CICS_CSDGROUP, CICS_CSDGROUP_IN_LIST, CICS_DEFINITION_PROGRAM, CICS_DEFINITION_TRANSACTION,
    CICS_DEFINITION_URIMAP, CICS_DEFINITION_WEBSERVICE, CICS_LOCAL_TRANSACTION, CICS_PROGRAM,
    CICS_SYSTEM_MANAGEMENT, CICS_URIMAP, CmciPath, csd_group_parameter, encode_uri_component,
    list_membership_criteria, name_criteria,
};
pub use profile::{PROFILE_DIR_ENV, Profile, ProfileError};
pub use program::{
    ProgramParms, define_program, delete_program, discard_program, install_program,
    refresh_program,
};
pub use request::{
    ACTION_CSDADD, ACTION_CSDINSTALL, ACTION_CSDREMOVE, ACTION_NEWCOPY, Element, action_request,
    create_request, list_action_request, update_request,
};
pub use resource::{ResourceQueryParms, get_resource};
pub use response::{API_RESPONSE_SUCCESS, CmciResponse, ResultSummary};
pub use session::{CmciSession, Protocol, ProtocolParseError};
pub use transaction::{
    TransactionParms, define_transaction, delete_transaction, discard_transaction,
    install_transaction,
};
pub use urimap::{
    UrimapParms, define_urimap_client, define_urimap_pipeline, define_urimap_server,
    delete_urimap, disable_urimap, discard_urimap, enable_urimap, install_urimap,
};
pub use validation::{required, required_flag};
pub use webservice::{WebServiceParms, define_web_service, delete_web_service};
pub use xml::{TEXT_KEY, XmlNode, XmlParseError, parse as parse_xml};
