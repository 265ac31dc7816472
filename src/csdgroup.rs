//! CSD group list-membership operations.

use crate::error::CmciError;
use crate::http::CmciClient;
use crate::path::{self, CICS_CSDGROUP, CICS_CSDGROUP_IN_LIST, CmciPath};
use crate::request::{self, ACTION_CSDADD, ACTION_CSDREMOVE};
use crate::response::CmciResponse;
use crate::validation::required;

const CSD_GROUP: &str = "CICS CSD Group name";
const CSD_LIST: &str = "CICS CSD List name";
const REGION_NAME: &str = "CICS Region name";

/// Parameters for CSD group list membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsdGroupParms {
    /// CSD group being added or removed.
    pub name: Option<String>,
    /// CSD list the group is added to or removed from.
    pub csd_list: Option<String>,
    /// Region the request addresses.
    pub region_name: Option<String>,
    /// CICSPlex the region belongs to, when addressed through one.
    pub cics_plex: Option<String>,
}

/// Adds a CSD group to a CSD list.
pub async fn add_csd_group_to_list(
    client: &CmciClient,
    parms: &CsdGroupParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), CSD_GROUP)?;
    let csd_list = required(parms.csd_list.as_deref(), CSD_LIST)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let resource_path = CmciPath::new(CICS_CSDGROUP, parms.cics_plex.as_deref(), region)
        .raw_criteria(&path::name_criteria("CSDGROUP", name))
        .build();
    let body = request::list_action_request(ACTION_CSDADD, csd_list);
    client.put(&resource_path, &body).await
}

/// Removes a CSD group from a CSD list. Membership is addressed with a
/// two-clause criteria naming both the list and the group.
pub async fn remove_csd_group_from_list(
    client: &CmciClient,
    parms: &CsdGroupParms,
) -> Result<CmciResponse, CmciError> {
    let name = required(parms.name.as_deref(), CSD_GROUP)?;
    let csd_list = required(parms.csd_list.as_deref(), CSD_LIST)?;
    let region = required(parms.region_name.as_deref(), REGION_NAME)?;

    let resource_path = CmciPath::new(CICS_CSDGROUP_IN_LIST, parms.cics_plex.as_deref(), region)
        .raw_criteria(&path::list_membership_criteria(csd_list, name))
        .build();
    let body = request::list_action_request(ACTION_CSDREMOVE, csd_list);
    client.put(&resource_path, &body).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::offline_client;

    fn valid_parms() -> CsdGroupParms {
        CsdGroupParms {
            name: Some("GRP1".to_string()),
            csd_list: Some("LIST1".to_string()),
            region_name: Some("REGION1".to_string()),
            cics_plex: None,
        }
    }

    #[tokio::test]
    async fn add_rejects_missing_group_first() {
        let client = offline_client();
        let err = add_csd_group_to_list(&client, &CsdGroupParms::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "CICS CSD Group name is required");
    }

    #[tokio::test]
    async fn add_requires_list_after_group() {
        let client = offline_client();
        let parms = CsdGroupParms {
            csd_list: None,
            ..valid_parms()
        };
        let err = add_csd_group_to_list(&client, &parms).await.unwrap_err();
        assert_eq!(err.to_string(), "CICS CSD List name is required");
    }

    #[tokio::test]
    async fn remove_rejects_blank_list() {
        let client = offline_client();
        let parms = CsdGroupParms {
            csd_list: Some(String::new()),
            ..valid_parms()
        };
        let err = remove_csd_group_from_list(&client, &parms)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Required parameter 'CICS CSD List name' must not be blank"
        );
    }
}
