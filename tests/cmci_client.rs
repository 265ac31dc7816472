//! End-to-end tests of the CMCI client against a mock server, asserting the
//! exact method, path, query, and body of every request shape.

use wiremock::matchers::{any, body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cmci::{
    CMCI_RESPONSE_ERROR, CmciClient, CmciSession, CsdGroupParms, ProgramParms, Protocol,
    ResourceQueryParms, UrimapParms, WebServiceParms, add_csd_group_to_list, define_program,
    define_urimap_server, define_web_service, delete_program, disable_urimap, discard_transaction,
    get_resource, install_program, refresh_program, remove_csd_group_from_list,
};

const OK_BODY: &str = r#"<response>
    <resultsummary api_response1="1024" api_response2="0" api_response1_alt="OK" recordcount="1" displayedrecordcount="1"/>
</response>"#;

fn client_for(server: &MockServer) -> CmciClient {
    let address = server.address();
    let session = CmciSession::new(address.ip().to_string(), address.port(), "user", "pass")
        .protocol(Protocol::Http);
    CmciClient::new(session).expect("client construction should not fail")
}

fn program_parms() -> ProgramParms {
    ProgramParms {
        name: Some("PGM1".to_string()),
        csd_group: Some("GRP1".to_string()),
        region_name: Some("REGION1".to_string()),
        ..ProgramParms::default()
    }
}

#[tokio::test]
async fn define_program_posts_create_body_to_definition_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/CICSSystemManagement/CICSDefinitionProgram/REGION1"))
        .and(body_string(
            r#"<request><create><parameter name="CSD"/><attributes name="PGM1" csdgroup="GRP1"/></create></request>"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = define_program(&client, &program_parms()).await.unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn define_program_sends_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    define_program(&client, &program_parms()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let authorization = requests[0]
        .headers
        .get("authorization")
        .expect("authorization header should be present");
    // "user:pass" in base64
    assert_eq!(authorization.to_str().unwrap(), "Basic dXNlcjpwYXNz");
}

#[tokio::test]
async fn define_program_with_plex_addresses_four_segment_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/CICSSystemManagement/CICSDefinitionProgram/PLEX1/REGION1",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let parms = ProgramParms {
        cics_plex: Some("PLEX1".to_string()),
        ..program_parms()
    };
    define_program(&client, &parms).await.unwrap();
}

#[tokio::test]
async fn define_program_with_blank_plex_keeps_the_empty_segment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let parms = ProgramParms {
        cics_plex: Some(String::new()),
        ..program_parms()
    };
    define_program(&client, &parms).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.path(),
        "/CICSSystemManagement/CICSDefinitionProgram//REGION1"
    );
}

#[tokio::test]
async fn install_program_puts_csdinstall_action_with_name_and_group_query() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    install_program(&client, &program_parms()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    assert_eq!(
        request.url.path(),
        "/CICSSystemManagement/CICSDefinitionProgram/REGION1"
    );
    assert_eq!(
        request.url.query(),
        Some("CRITERIA=(NAME=PGM1)&PARAMETER=CSDGROUP(GRP1)")
    );
    assert_eq!(
        request.body,
        br#"<request><action name="CSDINSTALL"/></request>"#
    );
}

#[tokio::test]
async fn delete_program_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    delete_program(&client, &program_parms()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    assert_eq!(
        request.url.query(),
        Some("CRITERIA=(NAME=PGM1)&PARAMETER=CSDGROUP(GRP1)")
    );
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn discard_transaction_deletes_by_tranid_on_the_runtime_table() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let parms = cmci::TransactionParms {
        name: Some("TX01".to_string()),
        region_name: Some("REGION1".to_string()),
        ..cmci::TransactionParms::default()
    };
    discard_transaction(&client, &parms).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    assert_eq!(
        request.url.path(),
        "/CICSSystemManagement/CICSLocalTransaction/REGION1"
    );
    assert_eq!(request.url.query(), Some("CRITERIA=(TRANID=TX01)"));
}

#[tokio::test]
async fn refresh_program_puts_newcopy_action() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/CICSSystemManagement/CICSProgram/REGION1"))
        .and(body_string(r#"<request><action name="NEWCOPY"/></request>"#))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let parms = ProgramParms {
        csd_group: None,
        ..program_parms()
    };
    refresh_program(&client, &parms).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("CRITERIA=(PROGRAM=PGM1)"));
}

#[tokio::test]
async fn define_urimap_server_sends_full_attribute_map() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/CICSSystemManagement/CICSDefinitionURIMap/REGION1"))
        .and(body_string(
            r#"<request><create><parameter name="CSD"/><attributes name="MAP1" csdgroup="GRP1" usage="server" path="/orders/*" host="orders.example.com" scheme="HTTP" program="PGM1" enablestatus="ENABLED"/></create></request>"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let parms = UrimapParms {
        name: Some("MAP1".to_string()),
        csd_group: Some("GRP1".to_string()),
        region_name: Some("REGION1".to_string()),
        urimap_path: Some("/orders/*".to_string()),
        urimap_host: Some("orders.example.com".to_string()),
        urimap_scheme: Some("HTTP".to_string()),
        program_name: Some("PGM1".to_string()),
        enable: Some(true),
        ..UrimapParms::default()
    };
    define_urimap_server(&client, &parms).await.unwrap();
}

#[tokio::test]
async fn disable_urimap_puts_update_body_on_the_runtime_table() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/CICSSystemManagement/CICSURIMap/REGION1"))
        .and(body_string(
            r#"<request><update><attributes enablestatus="DISABLED"/></update></request>"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let parms = UrimapParms {
        name: Some("MAP1".to_string()),
        region_name: Some("REGION1".to_string()),
        ..UrimapParms::default()
    };
    disable_urimap(&client, &parms).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("CRITERIA=(NAME=MAP1)"));
}

#[tokio::test]
async fn define_web_service_serializes_validation_as_domain_literal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/CICSSystemManagement/CICSDefinitionWebService/REGION1"))
        .and(body_string(
            r#"<request><create><parameter name="CSD"/><attributes name="WEBSVC1" csdgroup="GRP1" pipeline="PIPE1" wsbind="/u/dev/orders.wsbind" validation="no"/></create></request>"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let parms = WebServiceParms {
        name: Some("WEBSVC1".to_string()),
        csd_group: Some("GRP1".to_string()),
        pipeline_name: Some("PIPE1".to_string()),
        wsbind: Some("/u/dev/orders.wsbind".to_string()),
        validation: Some(false),
        region_name: Some("REGION1".to_string()),
        ..WebServiceParms::default()
    };
    define_web_service(&client, &parms).await.unwrap();
}

#[tokio::test]
async fn add_csd_group_puts_csdadd_action_with_target_list() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/CICSSystemManagement/CICSCSDGroup/REGION1"))
        .and(body_string(
            r#"<request><action name="CSDADD"><parameter name="TO_CSDLIST" value="LIST1"/></action></request>"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let parms = CsdGroupParms {
        name: Some("GRP1".to_string()),
        csd_list: Some("LIST1".to_string()),
        region_name: Some("REGION1".to_string()),
        cics_plex: None,
    };
    add_csd_group_to_list(&client, &parms).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("CRITERIA=(CSDGROUP=GRP1)"));
}

#[tokio::test]
async fn remove_csd_group_uses_compound_membership_criteria() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let parms = CsdGroupParms {
        name: Some("GRP1".to_string()),
        csd_list: Some("LIST1".to_string()),
        region_name: Some("REGION1".to_string()),
        cics_plex: None,
    };
    remove_csd_group_from_list(&client, &parms).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    assert_eq!(
        request.url.path(),
        "/CICSSystemManagement/CICSCSDGroupInList/REGION1"
    );
    // The single quotes of the membership clauses travel percent-encoded.
    assert_eq!(
        request.url.query(),
        Some("CRITERIA=(CSDLIST==%27LIST1%27)%20AND%20(CSDGROUP==%27GRP1%27)")
    );
    assert_eq!(
        request.body,
        br#"<request><action name="CSDREMOVE"><parameter name="TO_CSDLIST" value="LIST1"/></action></request>"#
    );
}

#[tokio::test]
async fn get_resource_percent_encodes_user_criteria() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<response>
                <resultsummary api_response1="1024" api_response2="0" recordcount="2" displayedrecordcount="2"/>
                <records>
                    <cicsprogram program="DFH1" status="ENABLED"/>
                    <cicsprogram program="DFH2" status="DISABLED"/>
                </records>
            </response>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let parms = ResourceQueryParms {
        resource_name: Some("CICSProgram".to_string()),
        region_name: Some("REGION1".to_string()),
        criteria: Some("program=D*".to_string()),
        parameter: Some("CSDGROUP(GRP1)".to_string()),
        ..ResourceQueryParms::default()
    };
    let response = get_resource(&client, &parms).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("CRITERIA=(program%3DD%2A)&PARAMETER=CSDGROUP%28GRP1%29")
    );

    let records = response.records_of("CICSProgram");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].attribute("program"), Some("DFH1"));
    assert_eq!(records[1].attribute("status"), Some("DISABLED"));
}

#[tokio::test]
async fn get_resource_without_criteria_sends_bare_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let parms = ResourceQueryParms {
        resource_name: Some("CICSProgram".to_string()),
        region_name: Some("REGION1".to_string()),
        ..ResourceQueryParms::default()
    };
    get_resource(&client, &parms).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn non_success_result_code_fails_the_operation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<response>
                <resultsummary api_response1="1038" api_response2="1300" api_response1_alt="INVALIDPARM"/>
            </response>"#,
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = define_program(&client, &program_parms()).await.unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with(CMCI_RESPONSE_ERROR));
    assert!(message.contains("INVALIDPARM"));
}

#[tokio::test]
async fn http_failure_surfaces_server_diagnostic_without_stack() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string(r#"{"stack":"internal trace A","other":"DUPRES on PGM1"}"#),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = define_program(&client, &program_parms()).await.unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with(CMCI_RESPONSE_ERROR));
    assert!(message.contains("DUPRES on PGM1"));
    assert!(!message.contains("internal trace A"));
}

#[tokio::test]
async fn malformed_response_body_fails_the_operation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<response><resultsummary"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = define_program(&client, &program_parms()).await.unwrap_err();
    assert!(err.to_string().starts_with(CMCI_RESPONSE_ERROR));
}

#[tokio::test]
async fn validation_failure_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let parms = ProgramParms {
        name: None,
        ..program_parms()
    };
    let err = define_program(&client, &parms).await.unwrap_err();
    assert_eq!(err.to_string(), "CICS Program name is required");
}
