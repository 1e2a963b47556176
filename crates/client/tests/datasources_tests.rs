//! Datasource lookup and extract-refresh triggering tests.

mod common;

use common::*;
use tabjobs_client::ClientError;

const DS_PATH: &str = "/api/3.8/sites/site-1/datasources";

#[tokio::test]
async fn test_get_datasource_parses_name_and_project() {
    let mock_server = MockServer::start().await;

    let body = r#"<tsResponse xmlns="http://tableau.com/api">
        <datasource id="ds-1" name="Sales" type="postgres">
          <project id="p-1" name="Finance"/>
          <owner id="user-1"/>
        </datasource>
    </tsResponse>"#;
    Mock::given(method("GET"))
        .and(path(format!("{DS_PATH}/ds-1")))
        .and(header("X-Tableau-Auth", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = signed_in_client(&mock_server).await;
    let ds = client.datasource("ds-1").await.unwrap();

    assert_eq!(ds.id, "ds-1");
    assert_eq!(ds.name.as_deref(), Some("Sales"));
    assert_eq!(ds.project.as_deref(), Some("Finance"));
}

#[tokio::test]
async fn test_refresh_datasource_returns_spawned_job_id() {
    let mock_server = MockServer::start().await;

    let body = r#"<tsResponse xmlns="http://tableau.com/api">
        <job id="new-job-1" mode="Asynchronous" type="RefreshExtract"/>
    </tsResponse>"#;
    Mock::given(method("POST"))
        .and(path(format!("{DS_PATH}/ds-1/refresh")))
        .and(header("X-Tableau-Auth", TEST_TOKEN))
        .and(body_string_contains("<tsRequest/>"))
        .respond_with(ResponseTemplate::new(202).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = signed_in_client(&mock_server).await;
    let job_id = client.refresh_datasource("ds-1").await.unwrap();
    assert_eq!(job_id, "new-job-1");
}

#[tokio::test]
async fn test_refresh_conflict_surfaces_server_error() {
    let mock_server = MockServer::start().await;

    // The server rejects a refresh while one is already queued.
    let body = r#"<tsResponse xmlns="http://tableau.com/api">
        <error code="409093">
          <summary>Extract Refresh Conflict</summary>
          <detail>A refresh for datasource 'ds-1' is already queued</detail>
        </error>
    </tsResponse>"#;
    Mock::given(method("POST"))
        .and(path(format!("{DS_PATH}/ds-1/refresh")))
        .respond_with(ResponseTemplate::new(409).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = signed_in_client(&mock_server).await;
    let err = client.refresh_datasource("ds-1").await.unwrap_err();
    match err {
        ClientError::ApiError {
            status,
            code,
            summary,
            ..
        } => {
            assert_eq!(status, 409);
            assert_eq!(code, "409093");
            assert_eq!(summary, "Extract Refresh Conflict");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_unknown_datasource_surfaces_not_found() {
    let mock_server = MockServer::start().await;

    let body = r#"<tsResponse xmlns="http://tableau.com/api">
        <error code="404007">
          <summary>Resource Not Found</summary>
          <detail>Datasource 'ds-missing' could not be found</detail>
        </error>
    </tsResponse>"#;
    Mock::given(method("GET"))
        .and(path(format!("{DS_PATH}/ds-missing")))
        .respond_with(ResponseTemplate::new(404).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = signed_in_client(&mock_server).await;
    let err = client.datasource("ds-missing").await.unwrap_err();
    assert!(matches!(err, ClientError::ApiError { status: 404, .. }));
}
