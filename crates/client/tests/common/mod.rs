//! Common test utilities for integration tests.
//!
//! Provides a mock Tableau server sign-in flow and shared re-exports so
//! every integration test builds its client the same way.

#[allow(unused_imports)]
pub use wiremock::matchers::{body_string_contains, header, method, path, query_param};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;
use tabjobs_client::TableauClient;

/// Session token issued by the mock sign-in endpoint.
pub const TEST_TOKEN: &str = "test-token";
/// Site id issued by the mock sign-in endpoint.
pub const TEST_SITE_ID: &str = "site-1";

/// A successful sign-in response body.
pub fn sign_in_response() -> String {
    format!(
        r#"<tsResponse xmlns="http://tableau.com/api">
             <credentials token="{TEST_TOKEN}">
               <site id="{TEST_SITE_ID}" contentUrl="analytics"/>
               <user id="user-1"/>
             </credentials>
           </tsResponse>"#
    )
}

/// Mount the sign-in endpoint on the mock server.
pub async fn mount_sign_in(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/3.8/auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sign_in_response()))
        .mount(server)
        .await;
}

/// Build a client against the mock server without signing in.
pub fn client_for(server: &MockServer) -> TableauClient {
    TableauClient::builder()
        .server_url(server.uri())
        .token(
            "automation".to_string(),
            SecretString::new("pat-secret".to_string().into()),
        )
        .site("analytics".to_string())
        .build()
        .unwrap()
}

/// Build a signed-in client against the mock server.
#[allow(dead_code)]
pub async fn signed_in_client(server: &MockServer) -> TableauClient {
    mount_sign_in(server).await;
    let mut client = client_for(server);
    client.sign_in().await.unwrap();
    client
}

/// Build a signed-in client with an overridden jobs page size.
#[allow(dead_code)]
pub async fn signed_in_client_with_page_size(server: &MockServer, page_size: usize) -> TableauClient {
    mount_sign_in(server).await;
    let mut client = TableauClient::builder()
        .server_url(server.uri())
        .token(
            "automation".to_string(),
            SecretString::new("pat-secret".to_string().into()),
        )
        .site("analytics".to_string())
        .page_size(page_size)
        .build()
        .unwrap();
    client.sign_in().await.unwrap();
    client
}
