//! Shared test utilities for tabjobs integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide mock Tableau server fixtures shared by the command tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - The mock sign-in endpoint issues `TEST_TOKEN` for site `site-1`.

use assert_cmd::Command;

#[allow(unused_imports)]
pub use wiremock::matchers::{body_string_contains, header, method, path, query_param};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Session token issued by the mock sign-in endpoint.
pub const TEST_TOKEN: &str = "test-token";

/// Returns a hermetic `tabjobs` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Token credentials are set to dummy values to satisfy config loading.
/// - Connection tunables are cleared to avoid leakage from the host.
pub fn tabjobs_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tabjobs");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("SERVER_URL", "https://tableau.invalid");
    cmd.env("SITENAME", "analytics");
    cmd.env("TOKEN_NAME", "automation");
    cmd.env("TOKEN_VALUE", "pat-secret");

    cmd.env_remove("TABLEAU_SKIP_VERIFY")
        .env_remove("TABLEAU_TIMEOUT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `tabjobs` command pointed at a mock server.
#[allow(dead_code)]
pub fn tabjobs_cmd_with_server(base_url: &str) -> Command {
    let mut cmd = tabjobs_cmd();
    cmd.env("SERVER_URL", base_url);
    cmd
}

/// Mount the sign-in and sign-out endpoints on the mock server.
#[allow(dead_code)]
pub async fn mount_session(server: &MockServer) {
    let body = format!(
        r#"<tsResponse xmlns="http://tableau.com/api">
             <credentials token="{TEST_TOKEN}">
               <site id="site-1" contentUrl="analytics"/>
               <user id="user-1"/>
             </credentials>
           </tsResponse>"#
    );
    Mock::given(method("POST"))
        .and(path("/api/3.8/auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/3.8/auth/signout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;
}
