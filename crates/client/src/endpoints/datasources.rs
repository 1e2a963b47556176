//! Datasource endpoints: lookup and extract-refresh triggering.

use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use tracing::debug;

use crate::auth::Session;
use crate::endpoints::auth::AUTH_HEADER;
use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::Datasource;
use crate::models::jobs::parse_refresh_job_id;

/// Fetch a single datasource by id.
pub async fn get_datasource(
    client: &Client,
    base_url: &str,
    api_version: &str,
    session: &Session,
    datasource_id: &str,
) -> Result<Datasource> {
    let url = format!(
        "{}/api/{}/sites/{}/datasources/{}",
        base_url, api_version, session.site_id, datasource_id
    );
    let builder = client
        .get(&url)
        .header(AUTH_HEADER, session.token.expose_secret());
    let response = send_request(builder, StatusCode::OK).await?;
    crate::models::datasources::parse_datasource(&response.text().await?)
}

/// Trigger an extract refresh for a datasource, returning the id of the
/// background job the server spawned for it.
///
/// `POST /api/{version}/sites/{site}/datasources/{id}/refresh` with an
/// empty `tsRequest` body, expected status 202.
pub async fn refresh_datasource(
    client: &Client,
    base_url: &str,
    api_version: &str,
    session: &Session,
    datasource_id: &str,
) -> Result<String> {
    debug!(datasource_id, "Triggering extract refresh");

    let url = format!(
        "{}/api/{}/sites/{}/datasources/{}/refresh",
        base_url, api_version, session.site_id, datasource_id
    );
    let builder = client
        .post(&url)
        .header(AUTH_HEADER, session.token.expose_secret())
        .header("Content-Type", "application/xml")
        .body("<tsRequest/>");
    let response = send_request(builder, StatusCode::ACCEPTED).await?;
    parse_refresh_job_id(&response.text().await?)
}
