//! Authentication endpoints: sign-in and sign-out.

use reqwest::{Client, StatusCode};
use roxmltree::Document;
use secrecy::ExposeSecret;
use tracing::debug;

use crate::auth::{Credentials, Session};
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::xml;

/// Header carrying the session token on every authenticated call.
pub(crate) const AUTH_HEADER: &str = "X-Tableau-Auth";

/// Sign in with a personal access token, returning the session.
///
/// `POST /api/{version}/auth/signin` with a `tsRequest` credentials body;
/// the response carries the session token plus the site and user ids.
pub async fn sign_in(
    client: &Client,
    base_url: &str,
    api_version: &str,
    credentials: &Credentials,
) -> Result<Session> {
    debug!(token_name = %credentials.token_name, "Signing in to Tableau server");

    let url = format!("{}/api/{}/auth/signin", base_url, api_version);
    let body = format!(
        r#"<tsRequest><credentials personalAccessTokenName="{}" personalAccessTokenSecret="{}"><site contentUrl="{}"/></credentials></tsRequest>"#,
        xml_escape(&credentials.token_name),
        xml_escape(credentials.token_secret.expose_secret()),
        xml_escape(&credentials.site),
    );

    let builder = client
        .post(&url)
        .header("Content-Type", "application/xml")
        .body(body);
    let response = send_request(builder, StatusCode::OK).await?;
    let text = response.text().await?;

    parse_sign_in(&text)
}

/// Destroy the active session, invalidating its token.
///
/// `POST /api/{version}/auth/signout`, expected status 204.
pub async fn sign_out(
    client: &Client,
    base_url: &str,
    api_version: &str,
    session: &Session,
) -> Result<()> {
    debug!("Signing out of Tableau server");

    let url = format!("{}/api/{}/auth/signout", base_url, api_version);
    let builder = client
        .post(&url)
        .header(AUTH_HEADER, session.token.expose_secret());
    send_request(builder, StatusCode::NO_CONTENT).await?;
    Ok(())
}

fn parse_sign_in(body: &str) -> Result<Session> {
    let doc = Document::parse(body)
        .map_err(|e| ClientError::InvalidResponse(format!("sign-in response is not XML: {e}")))?;
    let root = doc.root_element();

    let credentials = xml::find_descendant(root, "credentials").ok_or_else(|| {
        ClientError::InvalidResponse("sign-in response has no credentials element".to_string())
    })?;
    let token = xml::attr(credentials, "token").ok_or_else(|| {
        ClientError::InvalidResponse("credentials element has no token".to_string())
    })?;
    let site_id = xml::find_descendant(credentials, "site")
        .and_then(|n| xml::attr(n, "id"))
        .ok_or_else(|| {
            ClientError::InvalidResponse("sign-in response has no site id".to_string())
        })?;
    let user_id = xml::find_descendant(credentials, "user")
        .and_then(|n| xml::attr(n, "id"))
        .ok_or_else(|| {
            ClientError::InvalidResponse("sign-in response has no user id".to_string())
        })?;

    Ok(Session::new(token, site_id, user_id))
}

/// Escape a string for use inside an XML attribute value.
fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
