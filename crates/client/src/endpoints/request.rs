//! Request dispatch and status checking shared by all endpoints.
//!
//! Every Tableau REST call has a single expected success status; anything
//! else is a hard failure carrying whatever the structured XML error body
//! reports. There is no retry and no backoff: a failed call fails the
//! enclosing operation immediately.

use reqwest::{RequestBuilder, Response, StatusCode};
use roxmltree::Document;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::xml;

/// Sentinel values used when the error body cannot be parsed.
const UNKNOWN_CODE: &str = "unknown code";
const UNKNOWN_SUMMARY: &str = "unknown summary";
const UNKNOWN_DETAIL: &str = "unknown detail";

/// Send a request and check the response against the endpoint's expected
/// success status.
///
/// # Errors
///
/// Returns [`ClientError::ApiError`] with the server-reported error code,
/// summary, and detail on any other status, falling back to "unknown"
/// placeholders when the error body is malformed.
pub async fn send_request(builder: RequestBuilder, expect: StatusCode) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();
    if status == expect {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    let (code, summary, detail) = parse_error_body(&body);
    debug!(status = status.as_u16(), %url, code, "API call failed");

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        code,
        summary,
        detail,
    })
}

/// Best-effort extraction of `<error code=..><summary/><detail/></error>`
/// from a Tableau error body.
fn parse_error_body(body: &str) -> (String, String, String) {
    let Ok(doc) = Document::parse(body) else {
        return (
            UNKNOWN_CODE.to_string(),
            UNKNOWN_SUMMARY.to_string(),
            UNKNOWN_DETAIL.to_string(),
        );
    };
    let root = doc.root_element();

    let code = xml::find_descendant(root, "error")
        .map(|e| xml::attr(e, "code").unwrap_or_else(|| "unknown".to_string()))
        .unwrap_or_else(|| UNKNOWN_CODE.to_string());
    let summary = xml::find_descendant(root, "summary")
        .and_then(xml::text)
        .unwrap_or_else(|| UNKNOWN_SUMMARY.to_string());
    let detail = xml::find_descendant(root, "detail")
        .and_then(xml::text)
        .unwrap_or_else(|| UNKNOWN_DETAIL.to_string());

    (code, summary, detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body_full() {
        let body = r#"<tsResponse xmlns="http://tableau.com/api">
            <error code="401002">
              <summary>Unauthorized Access</summary>
              <detail>Invalid authentication credentials were provided.</detail>
            </error>
        </tsResponse>"#;
        let (code, summary, detail) = parse_error_body(body);
        assert_eq!(code, "401002");
        assert_eq!(summary, "Unauthorized Access");
        assert_eq!(detail, "Invalid authentication credentials were provided.");
    }

    #[test]
    fn test_parse_error_body_error_without_code_attr() {
        let body = r#"<tsResponse><error><summary>s</summary></error></tsResponse>"#;
        let (code, summary, detail) = parse_error_body(body);
        assert_eq!(code, "unknown");
        assert_eq!(summary, "s");
        assert_eq!(detail, "unknown detail");
    }

    #[test]
    fn test_parse_error_body_not_xml() {
        let (code, summary, detail) = parse_error_body("502 Bad Gateway");
        assert_eq!(code, "unknown code");
        assert_eq!(summary, "unknown summary");
        assert_eq!(detail, "unknown detail");
    }
}
