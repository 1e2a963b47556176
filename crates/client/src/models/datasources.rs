//! Datasource model and response parsing.

use roxmltree::Document;

use crate::error::{ClientError, Result};
use crate::xml;

/// A published datasource, as returned by the single-datasource endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datasource {
    pub id: String,
    pub name: Option<String>,
    /// Name of the project the datasource lives in.
    pub project: Option<String>,
}

/// Parse the single-datasource response.
pub fn parse_datasource(body: &str) -> Result<Datasource> {
    let doc = Document::parse(body)
        .map_err(|e| ClientError::InvalidResponse(format!("datasource response is not XML: {e}")))?;
    let node = xml::find_descendant(doc.root_element(), "datasource").ok_or_else(|| {
        ClientError::InvalidResponse("datasource response has no datasource element".to_string())
    })?;
    let id = xml::attr(node, "id").ok_or_else(|| {
        ClientError::InvalidResponse("datasource element has no id".to_string())
    })?;

    Ok(Datasource {
        id,
        name: xml::attr(node, "name"),
        project: xml::find_descendant(node, "project").and_then(|n| xml::attr(n, "name")),
    })
}
