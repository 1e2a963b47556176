//! Datasource methods for [`TableauClient`].

use crate::client::TableauClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Datasource;

impl TableauClient {
    /// Fetch a datasource by id.
    pub async fn datasource(&self, datasource_id: &str) -> Result<Datasource> {
        endpoints::get_datasource(
            &self.http,
            &self.base_url,
            &self.api_version,
            self.session()?,
            datasource_id,
        )
        .await
    }

    /// Trigger an extract refresh for a datasource, returning the id of
    /// the background job the server spawned.
    pub async fn refresh_datasource(&self, datasource_id: &str) -> Result<String> {
        endpoints::refresh_datasource(
            &self.http,
            &self.base_url,
            &self.api_version,
            self.session()?,
            datasource_id,
        )
        .await
    }
}
