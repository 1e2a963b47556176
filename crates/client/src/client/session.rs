//! Sign-in and sign-out methods for [`TableauClient`].
//!
//! # Invariants
//! - `sign_in` replaces any previously held session.
//! - `sign_out` invalidates the server-side session and clears the local
//!   one even though the server call may have already invalidated it.

use secrecy::ExposeSecret;
use tracing::info;

use crate::client::TableauClient;
use crate::endpoints;
use crate::error::Result;

impl TableauClient {
    /// Sign in with the configured personal access token.
    ///
    /// On success the client holds the session token, site id, and user id
    /// used by every subsequent call.
    pub async fn sign_in(&mut self) -> Result<()> {
        let session = endpoints::sign_in(
            &self.http,
            &self.base_url,
            &self.api_version,
            &self.credentials,
        )
        .await?;

        info!(
            site_id = %session.site_id,
            user_id = %session.user_id,
            "Signed in to Tableau server"
        );
        self.session = Some(session);
        Ok(())
    }

    /// Destroy the active session and invalidate its token.
    pub async fn sign_out(&mut self) -> Result<()> {
        let session = self.session()?;
        endpoints::sign_out(&self.http, &self.base_url, &self.api_version, session).await?;
        self.session = None;
        info!("Signed out of Tableau server");
        Ok(())
    }

    /// Id of the site the current session is signed in to.
    pub fn site_id(&self) -> Result<&str> {
        Ok(self.session()?.site_id.as_str())
    }

    /// Expose the raw session token. Test hook; production code sends the
    /// token through the endpoint functions only.
    #[doc(hidden)]
    pub fn session_token(&self) -> Result<String> {
        Ok(self.session()?.token.expose_secret().to_string())
    }
}
