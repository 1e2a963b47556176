//! Credentials and session state for the Tableau REST API.

use secrecy::SecretString;

/// Personal access token credentials used at sign-in.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Name of the personal access token.
    pub token_name: String,
    /// Secret value of the personal access token.
    pub token_secret: SecretString,
    /// Site content URL. The empty string signs in to the default site.
    pub site: String,
}

/// Authenticated session returned by sign-in.
///
/// The token is a single shared credential for the whole run and is sent in
/// the `X-Tableau-Auth` header of every subsequent call; sign-out
/// invalidates it.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) token: SecretString,
    /// Server-assigned id of the site that was signed in to.
    pub site_id: String,
    /// Server-assigned id of the authenticated user.
    pub user_id: String,
}

impl Session {
    pub(crate) fn new(token: String, site_id: String, user_id: String) -> Self {
        Self {
            token: SecretString::new(token.into()),
            site_id,
            user_id,
        }
    }
}
