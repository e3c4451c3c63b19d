use crate::types::UserProfile;

use super::{ME_ENDPOINT, SpotifyClient, SpotifyError, check_status};

impl SpotifyClient {
    /// Fetches the profile of the user owning `access_token`.
    pub async fn current_user(&self, access_token: &str) -> Result<UserProfile, SpotifyError> {
        let url = format!("{}{}", self.api_url, ME_ENDPOINT);

        let res = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|source| SpotifyError::Http {
                endpoint: ME_ENDPOINT,
                source,
            })?;

        check_status(res, ME_ENDPOINT)?
            .json::<UserProfile>()
            .await
            .map_err(|source| SpotifyError::Http {
                endpoint: ME_ENDPOINT,
                source,
            })
    }
}
