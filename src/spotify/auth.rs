use crate::types::TokenResponse;

use super::{SpotifyClient, SpotifyError, TOKEN_ENDPOINT, check_status};

impl SpotifyClient {
    /// Builds the URL the user is redirected to by `/login`.
    ///
    /// The query carries `response_type=code`, the client id, the requested
    /// scope, the registered redirect URI and the `state` nonce. When
    /// `show_dialog` is configured Spotify asks the user to approve again even
    /// if the app was authorized before.
    ///
    /// # Example
    ///
    /// ```
    /// let url = client.authorize_url("q1w2e3r4t5y6u7i8");
    /// // https://accounts.spotify.com/authorize?response_type=code&client_id=...&state=q1w2e3r4t5y6u7i8
    /// ```
    pub fn authorize_url(&self, state: &str) -> String {
        let mut query = vec![
            ("response_type", "code"),
            ("client_id", self.client_id.as_str()),
            ("scope", self.scope.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("state", state),
        ];
        if self.show_dialog {
            query.push(("show_dialog", "true"));
        }

        format!(
            "{accounts}/authorize?{query}",
            accounts = self.accounts_url,
            query = serde_urlencoded::to_string(&query).unwrap_or_default()
        )
    }

    /// Exchanges an authorization code for access and refresh tokens.
    ///
    /// Sends `grant_type=authorization_code` together with the code and the
    /// redirect URI, authenticating with the client id and secret over HTTP
    /// Basic auth.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Http`] on network failures or an unparsable body
    /// - [`SpotifyError::Status`] when Spotify rejects the code
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, SpotifyError> {
        self.request_token(&[
            ("code", code),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .await
    }

    /// Exchanges a refresh token for a fresh access token.
    ///
    /// # Errors
    ///
    /// Same as [`SpotifyClient::exchange_code`].
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<TokenResponse, SpotifyError> {
        self.request_token(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<TokenResponse, SpotifyError> {
        let url = format!("{}{}", self.accounts_url, TOKEN_ENDPOINT);
        tracing::debug!(%url, "requesting token");

        let res = self
            .http
            .post(&url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(form)
            .send()
            .await
            .map_err(|source| SpotifyError::Http {
                endpoint: TOKEN_ENDPOINT,
                source,
            })?;

        check_status(res, TOKEN_ENDPOINT)?
            .json::<TokenResponse>()
            .await
            .map_err(|source| SpotifyError::Http {
                endpoint: TOKEN_ENDPOINT,
                source,
            })
    }
}
