use serde::{Deserialize, Serialize};

/// Response of `POST /api/token` for both grant types.
///
/// `refresh_token` is only guaranteed for `authorization_code`; Spotify may
/// omit it when refreshing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// Subset of `GET /me` the authorization server needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// The record written to `<tokens_dir>/<user_id>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub display_name: String,
    pub refresh_token: String,
    pub scope: String,
    pub img_src: String,
}

impl UserRecord {
    pub fn new(profile: &UserProfile, refresh_token: &str, scope: &str) -> Self {
        UserRecord {
            display_name: profile.display_name.clone().unwrap_or_default(),
            refresh_token: refresh_token.to_string(),
            scope: scope.to_string(),
            img_src: profile
                .images
                .first()
                .map(|image| image.url.clone())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefreshParams {
    pub refresh_token: Option<String>,
}

/// Body of a successful `/refresh_token`. Carries no refresh token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    pub image: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRequest {
    pub uri: String,
}
