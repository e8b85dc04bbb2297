//! Catalog search against the Spotify Web API, authenticated with the client credentials flow.
//! - <https://developer.spotify.com/documentation/web-api>

use serde::Deserialize;

pub mod search;
pub use search::Search;

pub const API_ROOT: &str = "https://api.spotify.com/v1/";
pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Tokens are refreshed this long before they actually expire.
const EXPIRY_MARGIN: core::time::Duration = core::time::Duration::from_secs(30);

pub const REQUESTS_PER_SECOND: core::num::NonZeroU32 = match core::num::NonZeroU32::new(10) {
    Some(rate) => rate,
    None => unreachable!(),
};

#[derive(Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}
impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Error payloads; the accounts service and the Web API disagree on the shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiError {
    Regular { error: RegularError },
    Authentication { error: String, error_description: Option<String> },
}
#[derive(Debug, Clone, Deserialize)]
pub struct RegularError {
    pub status: u16,
    pub message: String,
}
impl ApiError {
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Regular { error } => Some(error.status),
            Self::Authentication { .. } => None,
        }
    }
}
impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Regular { error } => f.write_str(&error.message),
            Self::Authentication { error, error_description: Some(description) } => write!(f, "{error}: {description}"),
            Self::Authentication { error, error_description: None } => f.write_str(error),
        }
    }
}

pub type Error = shared::response::Error<ApiError>;
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub album: Album,
}

#[derive(Deserialize, Debug)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub total: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct AlbumResults { albums: Paging<Album> }

#[derive(Debug, Deserialize)]
struct ArtistResults { artists: Paging<Artist> }

#[derive(Debug, Deserialize)]
struct TrackResults { tracks: Paging<Track> }

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

struct AccessToken {
    value: String,
    expires_at: tokio::time::Instant,
}

pub struct Client {
    net: reqwest::Client,
    credentials: Credentials,
    token: tokio::sync::Mutex<Option<AccessToken>>,
    throttle: shared::Throttle,
}
impl Client {
    pub fn new(credentials: Credentials, net: reqwest::Client) -> Self {
        Self::with_throttle(credentials, net, shared::Throttle::per_second(REQUESTS_PER_SECOND))
    }

    pub fn with_throttle(credentials: Credentials, net: reqwest::Client, throttle: shared::Throttle) -> Self {
        Self { net, credentials, token: tokio::sync::Mutex::new(None), throttle }
    }

    /// A bearer token, requesting a new one if the last has (nearly) expired.
    async fn bearer(&self) -> Result<String> {
        let mut token = self.token.lock().await;
        if let Some(token) = token.as_ref().filter(|token| token.expires_at > tokio::time::Instant::now() + EXPIRY_MARGIN) {
            return Ok(token.value.clone())
        }

        tracing::debug!("requesting spotify access token");
        let response = self.net.post(TOKEN_URL)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send().await?;
        let response: TokenResponse = shared::response::read_json::<_, ApiError>(response).await?;
        let value = response.access_token.clone();
        *token = Some(AccessToken {
            value: response.access_token,
            expires_at: tokio::time::Instant::now() + core::time::Duration::from_secs(response.expires_in),
        });
        Ok(value)
    }

    async fn search<T: serde::de::DeserializeOwned>(&self, search: &Search, kind: &'static str) -> Result<T> {
        let bearer = self.bearer().await?;
        self.throttle.ready().await;
        let query = search.to_string();
        tracing::trace!(%query, kind, "spotify search");
        let response = self.net.get(format!("{API_ROOT}search"))
            .bearer_auth(bearer)
            .query(&[("q", query.as_str()), ("type", kind), ("limit", "1")])
            .send().await?;
        shared::response::read_json(response).await
    }

    pub async fn search_albums(&self, search: &Search) -> Result<Paging<Album>> {
        self.search::<AlbumResults>(search, "album").await.map(|results| results.albums)
    }

    pub async fn search_artists(&self, search: &Search) -> Result<Paging<Artist>> {
        self.search::<ArtistResults>(search, "artist").await.map(|results| results.artists)
    }

    pub async fn search_tracks(&self, search: &Search) -> Result<Paging<Track>> {
        self.search::<TrackResults>(search, "track").await.map(|results| results.tracks)
    }
}
