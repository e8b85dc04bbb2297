//! Metadata lookups against the Last.fm API.
//! - <https://www.last.fm/api>

pub mod error;
pub mod entities;
pub mod key;

pub use entities::{Album, Artist, Image, ImageSize, Track};
pub use error::Error;
pub use key::ApiKey;
pub use shared::HyphenatedUuidString as Mbid;

pub type Result<T, E = Error> = ::core::result::Result<T, E>;

pub(crate) const API_URL: &str = "https://ws.audioscrobbler.com/2.0/";

/// Last.fm asks that applications make no more than five requests per second.
pub const REQUESTS_PER_SECOND: core::num::NonZeroU32 = match core::num::NonZeroU32::new(5) {
    Some(rate) => rate,
    None => unreachable!(),
};

#[derive(Debug, Clone, Copy)]
pub enum AlbumLookup<'a> {
    Name { artist: &'a str, album: &'a str },
    /// The MusicBrainz release ID.
    Mbid(&'a Mbid),
}

#[derive(Debug, Clone, Copy)]
pub enum ArtistLookup<'a> {
    Name(&'a str),
    Mbid(&'a Mbid),
}

#[derive(Debug, Clone, Copy)]
pub enum TrackLookup<'a> {
    Name { artist: &'a str, track: &'a str },
    Mbid(&'a Mbid),
}

pub struct Client {
    key: ApiKey,
    net: reqwest::Client, // exposed through `net()` for re-use if one would like to only have one
    throttle: shared::Throttle,
}
impl Client {
    pub fn new(key: ApiKey, net: reqwest::Client) -> Self {
        Self::with_throttle(key, net, shared::Throttle::per_second(REQUESTS_PER_SECOND))
    }

    pub fn with_throttle(key: ApiKey, net: reqwest::Client, throttle: shared::Throttle) -> Self {
        Self { key, net, throttle }
    }

    pub const fn net(&self) -> &reqwest::Client {
        &self.net
    }

    async fn dispatch<T: serde::de::DeserializeOwned>(&self, method: &'static str, parameters: &[(&str, &str)]) -> Result<T> {
        self.throttle.ready().await;
        tracing::trace!(method, ?parameters, "last.fm request");
        let response = self.net.get(API_URL)
            .query(&[("method", method), ("api_key", self.key.as_str()), ("format", "json"), ("autocorrect", "1")])
            .query(parameters)
            .send().await?;
        let status = response.status();
        let body = response.text().await?;
        parse(status, &body)
    }

    /// - <https://www.last.fm/api/show/album.getInfo>
    pub async fn album_info(&self, lookup: AlbumLookup<'_>) -> Result<Album> {
        let envelope: entities::AlbumEnvelope = match lookup {
            AlbumLookup::Name { artist, album } => self.dispatch("album.getInfo", &[("artist", artist), ("album", album)]).await?,
            AlbumLookup::Mbid(mbid) => self.dispatch("album.getInfo", &[("mbid", mbid.as_str())]).await?,
        };
        Ok(envelope.album)
    }

    /// - <https://www.last.fm/api/show/artist.getInfo>
    pub async fn artist_info(&self, lookup: ArtistLookup<'_>) -> Result<Artist> {
        let envelope: entities::ArtistEnvelope = match lookup {
            ArtistLookup::Name(artist) => self.dispatch("artist.getInfo", &[("artist", artist)]).await?,
            ArtistLookup::Mbid(mbid) => self.dispatch("artist.getInfo", &[("mbid", mbid.as_str())]).await?,
        };
        Ok(envelope.artist)
    }

    /// - <https://www.last.fm/api/show/track.getInfo>
    pub async fn track_info(&self, lookup: TrackLookup<'_>) -> Result<Track> {
        let envelope: entities::TrackEnvelope = match lookup {
            TrackLookup::Name { artist, track } => self.dispatch("track.getInfo", &[("artist", artist), ("track", track)]).await?,
            TrackLookup::Mbid(mbid) => self.dispatch("track.getInfo", &[("mbid", mbid.as_str())]).await?,
        };
        Ok(envelope.track)
    }
}

/// Last.fm reports its errors in the body, sometimes alongside a successful status.
fn parse<T: serde::de::DeserializeOwned>(status: reqwest::StatusCode, body: &str) -> Result<T> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Response<T> {
        Fail { #[serde(rename = "error")] code: u8, message: String },
        Ok(T),
    }

    if body.trim().is_empty() {
        return Err(if status.is_success() {
            Error::EmptyBody { code: status }
        } else {
            Error::Status { code: status, body: String::new() }
        })
    }

    match serde_json::from_str::<Response<T>>(body) {
        Ok(Response::Fail { code, message }) => Err(Error::Api { code, message }),
        Ok(Response::Ok(value)) if status.is_success() => Ok(value),
        Ok(Response::Ok(_)) => Err(Error::Status { code: status, body: body.to_owned() }),
        Err(_) if !status.is_success() => Err(Error::Status { code: status, body: body.to_owned() }),
        // Re-parse for a more useful error than "did not match any variant".
        Err(_) => Err(serde_json::from_str::<T>(body).err().map(Error::Deserialization)
            .unwrap_or_else(|| Error::Status { code: status, body: body.to_owned() })),
    }
}
