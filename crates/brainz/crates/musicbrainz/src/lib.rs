pub mod id;
pub use id::Id;

pub mod entities;
pub use entities::{Artist, Recording, Release, ReleaseGroup, Track};
pub use entities::release::Status;

pub mod query;
pub use query::Query;

use serde::Deserialize;

pub const API_ROOT: &str = "https://musicbrainz.org/ws/2/";

/// MusicBrainz asks for no more than one request per second.
/// - <https://musicbrainz.org/doc/MusicBrainz_API/Rate_Limiting>
pub const REQUESTS_PER_SECOND: core::num::NonZeroU32 = core::num::NonZeroU32::MIN;

/// Error payload returned alongside unsuccessful statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub help: Option<String>,
}
impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.error)
    }
}

pub type Error = shared::response::Error<ApiError>;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Sub-queries to include in a lookup or browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Include {
    UrlRelations,
    ReleaseGroups,
}
impl Include {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UrlRelations => "url-rels",
            Self::ReleaseGroups => "release-groups",
        }
    }

    fn join(includes: &[Include]) -> String {
        includes.iter().map(Include::as_str).collect::<Vec<_>>().join("+")
    }
}

#[derive(Deserialize)]
struct ReleaseGroupList {
    #[serde(rename = "release-groups")]
    release_groups: Vec<ReleaseGroup>,
}

#[derive(Deserialize)]
struct RecordingList {
    recordings: Vec<Recording>,
}

#[derive(Deserialize)]
struct ReleaseList {
    releases: Vec<Release>,
}

#[derive(Deserialize)]
struct ArtistList {
    artists: Vec<Artist>,
}

pub struct Client {
    net: reqwest::Client,
    throttle: shared::Throttle,
}
impl Client {
    pub fn new(net: reqwest::Client) -> Self {
        Self::with_throttle(net, shared::Throttle::per_second(REQUESTS_PER_SECOND))
    }

    pub fn with_throttle(net: reqwest::Client, throttle: shared::Throttle) -> Self {
        Self { net, throttle }
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str, parameters: &[(&str, &str)]) -> Result<T> {
        self.throttle.ready().await;
        tracing::trace!(path, ?parameters, "musicbrainz request");
        let response = self.net.get(format!("{API_ROOT}{path}"))
            .query(parameters)
            .query(&[("fmt", "json")])
            .send().await?;
        shared::response::read_json(response).await
    }

    /// - <https://musicbrainz.org/doc/MusicBrainz_API/Search#Release_Group>
    pub async fn search_release_groups(&self, query: &Query) -> Result<Vec<ReleaseGroup>> {
        let list: ReleaseGroupList = self.get("release-group", &[("query", query.to_string().as_str())]).await?;
        Ok(list.release_groups)
    }

    /// - <https://musicbrainz.org/doc/MusicBrainz_API/Search#Recording>
    pub async fn search_recordings(&self, query: &Query) -> Result<Vec<Recording>> {
        let list: RecordingList = self.get("recording", &[("query", query.to_string().as_str())]).await?;
        Ok(list.recordings)
    }

    /// - <https://musicbrainz.org/doc/MusicBrainz_API/Search#Artist>
    pub async fn search_artists(&self, query: &Query) -> Result<Vec<Artist>> {
        let list: ArtistList = self.get("artist", &[("query", query.to_string().as_str())]).await?;
        Ok(list.artists)
    }

    /// Every release with the given track on it.
    /// - <https://musicbrainz.org/doc/MusicBrainz_API#Browse>
    pub async fn browse_releases_by_track(&self, track: Id<Track>, status: Status, includes: &[Include]) -> Result<Vec<Release>> {
        let includes = Include::join(includes);
        let mut parameters = vec![("track", track.as_str()), ("status", status.as_str())];
        if !includes.is_empty() {
            parameters.push(("inc", includes.as_str()));
        }
        let list: ReleaseList = self.get("release", &parameters).await?;
        Ok(list.releases)
    }

    /// - <https://musicbrainz.org/doc/MusicBrainz_API#Lookups>
    pub async fn lookup_artist(&self, id: Id<Artist>, includes: &[Include]) -> Result<Artist> {
        let includes = Include::join(includes);
        let path = format!("artist/{id}");
        if includes.is_empty() {
            self.get(&path, &[]).await
        } else {
            self.get(&path, &[("inc", includes.as_str())]).await
        }
    }
}
