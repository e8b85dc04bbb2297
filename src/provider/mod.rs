//! The boundary between finders and provider clients. Finders only see these traits,
//! and every call answers with a decoded entity or a [`MusicInfoMessage`].

use async_trait::async_trait;

use brainz::art::ImageInfo;
use brainz::music::{Artist, Recording, Release, ReleaseGroup};

use crate::message::MusicInfoResult;
use crate::query::{AlbumTitle, ArtistMbid, ArtistName, RecordingTitle, ReleaseGroupMbid, ReleaseMbid, TrackMbid};

pub mod brainz_client;
pub use brainz_client::Brainz;
mod lastfm_client;
mod spotify_client;
mod wikipedia_client;

#[cfg(test)]
pub(crate) mod fake;

/// The discography database and its cover art archive.
#[async_trait]
pub trait DiscographyProvider: Send + Sync {
    /// Officially released groups matching both names.
    async fn search_release_groups(&self, artist: &ArtistName, title: &AlbumTitle) -> MusicInfoResult<Vec<ReleaseGroup>>;
    /// Recordings matching both names, each with the official releases it appears on.
    async fn search_recordings(&self, artist: &ArtistName, title: &RecordingTitle) -> MusicInfoResult<Vec<Recording>>;
    /// Official releases containing the track.
    async fn browse_track_releases(&self, track: TrackMbid) -> MusicInfoResult<Vec<Release>>;
    async fn search_artists(&self, artist: &ArtistName) -> MusicInfoResult<Vec<Artist>>;
    /// The artist along with its links to other sites.
    async fn lookup_artist_relations(&self, artist: ArtistMbid) -> MusicInfoResult<Artist>;
    async fn release_group_art(&self, group: ReleaseGroupMbid) -> MusicInfoResult<Vec<ImageInfo>>;
    async fn release_art(&self, release: ReleaseMbid) -> MusicInfoResult<Vec<ImageInfo>>;
}

/// The scrobbling service's canonical entities.
#[async_trait]
pub trait ScrobbleProvider: Send + Sync {
    async fn album_info(&self, lookup: lastfm::AlbumLookup<'_>) -> MusicInfoResult<lastfm::Album>;
    async fn artist_info(&self, lookup: lastfm::ArtistLookup<'_>) -> MusicInfoResult<lastfm::Artist>;
    async fn track_info(&self, lookup: lastfm::TrackLookup<'_>) -> MusicInfoResult<lastfm::Track>;
}

/// The streaming catalog's search.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn search_albums(&self, search: &spotify::Search) -> MusicInfoResult<spotify::Paging<spotify::Album>>;
    async fn search_artists(&self, search: &spotify::Search) -> MusicInfoResult<spotify::Paging<spotify::Artist>>;
    async fn search_tracks(&self, search: &spotify::Search) -> MusicInfoResult<spotify::Paging<spotify::Track>>;
}

/// Encyclopedia article summaries.
#[async_trait]
pub trait EncyclopediaProvider: Send + Sync {
    async fn summary(&self, title: &wikipedia::ArticleTitle) -> MusicInfoResult<wikipedia::Summary>;
    /// Accepts either an article link or a structured-data item link.
    async fn summary_for_url(&self, url: &str) -> MusicInfoResult<wikipedia::Summary>;
}
