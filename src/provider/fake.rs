//! In-memory providers that record every call they receive.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use brainz::art::{ImageInfo, ImageSize, ImageType};
use brainz::music::{Artist, Recording, Release, ReleaseGroup};

use super::{CatalogProvider, DiscographyProvider, EncyclopediaProvider, ScrobbleProvider};
use crate::message::{MusicInfoMessage, MusicInfoResult};
use crate::query::{AlbumTitle, ArtistMbid, ArtistName, RecordingTitle, ReleaseGroupMbid, ReleaseMbid, TrackMbid};

pub const GROUP_A: &str = "1b022e01-4da6-387b-8658-8678046e4cef";
pub const GROUP_B: &str = "e7b9a2f6-1c0d-4b6e-9a83-3f2d5c8e1a47";
pub const RELEASE_A: &str = "b52a8f31-b5ab-34e9-92f4-f5b7110220f0";
pub const RELEASE_B: &str = "a4864e94-6d75-4ade-bc93-0dabf3521453";
pub const TRACK: &str = "7cbf4f0c-01a4-3b4c-8a0a-e8b6a0ee4d8a";
pub const ARTIST: &str = "5b11f4ce-a62d-471e-81fc-a69a8278c7da";

#[derive(Default)]
pub struct Calls(Mutex<Vec<String>>);
impl Calls {
    pub fn record(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

pub fn release_group(id: &str) -> ReleaseGroup {
    serde_json::from_value(json!({ "id": id, "title": "Nevermind", "primary-type": "Album" })).unwrap()
}

pub fn release(id: &str) -> Release {
    serde_json::from_value(json!({ "id": id, "title": "Nevermind", "status": "Official" })).unwrap()
}

pub fn recording(releases: &[&str]) -> Recording {
    let releases: Vec<_> = releases.iter().map(|id| json!({ "id": id, "title": "Nevermind" })).collect();
    serde_json::from_value(json!({ "id": TRACK, "title": "Lithium", "releases": releases })).unwrap()
}

pub fn artist(wikidata: Option<&str>) -> Artist {
    let relations: Vec<_> = wikidata.into_iter()
        .map(|url| json!({ "type": "wikidata", "target-type": "url", "url": { "id": ARTIST, "resource": url } }))
        .collect();
    serde_json::from_value(json!({ "id": ARTIST, "name": "Nirvana", "sort-name": "Nirvana", "relations": relations })).unwrap()
}

pub fn art(locations: &[&str]) -> Vec<ImageInfo> {
    locations.iter()
        .map(|location| ImageInfo { location: location.to_string(), size: ImageSize::Px500, types: vec![ImageType::Front] })
        .collect()
}

/// Answers from fixed tables; art lookups for unknown ids come back empty.
#[derive(Default)]
pub struct FakeDiscography {
    pub calls: Calls,
    /// Art lookups that actually returned, as opposed to being dropped mid-flight.
    pub completed: Calls,
    pub release_groups: Vec<ReleaseGroup>,
    pub recordings: Vec<Recording>,
    pub track_releases: Vec<Release>,
    pub artists: Vec<Artist>,
    pub relations: Option<Artist>,
    pub art: HashMap<String, Vec<ImageInfo>>,
    pub delays: HashMap<String, Duration>,
}
impl FakeDiscography {
    async fn art_for(&self, kind: &str, id: &str) -> MusicInfoResult<Vec<ImageInfo>> {
        self.calls.record(format!("{kind}:{id}"));
        if let Some(delay) = self.delays.get(id) {
            tokio::time::sleep(*delay).await;
        }
        self.completed.record(id);
        Ok(self.art.get(id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl DiscographyProvider for FakeDiscography {
    async fn search_release_groups(&self, artist: &ArtistName, title: &AlbumTitle) -> MusicInfoResult<Vec<ReleaseGroup>> {
        self.calls.record(format!("search_release_groups:{artist}/{title}"));
        Ok(self.release_groups.clone())
    }

    async fn search_recordings(&self, artist: &ArtistName, title: &RecordingTitle) -> MusicInfoResult<Vec<Recording>> {
        self.calls.record(format!("search_recordings:{artist}/{title}"));
        Ok(self.recordings.clone())
    }

    async fn browse_track_releases(&self, track: TrackMbid) -> MusicInfoResult<Vec<Release>> {
        self.calls.record(format!("browse_track_releases:{track}"));
        Ok(self.track_releases.clone())
    }

    async fn search_artists(&self, artist: &ArtistName) -> MusicInfoResult<Vec<Artist>> {
        self.calls.record(format!("search_artists:{artist}"));
        Ok(self.artists.clone())
    }

    async fn lookup_artist_relations(&self, artist: ArtistMbid) -> MusicInfoResult<Artist> {
        self.calls.record(format!("lookup_artist_relations:{artist}"));
        self.relations.clone().ok_or_else(|| MusicInfoMessage::HttpStatus { code: 404, response: String::new() })
    }

    async fn release_group_art(&self, group: ReleaseGroupMbid) -> MusicInfoResult<Vec<ImageInfo>> {
        self.art_for("release_group_art", group.as_str()).await
    }

    async fn release_art(&self, release: ReleaseMbid) -> MusicInfoResult<Vec<ImageInfo>> {
        self.art_for("release_art", release.as_str()).await
    }
}

fn lastfm_missing() -> MusicInfoMessage {
    MusicInfoMessage::ProviderStatus { code: 6, message: "The item you supplied could not be found".to_owned() }
}

/// Keys are `mbid:<id>` or `name:<artist>/<title>` (`name:<artist>` for artists).
#[derive(Default)]
pub struct FakeScrobble {
    pub calls: Calls,
    pub albums: HashMap<String, lastfm::Album>,
    pub artists: HashMap<String, lastfm::Artist>,
    pub tracks: HashMap<String, lastfm::Track>,
}
impl FakeScrobble {
    fn lookup<T: Clone>(&self, table: &HashMap<String, T>, kind: &str, key: String) -> MusicInfoResult<T> {
        self.calls.record(format!("{kind}:{key}"));
        table.get(&key).cloned().ok_or_else(lastfm_missing)
    }
}

#[async_trait]
impl ScrobbleProvider for FakeScrobble {
    async fn album_info(&self, lookup: lastfm::AlbumLookup<'_>) -> MusicInfoResult<lastfm::Album> {
        let key = match lookup {
            lastfm::AlbumLookup::Name { artist, album } => format!("name:{artist}/{album}"),
            lastfm::AlbumLookup::Mbid(mbid) => format!("mbid:{mbid}"),
        };
        self.lookup(&self.albums, "album_info", key)
    }

    async fn artist_info(&self, lookup: lastfm::ArtistLookup<'_>) -> MusicInfoResult<lastfm::Artist> {
        let key = match lookup {
            lastfm::ArtistLookup::Name(artist) => format!("name:{artist}"),
            lastfm::ArtistLookup::Mbid(mbid) => format!("mbid:{mbid}"),
        };
        self.lookup(&self.artists, "artist_info", key)
    }

    async fn track_info(&self, lookup: lastfm::TrackLookup<'_>) -> MusicInfoResult<lastfm::Track> {
        let key = match lookup {
            lastfm::TrackLookup::Name { artist, track } => format!("name:{artist}/{track}"),
            lastfm::TrackLookup::Mbid(mbid) => format!("mbid:{mbid}"),
        };
        self.lookup(&self.tracks, "track_info", key)
    }
}

pub fn lastfm_images(images: &[(&str, &str)]) -> Vec<lastfm::Image> {
    images.iter()
        .map(|(size, text)| lastfm::Image { text: text.to_string(), size: lastfm::ImageSize::from(size.to_string()) })
        .collect()
}

/// Every search answers with the same single result.
#[derive(Default)]
pub struct FakeCatalog {
    pub calls: Calls,
    pub images: Vec<spotify::Image>,
}
impl FakeCatalog {
    fn album(&self) -> spotify::Album {
        spotify::Album { id: "2UJcKiJxNryhL050F5Z1Fk".to_owned(), name: "Nevermind".to_owned(), images: self.images.clone() }
    }
}

#[async_trait]
impl CatalogProvider for FakeCatalog {
    async fn search_albums(&self, search: &spotify::Search) -> MusicInfoResult<spotify::Paging<spotify::Album>> {
        self.calls.record(format!("search_albums:{search}"));
        Ok(spotify::Paging { items: vec![self.album()], total: Some(1) })
    }

    async fn search_artists(&self, search: &spotify::Search) -> MusicInfoResult<spotify::Paging<spotify::Artist>> {
        self.calls.record(format!("search_artists:{search}"));
        let artist = spotify::Artist { id: "6olE6TJLqED3rqDCT0FyPh".to_owned(), name: "Nirvana".to_owned(), images: self.images.clone() };
        Ok(spotify::Paging { items: vec![artist], total: Some(1) })
    }

    async fn search_tracks(&self, search: &spotify::Search) -> MusicInfoResult<spotify::Paging<spotify::Track>> {
        self.calls.record(format!("search_tracks:{search}"));
        let track = spotify::Track { id: "3x4CZcq3s1ZDIAd4JFMfXP".to_owned(), name: "Lithium".to_owned(), album: self.album() };
        Ok(spotify::Paging { items: vec![track], total: Some(1) })
    }
}

pub fn spotify_image(url: &str, side: Option<u32>) -> spotify::Image {
    spotify::Image { url: url.to_owned(), width: side, height: side }
}

/// Summaries keyed by the link or title they were asked for.
#[derive(Default)]
pub struct FakeEncyclopedia {
    pub calls: Calls,
    pub summaries: HashMap<String, wikipedia::Summary>,
}

#[async_trait]
impl EncyclopediaProvider for FakeEncyclopedia {
    async fn summary(&self, title: &wikipedia::ArticleTitle) -> MusicInfoResult<wikipedia::Summary> {
        self.calls.record(format!("summary:{}", title.as_str()));
        self.summaries.get(title.as_str()).cloned().ok_or_else(|| MusicInfoMessage::HttpStatus { code: 404, response: String::new() })
    }

    async fn summary_for_url(&self, url: &str) -> MusicInfoResult<wikipedia::Summary> {
        self.calls.record(format!("summary_for_url:{url}"));
        self.summaries.get(url).cloned().ok_or_else(|| MusicInfoMessage::generic("No (English) article found"))
    }
}

pub fn summary(image: Option<&str>) -> wikipedia::Summary {
    let image = image.map(|source| json!({ "source": source, "width": 1200, "height": 800 }));
    serde_json::from_value(json!({ "title": "Nirvana (band)", "originalimage": image, "extract": "Nirvana was an American rock band." })).unwrap()
}
