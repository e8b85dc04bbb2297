use async_trait::async_trait;

use brainz::art::ImageInfo;
use brainz::music::{Artist, Include, Query, Recording, Release, ReleaseGroup, Status};

use super::DiscographyProvider;
use crate::message::MusicInfoResult;
use crate::query::{AlbumTitle, ArtistMbid, ArtistName, RecordingTitle, ReleaseGroupMbid, ReleaseMbid, TrackMbid};

/// MusicBrainz, with the Cover Art Archive for images.
pub struct Brainz {
    pub music: brainz::music::Client,
    pub art: brainz::art::Client,
}
impl Brainz {
    pub fn new(net: reqwest::Client) -> Self {
        Self {
            music: brainz::music::Client::new(net.clone()),
            art: brainz::art::Client::new(net),
        }
    }
}

#[async_trait]
impl DiscographyProvider for Brainz {
    async fn search_release_groups(&self, artist: &ArtistName, title: &AlbumTitle) -> MusicInfoResult<Vec<ReleaseGroup>> {
        let query = Query::artist(artist.as_str()).and_release_group(title.as_str()).and_status(Status::Official);
        Ok(self.music.search_release_groups(&query).await?)
    }

    async fn search_recordings(&self, artist: &ArtistName, title: &RecordingTitle) -> MusicInfoResult<Vec<Recording>> {
        let query = Query::artist(artist.as_str()).and_recording(title.as_str()).and_status(Status::Official);
        Ok(self.music.search_recordings(&query).await?)
    }

    async fn browse_track_releases(&self, track: TrackMbid) -> MusicInfoResult<Vec<Release>> {
        Ok(self.music.browse_releases_by_track(track, Status::Official, &[Include::ReleaseGroups]).await?)
    }

    async fn search_artists(&self, artist: &ArtistName) -> MusicInfoResult<Vec<Artist>> {
        Ok(self.music.search_artists(&Query::artist(artist.as_str())).await?)
    }

    async fn lookup_artist_relations(&self, artist: ArtistMbid) -> MusicInfoResult<Artist> {
        Ok(self.music.lookup_artist(artist, &[Include::UrlRelations]).await?)
    }

    async fn release_group_art(&self, group: ReleaseGroupMbid) -> MusicInfoResult<Vec<ImageInfo>> {
        Ok(self.art.release_group(group).await?.into_image_infos())
    }

    async fn release_art(&self, release: ReleaseMbid) -> MusicInfoResult<Vec<ImageInfo>> {
        Ok(self.art.release(release).await?.into_image_infos())
    }
}
