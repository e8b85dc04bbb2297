use async_trait::async_trait;

use super::ScrobbleProvider;
use crate::message::MusicInfoResult;

#[async_trait]
impl ScrobbleProvider for lastfm::Client {
    async fn album_info(&self, lookup: lastfm::AlbumLookup<'_>) -> MusicInfoResult<lastfm::Album> {
        Ok(lastfm::Client::album_info(self, lookup).await?)
    }

    async fn artist_info(&self, lookup: lastfm::ArtistLookup<'_>) -> MusicInfoResult<lastfm::Artist> {
        Ok(lastfm::Client::artist_info(self, lookup).await?)
    }

    async fn track_info(&self, lookup: lastfm::TrackLookup<'_>) -> MusicInfoResult<lastfm::Track> {
        Ok(lastfm::Client::track_info(self, lookup).await?)
    }
}
