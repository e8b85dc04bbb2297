use async_trait::async_trait;

use super::CatalogProvider;
use crate::message::MusicInfoResult;

#[async_trait]
impl CatalogProvider for spotify::Client {
    async fn search_albums(&self, search: &spotify::Search) -> MusicInfoResult<spotify::Paging<spotify::Album>> {
        Ok(spotify::Client::search_albums(self, search).await?)
    }

    async fn search_artists(&self, search: &spotify::Search) -> MusicInfoResult<spotify::Paging<spotify::Artist>> {
        Ok(spotify::Client::search_artists(self, search).await?)
    }

    async fn search_tracks(&self, search: &spotify::Search) -> MusicInfoResult<spotify::Paging<spotify::Track>> {
        Ok(spotify::Client::search_tracks(self, search).await?)
    }
}
