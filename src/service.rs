//! Everything wired together from a [`Config`].

use std::sync::Arc;

use crate::config::Config;
use crate::finder::{CatalogFinder, CompositeFinder, DiscographyFinder, EncyclopediaFinder, ScrobbleFinder};
use crate::message::MusicInfoResult;
use crate::provider::Brainz;
use crate::query::{ArtistMbid, ArtistName};

pub struct MusicInfoService {
    brainz: Arc<Brainz>,
    wiki: Arc<wikipedia::Client>,
    lastfm: Option<Arc<lastfm::Client>>,
    spotify: Option<Arc<spotify::Client>>,
    encyclopedia: EncyclopediaFinder,
}
impl MusicInfoService {
    /// Every client shares one network client carrying the configured user agent and timeout.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let net = config.program.to_program_info().build_client(config.http.timeout())?;

        let brainz = Arc::new(Brainz::new(net.clone()));
        let wiki = Arc::new(wikipedia::Client::new(net.clone()));
        let lastfm = config.lastfm.api_key.clone()
            .map(|key| Arc::new(lastfm::Client::new(key, net.clone())));
        let spotify = config.spotify.credentials()
            .map(|credentials| Arc::new(spotify::Client::new(credentials, net)));
        let encyclopedia = EncyclopediaFinder::new(wiki.clone(), brainz.clone());

        tracing::debug!(lastfm = lastfm.is_some(), spotify = spotify.is_some(), "music info service ready");
        Ok(Self { brainz, wiki, lastfm, spotify, encyclopedia })
    }

    /// A finder over every provider that has been configured.
    /// MusicBrainz and Wikipedia need no credentials and are always present.
    pub fn art_finder(&self) -> CompositeFinder {
        let mut composite = CompositeFinder::new();
        composite
            .add(Arc::new(DiscographyFinder::new(self.brainz.clone())))
            .add(Arc::new(self.encyclopedia.clone()));
        if let Some(lastfm) = &self.lastfm {
            composite.add(Arc::new(ScrobbleFinder::new(lastfm.clone())));
        }
        if let Some(spotify) = &self.spotify {
            composite.add(Arc::new(CatalogFinder::new(spotify.clone())));
        }
        composite
    }

    pub async fn article_summary(&self, artist: &ArtistName, artist_id: Option<ArtistMbid>) -> MusicInfoResult<wikipedia::Summary> {
        self.encyclopedia.article_summary(artist, artist_id).await
    }

    pub fn encyclopedia(&self) -> &EncyclopediaFinder {
        &self.encyclopedia
    }

    pub fn brainz(&self) -> &Brainz {
        &self.brainz
    }

    pub fn wikipedia(&self) -> &wikipedia::Client {
        &self.wiki
    }

    pub fn lastfm(&self) -> Option<&lastfm::Client> {
        self.lastfm.as_deref()
    }

    pub fn spotify(&self) -> Option<&spotify::Client> {
        self.spotify.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::ArtFinder;

    #[tokio::test]
    async fn providers_follow_the_configuration() {
        let service = MusicInfoService::new(&Config::default()).unwrap();
        assert_eq!(service.art_finder().len(), 2);
        assert!(service.lastfm().is_none());
        assert!(service.spotify().is_none());

        let config = Config::parse(r#"
            [lastfm]
            api_key = "0123456789abcdef0123456789abcdef"
            [spotify]
            client_id = "id"
            client_secret = "secret"
        "#).unwrap();
        let service = MusicInfoService::new(&config).unwrap();
        assert_eq!(service.art_finder().len(), 4);
        assert!(service.lastfm().is_some());
        assert!(service.spotify().is_some());
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn nevermind_has_art() {
        use futures_util::StreamExt;

        let service = MusicInfoService::new(&Config::default()).unwrap();
        let query = crate::query::AlbumQuery::new("Nirvana", "Nevermind");
        let images: Vec<_> = service.art_finder().find_album_art(&query).collect().await;
        assert!(!images.is_empty());
    }
}
