use std::sync::Arc;

use futures_util::stream::{self, StreamExt};

use wikipedia::{ArticleTitle, Summary, Thumbnail};

use super::ArtFinder;
use crate::image::{ActualSize, ImageSource, ImageType, Provider, RemoteImage, SizeBucket};
use crate::message::{MusicInfoMessage, MusicInfoResult};
use crate::provider::{DiscographyProvider, EncyclopediaProvider};
use crate::query::{AlbumQuery, ArtistMbid, ArtistName, ArtistQuery, TrackQuery};
use crate::stream::{deferred, empty, guarded, or_log, ArtStream};

const FINDER: &str = "encyclopedia";

/// The lead image of an artist's Wikipedia article.
///
/// Articles are found through the Wikidata link MusicBrainz keeps for the artist,
/// which is more reliable than guessing an article title from a name.
#[derive(Clone)]
pub struct EncyclopediaFinder {
    wiki: Arc<dyn EncyclopediaProvider>,
    discography: Arc<dyn DiscographyProvider>,
}
impl EncyclopediaFinder {
    pub fn new(wiki: Arc<dyn EncyclopediaProvider>, discography: Arc<dyn DiscographyProvider>) -> Self {
        Self { wiki, discography }
    }

    /// The article for an artist, identified directly or by the first artist matching the name.
    pub async fn article_summary(&self, artist: &ArtistName, artist_id: Option<ArtistMbid>) -> MusicInfoResult<Summary> {
        let id = match artist_id {
            Some(id) => id,
            None if artist.is_blank() => return Err(MusicInfoMessage::not_found("No artist to search for")),
            None => guarded(self.discography.search_artists(artist)).await?
                .first()
                .map(|found| found.id)
                .ok_or_else(|| MusicInfoMessage::not_found(format!("No artists: {artist}")))?,
        };

        let found = guarded(self.discography.lookup_artist_relations(id)).await
            .inspect_err(|message| tracing::error!(finder = FINDER, artist = %id, %message, "artist lookup failed"))
            .ok();
        let url = found.as_ref()
            .and_then(|found| found.wikidata_url())
            .ok_or_else(|| MusicInfoMessage::not_found(format!("Url for {id} not found")))?;

        guarded(self.wiki.summary_for_url(url)).await
    }

    pub async fn summary_by_title(&self, title: &ArticleTitle) -> MusicInfoResult<Summary> {
        guarded(self.wiki.summary(title)).await
    }

    /// Accepts a Wikipedia article link or a Wikidata item link.
    pub async fn summary_for_url(&self, url: &str) -> MusicInfoResult<Summary> {
        guarded(self.wiki.summary_for_url(url)).await
    }
}

impl ArtFinder for EncyclopediaFinder {
    fn find_album_art(&self, _: &AlbumQuery) -> ArtStream {
        empty()
    }

    fn find_artist_art(&self, query: &ArtistQuery) -> ArtStream {
        let finder = self.clone();
        let query = query.clone();
        deferred(async move {
            let image = finder.article_summary(&query.artist, query.artist_id).await
                .and_then(|summary| summary.original_image.ok_or_else(|| MusicInfoMessage::not_found("No image in article summary")))
                .map(Some);
            let image = or_log(image, FINDER, &query.artist);
            stream::iter(image.map(to_remote_image)).boxed()
        })
    }

    fn find_track_art(&self, _: &TrackQuery) -> ArtStream {
        empty()
    }
}

/// Sent back to MusicBrainz, where the artist was found.
fn to_remote_image(image: Thumbnail) -> RemoteImage {
    let source = ImageSource { provider: Provider::Wikipedia, page: Provider::MusicBrainz.page() };
    RemoteImage::new(&image.source, SizeBucket::Original, [ImageType::Front], source, Some(ActualSize::new(image.width, image.height)))
}
