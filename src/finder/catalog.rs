use std::sync::Arc;

use futures_util::stream::{self, StreamExt};

use spotify::Search;

use super::ArtFinder;
use crate::image::{ActualSize, ImageType, Provider, RemoteImage, SizeBucket};
use crate::message::{MusicInfoMessage, MusicInfoResult};
use crate::provider::CatalogProvider;
use crate::query::{AlbumQuery, ArtistQuery, TrackQuery};
use crate::stream::{deferred, distinct_by, empty, guarded, or_log, ArtStream};

const FINDER: &str = "catalog";

const MAX_SMALL_WIDTH: u32 = 250;
const MAX_MEDIUM_WIDTH: u32 = 500;
const MAX_LARGE_WIDTH: u32 = 1000;

/// Images of the top Spotify search result.
///
/// Spotify knows nothing of MusicBrainz identifiers, so every lookup is a name search.
pub struct CatalogFinder {
    provider: Arc<dyn CatalogProvider>,
}
impl CatalogFinder {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }
}

impl ArtFinder for CatalogFinder {
    fn find_album_art(&self, query: &AlbumQuery) -> ArtStream {
        if !query.is_searchable() {
            return empty();
        }
        let provider = self.provider.clone();
        let context = format!("{} {}", query.artist, query.title);
        let search = Search::new().artist(query.artist.as_str()).album(query.title.as_str());
        deferred(async move {
            let found = guarded(provider.search_albums(&search)).await
                .map(|paging| paging.items.into_iter().next().map(|album| album.images));
            to_images(found, &context)
        })
    }

    fn find_artist_art(&self, query: &ArtistQuery) -> ArtStream {
        if !query.is_searchable() {
            return empty();
        }
        let provider = self.provider.clone();
        let context = query.artist.to_string();
        let search = Search::matching(query.artist.as_str());
        deferred(async move {
            let found = guarded(provider.search_artists(&search)).await
                .map(|paging| paging.items.into_iter().next().map(|artist| artist.images));
            to_images(found, &context)
        })
    }

    fn find_track_art(&self, query: &TrackQuery) -> ArtStream {
        if !query.is_searchable() {
            return empty();
        }
        let provider = self.provider.clone();
        let context = format!("{} {}", query.artist, query.title);
        let search = Search::new().artist(query.artist.as_str()).track(query.title.as_str());
        deferred(async move {
            let found = guarded(provider.search_tracks(&search)).await
                .map(|paging| paging.items.into_iter().next().map(|track| track.album.images));
            to_images(found, &context)
        })
    }
}

fn to_images(found: MusicInfoResult<Option<Vec<spotify::Image>>>, context: &str) -> ArtStream {
    let images = found.and_then(|images| match images {
        Some(images) if !images.is_empty() => Ok(images),
        _ => Err(MusicInfoMessage::generic(format!("No images for {context}"))),
    });
    let images = or_log(images, FINDER, &context);

    distinct_by(stream::iter(images), |image| image.url.clone())
        .map(|image| to_remote_image(&image))
        .boxed()
}

fn size_bucket(size: Option<ActualSize>) -> SizeBucket {
    match size {
        None => SizeBucket::Unknown,
        Some(ActualSize { width, height }) if width == 0 || height == 0 => SizeBucket::Unknown,
        Some(ActualSize { width, .. }) if width < MAX_SMALL_WIDTH => SizeBucket::Small,
        Some(ActualSize { width, .. }) if width < MAX_MEDIUM_WIDTH => SizeBucket::Medium,
        Some(ActualSize { width, .. }) if width < MAX_LARGE_WIDTH => SizeBucket::Large,
        Some(_) => SizeBucket::ExtraLarge,
    }
}

fn to_remote_image(image: &spotify::Image) -> RemoteImage {
    let size = match (image.width, image.height) {
        (Some(width), Some(height)) => Some(ActualSize::new(width, height)),
        _ => None,
    };
    RemoteImage::new(&image.url, size_bucket(size), [ImageType::Front], Provider::Spotify, size)
}
