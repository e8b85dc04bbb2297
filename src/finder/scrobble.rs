use std::sync::Arc;

use futures_util::stream::{self, StreamExt};

use super::ArtFinder;
use crate::image::{ActualSize, ImageType, Provider, RemoteImage, SizeBucket};
use crate::message::{non_empty, MusicInfoMessage, MusicInfoResult};
use crate::provider::ScrobbleProvider;
use crate::query::{AlbumQuery, ArtistQuery, TrackQuery};
use crate::stream::{deferred, distinct_by, empty, guarded, on_empty, or_log, ArtStream};

const FINDER: &str = "scrobble";

/// Art attached to Last.fm's canonical album, artist and track entities.
///
/// An identifier is tried first when there is one, then the names. The release group
/// identifier means nothing to Last.fm and is ignored.
pub struct ScrobbleFinder {
    provider: Arc<dyn ScrobbleProvider>,
}
impl ScrobbleFinder {
    pub fn new(provider: Arc<dyn ScrobbleProvider>) -> Self {
        Self { provider }
    }
}

impl ArtFinder for ScrobbleFinder {
    fn find_album_art(&self, query: &AlbumQuery) -> ArtStream {
        let provider = self.provider.clone();
        let by_name = query.is_searchable().then(|| (query.artist.clone(), query.title.clone()));
        let fallback = move || match by_name {
            Some((artist, title)) => deferred(async move {
                let album = guarded(provider.album_info(lastfm::AlbumLookup::Name { artist: artist.as_str(), album: title.as_str() })).await;
                to_images(album.map(|album| album.image), &format!("{artist} {title}"))
            }),
            None => empty(),
        };

        match query.release {
            Some(release) => {
                let provider = self.provider.clone();
                let by_id = deferred(async move {
                    let mbid = release.contextless();
                    let album = guarded(provider.album_info(lastfm::AlbumLookup::Mbid(&mbid))).await;
                    to_images(album.map(|album| album.image), &release)
                });
                on_empty(by_id, fallback)
            }
            None => fallback(),
        }
    }

    fn find_artist_art(&self, query: &ArtistQuery) -> ArtStream {
        let provider = self.provider.clone();
        let by_name = query.is_searchable().then(|| query.artist.clone());
        let fallback = move || match by_name {
            Some(artist) => deferred(async move {
                let found = guarded(provider.artist_info(lastfm::ArtistLookup::Name(artist.as_str()))).await;
                to_images(found.map(|found| found.image), &artist)
            }),
            None => empty(),
        };

        match query.artist_id {
            Some(id) => {
                let provider = self.provider.clone();
                let by_id = deferred(async move {
                    let mbid = id.contextless();
                    let found = guarded(provider.artist_info(lastfm::ArtistLookup::Mbid(&mbid))).await;
                    to_images(found.map(|found| found.image), &id)
                });
                on_empty(by_id, fallback)
            }
            None => fallback(),
        }
    }

    fn find_track_art(&self, query: &TrackQuery) -> ArtStream {
        let provider = self.provider.clone();
        let by_name = query.is_searchable().then(|| (query.artist.clone(), query.title.clone()));
        let fallback = move || match by_name {
            Some((artist, title)) => deferred(async move {
                let track = guarded(provider.track_info(lastfm::TrackLookup::Name { artist: artist.as_str(), track: title.as_str() })).await;
                to_images(track.map(album_images), &format!("{artist} {title}"))
            }),
            None => empty(),
        };

        match query.track {
            Some(id) => {
                let provider = self.provider.clone();
                let by_id = deferred(async move {
                    let mbid = id.contextless();
                    let track = guarded(provider.track_info(lastfm::TrackLookup::Mbid(&mbid))).await;
                    to_images(track.map(album_images), &id)
                });
                on_empty(by_id, fallback)
            }
            None => fallback(),
        }
    }
}

/// Tracks have no art of their own.
fn album_images(track: lastfm::Track) -> Vec<lastfm::Image> {
    track.album.map(|album| album.image).unwrap_or_default()
}

/// Last.fm lists the same location under several nominal sizes, and pads missing sizes with blank ones.
fn to_images(images: MusicInfoResult<Vec<lastfm::Image>>, context: &dyn core::fmt::Display) -> ArtStream {
    let images = images
        .map(|images| images.into_iter().filter(|image| !image.text.trim().is_empty()).collect())
        .and_then(|images| non_empty(images, || MusicInfoMessage::generic(format!("No images for {context}"))));
    let images = or_log(images, FINDER, context);

    distinct_by(stream::iter(images), |image| image.text.clone())
        .map(|image| to_remote_image(&image))
        .boxed()
}

fn to_remote_image(image: &lastfm::Image) -> RemoteImage {
    use lastfm::ImageSize;
    let bucket = match image.size {
        ImageSize::Mega => SizeBucket::ExtraLarge,
        ImageSize::ExtraLarge => SizeBucket::Large,
        ImageSize::Large => SizeBucket::Medium,
        ImageSize::Medium | ImageSize::Small => SizeBucket::Small,
        ImageSize::Unrecognized(_) => SizeBucket::Unknown,
    };
    RemoteImage::new(&image.text, bucket, [ImageType::Front], Provider::LastFm, image.square_size().map(ActualSize::square))
}
