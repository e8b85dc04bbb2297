use std::sync::Arc;

use futures_util::stream::{self, StreamExt};

use brainz::art::{ImageInfo, ImageSize};

use super::ArtFinder;
use crate::image::{ActualSize, ImageType, Provider, RemoteImage, SizeBucket};
use crate::message::{non_empty, MusicInfoMessage};
use crate::provider::DiscographyProvider;
use crate::query::{AlbumQuery, AlbumTitle, ArtistName, ArtistQuery, RecordingTitle, ReleaseGroupMbid, ReleaseMbid, TrackMbid, TrackQuery};
use crate::stream::{deferred, distinct_by_location, empty, guarded, on_empty, or_log, ArtStream};

const FINDER: &str = "discography";

/// Cover art from the Cover Art Archive, located through MusicBrainz.
///
/// Album art prefers the release group, then the release, then every official release group
/// matching the names. Track art goes through the releases the track appears on.
/// There is no artist art here.
pub struct DiscographyFinder {
    provider: Arc<dyn DiscographyProvider>,
}
impl DiscographyFinder {
    pub fn new(provider: Arc<dyn DiscographyProvider>) -> Self {
        Self { provider }
    }
}

impl ArtFinder for DiscographyFinder {
    fn find_album_art(&self, query: &AlbumQuery) -> ArtStream {
        let by_name = query.is_searchable().then(|| (query.artist.clone(), query.title.clone()));
        let provider = self.provider.clone();
        let fallback = move || match by_name {
            Some((artist, title)) => album_art_by_name(provider, artist, title),
            None => empty(),
        };

        match (query.release_group, query.release) {
            (Some(group), _) => on_empty(release_group_art(self.provider.clone(), group), fallback),
            (None, Some(release)) => on_empty(release_art(self.provider.clone(), release), fallback),
            (None, None) => fallback(),
        }
    }

    fn find_artist_art(&self, _: &ArtistQuery) -> ArtStream {
        empty()
    }

    fn find_track_art(&self, query: &TrackQuery) -> ArtStream {
        let by_name = query.is_searchable().then(|| (query.artist.clone(), query.title.clone()));
        let provider = self.provider.clone();
        let fallback = move || match by_name {
            Some((artist, title)) => track_art_by_name(provider, artist, title),
            None => empty(),
        };

        match query.track {
            Some(track) => on_empty(track_art_by_id(self.provider.clone(), track), fallback),
            None => fallback(),
        }
    }
}

fn release_group_art(provider: Arc<dyn DiscographyProvider>, group: ReleaseGroupMbid) -> ArtStream {
    deferred(async move {
        let infos = or_log(guarded(provider.release_group_art(group)).await, FINDER, &group);
        to_images(infos)
    })
}

fn release_art(provider: Arc<dyn DiscographyProvider>, release: ReleaseMbid) -> ArtStream {
    deferred(async move {
        let infos = or_log(guarded(provider.release_art(release)).await, FINDER, &release);
        to_images(infos)
    })
}

/// Every matching group is fetched at once; images arrive in whatever order the groups answer.
fn album_art_by_name(provider: Arc<dyn DiscographyProvider>, artist: ArtistName, title: AlbumTitle) -> ArtStream {
    deferred(async move {
        let context = format!("{artist} {title}");
        let groups = guarded(provider.search_release_groups(&artist, &title)).await
            .and_then(|groups| non_empty(groups, || MusicInfoMessage::not_found(format!("No release groups for {context}"))));
        let groups = or_log(groups, FINDER, &context);

        let art = stream::iter(groups).map(move |group| release_group_art(provider.clone(), group.id));
        distinct_by_location(art.flatten_unordered(None))
    })
}

fn track_art_by_id(provider: Arc<dyn DiscographyProvider>, track: TrackMbid) -> ArtStream {
    deferred(async move {
        let releases = guarded(provider.browse_track_releases(track)).await
            .and_then(|releases| non_empty(releases, || MusicInfoMessage::not_found(format!("No releases for {track}"))));
        let releases = or_log(releases, FINDER, &track);

        let art = stream::iter(releases).map(move |release| release_art(provider.clone(), release.id));
        distinct_by_location(art.flatten_unordered(None))
    })
}

/// Releases are visited one after another, in the order the recordings list them.
fn track_art_by_name(provider: Arc<dyn DiscographyProvider>, artist: ArtistName, title: RecordingTitle) -> ArtStream {
    deferred(async move {
        let context = format!("{artist} {title}");
        let recordings = guarded(provider.search_recordings(&artist, &title)).await
            .and_then(|recordings| non_empty(recordings, || MusicInfoMessage::not_found(format!("No recordings for {context}"))));
        let releases = or_log(recordings, FINDER, &context).into_iter()
            .flat_map(|recording| recording.releases);

        let art = stream::iter(releases).map(move |release| release_art(provider.clone(), release.id));
        distinct_by_location(art.flatten())
    })
}

fn to_images(infos: Vec<ImageInfo>) -> ArtStream {
    stream::iter(infos.into_iter().map(to_remote_image)).boxed()
}

fn to_remote_image(info: ImageInfo) -> RemoteImage {
    let bucket = match info.size {
        ImageSize::Original => SizeBucket::Original,
        ImageSize::Px250 => SizeBucket::Medium,
        ImageSize::Px500 => SizeBucket::Large,
        ImageSize::Px1200 => SizeBucket::ExtraLarge,
        ImageSize::Unknown => SizeBucket::Unknown,
    };
    let types = info.types.into_iter().map(image_type);
    RemoteImage::new(&info.location, bucket, types, Provider::MusicBrainz, info.size.pixels().map(ActualSize::square))
}

fn image_type(kind: brainz::art::ImageType) -> ImageType {
    use brainz::art::ImageType as Art;
    match kind {
        Art::Front => ImageType::Front,
        Art::Back => ImageType::Back,
        Art::Booklet => ImageType::Booklet,
        Art::Medium => ImageType::Medium,
        Art::Tray => ImageType::Tray,
        Art::Obi => ImageType::Obi,
        Art::Spine => ImageType::Spine,
        Art::Track => ImageType::Track,
        Art::Liner => ImageType::Liner,
        Art::Sticker => ImageType::Sticker,
        Art::Poster => ImageType::Poster,
        Art::Watermark => ImageType::Watermark,
        Art::Other => ImageType::Other,
        Art::Unknown => ImageType::Unknown,
        Art::Unrecognized(name) => ImageType::Unrecognized(name),
    }
}
