//! Client for the Cover Art Archive.
//! - <https://musicbrainz.org/doc/Cover_Art_Archive/API>

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

pub const API_ROOT: &str = "https://coverartarchive.org/";

pub type Error = shared::response::Error<shared::response::NoApiError>;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Identifier of an uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(u64);
impl Id {
    pub fn into_inner(self) -> u64 {
        self.0
    }
}
impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
impl From<Id> for u64 {
    fn from(value: Id) -> Self {
        value.into_inner()
    }
}
impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Older listings quote the number.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw { Number(u64), Text(String) }
        match Raw::deserialize(deserializer)? {
            Raw::Number(number) => Ok(Self(number)),
            Raw::Text(text) => text.parse().map(Self).map_err(serde::de::Error::custom),
        }
    }
}

/// - <https://musicbrainz.org/doc/Cover_Art/Types>
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ImageType {
    Front,
    Back,
    Booklet,
    Medium,
    Tray,
    Obi,
    Spine,
    Track,
    Liner,
    Sticker,
    Poster,
    Watermark,
    Other,
    /// Tagged, but as nothing in particular.
    Unknown,
    Unrecognized(String),
}
impl From<String> for ImageType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Front" => Self::Front,
            "Back" => Self::Back,
            "Booklet" => Self::Booklet,
            "Medium" => Self::Medium,
            "Tray" => Self::Tray,
            "Obi" => Self::Obi,
            "Spine" => Self::Spine,
            "Track" => Self::Track,
            "Liner" => Self::Liner,
            "Sticker" => Self::Sticker,
            "Poster" => Self::Poster,
            "Watermark" => Self::Watermark,
            "Other" => Self::Other,
            "Unknown" | "UNKNOWN" => Self::Unknown,
            _ => Self::Unrecognized(value),
        }
    }
}

/// Which rendition of an image a location points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImageSize {
    Original,
    Px250,
    Px500,
    Px1200,
    Unknown,
}
impl ImageSize {
    fn from_thumbnail_key(key: &str) -> Self {
        match key {
            "250" | "small" => Self::Px250,
            "500" | "large" => Self::Px500,
            "1200" => Self::Px1200,
            _ => Self::Unknown,
        }
    }

    /// Thumbnails are square.
    pub const fn pixels(&self) -> Option<u32> {
        match self {
            Self::Px250 => Some(250),
            Self::Px500 => Some(500),
            Self::Px1200 => Some(1200),
            Self::Original | Self::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub id: Id,
    #[serde(default)]
    pub types: Vec<ImageType>,
    #[serde(default)]
    pub front: bool,
    #[serde(default)]
    pub back: bool,
    #[serde(default)]
    pub approved: bool,
    pub comment: Option<String>,
    /// Location of the original upload.
    pub image: String,
    #[serde(default)]
    pub thumbnails: BTreeMap<String, String>,
}

/// Every image uploaded for a release (or the release chosen to represent a release group).
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub images: Vec<Image>,
    /// Link to the MusicBrainz release the images belong to.
    pub release: Option<String>,
}

/// One location of one rendition of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub location: String,
    pub size: ImageSize,
    pub types: Vec<ImageType>,
}

impl Listing {
    /// Flatten every rendition of every image, skipping locations that were already listed.
    /// The legacy `small` and `large` thumbnail names repeat the `250` and `500` locations.
    pub fn into_image_infos(self) -> Vec<ImageInfo> {
        let mut seen = HashSet::new();
        let mut infos = Vec::with_capacity(self.images.len() * 4);
        for image in self.images {
            let mut renditions: Vec<(ImageSize, String)> = image.thumbnails.into_iter()
                .map(|(key, location)| (ImageSize::from_thumbnail_key(&key), location))
                .collect();
            renditions.push((ImageSize::Original, image.image));
            renditions.sort_by_key(|(size, _)| *size);

            for (size, location) in renditions {
                if location.is_empty() || !seen.insert(location.clone()) { continue }
                infos.push(ImageInfo { location, size, types: image.types.clone() });
            }
        }
        infos
    }
}

pub struct Client {
    net: reqwest::Client,
    throttle: shared::Throttle,
}
impl Client {
    pub fn new(net: reqwest::Client) -> Self {
        Self::with_throttle(net, shared::Throttle::unlimited())
    }

    pub fn with_throttle(net: reqwest::Client, throttle: shared::Throttle) -> Self {
        Self { net, throttle }
    }

    async fn listing(&self, path: String) -> Result<Listing> {
        self.throttle.ready().await;
        tracing::trace!(path, "cover art archive request");
        let response = self.net.get(format!("{API_ROOT}{path}")).send().await?;
        shared::response::read_json(response).await
    }

    /// Art for the release MusicBrainz picks to represent the group.
    /// A group without any art responds with a `404`, surfaced as [`shared::response::Error::Status`].
    pub async fn release_group(&self, id: musicbrainz::Id<musicbrainz::ReleaseGroup>) -> Result<Listing> {
        self.listing(format!("release-group/{id}")).await
    }

    pub async fn release(&self, id: musicbrainz::Id<musicbrainz::Release>) -> Result<Listing> {
        self.listing(format!("release/{id}")).await
    }
}
