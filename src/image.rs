use std::collections::BTreeSet;

use serde::Serialize;

/// Rough size classification, derived per provider from nominal size tags or actual dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, strum::Display)]
pub enum SizeBucket {
    Unknown,
    Small,
    Medium,
    Large,
    ExtraLarge,
    /// The image as uploaded; could be any size at all.
    Original,
}
impl SizeBucket {
    pub const fn may_be_very_large(&self) -> bool {
        matches!(self, Self::ExtraLarge | Self::Original)
    }
}

/// What an image depicts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
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
    Unknown,
    /// A type the provider reported that isn't listed here, as given.
    Unrecognized(String),
}
impl core::fmt::Display for ImageType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unrecognized(name) => f.write_str(name),
            known => core::fmt::Debug::fmt(known, f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum Provider {
    MusicBrainz,
    #[strum(to_string = "Last.fm")]
    LastFm,
    Spotify,
    Wikipedia,
}
impl Provider {
    /// Where a user can go to see what the provider knows.
    pub const fn page(&self) -> &'static str {
        match self {
            Self::MusicBrainz => "https://musicbrainz.org/",
            Self::LastFm => "https://www.last.fm/",
            Self::Spotify => "https://spotify.com/",
            Self::Wikipedia => "https://en.wikipedia.org/",
        }
    }
}

/// Who produced an image, and where to send a user who wants to see more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ImageSource {
    pub provider: Provider,
    pub page: &'static str,
}
impl ImageSource {
    pub const fn new(provider: Provider) -> Self {
        Self { provider, page: provider.page() }
    }
}
impl From<Provider> for ImageSource {
    fn from(provider: Provider) -> Self {
        Self::new(provider)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActualSize {
    pub width: u32,
    pub height: u32,
}
impl ActualSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }
}
impl core::fmt::Display for ActualSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Force a secure scheme on plain `http:` locations; anything else is left alone.
pub fn to_secure_location(location: &str) -> String {
    match location.get(..5) {
        Some(scheme) if scheme.eq_ignore_ascii_case("http:") => format!("https:{}", &location[5..]),
        _ => location.to_owned(),
    }
}

/// A located piece of candidate artwork.
///
/// Two images are the same image if and only if they have the same location;
/// everything else about them is payload.
#[derive(Debug, Clone, Serialize)]
pub struct RemoteImage {
    location: String,
    size_bucket: SizeBucket,
    types: BTreeSet<ImageType>,
    source: ImageSource,
    actual_size: Option<ActualSize>,
}
impl RemoteImage {
    pub fn new(
        location: &str,
        size_bucket: SizeBucket,
        types: impl IntoIterator<Item = ImageType>,
        source: impl Into<ImageSource>,
        actual_size: Option<ActualSize>,
    ) -> Self {
        Self {
            location: to_secure_location(location),
            size_bucket,
            types: types.into_iter().collect(),
            source: source.into(),
            actual_size,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub const fn size_bucket(&self) -> SizeBucket {
        self.size_bucket
    }

    pub const fn types(&self) -> &BTreeSet<ImageType> {
        &self.types
    }

    pub const fn source(&self) -> ImageSource {
        self.source
    }

    pub const fn actual_size(&self) -> Option<ActualSize> {
        self.actual_size
    }
}
impl PartialEq for RemoteImage {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
    }
}
impl Eq for RemoteImage {}
impl core::hash::Hash for RemoteImage {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.location.hash(state)
    }
}
impl PartialOrd for RemoteImage {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for RemoteImage {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.location.cmp(&other.location)
    }
}
