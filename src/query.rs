//! What an art request asks for: names, plus any identifiers that take priority over them.

use brainz::music::{Artist, Id, Release, ReleaseGroup, Track};

pub type ArtistMbid = Id<Artist>;
pub type ReleaseMbid = Id<Release>;
pub type ReleaseGroupMbid = Id<ReleaseGroup>;
pub type TrackMbid = Id<Track>;

macro_rules! name {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash)]
            pub struct $name(String);
            impl $name {
                pub fn new(value: impl Into<String>) -> Self {
                    Self(value.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }

                pub fn is_blank(&self) -> bool {
                    self.0.trim().is_empty()
                }
            }
            impl core::fmt::Display for $name {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    f.write_str(&self.0)
                }
            }
            impl From<&str> for $name {
                fn from(value: &str) -> Self {
                    Self::new(value)
                }
            }
            impl From<String> for $name {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }
        )*
    };
}

name! {
    ArtistName,
    AlbumTitle,
    /// Title of a specific recording of a song.
    RecordingTitle,
}

#[derive(Debug, Clone)]
pub struct AlbumQuery {
    pub artist: ArtistName,
    pub title: AlbumTitle,
    pub release_group: Option<ReleaseGroupMbid>,
    pub release: Option<ReleaseMbid>,
}
impl AlbumQuery {
    pub fn new(artist: impl Into<ArtistName>, title: impl Into<AlbumTitle>) -> Self {
        Self { artist: artist.into(), title: title.into(), release_group: None, release: None }
    }

    pub fn with_release_group(mut self, id: Option<ReleaseGroupMbid>) -> Self {
        self.release_group = id;
        self
    }

    pub fn with_release(mut self, id: Option<ReleaseMbid>) -> Self {
        self.release = id;
        self
    }

    /// Name based searches need both names.
    pub fn is_searchable(&self) -> bool {
        !self.artist.is_blank() && !self.title.is_blank()
    }
}

#[derive(Debug, Clone)]
pub struct ArtistQuery {
    pub artist: ArtistName,
    pub artist_id: Option<ArtistMbid>,
}
impl ArtistQuery {
    pub fn new(artist: impl Into<ArtistName>) -> Self {
        Self { artist: artist.into(), artist_id: None }
    }

    pub fn with_artist_id(mut self, id: Option<ArtistMbid>) -> Self {
        self.artist_id = id;
        self
    }

    pub fn is_searchable(&self) -> bool {
        !self.artist.is_blank()
    }
}

#[derive(Debug, Clone)]
pub struct TrackQuery {
    pub artist: ArtistName,
    pub title: RecordingTitle,
    pub track: Option<TrackMbid>,
}
impl TrackQuery {
    pub fn new(artist: impl Into<ArtistName>, title: impl Into<RecordingTitle>) -> Self {
        Self { artist: artist.into(), title: title.into(), track: None }
    }

    pub fn with_track(mut self, id: Option<TrackMbid>) -> Self {
        self.track = id;
        self
    }

    pub fn is_searchable(&self) -> bool {
        !self.artist.is_blank() && !self.title.is_blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names() {
        assert!(ArtistName::new("  \t").is_blank());
        assert!(!ArtistName::new("Nirvana").is_blank());
        assert!(!AlbumQuery::new("Nirvana", " ").is_searchable());
        assert!(AlbumQuery::new("Nirvana", "Nevermind").is_searchable());
        assert!(!TrackQuery::new("", "Lithium").is_searchable());
        assert!(!ArtistQuery::new("").is_searchable());
    }
}
