#![allow(private_bounds)]

use shared::HyphenatedUuidString;

/// An identifier for a specific kind of MusicBrainz entity.
#[repr(transparent)]
pub struct Id<T: IdPossessor>(HyphenatedUuidString, core::marker::PhantomData<fn() -> T>);
impl<T: IdPossessor> Id<T> {
    pub fn new(id: &str) -> Option<Self> {
        HyphenatedUuidString::new(id).map(Self::from_contextless)
    }

    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub const fn contextless(self) -> HyphenatedUuidString {
        self.0
    }

    /// The caller is responsible for the ID actually referring to an entity of the specified type;
    /// nothing breaks if it doesn't, but lookups will come back empty.
    pub const fn from_contextless(uuid: HyphenatedUuidString) -> Id<T> {
        Self(uuid, core::marker::PhantomData)
    }
}
impl<T: IdPossessor> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: IdPossessor> Copy for Id<T> {}
impl<T: IdPossessor> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<T: IdPossessor> Eq for Id<T> {}
impl<T: IdPossessor> core::hash::Hash for Id<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}
impl<T: IdPossessor> core::str::FromStr for Id<T> {
    type Err = shared::InvalidUuidError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::from_contextless)
    }
}
impl<T: IdPossessor> core::fmt::Display for Id<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl<T: IdPossessor> core::fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(&format!("Id<{:?}>(\"{}\")", T::VARIANT, self.as_str()))
    }
}
impl<T: IdPossessor> serde::Serialize for Id<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de, T: IdPossessor> serde::Deserialize<'de> for Id<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        HyphenatedUuidString::deserialize(deserializer).map(Self::from_contextless)
    }
}

/// - <https://musicbrainz.org/doc/MusicBrainz_Database/Schema>
#[derive(Debug)]
pub(crate) enum IdSubject {
    /// One or more (i.e. a an individual or a group) music artists.
    /// - <https://musicbrainz.org/doc/Artist>
    Artist,
    /// A distinct track creation instance.
    /// - <https://musicbrainz.org/doc/Recording>
    Recording,
    /// A particular edition of an album, with its own cover art.
    /// - <https://musicbrainz.org/doc/Release>
    Release,
    /// The abstract album, grouping every edition of it.
    /// - <https://musicbrainz.org/doc/Release_Group>
    ReleaseGroup,
    /// A recording as it appears on a specific medium of a release.
    /// - <https://wiki.musicbrainz.org/Track>
    Track,
}

pub(crate) trait IdPossessor {
    const VARIANT: IdSubject;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Artist, Track};

    #[test]
    fn debug_includes_subject() {
        let id = Id::<Artist>::new("5b11f4ce-a62d-471e-81fc-a69a8278c7da").unwrap();
        assert_eq!(format!("{id:?}"), r#"Id<Artist>("5b11f4ce-a62d-471e-81fc-a69a8278c7da")"#);
    }

    #[test]
    fn parses() {
        let id: Id<Track> = "0c2a9ad3-0b3a-3b6e-a4e5-d3f2e1c9b0a1".parse().unwrap();
        assert_eq!(id.to_string(), "0c2a9ad3-0b3a-3b6e-a4e5-d3f2e1c9b0a1");
        assert!("smells like teen spirit".parse::<Id<Track>>().is_err());
    }
}
