//! The MetaBrainz family of services, under one roof.

pub use shared;

#[cfg(feature = "music")]
pub use musicbrainz as music;

#[cfg(feature = "art")]
pub use cover_art_archive as art;
