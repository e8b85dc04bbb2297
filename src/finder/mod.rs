//! Art lookup strategies, one per provider, and the composite that merges them.

use crate::query::{AlbumQuery, ArtistQuery, TrackQuery};
use crate::stream::ArtStream;

pub mod catalog;
pub mod composite;
pub mod discography;
pub mod encyclopedia;
pub mod scrobble;

pub use catalog::CatalogFinder;
pub use composite::CompositeFinder;
pub use discography::DiscographyFinder;
pub use encyclopedia::EncyclopediaFinder;
pub use scrobble::ScrobbleFinder;

/// Something that can look for artwork.
///
/// Every method returns immediately; the work happens as the returned stream is polled.
/// Failures are logged and show up as a shorter (possibly empty) stream, never as an error.
pub trait ArtFinder: Send + Sync {
    fn find_album_art(&self, query: &AlbumQuery) -> ArtStream;
    fn find_artist_art(&self, query: &ArtistQuery) -> ArtStream;
    fn find_track_art(&self, query: &TrackQuery) -> ArtStream;
}
