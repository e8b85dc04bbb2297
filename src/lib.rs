//! Cover, artist and track art from several music metadata providers, merged into one stream.
//!
//! Each provider gets an [`ArtFinder`] with its own lookup and fallback strategy, and a
//! [`CompositeFinder`] asks all of them at once. Lookups never fail outright: whatever goes wrong
//! is logged, and the caller just sees fewer images.

pub mod config;
pub mod finder;
pub mod image;
pub mod message;
pub mod provider;
pub mod query;
pub mod service;
pub mod stream;

pub use finder::{ArtFinder, CatalogFinder, CompositeFinder, DiscographyFinder, EncyclopediaFinder, ScrobbleFinder};
pub use image::{ImageType, Provider, RemoteImage, SizeBucket};
pub use message::{MusicInfoMessage, MusicInfoResult};
pub use query::{AlbumQuery, ArtistQuery, TrackQuery};
pub use service::MusicInfoService;
pub use stream::ArtStream;
