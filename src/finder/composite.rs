use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::future;
use futures_util::stream::{self, StreamExt};

use super::ArtFinder;
use crate::message::ProviderPanic;
use crate::query::{AlbumQuery, ArtistQuery, TrackQuery};
use crate::stream::ArtStream;

/// Asks every member at once and hands images over in whatever order they arrive.
///
/// Members are not de-duplicated against each other; the same picture from two providers
/// comes through twice, with different sources. The member list is read once per query,
/// so adding a member never affects a stream that already exists.
#[derive(Default, Clone)]
pub struct CompositeFinder {
    finders: Vec<Arc<dyn ArtFinder>>,
}
impl CompositeFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adding the same finder twice does nothing.
    pub fn add(&mut self, finder: Arc<dyn ArtFinder>) -> &mut Self {
        if !self.finders.iter().any(|member| Arc::ptr_eq(member, &finder)) {
            self.finders.push(finder);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.finders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finders.is_empty()
    }

    fn merge(&self, find: impl Fn(&dyn ArtFinder) -> ArtStream) -> ArtStream {
        let streams = self.finders.iter().map(|finder| isolated(find(finder.as_ref())));
        stream::select_all(streams).boxed()
    }
}

/// A member that panics while being polled ends its own stream and nobody else's.
fn isolated(stream: ArtStream) -> ArtStream {
    AssertUnwindSafe(stream)
        .catch_unwind()
        .filter_map(|item| future::ready(match item {
            Ok(image) => Some(image),
            Err(payload) => {
                tracing::error!(error = %ProviderPanic::from_payload(payload.as_ref()), "art finder stream panicked");
                None
            }
        }))
        .boxed()
}

impl ArtFinder for CompositeFinder {
    fn find_album_art(&self, query: &AlbumQuery) -> ArtStream {
        self.merge(|finder| finder.find_album_art(query))
    }

    fn find_artist_art(&self, query: &ArtistQuery) -> ArtStream {
        self.merge(|finder| finder.find_artist_art(query))
    }

    fn find_track_art(&self, query: &TrackQuery) -> ArtStream {
        self.merge(|finder| finder.find_track_art(query))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::task::Poll;
    use std::time::Duration;

    use super::*;
    use crate::finder::{DiscographyFinder, ScrobbleFinder};
    use crate::image::{ImageType, Provider, RemoteImage, SizeBucket};
    use crate::provider::fake::*;
    use crate::stream::deferred;

    /// Yields one image per query after a delay, noting when it got that far.
    struct Delayed {
        delay: Duration,
        location: &'static str,
        finished: Arc<Calls>,
    }
    impl Delayed {
        fn stream(&self) -> ArtStream {
            let (delay, location, finished) = (self.delay, self.location, self.finished.clone());
            deferred(async move {
                tokio::time::sleep(delay).await;
                finished.record(location);
                stream::iter([RemoteImage::new(location, SizeBucket::Large, [ImageType::Front], Provider::Spotify, None)]).boxed()
            })
        }
    }
    impl ArtFinder for Delayed {
        fn find_album_art(&self, _: &AlbumQuery) -> ArtStream {
            self.stream()
        }

        fn find_artist_art(&self, _: &ArtistQuery) -> ArtStream {
            self.stream()
        }

        fn find_track_art(&self, _: &TrackQuery) -> ArtStream {
            self.stream()
        }
    }

    struct Exploding;
    impl Exploding {
        fn stream(&self) -> ArtStream {
            stream::poll_fn(|_| -> Poll<Option<RemoteImage>> { panic!("stream blew up") }).boxed()
        }
    }
    impl ArtFinder for Exploding {
        fn find_album_art(&self, _: &AlbumQuery) -> ArtStream {
            self.stream()
        }

        fn find_artist_art(&self, _: &ArtistQuery) -> ArtStream {
            self.stream()
        }

        fn find_track_art(&self, _: &TrackQuery) -> ArtStream {
            self.stream()
        }
    }

    fn delayed(millis: u64, location: &'static str, finished: &Arc<Calls>) -> Arc<dyn ArtFinder> {
        Arc::new(Delayed { delay: Duration::from_millis(millis), location, finished: finished.clone() })
    }

    async fn locations(stream: ArtStream) -> Vec<String> {
        stream.map(|image| image.location().to_owned()).collect().await
    }

    #[test]
    fn adding_twice_keeps_one() {
        let finished = Arc::new(Calls::default());
        let first = delayed(10, "https://a", &finished);
        let second = delayed(10, "https://a", &finished);

        let mut composite = CompositeFinder::new();
        composite.add(first.clone()).add(first.clone()).add(second);
        assert_eq!(composite.len(), 2);
        composite.add(first);
        assert_eq!(composite.len(), 2);
    }

    #[tokio::test]
    async fn no_members_is_no_images() {
        let composite = CompositeFinder::new();
        assert!(composite.is_empty());
        assert!(locations(composite.find_album_art(&AlbumQuery::new("Nirvana", "Nevermind"))).await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn images_come_in_arrival_order() {
        let finished = Arc::new(Calls::default());
        let mut composite = CompositeFinder::new();
        composite
            .add(delayed(30, "https://thirty", &finished))
            .add(delayed(10, "https://ten", &finished))
            .add(delayed(50, "https://fifty", &finished));

        assert_eq!(
            locations(composite.find_artist_art(&ArtistQuery::new("Nirvana"))).await,
            ["https://ten", "https://thirty", "https://fifty"],
        );
    }

    #[tokio::test]
    async fn failing_members_do_not_affect_the_rest() {
        let discography = Arc::new(FakeDiscography {
            release_groups: vec![release_group(GROUP_A)],
            art: HashMap::from([(GROUP_A.to_owned(), art(&["https://caa/1.jpg", "https://caa/2.jpg"]))]),
            ..Default::default()
        });
        let mut composite = CompositeFinder::new();
        composite
            .add(Arc::new(Exploding))
            .add(Arc::new(ScrobbleFinder::new(Arc::new(FakeScrobble::default()))))
            .add(Arc::new(DiscographyFinder::new(discography)));

        let mut found = locations(composite.find_album_art(&AlbumQuery::new("Nirvana", "Nevermind"))).await;
        found.sort();
        assert_eq!(found, ["https://caa/1.jpg", "https://caa/2.jpg"]);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_merged_stream_stops_every_member() {
        let finished = Arc::new(Calls::default());
        let mut composite = CompositeFinder::new();
        composite
            .add(delayed(10, "https://ten", &finished))
            .add(delayed(30, "https://thirty", &finished))
            .add(delayed(50, "https://fifty", &finished));

        let mut stream = composite.find_track_art(&TrackQuery::new("Nirvana", "Lithium"));
        assert_eq!(stream.next().await.map(|image| image.location().to_owned()).as_deref(), Some("https://ten"));
        drop(stream);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(finished.take(), ["https://ten"]);
    }
}
