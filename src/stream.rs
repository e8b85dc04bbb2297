//! Lazy image streams, and the few combinators finders build them from.

use std::collections::HashSet;
use std::panic::AssertUnwindSafe;

use futures_util::future::{self, FutureExt};
use futures_util::stream::{self, BoxStream, Stream, StreamExt};

use crate::image::RemoteImage;
use crate::message::{MusicInfoMessage, MusicInfoResult, ProviderPanic};

/// A lazy, finite, single-use sequence of images. Nothing is requested until it is first polled,
/// and dropping it cancels everything still in flight.
pub type ArtStream = BoxStream<'static, RemoteImage>;

pub fn empty() -> ArtStream {
    stream::empty().boxed()
}

/// Defer building a stream until the first poll.
pub fn deferred<F>(build: F) -> ArtStream
where
    F: Future<Output = ArtStream> + Send + 'static,
{
    stream::once(build).flatten().boxed()
}

/// Continue with `fallback` only if `primary` ends without having produced anything.
pub fn on_empty<F>(primary: ArtStream, fallback: F) -> ArtStream
where
    F: FnOnce() -> ArtStream + Send + 'static,
{
    enum State {
        Primary(ArtStream, Box<dyn FnOnce() -> ArtStream + Send>),
        Passthrough(ArtStream),
    }

    stream::unfold(State::Primary(primary, Box::new(fallback)), |state| async move {
        match state {
            State::Primary(mut primary, fallback) => match primary.next().await {
                Some(image) => Some((image, State::Passthrough(primary))),
                None => {
                    drop(primary);
                    let mut fallback = fallback();
                    let image = fallback.next().await?;
                    Some((image, State::Passthrough(fallback)))
                }
            },
            State::Passthrough(mut stream) => {
                let image = stream.next().await?;
                Some((image, State::Passthrough(stream)))
            }
        }
    }).boxed()
}

/// Keep only the first item for each key, preserving order. The seen set belongs to this one stream.
pub fn distinct_by<S, K, F>(stream: S, mut key: F) -> impl Stream<Item = S::Item>
where
    S: Stream,
    K: Eq + core::hash::Hash,
    F: FnMut(&S::Item) -> K,
{
    let mut seen = HashSet::new();
    stream.filter(move |item| future::ready(seen.insert(key(item))))
}

pub fn distinct_by_location<S>(stream: S) -> ArtStream
where
    S: Stream<Item = RemoteImage> + Send + 'static,
{
    distinct_by(stream, |image| image.location().to_owned()).boxed()
}

/// Run a provider call, turning a panic inside it into [`MusicInfoMessage::Exception`].
pub async fn guarded<T, F>(call: F) -> MusicInfoResult<T>
where
    F: Future<Output = MusicInfoResult<T>>,
{
    match AssertUnwindSafe(call).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(MusicInfoMessage::exception(ProviderPanic::from_payload(payload.as_ref()))),
    }
}

/// Log a failed lookup and carry on with nothing.
pub fn or_log<T: Default>(result: MusicInfoResult<T>, finder: &'static str, context: &dyn core::fmt::Display) -> T {
    result.unwrap_or_else(|message| {
        match &message {
            MusicInfoMessage::NotFound(_) => tracing::info!(finder, %context, %message, "nothing found"),
            _ => tracing::error!(finder, %context, %message, "lookup failed"),
        }
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ImageType, Provider, SizeBucket};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn image(location: &str) -> RemoteImage {
        RemoteImage::new(location, SizeBucket::Unknown, [ImageType::Front], Provider::MusicBrainz, None)
    }

    fn images(locations: &[&str]) -> ArtStream {
        stream::iter(locations.iter().map(|location| image(location)).collect::<Vec<_>>()).boxed()
    }

    fn locations(images: Vec<RemoteImage>) -> Vec<String> {
        images.into_iter().map(|image| image.location().to_owned()).collect()
    }

    #[tokio::test]
    async fn distinct_keeps_first_seen_order() {
        let found = distinct_by_location(images(&["https://u1", "https://u2", "https://u1", "https://u3"])).collect::<Vec<_>>().await;
        assert_eq!(locations(found), ["https://u1", "https://u2", "https://u3"]);
    }

    #[tokio::test]
    async fn fallback_only_when_empty() {
        let used = Arc::new(AtomicUsize::new(0));
        let counter = used.clone();
        let found = on_empty(images(&["https://a"]), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            images(&["https://b"])
        }).collect::<Vec<_>>().await;
        assert_eq!(locations(found), ["https://a"]);
        assert_eq!(used.load(Ordering::SeqCst), 0);

        let found = on_empty(empty(), || images(&["https://b", "https://c"])).collect::<Vec<_>>().await;
        assert_eq!(locations(found), ["https://b", "https://c"]);
    }

    #[tokio::test]
    async fn deferred_does_nothing_until_polled() {
        let built = Arc::new(AtomicUsize::new(0));
        let counter = built.clone();
        let stream = deferred(async move {
            counter.fetch_add(1, Ordering::SeqCst);
            images(&["https://a"])
        });
        assert_eq!(built.load(Ordering::SeqCst), 0);
        assert_eq!(stream.count().await, 1);
        assert_eq!(built.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn panics_become_exceptions() {
        let result: MusicInfoResult<()> = guarded(async { panic!("provider exploded") }).await;
        match result {
            Err(MusicInfoMessage::Exception(error)) => assert!(error.to_string().contains("provider exploded")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn logged_failures_default() {
        let found: Vec<u8> = or_log(Err(MusicInfoMessage::generic("no")), "test", &"context");
        assert!(found.is_empty());
        assert_eq!(or_log(Ok(vec![1_u8]), "test", &"context"), [1]);
    }
}
