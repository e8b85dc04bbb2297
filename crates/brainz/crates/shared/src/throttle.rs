use core::num::NonZeroU32;

type DirectRateLimiter = governor::RateLimiter<
    governor::state::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

/// Spaces out requests made to a single provider.
pub struct Throttle(Option<DirectRateLimiter>);
impl Throttle {
    pub fn per_second(calls: NonZeroU32) -> Self {
        Self(Some(governor::RateLimiter::direct(governor::Quota::per_second(calls))))
    }

    pub const fn unlimited() -> Self {
        Self(None)
    }

    /// Wait until another request may be made.
    pub async fn ready(&self) {
        if let Some(limiter) = &self.0 {
            limiter.until_ready().await;
        }
    }
}
impl core::fmt::Debug for Throttle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(if self.0.is_some() { "Throttle(limited)" } else { "Throttle(unlimited)" })
    }
}
