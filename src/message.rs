//! Failures surfaced by provider lookups. These are values, never panics: every finder converts
//! them into an empty result after logging.

use std::sync::Arc;

pub type MusicInfoResult<T> = Result<T, MusicInfoMessage>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MusicInfoMessage {
    /// The provider's API reported a logical error, such as a malformed identifier or a bad key.
    #[error("Service error:{code}. {message}")]
    ProviderStatus { code: i32, message: String },
    /// Unsuccessful transport response.
    #[error("Result status code {code}")]
    HttpStatus { code: u16, response: String },
    /// Successful response with nothing in it.
    #[error("Null body, result status code {code}")]
    NullBody { code: u16 },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Generic(String),
    /// Anything else, including a provider client that panicked.
    #[error("{0}")]
    Exception(Arc<dyn std::error::Error + Send + Sync>),
}
impl MusicInfoMessage {
    pub fn exception(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Exception(Arc::new(error))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic(message.into())
    }
}

/// Treat a successful but empty listing as a failure.
pub fn non_empty<T>(items: Vec<T>, otherwise: impl FnOnce() -> MusicInfoMessage) -> MusicInfoResult<Vec<T>> {
    if items.is_empty() { Err(otherwise()) } else { Ok(items) }
}

/// A provider client panicked mid-request.
#[derive(Debug, thiserror::Error)]
#[error("provider client panicked: {0}")]
pub struct ProviderPanic(pub String);
impl ProviderPanic {
    pub fn from_payload(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload.downcast_ref::<&str>().map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "<no message>".to_owned());
        Self(message)
    }
}

impl<A> From<brainz::shared::response::Error<A>> for MusicInfoMessage
where
    A: core::fmt::Debug + core::fmt::Display,
{
    fn from(error: brainz::shared::response::Error<A>) -> Self {
        use brainz::shared::response::Error;
        match error {
            Error::Api { status, error } => Self::ProviderStatus { code: i32::from(status.as_u16()), message: error.to_string() },
            Error::Status { code, body } => Self::HttpStatus { code: code.as_u16(), response: body },
            Error::EmptyBody { code } => Self::NullBody { code: code.as_u16() },
            Error::Network(error) => Self::exception(error),
            Error::Deserialization(error) => Self::exception(error),
        }
    }
}

impl From<lastfm::Error> for MusicInfoMessage {
    fn from(error: lastfm::Error) -> Self {
        match error {
            lastfm::Error::Api { code, message } => Self::ProviderStatus { code: i32::from(code), message },
            lastfm::Error::Status { code, body } => Self::HttpStatus { code: code.as_u16(), response: body },
            lastfm::Error::EmptyBody { code } => Self::NullBody { code: code.as_u16() },
            lastfm::Error::Network(error) => Self::exception(error),
            lastfm::Error::Deserialization(error) => Self::exception(error),
        }
    }
}

impl From<wikipedia::Error> for MusicInfoMessage {
    fn from(error: wikipedia::Error) -> Self {
        match error {
            wikipedia::Error::Response(error) => error.into(),
            wikipedia::Error::NoEnglishArticle(_) => Self::generic("No (English) article found"),
            error @ wikipedia::Error::NotWikiUrl(_) => Self::exception(error),
        }
    }
}
