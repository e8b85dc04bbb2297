//! Classification of JSON-over-HTTP responses.

use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum Error<A: core::fmt::Debug + core::fmt::Display> {
    /// The provider understood the request, and answered with its own error payload.
    #[error("provider error ({status}): {error}")]
    Api { status: reqwest::StatusCode, error: A },
    /// Unsuccessful status without a recognizable error payload.
    #[error("unsuccessful response status {code}")]
    Status { code: reqwest::StatusCode, body: String },
    /// Successful status, but nothing in the body.
    #[error("empty response body (status {code})")]
    EmptyBody { code: reqwest::StatusCode },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// For providers without a structured error payload.
#[derive(Debug, serde::Deserialize)]
pub enum NoApiError {}
impl core::fmt::Display for NoApiError {
    fn fmt(&self, _: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {}
    }
}

/// Read the body of a response, deserializing either the expected value or the provider's error payload.
pub async fn read_json<T, A>(response: reqwest::Response) -> Result<T, Error<A>>
where
    T: DeserializeOwned,
    A: DeserializeOwned + core::fmt::Debug + core::fmt::Display,
{
    let status = response.status();
    let body = response.text().await?;
    classify(status, &body)
}

pub fn classify<T, A>(status: reqwest::StatusCode, body: &str) -> Result<T, Error<A>>
where
    T: DeserializeOwned,
    A: DeserializeOwned + core::fmt::Debug + core::fmt::Display,
{
    if !status.is_success() {
        return Err(match serde_json::from_str::<A>(body) {
            Ok(error) => Error::Api { status, error },
            Err(_) => Error::Status { code: status, body: body.to_owned() },
        })
    }

    if body.trim().is_empty() {
        return Err(Error::EmptyBody { code: status })
    }

    serde_json::from_str::<T>(body).map_err(|error| match serde_json::from_str::<A>(body) {
        Ok(api) => Error::Api { status, error: api },
        Err(_) => {
            tracing::debug!(?error, "response body did not match the expected shape");
            Error::Deserialization(error)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[derive(Debug, serde::Deserialize)]
    struct Payload { value: u32 }

    #[derive(Debug, serde::Deserialize)]
    struct Problem { error: String }
    impl core::fmt::Display for Problem {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str(&self.error)
        }
    }

    #[test]
    fn successful_payload() {
        let payload: Payload = classify::<_, Problem>(StatusCode::OK, r#"{"value":3}"#).unwrap();
        assert_eq!(payload.value, 3);
    }

    #[test]
    fn provider_error_on_failure_status() {
        let error = classify::<Payload, Problem>(StatusCode::BAD_REQUEST, r#"{"error":"Invalid mbid."}"#).unwrap_err();
        assert!(matches!(error, Error::Api { status: StatusCode::BAD_REQUEST, ref error } if error.error == "Invalid mbid."));
    }

    #[test]
    fn provider_error_on_success_status() {
        let error = classify::<Payload, Problem>(StatusCode::OK, r#"{"error":"nope"}"#).unwrap_err();
        assert!(matches!(error, Error::Api { status: StatusCode::OK, .. }));
    }

    #[test]
    fn unrecognized_failure_keeps_body() {
        let error = classify::<Payload, NoApiError>(StatusCode::NOT_FOUND, "<html>Not Found</html>").unwrap_err();
        match error {
            Error::Status { code, body } => {
                assert_eq!(code, StatusCode::NOT_FOUND);
                assert_eq!(body, "<html>Not Found</html>");
            },
            other => panic!("unexpected {other:?}")
        }
    }

    #[test]
    fn empty_body() {
        let error = classify::<Payload, Problem>(StatusCode::OK, "  ").unwrap_err();
        assert!(matches!(error, Error::EmptyBody { code: StatusCode::OK }));
    }

    #[test]
    fn malformed_body() {
        let error = classify::<Payload, Problem>(StatusCode::OK, r#"{"something":"else"}"#).unwrap_err();
        assert!(matches!(error, Error::Deserialization(_)));
    }
}
