#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error reported by the Last.fm API itself.
    /// The code can be interpreted with [`Error::code`].
    #[error("{message} (error code {code})")]
    Api { code: u8, message: String },
    /// An unsuccessful response which didn't carry a Last.fm error.
    #[error("unsuccessful response status {code}")]
    Status { code: reqwest::StatusCode, body: String },
    #[error("empty response body (status {code})")]
    EmptyBody { code: reqwest::StatusCode },
    /// An error occurred while sending the request.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// An error occurred while deserializing the response.
    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}
impl Error {
    /// The recognized API error code, if this is an API error.
    pub fn code(&self) -> Option<Result<GeneralErrorCode, code::UnmappedErrorCode>> {
        match self {
            Error::Api { code, .. } => Some(GeneralErrorCode::try_from(*code)),
            _ => None,
        }
    }
}

pub use code::GeneralErrorCode;
/// Error codes returned by the Last.fm API.
/// <https://www.last.fm/api/errorcodes>
pub mod code {
    #[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
    #[error("unmapped response error code: {code}")]
    pub struct UnmappedErrorCode {
        /// The error code that wasn't mapped to a variant.
        pub code: u8
    }

    macro_rules! def {
        (
            $(
                $(#[$meta:meta])* $vis:vis enum $name:ident {
                    $(
                        $(#[$variant_meta:meta])*
                        $variant:ident = $lit:literal
                    ),* $(,)?
                }
            )*
        ) => {
            $(
                $(#[$meta])*
                #[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
                #[repr(u8)]
                $vis enum $name {
                    $(
                        $(#[$variant_meta])*
                        $variant = $lit
                    ),*
                }
                impl TryFrom<u8> for $name {
                    type Error = UnmappedErrorCode;
                    fn try_from(value: u8) -> Result<Self, Self::Error> {
                        match value {
                            $($lit => Ok($name::$variant),)*
                            code => Err(UnmappedErrorCode { code }),
                        }
                    }
                }
                impl From<$name> for u8 {
                    fn from(code: $name) -> u8 {
                        code as u8
                    }
                }
            )*
        };
    }

    /// General error codes returned by the Last.fm API.
    /// This doesn't encompass every possible error; some variants which are only possible on specific endpoints are omitted.
    #[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
    pub enum GeneralErrorCode {
        #[error("{0}")]
        ServiceAvailability(#[from] general::ServiceAvailability),
        #[error("{0}")]
        Authentication(#[from] general::Authentication),
        #[error("{0} (library error; please report)")]
        InvalidUsage(#[from] general::InvalidUsage),
        /// Your IP has made too many requests in a short period.
        #[error("rate limit exceeded")]
        RateLimitExceeded,
    }
    impl GeneralErrorCode {
        /// Whether retrying the same request later could succeed.
        pub const fn is_transient(&self) -> bool {
            matches!(self, Self::ServiceAvailability(_) | Self::RateLimitExceeded)
        }
    }
    impl TryFrom<u8> for GeneralErrorCode {
        type Error = UnmappedErrorCode;
        fn try_from(code: u8) -> Result<Self, Self::Error> {
            general::ServiceAvailability::try_from(code).map(GeneralErrorCode::ServiceAvailability)
                .or_else(|_| general::Authentication::try_from(code).map(GeneralErrorCode::Authentication))
                .or_else(|_| general::InvalidUsage::try_from(code).map(GeneralErrorCode::InvalidUsage))
                .or(match code { 29 => Ok(GeneralErrorCode::RateLimitExceeded), _ => Err(UnmappedErrorCode { code }) })
        }
    }
    impl From<GeneralErrorCode> for u8 {
        fn from(code: GeneralErrorCode) -> u8 {
            match code {
                GeneralErrorCode::ServiceAvailability(code) => code.into(),
                GeneralErrorCode::Authentication(code) => code.into(),
                GeneralErrorCode::InvalidUsage(code) => code.into(),
                GeneralErrorCode::RateLimitExceeded => 29,
            }
        }
    }

    pub mod general {
        use super::UnmappedErrorCode;

        def! {
            /// Errors that indicate the Last.fm service is unavailable.
            pub enum ServiceAvailability {
                /// Most likely the backend service failed. Please try again.
                #[error("operation failed; please try again")]
                OperationFailed = 8,

                /// This service is temporarily offline. Try again later.
                #[error("service offline")]
                ServiceOffline = 11,

                /// There was a temporary error processing your request. Please try again.
                #[error("temporarily unavailable")]
                TemporaryError = 16,
            }

            /// Errors that indicate a problem with the API key or permissions.
            pub enum Authentication {
                /// You do not have permissions to access the service.
                #[error("authentication failed; lacking permissions")]
                AuthenticationFailed = 4,

                #[error("invalid session key")]
                InvalidSessionKey = 9,

                /// You must be granted a valid key by last.fm.
                #[error("invalid API key")]
                InvalidApiKey = 10,

                /// Access for your account has been suspended, please contact Last.fm.
                #[error("suspended API key")]
                SuspendedApiKey = 26,
            }

            /// Errors that indicate this library isn't correctly interacting with the Last.fm API,
            /// or that the requested entity doesn't exist.
            pub enum InvalidUsage {
                #[error("invalid service")]
                InvalidService = 2,

                #[error("invalid method")]
                InvalidMethod = 3,

                #[error("invalid format")]
                InvalidFormat = 5,

                /// Your request is missing a required parameter, or the entity could not be found.
                #[error("invalid parameters")]
                InvalidParameters = 6,

                #[error("invalid resource")]
                InvalidResource = 7,

                #[error("invalid method signature")]
                InvalidMethodSignature = 13,

                /// This type of request is no longer supported.
                #[error("deprecated")]
                Deprecated = 27,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use code::general::*;

    #[test]
    fn maps_known_codes() {
        assert_eq!(GeneralErrorCode::try_from(6), Ok(GeneralErrorCode::InvalidUsage(InvalidUsage::InvalidParameters)));
        assert_eq!(GeneralErrorCode::try_from(10), Ok(GeneralErrorCode::Authentication(Authentication::InvalidApiKey)));
        assert_eq!(GeneralErrorCode::try_from(29), Ok(GeneralErrorCode::RateLimitExceeded));
        assert_eq!(u8::from(GeneralErrorCode::ServiceAvailability(ServiceAvailability::TemporaryError)), 16);
    }

    #[test]
    fn unmapped_codes() {
        assert_eq!(GeneralErrorCode::try_from(1), Err(code::UnmappedErrorCode { code: 1 }));
    }

    #[test]
    fn transient() {
        assert!(GeneralErrorCode::try_from(11).unwrap().is_transient());
        assert!(!GeneralErrorCode::try_from(6).unwrap().is_transient());
    }

    #[test]
    fn api_error_exposes_code() {
        let error = Error::Api { code: 6, message: "Album not found".to_owned() };
        assert_eq!(error.to_string(), "Album not found (error code 6)");
        assert_eq!(error.code(), Some(Ok(GeneralErrorCode::InvalidUsage(InvalidUsage::InvalidParameters))));
    }
}
