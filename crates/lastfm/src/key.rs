use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, thiserror::Error, Debug)]
pub enum InvalidApiKeyError {
    #[error("invalid length: expected 32 characters, got {0}")]
    InvalidLength(usize),
    #[error("expected lowercase hexadecimal")]
    NotLowercaseHex,
}

/// A key granted by Last.fm to identify the application.
/// - <https://www.last.fm/api/account/create>
#[derive(Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct ApiKey([u8; Self::LENGTH]);
impl ApiKey {
    pub const LENGTH: usize = 32;

    pub fn new(str: &str) -> Result<Self, InvalidApiKeyError> {
        let len = str.len();
        if len != Self::LENGTH { return Err(InvalidApiKeyError::InvalidLength(len)) }
        if !str.bytes().all(|byte| matches!(byte, b'0'..=b'9' | b'a'..=b'f')) { return Err(InvalidApiKeyError::NotLowercaseHex) }
        let mut bytes = [0; Self::LENGTH];
        bytes.copy_from_slice(str.as_bytes());
        Ok(Self(bytes))
    }

    pub fn as_str(&self) -> &str {
        // Validated as ASCII on construction.
        core::str::from_utf8(&self.0).unwrap_or_default()
    }
}
impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl core::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
impl core::str::FromStr for ApiKey {
    type Err = InvalidApiKeyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}
impl Serialize for ApiKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = ApiKey;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a thirty-two character lowercase hexadecimal string")
            }

            fn visit_str<E>(self, str: &str) -> Result<Self::Value, E> where E: serde::de::Error {
                ApiKey::new(str).map_err(E::custom)
            }
        }
        deserializer.deserialize_str(Visitor)
    }
}
