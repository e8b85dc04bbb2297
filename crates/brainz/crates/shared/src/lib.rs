pub mod program;
pub use program::ProgramInfo;

pub mod response;
pub mod throttle;
pub use throttle::Throttle;

/// A contextless hyphenated UUID string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct HyphenatedUuidString([u8; HyphenatedUuidString::BYTE_LENGTH]);
impl HyphenatedUuidString {
    const BYTE_LENGTH: usize = 36;

    pub fn new(slice: &str) -> Option<HyphenatedUuidString> {
        if slice.len() != HyphenatedUuidString::BYTE_LENGTH || uuid::Uuid::try_parse(slice).is_err() {
            return None
        }
        let mut bytes = [0; HyphenatedUuidString::BYTE_LENGTH];
        bytes.copy_from_slice(slice.as_bytes());
        bytes.make_ascii_lowercase();
        Some(HyphenatedUuidString(bytes))
    }

    pub const fn as_str(&self) -> &str {
        // Only ever constructed from a validated (and therefore ASCII) UUID.
        match core::str::from_utf8(&self.0) {
            Ok(str) => str,
            Err(_) => unreachable!(),
        }
    }
}
impl AsRef<str> for HyphenatedUuidString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl core::fmt::Display for HyphenatedUuidString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl core::fmt::Debug for HyphenatedUuidString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "HyphenatedUuidString({:?})", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a hyphenated UUID: {0:?}")]
pub struct InvalidUuidError(pub String);

impl core::str::FromStr for HyphenatedUuidString {
    type Err = InvalidUuidError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim()).ok_or_else(|| InvalidUuidError(s.to_owned()))
    }
}
impl serde::Serialize for HyphenatedUuidString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}
impl<'de> serde::Deserialize<'de> for HyphenatedUuidString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = HyphenatedUuidString;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a hyphenated UUID-like string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> where E: Error {
                HyphenatedUuidString::new(value).ok_or_else(|| E::custom("invalid UUID"))
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hyphenated_uuids() {
        let id = HyphenatedUuidString::new("5b11f4ce-a62d-471e-81fc-a69a8278c7da").unwrap();
        assert_eq!(id.as_str(), "5b11f4ce-a62d-471e-81fc-a69a8278c7da");
        assert_eq!(id.to_string(), "5b11f4ce-a62d-471e-81fc-a69a8278c7da");
    }

    #[test]
    fn normalizes_case() {
        let upper = HyphenatedUuidString::new("5B11F4CE-A62D-471E-81FC-A69A8278C7DA").unwrap();
        let lower = HyphenatedUuidString::new("5b11f4ce-a62d-471e-81fc-a69a8278c7da").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn rejects_garbage() {
        assert!(HyphenatedUuidString::new("").is_none());
        assert!(HyphenatedUuidString::new("5b11f4cea62d471e81fca69a8278c7da").is_none());
        assert!(HyphenatedUuidString::new("zzzzzzzz-a62d-471e-81fc-a69a8278c7da").is_none());
        assert!("nirvana".parse::<HyphenatedUuidString>().is_err());
    }

    #[test]
    fn deserializes_from_json() {
        let id: HyphenatedUuidString = serde_json::from_str(r#""5b11f4ce-a62d-471e-81fc-a69a8278c7da""#).unwrap();
        assert_eq!(id.as_str(), "5b11f4ce-a62d-471e-81fc-a69a8278c7da");
        assert!(serde_json::from_str::<HyphenatedUuidString>(r#""nope""#).is_err());
    }
}
