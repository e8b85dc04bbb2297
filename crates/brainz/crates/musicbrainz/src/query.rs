//! Lucene search queries, as accepted by the `query` parameter of the search endpoints.
//! - <https://musicbrainz.org/doc/MusicBrainz_API/Search>

use crate::entities::release::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Artist,
    Release,
    ReleaseGroup,
    Recording,
    Status,
}
impl Field {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Release => "release",
            Self::ReleaseGroup => "releasegroup",
            Self::Recording => "recording",
            Self::Status => "status",
        }
    }
}

/// Conjunction of field terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: Vec<(Field, String)>,
}
impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, field: Field, value: impl Into<String>) -> Self {
        self.terms.push((field, value.into()));
        self
    }

    pub fn artist(name: impl Into<String>) -> Self {
        Self::new().and(Field::Artist, name)
    }

    pub fn and_release_group(self, title: impl Into<String>) -> Self {
        self.and(Field::ReleaseGroup, title)
    }

    pub fn and_recording(self, title: impl Into<String>) -> Self {
        self.and(Field::Recording, title)
    }

    pub fn and_status(self, status: Status) -> Self {
        self.and(Field::Status, status.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
impl core::fmt::Display for Query {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, (field, value)) in self.terms.iter().enumerate() {
            if i != 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{}:\"{}\"", field.as_str(), escape(value))?;
        }
        Ok(())
    }
}

/// Escape the characters Lucene would otherwise treat as syntax.
pub fn escape(term: &str) -> String {
    const SPECIAL: &[char] = &['+', '-', '&', '|', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':', '\\', '/'];
    let mut out = String::with_capacity(term.len());
    for char in term.chars() {
        if SPECIAL.contains(&char) {
            out.push('\\');
        }
        out.push(char);
    }
    out
}
