//! Field-filtered search queries.
//! - <https://developer.spotify.com/documentation/web-api/reference/search>

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Matches against the name of the searched type.
    Default,
    Album,
    Artist,
    Track,
    Genre,
    Year,
}
impl Field {
    const fn prefix(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Album => "album:",
            Self::Artist => "artist:",
            Self::Track => "track:",
            Self::Genre => "genre:",
            Self::Year => "year:",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Search {
    terms: Vec<(Field, String)>,
}
impl Search {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.terms.push((field, value.into()));
        self
    }

    pub fn matching(value: impl Into<String>) -> Self {
        Self::new().with(Field::Default, value)
    }

    pub fn artist(self, name: impl Into<String>) -> Self {
        self.with(Field::Artist, name)
    }

    pub fn album(self, title: impl Into<String>) -> Self {
        self.with(Field::Album, title)
    }

    pub fn track(self, title: impl Into<String>) -> Self {
        self.with(Field::Track, title)
    }
}
impl core::fmt::Display for Search {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, (field, value)) in self.terms.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            f.write_str(field.prefix())?;
            let value = value.replace('"', "");
            if value.contains(char::is_whitespace) {
                write!(f, "\"{value}\"")?;
            } else {
                f.write_str(&value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_filters() {
        let search = Search::new().artist("Nirvana").album("In Utero");
        assert_eq!(search.to_string(), r#"artist:Nirvana album:"In Utero""#);
    }

    #[test]
    fn default_term() {
        assert_eq!(Search::matching("Sonic Youth").to_string(), r#""Sonic Youth""#);
        assert_eq!(Search::matching(r#"The "Band""#).to_string(), r#""The Band""#);
    }
}
