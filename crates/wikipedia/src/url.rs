//! Recognizing the two kinds of links MusicBrainz relates artists to.

/// Human-readable title of an English Wikipedia article.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleTitle(String);
impl ArticleTitle {
    /// Underscores, as found in article links, are read as spaces.
    pub fn new(title: impl AsRef<str>) -> Self {
        Self(title.as_ref().replace('_', " ").trim().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The title as a single path segment.
    pub fn to_path_segment(&self) -> String {
        urlencoding::encode(&self.0.replace(' ', "_")).into_owned()
    }
}
impl core::fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A Wikidata item identifier, such as `Q11649`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WikibaseItemId(String);
impl WikibaseItemId {
    pub fn new(id: &str) -> Option<Self> {
        let digits = id.strip_prefix('Q').or_else(|| id.strip_prefix('q'))?;
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return None
        }
        Some(Self(format!("Q{digits}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl core::fmt::Display for WikibaseItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WikiUrl {
    Article(ArticleTitle),
    Item(WikibaseItemId),
}
impl WikiUrl {
    /// Recognize `https://en.wikipedia.org/wiki/<title>` and `https://www.wikidata.org/wiki/<id>`.
    pub fn parse(url: &str) -> Option<Self> {
        let parsed = reqwest::Url::parse(url).ok()?;
        let host = parsed.host_str()?;
        let last = parsed.path_segments()?.filter(|segment| !segment.is_empty()).next_back()?;
        if host == "wikipedia.org" || host.ends_with(".wikipedia.org") {
            let title = urlencoding::decode(last).ok()?;
            Some(Self::Article(ArticleTitle::new(title)))
        } else if host == "wikidata.org" || host.ends_with(".wikidata.org") {
            WikibaseItemId::new(last).map(Self::Item)
        } else {
            None
        }
    }
}
