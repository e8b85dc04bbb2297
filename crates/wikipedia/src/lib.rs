//! English Wikipedia page summaries, reachable through Wikidata items.
//! - <https://en.wikipedia.org/api/rest_v1/>
//! - <https://www.wikidata.org/w/api.php?action=help&modules=wbgetentities>

use std::collections::HashMap;

use serde::Deserialize;

pub mod url;
pub use url::{ArticleTitle, WikiUrl, WikibaseItemId};

pub const SUMMARY_ROOT: &str = "https://en.wikipedia.org/api/rest_v1/page/summary/";
pub const WIKIDATA_API: &str = "https://www.wikidata.org/w/api.php";
const ENGLISH_SITE: &str = "enwiki";

pub const REQUESTS_PER_SECOND: core::num::NonZeroU32 = match core::num::NonZeroU32::new(5) {
    Some(rate) => rate,
    None => unreachable!(),
};

/// Error payloads of the REST API and of the action API.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiError {
    Rest { title: String, detail: Option<String> },
    Action { error: ActionError },
}
#[derive(Debug, Clone, Deserialize)]
pub struct ActionError {
    pub code: String,
    pub info: Option<String>,
}
impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Rest { title, detail: Some(detail) } => write!(f, "{title} {detail}"),
            Self::Rest { title, detail: None } => f.write_str(title),
            Self::Action { error } => match &error.info {
                Some(info) => write!(f, "{}: {info}", error.code),
                None => f.write_str(&error.code),
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Response(#[from] shared::response::Error<ApiError>),
    #[error("not a Wikipedia or Wikidata url: {0}")]
    NotWikiUrl(String),
    #[error("no English article found for {0}")]
    NoEnglishArticle(WikibaseItemId),
}
impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Response(error.into())
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Thumbnail {
    pub source: String,
    pub width: u32,
    pub height: u32,
}

/// - <https://en.wikipedia.org/api/rest_v1/#/Page%20content/get_page_summary__title_>
#[derive(Debug, Clone, Deserialize)]
pub struct Summary {
    pub title: String,
    #[serde(rename = "displaytitle")]
    pub display_title: Option<String>,
    #[serde(rename = "pageid")]
    pub page_id: Option<u64>,
    pub thumbnail: Option<Thumbnail>,
    /// The lead image at its uploaded size.
    #[serde(rename = "originalimage")]
    pub original_image: Option<Thumbnail>,
    pub description: Option<String>,
    #[serde(default)]
    pub extract: String,
    pub extract_html: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteLink {
    pub site: Option<String>,
    pub title: String,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Entities {
    entities: HashMap<String, Entity>,
}

#[derive(Debug, Deserialize)]
struct Entity {
    #[serde(default)]
    sitelinks: HashMap<String, SiteLink>,
}

pub struct Client {
    net: reqwest::Client,
    throttle: shared::Throttle,
}
impl Client {
    pub fn new(net: reqwest::Client) -> Self {
        Self::with_throttle(net, shared::Throttle::per_second(REQUESTS_PER_SECOND))
    }

    pub fn with_throttle(net: reqwest::Client, throttle: shared::Throttle) -> Self {
        Self { net, throttle }
    }

    pub async fn summary(&self, title: &ArticleTitle) -> Result<Summary> {
        self.throttle.ready().await;
        tracing::trace!(%title, "wikipedia summary request");
        let response = self.net.get(format!("{SUMMARY_ROOT}{}", title.to_path_segment())).send().await?;
        Ok(shared::response::read_json::<_, ApiError>(response).await?)
    }

    /// Links from a Wikidata item to the pages on each Wikimedia site, keyed by site (`enwiki`, `dewiki`, ...).
    pub async fn site_links(&self, item: &WikibaseItemId) -> Result<HashMap<String, SiteLink>> {
        self.throttle.ready().await;
        tracing::trace!(%item, "wikidata entity request");
        let response = self.net.get(WIKIDATA_API)
            .query(&[("action", "wbgetentities"), ("props", "sitelinks/urls"), ("format", "json"), ("ids", item.as_str())])
            .send().await?;
        let entities: Entities = shared::response::read_json::<_, ApiError>(response).await?;
        Ok(site_links_of(entities, item))
    }

    /// The English article a Wikidata item links to.
    pub async fn english_title(&self, item: &WikibaseItemId) -> Result<ArticleTitle> {
        self.site_links(item).await?
            .remove(ENGLISH_SITE)
            .map(|link| ArticleTitle::new(link.title))
            .ok_or_else(|| Error::NoEnglishArticle(item.clone()))
    }

    /// Summary of the article behind either a Wikipedia article link or a Wikidata item link.
    pub async fn summary_for_url(&self, url: &str) -> Result<Summary> {
        match WikiUrl::parse(url) {
            Some(WikiUrl::Article(title)) => self.summary(&title).await,
            Some(WikiUrl::Item(item)) => {
                let title = self.english_title(&item).await?;
                self.summary(&title).await
            },
            None => Err(Error::NotWikiUrl(url.to_owned())),
        }
    }
}

fn site_links_of(mut entities: Entities, item: &WikibaseItemId) -> HashMap<String, SiteLink> {
    entities.entities.remove(item.as_str())
        .map(|entity| entity.sitelinks)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use shared::response::classify;

    const NIRVANA_ENTITY: &str = r#"{"entities":{"Q11649":{"type":"item","id":"Q11649","sitelinks":{
        "dewiki":{"site":"dewiki","title":"Nirvana (US-amerikanische Band)","badges":[],"url":"https://de.wikipedia.org/wiki/Nirvana_(US-amerikanische_Band)"},
        "enwiki":{"site":"enwiki","title":"Nirvana (band)","badges":[],"url":"https://en.wikipedia.org/wiki/Nirvana_(band)"}
    }}},"success":1}"#;

    #[test]
    fn english_site_link() {
        let entities: Entities = classify::<_, ApiError>(StatusCode::OK, NIRVANA_ENTITY).unwrap();
        let mut links = site_links_of(entities, &WikibaseItemId::new("Q11649").unwrap());
        assert_eq!(links.len(), 2);
        assert_eq!(links.remove(ENGLISH_SITE).unwrap().title, "Nirvana (band)");
    }

    #[test]
    fn missing_entity() {
        let entities: Entities = classify::<_, ApiError>(StatusCode::OK, NIRVANA_ENTITY).unwrap();
        assert!(site_links_of(entities, &WikibaseItemId::new("Q1").unwrap()).is_empty());
    }

    #[test]
    fn action_api_error() {
        let error = classify::<Entities, ApiError>(StatusCode::OK, r#"{"error":{"code":"no-such-entity","info":"Could not find an entity with the ID \"Q0\"."}}"#).unwrap_err();
        assert!(matches!(error, shared::response::Error::Api { error: ApiError::Action { .. }, .. }));
    }

    #[test]
    fn summary() {
        let summary: Summary = classify::<_, ApiError>(StatusCode::OK, r#"{
            "type": "standard", "title": "Nirvana (band)", "displaytitle": "<span>Nirvana (band)</span>",
            "pageid": 21231,
            "thumbnail": { "source": "https://upload.wikimedia.org/thumb/320px-Nirvana.jpg", "width": 320, "height": 213 },
            "originalimage": { "source": "https://upload.wikimedia.org/Nirvana.jpg", "width": 1200, "height": 800 },
            "description": "American rock band",
            "extract": "Nirvana was an American rock band formed in Aberdeen, Washington, in 1987.",
            "timestamp": "2021-03-01T00:00:00Z"
        }"#).unwrap();
        assert_eq!(summary.page_id, Some(21231));
        assert_eq!(summary.original_image.unwrap().width, 1200);
        assert_eq!(summary.description.as_deref(), Some("American rock band"));
        assert_eq!(summary.extract_html, None);
    }

    #[test]
    fn not_found() {
        let error = classify::<Summary, ApiError>(StatusCode::NOT_FOUND, r#"{"type":"https://mediawiki.org/wiki/HyperSwitch/errors/not_found","title":"Not found.","method":"get","detail":"Page or revision not found.","uri":"/en.wikipedia.org/v1/page/summary/Nope"}"#).unwrap_err();
        assert!(matches!(error, shared::response::Error::Api { status: StatusCode::NOT_FOUND, error: ApiError::Rest { .. } }));
    }

    #[tokio::test]
    async fn rejects_other_urls_without_requests() {
        let client = Client::with_throttle(reqwest::Client::new(), shared::Throttle::unlimited());
        let error = client.summary_for_url("https://www.discogs.com/artist/125246").await.unwrap_err();
        assert!(matches!(error, Error::NotWikiUrl(url) if url == "https://www.discogs.com/artist/125246"));
    }
}
