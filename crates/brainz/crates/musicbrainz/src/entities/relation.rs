use serde::{Deserialize, Serialize};

pub const WIKIDATA: &str = "wikidata";
pub const WIKIPEDIA: &str = "wikipedia";

/// - <https://musicbrainz.org/doc/Relationships>
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Relation {
    #[serde(rename = "type")]
    pub kind: String,
    pub target_type: Option<String>,
    pub url: Option<UrlTarget>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UrlTarget {
    pub id: Option<String>,
    pub resource: String,
}
