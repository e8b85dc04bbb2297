use serde::{Deserialize, Serialize};
use crate::id::{IdPossessor, IdSubject};

// Incomplete.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Artist {
    /// The MusicBrainz ID of the artist.
    pub id: crate::Id<Self>,

    /// The official name of the artist.
    pub name: String,

    /// The name of the artist in a format meant for sorting.
    pub sort_name: String,

    pub r#type: Option<Type>,

    /// Only present when looked up with [`crate::Include::UrlRelations`].
    #[serde(default)]
    pub relations: Vec<super::Relation>,
}
impl IdPossessor for Artist {
    const VARIANT: IdSubject = IdSubject::Artist;
}
impl Artist {
    /// The first relation of the given type pointing at a URL.
    pub fn url_relation(&self, kind: &str) -> Option<&str> {
        self.relations.iter()
            .filter(|relation| relation.kind == kind)
            .find_map(|relation| relation.url.as_ref())
            .map(|url| url.resource.as_str())
    }

    /// Link to the artist's item in Wikidata, if MusicBrainz knows of one.
    pub fn wikidata_url(&self) -> Option<&str> {
        self.url_relation(super::relation::WIKIDATA)
    }
}

/// The type of artist.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// An individual person.
    Person,
    /// A group of people that may or may not have a distinct name.
    Group,
    /// A large instrumental ensemble.
    Orchestra,
    /// A large vocal ensemble.
    Choir,
    /// A fictitious individual character.
    Character,
    /// Anything which does not fit into the above categories.
    #[serde(other)]
    Other,
}

pub mod credit {
    use super::*;

    /// <https://musicbrainz.org/doc/Artist_Credits>
    #[derive(Serialize, Deserialize, Debug, Clone)]
    #[serde(rename_all = "kebab-case")]
    pub struct Individual {
        pub id: crate::Id<Artist>,
        pub name: String,
        pub sort_name: Option<String>,
    }

    /// <https://musicbrainz.org/doc/Artist_Credits>
    #[derive(Serialize, Deserialize, Debug, Clone)]
    pub struct Credited {
        pub name: Option<String>,
        pub artist: Individual,
        #[serde(rename = "joinphrase")]
        pub join_phrase: Option<String>,
    }

    pub type List = Vec<Credited>;
}
