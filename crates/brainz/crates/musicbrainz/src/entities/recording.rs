use serde::{Deserialize, Serialize};
use crate::id::{IdPossessor, IdSubject};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Recording {
    pub id: crate::Id<Self>,
    pub title: String,
    #[serde(default)]
    pub artist_credit: super::artist::credit::List,
    /// Releases the recording appears on, in the order MusicBrainz lists them.
    #[serde(default)]
    pub releases: Vec<super::Release>,
}
impl IdPossessor for Recording {
    const VARIANT: IdSubject = IdSubject::Recording;
}
