use serde::{Deserialize, Serialize};
use crate::id::{IdPossessor, IdSubject};

/// - <https://musicbrainz.org/doc/Release>
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Release {
    pub id: crate::Id<Self>,
    pub title: String,
    pub status: Option<String>,
    /// Only present when requested with [`crate::Include::ReleaseGroups`].
    pub release_group: Option<ReleaseGroup>,
}
impl IdPossessor for Release {
    const VARIANT: IdSubject = IdSubject::Release;
}

/// - <https://musicbrainz.org/doc/Release_Group>
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroup {
    pub id: crate::Id<Self>,
    pub title: String,
    pub primary_type: Option<String>,
}
impl IdPossessor for ReleaseGroup {
    const VARIANT: IdSubject = IdSubject::ReleaseGroup;
}

/// - <https://musicbrainz.org/doc/Release#Status>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Official,
    Promotion,
    Bootleg,
    PseudoRelease,
}
impl Status {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Promotion => "promotion",
            Self::Bootleg => "bootleg",
            Self::PseudoRelease => "pseudo-release",
        }
    }
}
impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
