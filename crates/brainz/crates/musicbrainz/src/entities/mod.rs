use super::id::{IdPossessor, IdSubject};

pub mod artist;
pub use artist::Artist;

pub mod recording;
pub use recording::Recording;

pub mod release;
pub use release::{Release, ReleaseGroup};

pub mod relation;
pub use relation::Relation;

/// Only ever referred to by identifier.
pub struct Track;
impl IdPossessor for Track { const VARIANT: IdSubject = IdSubject::Track; }
