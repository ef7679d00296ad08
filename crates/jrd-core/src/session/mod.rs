//! Session references: which played game an input points at.
//!
//! A reference is taken from an artifact URL (`.../artifact/<title>/<session>`)
//! or from a batch of browser local-storage records carrying such URLs.

mod error;
mod local_storage;

pub use error::InputError;
pub use local_storage::{parse_local_storage, urls_from_records};
pub(crate) use local_storage::field_text;

use std::fmt;

const MARKER_SEGMENT: &str = "artifact";

/// `(game title, session id)` identifying one played game instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionRef {
    pub game_title: String,
    pub session_id: String,
}

impl fmt::Display for SessionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.game_title, self.session_id)
    }
}

/// Extracts the session reference from an artifact URL.
///
/// Splits on `/`, finds the first segment equal to `artifact`, and takes the
/// next two segments as title and session id. Both must exist and be non-empty.
///
/// # Examples
///
/// - `https://games.jackbox.tv/artifact/quiplash3Game/a1b2` → `("quiplash3Game", "a1b2")`
/// - `https://games.jackbox.tv/artifact/quiplash3Game` → `InvalidUrl`
pub fn parse_artifact_url(url: &str) -> Result<SessionRef, InputError> {
    let invalid = || InputError::InvalidUrl(url.to_string());
    let mut segments = url.split('/').skip_while(|s| *s != MARKER_SEGMENT);
    segments.next().ok_or_else(invalid)?;
    let game_title = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
    let session_id = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
    Ok(SessionRef {
        game_title: game_title.to_string(),
        session_id: session_id.to_string(),
    })
}
