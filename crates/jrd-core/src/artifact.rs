//! Artifact descriptors and destination naming.
//!
//! Destination names are a pure function of `(title, session, object id)` so
//! concurrent units never share a path and re-runs overwrite the same files.

use std::path::{Path, PathBuf};

use crate::session::SessionRef;

/// Everything needed to retrieve one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub game_title: String,
    pub session_id: String,
    pub game_object_id: String,
    pub binary_url: String,
    pub destination: PathBuf,
}

impl ArtifactDescriptor {
    pub fn new(
        session: &SessionRef,
        game_object_id: &str,
        binary_url: String,
        output_dir: &Path,
    ) -> Self {
        Self {
            game_title: session.game_title.clone(),
            session_id: session.session_id.clone(),
            game_object_id: game_object_id.to_string(),
            binary_url,
            destination: destination_path(
                output_dir,
                &session.game_title,
                &session.session_id,
                game_object_id,
            ),
        }
    }
}

/// `{title}-{session}-{object id with '_' → '-'}.gif`
pub fn file_name(game_title: &str, session_id: &str, game_object_id: &str) -> String {
    format!(
        "{}-{}-{}.gif",
        game_title,
        session_id,
        game_object_id.replace('_', "-")
    )
}

pub fn destination_path(
    output_dir: &Path,
    game_title: &str,
    session_id: &str,
    game_object_id: &str,
) -> PathBuf {
    output_dir.join(file_name(game_title, session_id, game_object_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underscores_become_dashes() {
        assert_eq!(
            file_name("quiplash3Game", "abc123", "p1_q2"),
            "quiplash3Game-abc123-p1-q2.gif"
        );
    }

    #[test]
    fn destination_is_deterministic() {
        let out = Path::new("output");
        let a = destination_path(out, "TeeKOGame", "s1", "shirt_0_1");
        let b = destination_path(out, "TeeKOGame", "s1", "shirt_0_1");
        assert_eq!(a, b);
        assert_eq!(a, Path::new("output/TeeKOGame-s1-shirt-0-1.gif"));
    }

    #[test]
    fn descriptor_derives_destination() {
        let session = SessionRef {
            game_title: "quiplash3Game".into(),
            session_id: "s9".into(),
        };
        let d = ArtifactDescriptor::new(
            &session,
            "0",
            "http://b/anim_0.gif".into(),
            Path::new("/tmp/out"),
        );
        assert_eq!(d.destination, Path::new("/tmp/out/quiplash3Game-s9-0.gif"));
        assert_eq!(d.game_object_id, "0");
    }
}
