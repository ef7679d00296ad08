//! Existence probe: confirms a rendered animation exists and yields its bucket URL.

use crate::endpoints::Endpoints;
use crate::retry::classify;
use crate::session::SessionRef;
use crate::transport::Transport;

/// Returns the binary URL for `game_object_id` if the probe answers exactly 200.
///
/// Any other status (redirects included) means the animation does not exist;
/// a transport failure is logged and treated the same way.
pub fn locate(
    transport: &dyn Transport,
    endpoints: &Endpoints,
    session: &SessionRef,
    game_object_id: &str,
) -> Option<String> {
    let probe = endpoints.probe_url(&session.game_title, &session.session_id, game_object_id);
    match transport.get_status(&probe) {
        Ok(200) => Some(endpoints.binary_url(
            &session.game_title,
            &session.session_id,
            game_object_id,
        )),
        Ok(code) => {
            tracing::info!("no animation at {} (HTTP {})", probe, code);
            None
        }
        Err(e) => {
            tracing::warn!(
                "An error occurred while requesting {} ({}): {}",
                probe,
                classify(&e),
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::TransportError;
    use std::path::Path;

    struct Status(Result<u32, ()>);

    impl Transport for Status {
        fn get_status(&self, _url: &str) -> Result<u32, TransportError> {
            self.0.map_err(|_| TransportError::Join("boom".into()))
        }
        fn get_json(&self, _url: &str) -> Result<serde_json::Value, TransportError> {
            Err(TransportError::Status(500))
        }
        fn get_to_file(&self, _url: &str, _dest: &Path) -> Result<u64, TransportError> {
            Ok(0)
        }
    }

    fn session() -> SessionRef {
        SessionRef {
            game_title: "quiplash3Game".into(),
            session_id: "abc".into(),
        }
    }

    #[test]
    fn ok_yields_bucket_url() {
        let url = locate(&Status(Ok(200)), &Endpoints::default(), &session(), "2");
        assert_eq!(
            url.as_deref(),
            Some("https://s3.amazonaws.com/jbg-blobcast-artifacts/quiplash3Game/abc/anim_2.gif")
        );
    }

    #[test]
    fn non_ok_is_absent() {
        for code in [204, 301, 302, 404, 500] {
            assert!(locate(&Status(Ok(code)), &Endpoints::default(), &session(), "2").is_none());
        }
    }

    #[test]
    fn transport_error_is_absent() {
        assert!(locate(&Status(Err(())), &Endpoints::default(), &session(), "2").is_none());
    }
}
