//! Session metadata → game object ids.
//!
//! Fetches a session's metadata document and enumerates the ids of the
//! artifacts it describes. Titles in the per-title table with a round-count
//! schema get synthetic ids `0..n`; everything else walks the `gameData`
//! node tree.

mod node;
mod title;

pub use node::{collect_object_ids, MetadataNode};
pub use title::{rules_for, RoundCountSchema, TitleRules};

use serde_json::Value;

use crate::endpoints::Endpoints;
use crate::retry::classify;
use crate::session::SessionRef;
use crate::transport::Transport;

/// Metadata endpoint for a session, using the title's route.
pub fn metadata_url(endpoints: &Endpoints, session: &SessionRef) -> String {
    let rules = rules_for(&session.game_title);
    endpoints.metadata_url(rules.route, &session.game_title, &session.session_id)
}

/// Ids described by a metadata document, in document order.
pub fn game_object_ids(body: &Value, title: &str) -> Vec<String> {
    if let Some(schema) = rules_for(title).round_count {
        if let Some(n) = schema.round_count(body) {
            return (0..n).map(|i| i.to_string()).collect();
        }
    }
    match body.get("gameData") {
        Some(Value::Array(game_data)) => collect_object_ids(game_data),
        _ => Vec::new(),
    }
}

/// Fetches the session's metadata and returns its object ids.
///
/// A failed fetch or a non-object body is logged and yields no ids; other
/// sessions in the same run are unaffected.
pub fn resolve(
    transport: &dyn Transport,
    endpoints: &Endpoints,
    session: &SessionRef,
) -> Vec<String> {
    let url = metadata_url(endpoints, session);
    let body = match transport.get_json(&url) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(
                "An error occurred while retrieving data from {} ({}): {}",
                url,
                classify(&e),
                e
            );
            return Vec::new();
        }
    };
    if !body.is_object() {
        tracing::warn!("metadata from {} is not a JSON object", url);
        return Vec::new();
    }
    let ids = game_object_ids(&body, &session.game_title);
    tracing::debug!("session {}: {} game object ids", session, ids.len());
    ids
}
