//! Per-title metadata rules.
//!
//! Titles are matched by exact name. Anything not listed uses the gallery
//! route and generic node traversal.

use serde_json::Value;

use crate::endpoints::MetadataRoute;

/// Where a title's metadata records its match-up list, when ids are synthesized from a round count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundCountSchema {
    /// `{"matchups": [...]}` at the document root.
    RootMatchups,
    /// `{"gameData": [{"blob": {"matchups": [...]}}, ...]}`.
    BlobMatchups,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleRules {
    pub route: MetadataRoute,
    pub round_count: Option<RoundCountSchema>,
}

const GENERIC: TitleRules = TitleRules {
    route: MetadataRoute::Gallery,
    round_count: None,
};

const KNOWN_TITLES: &[(&str, TitleRules)] = &[
    (
        "Quiplash2Game",
        TitleRules {
            route: MetadataRoute::Direct,
            round_count: Some(RoundCountSchema::RootMatchups),
        },
    ),
    (
        "quiplash3Game",
        TitleRules {
            route: MetadataRoute::Gallery,
            round_count: Some(RoundCountSchema::BlobMatchups),
        },
    ),
];

pub fn rules_for(title: &str) -> TitleRules {
    KNOWN_TITLES
        .iter()
        .find(|(name, _)| *name == title)
        .map(|(_, rules)| *rules)
        .unwrap_or(GENERIC)
}

impl RoundCountSchema {
    /// Number of match-ups in `body`, if the document has the expected shape.
    pub fn round_count(self, body: &Value) -> Option<usize> {
        let matchups = match self {
            RoundCountSchema::RootMatchups => body.get("matchups"),
            RoundCountSchema::BlobMatchups => body
                .get("gameData")?
                .as_array()?
                .first()?
                .get("blob")?
                .get("matchups"),
        };
        matchups?.as_array().map(Vec::len)
    }
}
