//! Metadata node classification and traversal.

use serde_json::Value;

use crate::session::field_text;

/// One node of the metadata tree, classified by its `type` discriminator.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataNode<'a> {
    /// Leaf naming one artifact (its `gameObjectId`, if present).
    Shareable(Option<String>),
    /// Holds further nodes in `children`.
    Container(&'a [Value]),
    /// Any other type, or not an object at all.
    Unknown,
}

impl<'a> MetadataNode<'a> {
    pub fn classify(value: &'a Value) -> Self {
        let Some(obj) = value.as_object() else {
            return MetadataNode::Unknown;
        };
        match obj.get("type").and_then(field_text).as_deref() {
            Some("shareable") => {
                MetadataNode::Shareable(obj.get("gameObjectId").and_then(field_text))
            }
            Some("container") => match obj.get("children") {
                Some(Value::Array(children)) => MetadataNode::Container(children),
                _ => MetadataNode::Container(&[]),
            },
            _ => MetadataNode::Unknown,
        }
    }
}

/// Depth-first, document-order collection of the ids under `roots`.
///
/// Uses an explicit stack so arbitrarily deep containers cannot exhaust the call stack.
pub fn collect_object_ids(roots: &[Value]) -> Vec<String> {
    let mut ids = Vec::new();
    let mut stack: Vec<std::slice::Iter<'_, Value>> = vec![roots.iter()];
    while let Some(top) = stack.last_mut() {
        let Some(value) = top.next() else {
            stack.pop();
            continue;
        };
        match MetadataNode::classify(value) {
            MetadataNode::Shareable(Some(id)) => ids.push(id),
            MetadataNode::Shareable(None) | MetadataNode::Unknown => {}
            MetadataNode::Container(children) => stack.push(children.iter()),
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_variants() {
        let leaf = json!({"type": "shareable", "gameObjectId": "A"});
        assert_eq!(
            MetadataNode::classify(&leaf),
            MetadataNode::Shareable(Some("A".to_string()))
        );
        let bare = json!({"type": "shareable"});
        assert_eq!(MetadataNode::classify(&bare), MetadataNode::Shareable(None));
        let empty = json!({"type": "container"});
        assert_eq!(MetadataNode::classify(&empty), MetadataNode::Container(&[]));
        assert_eq!(
            MetadataNode::classify(&json!({"type": "banner"})),
            MetadataNode::Unknown
        );
        assert_eq!(MetadataNode::classify(&json!({})), MetadataNode::Unknown);
        assert_eq!(MetadataNode::classify(&json!("shareable")), MetadataNode::Unknown);
    }

    #[test]
    fn nested_containers_in_document_order() {
        let roots = json!([
            {"type": "container", "children": [
                {"type": "shareable", "gameObjectId": "A"},
                {"type": "container", "children": [
                    {"type": "shareable", "gameObjectId": "B"},
                    {"type": "shareable", "gameObjectId": "C"}
                ]}
            ]},
            {"type": "shareable", "gameObjectId": "D"}
        ]);
        let ids = collect_object_ids(roots.as_array().unwrap());
        assert_eq!(ids, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn unknown_nodes_contribute_nothing() {
        let roots = json!([
            {"type": "header", "children": [{"type": "shareable", "gameObjectId": "hidden"}]},
            {"type": "shareable"},
            {"type": "shareable", "gameObjectId": 7},
            42
        ]);
        assert_eq!(collect_object_ids(roots.as_array().unwrap()), vec!["7"]);
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        let mut node = json!({"type": "shareable", "gameObjectId": "deep"});
        for _ in 0..1_000 {
            node = json!({"type": "container", "children": [node]});
        }
        let roots = vec![node];
        assert_eq!(collect_object_ids(&roots), vec!["deep"]);
    }
}
