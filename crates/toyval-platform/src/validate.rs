//! Structural checks on incoming documents.

use std::collections::HashSet;

use toyval_traits::{Document, PlatformError};

/// Checks that a document is a well-formed graph in dependency order.
///
/// - every node ID is non-empty and unique
/// - every reference points to a node that appears earlier
/// - the root names a node of the document
///
/// Because references only point backwards, a document that passes cannot
/// contain a cycle.
pub fn validate(document: &Document) -> Result<(), PlatformError> {
    let mut seen = HashSet::with_capacity(document.nodes.len());

    for node in &document.nodes {
        for dep in node.call.references() {
            if !seen.contains(dep) {
                return Err(PlatformError::InvalidDocument(format!(
                    "node '{}' references '{}' before it is defined",
                    node.id, dep
                )));
            }
        }

        if node.id.as_str().is_empty() {
            return Err(PlatformError::InvalidDocument("empty node id".into()));
        }
        if !seen.insert(&node.id) {
            return Err(PlatformError::InvalidDocument(format!(
                "duplicate node id '{}'",
                node.id
            )));
        }
    }

    if !seen.contains(&document.root) {
        return Err(PlatformError::InvalidDocument(format!(
            "root '{}' is not a node of the document",
            document.root
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use toyval_core::{Currency, Date};
    use toyval_traits::{Call, NodeId, WireNode};

    fn curve(id: &str, base: Option<&str>) -> WireNode {
        WireNode::new(
            id,
            Call::AddSimpleDiscountCurveToModel {
                model: base.map(NodeId::from),
                currency: Currency::USD,
                anchor: Date::from_ymd(2025, 1, 15).unwrap(),
                rate: 0.01,
            },
        )
    }

    fn doc(root: &str, nodes: Vec<WireNode>) -> Document {
        Document::new(NodeId::new(root), nodes)
    }

    #[test]
    fn test_valid_chain() {
        let d = doc("b", vec![curve("a", None), curve("b", Some("a"))]);
        assert!(validate(&d).is_ok());
    }

    #[test]
    fn test_forward_reference() {
        let d = doc("b", vec![curve("b", Some("a")), curve("a", None)]);
        assert!(matches!(validate(&d), Err(PlatformError::InvalidDocument(_))));
    }

    #[test]
    fn test_self_reference() {
        let d = doc("a", vec![curve("a", Some("a"))]);
        assert!(matches!(validate(&d), Err(PlatformError::InvalidDocument(_))));
    }

    #[test]
    fn test_duplicate_id() {
        let d = doc("a", vec![curve("a", None), curve("a", None)]);
        let err = validate(&d).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_missing_root() {
        let d = doc("z", vec![curve("a", None)]);
        assert!(matches!(validate(&d), Err(PlatformError::InvalidDocument(_))));
        assert!(validate(&doc("z", Vec::new())).is_err());
    }
}
