use crate::value::{DynamicValue, Props};

/// Type tag of the leaf node that carries plain text.
pub const TEXT_NODE: &str = "#text";

/// One element of a UI description tree.
///
/// A node is built bottom-up and never mutated afterwards: its props and
/// children are owned exclusively by it, so a tree can't contain cycles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    /// Element tag or component type, e.g. `div` or `Recharts.LineChart`.
    pub kind: String,
    pub props: Props,
    pub children: Vec<Node>,
}

impl Node {
    /// True for the `#text` leaf shape produced by [`text`].
    pub fn is_text(&self) -> bool {
        self.kind == TEXT_NODE
    }

    /// Returns the `value` prop of a text node.
    pub fn text_value(&self) -> Option<&str> {
        if !self.is_text() {
            return None;
        }
        self.props.get("value").and_then(DynamicValue::as_str)
    }

    /// Number of nodes in the tree rooted at `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

/// The generic constructor every named tag constructor goes through.
pub fn element(kind: impl Into<String>, children: Vec<Node>, props: Props) -> Node {
    Node {
        kind: kind.into(),
        props,
        children,
    }
}

/// Builds a `#text` leaf: `{ "type": "#text", "props": { "value": ... } }`.
pub fn text(value: impl Into<String>) -> Node {
    let mut props = Props::with_capacity(1);
    props.insert("value".to_string(), DynamicValue::Text(value.into()));
    element(TEXT_NODE, Vec::new(), props)
}

/// An empty child list, for call sites that only pass props.
pub fn none() -> Vec<Node> {
    Vec::new()
}
