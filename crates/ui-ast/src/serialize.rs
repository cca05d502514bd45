//! JSON emission for the value model and the node tree.
//!
//! Two equivalent paths are provided: `to_json`/`node_to_json` build a
//! `serde_json::Value`, and the `Serialize` impls stream the same shape into any
//! serde serializer. Both follow the sparse rule: a node's `props` key is emitted
//! only when it has props, and `children` only when it has children. Renderers
//! read a missing key as "none"; an empty object or array is not equivalent.

use crate::node::Node;
use crate::value::DynamicValue;
use serde::Serialize;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map, Number, Value};

/// Converts a dynamic value into its JSON form.
///
/// Non-finite numbers have no JSON form and are emitted as `null`.
pub fn to_json(value: &DynamicValue) -> Value {
    match value {
        DynamicValue::Text(s) => Value::String(s.clone()),
        DynamicValue::Number(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
        DynamicValue::Boolean(b) => Value::Bool(*b),
        DynamicValue::List(items) => Value::Array(items.iter().map(to_json).collect()),
        DynamicValue::Map(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect::<Map<String, Value>>(),
        ),
    }
}

/// Converts a node tree into `{ type, props?, children? }` objects.
pub fn node_to_json(node: &Node) -> Value {
    let mut out = Map::new();
    out.insert("type".to_string(), Value::String(node.kind.clone()));

    if !node.props.is_empty() {
        let props = node
            .props
            .iter()
            .map(|(k, v)| (k.clone(), to_json(v)))
            .collect::<Map<String, Value>>();
        out.insert("props".to_string(), Value::Object(props));
    }

    if !node.children.is_empty() {
        let children = node.children.iter().map(node_to_json).collect();
        out.insert("children".to_string(), Value::Array(children));
    }

    Value::Object(out)
}

/// Compact JSON text of a node tree.
pub fn stringify(node: &Node) -> String {
    node_to_json(node).to_string()
}

impl Serialize for DynamicValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DynamicValue::Text(s) => serializer.serialize_str(s),
            DynamicValue::Number(n) => serializer.serialize_f64(*n),
            DynamicValue::Boolean(b) => serializer.serialize_bool(*b),
            DynamicValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            DynamicValue::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = 1 + usize::from(!self.props.is_empty()) + usize::from(!self.children.is_empty());
        let mut out = serializer.serialize_map(Some(len))?;
        out.serialize_entry("type", &self.kind)?;
        if !self.props.is_empty() {
            out.serialize_entry("props", &self.props)?;
        }
        if !self.children.is_empty() {
            out.serialize_entry("children", &self.children)?;
        }
        out.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{element, none, text};
    use crate::value::{Props, props};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_text_node_exact_output() {
        assert_eq!(
            stringify(&text("Close")),
            r##"{"type":"#text","props":{"value":"Close"}}"##
        );
    }

    #[test]
    fn test_bare_element_has_only_type() {
        assert_eq!(node_to_json(&element("div", none(), Props::new())), json!({"type": "div"}));
    }

    #[test]
    fn test_number_is_not_truncated() {
        assert_eq!(to_json(&DynamicValue::Number(12.5)), json!(12.5));
        assert_eq!(to_json(&DynamicValue::Number(3.0)), json!(3.0));
    }

    #[test]
    fn test_non_finite_number_becomes_null() {
        assert_eq!(to_json(&DynamicValue::Number(f64::NAN)), Value::Null);
        assert_eq!(to_json(&DynamicValue::Number(f64::INFINITY)), Value::Null);
    }

    #[test]
    fn test_map_key_order_is_insertion_order() {
        let value = DynamicValue::Map(props([
            ("name", DynamicValue::from("t")),
            ("idCol", DynamicValue::from("order")),
            ("autoSave", DynamicValue::from(false)),
        ]));
        assert_eq!(
            serde_json::to_string(&to_json(&value)).unwrap(),
            r#"{"name":"t","idCol":"order","autoSave":false}"#
        );
    }

    #[test]
    fn test_serde_impl_matches_value_path() {
        let tree = element(
            "div",
            vec![
                text("hello"),
                element("ul", vec![element("li", none(), Props::new())], Props::new()),
            ],
            props([
                ("className", DynamicValue::from("box")),
                (
                    "style",
                    DynamicValue::Map(props([("width", DynamicValue::from(100))])),
                ),
            ]),
        );
        let streamed = serde_json::to_string(&tree).unwrap();
        assert_eq!(streamed, stringify(&tree));
    }
}
