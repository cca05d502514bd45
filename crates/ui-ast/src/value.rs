use crate::error::ValueError;
use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// Ordered attribute map used for node props and `DynamicValue::Map`.
pub type Props = IndexMap<String, DynamicValue>;

/// A JSON-compatible value used for node attributes and table cells.
///
/// The set of variants is closed: there is no null and no escape hatch for
/// foreign payloads. Maps keep their insertion order so the same input always
/// serializes to the same text.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    List(Vec<DynamicValue>),
    Map(Props),
}

impl DynamicValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DynamicValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DynamicValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[DynamicValue]> {
        match self {
            DynamicValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Props> {
        match self {
            DynamicValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Parses JSON text into a value, with no limit on nesting depth.
    ///
    /// `serde_json::from_str` stops at 128 levels; this lifts that limit and
    /// grows the stack on demand, so anything `serde_json::to_string` wrote
    /// for a `DynamicValue` reads back.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let mut json_de = serde_json::Deserializer::from_str(json);
        json_de.disable_recursion_limit();
        let value = DynamicValue::deserialize(serde_stacker::Deserializer::new(&mut json_de))?;
        json_de.end()?;
        Ok(value)
    }

    /// Looks up `key` if this value is a map.
    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        self.as_map().and_then(|map| map.get(key))
    }
}

// --- Conversions into DynamicValue ---

impl From<&str> for DynamicValue {
    fn from(value: &str) -> Self {
        DynamicValue::Text(value.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(value: String) -> Self {
        DynamicValue::Text(value)
    }
}

impl From<&String> for DynamicValue {
    fn from(value: &String) -> Self {
        DynamicValue::Text(value.clone())
    }
}

impl From<f64> for DynamicValue {
    fn from(value: f64) -> Self {
        DynamicValue::Number(value)
    }
}

impl From<i32> for DynamicValue {
    fn from(value: i32) -> Self {
        DynamicValue::Number(f64::from(value))
    }
}

impl From<u32> for DynamicValue {
    fn from(value: u32) -> Self {
        DynamicValue::Number(f64::from(value))
    }
}

impl From<bool> for DynamicValue {
    fn from(value: bool) -> Self {
        DynamicValue::Boolean(value)
    }
}

impl From<Vec<DynamicValue>> for DynamicValue {
    fn from(value: Vec<DynamicValue>) -> Self {
        DynamicValue::List(value)
    }
}

impl From<Props> for DynamicValue {
    fn from(value: Props) -> Self {
        DynamicValue::Map(value)
    }
}

impl FromIterator<DynamicValue> for DynamicValue {
    fn from_iter<I: IntoIterator<Item = DynamicValue>>(iter: I) -> Self {
        DynamicValue::List(iter.into_iter().collect())
    }
}

/// Builds an ordered attribute map from key/value pairs.
///
/// ```
/// use ui_ast::{props, DynamicValue};
///
/// let p = props([("size", DynamicValue::from("xxxl")), ("open", true.into())]);
/// assert_eq!(p.keys().collect::<Vec<_>>(), ["size", "open"]);
/// ```
pub fn props<K, I>(pairs: I) -> Props
where
    K: Into<String>,
    I: IntoIterator<Item = (K, DynamicValue)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

// --- JSON interop ---

impl TryFrom<serde_json::Value> for DynamicValue {
    type Error = ValueError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        Ok(match value {
            Value::Null => return Err(ValueError::Null),
            Value::Bool(b) => DynamicValue::Boolean(b),
            // Without `arbitrary_precision` every JSON number has an f64 view.
            Value::Number(n) => DynamicValue::Number(n.as_f64().unwrap_or_default()),
            Value::String(s) => DynamicValue::Text(s),
            Value::Array(items) => DynamicValue::List(
                items
                    .into_iter()
                    .map(DynamicValue::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(map) => DynamicValue::Map(
                map.into_iter()
                    .map(|(k, v)| DynamicValue::try_from(v).map(|v| (k, v)))
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

impl<'de> Deserialize<'de> for DynamicValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DynamicValueVisitor)
    }
}

struct DynamicValueVisitor;

impl<'de> Visitor<'de> for DynamicValueVisitor {
    type Value = DynamicValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number, boolean, array or object")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(DynamicValue::Boolean(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(DynamicValue::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(DynamicValue::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(DynamicValue::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(DynamicValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(DynamicValue::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(E::custom(ValueError::Null))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(E::custom(ValueError::Null))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(DynamicValue::List(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = Props::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, DynamicValue>()? {
            map.insert(key, value);
        }
        Ok(DynamicValue::Map(map))
    }
}
