use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Number, Value};

/// One value of the wire document.
///
/// There is no null variant: absent fields never reach the
/// document, so every value handed to the interchange serializer is concrete.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WireValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Seq(Vec<WireValue>),
    Map(WireMap),
    /// Opaque JSON slot passed through without inspection.
    Any(Value),
}

impl WireValue {
    #[must_use]
    pub fn as_map(&self) -> Option<&WireMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_seq(&self) -> Option<&[WireValue]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Converts into a `serde_json::Value`, keeping map key order.
    ///
    /// Non-finite floats become `null`, matching what `serde_json` writes for
    /// them in text form.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        match self {
            Self::Bool(value) => Value::Bool(*value),
            Self::Int(value) => Value::Number(Number::from(*value)),
            Self::Float(value) => Number::from_f64(*value).map_or(Value::Null, Value::Number),
            Self::String(value) => Value::String(value.clone()),
            Self::Seq(items) => Value::Array(items.iter().map(Self::to_json_value).collect()),
            Self::Map(map) => map.to_json_value(),
            Self::Any(value) => value.clone(),
        }
    }
}

impl From<WireMap> for WireValue {
    fn from(value: WireMap) -> Self {
        Self::Map(value)
    }
}

/// Insertion-ordered mapping from wire key to wire value.
///
/// Keys appear in the declaration order of the node that produced the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WireMap(IndexMap<&'static str, WireValue>);

impl WireMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: &'static str, value: WireValue) {
        self.0.insert(key, value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&WireValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &WireValue)> + '_ {
        self.0.iter().map(|(key, value)| (*key, value))
    }

    #[must_use]
    pub fn to_json_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(key, value)| ((*key).to_owned(), value.to_json_value()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_keeps_insertion_order_in_json_text() {
        let mut map = WireMap::new();
        map.insert("zeta", WireValue::Int(1));
        map.insert("alpha", WireValue::Bool(true));
        map.insert("mid", WireValue::String("x".to_owned()));

        let text = serde_json::to_string(&map).expect("serialize");
        assert_eq!(text, r#"{"zeta":1,"alpha":true,"mid":"x"}"#);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn json_value_conversion_matches_serializer_output() {
        let mut inner = WireMap::new();
        inner.insert("x", WireValue::Float(0.5));
        let mut map = WireMap::new();
        map.insert("pos", WireValue::Map(inner));
        map.insert(
            "list",
            WireValue::Seq(vec![WireValue::Int(1), WireValue::Int(2)]),
        );
        map.insert("meta", WireValue::Any(serde_json::json!({"k": [1, null]})));

        let via_serde = serde_json::to_value(&map).expect("to value");
        assert_eq!(map.to_json_value(), via_serde);
    }

    #[test]
    fn non_finite_float_converts_to_null() {
        assert_eq!(WireValue::Float(f64::NAN).to_json_value(), Value::Null);
    }
}
