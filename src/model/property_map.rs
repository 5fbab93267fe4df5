//! Property maps on vertices, edges, path steps and map values.

use hashbrown::HashMap;

use crate::encoding::Text;
use super::{Expected, Value};

/// Engine-side property map: raw byte keys to values.
pub type PropertyMap = HashMap<Vec<u8>, Value>;

/// Fixture-side property map: authored keys to expectations.
pub type ExpectedMap = HashMap<Text, Expected>;

impl Value {
    /// Build a `Value::Map` from (key, value) pairs.
    pub fn map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Vec<u8>>,
        V: Into<Value>,
    {
        Value::Map(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl Expected {
    /// Build an `Expected::Map` from (key, expectation) pairs.
    pub fn map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Text>,
        V: Into<Expected>,
    {
        Expected::Map(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Serialize a byte-keyed map as a sequence of `[key, value]` pairs, since
/// JSON object keys must be strings.
pub(crate) mod pairs {
    use hashbrown::HashMap;
    use serde::de::Deserializer;
    use serde::ser::{SerializeSeq, Serializer};
    use serde::Deserialize;

    use crate::model::Value;

    pub fn serialize<S: Serializer>(map: &HashMap<Vec<u8>, Value>, ser: S) -> Result<S::Ok, S::Error> {
        let mut seq = ser.serialize_seq(Some(map.len()))?;
        for entry in map {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<HashMap<Vec<u8>, Value>, D::Error> {
        let entries = Vec::<(Vec<u8>, Value)>::deserialize(de)?;
        Ok(entries.into_iter().collect())
    }
}
