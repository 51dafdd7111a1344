use std::{fmt, marker::PhantomData};

use serde::{
    de::{Deserialize, Deserializer, MapAccess, Visitor},
    ser::{Serialize, SerializeMap, Serializer},
};
use tracing::warn;

use super::{finite::ensure_finite, Entry, OrderedMap};
use crate::{
    error::{Error, Result},
    util::cautious_capacity,
};

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;

        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

/// A lone entry serializes as a one-key object.
impl<V: Serialize> Serialize for Entry<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.value)?;
        map.end()
    }
}

struct OrderedMapVisitor<V> {
    marker: PhantomData<fn() -> OrderedMap<V>>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with string keys")
    }

    // duplicate keys follow `set`: the last value wins, the first position stays
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut map = OrderedMap::with_capacity(cautious_capacity(access.size_hint()));

        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.set(key, value);
        }

        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: PhantomData,
        })
    }
}

impl<V: Serialize> OrderedMap<V> {
    /// Compact JSON object of the live entries, in insertion order.
    ///
    /// An empty map encodes as `{}`. NaN and infinite floats anywhere in the
    /// values are an encoding error rather than `null`.
    pub fn to_json(&self) -> Result<String> {
        encode_json(self)
    }

    /// YAML rendering of [`to_json`](Self::to_json).
    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> Result<String> {
        json_to_yaml(&self.to_json()?)
    }
}

impl<V: Serialize> Entry<V> {
    pub fn to_json(&self) -> Result<String> {
        encode_json(self)
    }

    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> Result<String> {
        json_to_yaml(&self.to_json()?)
    }
}

/// Best-effort rendering: the JSON text, or nothing at all if encoding
/// fails. Use [`OrderedMap::to_json`] to see the error.
impl<V: Serialize> fmt::Display for OrderedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            Ok(json) => f.write_str(&json),
            Err(err) => {
                warn!(error = %err, len = self.len(), "dropping unencodable ordered map from display");
                Ok(())
            }
        }
    }
}

fn encode_json<T: ?Sized + Serialize>(value: &T) -> Result<String> {
    ensure_finite(value).map_err(Error::Encoding)?;
    serde_json::to_string(value).map_err(Error::Encoding)
}

// serde_yaml's Mapping keeps insertion order, so the JSON key order carries over.
#[cfg(feature = "yaml")]
fn json_to_yaml(json: &str) -> Result<String> {
    let document: serde_yaml::Value =
        serde_json::from_str(json).map_err(|err| Error::Conversion(Box::new(err)))?;

    serde_yaml::to_string(&document).map_err(|err| Error::Conversion(Box::new(err)))
}
