//! # Serde Binding Adapters
//!
//! `#[serde(with = ...)]` helpers for fields whose natural serde form is
//! wrong for the wire: raw byte blobs, paths, and maps with unstable
//! iteration order.

/// `Vec<u8>` as a lowercase hex string.
pub mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        hex::decode(&text).map_err(serde::de::Error::custom)
    }
}

/// [`groundwork_trees::ListPath`] as its slash-joined display form.
///
/// Segments must not themselves contain `/`, and must parse back via
/// `FromStr`. The empty string maps to the empty path.
pub mod display_path {
    use std::fmt::Display;
    use std::str::FromStr;

    use groundwork_trees::ListPath;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S, Seg>(path: &ListPath<Seg>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        Seg: Display,
    {
        serializer.serialize_str(&path.to_string())
    }

    pub fn deserialize<'de, D, Seg>(deserializer: D) -> Result<ListPath<Seg>, D::Error>
    where
        D: Deserializer<'de>,
        Seg: FromStr,
        Seg::Err: Display,
    {
        let text = String::deserialize(deserializer)?;
        if text.is_empty() {
            return Ok(ListPath::new());
        }
        text.split('/')
            .map(|segment| segment.parse::<Seg>().map_err(serde::de::Error::custom))
            .collect::<Result<ListPath<Seg>, _>>()
    }
}

/// `HashMap` as a key-sorted list of pairs.
///
/// Hash map iteration order is unspecified; sorting by key makes the
/// serialized form deterministic, so equal maps always produce identical
/// bytes (fingerprinting, diffing, golden files).
pub mod sorted_map {
    use std::collections::HashMap;
    use std::hash::Hash;

    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, K, V>(map: &HashMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        K: Ord + Serialize,
        V: Serialize,
    {
        let mut entries: Vec<(&K, &V)> = map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut seq = serializer.serialize_seq(Some(entries.len()))?;
        for entry in entries {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D, K, V>(deserializer: D) -> Result<HashMap<K, V>, D::Error>
    where
        D: Deserializer<'de>,
        K: Eq + Hash + Deserialize<'de>,
        V: Deserialize<'de>,
    {
        let entries: Vec<(K, V)> = Vec::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
