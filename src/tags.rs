//! Tag lookup utilities.
//!
//! The wire format allows tags with a missing key or value, and does not
//! guarantee key uniqueness. All of that defensive handling is confined to
//! this module: lookups are first-match-wins, and a malformed tag simply
//! never matches.

/// A single key/value tag as observed on the wire. Either field may be
/// absent on malformed entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// An instance's tags, in wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(Vec<Tag>);

impl TagSet {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self(tags)
    }

    /// Build a tag set from well-formed pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| Tag::new(k, v)).collect())
    }

    /// True iff some tag carries exactly this key and exactly this value.
    /// Case-sensitive on both sides.
    pub fn has_exact(&self, key: &str, value: &str) -> bool {
        self.0
            .iter()
            .any(|t| t.key.as_deref() == Some(key) && t.value.as_deref() == Some(value))
    }

    /// Value of the first tag whose key matches, or `""` when the key is
    /// absent or the matching tag has no value.
    pub fn value_of(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|t| t.key.as_deref() == Some(key))
            .map(|t| t.value.as_deref().unwrap_or(""))
            .unwrap_or("")
    }
}
