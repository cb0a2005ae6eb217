use std::fmt;

use serde::Serialize;

// ── MetadataValue ────────────────────────────────────────────────────────────

/// A single value in the extracted metadata mapping.
///
/// Text and name objects from the `/Info` dictionary become [`Text`],
/// numbers keep their numeric form. Composite objects (arrays, dictionaries,
/// streams) carry no displayable value and become [`Null`].
///
/// [`Text`]: MetadataValue::Text
/// [`Null`]: MetadataValue::Null
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Integer(i64),
    /// Stored at lopdf's `f32` precision.
    Real(f32),
    Boolean(bool),
    Null,
}

impl MetadataValue {
    /// Returns the string content for [`MetadataValue::Text`], `None` otherwise.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("None"),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for MetadataValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

// ── DocumentMetadata ─────────────────────────────────────────────────────────

/// Insertion-ordered mapping from field name to [`MetadataValue`].
///
/// Built fresh for every upload by [`crate::extract_metadata`]. Field names
/// are either `/Info` keys without the leading slash (`Title`, `Author`, …)
/// or the synthetic keys `Pages`, `Format`, `PDF Version` and `Encryption`.
///
/// ```
/// # use pdfmetadataanalyzer::{DocumentMetadata, MetadataValue};
/// let mut m = DocumentMetadata::new();
/// m.insert("Pages", 3i64);
/// m.insert("Title", "Quarterly report");
/// m.insert("Pages", 4i64);
///
/// let keys: Vec<_> = m.iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, ["Pages", "Title"]);
/// assert_eq!(m.get("Pages"), Some(&MetadataValue::Integer(4)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentMetadata {
    entries: Vec<(String, MetadataValue)>,
}

impl DocumentMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. An existing key keeps its position and gets the new value.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Membership test used by presence checks.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for DocumentMetadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        for (k, v) in iter {
            metadata.insert(k, v);
        }
        metadata
    }
}

// Serialised as a list of property/value rows so the order survives JSON.
impl Serialize for DocumentMetadata {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Row<'a> {
            property: &'a str,
            value: &'a MetadataValue,
        }

        serializer.collect_seq(self.iter().map(|(property, value)| Row { property, value }))
    }
}
