//! Ordered HTML attribute mapping.
//!
//! [`Attributes`] keeps insertion order so that generated markup is stable:
//! caller attributes come first, then the ones added while formatting a link.

use indexmap::IndexMap;

/// Value of a single HTML attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// Rendered as the bare attribute name (`<input disabled>`).
    Bare,
    /// Not rendered at all.
    Omitted,
    /// Rendered as `name="value"`.
    Value(String),
}

impl AttrValue {
    /// Whether the value switches a boolean attribute on.
    ///
    /// `Bare` and non-empty values are truthy, except `"0"`.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bare => true,
            Self::Omitted => false,
            Self::Value(value) => !value.is_empty() && value != "0",
        }
    }

    /// Get the string value, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(value) => Some(value),
            Self::Bare | Self::Omitted => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        if value { Self::Bare } else { Self::Omitted }
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Omitted, Into::into)
    }
}

/// Ordered mapping of attribute names to values.
///
/// # Example
///
/// ```
/// use autolink::{AttrValue, Attributes};
///
/// let mut attribs = Attributes::from([("target", "_blank")]);
/// attribs.set("rel", "noopener").set("hidden", true);
///
/// let names: Vec<_> = attribs.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["target", "rel", "hidden"]);
/// assert_eq!(attribs.get("hidden"), Some(&AttrValue::Bare));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    items: IndexMap<String, AttrValue>,
}

impl Attributes {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute.
    ///
    /// Overwriting an existing attribute keeps its original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.items.insert(name.into(), value.into());
        self
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Get an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.items.get(name)
    }

    /// Remove an attribute, preserving the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.items.shift_remove(name)
    }

    /// Iterate over attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.items
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Number of attributes, including omitted ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add all attributes from `other`, overwriting on conflict.
    pub fn merge(&mut self, other: &Attributes) {
        for (name, value) in &other.items {
            self.items.insert(name.clone(), value.clone());
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(items: [(K, V); N]) -> Self {
        items.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attribs = Self::new();
        for (name, value) in iter {
            attribs.set(name, value);
        }
        attribs
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{self, Deserialize, Deserializer, Visitor};
    use serde::ser::{Serialize, Serializer};

    use super::{AttrValue, Attributes};

    /// `true` for bare attributes, `null` for omitted ones, a string otherwise.
    impl Serialize for AttrValue {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Self::Bare => serializer.serialize_bool(true),
                Self::Omitted => serializer.serialize_none(),
                Self::Value(value) => serializer.serialize_str(value),
            }
        }
    }

    impl<'de> Deserialize<'de> for AttrValue {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(AttrValueVisitor)
        }
    }

    struct AttrValueVisitor;

    impl<'de> Visitor<'de> for AttrValueVisitor {
        type Value = AttrValue;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, a boolean or null")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<AttrValue, E> {
            Ok(AttrValue::from(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<AttrValue, E> {
            Ok(AttrValue::from(v))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<AttrValue, E> {
            Ok(AttrValue::Value(v))
        }

        fn visit_none<E: de::Error>(self) -> Result<AttrValue, E> {
            Ok(AttrValue::Omitted)
        }

        fn visit_unit<E: de::Error>(self) -> Result<AttrValue, E> {
            Ok(AttrValue::Omitted)
        }
    }

    impl Serialize for Attributes {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.items.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Attributes {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Ok(Self {
                items: indexmap::IndexMap::deserialize(deserializer)?,
            })
        }
    }
}
