//! Query parameters for generated URLs.

use std::collections::BTreeMap;

use crate::constants::DEFAULT_PARAMS_KEY;
use crate::escape::escape_form;

/// A single parameter value.
///
/// Lists and maps nest the way form parameters usually do: a list under
/// `tags` serializes as `tags[]=a&tags[]=b`, a map under `user` as
/// `user[name]=...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A value with no string form. Dropped at the top level.
    Null,
    /// A plain value
    Text(String),
    /// An ordered list of values
    List(Vec<ParamValue>),
    /// A nested mapping
    Map(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    /// Returns true for [`ParamValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    fn is_empty_collection(&self) -> bool {
        match self {
            Self::List(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            Self::Null | Self::Text(_) => false,
        }
    }

    fn push_query(&self, key: &str, out: &mut Vec<String>) {
        match self {
            Self::Null => out.push(format!("{}=", escape_form(key))),
            Self::Text(text) => out.push(format!("{}={}", escape_form(key), escape_form(text))),
            Self::List(items) => {
                let prefix = format!("{key}[]");
                for item in items {
                    item.push_query(&prefix, out);
                }
            }
            Self::Map(entries) => {
                for (name, value) in entries {
                    if value.is_empty_collection() {
                        continue;
                    }
                    value.push_query(&format!("{key}[{name}]"), out);
                }
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Text(value.to_string())
    }
}

macro_rules! param_value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

param_value_from_int!(i32, i64, u16, u32, u64, usize);

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, ParamValue>> for ParamValue {
    fn from(entries: BTreeMap<String, ParamValue>) -> Self {
        Self::Map(entries)
    }
}

/// The `params` option: either a mapping or a single bare value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Params {
    /// Parameter name to value
    Mapping(BTreeMap<String, ParamValue>),
    /// A bare value, serialized under the `params` key
    Scalar(ParamValue),
}

impl Params {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self::Mapping(BTreeMap::new())
    }

    /// Adds a parameter, turning a scalar into a mapping first.
    ///
    /// # Examples
    ///
    /// ```
    /// use link_uri::Params;
    ///
    /// let params = Params::new().with("page", 2).with("q", "rust url");
    /// assert_eq!(params.to_query(), "page=2&q=rust+url");
    /// ```
    #[must_use]
    pub fn with(self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let mut mapping = self.into_mapping();
        mapping.insert(name.into(), value.into());
        Self::Mapping(mapping)
    }

    /// Normalizes to a mapping; a scalar lands under the `params` key.
    #[must_use]
    pub fn into_mapping(self) -> BTreeMap<String, ParamValue> {
        match self {
            Self::Mapping(mapping) => mapping,
            Self::Scalar(value) => BTreeMap::from([(DEFAULT_PARAMS_KEY.to_string(), value)]),
        }
    }

    /// Serializes the parameters, dropping top-level entries without a value.
    ///
    /// Returns an empty string when nothing is left to serialize.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut mapping = self.clone().into_mapping();
        mapping.retain(|_, value| !value.is_null());
        to_query(&mapping)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BTreeMap<String, ParamValue>> for Params {
    fn from(mapping: BTreeMap<String, ParamValue>) -> Self {
        Self::Mapping(mapping)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Mapping(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Serializes a parameter mapping into an `&`-joined query string.
///
/// Keys are emitted in sorted order and form-encoded along with values.
/// Empty lists and maps produce nothing.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use link_uri::{ParamValue, to_query};
///
/// let mut params = BTreeMap::new();
/// params.insert("tags".to_string(), ParamValue::from(vec!["a", "b"]));
/// params.insert("id".to_string(), ParamValue::from(7));
/// assert_eq!(to_query(&params), "id=7&tags%5B%5D=a&tags%5B%5D=b");
/// ```
#[must_use]
pub fn to_query(params: &BTreeMap<String, ParamValue>) -> String {
    let mut pairs = Vec::new();
    for (name, value) in params {
        if value.is_empty_collection() {
            continue;
        }
        value.push_query(name, &mut pairs);
    }
    pairs.join("&")
}
