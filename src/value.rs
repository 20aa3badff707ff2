use crate::compat::{String, ToString, Vec, format};

/// Suffix marking a stored key as array-valued.
const ARRAY_SUFFIX: &str = "[]";

/// A query parameter value: either a single scalar or an ordered
/// sequence of scalars.
///
/// The variant decides the wire encoding: sequences are stored under a
/// `key[]` name with their elements joined by `,`, scalars are stored
/// under the key unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    Many(Vec<String>),
}

impl ParamValue {
    pub fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    /// Get the scalar value, or `None` for a sequence.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(v) => Some(v),
            Self::Many(_) => None,
        }
    }

    /// Get the sequence elements, or `None` for a scalar.
    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Many(vs) => Some(vs),
        }
    }

    /// Encode for storage under `key`.
    /// Returns the stored (key, value) pair: `("k[]", "a,b")` for a
    /// sequence, `("k", "a")` for a scalar.
    ///
    /// The `,` join has no escaping, so sequence elements containing
    /// literal commas do not survive a round trip. Documented
    /// limitation of the format.
    pub(crate) fn encode(&self, key: &str) -> (String, String) {
        match self {
            Self::Single(v) => (key.to_string(), v.clone()),
            Self::Many(vs) => (format!("{key}{ARRAY_SUFFIX}"), vs.join(",")),
        }
    }

    /// Decode a stored (key, value) pair back to the true key and value.
    /// Inverse of `encode` for comma-free elements.
    pub(crate) fn decode(stored_key: &str, stored_value: &str) -> (String, Self) {
        match stored_key.strip_suffix(ARRAY_SUFFIX) {
            Some(key) => {
                let elements = stored_value.split(',').map(ToString::to_string).collect();
                (key.to_string(), Self::Many(elements))
            }
            None => (stored_key.to_string(), Self::Single(stored_value.to_string())),
        }
    }

    /// Flatten-concat two values into one sequence, preserving order.
    pub(crate) fn merge(self, other: Self) -> Self {
        let mut elements = match self {
            Self::Single(v) => Vec::from([v]),
            Self::Many(vs) => vs,
        };
        match other {
            Self::Single(v) => elements.push(v),
            Self::Many(vs) => elements.extend(vs),
        }
        Self::Many(elements)
    }

    /// Stored key name for removal purposes: `k` names both `k` and `k[]`.
    pub(crate) fn array_key(key: &str) -> String {
        format!("{key}{ARRAY_SUFFIX}")
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Single(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Single(v)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(vs: Vec<String>) -> Self {
        Self::Many(vs)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(vs: Vec<&str>) -> Self {
        Self::Many(vs.into_iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(vs: [&str; N]) -> Self {
        Self::Many(vs.iter().map(ToString::to_string).collect())
    }
}
