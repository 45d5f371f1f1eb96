use std::{io, str::FromStr};

use serde_json::Value;

use crate::{error::DecodeError, JsonValue, Object, QueryResult, Segment, ValueType};

/// An immutable JSON document that answers path queries.
///
/// The document root is always an object. Input that decodes to anything else
/// at the top level (`null`, a scalar or an array) is stored as an empty object.
#[derive(Debug, Clone, PartialEq)]
pub struct Searcher {
    root: JsonValue,
}

impl Searcher {
    /// Decode a JSON document from raw bytes.
    ///
    /// # Errors
    ///
    /// If `bytes` is not a valid JSON document.
    pub fn new(bytes: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(bytes).map_err(DecodeError::new)?;
        Ok(Self::from(value))
    }

    /// Decode a JSON document from a reader.
    ///
    /// # Errors
    ///
    /// If reading fails or the input is not a valid JSON document.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_reader(reader).map_err(DecodeError::new)?;
        Ok(Self::from(value))
    }

    /// The document root, always a [`JsonValue::Object`].
    #[must_use]
    pub fn root(&self) -> &JsonValue {
        &self.root
    }

    /// Resolve `path` starting from the document root.
    ///
    /// Resolution never fails loudly: a missing key, an out-of-range or negative
    /// index, or descending into a value that is not a container all produce a
    /// result for which [`QueryResult::exists`] is `false`.
    ///
    /// ```rust
    /// use jsonsearcher::{path, Searcher, ValueType};
    ///
    /// let searcher: Searcher = r#"{"name": "Markity", "age": 16}"#.parse()?;
    /// assert_eq!(searcher.query(&path!["age"]).get_i64(), 16);
    /// assert_eq!(searcher.query(&path![]).value_type(), Some(ValueType::Object));
    /// assert!(!searcher.query(&path!["age", 0]).exists());
    /// # Ok::<(), jsonsearcher::DecodeError>(())
    /// ```
    #[must_use]
    pub fn query(&self, path: &[Segment<'_>]) -> QueryResult<'_> {
        let mut current = &self.root;
        for (depth, segment) in path.iter().enumerate() {
            if let Some(next) = step(current, segment) {
                current = next;
            } else {
                tracing::trace!(
                    depth,
                    segment = ?segment,
                    found = %current.value_type(),
                    "Path does not resolve"
                );
                return QueryResult::missing();
            }
        }
        QueryResult::found(current)
    }
}

#[inline]
fn step<'v>(current: &'v JsonValue, segment: &Segment<'_>) -> Option<&'v JsonValue> {
    match (current, segment) {
        (JsonValue::Array(items), Segment::Index(idx)) => {
            usize::try_from(*idx).ok().and_then(|idx| items.get(idx))
        }
        (JsonValue::Object(object), Segment::Key(key)) => object.get(&**key),
        _ => None,
    }
}

impl From<Value> for Searcher {
    fn from(value: Value) -> Self {
        let root = match value {
            Value::Object(map) => {
                tracing::debug!(keys = map.len(), "Decoded JSON document");
                JsonValue::from(Value::Object(map))
            }
            other => {
                tracing::debug!(
                    discarded = %ValueType::from(&other),
                    "Non-object document root replaced with an empty object"
                );
                JsonValue::Object(Object::new())
            }
        };
        Self { root }
    }
}

impl FromStr for Searcher {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.as_bytes())
    }
}
