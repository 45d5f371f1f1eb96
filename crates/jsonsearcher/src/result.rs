use crate::{error::TypeMismatch, JsonValue, Object, ValueType};

static MISSING: JsonValue = JsonValue::Null;

/// The outcome of a single [`Searcher::query`](crate::Searcher::query) call.
///
/// Check [`exists`](Self::exists) and [`value_type`](Self::value_type) before
/// calling a `get_*` accessor: accessors panic when the type does not match.
/// The `try_get_*` family reports the same condition as [`TypeMismatch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryResult<'a> {
    value: Option<&'a JsonValue>,
}

macro_rules! accessors {
    ($( $(#[$meta:meta])* $get:ident, $try_get:ident, $as:ident -> $ty:ty, $expected:expr; )+) => {
        $(
            $(#[$meta])*
            ///
            /// # Panics
            ///
            /// If the result does not exist or holds a value of another type.
            #[must_use]
            #[track_caller]
            pub fn $get(&self) -> $ty {
                match self.$try_get() {
                    Ok(value) => value,
                    Err(error) => panic!("{error}"),
                }
            }

            /// Like the panicking accessor of the same name, reporting a type mismatch as an error.
            ///
            /// # Errors
            ///
            /// If the result does not exist or holds a value of another type.
            pub fn $try_get(&self) -> Result<$ty, TypeMismatch> {
                self.value
                    .and_then(JsonValue::$as)
                    .ok_or_else(|| self.mismatch($expected))
            }
        )+
    };
}

impl<'a> QueryResult<'a> {
    pub(crate) fn found(value: &'a JsonValue) -> Self {
        Self { value: Some(value) }
    }

    pub(crate) fn missing() -> Self {
        Self { value: None }
    }

    /// Whether the whole path resolved.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.value.is_some()
    }

    /// Type of the resolved value, `None` if nothing was found.
    #[must_use]
    pub fn value_type(&self) -> Option<ValueType> {
        self.value.map(JsonValue::value_type)
    }

    /// The resolved value. A missing result yields [`JsonValue::Null`], use
    /// [`exists`](Self::exists) to tell it apart from an actual `null`.
    #[must_use]
    pub fn value(&self) -> &'a JsonValue {
        self.value.unwrap_or(&MISSING)
    }

    fn mismatch(&self, expected: ValueType) -> TypeMismatch {
        TypeMismatch {
            expected,
            found: self.value_type(),
        }
    }

    accessors! {
        /// The number truncated towards zero, saturating at the `i64` bounds.
        get_i64, try_get_i64, as_i64 -> i64, ValueType::Number;
        /// The number truncated towards zero, saturating at the `u64` bounds.
        get_u64, try_get_u64, as_u64 -> u64, ValueType::Number;
        get_f64, try_get_f64, as_f64 -> f64, ValueType::Number;
        get_bool, try_get_bool, as_bool -> bool, ValueType::Bool;
        get_str, try_get_str, as_str -> &'a str, ValueType::String;
        get_object, try_get_object, as_object -> &'a Object, ValueType::Object;
        get_array, try_get_array, as_array -> &'a [JsonValue], ValueType::Array;
    }
}
