use std::borrow::Cow;

/// A single step of a query path.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Segment<'a> {
    /// A string key for object properties.
    Key(Cow<'a, str>),
    /// A numeric index for array elements. Negative indices never resolve.
    Index(i64),
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(value: &'a str) -> Self {
        Segment::Key(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Segment<'a> {
    fn from(value: &'a String) -> Self {
        Segment::Key(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Segment<'_> {
    fn from(value: String) -> Self {
        Segment::Key(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Segment<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Segment::Key(value)
    }
}

impl From<i64> for Segment<'_> {
    fn from(value: i64) -> Self {
        Segment::Index(value)
    }
}

impl From<i32> for Segment<'_> {
    fn from(value: i32) -> Self {
        Segment::Index(i64::from(value))
    }
}

impl From<usize> for Segment<'_> {
    fn from(value: usize) -> Self {
        // Indices past `i64::MAX` can not exist in memory anyway
        Segment::Index(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

/// Build a query path out of keys and indices.
///
/// ```rust
/// use jsonsearcher::{path, Searcher};
///
/// let searcher = Searcher::new(br#"{"friends": [{"name": "Jack"}]}"#)?;
/// let name = searcher.query(&path!["friends", 0, "name"]);
/// assert_eq!(name.get_str(), "Jack");
/// # Ok::<(), jsonsearcher::DecodeError>(())
/// ```
#[macro_export]
macro_rules! path {
    () => {{
        let path: [$crate::Segment<'static>; 0] = [];
        path
    }};
    ($($segment:expr),+ $(,)?) => {
        [$($crate::Segment::from($segment)),+]
    };
}
