//! # jsonsearcher
//!
//! Typed lookups into schema-less JSON documents.
//!
//! A [`Searcher`] decodes a document once and then answers any number of
//! independent queries. A query is a sequence of object keys and array indices;
//! each one produces a [`QueryResult`] that tells whether the path resolved and,
//! if so, what type of value it points to.
//!
//! ```rust
//! use jsonsearcher::{path, Searcher, ValueType};
//!
//! let searcher = Searcher::new(br#"{"name": "Markity", "friends": [{"name": "Jack"}]}"#)?;
//!
//! let friend = searcher.query(&path!["friends", 0, "name"]);
//! assert!(friend.exists());
//! assert_eq!(friend.value_type(), Some(ValueType::String));
//! assert_eq!(friend.get_str(), "Jack");
//!
//! assert!(!searcher.query(&path!["friends", 1]).exists());
//! assert!(!searcher.query(&path!["friends", -1]).exists());
//! # Ok::<(), jsonsearcher::DecodeError>(())
//! ```
//!
//! Missing data is an ordinary outcome reported through [`QueryResult::exists`].
//! Asking a result for a value of the wrong type is a programming error: the
//! `get_*` accessors panic, while the `try_get_*` accessors return [`TypeMismatch`].
//!
//! The document root is always an object. A document whose top-level value is
//! not an object, including `null`, is treated as an empty object.
mod error;
mod result;
mod searcher;
mod segment;
mod value;

pub use error::{DecodeError, DecodeErrorKind, TypeMismatch};
pub use result::QueryResult;
pub use searcher::Searcher;
pub use segment::Segment;
pub use value::{JsonValue, Object, ValueType};
