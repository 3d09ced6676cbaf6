//! # Answer Sanitization
//!
//! Turns the raw text of an answer into a typed value. Every type a
//! [`crate::Question`] can ask for implements [`Answer`], which pairs the
//! parse step with the [`DesiredType`] used to word the diagnostic when the
//! parse fails.
//!
//! ## Rules
//! - `String` accepts any input, including the empty string.
//! - `i64` accepts an optionally signed decimal integer, nothing around it.
//! - `f64` accepts decimal or scientific notation (`2.5`, `-1e3`, `inf`).
//! - `bool` goes through the layered [`BoolResolver`].
//!
//! Input is never trimmed: `" 42"` is not an integer.
//!
//! ## Example
//! ```rust
//! use typedline::utils::{Answer, BoolResolver};
//!
//! let resolver = BoolResolver::default();
//!
//! assert_eq!(i64::sanitize("42", &resolver), Ok(42));
//! assert!(i64::sanitize("abc", &resolver).is_err());
//! assert_eq!(bool::sanitize("Yes", &resolver), Ok(true));
//! ```
use std::{error::Error, fmt::Display};

use crate::utils::boolean::BoolResolver;

/// The kind of value a typed reader is waiting for.
///
/// Its [`Display`] form is the name used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredType {
    String,
    Int,
    Float,
    Bool,
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Int => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Bool => write!(f, "boolean"),
        }
    }
}

/// An answer that could not be converted to the [`DesiredType`].
///
/// Displays as the diagnostic line shown to the user, without the
/// configured error prefix:
///
/// - `"abc": value has to be an integer`
/// - `"1,5": value has to be a float`
/// - `"maybe": does not represent a boolean`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub input: String,
    pub expected: DesiredType,
}

impl Rejection {
    pub fn new(input: &str, expected: DesiredType) -> Self {
        Self {
            input: input.to_string(),
            expected,
        }
    }
}

impl Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.expected {
            DesiredType::Bool => write!(f, "{:?}: does not represent a boolean", self.input),
            DesiredType::Int => write!(f, "{:?}: value has to be an integer", self.input),
            other => write!(f, "{:?}: value has to be a {}", self.input, other),
        }
    }
}

impl Error for Rejection {}

/// Parses `$input` as `$t`, mapping any parse error to a [`Rejection`]
/// for `$kind`.
macro_rules! check_type {
    ($input:expr, $t:ty, $kind:expr) => {
        match $input.parse::<$t>() {
            Ok(value) => Ok(value),
            Err(_) => Err(Rejection::new($input, $kind)),
        }
    };
}

/// A value that a typed reader can produce from a raw line.
///
/// `Default` supplies the value returned when the user ends input without
/// answering.
pub trait Answer: Sized + Default {
    /// Kind reported in diagnostics.
    const KIND: DesiredType;

    /// Converts the raw answer, or explains why it can't.
    fn sanitize(input: &str, resolver: &BoolResolver) -> Result<Self, Rejection>;
}

impl Answer for String {
    const KIND: DesiredType = DesiredType::String;

    fn sanitize(input: &str, _resolver: &BoolResolver) -> Result<Self, Rejection> {
        Ok(input.to_string())
    }
}

impl Answer for i64 {
    const KIND: DesiredType = DesiredType::Int;

    fn sanitize(input: &str, _resolver: &BoolResolver) -> Result<Self, Rejection> {
        check_type!(input, i64, Self::KIND)
    }
}

impl Answer for f64 {
    const KIND: DesiredType = DesiredType::Float;

    fn sanitize(input: &str, _resolver: &BoolResolver) -> Result<Self, Rejection> {
        check_type!(input, f64, Self::KIND)
    }
}

impl Answer for bool {
    const KIND: DesiredType = DesiredType::Bool;

    fn sanitize(input: &str, resolver: &BoolResolver) -> Result<Self, Rejection> {
        resolver
            .resolve(input)
            .ok_or_else(|| Rejection::new(input, Self::KIND))
    }
}
