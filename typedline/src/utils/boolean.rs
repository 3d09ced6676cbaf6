//! # Boolean Literals
//!
//! Recognises the strings a user may type to answer a yes/no question.
//!
//! Recognition is layered. Each layer is a [`BoolLiteral`] and the
//! [`BoolResolver`] asks them in order, keeping the first answer:
//!
//! 1. [`CanonicalLiterals`]: `1 t T TRUE true True` / `0 f F FALSE false False`
//! 2. [`EnglishSynonyms`]: `y Y yes YES Yes` / `n N no NO No`
//! 3. [`ExtraLiterals`]: a caller supplied map, for other languages
//!
//! Matching is exact. `"yEs"` is not a synonym, and keys of the extra map are
//! not case folded.
//!
//! ## Example
//! ```rust
//! use std::collections::HashMap;
//! use typedline::utils::BoolResolver;
//!
//! let resolver = BoolResolver::new(HashMap::from([
//!     ("oui".to_string(), true),
//!     ("non".to_string(), false),
//! ]));
//!
//! assert_eq!(resolver.resolve("Yes"), Some(true));
//! assert_eq!(resolver.resolve("oui"), Some(true));
//! assert_eq!(resolver.resolve("peut-être"), None);
//! ```
use std::collections::HashMap;

/// One layer of boolean recognition.
///
/// Returns `None` when the text is not a literal this layer knows about.
/// Any `Fn(&str) -> Option<bool>` is a layer too.
pub trait BoolLiteral {
    fn resolve(&self, text: &str) -> Option<bool>;
}

impl<F> BoolLiteral for F
where
    F: Fn(&str) -> Option<bool>,
{
    fn resolve(&self, text: &str) -> Option<bool> {
        self(text)
    }
}

/// The literals accepted by most boolean parsers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalLiterals;

impl BoolLiteral for CanonicalLiterals {
    fn resolve(&self, text: &str) -> Option<bool> {
        match text {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
            _ => None,
        }
    }
}

/// Short and long English answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishSynonyms;

impl BoolLiteral for EnglishSynonyms {
    fn resolve(&self, text: &str) -> Option<bool> {
        match text {
            "y" | "Y" | "yes" | "YES" | "Yes" => Some(true),
            "n" | "N" | "no" | "NO" | "No" => Some(false),
            _ => None,
        }
    }
}

/// Caller supplied literals, matched by exact key.
#[derive(Debug, Clone, Default)]
pub struct ExtraLiterals {
    literals: HashMap<String, bool>,
}

impl ExtraLiterals {
    pub fn new(literals: HashMap<String, bool>) -> Self {
        Self { literals }
    }
}

impl BoolLiteral for ExtraLiterals {
    fn resolve(&self, text: &str) -> Option<bool> {
        self.literals.get(text).copied()
    }
}

/// Ordered list of [`BoolLiteral`] layers.
pub struct BoolResolver {
    layers: Vec<Box<dyn BoolLiteral>>,
}

impl BoolResolver {
    /// Canonical literals, then English synonyms, then `extra`.
    pub fn new(extra: HashMap<String, bool>) -> Self {
        Self {
            layers: vec![
                Box::new(CanonicalLiterals),
                Box::new(EnglishSynonyms),
                Box::new(ExtraLiterals::new(extra)),
            ],
        }
    }

    /// Appends a layer, consulted after every existing one.
    pub fn push<L: BoolLiteral + 'static>(&mut self, layer: L) {
        self.layers.push(Box::new(layer));
    }

    /// First answer given by a layer, or `None` if no layer knows `text`.
    pub fn resolve(&self, text: &str) -> Option<bool> {
        self.layers.iter().find_map(|layer| layer.resolve(text))
    }
}

impl Default for BoolResolver {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

impl std::fmt::Debug for BoolResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoolResolver")
            .field("layers", &self.layers.len())
            .finish()
    }
}
