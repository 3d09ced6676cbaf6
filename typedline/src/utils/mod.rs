pub mod boolean;
pub use boolean::{BoolLiteral, BoolResolver, CanonicalLiterals, EnglishSynonyms, ExtraLiterals};

pub mod prompt;
pub use prompt::{MAX_FLOAT_PRECISION, bool_options, build_prompt, render_float};

pub mod sanitize;
pub use sanitize::{Answer, DesiredType, Rejection};

pub mod terminal;
pub use terminal::{LineReader, LineSession, Reply};

cfg_if::cfg_if! {
    if #[cfg(feature = "terminal")] {
        pub use terminal::ReedlineReader;
    }
}
