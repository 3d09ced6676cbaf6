//! # typedline
//!
//! Typed interactive prompts for CLI applications. Ask for a string, an
//! integer, a float or a boolean, and get back a value of that type: bad
//! input is reported and asked again, an empty line picks the default.
//!
//! ## Features
//!
//! ### Always available
//! - **Typed questions** - `read_string`, `read_int`, `read_float`, `read_bool`, with or without defaults
//! - **Boolean literals** - `y/yes/true/1` and friends, extensible for other languages
//! - **Prompt rendering** - configurable prefix, `[default]` display and float formatting
//! - **Pluggable line reader** - bring your own editor through [`utils::LineReader`]
//!
//! ("terminal" feature, default)
//! - **Reedline backend** - [`utils::ReedlineReader`] and [`Question::new`]
//!
//! ("config-file" feature, default)
//! - **Config loading** - `QuestionConfig::load` from TOML and `TYPEDLINE_*` variables
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! typedline = "0.1"
//! typedline = { version = "0.1", default-features = false }
//! ```
//!
//! ## Usage Examples
//!
//! ### Asking questions
//!
//! ```rust,no_run
//! # #[cfg(feature = "terminal")]
//! # {
//! use typedline::{Question, QuestionConfig};
//!
//! let mut question = Question::new(QuestionConfig::default())?;
//!
//! let name = question.read_string_default("Your name", "anonymous");
//! let age = question.read_int("Your age");
//! let ratio = question.read_float_default("Compression ratio", 0.75);
//! let proceed = question.read_bool("Proceed?", true);
//!
//! question.restore_terminal()?;
//! # }
//! # Ok::<(), typedline::QuestionError>(())
//! ```
//!
//! The prompts look like this:
//!
//! ```text
//!  + Your name [anonymous]:
//!  + Your age: abc
//!   "abc": value has to be an integer
//!  + Your age: 37
//!  + Compression ratio [0.75]:
//!  + Proceed? [Y/n]:
//! ```
//!
//! ### Other languages
//!
//! ```rust,no_run
//! # #[cfg(feature = "terminal")]
//! # {
//! use typedline::{Question, QuestionConfig};
//!
//! let config = QuestionConfig::default()
//!     .with_tokens("o", "n")
//!     .with_extra_bool("o", true)
//!     .with_extra_bool("oui", true)
//!     .with_extra_bool("non", false);
//!
//! let mut question = Question::new(config)?;
//! let proceed = question.read_bool("Continuer ?", false); // " + Continuer ? [o/N]: "
//! # }
//! # Ok::<(), typedline::QuestionError>(())
//! ```
//!
//! ## End of input
//!
//! When the user presses Ctrl-D the question ends without an answer and the
//! type's zero value is returned: `""`, `0`, `0.0` or `false`. This is not an
//! error.
//!
//! ## Terminal state
//!
//! Call [`Question::restore_terminal`] once when the interactive session is
//! over, on every exit path. Extra calls are harmless.
//!
//! ## Error Handling
//!
//! Building a [`Question`] fails when the configured true/false tokens are
//! not themselves boolean literals:
//!
//! ```rust
//! use typedline::{Question, QuestionConfig, QuestionError};
//! # use typedline::utils::{LineReader, LineSession, Reply};
//! # struct NoInput;
//! # impl LineSession for NoInput {
//! #     fn read(&mut self) -> std::io::Result<Reply> { Ok(Reply::NoAnswer) }
//! # }
//! # impl LineReader for NoInput {
//! #     fn open(&mut self, _prompt: &str) -> Box<dyn LineSession + '_> { Box::new(NoInput) }
//! #     fn restore_terminal(&self) -> std::io::Result<()> { Ok(()) }
//! # }
//!
//! let config = QuestionConfig::default().with_tokens("si", "no");
//!
//! match Question::with_io(config, NoInput, std::io::sink()) {
//!     Err(QuestionError::TrueToken(token)) => assert_eq!(token, "si"),
//!     _ => unreachable!(),
//! }
//! ```

pub mod config;
pub use config::{FloatFormat, QuestionConfig};

pub mod question;
pub use question::{Question, QuestionError};

pub mod utils;
