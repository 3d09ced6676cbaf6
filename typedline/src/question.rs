//! # Typed Questions
//!
//! [`Question`] asks for a value of a given type and keeps asking until it
//! gets one. Each `read_*` call:
//!
//! 1. renders the prompt once (prefix, question, `[default]`, separator)
//! 2. reads a line
//! 3. returns the type's zero value if the user ended input (Ctrl-D)
//! 4. returns the default if the line is empty and a default was given
//! 5. returns the parsed line, or prints a diagnostic and goes back to 2
//!
//! Bad input never ends the loop, and the caller never sees a parse error.
//!
//! ## Example
//! ```rust,no_run
//! # #[cfg(feature = "terminal")]
//! # {
//! use typedline::{Question, QuestionConfig};
//!
//! let mut question = Question::new(QuestionConfig::default())?;
//!
//! let name = question.read_string("Your name");
//! let port = question.read_int_default("Port", 8080);
//! let go = question.read_bool("Continue?", true);
//!
//! question.restore_terminal()?;
//! # }
//! # Ok::<(), typedline::QuestionError>(())
//! ```
use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::QuestionConfig;
use crate::utils::{
    Answer, BoolResolver, LineReader, Reply, bool_options, build_prompt, render_float,
};

/// Errors raised by a [`Question`] outside of the answer loop.
#[derive(Debug, Error)]
pub enum QuestionError {
    #[error("the string {0:?} does not represent a boolean 'true'")]
    TrueToken(String),

    #[error("the string {0:?} does not represent a boolean 'false'")]
    FalseToken(String),

    #[error("failed to restore terminal settings: {0}")]
    Restore(#[from] io::Error),
}

/// Asks typed questions through a [`LineReader`], writing diagnostics to `W`.
pub struct Question<R, W> {
    config: QuestionConfig,
    resolver: BoolResolver,
    true_token: String,
    false_token: String,
    reader: R,
    errors: W,
}

cfg_if::cfg_if! {
    if #[cfg(feature = "terminal")] {
        use crate::utils::ReedlineReader;

        impl Question<ReedlineReader, io::Stderr> {
            /// A question on the terminal, with diagnostics on stderr.
            pub fn new(config: QuestionConfig) -> Result<Self, QuestionError> {
                Self::with_io(config, ReedlineReader, io::stderr())
            }
        }
    }
}

impl<R: LineReader, W: Write> Question<R, W> {
    /// Builds a question on top of any reader and diagnostic sink.
    ///
    /// Fails if the configured true/false tokens are not themselves read as
    /// `true` and `false`.
    pub fn with_io(config: QuestionConfig, reader: R, errors: W) -> Result<Self, QuestionError> {
        let resolver = BoolResolver::new(config.extra_bools.clone());

        if resolver.resolve(&config.true_token) != Some(true) {
            return Err(QuestionError::TrueToken(config.true_token));
        }
        if resolver.resolve(&config.false_token) != Some(false) {
            return Err(QuestionError::FalseToken(config.false_token));
        }

        Ok(Self {
            true_token: config.true_token.to_lowercase(),
            false_token: config.false_token.to_lowercase(),
            config,
            resolver,
            reader,
            errors,
        })
    }

    /// Configuration the question was built with.
    pub fn config(&self) -> &QuestionConfig {
        &self.config
    }

    /// Lower-cased token displayed for `true`.
    pub fn true_token(&self) -> &str {
        &self.true_token
    }

    /// Lower-cased token displayed for `false`.
    pub fn false_token(&self) -> &str {
        &self.false_token
    }

    /// The line reader prompts are shown through.
    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Where diagnostics are written.
    pub fn errors(&self) -> &W {
        &self.errors
    }

    /// Restores the terminal settings. Safe to call more than once.
    pub fn restore_terminal(&self) -> Result<(), QuestionError> {
        self.reader.restore_terminal()?;
        Ok(())
    }

    /// Reads any line. An empty line is a valid answer.
    pub fn read_string(&mut self, question: &str) -> String {
        self.ask(question, None)
    }

    /// Reads any line, or `default` if the line is empty.
    pub fn read_string_default(&mut self, question: &str, default: &str) -> String {
        self.ask(question, Some((default.to_string(), default.to_string())))
    }

    /// Reads an integer. An empty line is rejected like any other bad input.
    pub fn read_int(&mut self, question: &str) -> i64 {
        self.ask(question, None)
    }

    /// Reads an integer, or `default` if the line is empty.
    pub fn read_int_default(&mut self, question: &str, default: i64) -> i64 {
        self.ask(question, Some((default, default.to_string())))
    }

    /// Reads a float. An empty line is rejected like any other bad input.
    pub fn read_float(&mut self, question: &str) -> f64 {
        self.ask(question, None)
    }

    /// Reads a float, or `default` if the line is empty.
    ///
    /// The default is shown using the configured float format and precision.
    pub fn read_float_default(&mut self, question: &str, default: f64) -> f64 {
        let shown = render_float(
            default,
            self.config.float_format,
            self.config.float_precision,
        );
        self.ask(question, Some((default, shown)))
    }

    /// Reads a boolean, or `default` if the line is empty.
    ///
    /// The options are shown as `Y/n` or `y/N`, built from the configured
    /// tokens with the default side upper-cased.
    pub fn read_bool(&mut self, question: &str, default: bool) -> bool {
        let shown = bool_options(&self.true_token, &self.false_token, default);
        self.ask(question, Some((default, shown)))
    }

    /// The answer loop shared by every `read_*` method.
    ///
    /// `default` carries the value returned on an empty line and its text as
    /// shown in the prompt.
    fn ask<T: Answer>(&mut self, question: &str, mut default: Option<(T, String)>) -> T {
        let prompt = build_prompt(
            &self.config.prefix,
            question,
            default.as_ref().map(|(_, shown)| shown.as_str()),
        );
        debug!(%prompt, kind = %T::KIND, "asking");

        let mut session = self.reader.open(&prompt);

        loop {
            let input = match session.read() {
                Ok(Reply::Answered(input)) => input,
                Ok(Reply::NoAnswer) => {
                    debug!(kind = %T::KIND, "input ended without an answer");
                    return T::default();
                }
                Err(e) => {
                    error!(error = %e, "failed to read from the terminal");
                    return T::default();
                }
            };

            if input.is_empty() {
                if let Some((value, shown)) = default.take() {
                    debug!(default = %shown, "empty answer, using the default");
                    return value;
                }
            }

            match T::sanitize(&input, &self.resolver) {
                Ok(value) => return value,
                Err(rejection) => {
                    debug!(%rejection, "answer rejected");
                    let prefix = &self.config.error_prefix;
                    if let Err(e) = writeln!(self.errors, "{prefix}{rejection}") {
                        warn!(error = %e, "failed to write diagnostic");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FloatFormat;
    use crate::utils::{LineSession, MAX_FLOAT_PRECISION};
    use std::collections::VecDeque;

    /// Replays canned replies and records what was asked.
    #[derive(Default)]
    struct Scripted {
        replies: VecDeque<io::Result<Reply>>,
        prompts: Vec<String>,
        reads: usize,
    }

    impl Scripted {
        fn lines(lines: &[&str]) -> Self {
            Self {
                replies: lines
                    .iter()
                    .map(|l| Ok(Reply::Answered(l.to_string())))
                    .collect(),
                ..Default::default()
            }
        }

        fn then_eof(mut self) -> Self {
            self.replies.push_back(Ok(Reply::NoAnswer));
            self
        }
    }

    struct ScriptedSession<'a>(&'a mut Scripted);

    impl LineSession for ScriptedSession<'_> {
        fn read(&mut self) -> io::Result<Reply> {
            self.0.reads += 1;
            self.0
                .replies
                .pop_front()
                .expect("read past the end of the script")
        }
    }

    impl LineReader for Scripted {
        fn open(&mut self, prompt: &str) -> Box<dyn LineSession + '_> {
            self.prompts.push(prompt.to_string());
            Box::new(ScriptedSession(self))
        }

        fn restore_terminal(&self) -> io::Result<()> {
            Ok(())
        }
    }

    fn question(reader: Scripted) -> Question<Scripted, Vec<u8>> {
        Question::with_io(QuestionConfig::default(), reader, Vec::new()).unwrap()
    }

    fn diagnostics(q: &Question<Scripted, Vec<u8>>) -> Vec<String> {
        String::from_utf8(q.errors().clone())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_new_rejects_unknown_true_token() {
        let config = QuestionConfig::default().with_tokens("si", "n");
        let err = Question::with_io(config, Scripted::default(), Vec::new())
            .err()
            .unwrap();
        assert!(matches!(err, QuestionError::TrueToken(ref t) if t == "si"));
        assert_eq!(
            err.to_string(),
            "the string \"si\" does not represent a boolean 'true'"
        );
    }

    #[test]
    fn test_new_rejects_swapped_tokens() {
        let config = QuestionConfig::default().with_tokens("n", "y");
        let err = Question::with_io(config, Scripted::default(), Vec::new())
            .err()
            .unwrap();
        assert!(matches!(err, QuestionError::TrueToken(_)));

        let config = QuestionConfig::default().with_tokens("y", "yes");
        let err = Question::with_io(config, Scripted::default(), Vec::new())
            .err()
            .unwrap();
        assert!(matches!(err, QuestionError::FalseToken(ref t) if t == "yes"));
    }

    #[test]
    fn test_new_accepts_extra_tokens_and_lowercases() {
        let config = QuestionConfig::default()
            .with_tokens("S", "N")
            .with_extra_bool("S", true);
        let q = Question::with_io(config, Scripted::default(), Vec::new()).unwrap();
        assert_eq!(q.true_token(), "s");
        assert_eq!(q.false_token(), "n");
        // the config keeps the tokens as given
        assert_eq!(q.config().true_token, "S");
        assert_eq!(q.config().false_token, "N");
    }

    #[test]
    fn test_read_string() {
        let mut q = question(Scripted::lines(&["Ada"]));
        assert_eq!(q.read_string("Name"), "Ada");
        assert_eq!(q.reader().prompts, vec![" + Name: "]);
    }

    #[test]
    fn test_read_string_empty_without_default() {
        let mut q = question(Scripted::lines(&[""]));
        assert_eq!(q.read_string("Name"), "");
        assert_eq!(q.reader().reads, 1);
    }

    #[test]
    fn test_read_string_default() {
        let mut q = question(Scripted::lines(&[""]));
        assert_eq!(q.read_string_default("Name", "Bob"), "Bob");
        assert_eq!(q.reader().prompts, vec![" + Name [Bob]: "]);

        let mut q = question(Scripted::lines(&["Ada"]));
        assert_eq!(q.read_string_default("Name", "Bob"), "Ada");
    }

    #[test]
    fn test_read_int_retries_until_valid() {
        let mut q = question(Scripted::lines(&["abc", "42"]));
        assert_eq!(q.read_int("Age"), 42);
        assert_eq!(q.reader().reads, 2);
        assert_eq!(
            diagnostics(&q),
            vec!["  \"abc\": value has to be an integer"]
        );
        // rendered once for the whole loop
        assert_eq!(q.reader().prompts, vec![" + Age: "]);
    }

    #[test]
    fn test_read_int_empty_without_default_is_rejected() {
        let mut q = question(Scripted::lines(&["", "7"]));
        assert_eq!(q.read_int("Age"), 7);
        assert_eq!(diagnostics(&q), vec!["  \"\": value has to be an integer"]);
    }

    #[test]
    fn test_read_int_default() {
        let mut q = question(Scripted::lines(&[""]));
        assert_eq!(q.read_int_default("Port", 8080), 8080);
        assert_eq!(q.reader().prompts, vec![" + Port [8080]: "]);
        assert!(diagnostics(&q).is_empty());
    }

    #[test]
    fn test_read_float() {
        let mut q = question(Scripted::lines(&["1,5", "1.5"]));
        assert_eq!(q.read_float("Ratio"), 1.5);
        assert_eq!(diagnostics(&q), vec!["  \"1,5\": value has to be a float"]);
    }

    #[test]
    fn test_read_float_default_rendering() {
        let mut q = question(Scripted::lines(&[""]));
        assert_eq!(q.read_float_default("Ratio", 0.25), 0.25);
        assert_eq!(q.reader().prompts, vec![" + Ratio [0.25]: "]);

        let config = QuestionConfig::default().with_float_format(FloatFormat::Fixed, Some(3));
        let mut q = Question::with_io(config, Scripted::lines(&["", "2e3"]), Vec::new()).unwrap();
        assert_eq!(q.read_float_default("Ratio", 0.25), 0.25);
        // parsing ignores the rendering format
        assert_eq!(q.read_float_default("Ratio", 0.25), 2000.0);
        assert_eq!(
            q.reader().prompts,
            vec![" + Ratio [0.250]: ", " + Ratio [0.250]: "]
        );
    }

    #[test]
    fn test_read_float_default_with_huge_precision() {
        // as it would arrive from a config file, bypassing the builders
        let config = QuestionConfig {
            float_format: FloatFormat::Fixed,
            float_precision: Some(usize::MAX),
            ..QuestionConfig::default()
        };
        let mut q = Question::with_io(config, Scripted::lines(&[""]), Vec::new()).unwrap();
        assert_eq!(q.read_float_default("Ratio", 0.5), 0.5);

        let shown = format!("0.5{}", "0".repeat(MAX_FLOAT_PRECISION - 1));
        assert_eq!(q.reader().prompts, vec![format!(" + Ratio [{shown}]: ")]);
    }

    #[test]
    fn test_read_bool() {
        let mut q = question(Scripted::lines(&["", "N", "maybe", "yes"]));
        assert!(q.read_bool("Continue?", true));
        assert!(!q.read_bool("Continue?", true));
        assert!(q.read_bool("Delete", false));
        assert_eq!(
            q.reader().prompts,
            vec![
                " + Continue? [Y/n]: ",
                " + Continue? [Y/n]: ",
                " + Delete [y/N]: "
            ]
        );
        assert_eq!(diagnostics(&q), vec!["  \"maybe\": does not represent a boolean"]);
    }

    #[test]
    fn test_read_bool_empty_returns_false_default() {
        let mut q = question(Scripted::lines(&[""]));
        assert!(!q.read_bool("Delete", false));
    }

    #[test]
    fn test_end_of_input_returns_zero_values() {
        let mut q = question(
            Scripted::default()
                .then_eof()
                .then_eof()
                .then_eof()
                .then_eof(),
        );
        assert_eq!(q.read_string_default("Name", "Bob"), "");
        assert_eq!(q.read_int_default("Port", 8080), 0);
        assert_eq!(q.read_float_default("Ratio", 0.5), 0.0);
        assert!(!q.read_bool("Continue?", true));
        assert_eq!(q.reader().reads, 4);
        assert!(diagnostics(&q).is_empty());
    }

    #[test]
    fn test_end_of_input_after_retries_stops_reading() {
        let mut q = question(Scripted::lines(&["x", "y"]).then_eof());
        assert_eq!(q.read_int("Age"), 0);
        assert_eq!(q.reader().reads, 3);
        assert_eq!(diagnostics(&q).len(), 2);
    }

    #[test]
    fn test_read_failure_is_treated_as_no_answer() {
        let mut reader = Scripted::default();
        reader.replies.push_back(Err(io::Error::other("tty gone")));
        let mut q = question(reader);
        assert_eq!(q.read_int("Age"), 0);
        assert_eq!(q.reader().reads, 1);
    }

    #[test]
    fn test_custom_prefixes() {
        let config = QuestionConfig::default()
            .with_prefix("> ")
            .with_error_prefix("!! ");
        let mut q = Question::with_io(config, Scripted::lines(&["x", "3"]), Vec::new()).unwrap();
        assert_eq!(q.read_int("How many?"), 3);
        assert_eq!(q.reader().prompts, vec!["> How many? "]);
        assert_eq!(diagnostics(&q), vec!["!! \"x\": value has to be an integer"]);
    }

    #[test]
    fn test_extra_bools_are_accepted_answers() {
        let config = QuestionConfig::default().with_extra_bool("oui", true);
        let mut q = Question::with_io(config, Scripted::lines(&["oui"]), Vec::new()).unwrap();
        assert!(q.read_bool("Continuer?", false));
    }

    #[test]
    fn test_restore_terminal_twice() {
        let q = question(Scripted::default());
        assert!(q.restore_terminal().is_ok());
        assert!(q.restore_terminal().is_ok());
    }
}
