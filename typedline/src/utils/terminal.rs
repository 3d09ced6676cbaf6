//! # Terminal Line Reading
//!
//! The prompt layer does not drive the terminal itself. It needs exactly two
//! things from a line editor, described by [`LineReader`]:
//!
//! - open a session showing a prompt, and read lines from it
//! - restore the terminal settings when the application is done
//!
//! A read ends in one of two ways, see [`Reply`]: the user submitted a line
//! (possibly empty), or the user ended input without answering (Ctrl-D).
//!
//! With the `terminal` feature (on by default) [`ReedlineReader`] provides
//! both on top of [`reedline`](https://docs.rs/reedline). Without it, plug in
//! your own implementation:
//!
//! ```rust
//! use std::io;
//! use typedline::utils::{LineReader, LineSession, Reply};
//!
//! /// Answers every prompt with the same line.
//! struct Always(&'static str);
//!
//! impl LineSession for Always {
//!     fn read(&mut self) -> io::Result<Reply> {
//!         Ok(Reply::Answered(self.0.to_string()))
//!     }
//! }
//!
//! impl LineReader for Always {
//!     fn open(&mut self, _prompt: &str) -> Box<dyn LineSession + '_> {
//!         Box::new(Always(self.0))
//!     }
//!
//!     fn restore_terminal(&self) -> io::Result<()> {
//!         Ok(())
//!     }
//! }
//! ```
use std::io;

/// Outcome of a single read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A submitted line, without its line terminator.
    Answered(String),
    /// Input ended before a line was submitted.
    NoAnswer,
}

/// A prompt shown to the user, read from until the caller is satisfied.
pub trait LineSession {
    fn read(&mut self) -> io::Result<Reply>;
}

/// A line editor able to show prompts.
pub trait LineReader {
    /// Opens a session that shows `prompt` on every read and keeps no history.
    fn open(&mut self, prompt: &str) -> Box<dyn LineSession + '_>;

    /// Returns the terminal to the state it had before raw mode.
    ///
    /// Calling it more than once is harmless.
    fn restore_terminal(&self) -> io::Result<()>;
}

cfg_if::cfg_if! {
    if #[cfg(feature = "terminal")] {
        use std::borrow::Cow;

        use reedline::{Prompt, PromptEditMode, PromptHistorySearch, Reedline, Signal};
        use tracing::warn;

        /// [`LineReader`] backed by a [`Reedline`] editor.
        ///
        /// Every session gets a fresh editor whose history is emptied after each
        /// read, so a rejected answer can't be recalled with the arrow keys.
        ///
        /// Ctrl-C is read as [`Reply::NoAnswer`], like Ctrl-D. The editor holds
        /// the terminal in raw mode, so Ctrl-C never reaches the process as a
        /// signal and is the only way out of the loop besides Ctrl-D.
        #[derive(Debug, Default, Clone, Copy)]
        pub struct ReedlineReader;

        impl LineReader for ReedlineReader {
            fn open(&mut self, prompt: &str) -> Box<dyn LineSession + '_> {
                Box::new(ReedlineSession {
                    editor: Reedline::create(),
                    prompt: FixedPrompt(prompt.to_string()),
                })
            }

            fn restore_terminal(&self) -> io::Result<()> {
                crossterm::terminal::disable_raw_mode()
            }
        }

        struct ReedlineSession {
            editor: Reedline,
            prompt: FixedPrompt,
        }

        impl LineSession for ReedlineSession {
            fn read(&mut self) -> io::Result<Reply> {
                let signal = self.editor.read_line(&self.prompt);
                forget_history(&mut self.editor);
                Ok(reply_from(signal?))
            }
        }

        fn reply_from(signal: Signal) -> Reply {
            match signal {
                Signal::Success(line) => Reply::Answered(line),
                Signal::CtrlD => Reply::NoAnswer,
                Signal::CtrlC => Reply::NoAnswer,
            }
        }

        /// Drops whatever the editor saved on submission.
        fn forget_history(editor: &mut Reedline) {
            if let Err(e) = editor.history_mut().clear() {
                warn!(error = %e, "failed to clear prompt history");
            }
        }

        /// Already rendered prompt, shown as is with no indicator.
        struct FixedPrompt(String);

        impl Prompt for FixedPrompt {
            fn render_prompt_left(&self) -> Cow<'_, str> {
                Cow::Borrowed(&self.0)
            }

            fn render_prompt_right(&self) -> Cow<'_, str> {
                Cow::Borrowed("")
            }

            fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
                Cow::Borrowed("")
            }

            fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
                Cow::Borrowed("")
            }

            fn render_prompt_history_search_indicator(
                &self,
                _history_search: PromptHistorySearch,
            ) -> Cow<'_, str> {
                Cow::Borrowed("")
            }
        }
    }
}
