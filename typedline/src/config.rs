//! # Question Configuration
//!
//! Everything that shapes how a [`crate::Question`] looks and which literals
//! it accepts. A [`QuestionConfig`] is captured when the question is built;
//! changing a config afterwards does not affect questions already built.
//!
//! | Setting            | Default | Effect                                           |
//! |--------------------|---------|--------------------------------------------------|
//! | `prefix`           | `" + "` | placed before every prompt                       |
//! | `error_prefix`     | `"  "`  | placed before every diagnostic line              |
//! | `true_token`       | `"y"`   | shown for boolean defaults, must resolve to true |
//! | `false_token`      | `"n"`   | shown for boolean defaults, must resolve to false|
//! | `float_format`     | general | how a float default is rendered                  |
//! | `float_precision`  | `None`  | float default digits (max 767), `None` shortest  |
//! | `extra_bools`      | empty   | additional boolean literals                      |
//!
//! With the `config-file` feature the same settings can be read from a TOML
//! file and `TYPEDLINE_*` environment variables:
//!
//! ```toml
//! prefix = "> "
//! true_token = "o"
//! false_token = "n"
//! float_format = "fixed"
//! float_precision = 2
//!
//! [extra_bools]
//! o = true
//! oui = true
//! non = false
//! ```
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How a float default is rendered inside a prompt.
///
/// Only rendering is affected; answers are always parsed with the standard
/// float syntax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatFormat {
    /// `1234.50`
    Fixed,
    /// `1.23450e+03`
    Scientific,
    /// Fixed for moderate exponents, scientific otherwise.
    #[default]
    General,
}

/// Settings shared by every prompt of a [`crate::Question`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionConfig {
    pub prefix: String,
    pub error_prefix: String,
    pub true_token: String,
    pub false_token: String,
    pub float_format: FloatFormat,
    pub float_precision: Option<usize>,
    pub extra_bools: HashMap<String, bool>,
}

impl Default for QuestionConfig {
    fn default() -> Self {
        Self {
            prefix: " + ".to_string(),
            error_prefix: "  ".to_string(),
            true_token: "y".to_string(),
            false_token: "n".to_string(),
            float_format: FloatFormat::General,
            float_precision: None,
            extra_bools: HashMap::new(),
        }
    }
}

impl QuestionConfig {
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn with_error_prefix(mut self, error_prefix: &str) -> Self {
        self.error_prefix = error_prefix.to_string();
        self
    }

    /// Sets the tokens displayed for `true` and `false`.
    ///
    /// They are checked when the question is built, so a token that isn't a
    /// known literal needs a matching [`with_extra_bool`](Self::with_extra_bool).
    pub fn with_tokens(mut self, true_token: &str, false_token: &str) -> Self {
        self.true_token = true_token.to_string();
        self.false_token = false_token.to_string();
        self
    }

    pub fn with_float_format(mut self, format: FloatFormat, precision: Option<usize>) -> Self {
        self.float_format = format;
        self.float_precision = precision;
        self
    }

    /// Registers an extra boolean literal.
    pub fn with_extra_bool(mut self, literal: &str, value: bool) -> Self {
        self.extra_bools.insert(literal.to_string(), value);
        self
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "config-file")] {
        use figment::{
            providers::{Env, Format, Serialized, Toml},
            Figment,
        };
        use std::path::Path;

        /// Environment variable prefix read by [`QuestionConfig::load`].
        pub const ENV_PREFIX: &str = "TYPEDLINE_";

        impl QuestionConfig {
            /// Loads the configuration from all sources.
            ///
            /// Priority (highest to lowest):
            /// 1. `TYPEDLINE_*` environment variables
            /// 2. The TOML file at `path`, if given
            /// 3. Default values
            pub fn load(path: Option<&Path>) -> Result<Self, Box<figment::Error>> {
                let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

                if let Some(path) = path {
                    figment = figment.merge(Toml::file(path));
                }

                figment
                    .merge(Env::prefixed(ENV_PREFIX))
                    .extract()
                    .map_err(Box::new)
            }
        }
    }
}
