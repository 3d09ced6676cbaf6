//! # Prompt Rendering
//!
//! Builds the text shown in front of the cursor:
//!
//! ```text
//! <prefix><question>[ [<default>]]<separator>
//! ```
//!
//! The separator is a single space when the text so far ends with `?`, and
//! `": "` otherwise. Defaults are shown verbatim, so callers render them
//! first with [`bool_options`] or [`render_float`].
//!
//! ```rust
//! use typedline::utils::build_prompt;
//!
//! assert_eq!(build_prompt(" + ", "Continue?", None), " + Continue? ");
//! assert_eq!(build_prompt(" + ", "Name", None), " + Name: ");
//! assert_eq!(build_prompt(" + ", "Port", Some("8080")), " + Port [8080]: ");
//! ```
use crate::config::FloatFormat;

/// Renders a prompt from its prefix, question text and optional default.
pub fn build_prompt(prefix: &str, question: &str, default: Option<&str>) -> String {
    let mut prompt = format!("{prefix}{question}");

    if let Some(default) = default {
        prompt.push_str(" [");
        prompt.push_str(default);
        prompt.push(']');
    }

    if prompt.ends_with('?') {
        prompt.push(' ');
    } else {
        prompt.push_str(": ");
    }

    prompt
}

/// Renders the options of a boolean question, with the default upper-cased.
///
/// ```rust
/// use typedline::utils::bool_options;
///
/// assert_eq!(bool_options("y", "n", true), "Y/n");
/// assert_eq!(bool_options("y", "n", false), "y/N");
/// ```
pub fn bool_options(true_token: &str, false_token: &str, default: bool) -> String {
    if default {
        format!("{}/{}", true_token.to_uppercase(), false_token)
    } else {
        format!("{}/{}", true_token, false_token.to_uppercase())
    }
}

/// Renders a float default.
///
/// `precision` is the number of decimals for [`FloatFormat::Fixed`] and
/// [`FloatFormat::Scientific`], and the number of significant digits for
/// [`FloatFormat::General`]. `None` picks the shortest text that reads back
/// as the same value. Precisions above [`MAX_FLOAT_PRECISION`] are capped.
///
/// ```rust
/// use typedline::FloatFormat;
/// use typedline::utils::render_float;
///
/// assert_eq!(render_float(2.5, FloatFormat::General, None), "2.5");
/// assert_eq!(render_float(1.5e6, FloatFormat::General, None), "1.5e+06");
/// assert_eq!(render_float(3.14159, FloatFormat::Fixed, Some(2)), "3.14");
/// assert_eq!(render_float(1234.5, FloatFormat::Scientific, Some(2)), "1.23e+03");
/// ```
pub fn render_float(value: f64, format: FloatFormat, precision: Option<usize>) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let precision = precision.map(|p| p.min(MAX_FLOAT_PRECISION));

    match format {
        FloatFormat::Fixed => match precision {
            Some(p) => format!("{:.*}", p, value),
            None => value.to_string(),
        },
        FloatFormat::Scientific => {
            let raw = match precision {
                Some(p) => format!("{:.*e}", p, value),
                None => format!("{:e}", value),
            };
            let (mantissa, exp) = split_exponent(&raw);
            with_exponent(mantissa, exp)
        }
        FloatFormat::General => render_general(value, precision),
    }
}

/// Largest precision [`render_float`] honours. Enough digits to write any
/// `f64` exactly.
pub const MAX_FLOAT_PRECISION: usize = 767;

/// Shortest general rendering switches to scientific from this exponent on.
const SHORTEST_GENERAL_LIMIT: i32 = 6;

fn render_general(value: f64, precision: Option<usize>) -> String {
    if value == 0.0 {
        return value.to_string();
    }

    let (raw, limit) = match precision {
        Some(p) => {
            let digits = p.max(1);
            (
                format!("{:.*e}", digits - 1, value),
                i32::try_from(digits).unwrap_or(i32::MAX),
            )
        }
        None => (format!("{:e}", value), SHORTEST_GENERAL_LIMIT),
    };
    let (mantissa, exp) = split_exponent(&raw);

    if exp < -4 || exp >= limit {
        return with_exponent(trim_zeros(mantissa), exp);
    }

    match precision {
        Some(_) => {
            // exp < limit here, so this is at least 0
            let decimals = usize::try_from(limit - 1 - exp).unwrap_or(0);
            trim_zeros(&format!("{:.*}", decimals, value)).to_string()
        }
        None => value.to_string(),
    }
}

/// Splits Rust's `LowerExp` output (`1.5e6`) into mantissa and exponent.
fn split_exponent(raw: &str) -> (&str, i32) {
    match raw.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or_default()),
        None => (raw, 0),
    }
}

/// `1.5`, `6` -> `1.5e+06`
fn with_exponent(mantissa: &str, exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.abs())
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
