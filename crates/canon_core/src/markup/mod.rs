//! Restricted text-markup transformer.
//!
//! # Responsibility
//! - Convert a small fixed markdown subset (headings 1-3, bold, italic,
//!   link, image, one-line list items, blockquotes, trailing line break)
//!   into presentational markup.
//!
//! # Invariants
//! - Pure function of its input; never panics, for any string.
//! - Pass order is part of the contract and observable: bold before italic,
//!   inline spans before list/quote resolution. Re-applying the transform
//!   to its own output is NOT the identity.
//! - Each qualifying list line yields its own standalone `<ul>`.
//!
//! # Known limitations (by contract, not bugs)
//! - Stray single `*` characters unrelated to emphasis still pair up into
//!   italic spans, because the italic pass runs after bold has consumed the
//!   doubled delimiters.
//! - No HTML escaping is performed: markup-significant characters in the
//!   input pass through verbatim. Callers must treat the output as trusted
//!   markup and must not feed it attacker-controlled text.

mod render;
mod token;

use render::render_block;
use token::tokenize_line;

/// Transforms one stretch of restricted markup into presentational markup.
///
/// Empty input yields empty output. A single trailing newline becomes a
/// `<br/>`, and the result is trimmed of surrounding whitespace. Lines keep
/// their `\n` separators.
pub fn transform(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let (body, trailing_newline) = match text.strip_suffix('\n') {
        Some(stripped) => (stripped, true),
        None => (text, false),
    };

    let mut out = body
        .split('\n')
        .map(|line| render_block(&tokenize_line(line)))
        .collect::<Vec<_>>()
        .join("\n");
    if trailing_newline {
        out.push_str("<br/>");
    }
    out.trim().to_string()
}
