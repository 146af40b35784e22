//! Formatting utilities for CLI output. Widths are computed on display
//! columns (Korean text is double-width) with ANSI escapes stripped.

use crate::utils::colors::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Terminal column count of a string, ignoring embedded color codes.
pub fn display_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Left-align to `width` display columns. Strings already wider than
/// `width` are returned untouched.
pub fn pad_display(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}

/// Right-align to `width` display columns.
pub fn pad_display_left(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - current), s)
    }
}

/// Wrap a free-text paragraph and indent every line, for settings
/// fields like the welcome message.
pub fn wrap_indented(text: &str, width: usize, indent: &str) -> String {
    let options = textwrap::Options::new(width)
        .initial_indent(indent)
        .subsequent_indent(indent);
    textwrap::fill(text, options)
}
