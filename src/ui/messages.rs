//! User-facing message helpers: verbose tracing and styled headers.

use std::fmt;

use ansi_term::Style;

/// Print a diagnostic line when verbose mode is on.
pub fn trace<T: fmt::Display>(verbose: bool, msg: T) {
    if verbose {
        println!("{}", msg);
    }
}

/// Section header, bold when styling is enabled.
pub fn heading(text: &str, styled: bool) -> String {
    if styled {
        Style::new().bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}
