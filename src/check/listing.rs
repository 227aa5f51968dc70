//! List rendering for the summary line and debug dumps.
//!
//! Items are quoted and escaped so that any provider body, including
//! multi-line HTML, renders on a single line.

use std::fmt::{self, Write};

/// A string rendered as a quoted literal.
///
/// Single quotes are used unless the text contains `'` and no `"`.
/// Backslashes, the chosen quote, control characters and non-space
/// whitespace are escaped.
pub struct Quoted<'a>(pub &'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = if self.0.contains('\'') && !self.0.contains('"') {
            '"'
        } else {
            '\''
        };

        f.write_char(quote)?;
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c if c == quote => write!(f, "\\{c}")?,
                c if c.is_control() || (c.is_whitespace() && c != ' ') => {
                    let code = u32::from(c);
                    match code {
                        0..=0xFF => write!(f, "\\x{code:02x}")?,
                        0x100..=0xFFFF => write!(f, "\\u{code:04x}")?,
                        _ => write!(f, "\\U{code:08x}")?,
                    }
                }
                c => f.write_char(c)?,
            }
        }
        f.write_char(quote)
    }
}

/// Bracketed, comma separated list of [`Quoted`] items.
pub struct QuotedList<'a>(pub &'a [&'a str]);

impl fmt::Display for QuotedList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", Quoted(item))?;
        }
        f.write_char(']')
    }
}

/// Bracketed list of `True`/`False` flags.
pub struct FlagList<'a>(pub &'a [bool]);

impl fmt::Display for FlagList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, flag) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(if *flag { "True" } else { "False" })?;
        }
        f.write_char(']')
    }
}
