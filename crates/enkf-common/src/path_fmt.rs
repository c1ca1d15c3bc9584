//! Path patterns parameterized by ensemble member
//!
//! A pattern such as `init/poro_%d.txt` or `member_%03d/field.grdecl` is
//! expanded with the member index. Supported conversions are `%d`, `%Nd`
//! and `%0Nd`; `%%` is a literal percent sign. Any other `%` sequence is
//! copied through unchanged. Every integer conversion in the pattern
//! receives the same index.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFormat {
    fmt: String,
}

impl PathFormat {
    pub fn new(fmt: impl Into<String>) -> Self {
        Self { fmt: fmt.into() }
    }

    /// The pattern as configured
    pub fn as_str(&self) -> &str {
        &self.fmt
    }

    /// Whether the pattern contains at least one integer conversion
    pub fn has_placeholder(&self) -> bool {
        let mut found = false;
        self.render(0, |_| found = true);
        found
    }

    /// Expand the pattern for one ensemble member
    pub fn expand(&self, member: usize) -> PathBuf {
        PathBuf::from(self.render(member, |_| {}))
    }

    fn render(&self, value: usize, mut on_placeholder: impl FnMut(usize)) -> String {
        let mut out = String::with_capacity(self.fmt.len() + 8);
        let mut chars = self.fmt.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }

            if let Some((_, '%')) = chars.peek() {
                chars.next();
                out.push('%');
                continue;
            }

            let mut zero_pad = false;
            let mut width = String::new();
            let mut end = start + 1;
            while let Some(&(i, d)) = chars.peek() {
                if d == '0' && width.is_empty() && !zero_pad {
                    zero_pad = true;
                } else if d.is_ascii_digit() {
                    width.push(d);
                } else {
                    break;
                }
                end = i + 1;
                chars.next();
            }

            match chars.peek() {
                Some(&(_, 'd')) => {
                    chars.next();
                    on_placeholder(start);
                    let width: usize = width.parse().unwrap_or(0);
                    if zero_pad {
                        out.push_str(&format!("{:0width$}", value, width = width));
                    } else {
                        out.push_str(&format!("{:width$}", value, width = width));
                    }
                }
                _ => out.push_str(&self.fmt[start..end]),
            }
        }

        out
    }
}

impl fmt::Display for PathFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fmt)
    }
}

impl From<&str> for PathFormat {
    fn from(fmt: &str) -> Self {
        Self::new(fmt)
    }
}
