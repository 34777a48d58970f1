use std::fmt;

use serde::{Deserialize, Serialize};

/// Rendering of an optional field that has not been set yet.
pub const ABSENT: &str = "undefined";

/// User record owned by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            role: None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
}

/// Prints the record as an object literal: `{ name: 'john doe', title: 'Product Manager' }`.
///
/// Fields appear as name, title, role; unset fields are left out. Always a
/// single line, however wide, so `show()` stays four lines.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ name: {}", Quoted(&self.name))?;
        if let Some(title) = self.title() {
            write!(f, ", title: {}", Quoted(title))?;
        }
        if let Some(role) = self.role() {
            write!(f, ", role: {}", Quoted(role))?;
        }
        f.write_str(" }")
    }
}

/// Displays an optional value, falling back to [`ABSENT`].
pub struct OrAbsent<'a>(pub Option<&'a str>);

impl fmt::Display for OrAbsent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.unwrap_or(ABSENT))
    }
}

/// String literal inside the record rendering.
///
/// Single quotes by default; switches to double quotes or backticks when the
/// value already contains single quotes, escaping only as a last resort.
/// Control characters never reach the output raw.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let quote = if !value.contains('\'') {
            '\''
        } else if !value.contains('"') {
            '"'
        } else if !value.contains('`') && !value.contains("${") {
            '`'
        } else {
            '\''
        };

        write!(f, "{quote}")?;
        for ch in value.chars() {
            match ch {
                '\\' => f.write_str("\\\\")?,
                '\u{8}' => f.write_str("\\b")?,
                '\t' => f.write_str("\\t")?,
                '\n' => f.write_str("\\n")?,
                '\u{b}' => f.write_str("\\x0B")?,
                '\u{c}' => f.write_str("\\f")?,
                '\r' => f.write_str("\\r")?,
                c if c == quote => write!(f, "\\{c}")?,
                // C0 and C1 control characters, including DEL.
                c if matches!(c, '\u{0}'..='\u{1f}' | '\u{7f}'..='\u{9f}') => {
                    write!(f, "\\x{:02X}", c as u32)?
                }
                c => write!(f, "{c}")?,
            }
        }
        write!(f, "{quote}")
    }
}
