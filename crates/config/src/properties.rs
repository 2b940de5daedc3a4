//! Flat `key=value` property files.
//!
//! Responsibilities:
//! - Define [`PropertySet`], the immutable key/value set loaded from one
//!   source.
//! - Parse the flat properties format: `#`/`!` comments, `=`/`:`/whitespace
//!   separators, backslash escapes, `\uXXXX`, and line continuations.
//!
//! Does NOT handle:
//! - Locating or opening files (see loader/).
//! - Decryption of values (see resolver/).
//!
//! Invariants:
//! - A `PropertySet` is never mutated after parsing.
//! - Duplicate keys keep the last occurrence, matching conventional
//!   properties semantics.

use std::collections::HashMap;
use thiserror::Error;

const INLINE_WS: [char; 3] = [' ', '\t', '\u{c}'];

/// Errors raised while parsing a property file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid \\u escape on line {line}")]
    InvalidUnicodeEscape { line: usize },
}

/// An immutable mapping of property keys to raw (possibly encrypted) values.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropertySet(HashMap<String, String>);

impl PropertySet {
    /// An empty set, used when no source could be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse properties text into a set.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = text.lines().collect();
        let mut map = HashMap::new();
        let mut i = 0;
        while i < lines.len() {
            let line_no = i + 1;
            let stripped = lines[i].trim_start_matches(INLINE_WS);
            i += 1;
            if stripped.is_empty() || stripped.starts_with(['#', '!']) {
                continue;
            }

            // An odd number of trailing backslashes continues the entry onto
            // the next physical line, with its leading whitespace dropped.
            let mut logical = stripped.to_string();
            while trailing_backslashes(&logical) % 2 == 1 && i < lines.len() {
                logical.pop();
                logical.push_str(lines[i].trim_start_matches(INLINE_WS));
                i += 1;
            }

            let (key, value) = split_entry(&logical);
            map.insert(unescape(key, line_no)?, unescape(value, line_no)?);
        }
        Ok(Self(map))
    }

    /// Look up the raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate over the keys in the set.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn trailing_backslashes(s: &str) -> usize {
    s.chars().rev().take_while(|&c| c == '\\').count()
}

/// Split a logical line into raw (still-escaped) key and value parts.
///
/// The key ends at the first unescaped `=`, `:`, or inline whitespace; a
/// whitespace terminator may be followed by an optional single `=`/`:`.
/// A line with no separator maps the whole line to the empty value.
fn split_entry(line: &str) -> (&str, &str) {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'=' | b':' => {
                return (&line[..i], line[i + 1..].trim_start_matches(INLINE_WS));
            }
            b' ' | b'\t' | 0x0c => {
                let key = &line[..i];
                let mut rest = line[i..].trim_start_matches(INLINE_WS);
                if let Some(r) = rest.strip_prefix(['=', ':']) {
                    rest = r.trim_start_matches(INLINE_WS);
                }
                return (key, rest);
            }
            _ => i += 1,
        }
    }
    (line, "")
}

fn unescape(s: &str, line: usize) -> Result<String, ParseError> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let mut code = 0u32;
                for _ in 0..4 {
                    let digit = chars
                        .next()
                        .and_then(|h| h.to_digit(16))
                        .ok_or(ParseError::InvalidUnicodeEscape { line })?;
                    code = code * 16 + digit;
                }
                let decoded = char::from_u32(code)
                    .ok_or(ParseError::InvalidUnicodeEscape { line })?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            // A lone backslash at end of input is dropped.
            None => {}
        }
    }
    Ok(out)
}
