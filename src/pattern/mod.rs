//! LDML date/time patterns
//!
//! A [`Pattern`] is compiled once from a string such as
//! `yyyy-MM-dd'T'HH:mm:ss.SSSSSSXXXXX` and can then both format and parse.
//! Pattern syntax follows Unicode Technical Standard #35:
//! https://unicode.org/reports/tr35/tr35-dates.html#Date_Field_Symbol_Table
//!
//! Compiled patterns are immutable, so one pattern may be used from many
//! threads at once.

mod format;
mod parse;

use std::fmt;
use std::iter::Peekable;
use std::str::{Chars, FromStr};

use thiserror::Error;

/// Errors produced when compiling a pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern uses a letter this crate does not implement
    #[error("Unsupported pattern letter '{0}'")]
    UnsupportedField(char),
    /// A quoted literal was opened but never closed
    #[error("Unterminated quoted literal in pattern")]
    UnterminatedQuote,
}

/// A date/time field referenced by a pattern letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    /// `y`, `u`
    Year,
    /// `M`, `L`
    Month,
    /// `d`
    Day,
    /// `E`
    Weekday,
    /// `H`
    Hour24,
    /// `h`
    Hour12,
    /// `a`
    AmPm,
    /// `m`
    Minute,
    /// `s`
    Second,
    /// `S`
    Fraction,
    /// `X`, `x`
    IsoOffset,
    /// `Z`
    RfcOffset,
}

impl Field {
    fn from_letter(letter: char) -> Result<Self, PatternError> {
        Ok(match letter {
            'y' | 'u' => Field::Year,
            'M' | 'L' => Field::Month,
            'd' => Field::Day,
            'E' => Field::Weekday,
            'H' => Field::Hour24,
            'h' => Field::Hour12,
            'a' => Field::AmPm,
            'm' => Field::Minute,
            's' => Field::Second,
            'S' => Field::Fraction,
            'X' | 'x' => Field::IsoOffset,
            'Z' => Field::RfcOffset,
            other => return Err(PatternError::UnsupportedField(other)),
        })
    }

    /// Whether the field renders as digits at the given width
    pub(crate) fn is_numeric(self, width: usize) -> bool {
        match self {
            Field::Month => width <= 2,
            Field::Weekday | Field::AmPm | Field::IsoOffset | Field::RfcOffset => false,
            _ => true,
        }
    }
}

/// One compiled element of a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Item {
    Field { field: Field, width: usize },
    Literal(String),
}

/// A compiled date/time pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    items: Vec<Item>,
}

impl Pattern {
    /// Compile an LDML pattern string
    pub fn compile(source: &str) -> Result<Self, PatternError> {
        let mut items = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '\'' => {
                    // '' outside a quoted run is a single quote
                    if chars.peek() == Some(&'\'') {
                        chars.next();
                        literal.push('\'');
                    } else {
                        read_quoted(&mut chars, &mut literal)?;
                    }
                }
                'a'..='z' | 'A'..='Z' => {
                    let field = Field::from_letter(ch)?;
                    let width = 1 + consume_same(&mut chars, ch);
                    if !literal.is_empty() {
                        items.push(Item::Literal(std::mem::take(&mut literal)));
                    }
                    items.push(Item::Field { field, width });
                }
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            items.push(Item::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            items,
        })
    }

    /// The pattern string this pattern was compiled from
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[inline]
    pub(crate) fn items(&self) -> &[Item] {
        &self.items
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Collect a quoted run up to its closing quote; `''` inside it is a quote
fn read_quoted(chars: &mut Peekable<Chars<'_>>, literal: &mut String) -> Result<(), PatternError> {
    while let Some(c) = chars.next() {
        if c != '\'' {
            literal.push(c);
        } else if chars.peek() == Some(&'\'') {
            chars.next();
            literal.push('\'');
        } else {
            return Ok(());
        }
    }
    Err(PatternError::UnterminatedQuote)
}

/// Consume consecutive identical characters, returning count of additional chars
fn consume_same(chars: &mut Peekable<Chars<'_>>, ch: char) -> usize {
    let mut count = 0;
    while chars.peek() == Some(&ch) {
        chars.next();
        count += 1;
    }
    count
}
