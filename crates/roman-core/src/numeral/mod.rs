//! Decimal ⇄ Roman numeral conversion.
//!
//! Both directions walk [`SYMBOL_TABLE`] from the largest value down, taking
//! each symbol as many times as it fits. Only the conventional subtractive
//! notation for 1–3999 is produced.


use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

pub const MIN_VALUE: u16 = 1;
pub const MAX_VALUE: u16 = 3999;

/// Symbol/value pairs, strictly descending by value. Order is significant.
pub const SYMBOL_TABLE: &[(&str, u16)] = &[
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("number must be between 1 and 3999, got {0}")]
pub struct RangeError(pub i64);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty numeral")]
    Empty,
    #[error("unexpected {rest:?} at byte {position}")]
    Unconsumed { position: usize, rest: String },
    #[error("{input:?} is not in canonical form (expected {canonical:?})")]
    NonCanonical { input: String, canonical: String },
    #[error(transparent)]
    OutOfRange(#[from] RangeError),
}

/// A value in `1..=3999`. Formats as its canonical numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Roman(u16);

impl Roman {
    pub fn new(value: i64) -> Result<Self, RangeError> {
        if !(i64::from(MIN_VALUE)..=i64::from(MAX_VALUE)).contains(&value) {
            return Err(RangeError(value));
        }
        Ok(Self(value as u16))
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for Roman {
    type Error = RangeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Roman> for u16 {
    fn from(r: Roman) -> u16 {
        r.0
    }
}

impl fmt::Display for Roman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut remaining = self.0;
        for &(symbol, value) in SYMBOL_TABLE {
            while remaining >= value {
                f.write_str(symbol)?;
                remaining -= value;
            }
        }
        Ok(())
    }
}

impl FromStr for Roman {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strict(s).map(Self)
    }
}

/// Convert a decimal number to its Roman numeral.
///
/// Fails with [`RangeError`] unless `0 < num < 4000`.
pub fn to_roman(num: i64) -> Result<String, RangeError> {
    let roman = Roman::new(num)?.to_string();
    debug!(num, %roman, "to_roman");
    Ok(roman)
}

/// Convert a Roman numeral to a decimal number, permissively.
///
/// Never fails: scanning stops at the first character the table can no
/// longer match and whatever was matched up to that point is returned.
/// Empty or non-matching input yields 0. Use [`parse_strict`] to reject
/// malformed numerals instead.
pub fn from_roman(s: &str) -> u32 {
    let (total, consumed) = scan(s);
    if consumed < s.len() {
        warn!(input = s, consumed, "from_roman ignored unmatched input");
    }
    debug!(input = s, total, "from_roman");
    total
}

/// Convert a Roman numeral to a decimal number, rejecting anything that is
/// not the canonical numeral of a value in `1..=3999`.
pub fn parse_strict(s: &str) -> Result<u16, ParseError> {
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    let (total, consumed) = scan(s);
    if consumed < s.len() {
        return Err(ParseError::Unconsumed {
            position: consumed,
            rest: s[consumed..].to_string(),
        });
    }
    let roman = Roman::new(i64::from(total))?;
    let canonical = roman.to_string();
    if canonical != s {
        return Err(ParseError::NonCanonical {
            input: s.to_string(),
            canonical,
        });
    }
    Ok(roman.value())
}

/// Greedy left-to-right match over the table. Returns (value, bytes consumed).
///
/// Symbols are ASCII, so `index` always lands on a char boundary.
fn scan(s: &str) -> (u32, usize) {
    let mut total: u32 = 0;
    let mut index = 0;
    for &(symbol, value) in SYMBOL_TABLE {
        while s[index..].starts_with(symbol) {
            total = total.saturating_add(u32::from(value));
            index += symbol.len();
        }
    }
    (total, index)
}
