//! Predicates for typed-in numbers.
//!
//! Everything the player types is checked here before it reaches the
//! ledger.

use cm_core::{Money, Units};

use crate::{ConsoleError, ConsoleResult};

/// Longest deposit or loan the bank will write, in months.
pub const MAX_TERM: u32 = 11;

/// `true` for a non-empty string of ASCII digits.  Signs, spaces and
/// separators are rejected.
pub fn is_integer_string(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[inline]
pub fn is_valid_term(months: u32) -> bool {
    (1..=MAX_TERM).contains(&months)
}

#[inline]
pub fn is_valid_month(month: u32) -> bool {
    (1..=12).contains(&month)
}

fn parse_digits<T: std::str::FromStr>(s: &str) -> ConsoleResult<T> {
    let s = s.trim();
    if !is_integer_string(s) {
        return Err(ConsoleError::NotANumber(s.to_string()));
    }
    s.parse().map_err(|_| ConsoleError::NotANumber(s.to_string()))
}

/// A money amount as typed.  Zero is allowed here; the ledger refuses it.
pub fn parse_amount(s: &str) -> ConsoleResult<Money> {
    parse_digits(s)
}

/// A commodity quantity as typed.
pub fn parse_units(s: &str) -> ConsoleResult<Units> {
    parse_digits(s)
}

pub fn parse_term(s: &str) -> ConsoleResult<u32> {
    let months = parse_digits(s)?;
    if !is_valid_term(months) {
        return Err(ConsoleError::TermOutOfRange(months));
    }
    Ok(months)
}

pub fn parse_month(s: &str) -> ConsoleResult<u32> {
    let month = parse_digits(s)?;
    if !is_valid_month(month) {
        return Err(ConsoleError::MonthOutOfRange(month));
    }
    Ok(month)
}
