//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::SimDate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("calendar cannot advance past {0}")]
    CalendarOverflow(SimDate),

    #[error("{what} range [{low}, {high}] is empty or negative")]
    InvalidRange {
        what: &'static str,
        low:  i64,
        high: i64,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `cm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
