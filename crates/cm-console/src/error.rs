use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("{0:?} is not a whole number")]
    NotANumber(String),

    #[error("term of {0} months is outside 1..=11")]
    TermOutOfRange(u32),

    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u32),

    #[error("menu has no items")]
    EmptyMenu,

    #[error("cannot read a name and price from {0:?}")]
    BadRow(String),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
