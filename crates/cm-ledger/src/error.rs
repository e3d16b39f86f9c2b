use cm_bank::BankError;
use cm_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("interest accrual failed: {0}")]
    Bank(#[from] BankError),

    #[error("{what} overflows the currency range")]
    Overflow { what: &'static str },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
