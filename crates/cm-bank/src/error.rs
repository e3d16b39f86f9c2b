use cm_core::Money;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("compounding {amount} at {rate}% overflows")]
    Overflow { amount: Money, rate: u32 },
}

pub type BankResult<T> = Result<T, BankError>;
