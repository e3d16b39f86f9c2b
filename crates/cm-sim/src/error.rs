use cm_bank::BankError;
use cm_core::CoreError;
use cm_ledger::LedgerError;
use cm_market::MarketError;
use thiserror::Error;

/// Boxed error raised by a [`SimObserver`][crate::SimObserver].
pub type ObserverError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("ledger settlement failed: {0}")]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Bank(#[from] BankError),

    #[error(transparent)]
    Market(#[from] MarketError),

    #[error("subscriber `{0}` is already registered")]
    DuplicateSubscriber(&'static str),

    #[error("observer `{name}` failed: {source}")]
    Observer {
        name:   String,
        #[source]
        source: ObserverError,
    },
}

impl SimError {
    /// Wrap any observer failure.
    pub fn observer(name: impl Into<String>, source: impl Into<ObserverError>) -> Self {
        SimError::Observer { name: name.into(), source: source.into() }
    }
}

pub type SimResult<T> = Result<T, SimError>;
