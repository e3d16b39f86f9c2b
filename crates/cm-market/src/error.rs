use cm_core::{Category, CoreError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarketError {
    #[error("{0} catalog is empty")]
    EmptyCatalog(Category),

    #[error("item {0:?} is listed more than once")]
    DuplicateItem(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type MarketResult<T> = Result<T, MarketError>;
