//! `cm-ledger`: the player's books.
//!
//! [`User`] is the aggregate root of the simulation.  Purchases, sales,
//! deposits and loans all go through it, and every debit is checked against
//! the cash balance *before* anything is mutated.  The check is strict
//! (`price < cash`): spending exactly the whole balance is refused.
//!
//! # Daily settlement
//!
//! ```text
//! on_tick(date, bank):
//!   ① Accrue    compound deposits/loans with an anniversary today
//!   ② Deposits  a deposit maturing today is paid into cash
//!   ③ Loans     a loan maturing today is repaid from cash; any
//!               shortfall rolls over one month
//!   ④ Month     on the 1st, monthly profit restarts from zero
//! ```
//!
//! [`Secretary`] is a small month-aware helper that reads the ledger for
//! the household report (heating oil, birthday, trading results).

pub mod error;
pub mod property;
pub mod secretary;
pub mod user;


pub use error::{LedgerError, LedgerResult};
pub use property::{CommodityLedger, HOME_WITH_MUM, Property};
pub use secretary::{Secretary, SecretaryReport};
pub use user::{DaySettlement, User};
