//! `cm-bank`: interest rates and compounding.
//!
//! The [`Bank`] holds one loan rate and one deposit rate.  Both are redrawn
//! on the 1st of every month and applied to the player's books whenever an
//! entry reaches its monthly anniversary.
//!
//! ```text
//! day 1 of month   → loan_rate, deposit_rate := uniform [5, 15]
//! anniversary day  → amount := amount + amount * rate / 100
//! ```
//!
//! Books are plain `BTreeMap<SimDate, Money>` keyed by maturity date; the
//! bank never owns them, it only compounds what the ledger hands it.

pub mod bank;
pub mod error;


pub use bank::{Bank, Book, Side, compound};
pub use error::{BankError, BankResult};
