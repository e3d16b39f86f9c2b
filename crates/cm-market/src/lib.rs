//! `cm-market`: everything with a price that moves.
//!
//! | Type         | Re-rolled on day 1                     | Traded through        |
//! |--------------|----------------------------------------|-----------------------|
//! | [`Market`]   | every vehicle and dwelling listing     | [`Market::buy`]       |
//! | [`Exchange`] | oil and land, recorded into a history  | [`Exchange::buy_commodity`], [`Exchange::sell_commodity`] |
//!
//! Neither type touches the player's money directly.  Purchases go through
//! the [`Buyer`] trait, implemented by the ledger crate, so that the cash
//! check and bookkeeping live in exactly one place.

pub mod buyer;
pub mod catalog;
pub mod error;
pub mod exchange;
pub mod market;

#[cfg(test)]
mod tests;

pub use buyer::Buyer;
pub use catalog::{DWELLINGS, Listing, VEHICLES};
pub use error::{MarketError, MarketResult};
pub use exchange::{Exchange, PricePoint};
pub use market::Market;
