//! The `Buyer` trait: the seam between price-holders and the ledger.

use cm_core::{Category, Commodity, Money, Units};

/// Anything that can pay for goods and hold commodities.
///
/// Every method validates before it mutates and reports refusal as `false`;
/// a refused call leaves the buyer untouched.
pub trait Buyer {
    /// Pay `price` for the named vehicle or dwelling and take ownership.
    fn buy_good(&mut self, category: Category, name: &str, price: Money) -> bool;

    /// Pay `amount * price` for `amount` units of `kind`.
    fn buy_commodity(&mut self, kind: Commodity, amount: Units, price: Money) -> bool;

    /// Sell `amount` units of `kind` at `price` each.
    fn sell_commodity(&mut self, kind: Commodity, amount: Units, price: Money) -> bool;
}
