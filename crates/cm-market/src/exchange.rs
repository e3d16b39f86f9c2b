//! The commodity `Exchange`: oil and land prices with a yearly history.

use cm_core::{Commodity, GameConfig, Money, PriceRange, SimDate, SimRng, Units};
use tracing::debug;

use crate::Buyer;

/// Oil and land prices recorded on the 1st of a month.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PricePoint {
    pub oil:  Money,
    pub land: Money,
}

impl PricePoint {
    #[inline]
    pub fn price(&self, kind: Commodity) -> Money {
        match kind {
            Commodity::Oil  => self.oil,
            Commodity::Land => self.land,
        }
    }
}

/// Current oil and land prices and the month-indexed history of this year.
///
/// `history[m]` holds the prices recorded on the 1st of month `m + 1`.  The
/// history is wiped on 1 January; January's new prices are recorded right
/// after the wipe, so they survive it.
#[derive(Debug)]
pub struct Exchange {
    oil_price:  Money,
    land_price: Money,
    oil_range:  PriceRange,
    land_range: PriceRange,
    history:    [Option<PricePoint>; 12],
    rng:        SimRng,
}

impl Exchange {
    /// Open the exchange on `today`: draw opening prices and record them in
    /// today's month.
    pub fn new(config: &GameConfig, today: SimDate, rng: SimRng) -> Self {
        let mut exchange = Self {
            oil_price:  0,
            land_price: 0,
            oil_range:  config.oil_price_range,
            land_range: config.land_price_range,
            history:    [None; 12],
            rng,
        };
        exchange.reroll(today);
        exchange
    }

    pub fn on_tick(&mut self, date: SimDate) {
        if date.is_new_year() {
            self.history = [None; 12];
            debug!(%date, "exchange history cleared");
        }
        if date.is_first_of_month() {
            self.reroll(date);
        }
    }

    fn reroll(&mut self, date: SimDate) {
        self.oil_price = self.oil_range.sample(&mut self.rng);
        self.land_price = self.land_range.sample(&mut self.rng);
        self.history[date.month_index()] = Some(self.current());
        debug!(%date, oil = self.oil_price, land = self.land_price, "exchange prices re-rolled");
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn oil_price(&self) -> Money {
        self.oil_price
    }

    #[inline]
    pub fn land_price(&self) -> Money {
        self.land_price
    }

    #[inline]
    pub fn price(&self, kind: Commodity) -> Money {
        self.current().price(kind)
    }

    #[inline]
    pub fn current(&self) -> PricePoint {
        PricePoint { oil: self.oil_price, land: self.land_price }
    }

    pub fn range(&self, kind: Commodity) -> PriceRange {
        match kind {
            Commodity::Oil  => self.oil_range,
            Commodity::Land => self.land_range,
        }
    }

    /// All twelve month slots, January first.
    #[inline]
    pub fn history(&self) -> &[Option<PricePoint>; 12] {
        &self.history
    }

    /// Prices recorded for `month` (1–12), if any.
    pub fn history_for(&self, month: u32) -> Option<PricePoint> {
        let idx = usize::try_from(month).ok()?.checked_sub(1)?;
        self.history.get(idx).copied().flatten()
    }

    // ── Trading ───────────────────────────────────────────────────────────

    /// Sell `amount` units of `kind` to `buyer` at today's price.
    ///
    /// Refused (`false`) when the total is not strictly below the buyer's
    /// cash.
    pub fn buy_commodity<B: Buyer + ?Sized>(&self, kind: Commodity, amount: Units, buyer: &mut B) -> bool {
        buyer.buy_commodity(kind, amount, self.price(kind))
    }

    /// Buy `amount` units of `kind` back from `buyer` at today's price.
    ///
    /// Refused (`false`) when the buyer holds fewer than `amount` units.
    pub fn sell_commodity<B: Buyer + ?Sized>(&self, kind: Commodity, amount: Units, buyer: &mut B) -> bool {
        buyer.sell_commodity(kind, amount, self.price(kind))
    }
}
