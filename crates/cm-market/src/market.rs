//! The goods `Market`: vehicles and dwellings with monthly prices.

use std::collections::HashSet;

use cm_core::{Category, Money, PriceRange, SimDate, SimRng};
use tracing::{debug, warn};

use crate::catalog::{DWELLINGS, VEHICLES};
use crate::{Buyer, Listing, MarketError, MarketResult};

/// Two ordered price lists, re-rolled on the 1st of each month.
#[derive(Debug)]
pub struct Market {
    vehicles:  Vec<Listing>,
    dwellings: Vec<Listing>,
    rng:       SimRng,
}

impl Market {
    /// The standard catalog, with opening prices drawn from `rng`.
    pub fn new(rng: SimRng) -> Self {
        let mut rng = rng;
        let vehicles = VEHICLES
            .iter()
            .map(|&(name, range)| Listing::rolled(name, range, &mut rng))
            .collect();
        let dwellings = DWELLINGS
            .iter()
            .map(|&(name, range)| Listing::rolled(name, range, &mut rng))
            .collect();
        Self { vehicles, dwellings, rng }
    }

    /// A custom catalog.  Both categories must be non-empty, every range
    /// valid, and every name unique across the whole market.
    pub fn with_catalog(
        vehicles:  &[(&str, PriceRange)],
        dwellings: &[(&str, PriceRange)],
        rng:       SimRng,
    ) -> MarketResult<Self> {
        if vehicles.is_empty() {
            return Err(MarketError::EmptyCatalog(Category::Vehicle));
        }
        if dwellings.is_empty() {
            return Err(MarketError::EmptyCatalog(Category::Dwelling));
        }
        let mut seen = HashSet::new();
        for &(name, range) in vehicles.iter().chain(dwellings) {
            range.validate("listing price")?;
            if !seen.insert(name) {
                return Err(MarketError::DuplicateItem(name.to_string()));
            }
        }

        let mut rng = rng;
        let mut roll = |items: &[(&str, PriceRange)]| -> Vec<Listing> {
            items
                .iter()
                .map(|&(name, range)| Listing::rolled(name, range, &mut rng))
                .collect()
        };
        let vehicles = roll(vehicles);
        let dwellings = roll(dwellings);
        Ok(Self { vehicles, dwellings, rng })
    }

    /// Re-roll every listing independently on the 1st; no-op otherwise.
    pub fn on_tick(&mut self, date: SimDate) {
        if !date.is_first_of_month() {
            return;
        }
        for listing in self.vehicles.iter_mut().chain(self.dwellings.iter_mut()) {
            listing.reroll(&mut self.rng);
        }
        debug!(%date, "market prices re-rolled");
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Listings of one category, in catalog order.
    pub fn listings(&self, category: Category) -> &[Listing] {
        match category {
            Category::Vehicle  => &self.vehicles,
            Category::Dwelling => &self.dwellings,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<(Category, &Listing)> {
        let find = |category: Category| {
            self.listings(category)
                .iter()
                .find(|l| l.name == name)
                .map(|l| (category, l))
        };
        find(Category::Vehicle).or_else(|| find(Category::Dwelling))
    }

    /// Current price of a listed item, `None` for anything unlisted.
    pub fn price_of(&self, name: &str) -> Option<Money> {
        self.lookup(name).map(|(_, l)| l.price)
    }

    pub fn category_of(&self, name: &str) -> Option<Category> {
        self.lookup(name).map(|(c, _)| c)
    }

    /// Widest item name in one category, in characters.
    pub fn name_width(&self, category: Category) -> usize {
        self.listings(category)
            .iter()
            .map(Listing::name_width)
            .max()
            .unwrap_or(0)
    }

    /// Widest item name across both categories.  Both price lists are laid
    /// out side by side with this column width.
    pub fn max_name_width(&self) -> usize {
        self.name_width(Category::Vehicle)
            .max(self.name_width(Category::Dwelling))
    }

    // ── Trading ───────────────────────────────────────────────────────────

    /// Sell the named item to `buyer` at `offered_price`.
    ///
    /// Returns `false` for an unknown item or when the buyer refuses.  A
    /// buyer only pays a price strictly below their balance.
    pub fn buy<B: Buyer + ?Sized>(&self, name: &str, offered_price: Money, buyer: &mut B) -> bool {
        let Some(category) = self.category_of(name) else {
            warn!(item = name, "purchase of unlisted item refused");
            return false;
        };
        buyer.buy_good(category, name, offered_price)
    }

    /// Sell the named item to `buyer` at today's listed price.
    pub fn buy_at_list_price<B: Buyer + ?Sized>(&self, name: &str, buyer: &mut B) -> bool {
        match self.price_of(name) {
            Some(price) => self.buy(name, price, buyer),
            None => false,
        }
    }
}
