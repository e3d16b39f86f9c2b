//! The journal row.

use cm_core::{Commodity, Money, SimDate, Units};
use cm_sim::World;

/// One line of the tick journal: the state of the world after a day's
/// fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalRow {
    pub date:         SimDate,
    pub tick:         u64,
    pub cash:         Money,
    /// Owed to the player.
    pub deposits:     Money,
    /// Owed by the player.
    pub loans:        Money,
    pub profit:       Money,
    pub loan_rate:    u32,
    pub deposit_rate: u32,
    pub oil_price:    Money,
    pub land_price:   Money,
    pub oil_units:    Units,
    pub land_units:   Units,
    /// Heating oil the secretary says is needed this month.
    pub heating_oil:  Units,
}

impl JournalRow {
    pub const HEADER: [&'static str; 13] = [
        "date",
        "tick",
        "cash",
        "deposits",
        "loans",
        "profit",
        "loan_rate",
        "deposit_rate",
        "oil_price",
        "land_price",
        "oil_units",
        "land_units",
        "heating_oil",
    ];

    /// Snapshot `world` as it stands now.
    pub fn capture(world: &World) -> Self {
        let user = &world.user;
        Self {
            date:         world.today(),
            tick:         world.clock.elapsed_days(),
            cash:         user.cash(),
            deposits:     user.deposits_total(),
            loans:        user.loans_total(),
            profit:       user.profit(),
            loan_rate:    world.bank.loan_rate(),
            deposit_rate: world.bank.deposit_rate(),
            oil_price:    world.exchange.price(Commodity::Oil),
            land_price:   world.exchange.price(Commodity::Land),
            oil_units:    user.property().units(Commodity::Oil),
            land_units:   user.property().units(Commodity::Land),
            heating_oil:  world.secretary.heating_oil(),
        }
    }

    /// The row as CSV fields, in [`HEADER`][Self::HEADER] order.  Dates are
    /// ISO 8601.
    pub fn fields(&self) -> [String; 13] {
        [
            self.date.naive().format("%Y-%m-%d").to_string(),
            self.tick.to_string(),
            self.cash.to_string(),
            self.deposits.to_string(),
            self.loans.to_string(),
            self.profit.to_string(),
            self.loan_rate.to_string(),
            self.deposit_rate.to_string(),
            self.oil_price.to_string(),
            self.land_price.to_string(),
            self.oil_units.to_string(),
            self.land_units.to_string(),
            self.heating_oil.to_string(),
        ]
    }
}
