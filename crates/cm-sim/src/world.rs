//! The simulation state handed to the presentation layer.

use cm_bank::Bank;
use cm_core::{Category, Commodity, GameConfig, Money, SimClock, SimDate, Units};
use cm_ledger::{DaySettlement, Secretary, SecretaryReport, User};
use cm_market::{Exchange, Market};
use tracing::debug;

use crate::{SimResult, Subscriber};

// ── Read-only views ───────────────────────────────────────────────────────────

/// The rate panel: live bank rates plus the fixed fees.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RateBoard {
    pub loan_rate:        u32,
    pub deposit_rate:     u32,
    pub income_tax:       u32,
    pub replacement_cost: u32,
}

/// The finance panel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FinanceSummary {
    pub cash:           Money,
    /// Owed to the player.
    pub deposits_total: Money,
    /// Owed by the player.
    pub loans_total:    Money,
    pub profit:         Money,
    pub house_rate:     u32,
    pub land_rate:      u32,
}

/// Outstanding deposits and loans bucketed by maturity month, January first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BankTable {
    pub deposits: [Money; 12],
    pub loans:    [Money; 12],
}

// ── World ─────────────────────────────────────────────────────────────────────

/// Everything the simulation knows.
///
/// Fields are public for read access by panels and observers.  Mutation
/// outside the fan-out goes through the player actions below (or directly
/// through [`User`]), which is how the presentation layer forwards key
/// presses into the core.
#[derive(Debug)]
pub struct World {
    /// The configuration the world was built from.
    pub config: GameConfig,

    /// Today and the number of days elapsed.
    pub clock: SimClock,

    pub bank: Bank,

    /// Vehicles and dwellings.  Shared by the player and every panel.
    pub market: Market,

    /// Oil and land.
    pub exchange: Exchange,

    /// The player's ledger.
    pub user: User,

    pub secretary: Secretary,

    /// What the ledger did on the most recent tick.
    pub last_settlement: DaySettlement,
}

impl World {
    #[inline]
    pub fn today(&self) -> SimDate {
        self.clock.current
    }

    pub(crate) fn dispatch(&mut self, subscriber: &mut Subscriber, date: SimDate) -> SimResult<()> {
        match subscriber {
            Subscriber::Ledger => {
                self.last_settlement = self.user.on_tick(date, &self.bank)?;
            }
            Subscriber::Bank      => self.bank.on_tick(date),
            Subscriber::Market    => self.market.on_tick(date),
            Subscriber::Exchange  => self.exchange.on_tick(date),
            Subscriber::Secretary => self.secretary.on_tick(date),
            Subscriber::Observer(observer) => {
                debug!(%date, observer = observer.name(), "notifying observer");
                observer.on_tick(date, self)?;
            }
        }
        Ok(())
    }

    // ── Player actions ────────────────────────────────────────────────────

    /// Buy a listed vehicle or dwelling at today's price.
    pub fn buy_at_market(&mut self, name: &str) -> bool {
        self.market.buy_at_list_price(name, &mut self.user)
    }

    /// Sell the owned vehicle at today's market price.  Refused when nothing
    /// is owned.
    pub fn sell_vehicle_at_market(&mut self) -> bool {
        let price = self.user.holding_value(Category::Vehicle, &self.market);
        self.user.sell_vehicle(price)
    }

    /// Sell the owned dwelling at today's market price.  Refused when the
    /// dwelling is not on the market, which includes living with mum.
    pub fn sell_dwelling_at_market(&mut self) -> bool {
        let price = self.user.holding_value(Category::Dwelling, &self.market);
        self.user.sell_dwelling(price)
    }

    /// Buy `amount` units of `kind` at today's exchange price.
    pub fn buy_commodity(&mut self, kind: Commodity, amount: Units) -> bool {
        self.exchange.buy_commodity(kind, amount, &mut self.user)
    }

    /// Sell `amount` units of `kind` at today's exchange price.
    pub fn sell_commodity(&mut self, kind: Commodity, amount: Units) -> bool {
        self.exchange.sell_commodity(kind, amount, &mut self.user)
    }

    // ── Views ─────────────────────────────────────────────────────────────

    pub fn rate_board(&self) -> RateBoard {
        RateBoard {
            loan_rate:        self.bank.loan_rate(),
            deposit_rate:     self.bank.deposit_rate(),
            income_tax:       self.config.income_tax,
            replacement_cost: self.config.replacement_cost,
        }
    }

    pub fn finance_summary(&self) -> FinanceSummary {
        FinanceSummary {
            cash:           self.user.cash(),
            deposits_total: self.user.deposits_total(),
            loans_total:    self.user.loans_total(),
            profit:         self.user.profit(),
            house_rate:     self.config.house_rate,
            land_rate:      self.config.land_rate,
        }
    }

    pub fn bank_table(&self) -> BankTable {
        let mut table = BankTable { deposits: [0; 12], loans: [0; 12] };
        for (month, (deposits, loans)) in (1..=12).zip(table.deposits.iter_mut().zip(table.loans.iter_mut())) {
            *deposits = self.user.month_deposits(month);
            *loans = self.user.month_loans(month);
        }
        table
    }

    pub fn secretary_report(&self) -> SecretaryReport {
        self.secretary.report(&self.user, self.today())
    }
}
