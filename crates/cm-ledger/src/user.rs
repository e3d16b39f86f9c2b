//! The `User` ledger.

use cm_bank::{Bank, Book, Side};
use cm_core::{Category, Commodity, GameConfig, Money, SimDate, SimRng, Units};
use cm_market::{Buyer, Market};
use tracing::{debug, info, warn};

use crate::{CommodityLedger, LedgerError, LedgerResult, Property};

/// What happened to the books during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DaySettlement {
    /// Entry-compoundings applied to deposits today.
    pub deposits_accrued: usize,
    /// Entry-compoundings applied to loans today.
    pub loans_accrued:    usize,
    /// A deposit that matured today and was paid into cash.
    pub deposit_paid:     Option<Money>,
    /// The part of today's maturing loan repaid from cash.
    pub loan_repaid:      Option<Money>,
    /// The part of today's maturing loan that cash could not cover, rolled
    /// over to the same day next month.
    pub loan_rolled:      Option<Money>,
}

/// The player's cash, books, property and trading history.
#[derive(Clone, Debug)]
pub struct User {
    name:     String,
    today:    SimDate,
    cash:     Money,
    deposits: Book,
    loans:    Book,
    property: Property,
    oil:      CommodityLedger,
    land:     CommodityLedger,
    profit:   Money,
    birthday: SimDate,
}

impl User {
    /// The configured starting position: opening cash, the seed deposit (if
    /// any), living with mum, nothing else.
    pub fn new(config: &GameConfig, birthday: SimDate) -> Self {
        let mut deposits = Book::new();
        if let Some(seed) = &config.initial_deposit {
            deposits.insert(seed.maturity, seed.amount);
        }
        Self {
            name: config.player_name.clone(),
            today: config.start_date,
            cash: config.initial_cash,
            deposits,
            loans: Book::new(),
            property: Property::default(),
            oil: CommodityLedger::default(),
            land: CommodityLedger::default(),
            profit: 0,
            birthday,
        }
    }

    /// Draw a birthday in `year`.  Days past the end of the drawn month are
    /// walked back onto its last day.
    pub fn roll_birthday(year: i32, rng: &mut SimRng) -> LedgerResult<SimDate> {
        let month = rng.gen_range(1..=12);
        let day = rng.gen_range(1..=31);
        Ok(SimDate::clamped(year, month, day)?)
    }

    // ── Daily settlement ──────────────────────────────────────────────────

    /// Settle the books for `date`.
    ///
    /// Arithmetic overflow is the only failure; it leaves the simulation in
    /// an unknowable state and is meant to be fatal.
    pub fn on_tick(&mut self, date: SimDate, bank: &Bank) -> LedgerResult<DaySettlement> {
        let mut day = DaySettlement {
            deposits_accrued: bank.accrue_due(&mut self.deposits, Side::Deposit, date)?,
            loans_accrued:    bank.accrue_due(&mut self.loans, Side::Loan, date)?,
            ..DaySettlement::default()
        };
        self.today = date;

        if let Some(payout) = self.deposits.remove(&date) {
            self.cash = checked_add(self.cash, payout, "deposit payout")?;
            self.profit = checked_add(self.profit, payout, "monthly profit")?;
            day.deposit_paid = Some(payout);
            info!(%date, payout, cash = self.cash, "deposit matured");
        }

        if let Some(due) = self.loans.remove(&date) {
            let repaid = due.min(self.cash);
            self.cash -= repaid;
            self.profit = checked_sub(self.profit, repaid, "monthly profit")?;
            day.loan_repaid = Some(repaid);
            info!(%date, repaid, cash = self.cash, "loan repaid");

            let shortfall = due - repaid;
            if shortfall > 0 {
                let next = date.add_months(1)?;
                let entry = self.loans.entry(next).or_insert(0);
                *entry = checked_add(*entry, shortfall, "rolled loan")?;
                day.loan_rolled = Some(shortfall);
                warn!(%date, shortfall, rolled_to = %next, "cash short of loan repayment; remainder rolled over");
            }
        }

        if date.is_first_of_month() {
            self.profit = 0;
        }
        Ok(day)
    }

    // ── Bank operations ───────────────────────────────────────────────────

    /// Place `amount` on deposit for `term_months`.
    ///
    /// Refused when `amount` is not positive, `term_months` is zero, or the
    /// amount is not strictly below cash.  A second deposit with the same
    /// maturity date is merged into the first.
    pub fn new_deposit(&mut self, amount: Money, term_months: u32) -> bool {
        if amount <= 0 || !self.is_solvent(amount) {
            debug!(amount, cash = self.cash, "deposit refused");
            return false;
        }
        let Some(maturity) = self.maturity(term_months) else {
            return false;
        };
        let current = self.deposits.get(&maturity).copied().unwrap_or(0);
        let (Some(merged), Some(profit)) = (current.checked_add(amount), self.profit.checked_sub(amount)) else {
            return false;
        };
        self.deposits.insert(maturity, merged);
        self.cash -= amount;
        self.profit = profit;
        info!(amount, %maturity, "deposit opened");
        true
    }

    /// Borrow `amount` for `term_months`.
    ///
    /// The bank only lends to a player whose cash already exceeds the loan:
    /// refused under the same conditions as [`new_deposit`][Self::new_deposit].
    pub fn new_loan(&mut self, amount: Money, term_months: u32) -> bool {
        if amount <= 0 || !self.is_solvent(amount) {
            debug!(amount, cash = self.cash, "loan refused");
            return false;
        }
        let Some(maturity) = self.maturity(term_months) else {
            return false;
        };
        let current = self.loans.get(&maturity).copied().unwrap_or(0);
        let (Some(merged), Some(cash), Some(profit)) = (
            current.checked_add(amount),
            self.cash.checked_add(amount),
            self.profit.checked_add(amount),
        ) else {
            return false;
        };
        self.loans.insert(maturity, merged);
        self.cash = cash;
        self.profit = profit;
        info!(amount, %maturity, "loan taken");
        true
    }

    fn maturity(&self, term_months: u32) -> Option<SimDate> {
        if term_months == 0 {
            return None;
        }
        self.today.add_months(term_months).ok()
    }

    // ── Goods ─────────────────────────────────────────────────────────────

    pub fn buy_vehicle(&mut self, name: &str, price: Money) -> bool {
        self.buy_good(Category::Vehicle, name, price)
    }

    pub fn buy_dwelling(&mut self, name: &str, price: Money) -> bool {
        self.buy_good(Category::Dwelling, name, price)
    }

    /// Sell the current vehicle for `price`.  Nothing happens when the price
    /// is zero or no vehicle is owned.
    pub fn sell_vehicle(&mut self, price: Money) -> bool {
        self.sell_good(Category::Vehicle, price)
    }

    /// Sell the current dwelling for `price`.  Nothing happens when the price
    /// is zero or there is no dwelling of one's own.
    pub fn sell_dwelling(&mut self, price: Money) -> bool {
        self.sell_good(Category::Dwelling, price)
    }

    fn sell_good(&mut self, category: Category, price: Money) -> bool {
        if price <= 0 || self.property.good(category).is_none() {
            return false;
        }
        let (Some(cash), Some(profit)) = (self.cash.checked_add(price), self.profit.checked_add(price)) else {
            return false;
        };
        self.cash = cash;
        self.profit = profit;
        let sold = self.property.good_mut(category).take();
        info!(%category, item = ?sold, price, "sold");
        true
    }

    /// Today's market price of the owned good in `category`; 0 when nothing
    /// is owned or the good is not listed.
    pub fn holding_value(&self, category: Category, market: &Market) -> Money {
        self.property
            .good(category)
            .and_then(|name| market.price_of(name))
            .unwrap_or(0)
    }

    // ── Commodities ───────────────────────────────────────────────────────

    pub fn buy_oil(&mut self, amount: Units, price: Money) -> bool {
        self.buy_commodity(Commodity::Oil, amount, price)
    }

    pub fn buy_land(&mut self, amount: Units, price: Money) -> bool {
        self.buy_commodity(Commodity::Land, amount, price)
    }

    pub fn sell_oil(&mut self, amount: Units, price: Money) -> bool {
        self.sell_commodity(Commodity::Oil, amount, price)
    }

    pub fn sell_land(&mut self, amount: Units, price: Money) -> bool {
        self.sell_commodity(Commodity::Land, amount, price)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` when cash strictly exceeds `amount`.
    #[inline]
    pub fn is_solvent(&self, amount: Money) -> bool {
        self.cash > amount
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn today(&self) -> SimDate {
        self.today
    }

    #[inline]
    pub fn cash(&self) -> Money {
        self.cash
    }

    /// Net cash flow since the 1st of the month.
    #[inline]
    pub fn profit(&self) -> Money {
        self.profit
    }

    #[inline]
    pub fn deposits(&self) -> &Book {
        &self.deposits
    }

    #[inline]
    pub fn loans(&self) -> &Book {
        &self.loans
    }

    #[inline]
    pub fn property(&self) -> &Property {
        &self.property
    }

    #[inline]
    pub fn birthday(&self) -> SimDate {
        self.birthday
    }

    /// `true` when `date` falls on the player's birthday (any year).
    pub fn is_birthday(&self, date: SimDate) -> bool {
        date.day() == self.birthday.day() && date.month() == self.birthday.month()
    }

    pub fn ledger(&self, kind: Commodity) -> &CommodityLedger {
        match kind {
            Commodity::Oil  => &self.oil,
            Commodity::Land => &self.land,
        }
    }

    fn ledger_mut(&mut self, kind: Commodity) -> &mut CommodityLedger {
        match kind {
            Commodity::Oil  => &mut self.oil,
            Commodity::Land => &mut self.land,
        }
    }

    /// Everything the bank owes the player.
    pub fn deposits_total(&self) -> Money {
        self.deposits.values().sum()
    }

    /// Everything the player owes the bank.
    pub fn loans_total(&self) -> Money {
        self.loans.values().sum()
    }

    /// Deposits maturing in `month` (1–12) of any year.
    pub fn month_deposits(&self, month: u32) -> Money {
        month_sum(&self.deposits, month)
    }

    /// Loans maturing in `month` (1–12) of any year.
    pub fn month_loans(&self, month: u32) -> Money {
        month_sum(&self.loans, month)
    }

    /// Cash plus deposits minus loans.
    pub fn net_position(&self) -> Money {
        self.cash + self.deposits_total() - self.loans_total()
    }
}

impl Buyer for User {
    fn buy_good(&mut self, category: Category, name: &str, price: Money) -> bool {
        if price < 0 || !self.is_solvent(price) {
            debug!(%category, item = name, price, cash = self.cash, "purchase refused");
            return false;
        }
        let Some(profit) = self.profit.checked_sub(price) else {
            return false;
        };
        self.cash -= price;
        self.profit = profit;
        *self.property.good_mut(category) = Some(name.to_string());
        info!(%category, item = name, price, "bought");
        true
    }

    fn buy_commodity(&mut self, kind: Commodity, amount: Units, price: Money) -> bool {
        if amount == 0 || price < 0 {
            return false;
        }
        let Some(total) = Money::try_from(amount).ok().and_then(|a| a.checked_mul(price)) else {
            return false;
        };
        if !self.is_solvent(total) {
            debug!(%kind, amount, total, cash = self.cash, "commodity purchase refused");
            return false;
        }
        let ledger = *self.ledger(kind);
        let (Some(profit), Some(held), Some(bought), Some(benefit)) = (
            self.profit.checked_sub(total),
            self.property.units(kind).checked_add(amount),
            ledger.bought.checked_add(amount),
            ledger.benefit.checked_sub(total),
        ) else {
            return false;
        };
        self.cash -= total;
        self.profit = profit;
        *self.property.units_mut(kind) = held;
        *self.ledger_mut(kind) = CommodityLedger { bought, benefit, ..ledger };
        info!(%kind, amount, price, "commodity bought");
        true
    }

    fn sell_commodity(&mut self, kind: Commodity, amount: Units, price: Money) -> bool {
        let held = self.property.units(kind);
        if amount == 0 || amount > held || price < 0 {
            debug!(%kind, amount, held, "commodity sale refused");
            return false;
        }
        let Some(proceeds) = Money::try_from(amount).ok().and_then(|a| a.checked_mul(price)) else {
            return false;
        };
        let ledger = *self.ledger(kind);
        let (Some(cash), Some(profit), Some(sold), Some(benefit)) = (
            self.cash.checked_add(proceeds),
            self.profit.checked_add(proceeds),
            ledger.sold.checked_add(amount),
            ledger.benefit.checked_add(proceeds),
        ) else {
            return false;
        };
        self.cash = cash;
        self.profit = profit;
        *self.property.units_mut(kind) = held - amount;
        *self.ledger_mut(kind) = CommodityLedger { sold, benefit, ..ledger };
        info!(%kind, amount, price, "commodity sold");
        true
    }
}

fn month_sum(book: &Book, month: u32) -> Money {
    book.iter()
        .filter(|(maturity, _)| maturity.month() == month)
        .map(|(_, amount)| *amount)
        .sum()
}

fn checked_add(a: Money, b: Money, what: &'static str) -> LedgerResult<Money> {
    a.checked_add(b).ok_or(LedgerError::Overflow { what })
}

fn checked_sub(a: Money, b: Money, what: &'static str) -> LedgerResult<Money> {
    a.checked_sub(b).ok_or(LedgerError::Overflow { what })
}
