//! The `Bank` and its compounding rules.

use std::collections::BTreeMap;

use cm_core::{AccrualMode, GameConfig, Money, RateRange, SimDate, SimRng};
use tracing::debug;

use crate::{BankError, BankResult};

/// A book of scheduled deposits or loans: maturity date → principal plus
/// interest accrued so far.
pub type Book = BTreeMap<SimDate, Money>;

/// Which side of the bank's rate sheet a book is compounded at.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Side {
    Deposit,
    Loan,
}

/// One compounding step: `amount + amount * rate / 100`, truncated toward
/// zero.
#[inline]
pub fn compound(amount: Money, rate: u32) -> BankResult<Money> {
    amount
        .checked_mul(rate as Money)
        .map(|interest| interest / 100)
        .and_then(|interest| amount.checked_add(interest))
        .ok_or(BankError::Overflow { amount, rate })
}

/// Current loan and deposit rates, redrawn monthly.
#[derive(Debug)]
pub struct Bank {
    loan_rate:    u32,
    deposit_rate: u32,
    rate_range:   RateRange,
    mode:         AccrualMode,
    rng:          SimRng,
}

impl Bank {
    /// Create a bank at the configured opening rates, drawing future rates
    /// from `rng`.
    pub fn new(config: &GameConfig, rng: SimRng) -> Self {
        Self {
            loan_rate:    config.initial_loan_rate,
            deposit_rate: config.initial_deposit_rate,
            rate_range:   config.rate_range,
            mode:         config.accrual,
            rng,
        }
    }

    #[inline]
    pub fn loan_rate(&self) -> u32 {
        self.loan_rate
    }

    #[inline]
    pub fn deposit_rate(&self) -> u32 {
        self.deposit_rate
    }

    #[inline]
    pub fn accrual_mode(&self) -> AccrualMode {
        self.mode
    }

    #[inline]
    pub fn rate_for(&self, side: Side) -> u32 {
        match side {
            Side::Deposit => self.deposit_rate,
            Side::Loan    => self.loan_rate,
        }
    }

    /// Redraw both rates independently on the 1st of the month; no-op on
    /// any other day.
    pub fn on_tick(&mut self, date: SimDate) {
        if !date.is_first_of_month() {
            return;
        }
        self.loan_rate = self.rate_range.sample(&mut self.rng);
        self.deposit_rate = self.rate_range.sample(&mut self.rng);
        debug!(%date, loan_rate = self.loan_rate, deposit_rate = self.deposit_rate, "bank rates redrawn");
    }

    /// Compound every deposit in `book` once at the deposit rate.
    pub fn accrue_deposits(&self, book: &mut Book) -> BankResult<()> {
        compound_all(book, self.deposit_rate)
    }

    /// Compound every loan in `book` once at the loan rate.
    pub fn accrue_loans(&self, book: &mut Book) -> BankResult<()> {
        compound_all(book, self.loan_rate)
    }

    /// Apply today's compounding to `book` under the bank's accrual mode.
    ///
    /// Returns the number of entry-compoundings performed (0 when no entry
    /// has its anniversary today).
    pub fn accrue_due(&self, book: &mut Book, side: Side, today: SimDate) -> BankResult<usize> {
        let rate = self.rate_for(side);
        let day = today.day();
        match self.mode {
            AccrualMode::PerEntry => {
                let mut applied = 0;
                for (maturity, amount) in book.iter_mut() {
                    if maturity.day() == day {
                        *amount = compound(*amount, rate)?;
                        applied += 1;
                    }
                }
                Ok(applied)
            }
            AccrualMode::Batch => {
                let triggers = book.keys().filter(|m| m.day() == day).count();
                for _ in 0..triggers {
                    compound_all(book, rate)?;
                }
                Ok(triggers * book.len())
            }
        }
    }
}

fn compound_all(book: &mut Book, rate: u32) -> BankResult<()> {
    for amount in book.values_mut() {
        *amount = compound(*amount, rate)?;
    }
    Ok(())
}
