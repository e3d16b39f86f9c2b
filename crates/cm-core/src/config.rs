//! Game configuration.
//!
//! Every tunable the game hard-codes lives in [`GameConfig`].  The defaults
//! reproduce the classic starting position: 1 January 2017, 30 000 in cash,
//! a 10 000 deposit maturing on the 4th, bank rates of 10 % / 8 %.
//!
//! With the `serde` feature the struct deserializes from partial JSON; any
//! field that is left out keeps its default.

use crate::{CoreError, CoreResult, Money, SimDate, SimRng};

// ── Ranges ────────────────────────────────────────────────────────────────────

/// A half-open price range `[low, high)`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceRange {
    pub low:  Money,
    pub high: Money,
}

impl PriceRange {
    pub const fn new(low: Money, high: Money) -> Self {
        Self { low, high }
    }

    /// Uniform draw in `[low, high)`.
    #[inline]
    pub fn sample(&self, rng: &mut SimRng) -> Money {
        rng.gen_range(self.low..self.high)
    }

    #[inline]
    pub fn contains(&self, price: Money) -> bool {
        (self.low..self.high).contains(&price)
    }

    /// Rejects empty ranges and negative prices.
    pub fn validate(&self, what: &'static str) -> CoreResult<()> {
        if self.low < 0 || self.low >= self.high {
            return Err(CoreError::InvalidRange { what, low: self.low, high: self.high });
        }
        Ok(())
    }
}

/// An inclusive percentage range `[low, high]`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateRange {
    pub low:  u32,
    pub high: u32,
}

impl RateRange {
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Uniform draw in `[low, high]`.
    #[inline]
    pub fn sample(&self, rng: &mut SimRng) -> u32 {
        rng.gen_range(self.low..=self.high)
    }

    #[inline]
    pub fn contains(&self, rate: u32) -> bool {
        (self.low..=self.high).contains(&rate)
    }

    pub fn validate(&self, what: &'static str) -> CoreResult<()> {
        if self.low > self.high {
            return Err(CoreError::InvalidRange {
                what,
                low:  self.low as i64,
                high: self.high as i64,
            });
        }
        Ok(())
    }
}

// ── Accrual ───────────────────────────────────────────────────────────────────

/// When outstanding deposits and loans are compounded.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccrualMode {
    /// Each entry compounds on its own day-of-month.
    #[default]
    PerEntry,
    /// Every entry compounds once for each entry whose day-of-month is
    /// today.  This is the classic game's rule: two deposits due on the same
    /// day compound the whole book twice.
    Batch,
}

// ── SeedDeposit ───────────────────────────────────────────────────────────────

/// A deposit the player already holds when the game starts.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedDeposit {
    pub maturity: SimDate,
    pub amount:   Money,
}

// ── GameConfig ────────────────────────────────────────────────────────────────

/// Top-level game configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Date of tick 0.
    pub start_date: SimDate,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Days a headless run lasts.
    pub total_days: u64,

    pub player_name: String,

    /// Year the player was born in; day and month are rolled at start.
    pub birth_year: i32,

    pub initial_cash: Money,

    pub initial_deposit: Option<SeedDeposit>,

    pub initial_loan_rate: u32,
    pub initial_deposit_rate: u32,

    /// Range the bank redraws both rates from on the 1st of each month.
    pub rate_range: RateRange,

    pub oil_price_range:  PriceRange,
    pub land_price_range: PriceRange,

    /// Barrels of heating oil the household needs per month.
    pub heat_range: PriceRange,

    /// Display-only figures shown on the rate board and finance summary.
    pub income_tax:       u32,
    pub replacement_cost: u32,
    pub house_rate:       u32,
    pub land_rate:        u32,

    pub accrual: AccrualMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        let start_date = SimDate::clamped(2017, 1, 1).unwrap_or_default();
        Self {
            start_date,
            seed:                 42,
            total_days:           365,
            player_name:          "Ksenia".to_string(),
            birth_year:           1990,
            initial_cash:         30_000,
            initial_deposit:      SimDate::clamped(2017, 1, 4)
                .ok()
                .map(|maturity| SeedDeposit { maturity, amount: 10_000 }),
            initial_loan_rate:    10,
            initial_deposit_rate: 8,
            rate_range:           RateRange::new(5, 15),
            oil_price_range:      PriceRange::new(20, 60),
            land_price_range:     PriceRange::new(50, 150),
            heat_range:           PriceRange::new(1, 10),
            income_tax:           5,
            replacement_cost:     19,
            house_rate:           10,
            land_rate:            10,
            accrual:              AccrualMode::PerEntry,
        }
    }
}

impl GameConfig {
    /// Check ranges and the starting position for consistency.
    pub fn validate(&self) -> CoreResult<()> {
        self.rate_range.validate("bank rate")?;
        self.oil_price_range.validate("oil price")?;
        self.land_price_range.validate("land price")?;
        self.heat_range.validate("heating oil")?;

        if self.initial_cash < 0 {
            return Err(CoreError::Config(format!(
                "initial cash must be non-negative, got {}",
                self.initial_cash
            )));
        }
        if let Some(seed) = &self.initial_deposit {
            if seed.amount <= 0 {
                return Err(CoreError::Config(format!(
                    "initial deposit must be positive, got {}",
                    seed.amount
                )));
            }
            if seed.maturity <= self.start_date {
                return Err(CoreError::Config(format!(
                    "initial deposit matures on {} which is not after the start date {}",
                    seed.maturity, self.start_date
                )));
            }
        }
        Ok(())
    }
}
