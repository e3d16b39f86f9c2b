//! Simulation time model.
//!
//! # Design
//!
//! The simulation advances one calendar day per tick.  Two representations
//! are kept side by side:
//!
//!   - `SimDate`: the calendar date every subsystem reacts to;
//!   - `Tick`: the number of days elapsed since the start date.
//!
//! Calendar arithmetic is delegated to `chrono::NaiveDate`, so rollover at
//! month and year boundaries (leap years included) is always exact.  Dates
//! built from loose (year, month, day) triples never fail on an out-of-range
//! day: the day is walked back until the date exists, so 31 February becomes
//! 28 (or 29) February.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Days elapsed since the start of the simulation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` days after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

// ── SimDate ───────────────────────────────────────────────────────────────────

/// A calendar date, the simulation's only time source.
///
/// Ordered chronologically, so it can key a `BTreeMap` of maturities.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SimDate(NaiveDate);

impl SimDate {
    /// Build an exact date; fails if the triple is not a real calendar day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<SimDate> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(SimDate)
            .ok_or(CoreError::InvalidDate { year, month, day })
    }

    /// Build a date, walking `day` back until it exists in `month`.
    ///
    /// `clamped(2017, 2, 31)` is 2017-02-28.  Fails only for a month outside
    /// 1–12, a zero day, or a year chrono cannot represent.
    pub fn clamped(year: i32, month: u32, day: u32) -> CoreResult<SimDate> {
        let invalid = CoreError::InvalidDate { year, month, day };
        if !(1..=12).contains(&month) || day == 0 {
            return Err(invalid);
        }
        let mut d = day.min(31);
        while d >= 28 {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, d) {
                return Ok(SimDate(date));
            }
            d -= 1;
        }
        NaiveDate::from_ymd_opt(year, month, d).map(SimDate).ok_or(invalid)
    }

    #[inline]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month of the year, 1–12.
    #[inline]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of the month, 1–31.
    #[inline]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    #[inline]
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Zero-based month index, for month-indexed arrays.
    #[inline]
    pub fn month_index(self) -> usize {
        self.0.month0() as usize
    }

    /// `true` on the 1st of any month, the day of the monthly re-roll.
    #[inline]
    pub fn is_first_of_month(self) -> bool {
        self.day() == 1
    }

    /// `true` on 1 January.
    #[inline]
    pub fn is_new_year(self) -> bool {
        self.day() == 1 && self.month() == 1
    }

    /// The following calendar day, or `None` at the end of chrono's range.
    #[inline]
    pub fn succ(self) -> Option<SimDate> {
        self.0.succ_opt().map(SimDate)
    }

    /// The same day-of-month `months` months later, wrapping the year and
    /// clamping the day to the length of the target month.
    pub fn add_months(self, months: u32) -> CoreResult<SimDate> {
        let idx = self.0.month0() as u64 + months as u64;
        let year = i32::try_from(idx / 12)
            .ok()
            .and_then(|dy| self.year().checked_add(dy))
            .ok_or(CoreError::CalendarOverflow(self))?;
        let month = (idx % 12) as u32 + 1;
        SimDate::clamped(year, month, self.day())
    }

    /// The wrapped `chrono` date.
    #[inline]
    pub fn naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for SimDate {
    fn from(date: NaiveDate) -> Self {
        SimDate(date)
    }
}

impl fmt::Display for SimDate {
    /// `01-Jan-2017`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d-%b-%Y"))
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock: the current date plus the number of elapsed days.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The date the run started on (tick 0).
    pub start: SimDate,
    /// Today.
    pub current: SimDate,
    /// Days elapsed since `start`.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(start: SimDate) -> Self {
        Self {
            start,
            current: start,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance by exactly one day and return the new date.
    pub fn advance(&mut self) -> CoreResult<SimDate> {
        let next = self
            .current
            .succ()
            .ok_or(CoreError::CalendarOverflow(self.current))?;
        self.current = next;
        self.current_tick = self.current_tick + 1;
        Ok(next)
    }

    #[inline]
    pub fn elapsed_days(&self) -> u64 {
        self.current_tick.0
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.current, self.current_tick)
    }
}
