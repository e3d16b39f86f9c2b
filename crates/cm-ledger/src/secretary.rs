//! The household `Secretary`.

use cm_core::{Commodity, GameConfig, PriceRange, SimDate, SimRng, Units};
use tracing::debug;

use crate::{CommodityLedger, User};

/// Everything the secretary tells the player on a given day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SecretaryReport {
    /// Barrels of oil needed to heat the home this month.
    pub heating_oil:    Units,
    pub birthday_day:   u32,
    pub birthday_month: u32,
    pub birthday_today: bool,
    pub oil:            CommodityLedger,
    pub land:           CommodityLedger,
}

/// Tracks the monthly heating-oil requirement and compiles the household
/// report.
#[derive(Debug)]
pub struct Secretary {
    heating_oil: Units,
    heat_range:  PriceRange,
    rng:         SimRng,
}

impl Secretary {
    pub fn new(config: &GameConfig, rng: SimRng) -> Self {
        let mut secretary = Self {
            heating_oil: 0,
            heat_range:  config.heat_range,
            rng,
        };
        secretary.heating_oil = secretary.roll_heat();
        secretary
    }

    /// Re-roll the heating-oil requirement on the 1st.
    pub fn on_tick(&mut self, date: SimDate) {
        if date.is_first_of_month() {
            self.heating_oil = self.roll_heat();
            debug!(%date, heating_oil = self.heating_oil, "heating requirement re-rolled");
        }
    }

    fn roll_heat(&mut self) -> Units {
        // Ranges are validated non-negative.
        self.heat_range.sample(&mut self.rng).unsigned_abs()
    }

    #[inline]
    pub fn heating_oil(&self) -> Units {
        self.heating_oil
    }

    pub fn report(&self, user: &User, today: SimDate) -> SecretaryReport {
        let birthday = user.birthday();
        SecretaryReport {
            heating_oil:    self.heating_oil,
            birthday_day:   birthday.day(),
            birthday_month: birthday.month(),
            birthday_today: user.is_birthday(today),
            oil:            *user.ledger(Commodity::Oil),
            land:           *user.ledger(Commodity::Land),
        }
    }
}
