//! What the player owns, and how their commodity trading has gone.

use cm_core::{Category, Commodity, Money, Units};

/// The dwelling every new player starts in.  It is not on the market and
/// therefore cannot be sold.
pub const HOME_WITH_MUM: &str = "Живу у мамы";

/// Owned goods and commodity inventories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    pub dwelling: Option<String>,
    pub vehicle:  Option<String>,
    pub oil:      Units,
    pub land:     Units,
}

impl Default for Property {
    fn default() -> Self {
        Self {
            dwelling: Some(HOME_WITH_MUM.to_string()),
            vehicle:  None,
            oil:      0,
            land:     0,
        }
    }
}

impl Property {
    pub fn good(&self, category: Category) -> Option<&str> {
        match category {
            Category::Vehicle  => self.vehicle.as_deref(),
            Category::Dwelling => self.dwelling.as_deref(),
        }
    }

    pub(crate) fn good_mut(&mut self, category: Category) -> &mut Option<String> {
        match category {
            Category::Vehicle  => &mut self.vehicle,
            Category::Dwelling => &mut self.dwelling,
        }
    }

    #[inline]
    pub fn units(&self, kind: Commodity) -> Units {
        match kind {
            Commodity::Oil  => self.oil,
            Commodity::Land => self.land,
        }
    }

    pub(crate) fn units_mut(&mut self, kind: Commodity) -> &mut Units {
        match kind {
            Commodity::Oil  => &mut self.oil,
            Commodity::Land => &mut self.land,
        }
    }
}

/// Running totals for one commodity.
///
/// `benefit` is realised profit: total sale proceeds minus total purchase
/// cost.  It goes negative as soon as anything is bought.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CommodityLedger {
    pub bought:  Units,
    pub sold:    Units,
    pub benefit: Money,
}
