//! Unit tests for cm-market.

use cm_core::{Category, Commodity, GameConfig, Money, PriceRange, SimDate, SimRng, Units};

use crate::{Buyer, Exchange, Market, MarketError};

fn d(y: i32, m: u32, day: u32) -> SimDate {
    SimDate::from_ymd(y, m, day).unwrap()
}

/// Minimal buyer that records what it was asked to do.
#[derive(Default)]
struct Wallet {
    cash:   Money,
    goods:  Vec<(Category, String, Money)>,
    trades: Vec<(Commodity, Units, Money, bool)>,
}

impl Buyer for Wallet {
    fn buy_good(&mut self, category: Category, name: &str, price: Money) -> bool {
        if price < self.cash {
            self.cash -= price;
            self.goods.push((category, name.to_string(), price));
            return true;
        }
        false
    }

    fn buy_commodity(&mut self, kind: Commodity, amount: Units, price: Money) -> bool {
        self.trades.push((kind, amount, price, true));
        true
    }

    fn sell_commodity(&mut self, kind: Commodity, amount: Units, price: Money) -> bool {
        self.trades.push((kind, amount, price, false));
        true
    }
}

#[cfg(test)]
mod market {
    use super::*;

    fn all_in_range(m: &Market) -> bool {
        [Category::Vehicle, Category::Dwelling]
            .iter()
            .flat_map(|&c| m.listings(c))
            .all(|l| l.range.contains(l.price))
    }

    fn prices(m: &Market) -> Vec<Money> {
        [Category::Vehicle, Category::Dwelling]
            .iter()
            .flat_map(|&c| m.listings(c))
            .map(|l| l.price)
            .collect()
    }

    #[test]
    fn standard_catalog_opens_in_range() {
        let m = Market::new(SimRng::new(1));
        assert_eq!(m.listings(Category::Vehicle).len(), 7);
        assert_eq!(m.listings(Category::Dwelling).len(), 7);
        assert_eq!(m.listings(Category::Vehicle)[0].name, "Луаз-969");
        assert!(all_in_range(&m));
    }

    #[test]
    fn first_of_month_rerolls_in_range() {
        let mut m = Market::new(SimRng::new(1));
        for month in 1..=12 {
            m.on_tick(d(2017, month, 1));
            assert!(all_in_range(&m));
        }
    }

    #[test]
    fn other_days_leave_prices_alone() {
        let mut m = Market::new(SimRng::new(1));
        let before = prices(&m);
        let mut date = d(2017, 1, 2);
        while date.day() != 1 {
            m.on_tick(date);
            date = date.succ().unwrap();
        }
        assert_eq!(prices(&m), before);
    }

    #[test]
    fn name_widths_count_characters() {
        let m = Market::new(SimRng::new(1));
        assert_eq!(m.name_width(Category::Vehicle), "Москвич-2141".chars().count());
        assert_eq!(m.name_width(Category::Dwelling), 6);
        assert_eq!(m.max_name_width(), 12);
    }

    #[test]
    fn lookup_finds_category() {
        let m = Market::new(SimRng::new(1));
        assert_eq!(m.category_of("ГАЗ-24"), Some(Category::Vehicle));
        assert_eq!(m.category_of("3-комн"), Some(Category::Dwelling));
        assert_eq!(m.category_of("Живу у мамы"), None);
        assert!(m.price_of("ВАЗ-2106").is_some());
    }

    #[test]
    fn buy_routes_to_buyer_with_category() {
        let m = Market::new(SimRng::new(1));
        let mut w = Wallet { cash: 30_000, ..Wallet::default() };
        assert!(m.buy("Москвич-412", 15_000, &mut w));
        assert_eq!(w.cash, 15_000);
        assert_eq!(w.goods, vec![(Category::Vehicle, "Москвич-412".to_string(), 15_000)]);
    }

    #[test]
    fn buy_unknown_item_refused() {
        let m = Market::new(SimRng::new(1));
        let mut w = Wallet { cash: 30_000, ..Wallet::default() };
        assert!(!m.buy("Запорожец", 100, &mut w));
        assert_eq!(w.cash, 30_000);
        assert!(w.goods.is_empty());
    }

    #[test]
    fn buy_at_list_price_uses_current_price() {
        let m = Market::new(SimRng::new(1));
        let price = m.price_of("1-комн").unwrap();
        let mut w = Wallet { cash: 100_000, ..Wallet::default() };
        assert!(m.buy_at_list_price("1-комн", &mut w));
        assert_eq!(w.cash, 100_000 - price);
    }

    #[test]
    fn custom_catalog_validation() {
        let ok = [("A", PriceRange::new(1, 2))];
        assert_eq!(
            Market::with_catalog(&[], &ok, SimRng::new(0)).unwrap_err(),
            MarketError::EmptyCatalog(Category::Vehicle)
        );
        assert_eq!(
            Market::with_catalog(&ok, &ok, SimRng::new(0)).unwrap_err(),
            MarketError::DuplicateItem("A".to_string())
        );
        let bad = [("B", PriceRange::new(5, 5))];
        assert!(matches!(
            Market::with_catalog(&ok, &bad, SimRng::new(0)),
            Err(MarketError::Core(_))
        ));
        let m = Market::with_catalog(&ok, &[("B", PriceRange::new(3, 4))], SimRng::new(0)).unwrap();
        assert_eq!(m.price_of("A"), Some(1));
        assert_eq!(m.price_of("B"), Some(3));
    }
}

#[cfg(test)]
mod exchange {
    use super::*;

    fn open(start: SimDate) -> Exchange {
        Exchange::new(&GameConfig::default(), start, SimRng::new(3))
    }

    #[test]
    fn opening_prices_recorded_in_start_month() {
        let ex = open(d(2017, 1, 1));
        let cfg = GameConfig::default();
        assert!(cfg.oil_price_range.contains(ex.oil_price()));
        assert!(cfg.land_price_range.contains(ex.land_price()));
        assert_eq!(ex.history_for(1), Some(ex.current()));
        assert!(ex.history()[1..].iter().all(Option::is_none));
    }

    #[test]
    fn other_days_leave_prices_alone() {
        let mut ex = open(d(2017, 1, 1));
        let before = ex.current();
        let mut date = d(2017, 1, 2);
        while date.day() != 1 {
            ex.on_tick(date);
            date = date.succ().unwrap();
        }
        assert_eq!(ex.current(), before);
    }

    #[test]
    fn monthly_prices_fill_history() {
        let mut ex = open(d(2017, 1, 1));
        for month in 2..=12 {
            ex.on_tick(d(2017, month, 1));
            assert_eq!(ex.history_for(month), Some(ex.current()));
        }
        assert!(ex.history().iter().all(Option::is_some));
    }

    #[test]
    fn new_year_clears_then_records_january() {
        let mut ex = open(d(2017, 1, 1));
        for month in 2..=12 {
            ex.on_tick(d(2017, month, 1));
        }
        ex.on_tick(d(2018, 1, 1));
        assert_eq!(ex.history_for(1), Some(ex.current()));
        assert!(ex.history()[1..].iter().all(Option::is_none));
    }

    #[test]
    fn history_for_out_of_range_month() {
        let ex = open(d(2017, 1, 1));
        assert_eq!(ex.history_for(0), None);
        assert_eq!(ex.history_for(13), None);
    }

    #[test]
    fn trades_use_current_price() {
        let ex = open(d(2017, 1, 1));
        let mut w = Wallet::default();
        assert!(ex.buy_commodity(Commodity::Oil, 10, &mut w));
        assert!(ex.sell_commodity(Commodity::Land, 2, &mut w));
        assert_eq!(
            w.trades,
            vec![
                (Commodity::Oil, 10, ex.oil_price(), true),
                (Commodity::Land, 2, ex.land_price(), false),
            ]
        );
    }
}
