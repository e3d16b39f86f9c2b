//! Integration tests for cm-sim.

use std::cell::RefCell;
use std::rc::Rc;

use cm_bank::compound;
use cm_core::{Commodity, CoreError, GameConfig, RateRange, SimDate};

use crate::{SimBuilder, SimError, SimObserver, SimResult, Subscriber, World};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn d(y: i32, m: u32, day: u32) -> SimDate {
    SimDate::from_ymd(y, m, day).unwrap()
}

type Log = Rc<RefCell<Vec<String>>>;

/// Records every hook call as `"<name> <event>"`.
struct Recorder {
    name: &'static str,
    log:  Log,
}

impl Recorder {
    fn new(name: &'static str, log: &Log) -> Self {
        Self { name, log: Rc::clone(log) }
    }
}

impl SimObserver for Recorder {
    fn name(&self) -> &str {
        self.name
    }

    fn on_sim_start(&mut self, _world: &World) -> SimResult<()> {
        self.log.borrow_mut().push(format!("{} start", self.name));
        Ok(())
    }

    fn on_tick(&mut self, date: SimDate, _world: &World) -> SimResult<()> {
        self.log.borrow_mut().push(format!("{} {date}", self.name));
        Ok(())
    }

    fn on_sim_end(&mut self, _world: &World) -> SimResult<()> {
        self.log.borrow_mut().push(format!("{} end", self.name));
        Ok(())
    }
}

/// Fails on one specific date.
struct FailOn(SimDate);

impl SimObserver for FailOn {
    fn name(&self) -> &str {
        "fail-on"
    }

    fn on_tick(&mut self, date: SimDate, _world: &World) -> SimResult<()> {
        if date == self.0 {
            return Err(SimError::observer("fail-on", format!("refusing {date}")));
        }
        Ok(())
    }
}

/// Captures the player's cash as observed on each tick.
struct CashProbe(Rc<RefCell<Vec<(SimDate, i64)>>>);

impl SimObserver for CashProbe {
    fn on_tick(&mut self, date: SimDate, world: &World) -> SimResult<()> {
        self.0.borrow_mut().push((date, world.user.cash()));
        Ok(())
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn standard_order_then_observers() {
        let log = Log::default();
        let sim = SimBuilder::new(GameConfig::default())
            .observer(Recorder::new("panel", &log))
            .build()
            .unwrap();
        assert_eq!(
            sim.subscriber_labels(),
            vec!["ledger", "bank", "market", "exchange", "secretary", "panel"]
        );
        assert_eq!(sim.today(), d(2017, 1, 1));
    }

    #[test]
    fn duplicate_domain_subscriber_rejected() {
        let result = SimBuilder::new(GameConfig::default())
            .subscribers(vec![Subscriber::Bank, Subscriber::Ledger, Subscriber::Bank])
            .build();
        assert!(matches!(result, Err(SimError::DuplicateSubscriber("bank"))));
    }

    #[test]
    fn repeated_observers_allowed() {
        let log = Log::default();
        let sim = SimBuilder::new(GameConfig::default())
            .observer(Recorder::new("a", &log))
            .observer(Recorder::new("a", &log))
            .build();
        assert!(sim.is_ok());
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = GameConfig { rate_range: RateRange::new(15, 5), ..GameConfig::default() };
        let result = SimBuilder::new(cfg).build();
        assert!(matches!(
            result,
            Err(SimError::Core(CoreError::InvalidRange { what: "bank rate", .. }))
        ));
    }

    #[test]
    fn same_seed_same_world() {
        let mut a = SimBuilder::new(GameConfig::default()).build().unwrap();
        let mut b = SimBuilder::new(GameConfig::default()).build().unwrap();
        assert_eq!(a.world.user.birthday(), b.world.user.birthday());
        assert_eq!(a.world.exchange.current(), b.world.exchange.current());
        a.run_days(90).unwrap();
        b.run_days(90).unwrap();
        assert_eq!(a.world.rate_board(), b.world.rate_board());
        assert_eq!(a.world.exchange.history(), b.world.exchange.history());
        assert_eq!(a.world.market.price_of("ГАЗ-24"), b.world.market.price_of("ГАЗ-24"));
    }

    #[test]
    fn birthday_in_birth_year() {
        let sim = SimBuilder::new(GameConfig::default()).build().unwrap();
        assert_eq!(sim.world.user.birthday().year(), 1990);
    }
}

// ── Fan-out ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fan_out {
    use super::*;

    #[test]
    fn dates_roll_over_calendar_boundaries() {
        let mut sim = SimBuilder::new(GameConfig::default()).build().unwrap();
        assert_eq!(sim.advance().unwrap(), d(2017, 1, 2));
        sim.run_days(29).unwrap();
        assert_eq!(sim.advance().unwrap(), d(2017, 2, 1));
        assert_eq!(sim.world.clock.elapsed_days(), 31);
    }

    #[test]
    fn observers_notified_in_registration_order() {
        let log = Log::default();
        let mut sim = SimBuilder::new(GameConfig::default())
            .observer(Recorder::new("a", &log))
            .observer(Recorder::new("b", &log))
            .build()
            .unwrap();
        sim.run_days(2).unwrap();
        assert_eq!(
            *log.borrow(),
            vec!["a 02-Jan-2017", "b 02-Jan-2017", "a 03-Jan-2017", "b 03-Jan-2017"]
        );
    }

    #[test]
    fn observer_sees_settled_ledger() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut sim = SimBuilder::new(GameConfig::default())
            .observer(CashProbe(Rc::clone(&seen)))
            .build()
            .unwrap();
        sim.run_days(3).unwrap();
        // The seed deposit (10 000 at 8 %) matures on the 4th.
        assert_eq!(seen.borrow().last(), Some(&(d(2017, 1, 4), 40_800)));
        assert_eq!(sim.world.last_settlement.deposit_paid, Some(10_800));
    }

    #[test]
    fn failing_observer_aborts_the_fan_out() {
        let log = Log::default();
        let mut sim = SimBuilder::new(GameConfig::default())
            .observer(FailOn(d(2017, 1, 3)))
            .observer(Recorder::new("after", &log))
            .build()
            .unwrap();
        sim.advance().unwrap();
        let err = sim.advance().unwrap_err();
        assert!(matches!(err, SimError::Observer { ref name, .. } if name == "fail-on"));
        assert_eq!(*log.borrow(), vec!["after 02-Jan-2017"]);
        assert_eq!(sim.today(), d(2017, 1, 3));
    }

    #[test]
    fn run_wraps_total_days_in_start_and_end_hooks() {
        let log = Log::default();
        let cfg = GameConfig { total_days: 3, ..GameConfig::default() };
        let mut sim = SimBuilder::new(cfg).observer(Recorder::new("p", &log)).build().unwrap();
        sim.run().unwrap();
        assert_eq!(
            *log.borrow(),
            vec!["p start", "p 02-Jan-2017", "p 03-Jan-2017", "p 04-Jan-2017", "p end"]
        );
        assert_eq!(sim.world.clock.elapsed_days(), 3);
    }

    #[test]
    fn run_with_lets_the_player_act_each_morning() {
        let cfg = GameConfig { total_days: 5, ..GameConfig::default() };
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let mut mornings = Vec::new();
        sim.run_with(|world| {
            mornings.push(world.today());
            if world.today() == d(2017, 1, 3) {
                world.buy_commodity(Commodity::Land, 1);
            }
            Ok(())
        })
        .unwrap();
        assert_eq!(mornings.len(), 5);
        assert_eq!(mornings[0], d(2017, 1, 1));
        assert_eq!(sim.today(), d(2017, 1, 6));
        assert_eq!(sim.world.user.property().land, 1);
    }

    #[test]
    fn omitted_subscriber_stays_frozen() {
        let mut sim = SimBuilder::new(GameConfig::default())
            .subscribers(vec![Subscriber::Ledger])
            .build()
            .unwrap();
        let opening = sim.world.exchange.current();
        sim.run_days(120).unwrap();
        assert_eq!(sim.world.rate_board().loan_rate, 10);
        assert_eq!(sim.world.rate_board().deposit_rate, 8);
        assert_eq!(sim.world.exchange.current(), opening);
    }

    #[test]
    fn register_after_build() {
        let log = Log::default();
        let mut sim = SimBuilder::new(GameConfig::default()).build().unwrap();
        assert!(matches!(
            sim.register(Subscriber::Exchange),
            Err(SimError::DuplicateSubscriber("exchange"))
        ));
        sim.register(Subscriber::observer(Recorder::new("late", &log))).unwrap();
        sim.advance().unwrap();
        assert_eq!(*log.borrow(), vec!["late 02-Jan-2017"]);
    }

    #[test]
    fn new_year_clears_history_then_records_january() {
        let mut sim = SimBuilder::new(GameConfig::default()).build().unwrap();
        sim.run_days(364).unwrap();
        assert_eq!(sim.today(), d(2017, 12, 31));
        assert!(sim.world.exchange.history().iter().all(Option::is_some));

        assert_eq!(sim.advance().unwrap(), d(2018, 1, 1));
        let ex = &sim.world.exchange;
        assert_eq!(ex.history_for(1), Some(ex.current()));
        assert!(ex.history()[1..].iter().all(Option::is_none));
    }

    #[test]
    fn non_first_days_leave_prices_alone() {
        let mut sim = SimBuilder::new(GameConfig::default()).build().unwrap();
        sim.run_days(31).unwrap();
        let rates = sim.world.rate_board();
        let prices = sim.world.exchange.current();
        let car = sim.world.market.price_of("ВАЗ-2109");
        let heat = sim.world.secretary.heating_oil();
        sim.run_days(27).unwrap();
        assert_eq!(sim.today(), d(2017, 2, 28));
        assert_eq!(sim.world.rate_board(), rates);
        assert_eq!(sim.world.exchange.current(), prices);
        assert_eq!(sim.world.market.price_of("ВАЗ-2109"), car);
        assert_eq!(sim.world.secretary.heating_oil(), heat);
    }
}

// ── Player scenarios ──────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn deposit_round_trip_at_live_rates() {
        let cfg = GameConfig { initial_deposit: None, ..GameConfig::default() };
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        assert!(sim.world.user.new_deposit(1_000, 3));
        assert_eq!(sim.world.user.cash(), 29_000);

        let mut expected = 1_000;
        while sim.today() < d(2017, 4, 1) {
            // The ledger settles before the bank redraws.
            let rate = sim.world.bank.deposit_rate();
            let date = sim.advance().unwrap();
            if date.day() == 1 {
                expected = compound(expected, rate).unwrap();
            }
        }
        assert_eq!(sim.world.last_settlement.deposit_paid, Some(expected));
        assert_eq!(sim.world.user.cash(), 29_000 + expected);
        assert!(sim.world.user.deposits().is_empty());
    }

    #[test]
    fn buy_and_sell_at_market_prices() {
        let mut sim = SimBuilder::new(GameConfig::default()).build().unwrap();
        let price = sim.world.market.price_of("Москвич-412").unwrap();
        assert!(sim.world.buy_at_market("Москвич-412"));
        assert_eq!(sim.world.user.cash(), 30_000 - price);
        assert_eq!(sim.world.user.property().vehicle.as_deref(), Some("Москвич-412"));

        sim.run_days(31).unwrap();
        let resale = sim.world.market.price_of("Москвич-412").unwrap();
        let cash = sim.world.user.cash();
        assert!(sim.world.sell_vehicle_at_market());
        assert_eq!(sim.world.user.cash(), cash + resale);
        assert!(!sim.world.sell_vehicle_at_market());
    }

    #[test]
    fn living_with_mum_cannot_be_sold() {
        let mut sim = SimBuilder::new(GameConfig::default()).build().unwrap();
        assert!(!sim.world.sell_dwelling_at_market());
        assert_eq!(sim.world.user.cash(), 30_000);
    }

    #[test]
    fn commodity_trades_use_exchange_price() {
        let mut sim = SimBuilder::new(GameConfig::default()).build().unwrap();
        let oil = sim.world.exchange.oil_price();
        assert!(sim.world.buy_commodity(Commodity::Oil, 10));
        assert_eq!(sim.world.user.cash(), 30_000 - 10 * oil);
        assert!(!sim.world.sell_commodity(Commodity::Oil, 11));
        assert!(sim.world.sell_commodity(Commodity::Oil, 10));
        assert_eq!(sim.world.user.cash(), 30_000);
        assert_eq!(sim.world.user.ledger(Commodity::Oil).benefit, 0);
    }

    #[test]
    fn panels_read_live_state() {
        let mut sim = SimBuilder::new(GameConfig::default()).build().unwrap();
        assert!(sim.world.user.new_loan(5_000, 2));

        let board = sim.world.rate_board();
        assert_eq!((board.loan_rate, board.deposit_rate), (10, 8));
        assert_eq!((board.income_tax, board.replacement_cost), (5, 19));

        let summary = sim.world.finance_summary();
        assert_eq!(summary.cash, 35_000);
        assert_eq!(summary.deposits_total, 10_000);
        assert_eq!(summary.loans_total, 5_000);
        assert_eq!(summary.profit, 5_000);
        assert_eq!((summary.house_rate, summary.land_rate), (10, 10));

        let table = sim.world.bank_table();
        assert_eq!(table.deposits[0], 10_000);
        assert_eq!(table.loans[2], 5_000);
        assert_eq!(table.deposits[1..].iter().sum::<i64>(), 0);

        sim.run_days(31).unwrap();
        let board = sim.world.rate_board();
        assert_eq!(board.loan_rate, sim.world.bank.loan_rate());
        assert_eq!(board.deposit_rate, sim.world.bank.deposit_rate());
    }

    #[test]
    fn secretary_report_follows_the_world() {
        let mut sim = SimBuilder::new(GameConfig::default()).build().unwrap();
        assert!(sim.world.buy_commodity(Commodity::Land, 2));
        let report = sim.world.secretary_report();
        assert_eq!(report.heating_oil, sim.world.secretary.heating_oil());
        assert_eq!(report.land.bought, 2);
        let birthday = sim.world.user.birthday();
        assert_eq!((report.birthday_day, report.birthday_month), (birthday.day(), birthday.month()));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use super::*;

    #[derive(Clone, Debug)]
    enum Action {
        Deposit(i64, u32),
        Loan(i64, u32),
        Buy(usize),
        SellVehicle,
        SellDwelling,
        Trade(bool, bool, u64),
        Wait(u64),
    }

    const ITEMS: [&str; 4] = ["Луаз-969", "ГАЗ-3102", "1-комн", "7-комн"];

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            (1i64..50_000, 1u32..12).prop_map(|(a, t)| Action::Deposit(a, t)),
            (1i64..50_000, 1u32..12).prop_map(|(a, t)| Action::Loan(a, t)),
            (0usize..ITEMS.len()).prop_map(Action::Buy),
            Just(Action::SellVehicle),
            Just(Action::SellDwelling),
            (any::<bool>(), any::<bool>(), 1u64..300).prop_map(|(b, o, n)| Action::Trade(b, o, n)),
            (1u64..40).prop_map(Action::Wait),
        ]
    }

    proptest! {
        #[test]
        fn cash_never_negative(seed in 0u64..1_000, actions in prop::collection::vec(action(), 1..50)) {
            let cfg = GameConfig { seed, ..GameConfig::default() };
            let mut sim = SimBuilder::new(cfg).build().unwrap();
            for action in actions {
                let w = &mut sim.world;
                match action {
                    Action::Deposit(a, t) => { w.user.new_deposit(a, t); }
                    Action::Loan(a, t)    => { w.user.new_loan(a, t); }
                    Action::Buy(i)        => { w.buy_at_market(ITEMS[i]); }
                    Action::SellVehicle   => { w.sell_vehicle_at_market(); }
                    Action::SellDwelling  => { w.sell_dwelling_at_market(); }
                    Action::Trade(buy, oil, n) => {
                        let kind = if oil { Commodity::Oil } else { Commodity::Land };
                        if buy { w.buy_commodity(kind, n); } else { w.sell_commodity(kind, n); }
                    }
                    Action::Wait(days) => sim.run_days(days).unwrap(),
                }
                prop_assert!(sim.world.user.cash() >= 0);
            }
        }
    }
}
