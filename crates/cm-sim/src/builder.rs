//! Fluent builder for constructing a [`Sim`].

use cm_bank::Bank;
use cm_core::{GameConfig, SimClock, SimRng};
use cm_ledger::{DaySettlement, Secretary, User};
use cm_market::{Exchange, Market};

use crate::{Sim, SimObserver, SimResult, Subscriber, World};

/// Child-stream labels, one per randomised subsystem.
const BANK_STREAM:      u64 = 1;
const MARKET_STREAM:    u64 = 2;
const EXCHANGE_STREAM:  u64 = 3;
const SECRETARY_STREAM: u64 = 4;
const BIRTHDAY_STREAM:  u64 = 5;

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                              |
/// |---------------------|------------------------------------------------------|
/// | `.subscribers(v)`   | [`Subscriber::standard()`]                           |
/// | `.observer(o)`      | none; observers are appended after the subscribers   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(GameConfig::default())
///     .observer(DateLine)
///     .build()?;
/// sim.run()?;
/// ```
pub struct SimBuilder {
    config:      GameConfig,
    subscribers: Option<Vec<Subscriber>>,
    observers:   Vec<Box<dyn SimObserver>>,
}

impl SimBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            subscribers: None,
            observers:   Vec::new(),
        }
    }

    /// Replace the standard fan-out order.
    ///
    /// Leaving a domain subscriber out freezes that part of the world: a
    /// list without [`Subscriber::Bank`] keeps the opening rates forever.
    pub fn subscribers(mut self, subscribers: Vec<Subscriber>) -> Self {
        self.subscribers = Some(subscribers);
        self
    }

    /// Append an observer after the subscribers.  Observers are notified in
    /// the order they are added.
    pub fn observer(mut self, observer: impl SimObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Validate the configuration, seed every subsystem from its own child
    /// stream and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;

        // ── Seed subsystems ───────────────────────────────────────────────
        let mut root = SimRng::new(config.seed);
        let bank_rng      = root.child(BANK_STREAM);
        let market_rng    = root.child(MARKET_STREAM);
        let exchange_rng  = root.child(EXCHANGE_STREAM);
        let secretary_rng = root.child(SECRETARY_STREAM);
        let mut birthday_rng = root.child(BIRTHDAY_STREAM);

        let birthday = User::roll_birthday(config.birth_year, &mut birthday_rng)?;

        let world = World {
            clock:           SimClock::new(config.start_date),
            bank:            Bank::new(&config, bank_rng),
            market:          Market::new(market_rng),
            exchange:        Exchange::new(&config, config.start_date, exchange_rng),
            user:            User::new(&config, birthday),
            secretary:       Secretary::new(&config, secretary_rng),
            last_settlement: DaySettlement::default(),
            config,
        };

        // ── Register subscribers ──────────────────────────────────────────
        let mut sim = Sim::new(world, Vec::new());
        let subscribers = self.subscribers.unwrap_or_else(Subscriber::standard);
        for subscriber in subscribers {
            sim.register(subscriber)?;
        }
        for observer in self.observers {
            sim.register(Subscriber::Observer(observer))?;
        }
        Ok(sim)
    }
}
