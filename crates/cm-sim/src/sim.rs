//! The `Sim` struct and its daily fan-out.

use cm_core::SimDate;
use tracing::{debug, info};

use crate::{SimError, SimResult, Subscriber, World};

/// The main simulation runner.
///
/// `Sim` owns the [`World`] and the ordered subscriber list.  Each call to
/// [`advance`][Sim::advance] moves the clock forward one day and hands the
/// new date to every subscriber in registration order.  The first error
/// stops the fan-out and is returned; subscribers after the failing one do
/// not see the date.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    /// The simulation state.  Read it freely between ticks; player actions
    /// mutate it through [`World`]'s methods.
    pub world: World,

    subscribers: Vec<Subscriber>,
}

impl Sim {
    pub(crate) fn new(world: World, subscribers: Vec<Subscriber>) -> Self {
        Self { world, subscribers }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one day and fan the new date out.
    pub fn advance(&mut self) -> SimResult<SimDate> {
        let date = self.world.clock.advance()?;
        for subscriber in self.subscribers.iter_mut() {
            self.world.dispatch(subscriber, date)?;
        }
        debug!(%date, tick = %self.world.clock.current_tick, "day complete");
        Ok(date)
    }

    /// Run from the current day until `config.total_days` days have
    /// elapsed, with observer start and end hooks around the loop.
    pub fn run(&mut self) -> SimResult<()> {
        self.run_with(|_| Ok(()))
    }

    /// Like [`run`][Sim::run], but `player` acts on the world before each
    /// day is advanced.  This is where a front end forwards the day's key
    /// presses.
    pub fn run_with<F>(&mut self, mut player: F) -> SimResult<()>
    where
        F: FnMut(&mut World) -> SimResult<()>,
    {
        self.notify_start()?;
        while self.world.clock.elapsed_days() < self.world.config.total_days {
            player(&mut self.world)?;
            self.advance()?;
        }
        self.notify_end()?;
        info!(
            date = %self.world.today(),
            cash = self.world.user.cash(),
            "simulation finished"
        );
        Ok(())
    }

    /// Advance exactly `n` days, ignoring `total_days`.  Observer start and
    /// end hooks are not called.
    pub fn run_days(&mut self, n: u64) -> SimResult<()> {
        for _ in 0..n {
            self.advance()?;
        }
        Ok(())
    }

    /// Append a subscriber to the end of the fan-out order.
    ///
    /// A domain subscriber that is already registered is refused.  The
    /// fan-out holds `&mut self`, so nothing can register while it runs.
    pub fn register(&mut self, subscriber: Subscriber) -> SimResult<()> {
        if let Some(label) = subscriber.domain_label() {
            if self.subscribers.iter().any(|s| s.domain_label() == Some(label)) {
                return Err(SimError::DuplicateSubscriber(label));
            }
        }
        debug!(subscriber = subscriber.label(), "registered");
        self.subscribers.push(subscriber);
        Ok(())
    }

    /// Labels of the registered subscribers, in fan-out order.
    pub fn subscriber_labels(&self) -> Vec<&str> {
        self.subscribers.iter().map(Subscriber::label).collect()
    }

    #[inline]
    pub fn today(&self) -> SimDate {
        self.world.today()
    }

    // ── Observer hooks ────────────────────────────────────────────────────

    fn notify_start(&mut self) -> SimResult<()> {
        for subscriber in self.subscribers.iter_mut() {
            if let Subscriber::Observer(observer) = subscriber {
                observer.on_sim_start(&self.world)?;
            }
        }
        Ok(())
    }

    fn notify_end(&mut self) -> SimResult<()> {
        for subscriber in self.subscribers.iter_mut() {
            if let Subscriber::Observer(observer) = subscriber {
                observer.on_sim_end(&self.world)?;
            }
        }
        Ok(())
    }
}
