//! Observer trait for presentation panels, journals and progress reporting.

use cm_core::SimDate;

use crate::{SimResult, World};

/// Callbacks invoked by [`Sim`][crate::Sim] around and during the daily
/// fan-out.
///
/// Observers see the world read-only.  They are ordinary subscribers: an
/// observer's `on_tick` runs at its position in the registration order,
/// after every subscriber registered before it has reacted to the same date.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  An `Err` from any hook aborts the
/// fan-out and is returned from [`Sim::advance`][crate::Sim::advance].
///
/// # Example: date display
///
/// ```rust,ignore
/// struct DateLine;
///
/// impl SimObserver for DateLine {
///     fn on_tick(&mut self, date: SimDate, _world: &World) -> SimResult<()> {
///         println!("{date}");
///         Ok(())
///     }
/// }
/// ```
pub trait SimObserver {
    /// Short label used in logs and error messages.
    fn name(&self) -> &str {
        "observer"
    }

    /// Called once by [`Sim::run`][crate::Sim::run] before the first tick.
    fn on_sim_start(&mut self, _world: &World) -> SimResult<()> {
        Ok(())
    }

    /// Called once per simulated day.
    fn on_tick(&mut self, _date: SimDate, _world: &World) -> SimResult<()> {
        Ok(())
    }

    /// Called once by [`Sim::run`][crate::Sim::run] after the final tick.
    fn on_sim_end(&mut self, _world: &World) -> SimResult<()> {
        Ok(())
    }
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
