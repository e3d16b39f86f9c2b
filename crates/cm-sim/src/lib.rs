//! `cm-sim`: the daily fan-out for the commersant simulation.
//!
//! # Daily fan-out
//!
//! ```text
//! advance():
//!   date := clock.advance()            one calendar day
//!   for subscriber in registration order:
//!     Ledger     accrue, settle maturities, reset monthly profit
//!     Bank       redraw rates on the 1st
//!     Market     re-roll goods on the 1st
//!     Exchange   clear history on 1 Jan, re-roll and record on the 1st
//!     Secretary  re-roll the heating requirement on the 1st
//!     Observer   read-only view of the world (panels, journals)
//!   the first error aborts the fan-out and is returned
//! ```
//!
//! The standard order settles the ledger before the bank redraws, so on the
//! 1st the player's entries compound at last month's rates.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cm_core::GameConfig;
//! use cm_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::new(GameConfig::default()).build()?;
//! assert!(sim.world.buy_at_market("Москвич-412"));
//! sim.run_days(31)?;
//! println!("{:?}", sim.world.finance_summary());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod subscriber;
pub mod world;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{ObserverError, SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use subscriber::Subscriber;
pub use world::{BankTable, FinanceSummary, RateBoard, World};
