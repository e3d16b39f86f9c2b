//! `cm-core`: foundational types for the commersant economic simulation.
//!
//! Every other `cm-*` crate depends on this one.  It has no `cm-*`
//! dependencies and minimal external ones (`chrono`, `rand`, `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`time`]        | `SimDate`, `SimClock`, `Tick`                         |
//! | [`rng`]         | `SimRng` (seedable, injectable)                       |
//! | [`goods`]       | `Money`, `Units`, `Commodity`, `Category`             |
//! | [`config`]      | `GameConfig`, `PriceRange`, `RateRange`, `AccrualMode`|
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load a `GameConfig` from a file.               |

pub mod config;
pub mod error;
pub mod goods;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AccrualMode, GameConfig, PriceRange, RateRange, SeedDeposit};
pub use error::{CoreError, CoreResult};
pub use goods::{Category, Commodity, Money, Units};
pub use rng::SimRng;
pub use time::{SimClock, SimDate, Tick};
