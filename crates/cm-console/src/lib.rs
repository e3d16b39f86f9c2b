//! `cm-console`: presentation contracts for the commersant console.
//!
//! Nothing here draws anything.  These are the pieces a terminal front end
//! needs that are still worth testing on their own:
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`money`]    | Russian agreement of the currency name                     |
//! | [`validate`] | Typed-in integers, deposit terms, months                   |
//! | [`menu`]     | Pick-one-or-cancel [`Menu`] and side-by-side [`MenuGroup`] |
//! | [`format`]   | Price-list rows and the market screen's menus              |

pub mod error;
pub mod format;
pub mod menu;
pub mod money;
pub mod validate;


pub use error::{ConsoleError, ConsoleResult};
pub use format::{PRICE_WIDTH, catalog_row, catalog_rows, market_menu, parse_catalog_row};
pub use menu::{GroupEvent, Key, Menu, MenuEvent, MenuGroup};
pub use money::{format_money, human_money};
pub use validate::{
    MAX_TERM, is_integer_string, is_valid_month, is_valid_term, parse_amount, parse_month, parse_term,
    parse_units,
};
