//! Catalog rows: `{name:<width}{price:>6}` and back.

use cm_core::{Category, Money};
use cm_market::Market;

use crate::{ConsoleError, ConsoleResult, Menu, MenuGroup};

/// Width of the right-aligned price column.
pub const PRICE_WIDTH: usize = 6;

/// One price-list line.  `width` counts characters, so Cyrillic names line
/// up the same as Latin ones.
pub fn catalog_row(name: &str, price: Money, width: usize) -> String {
    format!("{name:<width$}{price:>pw$}", pw = PRICE_WIDTH)
}

/// Split a price-list line back into its name and price.
///
/// The price is the last whitespace-separated word; everything before it,
/// trimmed, is the name.  A name that fills its column leaves no gap before
/// a six-digit price and cannot be split.
pub fn parse_catalog_row(row: &str) -> ConsoleResult<(String, Money)> {
    let bad = || ConsoleError::BadRow(row.to_string());
    let (name, price) = row.trim_end().rsplit_once(char::is_whitespace).ok_or_else(bad)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(bad());
    }
    let price = price.parse().map_err(|_| bad())?;
    Ok((name.to_string(), price))
}

/// Today's price list for one category, padded to the market-wide name
/// width so both columns line up.
pub fn catalog_rows(market: &Market, category: Category) -> Vec<String> {
    let width = market.max_name_width();
    market
        .listings(category)
        .iter()
        .map(|l| catalog_row(&l.name, l.price, width))
        .collect()
}

/// The market screen: vehicles on the left (focused), dwellings on the
/// right.
pub fn market_menu(market: &Market) -> ConsoleResult<MenuGroup> {
    MenuGroup::new(vec![
        Menu::new(catalog_rows(market, Category::Vehicle))?,
        Menu::inactive(catalog_rows(market, Category::Dwelling))?,
    ])
}
