//! Currency wording.

use cm_core::Money;

pub const ONE: &str = "Гробль";
pub const FEW: &str = "Гробля";
pub const MANY: &str = "Гроблей";

/// The form of the currency name that agrees with `n`.
///
/// Russian picks the form from the last two digits: 11–14 always take the
/// genitive plural, otherwise a final 1 takes the singular and a final 2–4
/// the genitive singular.  The sign is ignored.
pub fn human_money(n: Money) -> &'static str {
    let n = n.unsigned_abs();
    if (11..=14).contains(&(n % 100)) {
        return MANY;
    }
    match n % 10 {
        1     => ONE,
        2..=4 => FEW,
        _     => MANY,
    }
}

/// `n` followed by the agreeing currency name, e.g. `"21 Гробль"`.
pub fn format_money(n: Money) -> String {
    format!("{n} {}", human_money(n))
}
