//! Fan-out subscribers.

use std::fmt;

use crate::SimObserver;

/// One entry in the fan-out list.
///
/// The domain variants name a part of the [`World`][crate::World] that
/// reacts to the date itself; each may be registered at most once.
/// `Observer` wraps anything else that wants to be told about the date and
/// may appear any number of times.
pub enum Subscriber {
    /// Settle the player's books (accrual, maturities, monthly profit).
    Ledger,
    /// Redraw bank rates on the 1st.
    Bank,
    /// Re-roll goods prices on the 1st.
    Market,
    /// Re-roll commodity prices on the 1st; clear history on 1 January.
    Exchange,
    /// Re-roll the heating requirement on the 1st.
    Secretary,
    Observer(Box<dyn SimObserver>),
}

impl Subscriber {
    /// Wrap an observer.
    pub fn observer(observer: impl SimObserver + 'static) -> Self {
        Subscriber::Observer(Box::new(observer))
    }

    /// The standard order: the ledger settles at yesterday's rates, then the
    /// bank, market and exchange re-roll, then the secretary.
    pub fn standard() -> Vec<Subscriber> {
        vec![
            Subscriber::Ledger,
            Subscriber::Bank,
            Subscriber::Market,
            Subscriber::Exchange,
            Subscriber::Secretary,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            Subscriber::Ledger      => "ledger",
            Subscriber::Bank        => "bank",
            Subscriber::Market      => "market",
            Subscriber::Exchange    => "exchange",
            Subscriber::Secretary   => "secretary",
            Subscriber::Observer(o) => o.name(),
        }
    }

    /// `Some(label)` for a domain subscriber, `None` for an observer.
    pub(crate) fn domain_label(&self) -> Option<&'static str> {
        match self {
            Subscriber::Ledger      => Some("ledger"),
            Subscriber::Bank        => Some("bank"),
            Subscriber::Market      => Some("market"),
            Subscriber::Exchange    => Some("exchange"),
            Subscriber::Secretary   => Some("secretary"),
            Subscriber::Observer(_) => None,
        }
    }
}

impl fmt::Debug for Subscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subscriber::Observer(o) => f.debug_tuple("Observer").field(&o.name()).finish(),
            other => f.write_str(other.label()),
        }
    }
}
