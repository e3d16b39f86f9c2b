//! Headless commersant: plays one game with a scripted player and prints the
//! outcome.
//!
//! ```text
//! headless [--config game.json] [--days N] [--journal DIR]
//! ```
//!
//! `RUST_LOG` controls verbosity (default `info`; `debug` shows every
//! re-roll).

use std::path::PathBuf;

use anyhow::{Context, Result};
use cm_console::{GroupEvent, Key, format_money, human_money, market_menu, parse_catalog_row};
use cm_core::{Category, Commodity, GameConfig, Money, Units};
use cm_output::{CsvJournal, JournalObserver};
use cm_sim::{SimBuilder, SimResult, World};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    config:  Option<PathBuf>,
    days:    Option<u64>,
    journal: Option<PathBuf>,
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config"  => args.config = it.next().map(PathBuf::from),
            "--days"    => args.days = it.next().and_then(|s| s.parse().ok()),
            "--journal" => args.journal = it.next().map(PathBuf::from),
            other       => warn!(arg = other, "ignoring unknown argument"),
        }
    }
    args
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(days) = args.days {
        config.total_days = days;
    }
    Ok(config)
}

// ── Scripted player ───────────────────────────────────────────────────────────

/// Buys a car from the market screen on day one, keeps a deposit rolling,
/// and trades commodities on price thresholds: buy in the bottom quarter of
/// the range, sell everything in the top quarter.
struct Player {
    car_keys: Vec<Key>,
}

impl Player {
    fn new() -> Self {
        // Second vehicle on the list.
        Self { car_keys: vec![Key::Down, Key::Enter] }
    }

    fn act(&mut self, world: &mut World) -> SimResult<()> {
        if world.user.property().vehicle.is_none() && !self.car_keys.is_empty() {
            self.shop_for_car(world);
        }
        if world.user.deposits().is_empty() {
            let amount = world.user.cash() / 5;
            if world.user.new_deposit(amount, 3) {
                info!(deposit = %format_money(amount), "player opened a deposit");
            }
        }
        for kind in Commodity::ALL {
            trade(world, kind);
        }
        Ok(())
    }

    fn shop_for_car(&mut self, world: &mut World) {
        let keys = std::mem::take(&mut self.car_keys);
        let Ok(mut menu) = market_menu(&world.market) else {
            return;
        };
        let Some(GroupEvent::Selected { menu: m, item }) = menu.run(keys) else {
            return;
        };
        let Some(Ok((name, price))) = menu.item(m, item).map(parse_catalog_row) else {
            return;
        };
        if price < world.user.cash() / 2 && world.buy_at_market(&name) {
            info!(car = %name, price = %format_money(price), "player bought a car");
        }
    }
}

fn trade(world: &mut World, kind: Commodity) {
    let range = world.exchange.range(kind);
    let price = world.exchange.price(kind);
    let quarter = (range.high - range.low) / 4;
    let held = world.user.property().units(kind);

    if price <= range.low + quarter {
        let budget = world.user.cash() / 10;
        let amount = Units::try_from(budget / price.max(1)).unwrap_or(0);
        if amount > 0 && world.buy_commodity(kind, amount) {
            info!(%kind, amount, price, "player bought");
        }
    } else if price >= range.high - quarter && held > 0 && world.sell_commodity(kind, held) {
        info!(%kind, amount = held, price, "player sold");
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

fn print_summary(world: &World) {
    let finance = world.finance_summary();
    let rates = world.rate_board();
    let report = world.secretary_report();
    let line = |label: &str, n: Money| println!("{label:<16}{n:>10} {}", human_money(n));

    println!("{} on {}", world.user.name(), world.today());
    line("Cash", finance.cash);
    line("Owed to you", finance.deposits_total);
    line("You owe", finance.loans_total);
    line("Month profit", finance.profit);
    line("Oil benefit", report.oil.benefit);
    line("Land benefit", report.land.benefit);
    println!(
        "Rates           loan {}%  deposit {}%  tax {}%  ВС {}%",
        rates.loan_rate, rates.deposit_rate, rates.income_tax, rates.replacement_cost
    );
    println!(
        "Vehicle         {} (worth {})",
        world.user.property().vehicle.as_deref().unwrap_or("-"),
        format_money(world.user.holding_value(Category::Vehicle, &world.market)),
    );
    println!(
        "Birthday        {:02}.{:02}  heating oil {} barrels",
        report.birthday_day, report.birthday_month, report.heating_oil
    );
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = parse_args();
    let config = load_config(&args)?;
    info!(start = %config.start_date, days = config.total_days, seed = config.seed, "starting game");

    let mut builder = SimBuilder::new(config);
    if let Some(dir) = &args.journal {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        builder = builder.observer(JournalObserver::new(CsvJournal::new(dir)?));
    }
    let mut sim = builder.build()?;

    let mut player = Player::new();
    sim.run_with(|world| player.act(world))?;

    print_summary(&sim.world);
    Ok(())
}
