//! Factory Method showcase: builds vehicles by key and prints their trips.

use anyhow::{Context, Result};
use vehicle_factory::{application::Showcase, logging};

fn main() -> Result<()> {
    logging::init();

    let showcase = Showcase::default();
    let stdout = std::io::stdout();
    showcase
        .run_factory_method(&mut stdout.lock())
        .context("factory method showcase failed")?;

    Ok(())
}
