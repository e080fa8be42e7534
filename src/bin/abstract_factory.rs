//! Abstract Factory showcase: prints the bike and scooter family of each brand.

use anyhow::{Context, Result};
use vehicle_factory::{application::Showcase, logging};

fn main() -> Result<()> {
    logging::init();

    let showcase = Showcase::default();
    let stdout = std::io::stdout();
    showcase
        .run_abstract_factory(&mut stdout.lock())
        .context("abstract factory showcase failed")?;

    Ok(())
}
