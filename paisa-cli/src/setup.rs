use anyhow::Result;
use paisa_store::{CategoryService, JsonFileStore, ProfileService};

use crate::state::{Config, ensure_paisa_home, save_config};

/// One-time setup: create the data directory, seed the default
/// categories and profile, and write config.toml.
pub fn run_setup() -> Result<()> {
    let home = ensure_paisa_home()?;
    let store = JsonFileStore::open_default()?;

    CategoryService::new(&store).seed_defaults()?;
    let profile = ProfileService::new(&store).seed_default()?;

    let cfg = Config::default();
    save_config(&cfg)?;

    println!("paisa home: {}", home.display());
    println!("data dir:   {}", store.dir().display());
    println!("profile:    {} ({})", profile.name, profile.id);
    println!("currency:   {}", cfg.currency_symbol);
    println!("\nAdd your first expense with: paisa add --title \"Lunch\" --amount 250 --category Food");
    Ok(())
}
