use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use paisa_store::{DEFAULT_PROFILE_ID, paisa_home};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub currency_symbol: String,
    pub active_profile: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: paisa_core::DEFAULT_CURRENCY.to_string(),
            active_profile: DEFAULT_PROFILE_ID.to_string(),
        }
    }
}

pub fn ensure_paisa_home() -> Result<PathBuf> {
    let dir = paisa_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_paisa_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Render an amount with the configured currency symbol
pub fn format_money(cfg: &Config, amount: f64) -> String {
    format!("{}{:.2}", cfg.currency_symbol, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        let cfg = Config {
            currency_symbol: "₹".to_string(),
            active_profile: "default".to_string(),
        };
        assert_eq!(format_money(&cfg, 1234.5), "₹1234.50");
    }
}
