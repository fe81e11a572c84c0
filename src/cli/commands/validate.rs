//! Validate configuration command.

use anyhow::Result;
use sizer_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Quote API: {}", config.quotes.base_url);
            println!("Quote cache TTL: {}s", config.quotes.cache_ttl_secs);
            println!("Default symbol: {}", config.defaults.symbol);
            println!("Default balance: {}", config.defaults.account_balance);
            println!("Default risk: {}%", config.defaults.risk_percent);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
