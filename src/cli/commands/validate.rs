//! Validate-config command implementation.

use std::path::Path;

use anyhow::{Context, Result};

pub async fn run(config_path: &Path) -> Result<()> {
    let config = chartist_config::load_config(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    config.validate()?;

    println!("Configuration OK");
    println!("  symbol:    {}", config.data.symbol);
    println!(
        "  MACD:      {}/{}/{}",
        config.indicators.macd_short, config.indicators.macd_long, config.indicators.macd_signal
    );
    println!(
        "  Bollinger: {} x {}",
        config.indicators.bollinger_window, config.indicators.bollinger_num_std
    );
    println!("  cache:     {}", config.data.cache);

    Ok(())
}
