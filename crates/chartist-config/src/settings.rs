//! Configuration structures.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use chartist_analysis::{Analyzer, AnalyzerParams};
use chartist_core::error::ChartError;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub indicators: AnalyzerParams,
}

impl AppConfig {
    /// Validate the configuration the same way the pipeline would.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.data.symbol.is_empty() {
            return Err(ChartError::Config("data.symbol must not be empty".into()));
        }
        Analyzer::try_new(&self.indicators)
            .map_err(|e| ChartError::Config(e.to_string()))?;
        Ok(())
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "chartist".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Data loader settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Instrument symbol analyzed by default
    pub symbol: String,
    /// CSV file with daily closes
    pub csv: Option<PathBuf>,
    /// Wrap the loader in the (symbol, start, end) read-through cache
    pub cache: bool,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            symbol: "GLD".to_string(),
            csv: None,
            cache: true,
        }
    }
}
