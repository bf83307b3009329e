//! Analyze command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

use chartist_analysis::Analyzer;
use chartist_config::AppConfig;
use chartist_core::traits::RenderAdapter;
use chartist_core::types::Analysis;
use chartist_data::{CachedSource, CsvPriceSource};
use chartist_render::JsonChartRenderer;

use crate::cli::AnalyzeArgs;

pub async fn run(args: AnalyzeArgs, config_path: &Path) -> Result<()> {
    // A missing config file falls back to defaults so the CLI works standalone
    let config = if config_path.exists() {
        chartist_config::load_config(config_path).context("failed to load configuration")?
    } else {
        AppConfig::default()
    };

    let symbol = args.symbol.unwrap_or_else(|| config.data.symbol.clone());
    let end = args.end.unwrap_or_else(|| Utc::now().date_naive());
    let csv = args
        .data
        .or_else(|| config.data.csv.clone())
        .context("no data file: pass --data or set data.csv in the config")?;

    info!(%symbol, start = %args.start, end = %end, "starting analysis");

    let analyzer = Analyzer::try_new(&config.indicators)?;
    let source = CsvPriceSource::new(&csv)?;

    let analysis = if config.data.cache && !args.no_cache {
        let cached = CachedSource::new(source);
        analyzer.analyze(&cached, &symbol, args.start, end).await?
    } else {
        analyzer.analyze(&source, &symbol, args.start, end).await?
    };

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&analysis)?),
        _ => print_summary(&analysis),
    }

    if let Some(save_path) = &args.save {
        let artifact = JsonChartRenderer::new().pretty().render(&analysis)?;
        std::fs::write(save_path, artifact)?;
        info!("Chart spec saved to {:?}", save_path);
    }

    Ok(())
}

fn print_summary(analysis: &Analysis) {
    println!(
        "{}: {} daily closes analyzed",
        analysis.symbol,
        analysis.prices.len()
    );
    for note in &analysis.notes {
        println!("  note: {note}");
    }

    if let Some(index) = analysis.indicators.first_defined_index() {
        let timestamp = analysis.prices.timestamps()[index];
        if let Some(date) = DateTime::<Utc>::from_timestamp_millis(timestamp) {
            println!("  indicators fully defined from {}", date.date_naive());
        }
    }

    if let Some((_, close)) = analysis.prices.last() {
        println!("  last close: {close:.2}");
    }
    if let Some((_, sma)) = analysis.indicators.sma.last() {
        if sma.is_finite() {
            println!("  last SMA:   {sma:.2}");
        }
    }
    if let Some((_, macd)) = analysis.indicators.macd_line.last() {
        println!("  last MACD:  {macd:.4}");
    }

    println!(
        "  buy signals:  {}{}",
        analysis.signals.buys().len(),
        format_dates(analysis.signals.buys())
    );
    println!(
        "  sell signals: {}{}",
        analysis.signals.sells().len(),
        format_dates(analysis.signals.sells())
    );
}

fn format_dates(timestamps: &[i64]) -> String {
    if timestamps.is_empty() {
        return String::new();
    }
    let dates: Vec<String> = timestamps
        .iter()
        .filter_map(|&t| DateTime::<Utc>::from_timestamp_millis(t))
        .map(|d| d.date_naive().to_string())
        .collect();
    format!(" ({})", dates.join(", "))
}
