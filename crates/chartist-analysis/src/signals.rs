//! Crossover signal generation.
//!
//! A buy fires where the price closes below the lower Bollinger band while
//! the MACD line sits above its signal line; a sell fires on the mirrored
//! condition. Every qualifying timestamp fires independently: no smoothing,
//! no deduplication, no minimum gap between consecutive signals.

use chartist_core::error::SignalError;
use chartist_core::types::{IndicatorBundle, SignalSet, TimeSeries};

/// Generate buy/sell signals from a price series and its indicator bundle.
///
/// Timestamps where any of the five operands (price, lower band, upper
/// band, MACD line, signal line) is undefined are excluded from both sets.
/// The two predicates require opposite band and MACD relations, so a
/// timestamp can never satisfy both; if one ever does, that is a logic
/// error and is reported as [`SignalError::Conflict`] rather than resolved.
pub fn generate_signals(
    prices: &TimeSeries,
    indicators: &IndicatorBundle,
) -> Result<SignalSet, SignalError> {
    let n = prices.len();
    let operand_series: [(&'static str, &TimeSeries); 4] = [
        ("lower band", &indicators.lower_band),
        ("upper band", &indicators.upper_band),
        ("macd line", &indicators.macd_line),
        ("signal line", &indicators.signal_line),
    ];
    for (name, series) in operand_series {
        if series.len() != n {
            return Err(SignalError::LengthMismatch {
                series: name,
                expected: n,
                actual: series.len(),
            });
        }
    }

    let lower = indicators.lower_band.values();
    let upper = indicators.upper_band.values();
    let macd = indicators.macd_line.values();
    let signal = indicators.signal_line.values();

    let mut signals = SignalSet::new();
    for (i, (timestamp, price)) in prices.iter().enumerate() {
        let operands = [price, lower[i], upper[i], macd[i], signal[i]];
        if operands.iter().any(|v| !v.is_finite()) {
            continue;
        }

        let buy = price < lower[i] && macd[i] > signal[i];
        let sell = price > upper[i] && macd[i] < signal[i];
        match (buy, sell) {
            (true, true) => return Err(SignalError::Conflict { timestamp }),
            (true, false) => signals.record_buy(timestamp),
            (false, true) => signals.record_sell(timestamp),
            (false, false) => {}
        }
    }

    Ok(signals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: Vec<f64>) -> TimeSeries {
        let timestamps = (0..values.len() as i64).map(|i| i * 86_400_000).collect();
        TimeSeries::new(timestamps, values).unwrap()
    }

    fn bundle(
        prices: &TimeSeries,
        lower: Vec<f64>,
        upper: Vec<f64>,
        macd: Vec<f64>,
        signal: Vec<f64>,
    ) -> IndicatorBundle {
        let mid: Vec<f64> = lower
            .iter()
            .zip(upper.iter())
            .map(|(l, u)| (l + u) / 2.0)
            .collect();
        let histogram: Vec<f64> = macd.iter().zip(signal.iter()).map(|(m, s)| m - s).collect();
        IndicatorBundle::new(
            prices,
            prices.with_values(mid).unwrap(),
            prices.with_values(upper).unwrap(),
            prices.with_values(lower).unwrap(),
            prices.with_values(macd).unwrap(),
            prices.with_values(signal).unwrap(),
            prices.with_values(histogram).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_buy_and_sell_conditions() {
        let prices = series(vec![8.0, 10.0, 13.0]);
        // index 0: below lower band with MACD above signal -> buy
        // index 1: inside the bands -> nothing
        // index 2: above upper band with MACD below signal -> sell
        let indicators = bundle(
            &prices,
            vec![9.0, 9.0, 9.0],
            vec![12.0, 12.0, 12.0],
            vec![1.0, 1.0, -1.0],
            vec![0.0, 0.0, 0.0],
        );

        let signals = generate_signals(&prices, &indicators).unwrap();
        assert_eq!(signals.buys(), &[0]);
        assert_eq!(signals.sells(), &[2 * 86_400_000]);
    }

    #[test]
    fn test_band_condition_alone_is_not_enough() {
        let prices = series(vec![8.0, 13.0]);
        // Band breaches without the MACD relation stay silent
        let indicators = bundle(
            &prices,
            vec![9.0, 9.0],
            vec![12.0, 12.0],
            vec![-1.0, 1.0],
            vec![0.0, 0.0],
        );

        let signals = generate_signals(&prices, &indicators).unwrap();
        assert!(signals.is_empty());
    }

    #[test]
    fn test_undefined_operands_are_excluded() {
        let prices = series(vec![8.0, 8.0]);
        // index 0 would be a buy, but its bands are still warming up
        let indicators = bundle(
            &prices,
            vec![f64::NAN, 9.0],
            vec![f64::NAN, 12.0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
        );

        let signals = generate_signals(&prices, &indicators).unwrap();
        assert_eq!(signals.buys(), &[86_400_000]);
        assert_eq!(signals.sells(), &[] as &[i64]);
    }

    #[test]
    fn test_consecutive_signals_all_fire() {
        let prices = series(vec![8.0, 8.0, 8.0]);
        let indicators = bundle(
            &prices,
            vec![9.0, 9.0, 9.0],
            vec![12.0, 12.0, 12.0],
            vec![1.0, 1.0, 1.0],
            vec![0.0, 0.0, 0.0],
        );

        let signals = generate_signals(&prices, &indicators).unwrap();
        assert_eq!(signals.buys().len(), 3);
    }

    #[test]
    fn test_mutual_exclusivity() {
        // Noisy series: no timestamp may land in both sets
        let values: Vec<f64> = (0..200)
            .map(|i| 100.0 + (i as f64 * 1.3).sin() * 8.0 + (i as f64 * 0.11).cos() * 3.0)
            .collect();
        let prices = series(values.clone());

        let macd: Vec<f64> = (0..200).map(|i| (i as f64 * 0.5).sin()).collect();
        let signal: Vec<f64> = vec![0.0; 200];
        let lower: Vec<f64> = values.iter().map(|_| 97.0).collect();
        let upper: Vec<f64> = values.iter().map(|_| 103.0).collect();
        let indicators = bundle(&prices, lower, upper, macd, signal);

        let signals = generate_signals(&prices, &indicators).unwrap();
        assert!(!signals.is_empty());
        for &t in signals.buys() {
            assert!(!signals.is_sell(t));
        }
        for &t in signals.sells() {
            assert!(!signals.is_buy(t));
        }
    }

    #[test]
    fn test_length_mismatch_is_reported() {
        let prices = series(vec![8.0, 10.0, 13.0]);
        let short = series(vec![9.0, 9.0]);
        let full = prices.with_values(vec![0.0, 0.0, 0.0]).unwrap();

        // Bypass the bundle constructor to feed a misaligned series
        let indicators = IndicatorBundle {
            sma: full.clone(),
            upper_band: full.clone(),
            lower_band: short,
            macd_line: full.clone(),
            signal_line: full.clone(),
            histogram: full,
        };

        let result = generate_signals(&prices, &indicators);
        assert!(matches!(
            result,
            Err(SignalError::LengthMismatch {
                series: "lower band",
                ..
            })
        ));
    }
}
