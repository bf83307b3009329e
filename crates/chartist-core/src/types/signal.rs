//! Buy/sell signal containers.

use serde::Serialize;

/// Buy and sell timestamps over a price series' timestamp domain.
///
/// The two sets are disjoint and sorted; each timestamp is a subset of the
/// domain the signals were generated from. Disjointness is enforced by the
/// signal generator, which reports a violation instead of resolving it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignalSet {
    buy: Vec<i64>,
    sell: Vec<i64>,
}

impl SignalSet {
    /// Create an empty signal set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a buy signal. Timestamps must arrive in increasing order.
    pub fn record_buy(&mut self, timestamp: i64) {
        debug_assert!(self.buy.last().map_or(true, |&t| t < timestamp));
        self.buy.push(timestamp);
    }

    /// Record a sell signal. Timestamps must arrive in increasing order.
    pub fn record_sell(&mut self, timestamp: i64) {
        debug_assert!(self.sell.last().map_or(true, |&t| t < timestamp));
        self.sell.push(timestamp);
    }

    /// Buy timestamps, sorted ascending.
    pub fn buys(&self) -> &[i64] {
        &self.buy
    }

    /// Sell timestamps, sorted ascending.
    pub fn sells(&self) -> &[i64] {
        &self.sell
    }

    /// Check whether a buy fired at the given timestamp.
    pub fn is_buy(&self, timestamp: i64) -> bool {
        self.buy.binary_search(&timestamp).is_ok()
    }

    /// Check whether a sell fired at the given timestamp.
    pub fn is_sell(&self, timestamp: i64) -> bool {
        self.sell.binary_search(&timestamp).is_ok()
    }

    /// Total number of signals.
    pub fn len(&self) -> usize {
        self.buy.len() + self.sell.len()
    }

    /// Check if no signal fired.
    pub fn is_empty(&self) -> bool {
        self.buy.is_empty() && self.sell.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let mut signals = SignalSet::new();
        signals.record_buy(10);
        signals.record_buy(30);
        signals.record_sell(20);

        assert!(signals.is_buy(10));
        assert!(signals.is_buy(30));
        assert!(!signals.is_buy(20));
        assert!(signals.is_sell(20));
        assert_eq!(signals.len(), 3);
        assert!(!signals.is_empty());
    }

    #[test]
    fn test_empty() {
        let signals = SignalSet::new();
        assert!(signals.is_empty());
        assert!(!signals.is_buy(0));
    }
}
