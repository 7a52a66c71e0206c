use std::collections::BTreeMap;

use log::debug;

/// Symbol → occurrence count. Ordered so that enumeration, and therefore the
/// shape of a tree built from it, is reproducible.
pub type FreqTable<S> = BTreeMap<S, u64>;

/// Counts how often each distinct symbol occurs. Symbols that never occur are
/// not recorded, so every count is at least 1.
pub fn count<S, I>(symbols: I) -> FreqTable<S>
where
    S: Ord,
    I: IntoIterator<Item = S>,
{
    let mut freq = FreqTable::new();
    for symbol in symbols {
        *freq.entry(symbol).or_insert(0) += 1;
    }
    debug!("Counted {} distinct symbols", freq.len());
    freq
}

pub fn total<S>(freq: &FreqTable<S>) -> u64 {
    freq.values().sum()
}

/// Shannon entropy of the distribution in bits per symbol.
pub fn entropy<S>(freq: &FreqTable<S>) -> f64 {
    let total = total(freq);
    if total == 0 {
        return 0.0;
    }
    let total_f = total as f64;

    let entropy: f64 = freq
        .values()
        .map(|&count| {
            let p = count as f64 / total_f;
            -p * p.log2()
        })
        .sum();

    debug!(
        "Calculated entropy: {:.4} bits/symbol (Total samples: {})",
        entropy, total
    );
    entropy
}
