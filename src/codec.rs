//! The four operations a host needs: [`count`], [`build`], [`encode`] and
//! [`decode`], plus [`Codec`], which bundles a built tree with its code table.

use std::fmt::Debug;

use log::debug;

use crate::bits::Bits;
use crate::error::{HuffmanError, Result};
use crate::frequency::FreqTable;
use crate::tree::{CodeTable, HuffmanTree};

pub use crate::frequency::count;
pub use crate::tree::encode;

/// Builds a tree from `frequencies` and derives its code table.
pub fn build<S: Ord + Clone + Debug>(
    frequencies: &FreqTable<S>,
) -> Result<(HuffmanTree<S>, CodeTable<S>)> {
    let tree = HuffmanTree::build(frequencies)?;
    let codes = tree.generate_codes()?;
    Ok((tree, codes))
}

pub fn decode<S: Ord + Clone + Debug>(bits: &Bits, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    tree.decode(bits)
}

/// A built tree together with the code table derived from it.
///
/// A `Codec` is never modified after construction; building from new
/// frequencies yields a new value, so a shared `Codec` can keep decoding
/// while its replacement is prepared.
#[derive(Debug, Clone)]
pub struct Codec<S> {
    tree: HuffmanTree<S>,
    codes: CodeTable<S>,
}

impl<S: Ord + Clone + Debug> Codec<S> {
    pub fn from_frequencies(frequencies: &FreqTable<S>) -> Result<Self> {
        let (tree, codes) = build(frequencies)?;
        debug!("Code table built with {} entries", codes.len());
        Ok(Codec { tree, codes })
    }

    pub fn from_symbols<I: IntoIterator<Item = S>>(symbols: I) -> Result<Self> {
        Self::from_frequencies(&count(symbols))
    }

    pub fn encode<'a, I>(&self, symbols: I) -> Result<Bits>
    where
        S: 'a,
        I: IntoIterator<Item = &'a S>,
    {
        encode(symbols, &self.codes)
    }

    pub fn decode(&self, bits: &Bits) -> Result<Vec<S>> {
        self.tree.decode(bits)
    }

    pub fn codes(&self) -> &CodeTable<S> {
        &self.codes
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    /// Length of the stream that encoding the counted input would produce:
    /// the sum of count × codeword length. Symbols without a codeword
    /// contribute nothing. Fails with [`HuffmanError::WeightOverflow`] when
    /// the length does not fit in a `u64`.
    pub fn encoded_len(&self, frequencies: &FreqTable<S>) -> Result<u64> {
        frequencies
            .iter()
            .filter_map(|(symbol, &n)| {
                self.codes.get(symbol).map(|code| (n, code.len() as u64))
            })
            .try_fold(0u64, |total, (n, len)| {
                n.checked_mul(len)
                    .and_then(|bits| total.checked_add(bits))
                    .ok_or(HuffmanError::WeightOverflow)
            })
    }

    /// Mean codeword length weighted by the counts the tree was built from.
    pub fn average_code_len(&self) -> f64 {
        let weight = self.tree.weight();
        if weight == 0 {
            return 0.0;
        }
        let bits: f64 = self
            .leaf_frequencies()
            .iter()
            .map(|(symbol, &n)| n as f64 * self.codes[symbol].len() as f64)
            .sum();
        bits / weight as f64
    }

    fn leaf_frequencies(&self) -> FreqTable<S> {
        let mut frequencies = FreqTable::new();
        let mut stack: Vec<_> = self.tree.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            match node.symbol() {
                Some(symbol) => {
                    frequencies.insert(symbol.clone(), node.weight());
                }
                None => {
                    stack.extend([node.child(false), node.child(true)].into_iter().flatten())
                }
            }
        }
        frequencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_pairs_tree_and_codes() {
        let (tree, codes) = build(&count("hello world".chars())).unwrap();
        assert_eq!(tree.leaf_count(), codes.len());
        assert_eq!(codes.len(), 8);
    }

    #[test]
    fn test_codec_round_trip() {
        let text: Vec<char> = "abracadabra".chars().collect();
        let codec = Codec::from_symbols(text.iter().copied()).unwrap();
        let bits = codec.encode(&text).unwrap();
        let freq = count(text.iter().copied());
        assert_eq!(codec.encoded_len(&freq), Ok(bits.len() as u64));
        assert_eq!(codec.decode(&bits).unwrap(), text);
        assert_eq!(decode(&bits, codec.tree()).unwrap(), text);
    }

    #[test]
    fn test_average_code_len() {
        let codec = Codec::from_symbols("aaabbc".chars()).unwrap();
        assert!((codec.average_code_len() - 1.5).abs() < 1e-12);

        let single = Codec::from_symbols("zzz".chars()).unwrap();
        assert!((single.average_code_len() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_encoded_len_overflow() {
        let codec = Codec::from_symbols("aab".chars()).unwrap();
        let freq = FreqTable::from([('a', u64::MAX / 2), ('b', 1)]);
        assert_eq!(codec.encoded_len(&freq), Ok(u64::MAX / 2 + 1));
        let freq = FreqTable::from([('a', u64::MAX), ('b', 1)]);
        assert_eq!(codec.encoded_len(&freq), Err(HuffmanError::WeightOverflow));

        // c has a two-digit codeword here, so its bit count overflows on its own.
        let codec = Codec::from_symbols("aaabbc".chars()).unwrap();
        let freq = FreqTable::from([('c', u64::MAX / 2)]);
        assert_eq!(codec.encoded_len(&freq), Ok(u64::MAX - 1));
        let freq = FreqTable::from([('c', u64::MAX / 2 + 1)]);
        assert_eq!(codec.encoded_len(&freq), Err(HuffmanError::WeightOverflow));
    }

    #[test]
    fn test_codec_empty_input() {
        let result = Codec::from_symbols(std::iter::empty::<char>());
        assert!(matches!(result, Err(HuffmanError::EmptyAlphabet)));
    }

    #[test]
    fn test_codec_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Codec<char>>();
    }
}
