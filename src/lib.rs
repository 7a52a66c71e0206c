//! # huffman_coding
//!
//! Huffman coding over any ordered symbol type: count symbol frequencies,
//! build a prefix-free code from them and use it to encode a symbol sequence
//! into bits and back.
//!
//! ```rust
//! use huffman_coding::Codec;
//!
//! let text: Vec<char> = "aaabbc".chars().collect();
//! let codec = Codec::from_symbols(text.iter().copied())?;
//!
//! let bits = codec.encode(&text)?;
//! assert_eq!(bits.to_string(), "000111110");
//! assert_eq!(codec.decode(&bits)?, text);
//! # Ok::<(), huffman_coding::HuffmanError>(())
//! ```
//!
//! Tree shape is fully determined by the frequency table: leaves enter the
//! priority queue in symbol order, equal weights leave it in insertion order,
//! and the first node popped in a merge becomes the `0` branch.

pub mod bits;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod queue;
pub mod tree;

pub use bits::Bits;
pub use codec::{build, count, decode, encode, Codec};
pub use error::{HuffmanError, Result};
pub use frequency::FreqTable;
pub use tree::{CodeTable, HuffmanTree, Node};
