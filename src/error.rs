use thiserror::Error;

pub type Result<T> = std::result::Result<T, HuffmanError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// `build` was given a frequency table with no entries.
    #[error("cannot build a huffman tree from an empty alphabet")]
    EmptyAlphabet,

    /// Code generation or decoding on a tree that was never built.
    #[error("huffman tree has not been built")]
    EmptyTree,

    /// The symbol has no codeword in the supplied code table.
    #[error("symbol {0} is not present in the code table")]
    UnknownSymbol(String),

    #[error("malformed bit stream at bit {position}: {reason}")]
    MalformedStream { position: usize, reason: &'static str },

    /// The counts add up to more than `u64::MAX`.
    #[error("total symbol weight does not fit in 64 bits")]
    WeightOverflow,

    /// Pop on an empty priority queue. Only reachable through a construction bug.
    #[error("pop from an empty priority queue")]
    EmptyQueue,

    #[error("invalid binary digit {digit:?} at position {position}")]
    InvalidDigit { position: usize, digit: char },
}

impl HuffmanError {
    pub(crate) fn unknown_symbol<S: std::fmt::Debug>(symbol: &S) -> Self {
        HuffmanError::UnknownSymbol(format!("{:?}", symbol))
    }

    pub(crate) fn truncated(position: usize) -> Self {
        HuffmanError::MalformedStream {
            position,
            reason: "stream ends in the middle of a codeword",
        }
    }

    pub(crate) fn missing_edge(position: usize) -> Self {
        HuffmanError::MalformedStream {
            position,
            reason: "bit refers to a branch that does not exist",
        }
    }
}
