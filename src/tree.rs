use std::collections::BTreeMap;
use std::fmt::Debug;

use log::{debug, trace};

use crate::bits::Bits;
use crate::error::{HuffmanError, Result};
use crate::frequency::FreqTable;
use crate::queue::MinQueue;

/// Symbol → codeword.
pub type CodeTable<S> = BTreeMap<S, Bits>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Child reached by `bit` (`false` = left, `true` = right).
    pub fn child(&self, bit: bool) -> Option<&Node<S>> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    fn merge(left: Node<S>, right: Node<S>) -> Result<Node<S>> {
        let weight = left
            .weight()
            .checked_add(right.weight())
            .ok_or(HuffmanError::WeightOverflow)?;
        Ok(Node::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// A Huffman tree over symbols of type `S`.
///
/// Construction pops the two lightest nodes from a [`MinQueue`] and merges
/// them, the first popped becoming the left child (bit `0`) and the second
/// the right child (bit `1`). Leaves are pushed in the frequency table's
/// order, so identical tables always give identical trees.
///
/// A tree with a single symbol is just a leaf at the root. That symbol is
/// given the one-digit codeword `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Option<Node<S>>,
}

impl<S: Ord + Clone + Debug> HuffmanTree<S> {
    /// An unbuilt tree. Codes and decoding fail with [`HuffmanError::EmptyTree`]
    /// until [`rebuild`](Self::rebuild) succeeds.
    pub fn new() -> Self {
        HuffmanTree { root: None }
    }

    pub fn build(frequencies: &FreqTable<S>) -> Result<Self> {
        let mut tree = Self::new();
        tree.rebuild(frequencies)?;
        Ok(tree)
    }

    /// Replaces the current tree with one built from `frequencies`. The old
    /// nodes are released first; on error the tree is left empty.
    ///
    /// Entries with a count of 0 never occurred and are skipped. The total of
    /// all counts must fit in a `u64`.
    pub fn rebuild(&mut self, frequencies: &FreqTable<S>) -> Result<()> {
        self.root = None;
        debug!(
            "Building Huffman Tree from {} unique symbols",
            frequencies.len()
        );

        let mut queue = MinQueue::with_capacity(frequencies.len());
        for (symbol, &weight) in frequencies.iter().filter(|(_, weight)| **weight > 0) {
            queue.push(
                Node::Leaf {
                    symbol: symbol.clone(),
                    weight,
                },
                weight,
            );
        }
        debug!("Initial queue size: {}", queue.len());
        if queue.is_empty() {
            return Err(HuffmanError::EmptyAlphabet);
        }

        while queue.len() > 1 {
            let (left, _) = queue.pop()?;
            let (right, _) = queue.pop()?;
            let merged = Node::merge(left, right)?;
            let weight = merged.weight();
            queue.push(merged, weight);
        }

        let (root, weight) = queue.pop()?;
        debug!("Tree construction complete. Total weight: {}", weight);
        self.root = Some(root);
        Ok(())
    }

    pub fn root(&self) -> Option<&Node<S>> {
        self.root.as_ref()
    }

    pub fn is_built(&self) -> bool {
        self.root.is_some()
    }

    /// Sum of all symbol counts, 0 for an unbuilt tree.
    pub fn weight(&self) -> u64 {
        self.root.as_ref().map_or(0, Node::weight)
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::depth)
    }

    pub fn leaf_count(&self) -> usize {
        self.root.as_ref().map_or(0, Node::leaf_count)
    }

    /// Derives the codeword of every leaf: `0` for each left step, `1` for
    /// each right step.
    pub fn generate_codes(&self) -> Result<CodeTable<S>> {
        let root = self.root.as_ref().ok_or(HuffmanError::EmptyTree)?;
        let mut table = CodeTable::new();
        match root {
            Node::Leaf { symbol, .. } => {
                table.insert(symbol.clone(), Bits::from(vec![false]));
            }
            Node::Internal { .. } => build_code_table(root, Bits::new(), &mut table),
        }
        Ok(table)
    }

    /// Walks the tree bit by bit, emitting a symbol at every leaf and
    /// restarting from the root.
    pub fn decode(&self, bits: &Bits) -> Result<Vec<S>> {
        let root = self.root.as_ref().ok_or(HuffmanError::EmptyTree)?;
        let mut result = Vec::new();

        if let Node::Leaf { symbol, .. } = root {
            // The single symbol owns the codeword `0`; there is no `1` branch.
            for (position, bit) in bits.iter().enumerate() {
                if bit {
                    return Err(HuffmanError::missing_edge(position));
                }
                result.push(symbol.clone());
            }
            return Ok(result);
        }

        let mut current = root;
        for (position, bit) in bits.iter().enumerate() {
            current = current
                .child(bit)
                .ok_or_else(|| HuffmanError::missing_edge(position))?;
            if let Node::Leaf { symbol, .. } = current {
                result.push(symbol.clone());
                current = root;
            }
        }

        if !std::ptr::eq(current, root) {
            return Err(HuffmanError::truncated(bits.len()));
        }
        debug!("Decoded {} symbols from {} bits", result.len(), bits.len());
        Ok(result)
    }
}

impl<S: Ord + Clone + Debug> Default for HuffmanTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn build_code_table<S: Ord + Clone + Debug>(
    node: &Node<S>,
    prefix: Bits,
    table: &mut CodeTable<S>,
) {
    match node {
        Node::Leaf { symbol, .. } => {
            trace!("Assigning code to symbol {:?} : '{}'", symbol, prefix);
            table.insert(symbol.clone(), prefix);
        }
        Node::Internal { left, right, .. } => {
            build_code_table(left, prefix.extended(false), table);
            build_code_table(right, prefix.extended(true), table);
        }
    }
}

/// Concatenates the codeword of each symbol in order.
pub fn encode<'a, S, I>(symbols: I, codes: &CodeTable<S>) -> Result<Bits>
where
    S: Ord + Debug + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let mut bits = Bits::new();
    for symbol in symbols {
        let code = codes
            .get(symbol)
            .ok_or_else(|| HuffmanError::unknown_symbol(symbol))?;
        bits.append(code);
    }
    debug!("Encoded stream is {} bits long", bits.len());
    Ok(bits)
}
