//! The two fixed alphabets and their symbol lookups.

use crate::error::CodecError;

/// The 32-symbol Crockford-style alphabet. Excludes `I`, `L`, `O` and `U`
/// to avoid visual ambiguity.
pub const C32_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// The 58-symbol Bitcoin-style alphabet. Excludes `0`, `O`, `I` and `l`.
pub const B58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// A fixed ordered symbol set: a bijection between `[0, radix)` and
/// printable symbols.
pub(crate) struct Alphabet {
    symbols: &'static [u8],
}

pub(crate) static C32: Alphabet = Alphabet { symbols: C32_ALPHABET };
pub(crate) static B58: Alphabet = Alphabet { symbols: B58_ALPHABET };

impl Alphabet {
    pub(crate) fn radix(&self) -> u32 {
        self.symbols.len() as u32
    }

    /// Returns the symbol for `index`. The index must be below the radix;
    /// digits produced by the radix converter always are.
    pub(crate) fn symbol(&self, index: u8) -> char {
        self.symbols[usize::from(index)] as char
    }

    /// Returns the index of `symbol`, or `InvalidSymbol` if it is not in
    /// the canonical set. Homoglyph normalization, where applicable,
    /// happens before this lookup.
    pub(crate) fn index_of(&self, symbol: char) -> Result<u8, CodecError> {
        self.symbols
            .iter()
            .position(|&s| char::from(s) == symbol)
            .map(|i| i as u8)
            .ok_or(CodecError::InvalidSymbol { symbol })
    }
}
