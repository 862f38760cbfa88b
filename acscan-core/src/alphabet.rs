// Alphabet domains and per-state transition storage
//
// Byte-sized alphabets use dense tables indexed by symbol value; the
// Unicode alphabet uses a sparse map keyed by code point.

use crate::{AcError, AcResult, StateId, ROOT};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The symbol domain patterns and texts are read in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// All 256 byte values; `&str` input is scanned as its UTF-8 bytes
    #[default]
    Byte,

    /// 7-bit ASCII; bytes >= 0x80 are out of range
    Ascii,

    /// Unicode scalar values; text is scanned by `char`
    Unicode,
}

impl Alphabet {
    /// Number of symbols for dense alphabets, `None` for sparse ones
    pub fn width(&self) -> Option<usize> {
        match self {
            Alphabet::Byte => Some(256),
            Alphabet::Ascii => Some(128),
            Alphabet::Unicode => None,
        }
    }

    /// Whether `symbol` belongs to this alphabet
    pub fn contains(&self, symbol: u32) -> bool {
        match self.width() {
            Some(width) => (symbol as usize) < width,
            None => char::from_u32(symbol).is_some(),
        }
    }

    /// Get all alphabets
    pub fn all() -> &'static [Alphabet] {
        &[Alphabet::Byte, Alphabet::Ascii, Alphabet::Unicode]
    }

    /// Iterate the symbols of `text` with their byte offsets
    pub(crate) fn symbols<'a>(&self, text: &'a str) -> Symbols<'a> {
        match self {
            Alphabet::Byte | Alphabet::Ascii => {
                Symbols::Bytes(text.as_bytes().iter().enumerate())
            }
            Alphabet::Unicode => Symbols::Chars(text.char_indices()),
        }
    }

    /// Iterate the symbols of raw `bytes` with their offsets
    ///
    /// Byte-sized alphabets take any sequence; the Unicode alphabet needs
    /// well-formed UTF-8.
    pub(crate) fn decode<'a>(&self, bytes: &'a [u8]) -> AcResult<Symbols<'a>> {
        match self {
            Alphabet::Byte | Alphabet::Ascii => Ok(Symbols::Bytes(bytes.iter().enumerate())),
            Alphabet::Unicode => std::str::from_utf8(bytes)
                .map(|text| Symbols::Chars(text.char_indices()))
                .map_err(|e| AcError::InvalidUtf8 {
                    offset: e.valid_up_to(),
                }),
        }
    }

    /// Check that every symbol is in range, returning the symbol count
    pub(crate) fn validate(&self, symbols: Symbols<'_>) -> AcResult<usize> {
        let mut length = 0;
        for (offset, symbol) in symbols {
            if !self.contains(symbol) {
                return Err(AcError::AlphabetOverflow {
                    symbol,
                    offset,
                    alphabet: *self,
                });
            }
            length += 1;
        }
        Ok(length)
    }

    /// Reject text holding a symbol outside the alphabet
    ///
    /// Only ASCII can fail here: every byte fits the byte alphabet and
    /// decoded Unicode text holds only scalar values.
    pub(crate) fn check_text(&self, text: &[u8]) -> AcResult<()> {
        match self {
            Alphabet::Ascii => match text.iter().position(|b| !b.is_ascii()) {
                Some(offset) => Err(AcError::AlphabetOverflow {
                    symbol: u32::from(text[offset]),
                    offset,
                    alphabet: *self,
                }),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }

    pub(crate) fn new_transitions(&self) -> Transitions {
        match self.width() {
            Some(width) => Transitions::Dense(vec![ROOT; width].into_boxed_slice()),
            None => Transitions::Sparse(AHashMap::default()),
        }
    }

    /// Render a symbol for diagnostics
    pub(crate) fn display_symbol(&self, symbol: u32) -> String {
        match self {
            Alphabet::Byte | Alphabet::Ascii => match u8::try_from(symbol) {
                Ok(b) if b.is_ascii_graphic() || b == b' ' => format!("'{}'", b as char),
                _ => format!("\\x{:02x}", symbol),
            },
            Alphabet::Unicode => match char::from_u32(symbol) {
                Some(c) => format!("'{}'", c.escape_debug()),
                None => format!("U+{:04X}", symbol),
            },
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Byte => write!(f, "byte"),
            Alphabet::Ascii => write!(f, "ascii"),
            Alphabet::Unicode => write!(f, "unicode"),
        }
    }
}

/// Symbols of a text paired with their byte offsets
#[derive(Clone)]
pub(crate) enum Symbols<'a> {
    Bytes(std::iter::Enumerate<std::slice::Iter<'a, u8>>),
    Chars(std::str::CharIndices<'a>),
}

impl Iterator for Symbols<'_> {
    type Item = (usize, u32);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Symbols::Bytes(it) => it.next().map(|(i, &b)| (i, u32::from(b))),
            Symbols::Chars(it) => it.next().map(|(i, c)| (i, u32::from(c))),
        }
    }
}

/// Outgoing edges of one state
///
/// No edge ever targets the root, so `ROOT` marks an empty slot in dense
/// tables.
#[derive(Debug, Clone)]
pub(crate) enum Transitions {
    Dense(Box<[StateId]>),
    Sparse(AHashMap<u32, StateId>),
}

impl Transitions {
    pub(crate) fn get(&self, symbol: u32) -> Option<StateId> {
        match self {
            Transitions::Dense(table) => table
                .get(symbol as usize)
                .copied()
                .filter(|&target| target != ROOT),
            Transitions::Sparse(map) => map.get(&symbol).copied(),
        }
    }

    /// Add an edge. Callers validate the symbol against the alphabet first.
    pub(crate) fn insert(&mut self, symbol: u32, target: StateId) {
        debug_assert_ne!(target, ROOT);
        match self {
            Transitions::Dense(table) => table[symbol as usize] = target,
            Transitions::Sparse(map) => {
                map.insert(symbol, target);
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Transitions::Dense(table) => table.iter().filter(|&&t| t != ROOT).count(),
            Transitions::Sparse(map) => map.len(),
        }
    }

    /// Append all `(symbol, target)` edges to `out`, in ascending symbol order
    pub(crate) fn collect_into(&self, out: &mut Vec<(u32, StateId)>) {
        match self {
            Transitions::Dense(table) => out.extend(
                table
                    .iter()
                    .enumerate()
                    .filter(|&(_, &target)| target != ROOT)
                    .map(|(symbol, &target)| (symbol as u32, target)),
            ),
            Transitions::Sparse(map) => {
                let start = out.len();
                out.extend(map.iter().map(|(&symbol, &target)| (symbol, target)));
                out[start..].sort_unstable_by_key(|&(symbol, _)| symbol);
            }
        }
    }

    /// Approximate heap footprint in bytes
    pub(crate) fn heap_size(&self) -> usize {
        match self {
            Transitions::Dense(table) => std::mem::size_of_val(&**table),
            Transitions::Sparse(map) => {
                map.capacity() * (std::mem::size_of::<u32>() + std::mem::size_of::<StateId>())
            }
        }
    }
}
