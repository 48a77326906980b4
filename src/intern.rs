//! Line interning.
//!
//! Maps every distinct line of both sequences to a dense `u32` symbol, so the
//! table fill and the backtrack compare integers instead of strings. Two lines
//! get the same symbol iff they are byte-for-byte equal.

use rustc_hash::FxHashMap;

use crate::tokenize::LineSequence;

/// Interned symbol of a line.
pub type Symbol = u32;

/// Symbol sequences for an old/new pair, sharing one symbol space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interned {
    /// Symbols of the old lines, in order
    pub old: Vec<Symbol>,
    /// Symbols of the new lines, in order
    pub new: Vec<Symbol>,
    /// Number of distinct lines across both sides
    pub distinct: usize,
}

/// Intern both sequences into a shared symbol space.
///
/// Callers bound the line counts before interning, so the symbol count fits in
/// `u32`.
pub fn intern<'a>(old: &LineSequence<'a>, new: &LineSequence<'a>) -> Interned {
    let mut table: FxHashMap<&'a str, Symbol> =
        FxHashMap::with_capacity_and_hasher(old.len() + new.len(), Default::default());

    let mut symbolize = |seq: &LineSequence<'a>| -> Vec<Symbol> {
        seq.iter()
            .map(|line| {
                let next = table.len() as Symbol;
                *table.entry(line).or_insert(next)
            })
            .collect()
    };

    let old = symbolize(old);
    let new = symbolize(new);

    Interned {
        old,
        new,
        distinct: table.len(),
    }
}
