//! Bitset over tile type indices

use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Fixed-size bitset tracking membership of tile types
///
/// Indices are the zero-based tile type positions of a `TileSet`. Provides
/// O(1) membership testing and whole-set intersection, and iterates members
/// in ascending type order so consumers inherit the deterministic tie-break
/// of the tile set itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeMask {
    bits: BitVec,
    type_count: usize,
}

impl TypeMask {
    /// Create a mask with no types present
    pub fn none(type_count: usize) -> Self {
        Self {
            bits: bitvec![0; type_count],
            type_count,
        }
    }

    /// Create a mask containing every type
    pub fn all(type_count: usize) -> Self {
        Self {
            bits: bitvec![1; type_count],
            type_count,
        }
    }

    /// Insert a type index
    pub fn insert(&mut self, tile_type: usize) {
        if tile_type < self.type_count {
            self.bits.set(tile_type, true);
        }
    }

    /// Test type membership
    pub fn contains(&self, tile_type: usize) -> bool {
        self.bits.get(tile_type).as_deref() == Some(&true)
    }

    /// Intersect this mask with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Test if no types are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count types in the mask
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate member types in ascending order
    pub fn iter_types(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}

impl fmt::Display for TypeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TypeMask({} types: {:?})",
            self.count(),
            self.iter_types().collect::<Vec<_>>()
        )
    }
}
