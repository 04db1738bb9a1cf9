mod lifecycle;
mod query;

use std::sync::Arc;

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use crate::internal_data_structure::bit_vector::BitVector;
use crate::rank_index::RankIndex;
use crate::select_index::SelectIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
enum State {
    Uninitialized,
    Initialized(BitVector),
    Built {
        bv: BitVector,
        rank: Arc<RankIndex>,
        select_one: SelectIndex,
        select_zero: SelectIndex,
    },
}

/// A rank/select dictionary over a fixed-length bit sequence.
///
/// Goes through three states in order: `Uninitialized` (just
/// [`construct`](Self::construct)ed) → `Initialized` (after
/// [`init`](Self::init); [`set_bit`](Self::set_bit) is legal here) → `Built`
/// (after [`build`](Self::build); [`lookup`](Self::lookup),
/// [`rank`](Self::rank) and [`select`](Self::select) are legal here). Each
/// operation validates its precondition and reports a mismatch as an
/// [`Error`](crate::Error) rather than panicking.
///
/// `Built` is entirely read-only: every field reachable from a query is
/// immutable, so a built `SuccinctBitVector` may be queried concurrently
/// from many threads, or handed to another thread — ordinary `Send`/`Sync`
/// semantics apply, no unsafe code or additional synchronization is used.
///
/// # Examples
/// ```
/// use succinct_bitvec::SuccinctBitVector;
///
/// let mut sbv = SuccinctBitVector::construct();
/// sbv.init(8).unwrap();
/// for pos in [0, 2, 4, 6] {
///     sbv.set_bit(pos, 1).unwrap();
/// }
/// sbv.build().unwrap();
///
/// assert_eq!(sbv.lookup(2).unwrap(), true);
/// assert_eq!(sbv.rank(3, 1).unwrap(), 2);
/// assert_eq!(sbv.select(0, 1).unwrap(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct SuccinctBitVector {
    state: State,
}
