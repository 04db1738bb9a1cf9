//! Leaf data structures shared by [`RankIndex`](crate::rank_index::RankIndex) and
//! [`SelectIndex`](crate::select_index::SelectIndex), hidden behind the crate
//! boundary so only [`SuccinctBitVector`](crate::SuccinctBitVector) is public API.

pub(crate) mod bit_vector;
pub(crate) mod select_table;
