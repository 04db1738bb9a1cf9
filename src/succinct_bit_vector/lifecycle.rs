use std::sync::Arc;

use super::{SuccinctBitVector, State};
use crate::error::{Error, Result};
use crate::internal_data_structure::bit_vector::BitVector;
use crate::rank_index::RankIndex;
use crate::select_index::SelectIndex;

impl SuccinctBitVector {
    /// Creates an uninitialized dictionary. Call [`init`](Self::init) before
    /// anything else.
    pub fn construct() -> Self {
        Self {
            state: State::Uninitialized,
        }
    }

    /// Allocates a bit sequence of length `n`, all zeros, and moves to the
    /// `Initialized` state. May be called again from any state to start
    /// over with a fresh sequence.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `n == 0`.
    pub fn init(&mut self, n: u64) -> Result<()> {
        if n == 0 {
            return Err(Error::InvalidArgument {
                reason: "init() length must be > 0".to_string(),
            });
        }
        self.state = State::Initialized(BitVector::new(n));
        Ok(())
    }

    /// Sets the bit at `pos` to `bit`. Only legal in the `Initialized`
    /// state: once [`build`](Self::build) has run, the dictionary is frozen.
    ///
    /// # Errors
    /// - [`Error::NotInitialized`] if [`init`](Self::init) has not run (or
    ///   [`build`](Self::build) already has).
    /// - [`Error::InvalidArgument`] if `bit` is not `0` or `1`.
    /// - [`Error::OutOfRange`] if `pos >= N`.
    pub fn set_bit(&mut self, pos: u64, bit: u8) -> Result<()> {
        let bv = match &mut self.state {
            State::Initialized(bv) => bv,
            State::Uninitialized | State::Built { .. } => return Err(Error::NotInitialized),
        };
        if bit > 1 {
            return Err(Error::InvalidArgument {
                reason: format!("bit must be 0 or 1, got {}", bit),
            });
        }
        if pos >= bv.length() {
            return Err(Error::OutOfRange {
                index: pos,
                bound: bv.length(),
            });
        }
        bv.set_bit(pos, bit == 1);
        Ok(())
    }

    /// Builds the rank and select indexes over the current bit sequence and
    /// moves to the `Built` state. After this, the dictionary is read-only.
    ///
    /// # Errors
    /// [`Error::NotInitialized`] if [`init`](Self::init) has not run.
    pub fn build(&mut self) -> Result<()> {
        let bv = match std::mem::replace(&mut self.state, State::Uninitialized) {
            State::Initialized(bv) => bv,
            other @ (State::Uninitialized | State::Built { .. }) => {
                self.state = other;
                return Err(Error::NotInitialized);
            }
        };

        log::debug!("SuccinctBitVector::build: N={}", bv.length());
        let rank = Arc::new(RankIndex::build(&bv));
        let select_one = SelectIndex::build(&bv, Arc::clone(&rank), true);
        let select_zero = SelectIndex::build(&bv, Arc::clone(&rank), false);

        self.state = State::Built {
            bv,
            rank,
            select_one,
            select_zero,
        };
        Ok(())
    }
}




#[cfg(test)]
mod build_tests {
    use super::*;

    #[test]
    fn illegal_before_init() {
        let mut sbv = SuccinctBitVector::construct();
        assert_eq!(sbv.build(), Err(Error::NotInitialized));
    }

    #[test]
    fn ok_with_no_bits_set() {
        let mut sbv = SuccinctBitVector::construct();
        sbv.init(4).unwrap();
        assert_eq!(sbv.build(), Ok(()));
    }
}
