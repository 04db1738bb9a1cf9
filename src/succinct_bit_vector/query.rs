use super::{State, SuccinctBitVector};
use crate::error::{Error, Result};

impl SuccinctBitVector {
    /// Returns the bit at `pos`.
    ///
    /// # Errors
    /// - [`Error::NotBuilt`] if [`build`](Self::build) has not run.
    /// - [`Error::OutOfRange`] if `pos >= N`.
    pub fn lookup(&self, pos: u64) -> Result<bool> {
        let bv = match &self.state {
            State::Built { bv, .. } => bv,
            State::Uninitialized | State::Initialized(_) => return Err(Error::NotBuilt),
        };
        if pos >= bv.length() {
            return Err(Error::OutOfRange {
                index: pos,
                bound: bv.length(),
            });
        }
        Ok(bv.lookup(pos))
    }

    /// Number of bits equal to `bit` in positions `[0, pos]` (inclusive).
    ///
    /// # Errors
    /// - [`Error::NotBuilt`] if [`build`](Self::build) has not run.
    /// - [`Error::InvalidArgument`] if `bit` is not `0` or `1`.
    /// - [`Error::OutOfRange`] if `pos >= N`.
    pub fn rank(&self, pos: u64, bit: u8) -> Result<u64> {
        let (bv, rank) = match &self.state {
            State::Built { bv, rank, .. } => (bv, rank),
            State::Uninitialized | State::Initialized(_) => return Err(Error::NotBuilt),
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
        Ok(if bit == 1 {
            rank.rank1(pos + 1)
        } else {
            rank.rank0(pos + 1)
        })
    }

    /// Position of the `k`-th (0-indexed) bit equal to `bit`.
    ///
    /// # Errors
    /// - [`Error::NotBuilt`] if [`build`](Self::build) has not run.
    /// - [`Error::InvalidArgument`] if `bit` is not `0` or `1`.
    /// - [`Error::OutOfRange`] if `k >= P_bit` (the count of `bit`-bits in
    ///   the whole sequence).
    pub fn select(&self, k: u64, bit: u8) -> Result<u64> {
        let (select_one, select_zero) = match &self.state {
            State::Built {
                select_one,
                select_zero,
                ..
            } => (select_one, select_zero),
            State::Uninitialized | State::Initialized(_) => return Err(Error::NotBuilt),
        };
        if bit > 1 {
            return Err(Error::InvalidArgument {
                reason: format!("bit must be 0 or 1, got {}", bit),
            });
        }
        let index = if bit == 1 { select_one } else { select_zero };
        if k >= index.population() {
            return Err(Error::OutOfRange {
                index: k,
                bound: index.population(),
            });
        }
        Ok(index.select(k))
    }

    /// Total number of one-bits in the sequence. Always available once
    /// [`build`](Self::build) has run: `rank(N-1, 1)`.
    ///
    /// # Errors
    /// [`Error::NotBuilt`] if [`build`](Self::build) has not run.
    pub fn count_ones(&self) -> Result<u64> {
        match &self.state {
            State::Built { select_one, .. } => Ok(select_one.population()),
            State::Uninitialized | State::Initialized(_) => Err(Error::NotBuilt),
        }
    }

    /// Length of the bit sequence, `N`.
    pub fn len(&self) -> Result<u64> {
        match &self.state {
            State::Uninitialized => Err(Error::NotInitialized),
            State::Initialized(bv) => Ok(bv.length()),
            State::Built { bv, .. } => Ok(bv.length()),
        }
    }
}
