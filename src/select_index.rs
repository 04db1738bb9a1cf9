//! Sampled auxiliary index answering `select(k)` — the position of the
//! `k`-th (0-indexed) `b`-bit — in `O(1)`.
//!
//! One `SelectIndex` exists per bit value (`for_one: true` for `b=1`,
//! `false` for `b=0`); both share the same underlying [`RankIndex`] over the
//! base vector via `Arc` (I5).
//!
//! `Q` is indexed by *occurrence rank*, not by position: `Q[m]` is set iff
//! the `m`-th `b`-bit (0-indexed) is the first `b`-bit inside its
//! super-block. Super-blocks that contain *no* `b`-bit contribute no mark —
//! marking them unconditionally would collapse onto the same `Q` position as
//! the nearest preceding populated super-block, since setting an already-set
//! bit is a no-op. `q_rank.rank1(k+1) - 1` therefore gives the index of the
//! marked boundary *among populated super-blocks*, not the raw super-block
//! index; `boundary_super_blocks` maps the former back to the latter so a
//! run of empty super-blocks (e.g. a sparse, clustered bit pattern) can't
//! alias two different super-blocks onto the same answer.

use std::sync::Arc;

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use crate::internal_data_structure::bit_vector::{BitVector, WORD_BITS};
use crate::internal_data_structure::select_table::select_in_word;
use crate::rank_index::{RankIndex, SUPER_BLOCK_BITS, WORDS_PER_SUPER_BLOCK};

/// `b`-bits among the first `bits` bits of `word` (`bits <= 64`), masking off
/// any padding past `bits`. Needed at the base vector's final, possibly
/// partial word — the reference implementation instead relies on that
/// partial word always being the very last thing it touches during its
/// sampling pass. Masking explicitly here does not depend on that ordering.
fn count_b_in_word(word: u64, bits: u64, for_one: bool) -> u64 {
    debug_assert!(bits <= WORD_BITS);
    let masked = if bits == WORD_BITS {
        word
    } else {
        word & ((1u64 << bits) - 1)
    };
    if for_one {
        masked.count_ones() as u64
    } else {
        bits - masked.count_ones() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub(crate) struct SelectIndex {
    for_one: bool,
    population: u64,
    /// Length `population`; `Q[m] = 1` iff the `m`-th `b`-bit starts a new
    /// super-block that contains at least one `b`-bit. Always has at least
    /// one set bit (the first `b`-bit, which starts the first populated
    /// super-block) when `population > 0`.
    q: Option<BitVector>,
    q_rank: Option<RankIndex>,
    /// `boundary_super_blocks[j]` is the raw super-block index of the
    /// super-block whose first `b`-bit set `Q`'s `j`-th one-bit. Recovers
    /// the real super-block index from `q_rank`'s "count of populated
    /// super-blocks seen so far", which is not the same thing whenever an
    /// empty super-block sits between two populated ones.
    boundary_super_blocks: Vec<u64>,
    base_rank: Arc<RankIndex>,
}

impl SelectIndex {
    /// Builds the sampling index for bit value `for_one` over `base_bv`,
    /// reusing the already-built `base_rank` (I5). When no such bit exists
    /// in the vector, `q`/`q_rank` stay `None`; `select` is then unreachable
    /// since `population == 0` admits no valid `k`.
    pub(crate) fn build(base_bv: &BitVector, base_rank: Arc<RankIndex>, for_one: bool) -> Self {
        let n = base_bv.length();
        let population = if for_one {
            base_rank.rank1(n)
        } else {
            base_rank.rank0(n)
        };

        if population == 0 {
            log::debug!(
                "SelectIndex::build(for_one={}): population 0, skipping Q",
                for_one
            );
            return Self {
                for_one,
                population,
                q: None,
                q_rank: None,
                boundary_super_blocks: Vec::new(),
                base_rank,
            };
        }

        let num_super_blocks = base_rank.num_super_blocks();
        let mut q = BitVector::new(population);
        let mut boundary_super_blocks = Vec::new();

        let mut cumulative = 0u64;
        for sblk in 0..num_super_blocks {
            if cumulative >= population {
                break;
            }

            let word_idx = sblk * WORDS_PER_SUPER_BLOCK;
            let bits_here = if (sblk + 1) * SUPER_BLOCK_BITS <= n {
                SUPER_BLOCK_BITS
            } else {
                n.saturating_sub(sblk * SUPER_BLOCK_BITS)
            };
            let mut remaining = bits_here;
            let mut count_here = 0u64;
            for w in 0..WORDS_PER_SUPER_BLOCK {
                let word_bits = remaining.min(WORD_BITS);
                if word_bits == 0 {
                    break;
                }
                let word = base_bv.word_or_zero(word_idx + w);
                count_here += count_b_in_word(word, word_bits, for_one);
                remaining -= word_bits;
            }

            // Only populated super-blocks get a `Q` mark. Marking an empty
            // one too would set the same `Q[cumulative]` bit a second time
            // (a no-op), aliasing it onto the previous populated
            // super-block and losing this one's real index entirely.
            if count_here > 0 {
                q.set_bit(cumulative, true);
                boundary_super_blocks.push(sblk);
                cumulative += count_here;
            }
        }

        let q_rank = RankIndex::build(&q);
        log::debug!(
            "SelectIndex::build(for_one={}): population {}, {} super-blocks, {} populated",
            for_one,
            population,
            num_super_blocks,
            boundary_super_blocks.len()
        );

        Self {
            for_one,
            population,
            q: Some(q),
            q_rank: Some(q_rank),
            boundary_super_blocks,
            base_rank,
        }
    }

    pub(crate) fn population(&self) -> u64 {
        self.population
    }

    /// Position of the `k`-th (0-indexed) `b`-bit.
    ///
    /// # Panics
    /// When `k >= population()` (debug builds only).
    pub(crate) fn select(&self, k: u64) -> u64 {
        debug_assert!(
            k < self.population,
            "k {} out of range (population {})",
            k,
            self.population
        );
        let q_rank = self.q_rank.as_ref().expect("population > 0 implies q_rank built");

        // Number of populated-super-block boundaries among the first k+1
        // occurrences, minus one, indexes into `boundary_super_blocks` to
        // give the actual super-block containing occurrence k. It is not
        // itself that super-block's index whenever an empty super-block
        // precedes it.
        let boundary_idx = q_rank.rank1(k + 1) - 1;
        let sblk = self.boundary_super_blocks[boundary_idx as usize];

        let rank_b = |n: u64| -> u64 {
            if self.for_one {
                self.base_rank.rank1(n)
            } else {
                self.base_rank.rank0(n)
            }
        };

        let record = self.base_rank.record(sblk);
        let base_count = rank_b(sblk * SUPER_BLOCK_BITS);
        let mut rem = k - base_count;

        let w0_count = if self.for_one {
            record.b0_popcount
        } else {
            WORD_BITS - record.b0_popcount
        };

        let (word, word_offset) = if rem < w0_count {
            (record.words[0], 0u64)
        } else {
            rem -= w0_count;
            (record.words[1], WORD_BITS)
        };

        let word_for_select = if self.for_one { word } else { !word };
        sblk * SUPER_BLOCK_BITS + word_offset + select_in_word(word_for_select, rem)
    }
}


#[cfg(test)]
mod select_tests {
    use super::*;

    fn bv_from_bits(bits: &[bool]) -> BitVector {
        let mut bv = BitVector::new(bits.len() as u64);
        for (i, &b) in bits.iter().enumerate() {
            bv.set_bit(i as u64, b);
        }
        bv
    }

    fn naive_select(bits: &[bool], k: u64, target: bool) -> u64 {
        let mut seen = 0u64;
        for (i, &b) in bits.iter().enumerate() {
            if b == target {
                if seen == k {
                    return i as u64;
                }
                seen += 1;
            }
        }
        panic!("k out of range");
    }

    #[test]
    fn finds_each_one_bit_in_order() {
        let bits = vec![true, false, true, true, false, false, true, false];
        let bv = bv_from_bits(&bits);
        let rank = Arc::new(RankIndex::build(&bv));
        let ones = SelectIndex::build(&bv, rank, true);
        for k in 0..ones.population() {
            assert_eq!(ones.select(k), naive_select(&bits, k, true), "k={}", k);
        }
    }

    #[test]
    fn finds_each_zero_bit_in_order() {
        let bits = vec![true, false, true, true, false, false, true, false];
        let bv = bv_from_bits(&bits);
        let rank = Arc::new(RankIndex::build(&bv));
        let zeros = SelectIndex::build(&bv, rank, false);
        for k in 0..zeros.population() {
            assert_eq!(zeros.select(k), naive_select(&bits, k, false), "k={}", k);
        }
    }

    #[test]
    fn spans_many_super_blocks() {
        let bits: Vec<bool> = (0..5000).map(|i| i % 7 == 0).collect();
        let bv = bv_from_bits(&bits);
        let rank = Arc::new(RankIndex::build(&bv));
        let ones = SelectIndex::build(&bv, Arc::clone(&rank), true);
        let zeros = SelectIndex::build(&bv, rank, false);
        for k in (0..ones.population()).step_by(13) {
            assert_eq!(ones.select(k), naive_select(&bits, k, true), "one k={}", k);
        }
        for k in (0..zeros.population()).step_by(17) {
            assert_eq!(zeros.select(k), naive_select(&bits, k, false), "zero k={}", k);
        }
    }

    #[test]
    fn single_bit_vector() {
        let bv = bv_from_bits(&[true]);
        let rank = Arc::new(RankIndex::build(&bv));
        let ones = SelectIndex::build(&bv, rank, true);
        assert_eq!(ones.select(0), 0);
    }

    /// Two widely-separated ten-bit clusters 500 bits apart, with several
    /// entirely-empty super-blocks (S=128) sitting between them. Regression
    /// for the case where an unconditional `Q` mark on every super-block
    /// (including empty ones) aliased a populated super-block's boundary
    /// onto an earlier one, so `select` for the second cluster resolved to
    /// the wrong super-block.
    #[test]
    fn clustered_bits_across_empty_super_blocks() {
        let mut bits = vec![false; 1000];
        for i in 0..10 {
            bits[i] = true;
            bits[500 + i] = true;
        }
        let bv = bv_from_bits(&bits);
        let rank = Arc::new(RankIndex::build(&bv));
        let ones = SelectIndex::build(&bv, Arc::clone(&rank), true);
        let zeros = SelectIndex::build(&bv, rank, false);

        assert_eq!(ones.population(), 20);
        for k in 0..ones.population() {
            assert_eq!(ones.select(k), naive_select(&bits, k, true), "k={}", k);
        }
        for k in 0..zeros.population() {
            assert_eq!(zeros.select(k), naive_select(&bits, k, false), "k={}", k);
        }
    }

    /// Three clusters with runs of several consecutive empty super-blocks
    /// between each, to catch aliasing across more than one skipped
    /// super-block at a time.
    #[test]
    fn many_empty_super_blocks_between_clusters() {
        let mut bits = vec![false; 5000];
        for base in [0usize, 1000, 3000] {
            for i in 0..20 {
                bits[base + i] = true;
            }
        }
        let bv = bv_from_bits(&bits);
        let rank = Arc::new(RankIndex::build(&bv));
        let ones = SelectIndex::build(&bv, Arc::clone(&rank), true);
        let zeros = SelectIndex::build(&bv, rank, false);

        for k in 0..ones.population() {
            assert_eq!(ones.select(k), naive_select(&bits, k, true), "k={}", k);
        }
        for k in 0..zeros.population() {
            assert_eq!(zeros.select(k), naive_select(&bits, k, false), "k={}", k);
        }
    }
}
