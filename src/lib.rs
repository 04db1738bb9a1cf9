//! # succinct-bitvec
//!
//! A succinct rank/select dictionary over a fixed-length bit sequence:
//! after a one-time [`build`](SuccinctBitVector::build), `lookup`, `rank`
//! and `select` all answer in O(1) time using `o(N)` auxiliary space on top
//! of the raw bits.
//!
//! ```
//! use succinct_bitvec::SuccinctBitVector;
//!
//! let mut sbv = SuccinctBitVector::construct();
//! sbv.init(8).unwrap();
//! for pos in [0, 2, 4, 6] {
//!     sbv.set_bit(pos, 1).unwrap();
//! }
//! sbv.build().unwrap();
//!
//! assert_eq!(sbv.rank(3, 1).unwrap(), 2);
//! assert_eq!(sbv.select(2, 1).unwrap(), 4);
//! ```

pub use bit_string::BitString;
pub use error::{Error, Result};
pub use succinct_bit_vector::SuccinctBitVector;

pub mod bit_string;
mod error;
mod internal_data_structure;
mod rank_index;
mod select_index;
mod succinct_bit_vector;
