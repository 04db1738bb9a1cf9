/// Provides validated string representation of bit sequence.
///
/// '0' is interpreted as _0_.
/// '1' is interpreted as _1_.
/// '_' is just ignored.
///
/// # Examples
/// ```
/// use succinct_bitvec::BitString;
///
/// let bs = BitString::new("01");
/// assert_eq!(bs.str(), "01");
///
/// let bs = BitString::new("0111_0101");
/// assert_eq!(bs.str(), "01110101");
/// ```
///
/// # Panics
/// When:
/// - `s` contains any character other than '0', '1', and '_'.
/// - `s` does not contain any '0' or '1'
pub struct BitString {
    s: String,
}

impl BitString {
    /// Constructor.
    pub fn new(s: &str) -> BitString {
        let parsed = s
            .chars()
            .filter(|c| match c {
                '0' => true,
                '1' => true,
                '_' => false,
                _ => panic!("`str` must consist of '0' or '1'. '{}' included.", c),
            })
            .collect::<String>();

        assert!(!parsed.is_empty(), "`str` must contain any '0' or '1'.");

        BitString {
            s: String::from(parsed),
        }
    }

    /// Getter.
    pub fn str(&self) -> &str {
        &self.s
    }

    /// Builds and `build()`s a [`SuccinctBitVector`](crate::SuccinctBitVector)
    /// with this string's bits, in order.
    ///
    /// # Examples
    /// ```
    /// use succinct_bitvec::BitString;
    ///
    /// let sbv = BitString::new("0100_1").build_succinct_bit_vector();
    /// assert_eq!(sbv.lookup(0).unwrap(), false);
    /// assert_eq!(sbv.lookup(1).unwrap(), true);
    /// assert_eq!(sbv.lookup(4).unwrap(), true);
    /// ```
    pub fn build_succinct_bit_vector(&self) -> crate::SuccinctBitVector {
        let mut sbv = crate::SuccinctBitVector::construct();
        sbv.init(self.s.len() as u64)
            .expect("BitString is never empty");
        for (pos, c) in self.s.chars().enumerate() {
            if c == '1' {
                sbv.set_bit(pos as u64, 1).expect("pos is within length by construction");
            }
        }
        sbv.build().expect("init() was just called");
        sbv
    }
}
