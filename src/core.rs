//! Magnitudes stored as little-endian arrays of 32 bit words.

pub type Word = u32;

/// Accumulator wide enough for a product of two words plus two carries.
pub type DoubleWord = u64;

/// Signed accumulator used when propagating borrows.
pub type SignedDoubleWord = i64;

/// The number of bits in a word.
pub const WORD_BITS: usize = Word::BITS as usize;

/// The length of `ws` once the most significant zero words are dropped.
pub fn trimmed_len(ws: &[Word]) -> usize {
  let mut n = ws.len();
  while n > 0 && ws[n - 1] == 0 { n -= 1 }
  n
}

/// The view of `ws` without its most significant zero words.
pub fn trimmed(ws: &[Word]) -> &[Word] {
  &ws[.. trimmed_len(ws)]
}

/// The minimal number of bits needed to represent the value in `ws`.
/// Zero needs no bits.
pub fn bit_len(ws: &[Word]) -> usize {
  let n = trimmed_len(ws);
  if n == 0 { return 0 }
  n * WORD_BITS - ws[n - 1].leading_zeros() as usize
}

/// Number of words needed to store a value of the given bit length.
pub fn words_for_bits(bits: usize) -> usize {
  bits.div_ceil(WORD_BITS)
}


/// A non-negative integer of arbitrary size.
///
///   * The less significant parts of the value are stored in the elements
///     with lower indexes (little endian).
///   * The word length is whatever the vector was built with, and it may
///     include zero words at the most significant end.  Comparisons are
///     by value, so `[1,0]` and `[1]` are equal.
#[derive(Clone, Debug, Default)]
pub struct WordVec {
  words: Vec<Word>
}

impl WordVec {

  /// The value 0, with no words.
  pub fn zero() -> WordVec { WordVec { words: Vec::new() } }

  /// A 0 initialized vector of the given word length.
  pub fn zeroed(len: usize) -> WordVec { WordVec { words: vec![0; len] } }

  /// Wrap existing words, least significant first.  No trimming happens.
  pub fn from_words(words: Vec<Word>) -> WordVec { WordVec { words } }

  /// The number of words, including any zero words at the top.
  pub fn len(&self) -> usize { self.words.len() }

  /// Is this vector empty (i.e., length 0, not just value 0).
  pub fn is_empty(&self) -> bool { self.words.is_empty() }

  /// Is the value 0.
  pub fn is_zero(&self) -> bool { trimmed_len(&self.words) == 0 }

  /// The minimal number of bits needed for the value.
  pub fn bits(&self) -> usize { bit_len(&self.words) }

  /// Gain access to the words, least significant first.
  pub fn as_slice(&self) -> &[Word] { &self.words }

  /// Gain access to the words, least significant first.
  pub fn as_slice_mut(&mut self) -> &mut [Word] { &mut self.words }

  /// The words without any most significant zero words.
  pub fn trimmed(&self) -> &[Word] { trimmed(&self.words) }

  /// Drop zero words at the most significant end.
  pub fn trim(&mut self) {
    let n = trimmed_len(&self.words);
    self.words.truncate(n);
  }

  /// Give up the underlying words.
  pub fn into_words(self) -> Vec<Word> { self.words }

  /// Keep the first `len` words of a result buffer and drop the rest.
  pub(crate) fn from_buffer(mut words: Vec<Word>, len: usize) -> WordVec {
    words.truncate(len);
    WordVec { words }
  }
}
