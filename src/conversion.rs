use crate::WordVec;
use crate::core::Word;

impl From<u32> for WordVec {
  fn from(value: u32) -> Self { WordVec::from_words(vec![value]) }
}

impl From<u64> for WordVec {
  fn from(value: u64) -> Self {
    WordVec::from_words(vec![value as Word, (value >> 32) as Word])
  }
}

impl From<Vec<Word>> for WordVec {
  fn from(words: Vec<Word>) -> Self { WordVec::from_words(words) }
}

/// The digits of a `BigUint` in base 2^32 are exactly our words.
impl From<&num::BigUint> for WordVec {
  fn from(x: &num::BigUint) -> Self { WordVec::from_words(x.to_u32_digits()) }
}

impl From<&WordVec> for num::BigUint {
  fn from(x: &WordVec) -> Self { num::BigUint::from_slice(x.as_slice()) }
}
