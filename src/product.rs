use crate::config::MulConfig;
use crate::core::{Word, bit_len, words_for_bits};
use crate::error::Error;
use crate::mul::mul_words;

/// The size of a product written by `product`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
  /// Trimmed word length.
  pub words: usize,
  /// Minimal bit length.  Zero has no bits.
  pub bits: usize,
}

/// Check that `declared` bits fit in `ws` and can hold its value.
fn check_bits(ws: &[Word], declared: usize) -> Result<(), Error> {
  let actual = bit_len(ws);
  if words_for_bits(declared) > ws.len() || actual > declared {
    return Err(Error::BitLength { declared, words: ws.len(), actual })
  }
  Ok(())
}

/// Multiply two magnitudes given with their word and bit lengths.
///
/// `ba` and `bb` are the declared bit lengths of `a` and `b`.  Each must
/// fit in the words of its operand and be large enough for its value.
/// `c` must hold `a.len() + b.len()` words, all of which are overwritten.
/// The result gives the trimmed word length and the minimal bit length of
/// the product, which is at most `ba + bb`.
pub fn product(a: &[Word], ba: usize, b: &[Word], bb: usize, c: &mut [Word],
               config: &MulConfig) -> Result<Product, Error> {
  check_bits(a, ba)?;
  check_bits(b, bb)?;
  Error::check_capacity(a.len() + b.len(), c.len())?;

  let words = mul_words(a, b, c, config);
  let bits  = bit_len(&c[.. words]);
  debug_assert!(bits <= ba + bb);

  tracing::debug!(wa = a.len(), wb = b.len(), words, bits, "product");
  Ok(Product { words, bits })
}
