use crate::WordVec;
use crate::arith::{add_words, add_assign_words, borrow_chain};
use crate::config::MulConfig;
use crate::core::{Word, DoubleWord, WORD_BITS, trimmed, trimmed_len};
use crate::error::Error;


/// `c[..a.len()+b.len()] = a * b` by the quadratic method.
/// Returns the trimmed length of the product.
pub(crate) fn schoolbook_words(a: &[Word], b: &[Word], c: &mut [Word])
  -> usize {
  let c = &mut c[.. a.len() + b.len()];
  c.fill(0);

  for (i, &x) in a.iter().enumerate() {
    let mut carry: DoubleWord = 0;
    for (j, &y) in b.iter().enumerate() {
      let p = (x as DoubleWord) * (y as DoubleWord)
            + c[i + j] as DoubleWord
            + carry;
      c[i + j] = p as Word;
      carry    = p >> WORD_BITS;
    }
    c[i + b.len()] = carry as Word;
  }

  trimmed_len(c)
}

/// `c[..a.len()+b.len()] = a * b`, picking the method by operand size.
/// Returns the trimmed length of the product.
pub(crate) fn mul_words(a: &[Word], b: &[Word], c: &mut [Word],
                        config: &MulConfig) -> usize {
  let tot = a.len() + b.len();
  let a   = trimmed(a);
  let b   = trimmed(b);
  c[a.len() + b.len() .. tot].fill(0);

  if a.is_empty() || b.is_empty() {
    c[.. a.len() + b.len()].fill(0);
    return 0
  }

  if config.use_karatsuba(a.len(), b.len()) {
    tracing::trace!(wa = a.len(), wb = b.len(), "karatsuba");
    karatsuba_words(a, b, c, config)
  } else {
    tracing::trace!(wa = a.len(), wb = b.len(), "schoolbook");
    schoolbook_words(a, b, c)
  }
}

/// `c[..a.len()+b.len()] = a * b` with one Karatsuba step at the top.
/// The three sub-products go back through `mul_words`.
/// Returns the trimmed length of the product.
///
/// With `B = 2^32`, `n` the split point, `a = u1 B^n + u2` and
/// `b = v1 B^n + v2`:
///
///   w2 = u1 v1
///   w4 = u2 v2
///   w3 = (u1 + u2)(v1 + v2) - w2 - w4
///   a b = w2 B^2n + w3 B^n + w4
///
/// `w4` is computed straight into the low words of `c`, and `w3` and `w2`
/// are then added on top of it in place.
pub(crate) fn karatsuba_words(a: &[Word], b: &[Word], c: &mut [Word],
                              config: &MulConfig) -> usize {
  let n   = a.len().min(b.len()) / 2;
  let tot = a.len() + b.len();
  let c   = &mut c[.. tot];
  if n == 0 { return schoolbook_words(a, b, c) }

  let _scope = tracing::trace_span!(
    "karatsuba",
    wa    = a.len(),
    wb    = b.len(),
    split = n,
  )
  .entered();

  c.fill(0);

  let (u2, u1) = a.split_at(n);
  let (v2, v1) = b.split_at(n);

  // t1 = u1 + u2, t2 = v1 + v2, each with room for a carry word.
  let mut t = vec![0; u1.len() + v1.len() + 2];
  let (t1, t2) = t.split_at_mut(u1.len() + 1);
  let wt1 = add_words(u1, u2, t1);
  let wt2 = add_words(v1, v2, t2);

  let mut w3 = vec![0; wt1 + wt2];
  let ww3 = mul_words(&t1[.. wt1], &t2[.. wt2], &mut w3, config);

  let mut w2 = vec![0; u1.len() + v1.len()];
  let ww2 = mul_words(u1, v1, &mut w2, config);

  let ww4 = mul_words(u2, v2, &mut c[.. 2 * n], config);

  // w3 = w3 - w2 - w4.  The longer of the two is the middle operand.
  let ww3 = {
    let w2 = &w2[.. ww2];
    let w4 = &c[.. ww4];
    let (long, short) = if ww2 > ww4 { (w2, w4) } else { (w4, w2) };
    let w3 = &mut w3[.. ww3];
    let negative = borrow_chain(w3, long, short);
    debug_assert!(!negative, "karatsuba cross term is negative");
    trimmed_len(w3)
  };

  // c = w4 + w3 B^n.  The words of c from n up hold the top of w4.
  let mid = n + add_assign_words(&mut c[n ..], ww4.saturating_sub(n), &w3[.. ww3]);

  // c = c + w2 B^2n
  let top = 2 * n
          + add_assign_words(&mut c[2 * n ..], mid.saturating_sub(2 * n),
                             &w2[.. ww2]);

  trimmed_len(&c[.. mid.max(top)])
}


/// `c = a * b` by the quadratic method.
/// `c` must hold at least `a.len() + b.len()` words, all of which are
/// overwritten.  Returns the trimmed length of the product.
pub fn multiply_schoolbook(a: &[Word], b: &[Word], c: &mut [Word])
  -> Result<usize, Error> {
  Error::check_capacity(a.len() + b.len(), c.len())?;
  Ok(schoolbook_words(a, b, c))
}

/// `c = a * b`, taking a Karatsuba step at the top level regardless of size.
/// Sub-products are dispatched by `config`.  Operands shorter than 2 words
/// have nothing to split and use the quadratic method.
/// `c` must hold at least `a.len() + b.len()` words, all of which are
/// overwritten.  Returns the trimmed length of the product.
pub fn multiply_karatsuba(a: &[Word], b: &[Word], c: &mut [Word],
                          config: &MulConfig) -> Result<usize, Error> {
  Error::check_capacity(a.len() + b.len(), c.len())?;
  Ok(karatsuba_words(a, b, c, config))
}

/// `c = a * b`.  Products where either operand is shorter than the
/// configured threshold use the quadratic method, the rest use Karatsuba.
/// A zero operand gives a product of length 0.
/// `c` must hold at least `a.len() + b.len()` words, all of which are
/// overwritten.  Returns the trimmed length of the product.
pub fn multiply(a: &[Word], b: &[Word], c: &mut [Word], config: &MulConfig)
  -> Result<usize, Error> {
  Error::check_capacity(a.len() + b.len(), c.len())?;
  Ok(mul_words(a, b, c, config))
}


impl std::ops::Mul<&WordVec> for &WordVec {
  type Output = WordVec;

  fn mul(self, other: &WordVec) -> WordVec {
    self.mul_with(other, &MulConfig::default())
  }
}

impl WordVec {

  /// Multiply using the given configuration.  The result is trimmed.
  pub fn mul_with(&self, other: &WordVec, config: &MulConfig) -> WordVec {
    let mut out = vec![0; self.len() + other.len()];
    let n = mul_words(self.as_slice(), other.as_slice(), &mut out, config);
    WordVec::from_buffer(out, n)
  }
}


#[cfg(test)]
pub mod test {
  use super::*;
  use crate::proptest::*;

  fn small() -> MulConfig {
    match MulConfig::new(crate::config::MIN_KARATSUBA_THRESHOLD) {
      Ok(cfg) => cfg,
      Err(e)  => panic!("{e}")
    }
  }

  #[test]
  fn mul_matches_reference() {
    do_test(&PAIRS, binary, |(x,y): (WordVec,WordVec)| {
      let (xs,a) = x.sem();
      let (ys,b) = y.sem();
      let mut out = vec![0; xs.len() + ys.len()];
      let Ok(n) = multiply(xs, ys, &mut out, &MulConfig::default())
        else { return Some(false) };
      Some(reference(&out[.. n]) == &a * &b && n == trimmed_len(&out))
    })
  }

  #[test]
  fn schoolbook_matches_reference() {
    do_test(&PAIRS, binary, |(x,y): (WordVec,WordVec)| {
      let (xs,a) = x.sem();
      let (ys,b) = y.sem();
      let mut out = vec![0; xs.len() + ys.len()];
      let Ok(n) = multiply_schoolbook(xs, ys, &mut out)
        else { return Some(false) };
      Some(reference(&out[.. n]) == &a * &b)
    })
  }

  #[test]
  fn karatsuba_matches_schoolbook() {
    do_test(&PAIRS, binary, |(x,y): (WordVec,WordVec)| {
      let (xs,ys) = (x.as_slice(), y.as_slice());
      let mut s = vec![0; xs.len() + ys.len()];
      let mut k = vec![0; xs.len() + ys.len()];
      let Ok(ns) = multiply_schoolbook(xs, ys, &mut s)
        else { return Some(false) };
      let Ok(nk) = multiply_karatsuba(xs, ys, &mut k, &MulConfig::default())
        else { return Some(false) };
      Some(ns == nk && s == k)
    })
  }

  #[test]
  fn deep_recursion_matches_reference() {
    do_test(&PAIRS, binary, |(x,y): (WordVec,WordVec)| {
      let (_,a) = x.sem();
      let (_,b) = y.sem();
      let p = x.mul_with(&y, &small());
      Some(p.sem().1 == a * b && p.len() == p.trimmed().len())
    })
  }

  #[test]
  fn zero_operand() {
    let x = WordVec::from_words(vec![1, 2, 3]);
    assert!((&x * &WordVec::zero()).is_empty());
    assert!((&WordVec::zero() * &x).is_empty());

    let mut out = [9; 5];
    let cfg = MulConfig::default();
    assert_eq!(multiply(&[1, 2, 3], &[0, 0], &mut out, &cfg), Ok(0));
    assert_eq!(out, [0; 5]);
    assert_eq!(multiply(&[], &[4], &mut out, &cfg), Ok(0));
  }

  #[test]
  fn carry_into_new_word() {
    let mut out = [0; 3];
    assert_eq!(multiply(&[0xFFFF_FFFF, 0xFFFF_FFFF], &[2], &mut out,
                        &MulConfig::default()), Ok(3));
    assert_eq!(out, [0xFFFF_FFFE, 0xFFFF_FFFF, 0x1]);
  }

  #[test]
  fn karatsuba_path_40_words() {
    do_test(&[(40,40)], binary, |(x,y): (WordVec,WordVec)| {
      let (xs,ys) = (x.as_slice(), y.as_slice());
      let mut s = vec![0; 80];
      let mut d = vec![0; 80];
      let Ok(ns) = multiply_schoolbook(xs, ys, &mut s)
        else { return Some(false) };
      let Ok(nd) = multiply(xs, ys, &mut d, &MulConfig::default())
        else { return Some(false) };
      Some(ns == nd && s == d)
    })
  }

  #[test]
  fn all_ones_operands() {
    // Every partial sum carries, which stresses the in place additions.
    let cfg = small();
    for len in [4, 5, 27, 28, 63, 64, 65] {
      let x = WordVec::from_words(vec![u32::MAX; len]);
      let (_,a) = x.sem();
      assert_eq!(x.mul_with(&x, &cfg).sem().1, &a * &a, "len {len}");
    }
  }

  #[test]
  fn leading_zero_words() {
    let mut x = vec![7; 30];
    x.extend([0; 12]);
    let y = vec![3; 28];
    let mut out = vec![5; x.len() + y.len()];
    let n = multiply(&x, &y, &mut out, &MulConfig::default());
    assert_eq!(n, Ok(57));
    assert!(out[57 ..].iter().all(|&w| w == 0));
    assert_eq!(reference(&out), reference(&x) * reference(&y));
  }

  #[test]
  fn capacity() {
    let mut out = [0; 3];
    let cfg = MulConfig::default();
    let err = Err(Error::Capacity { required: 4, available: 3 });
    assert_eq!(multiply(&[1, 2], &[3, 4], &mut out, &cfg), err);
    assert_eq!(multiply_schoolbook(&[1, 2], &[3, 4], &mut out), err);
    assert_eq!(multiply_karatsuba(&[1, 2], &[3, 4], &mut out, &cfg), err);
  }
}
