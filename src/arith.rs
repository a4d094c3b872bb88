use crate::WordVec;
use crate::core::{Word, DoubleWord, SignedDoubleWord, WORD_BITS, trimmed_len};
use crate::error::Error;


/// `c = a + b`, assuming `c` has room for `max(a,b) + 1` words.
/// Returns the trimmed length of the sum.
pub(crate) fn add_words(a: &[Word], b: &[Word], c: &mut [Word]) -> usize {
  // Walk the longer operand.  Only our local views are swapped.
  let (a, b) = if b.len() > a.len() { (b, a) } else { (a, b) };

  let mut acc: DoubleWord = 0;
  let rhs = b.iter().chain(std::iter::repeat(&0));
  for ((out, &x), &y) in c[.. a.len()].iter_mut().zip(a).zip(rhs) {
    acc += x as DoubleWord;
    acc += y as DoubleWord;
    *out = acc as Word;
    acc  = acc >> WORD_BITS;
  }

  // At most one carry word, and it is cleared when there is no carry.
  let tot = a.len() + 1;
  c[a.len()] = acc as Word;
  trimmed_len(&c[.. tot])
}

/// Add `b` into the first `len` words of `acc`, low word first, without
/// storing the final carry.  Returns the number of words processed and the
/// carry out of the top one.
///
/// Word `i` of the result only depends on word `i` of each operand and on
/// the carry out of word `i - 1`, so every word of `acc` is read before it
/// is overwritten.  Words at or beyond `len` count as 0 and are not read.
fn ripple_assign(acc: &mut [Word], len: usize, b: &[Word]) -> (usize, Word) {
  let tot = len.max(b.len());
  let mut carry: DoubleWord = 0;
  for i in 0 .. tot {
    let mut s = carry;
    if i < len      { s += acc[i] as DoubleWord }
    if i < b.len()  { s += b[i] as DoubleWord }
    acc[i] = s as Word;
    carry  = s >> WORD_BITS;
  }
  (tot, carry as Word)
}

/// The carry out of the top of `acc[..len] + b`, without writing anything.
fn carry_out(acc: &[Word], len: usize, b: &[Word]) -> Word {
  let mut carry: DoubleWord = 0;
  for i in 0 .. len.max(b.len()) {
    let mut s = carry;
    if i < len      { s += acc[i] as DoubleWord }
    if i < b.len()  { s += b[i] as DoubleWord }
    carry = s >> WORD_BITS;
  }
  carry as Word
}

/// `acc = acc[..len] + b`, assuming the sum fits in `acc`.
/// Returns the trimmed length of the sum.
pub(crate) fn add_assign_words(acc: &mut [Word], len: usize, b: &[Word])
  -> usize {
  let (tot, carry) = ripple_assign(acc, len, b);
  if carry > 0 {
    acc[tot] = carry;
    return tot + 1
  }
  trimmed_len(&acc[.. tot])
}

/// Run the three phase borrow chain for `acc = acc - b - d`.
/// Assumes `d.len() <= b.len() <= acc.len()`.
/// Returns `true` if a borrow is still pending past the top of `acc`,
/// i.e. the true result is negative.
pub(crate) fn borrow_chain(acc: &mut [Word], b: &[Word], d: &[Word]) -> bool {
  debug_assert!(d.len() <= b.len() && b.len() <= acc.len());

  let mut sum: SignedDoubleWord = 0;
  for i in 0 .. d.len() {
    sum = acc[i] as SignedDoubleWord
        - b[i]   as SignedDoubleWord
        - d[i]   as SignedDoubleWord
        + (sum >> WORD_BITS);
    acc[i] = sum as Word;
  }

  for i in d.len() .. b.len() {
    sum = acc[i] as SignedDoubleWord
        - b[i]   as SignedDoubleWord
        + (sum >> WORD_BITS);
    acc[i] = sum as Word;
  }

  // Absorb the borrow.  The rest of `acc` is already in place.
  let mut i = b.len();
  while i < acc.len() && sum < 0 {
    sum = acc[i] as SignedDoubleWord + (sum >> WORD_BITS);
    acc[i] = sum as Word;
    i += 1;
  }

  sum < 0
}

fn check_order(wa: usize, wb: usize, wd: usize) -> Result<(), Error> {
  if wd <= wb && wb <= wa { Ok(()) }
  else { Err(Error::OperandOrder { wa, wb, wd }) }
}


/// `c = a + b`.  The operands may have any lengths.
/// `c` must hold at least `max(a.len(), b.len()) + 1` words.
/// Returns the trimmed length of the sum.
pub fn add(a: &[Word], b: &[Word], c: &mut [Word]) -> Result<usize, Error> {
  Error::check_capacity(a.len().max(b.len()) + 1, c.len())?;
  Ok(add_words(a, b, c))
}

/// `acc = acc[..len] + b`, where the destination is also the first operand.
///
/// The words are processed in increasing order, which is what makes the
/// aliasing safe: no word is read after it has been overwritten.
/// Words of `acc` at or beyond `len` count as 0 and are never read.
///
/// `acc` must hold at least `max(len, b.len())` words, and one more if the
/// sum carries out of the top.  On `Error::Capacity`, `acc` is unchanged.
/// Returns the trimmed length of the sum.
pub fn add_assign(acc: &mut [Word], len: usize, b: &[Word])
  -> Result<usize, Error> {
  let tot = len.max(b.len());
  Error::check_capacity(tot, acc.len())?;
  if acc.len() == tot && carry_out(acc, len, b) > 0 {
    return Err(Error::Capacity { required: tot + 1, available: acc.len() })
  }
  Ok(add_assign_words(acc, len, b))
}

/// `acc = acc - b - d`, where the destination is also the minuend.
///
/// Requires `d.len() <= b.len() <= acc.len()`, or `Error::OperandOrder`
/// is returned before anything is written.  A negative result is reported
/// as `Error::Underflow`, and `acc` is then left in an unspecified state.
/// Returns the trimmed length of the difference.
pub fn sub_assign(acc: &mut [Word], b: &[Word], d: &[Word])
  -> Result<usize, Error> {
  check_order(acc.len(), b.len(), d.len())?;
  if borrow_chain(acc, b, d) { return Err(Error::Underflow) }
  Ok(trimmed_len(acc))
}

/// `c = a - b - d`.
///
/// Requires `d.len() <= b.len() <= a.len()` and a non-negative result.
/// `c` must hold at least `a.len()` words.
/// Returns the trimmed length of the difference.
pub fn subtract(a: &[Word], b: &[Word], d: &[Word], c: &mut [Word])
  -> Result<usize, Error> {
  check_order(a.len(), b.len(), d.len())?;
  Error::check_capacity(a.len(), c.len())?;
  let c = &mut c[.. a.len()];
  c.copy_from_slice(a);
  sub_assign(c, b, d)
}


impl std::ops::Add<&WordVec> for &WordVec {
  type Output = WordVec;

  fn add(self, other: &WordVec) -> WordVec {
    let mut out = vec![0; self.len().max(other.len()) + 1];
    let n = add_words(self.as_slice(), other.as_slice(), &mut out);
    WordVec::from_buffer(out, n)
  }
}

impl WordVec {

  /// `self - other`, or `Error::Underflow` if that would be negative.
  pub fn checked_sub(&self, other: &WordVec) -> Result<WordVec, Error> {
    let a = self.trimmed();
    let b = other.trimmed();
    if b.len() > a.len() { return Err(Error::Underflow) }
    let mut out = vec![0; a.len()];
    let n = subtract(a, b, &[], &mut out)?;
    Ok(WordVec::from_buffer(out, n))
  }
}
