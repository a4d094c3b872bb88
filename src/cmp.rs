use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use crate::WordVec;
use crate::core::{Word, trimmed};

/// Compare two magnitudes by value.  Zero words at the top do not matter.
pub fn compare(a: &[Word], b: &[Word]) -> Ordering {
  let a = trimmed(a);
  let b = trimmed(b);
  if a.len() != b.len() { return a.len().cmp(&b.len()) }
  for (&lhs,&rhs) in a.iter().rev().zip(b.iter().rev()) {
    if lhs == rhs { continue }
    return lhs.cmp(&rhs)
  }
  Ordering::Equal
}

impl PartialEq for WordVec {
  fn eq(&self, other: &Self) -> bool { self.trimmed() == other.trimmed() }
}

impl Eq for WordVec {}

impl PartialOrd for WordVec {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for WordVec {
  fn cmp(&self, other: &Self) -> Ordering {
    compare(self.as_slice(), other.as_slice())
  }
}

// Must agree with `eq`, so only the trimmed words are hashed.
impl Hash for WordVec {
  fn hash<H: Hasher>(&self, state: &mut H) { self.trimmed().hash(state) }
}
