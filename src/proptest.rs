use crate::WordVec;
use crate::core::Word;
use proptest::prelude::*;
use proptest::strategy::*;
use proptest::arbitrary::*;
use proptest::test_runner::*;

/// Word lengths for properties of a single vector, or of several vectors
/// of the same length.
pub const SIZES: [usize; 14] = [0, 1, 2, 3, 5, 8, 13, 26, 27, 28, 40, 64, 100, 257];

/// Word lengths for properties of two vectors.  These cross the default
/// Karatsuba threshold in both operands, and include lopsided shapes.
pub const PAIRS: [(usize,usize); 24] = [
  (0,0), (0,5), (5,0), (1,1), (1,40), (40,1), (2,3), (7,13),
  (26,26), (26,27), (27,26), (27,27), (27,28), (28,27), (28,28), (26,28),
  (40,40), (33,80), (80,33), (64,64), (100,37), (37,300), (129,128),
  (300,300),
];

const CASES: u32 = 24;

impl ValueTree for WordVec {
  type Value = WordVec;

  fn current(&self) -> WordVec { self.clone() }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

/// Random vectors of a fixed word length.  Words of all 0s and all 1s
/// are over-represented, so that carries and borrows run a long way.
#[derive(Debug)]
pub struct WordVecStrategy { pub words: usize }

impl Strategy for WordVecStrategy {
  type Tree  = WordVec;
  type Value = WordVec;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let mut words = Vec::<Word>::with_capacity(self.words);
    let rng = runner.rng();
    for _ in 0 .. self.words {
      words.push(match rng.next_u32() % 8 {
        0 => 0,
        1 => Word::MAX,
        _ => rng.next_u32()
      })
    }
    Ok(WordVec::from_words(words))
  }
}

impl Arbitrary for WordVec {
  type Parameters = usize;
  type Strategy   = WordVecStrategy;

  fn arbitrary_with(words: usize) -> Self::Strategy {
    WordVecStrategy { words }
  }
}


/// Check the property `p` on inputs of each of the given sizes.
/// `p` returns `None` to reject an input.
pub fn do_test<S: Copy, T: Arbitrary>
    ( sizes: &[S]
    , s: fn (S) -> StrategyFor<T>
    , p: fn(T)  -> Option<bool>
    ) {
  for &size in sizes {
    let mut cfg: Config = <_>::default();
    cfg.cases = CASES;
    cfg.failure_persistence = None;
    let mut runner = TestRunner::new(cfg);
    let strategy = s(size);
    runner.run(&strategy, |arg| {
      match p(arg) {
        Some(result) =>
          if result { Ok(()) }
          else {
            Err(TestCaseError::Fail("unexpected result".into()))
          },
        None => Err(TestCaseError::Reject("invalid input".into()))
      }
    }).unwrap()
  }
}

/// The value of a slice of words.
pub fn reference(ws: &[Word]) -> num::BigUint {
  num::BigUint::from_slice(ws)
}

impl WordVec {
  pub fn sem(&self) -> (&[Word], num::BigUint) {
    (self.as_slice(), self.into())
  }
}

pub fn unary(words: usize) -> StrategyFor<WordVec> {
  arbitrary_with(words)
}

pub fn binary((wa,wb): (usize,usize)) -> StrategyFor<(WordVec,WordVec)> {
  arbitrary_with((wa,wb))
}

pub fn ternary(words: usize) -> StrategyFor<(WordVec,WordVec,WordVec)> {
  arbitrary_with((words,words,words))
}
