#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("destination holds {available} words but {required} are required")]
  Capacity { required: usize, available: usize },
  #[error("subtraction operand lengths must satisfy d <= b <= a, got a = {wa}, b = {wb}, d = {wd}")]
  OperandOrder { wa: usize, wb: usize, wd: usize },
  #[error("subtraction result is negative")]
  Underflow,
  #[error("declared bit length {declared} does not fit an operand of {words} words holding {actual} bits")]
  BitLength { declared: usize, words: usize, actual: usize },
  #[error("karatsuba threshold {value} is below the minimum of {min} words")]
  Threshold { value: usize, min: usize },
  #[error("karatsuba threshold {0:?} is not a word count")]
  ThresholdSyntax(String),
}

impl Error {

  /// Check that a destination of `available` words can hold `required`.
  pub(crate) fn check_capacity(required: usize, available: usize)
    -> Result<(), Error> {
    if available < required {
      Err(Error::Capacity { required, available })
    } else {
      Ok(())
    }
  }
}
