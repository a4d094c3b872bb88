use crate::error::Error;

/// Operands with fewer words than this use the schoolbook method.
pub const DEFAULT_KARATSUBA_THRESHOLD: usize = 27;

/// Below this the `(u1+u2)*(v1+v2)` sub-product stops shrinking
/// and the recursion would not terminate.
pub const MIN_KARATSUBA_THRESHOLD: usize = 4;

/// Environment variable consulted by `MulConfig::from_env`.
pub const THRESHOLD_ENV: &str = "WORDMUL_KARATSUBA_THRESHOLD";

/// Tuning parameters for multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MulConfig {
  karatsuba_threshold: usize
}

impl Default for MulConfig {
  fn default() -> Self {
    MulConfig { karatsuba_threshold: DEFAULT_KARATSUBA_THRESHOLD }
  }
}

impl MulConfig {

  /// A configuration with the given crossover point, in words.
  pub fn new(karatsuba_threshold: usize) -> Result<MulConfig, Error> {
    if karatsuba_threshold < MIN_KARATSUBA_THRESHOLD {
      return Err(Error::Threshold {
        value: karatsuba_threshold,
        min:   MIN_KARATSUBA_THRESHOLD
      })
    }
    Ok(MulConfig { karatsuba_threshold })
  }

  /// Read the threshold from `WORDMUL_KARATSUBA_THRESHOLD`, using the
  /// default when the variable is not set.  A value that is not a word
  /// count, or is too small, is an error.
  pub fn from_env() -> Result<MulConfig, Error> {
    Self::from_setting(std::env::var(THRESHOLD_ENV).ok().as_deref())
  }

  fn from_setting(value: Option<&str>) -> Result<MulConfig, Error> {
    match value {
      None    => Ok(MulConfig::default()),
      Some(s) => Self::parse_threshold(s)
    }
  }

  fn parse_threshold(s: &str) -> Result<MulConfig, Error> {
    match s.trim().parse::<usize>() {
      Ok(value) => MulConfig::new(value),
      Err(_)    => Err(Error::ThresholdSyntax(s.to_string()))
    }
  }

  /// Operands with fewer words than this use the schoolbook method.
  pub fn karatsuba_threshold(&self) -> usize { self.karatsuba_threshold }

  /// Should a product of operands with these word lengths use Karatsuba.
  pub fn use_karatsuba(&self, wa: usize, wb: usize) -> bool {
    wa >= self.karatsuba_threshold && wb >= self.karatsuba_threshold
  }
}
