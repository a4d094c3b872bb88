use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::EnvFilter;
use wordmul::config::THRESHOLD_ENV;
use wordmul::{multiply, multiply_schoolbook, MulConfig, Word, WordVec};

/// Multiply random operands with the quadratic and the dispatching method,
/// time both, and check every product against `num::BigUint`.
#[derive(Parser, Debug)]
#[command(name = "wordmul", version)]
struct Args {
  /// Word length of the first operand.
  #[arg(short = 'n', long, default_value_t = 512)]
  words: usize,

  /// Word length of the second operand.  Defaults to `--words`.
  #[arg(short = 'm', long)]
  other_words: Option<usize>,

  /// Number of products to compute.
  #[arg(short = 'r', long, default_value_t = 8)]
  rounds: usize,

  /// Seed for the operand generator.
  #[arg(short = 's', long, default_value_t = 0)]
  seed: u64,

  /// Operands with fewer words than this use the quadratic method.
  #[arg(short = 't', long, env = THRESHOLD_ENV,
        default_value_t = wordmul::DEFAULT_KARATSUBA_THRESHOLD)]
  threshold: usize,
}

fn random_words(rng: &mut StdRng, len: usize) -> Vec<Word> {
  (0 .. len).map(|_| rng.gen()).collect()
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
  let start = Instant::now();
  let out = f();
  (out, start.elapsed())
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let args   = Args::parse();
  let config = MulConfig::new(args.threshold)?;
  let wa     = args.words;
  let wb     = args.other_words.unwrap_or(wa);
  let mut rng = StdRng::seed_from_u64(args.seed);

  tracing::info!(wa, wb, rounds = args.rounds,
                 threshold = config.karatsuba_threshold(), "starting");

  let mut slow_total = Duration::ZERO;
  let mut fast_total = Duration::ZERO;

  for round in 0 .. args.rounds {
    let a = random_words(&mut rng, wa);
    let b = random_words(&mut rng, wb);

    let mut slow = vec![0; wa + wb];
    let mut fast = vec![0; wa + wb];
    let (ns, t_slow) = timed(|| multiply_schoolbook(&a, &b, &mut slow));
    let (nf, t_fast) = timed(|| multiply(&a, &b, &mut fast, &config));
    let (ns, nf) = (ns?, nf?);

    let expect = num::BigUint::from_slice(&a) * num::BigUint::from_slice(&b);
    let expect = WordVec::from(&expect);
    if WordVec::from_words(slow[.. ns].to_vec()) != expect {
      bail!("round {round}: schoolbook product does not match the reference");
    }
    if WordVec::from_words(fast[.. nf].to_vec()) != expect {
      bail!("round {round}: dispatched product does not match the reference");
    }

    println!("{round:>4}  {wa}x{wb} words  schoolbook {t_slow:>12.3?}  \
              dispatch {t_fast:>12.3?}  ({nf} words)");
    slow_total += t_slow;
    fast_total += t_fast;
  }

  if args.rounds > 0 {
    let ratio = slow_total.as_secs_f64() / fast_total.as_secs_f64().max(1e-9);
    println!("total  schoolbook {slow_total:.3?}  dispatch {fast_total:.3?}  \
              speedup {ratio:.2}x");
  }
  Ok(())
}
