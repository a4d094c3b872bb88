//! Multiplication of arbitrary size non-negative integers stored as
//! little-endian arrays of 32 bit words.
//!
//! The primitives work on caller supplied slices and return the trimmed
//! length of their result.  `WordVec` wraps an owned vector for callers
//! that prefer operators.

pub mod core;
pub mod error;
pub mod config;
pub mod arith;
pub mod mul;
pub mod product;
pub mod cmp;
pub mod conversion;

#[cfg(test)]
pub mod proptest;

pub use crate::core::{Word, WordVec, WORD_BITS};
pub use crate::error::Error;
pub use crate::config::{MulConfig, DEFAULT_KARATSUBA_THRESHOLD};
pub use crate::arith::{add, add_assign, subtract, sub_assign};
pub use crate::mul::{multiply, multiply_karatsuba, multiply_schoolbook};
pub use crate::product::{product, Product};
