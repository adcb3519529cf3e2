//! Exact factorials, binomial coefficients and k-combination enumeration.
//!
//! The free functions in this module share one process-wide
//! [`FactorialCache`] over [`BigArithmetic`], created on first use and
//! pre-seeded with `0!` through `10!`. Callers that need an isolated cache or a
//! different backend construct their own [`FactorialCache`].

use num_bigint::BigUint;
use std::sync::OnceLock;

// Module declarations
pub mod arithmetic;
pub mod combination;
pub mod enumeration;
pub mod error;
pub mod factorial;
pub mod parser;
pub mod utils;

pub use arithmetic::{Arithmetic, BigArithmetic, NativeArithmetic, ParallelBigArithmetic};
pub use combination::{Combination, CombinationSet};
pub use enumeration::get_combination;
pub use error::{CombinatoricsError, ErrorKind};
pub use factorial::FactorialCache;

static DEFAULT_CACHE: OnceLock<FactorialCache<BigArithmetic>> = OnceLock::new();

/// The process-wide cache used by the free functions
pub fn default_cache() -> &'static FactorialCache<BigArithmetic> {
    DEFAULT_CACHE.get_or_init(|| FactorialCache::new(BigArithmetic))
}

/// Compute `n!` exactly. Fails if `n` is negative.
pub fn factorial(n: i64) -> Result<BigUint, CombinatoricsError> {
    default_cache().factorial(n)
}

/// Compute the factorial of a decimal operand given as text.
pub fn factorial_str(input: &str) -> Result<BigUint, CombinatoricsError> {
    default_cache().factorial_str(input)
}

/// Drop every value of the process-wide cache, including the seed.
pub fn empty_factorial_cache() {
    default_cache().clear();
}

/// Number of `combination_size`-element subsets of an `item_count`-element set.
pub fn combination_count(
    item_count: i64,
    combination_size: i64,
) -> Result<BigUint, CombinatoricsError> {
    default_cache().combination_count(item_count, combination_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_facade() {
        assert_eq!(factorial(0).unwrap(), BigUint::from(1u32));
        assert_eq!(factorial(10).unwrap(), BigUint::from(3_628_800u32));
        assert_eq!(factorial_str("5").unwrap(), BigUint::from(120u32));
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(factorial(-1).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(factorial_str("x").unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            combination_count(2, 3).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_empty_cache_then_recompute() {
        empty_factorial_cache();
        assert_eq!(factorial(5).unwrap(), BigUint::from(120u32));
        assert!(default_cache().contains(5));
    }

    #[test]
    fn test_combinations() {
        assert_eq!(combination_count(5, 2).unwrap(), BigUint::from(10u32));
        assert_eq!(get_combination(5, 2).len(), 10);
        assert_eq!(get_combination(6, 3).len(), 20);
    }
}
