//! Arithmetic backends used by the factorial cache.
//!
//! A backend fixes the integer representation of results and the primitives
//! used to build them. [`BigArithmetic`] is always exact. [`NativeArithmetic`]
//! is bounded by `u64` and saturates silently on overflow, so large inputs lose
//! precision without reporting an error.

use num_bigint::BigUint;
use num_traits::One;
use rayon::prelude::*;
use std::fmt;

/// Integer primitives a factorial or binomial computation is built from.
pub trait Arithmetic: Send + Sync {
    /// Integer representation produced by this backend
    type Value: Clone + fmt::Debug + fmt::Display + PartialEq + Send;

    fn from_u64(&self, n: u64) -> Self::Value;

    fn multiply(&self, lhs: &Self::Value, rhs: &Self::Value) -> Self::Value;

    /// Integer division. Panics if `rhs` is zero.
    fn divide(&self, lhs: &Self::Value, rhs: &Self::Value) -> Self::Value;

    /// Built-in factorial primitive, if the backend has one.
    ///
    /// A backend returning `Some` bypasses the factorial cache entirely.
    fn factorial(&self, _n: u64) -> Option<Self::Value> {
        None
    }
}

/// Machine word arithmetic. Fast, saturates at `u64::MAX`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeArithmetic;

impl Arithmetic for NativeArithmetic {
    type Value = u64;

    fn from_u64(&self, n: u64) -> u64 {
        n
    }

    fn multiply(&self, lhs: &u64, rhs: &u64) -> u64 {
        lhs.saturating_mul(*rhs)
    }

    fn divide(&self, lhs: &u64, rhs: &u64) -> u64 {
        lhs / rhs
    }
}

/// Exact arbitrary-precision arithmetic on [`BigUint`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BigArithmetic;

impl Arithmetic for BigArithmetic {
    type Value = BigUint;

    fn from_u64(&self, n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn multiply(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        lhs * rhs
    }

    fn divide(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        lhs / rhs
    }
}

/// Exact arithmetic with a built-in factorial computed as a parallel product.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelBigArithmetic;

impl Arithmetic for ParallelBigArithmetic {
    type Value = BigUint;

    fn from_u64(&self, n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn multiply(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        lhs * rhs
    }

    fn divide(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        lhs / rhs
    }

    fn factorial(&self, n: u64) -> Option<BigUint> {
        if n < 2 {
            return Some(BigUint::one());
        }
        Some((2..=n).into_par_iter().map(BigUint::from).product::<BigUint>())
    }
}
