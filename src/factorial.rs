//! Memoized factorial and binomial coefficient computation.

use crate::arithmetic::Arithmetic;
use crate::error::CombinatoricsError;
use crate::parser::parse_operand;
use crate::utils::{native_factorial, SEEDED_FACTORIALS};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Check that a factorial operand is non-negative
fn validate_operand(n: i64) -> Result<u64, CombinatoricsError> {
    u64::try_from(n).map_err(|_| CombinatoricsError::NegativeOperand { value: n })
}

/// Factorial values memoized by operand, computed with the backend `A`.
///
/// Every stored entry equals the factorial of its key. Entries are only added
/// by factorial computations and only removed by [`FactorialCache::clear`].
/// Access is serialized by an internal mutex, so a cache can be shared
/// between threads.
#[derive(Debug)]
pub struct FactorialCache<A: Arithmetic> {
    arithmetic: A,
    values: Mutex<HashMap<u64, A::Value>>,
}

impl<A: Arithmetic> FactorialCache<A> {
    /// Create a cache pre-seeded with `0!` through `10!`.
    pub fn new(arithmetic: A) -> Self {
        let values = (0..=SEEDED_FACTORIALS)
            .map(|n| (n, arithmetic.from_u64(native_factorial(n))))
            .collect();

        FactorialCache {
            arithmetic,
            values: Mutex::new(values),
        }
    }

    /// Create a cache with no entries at all.
    pub fn empty(arithmetic: A) -> Self {
        FactorialCache {
            arithmetic,
            values: Mutex::new(HashMap::new()),
        }
    }

    pub fn arithmetic(&self) -> &A {
        &self.arithmetic
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<u64, A::Value>> {
        // Every mutation is a single insert or clear, so a poisoned map is still consistent
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drop every cached value, including the pre-seeded ones.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn contains(&self, n: u64) -> bool {
        self.lock().contains_key(&n)
    }

    pub fn get(&self, n: u64) -> Option<A::Value> {
        self.lock().get(&n).cloned()
    }

    /// Cached operands in ascending order
    pub fn keys(&self) -> Vec<u64> {
        let mut keys: Vec<u64> = self.lock().keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Compute `n!`.
    ///
    /// Fails with an invalid argument error if `n` is negative; the cache is
    /// not touched in that case. When the backend has a built-in factorial it
    /// is used directly and the cache is neither read nor written. Otherwise
    /// every intermediate factorial computed on the way to `n` is stored.
    pub fn factorial(&self, n: i64) -> Result<A::Value, CombinatoricsError> {
        let n = validate_operand(n)?;
        Ok(self.factorial_of(n))
    }

    /// Compute the factorial of a decimal operand given as text.
    pub fn factorial_str(&self, input: &str) -> Result<A::Value, CombinatoricsError> {
        self.factorial(parse_operand(input)?)
    }

    fn factorial_of(&self, n: u64) -> A::Value {
        if let Some(value) = self.arithmetic.factorial(n) {
            return value;
        }

        let mut values = self.lock();
        if let Some(value) = values.get(&n) {
            return value.clone();
        }

        // Walk down to the nearest cached factorial, or to the 0!/1! base case
        let mut start = n;
        let mut acc = loop {
            if start <= 1 {
                let one = self.arithmetic.from_u64(1);
                values.insert(start, one.clone());
                break one;
            }
            start -= 1;
            if let Some(value) = values.get(&start) {
                break value.clone();
            }
        };

        for i in (start + 1)..=n {
            acc = self.arithmetic.multiply(&self.arithmetic.from_u64(i), &acc);
            values.insert(i, acc.clone());
        }

        acc
    }

    /// Number of `combination_size`-element subsets of an `item_count`-element set.
    ///
    /// Computed as `n! / (k! * (n - k)!)`. Fails with an invalid argument
    /// error when any of the three factorial operands is negative, which
    /// covers `item_count < 0`, `combination_size < 0` and
    /// `combination_size > item_count`. All operands are checked before any
    /// factorial is computed.
    pub fn combination_count(
        &self,
        item_count: i64,
        combination_size: i64,
    ) -> Result<A::Value, CombinatoricsError> {
        let items = validate_operand(item_count)?;
        let size = validate_operand(combination_size)?;
        // Both operands are non-negative here, so the difference cannot overflow
        let rest = validate_operand(item_count - combination_size)?;

        let numerator = self.factorial_of(items);
        let denominator = self
            .arithmetic
            .multiply(&self.factorial_of(size), &self.factorial_of(rest));

        Ok(self.arithmetic.divide(&numerator, &denominator))
    }
}

impl<A: Arithmetic + Default> Default for FactorialCache<A> {
    fn default() -> Self {
        FactorialCache::new(A::default())
    }
}
