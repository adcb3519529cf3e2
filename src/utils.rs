/// Largest n whose factorial is pre-seeded into a fresh cache
pub const SEEDED_FACTORIALS: u64 = 10;

/// Calculate n! with machine words, saturating at `u64::MAX`
pub fn native_factorial(n: u64) -> u64 {
    let mut result = 1u64;

    for i in 2..=n {
        result = result.saturating_mul(i);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_factorial() {
        assert_eq!(native_factorial(0), 1);
        assert_eq!(native_factorial(1), 1);
        assert_eq!(native_factorial(SEEDED_FACTORIALS), 3_628_800);
        assert_eq!(native_factorial(20), 2_432_902_008_176_640_000);
        assert_eq!(native_factorial(21), u64::MAX);
    }
}
