use num_bigint::BigUint;
use num_traits::One;

/// Sequential reference factorial: `2 · 3 · … · n`, one for `n ≤ 1`
pub fn factorial(n: u64) -> BigUint {
    let mut result = BigUint::one();
    for i in 2..=n {
        result *= i;
    }
    result
}
