//! Implements the inverse double factorial 1/(2n+1)!!

use std::sync::OnceLock;
use crate::constants::MAX_ORDER;

pub trait InverseDoubleFactorial {
    /// Evaluates 1/(2n+1)!! = 1/(1·3·5·…·(2n+1)).
    ///
    /// # Panics
    ///
    /// Panics if n exceeds `MAX_ORDER`.
    fn inverse_double_factorial(&self) -> f64;
}

impl InverseDoubleFactorial for usize {
    fn inverse_double_factorial(&self) -> f64 {
        match checked_inverse_double_factorial(*self) {
            Some(value) => value,
            None => panic!("inverse double factorial requested for order {}, maximum is {}", self, MAX_ORDER),
        }
    }
}

/// Returns 1/(2n+1)!!, or None if n exceeds `MAX_ORDER`.
pub fn checked_inverse_double_factorial(n: usize) -> Option<f64> {
    get_cache().get(n).copied()
}

const CACHE_SIZE: usize = MAX_ORDER + 1;
static CACHE: OnceLock<[f64; CACHE_SIZE]> = OnceLock::new();

fn get_cache() -> &'static [f64; CACHE_SIZE] {
    CACHE.get_or_init(|| {
        let mut cache = [1.0; CACHE_SIZE];
        // built by successive division, 1/(2i+1)!! = 1/(2i-1)!! / (2i+1)
        (1..CACHE_SIZE).fold(cache[0], |acc, i| {
            let inv = acc / ((2 * i + 1) as f64);
            cache[i] = inv;
            inv
        });
        cache
    })
}
