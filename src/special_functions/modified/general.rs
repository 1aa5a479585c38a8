//! i_n and k_n for orders n >= 2.
//!
//! Both functions are computed in scaled form, ic = i e^-x and
//! kc = k e^x, and converted back only on return. The first kind
//! uses
//!
//! * `x < 1`: power series.
//! * `1 <= x <= n^2/2`: backward recurrence, in which i_n is the
//!   minimal solution.
//! * `x > n^2/2`: the large-argument expansion in 1/(8x), which
//!   terminates for half-integer index. Beyond this point its terms
//!   fall at least as fast as 1/k!.
//!
//! The second kind is obtained by forward recurrence for all x.

use crate::constants::*;
use crate::special_functions::{PowerSeries, AsymptoticSeries};
use super::{ModifiedSphericalBesselFunction, ModifiedOrder0, ModifiedOrder1, restore_exponent};

/// Upper edge of the power series region
const SERIES_LIMIT: f64 = 1.0;

/// Evaluates modified spherical Bessel functions of fixed order n >= 2.
#[derive(Copy,Clone,Debug)]
pub struct ModifiedGeneral {
    order: usize,
    zeroth: &'static ModifiedOrder0,
    first: &'static ModifiedOrder1,
    series: PowerSeries,
    expansion: AsymptoticSeries,
    asymptotic_limit: f64,
    backward_start: usize,
}

impl ModifiedGeneral {
    /// Prepares an instance for order `n`, which must have been
    /// validated by the caller.
    pub(super) fn new(n: usize, zeroth: &'static ModifiedOrder0, first: &'static ModifiedOrder1) -> Self {
        assert!(n >= 2 && n <= MAX_ORDER);
        let backward_start = n + 1 + (8.0 * ((n + 3) as f64).ln()).ceil() as usize;
        ModifiedGeneral {
            order: n,
            zeroth,
            first,
            series: PowerSeries::for_order(n, 1.0),
            expansion: AsymptoticSeries::for_order(n),
            asymptotic_limit: 0.5 * (n * n) as f64,
            backward_start,
        }
    }

    /// Starting order for backward recurrence at argument `x`.
    ///
    /// For x >> n the ratio i_m / k_m only falls as
    /// exp[-(m^2 - n^2)/x], so the start must grow like sqrt(x)
    /// to keep the error in i_n below double precision.
    fn backward_start_at(&self, x: f64) -> usize {
        let n = self.order as f64;
        let growing = (n * (n + 1.0) + 50.0 * x).sqrt().ceil() as usize + 1;
        self.backward_start.max(growing)
    }

    /// Returns ic_n(x) for 1 <= x <= n^2/2, running the recurrence
    ///   f_{m-1} = f_{m+1} + (2m+1)/x f_m
    /// downwards and normalizing against ic_0 or ic_1.
    fn ic_backward(&self, x: f64) -> f64 {
        let n = self.order;
        let mut above = 0.0;
        let mut current = RECURRENCE_SEED;
        let mut target = 0.0;

        for m in (1..=self.backward_start_at(x)).rev() {
            let below = ((2 * m + 1) as f64) / x * current + above;
            above = current;
            current = below;

            if m - 1 == n {
                target = current;
            }

            if current.abs() > RENORMALIZATION_THRESHOLD {
                let scale = current.abs();
                current /= scale;
                above /= scale;
                target /= scale;
            }
        }

        if current.abs() >= above.abs() {
            target * (self.zeroth.ic(x) / current)
        } else {
            target * (self.first.ic(x) / above)
        }
    }

    /// Returns ic_n(x) for x > n^2/2:
    ///   ic_n(x) = [P(-t) + (-1)^(n+1) e^(-2x) P(t)] / 2x,
    /// where t = 1/(8x). The second term is dropped once it
    /// falls below double precision.
    fn ic_asymptotic(&self, x: f64) -> f64 {
        let t = 1.0 / (8.0 * x);
        let mut sum = self.expansion.evaluate_at(-t);
        if x < CORRECTION_CUTOFF {
            let sign = if self.order % 2 == 0 { -1.0 } else { 1.0 };
            sum += sign * (-2.0 * x).exp() * self.expansion.evaluate_at(t);
        }
        sum / (2.0 * x)
    }
}

impl ModifiedSphericalBesselFunction for ModifiedGeneral {
    fn order(&self) -> usize {
        self.order
    }

    fn i(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 {
            f64::NAN
        } else if x.is_infinite() {
            f64::INFINITY
        } else if x < SERIES_LIMIT {
            self.series.evaluate_at(x)
        } else {
            restore_exponent(self.ic(x), x)
        }
    }

    fn ic(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 {
            f64::NAN
        } else if x.is_infinite() {
            0.0
        } else if x < SERIES_LIMIT {
            self.series.evaluate_at(x) * (-x).exp()
        } else if x <= self.asymptotic_limit {
            self.ic_backward(x)
        } else {
            self.ic_asymptotic(x)
        }
    }

    fn k(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 {
            f64::NAN
        } else if x == 0.0 {
            f64::INFINITY
        } else if x.is_infinite() {
            0.0
        } else {
            self.kc(x) * (-x).exp()
        }
    }

    /// Runs the recurrence
    ///   f_{m+1} = f_{m-1} + (2m+1)/x f_m
    /// upwards from kc_0 and kc_1. All terms are positive, so
    /// overflow can only go to +∞.
    fn kc(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 {
            return f64::NAN;
        } else if x == 0.0 {
            return f64::INFINITY;
        } else if x.is_infinite() {
            return 0.0;
        }

        let mut below = self.zeroth.kc(x);
        let mut current = self.first.kc(x);
        if !current.is_finite() {
            return f64::INFINITY;
        }

        for m in 1..self.order {
            let above = below + ((2 * m + 1) as f64) / x * current;
            if !above.is_finite() {
                return f64::INFINITY;
            }
            below = current;
            current = above;
        }

        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    static MAX_ERROR: f64 = 1.0e-13;

    fn order(n: usize) -> ModifiedGeneral {
        ModifiedGeneral::new(n, ModifiedOrder0::instance(), ModifiedOrder1::instance())
    }

    #[test]
    fn backward_start() {
        let f = order(100);
        assert_eq!(f.backward_start_at(1.0), 139);
        assert_eq!(f.backward_start_at(5000.0), 511);
    }

    #[test]
    fn i2_0_5() {
        // power series
        let target = 0.016966360360861979468;
        let value = order(2).i(0.5);
        let error = (target - value).abs() / target;
        println!("i(2, {}) = {:.6e}, expected {:.6e}, error {:.3e}", 0.5, value, target, error);
        assert!(error < MAX_ERROR);
    }

    #[test]
    fn i5_3() {
        // backward recurrence
        let target = 0.032796038709344504204;
        let value = order(5).i(3.0);
        let error = (target - value).abs() / target;
        println!("i(5, {}) = {:.6e}, expected {:.6e}, error {:.3e}", 3.0, value, target, error);
        assert!(error < MAX_ERROR);
    }

    #[test]
    fn ic100_4000() {
        // backward recurrence, x >> n
        let target = 3.536498956226754068e-5;
        let value = order(100).ic(4000.0);
        let error = (target - value).abs() / target;
        println!("ic(100, {}) = {:.6e}, expected {:.6e}, error {:.3e}", 4000.0, value, target, error);
        assert!(error < MAX_ERROR);
    }

    #[test]
    fn ic3_10() {
        // expansion including the exp(-2x) correction
        let target = 0.02675000018189680718;
        let value = order(3).ic(10.0);
        let error = (target - value).abs() / target;
        println!("ic(3, {}) = {:.6e}, expected {:.6e}, error {:.3e}", 10.0, value, target, error);
        assert!(error < MAX_ERROR);
    }

    #[test]
    fn i10_715() {
        // e^x overflows before i_n does
        let target = 2.1467845572387249474e307;
        let value = order(10).i(715.0);
        let error = (target - value).abs() / target;
        println!("i(10, {}) = {:.6e}, expected {:.6e}, error {:.3e}", 715.0, value, target, error);
        assert!(error < 1.0e-12);
    }

    #[test]
    fn k2_0_5() {
        let target = 23.048165069080070097;
        let value = order(2).k(0.5);
        let error = (target - value).abs() / target;
        println!("k(2, {}) = {:.6e}, expected {:.6e}, error {:.3e}", 0.5, value, target, error);
        assert!(error < MAX_ERROR);
    }

    #[test]
    fn kc60_25() {
        let target = 2.0423180559908013036e23;
        let value = order(60).kc(25.0);
        let error = (target - value).abs() / target;
        println!("kc(60, {}) = {:.6e}, expected {:.6e}, error {:.3e}", 25.0, value, target, error);
        assert!(error < MAX_ERROR);
    }

    #[test]
    fn overflow_and_underflow() {
        assert_eq!(order(100).kc(0.01), f64::INFINITY);
        assert_eq!(order(100).k(0.01), f64::INFINITY);
        assert_eq!(order(100).i(1.0e-3), 0.0);
        assert_eq!(order(5).k(800.0), 0.0);
        assert_eq!(order(5).i(800.0), f64::INFINITY);
    }
}
