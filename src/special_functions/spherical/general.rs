//! j_n and y_n for orders n >= 2.
//!
//! The first kind is evaluated by one of three methods,
//! depending on the argument:
//!
//! * `x < 2`: power series.
//! * `2 <= x < n`: backward (Miller) recurrence. Here j_n is the
//!   minimal solution of the three-term recurrence, so running it
//!   upwards would amplify rounding error like y_n.
//! * `x >= n`: forward recurrence from j_0 and j_1, which is stable
//!   once j_n has stopped decaying with n.
//!
//! The second kind is always the dominant solution and is obtained
//! by forward recurrence for all x.

use crate::constants::*;
use crate::special_functions::PowerSeries;
use super::{SphericalBesselFunction, SphericalOrder0, SphericalOrder1};

/// Upper edge of the power series region
const SERIES_LIMIT: f64 = 2.0;

/// Evaluates spherical Bessel functions of fixed order n >= 2.
#[derive(Copy,Clone,Debug)]
pub struct SphericalGeneral {
    order: usize,
    zeroth: &'static SphericalOrder0,
    first: &'static SphericalOrder1,
    series: PowerSeries,
    forward_limit: f64,
    backward_start: usize,
}

impl SphericalGeneral {
    /// Prepares an instance for order `n`, which must have been
    /// validated by the caller.
    pub(super) fn new(n: usize, zeroth: &'static SphericalOrder0, first: &'static SphericalOrder1) -> Self {
        assert!(n >= 2 && n <= MAX_ORDER);
        // Starting order for backward recurrence, chosen empirically:
        // j_N / y_N is then small enough for all 2 <= x < n
        let backward_start = n + 1 + (8.0 * ((n + 3) as f64).ln()).ceil() as usize;
        SphericalGeneral {
            order: n,
            zeroth,
            first,
            series: PowerSeries::for_order(n, -1.0),
            forward_limit: n as f64,
            backward_start,
        }
    }

    /// Returns j_n(x) for 2 <= x < n, running the recurrence
    ///   f_{k-1} = (2k+1)/x f_k - f_{k+1}
    /// down from `backward_start` and normalizing against
    /// whichever of j_0 or j_1 is larger.
    fn backward(&self, x: f64) -> f64 {
        let n = self.order;
        let mut above = 0.0;
        let mut current = RECURRENCE_SEED;
        let mut target = 0.0;

        for k in (1..=self.backward_start).rev() {
            let below = ((2 * k + 1) as f64) / x * current - above;
            above = current;
            current = below;

            if k - 1 == n {
                target = current;
            }

            if current.abs() > RENORMALIZATION_THRESHOLD {
                let scale = current.abs();
                current /= scale;
                above /= scale;
                target /= scale;
            }
        }

        // current ∝ j_0(x), above ∝ j_1(x)
        if current.abs() >= above.abs() {
            target * (self.zeroth.j(x) / current)
        } else {
            target * (self.first.j(x) / above)
        }
    }

    /// Runs the recurrence
    ///   f_{k+1} = (2k+1)/x f_k - f_{k-1}
    /// upwards from f_0 and f_1, returning a correctly signed
    /// infinity if any intermediate value overflows.
    fn forward(&self, x: f64, f0: f64, f1: f64) -> f64 {
        let mut below = f0;
        let mut current = f1;

        if !current.is_finite() {
            return current;
        }

        for k in 1..self.order {
            let above = ((2 * k + 1) as f64) / x * current - below;
            if !above.is_finite() {
                return f64::INFINITY.copysign(above);
            }
            below = current;
            current = above;
        }

        current
    }
}

impl SphericalBesselFunction for SphericalGeneral {
    fn order(&self) -> usize {
        self.order
    }

    fn j(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 {
            f64::NAN
        } else if x.is_infinite() {
            0.0
        } else if x < SERIES_LIMIT {
            self.series.evaluate_at(x)
        } else if x < self.forward_limit {
            self.backward(x)
        } else {
            self.forward(x, self.zeroth.j(x), self.first.j(x))
        }
    }

    fn y(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 {
            f64::NAN
        } else if x == 0.0 {
            f64::NEG_INFINITY
        } else if x.is_infinite() {
            0.0
        } else {
            self.forward(x, self.zeroth.y(x), self.first.y(x))
        }
    }
}
