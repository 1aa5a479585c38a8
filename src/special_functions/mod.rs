//! Spherical Bessel functions of integer order and real argument.
//!
//! Two families are provided:
//!
//! * [`SphericalBessel`]: the first and second kind, j_n(x) and y_n(x),
//!   and the spherical Hankel functions built from them.
//! * [`ModifiedSphericalBessel`]: the modified first and second kind,
//!   i_n(x) and k_n(x), together with their exponentially scaled
//!   counterparts i_n(x) e^-x and k_n(x) e^x.
//!
//! Instances are built once per order and are immutable thereafter.

use crate::constants::*;

mod double_factorial;
mod spherical;
mod modified;

pub use double_factorial::*;
pub use spherical::*;
pub use modified::*;

/// Represents the power series expansion of j_n or i_n
/// for small argument,
///   f_n(x) = x^n / (2n+1)!! Σ_k a_k x^(2k),
/// truncated after `SERIES_TERMS` terms and evaluated in
/// nested form, i.e.
///   1 + c_1 u (1 + c_2 u (1 + … (1 + c_K u)))
/// where u = x^2.
#[derive(Copy,Clone,Debug)]
struct PowerSeries {
    order: i32,
    leading: f64,
    c: [f64; SERIES_TERMS],
}

impl PowerSeries {
    /// Prepares the expansion for order `n`. `sign` is -1 for the
    /// oscillating functions (j_n) and +1 for the modified ones (i_n).
    fn for_order(n: usize, sign: f64) -> Self {
        let mut c = [0.0; SERIES_TERMS];
        for (i, c) in c.iter_mut().enumerate() {
            let k = (i + 1) as f64;
            *c = sign / (2.0 * k * (2.0 * (n as f64) + 2.0 * k + 1.0));
        }

        PowerSeries {
            order: n as i32,
            leading: n.inverse_double_factorial(),
            c,
        }
    }

    /// Returns the value of the series expansion at `x`
    fn evaluate_at(&self, x: f64) -> f64 {
        let u = x * x;
        let sum = self.c.iter()
            .rev()
            .fold(1.0, |s, c| 1.0 + c * u * s);
        x.powi(self.order) * self.leading * sum
    }
}

/// Represents the large-argument expansion of i_n(x), which for
/// half-integer index terminates after n + 1 terms:
///   Σ_k b_k t^k, where t = ∓1/(8x) and
///   b_k = Π_{j=1}^k [(2n+1)^2 - (2j-1)^2] / k!.
/// No more than `ASYMPTOTIC_TERMS` are kept.
#[derive(Copy,Clone,Debug)]
struct AsymptoticSeries {
    b: [f64; ASYMPTOTIC_TERMS],
    len: usize,
}

impl AsymptoticSeries {
    fn for_order(n: usize) -> Self {
        let len = (n + 1).min(ASYMPTOTIC_TERMS);
        let m = ((2 * n + 1) * (2 * n + 1)) as f64;
        let mut b = [0.0; ASYMPTOTIC_TERMS];
        b[0] = 1.0;
        for k in 1..len {
            let odd = (2 * k - 1) as f64;
            b[k] = b[k-1] * (m - odd * odd) / (k as f64);
        }
        AsymptoticSeries { b, len }
    }

    /// Returns the value of the (truncated) polynomial at `t`
    fn evaluate_at(&self, t: f64) -> f64 {
        self.b[..self.len].iter()
            .rev()
            .fold(0.0, |s, b| s * t + b)
    }
}
