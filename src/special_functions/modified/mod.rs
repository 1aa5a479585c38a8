//! Modified spherical Bessel functions of the first and second kind,
//! i_n(x) and k_n(x), and their exponentially scaled forms.
//!
//! The normalization is such that
//!   i_0(x) = sinh(x)/x and k_0(x) = e^-x / x.

use enum_dispatch::enum_dispatch;

use crate::constants::*;
use crate::error::OrderError;

mod base;
mod general;

pub use base::*;
pub use general::*;

/// Evaluates the modified spherical Bessel functions of a particular,
/// fixed order n at real argument x.
///
/// The scaled functions `ic` and `kc` remain representable
/// for arguments where `i` overflows or `k` underflows.
#[enum_dispatch]
pub trait ModifiedSphericalBesselFunction {
    /// The order n
    fn order(&self) -> usize;

    /// Returns the modified spherical Bessel function of the first kind, i_n(x)
    fn i(&self, x: f64) -> f64;

    /// Returns i_n(x) e^-x
    fn ic(&self, x: f64) -> f64;

    /// Returns the modified spherical Bessel function of the second kind, k_n(x)
    fn k(&self, x: f64) -> f64;

    /// Returns k_n(x) e^x
    fn kc(&self, x: f64) -> f64;
}

/// Modified spherical Bessel functions of fixed order.
///
/// # Examples
///
/// ```
/// use sphbessel::{ModifiedSphericalBessel, ModifiedSphericalBesselFunction};
/// let f = ModifiedSphericalBessel::of_order(1).unwrap();
/// assert!((f.kc(10.0) - 0.11).abs() < 1.0e-15);
/// ```
#[enum_dispatch(ModifiedSphericalBesselFunction)]
#[derive(Copy,Clone,Debug)]
pub enum ModifiedSphericalBessel {
    Order0(ModifiedOrder0),
    Order1(ModifiedOrder1),
    General(ModifiedGeneral),
}

impl ModifiedSphericalBessel {
    /// Returns the functions of order `n`, failing if `n`
    /// exceeds `MAX_ORDER`.
    pub fn of_order(n: usize) -> Result<Self, OrderError> {
        let f = match OrderError::check(n)? {
            0 => ModifiedSphericalBessel::from(*ModifiedOrder0::instance()),
            1 => ModifiedSphericalBessel::from(*ModifiedOrder1::instance()),
            n => ModifiedSphericalBessel::from(
                ModifiedGeneral::new(n, ModifiedOrder0::instance(), ModifiedOrder1::instance())
            ),
        };
        Ok(f)
    }
}

/// Converts a scaled value `f(x) e^-x` back to `f(x)`.
///
/// The exponential is shifted by a constant so that it only
/// overflows when the product would.
fn restore_exponent(scaled: f64, x: f64) -> f64 {
    scaled * (x - EXPONENT_SHIFT).exp() * EXP_EXPONENT_SHIFT
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;
    use rand_distr::Exp1;
    use rand_xoshiro::Xoshiro256StarStar;
    use super::*;

    fn all_orders() -> Vec<ModifiedSphericalBessel> {
        (0..=MAX_ORDER)
            .map(|n| ModifiedSphericalBessel::of_order(n).unwrap())
            .collect()
    }

    fn representable(v: f64) -> bool {
        v.is_finite() && v.abs() > 1.0e-280 && v.abs() < 1.0e280
    }

    #[test]
    fn factory() {
        for n in 0..=MAX_ORDER {
            assert_eq!(ModifiedSphericalBessel::of_order(n).unwrap().order(), n);
        }
        assert!(ModifiedSphericalBessel::of_order(MAX_ORDER + 1).is_err());
    }

    #[test]
    fn boundary_values() {
        for f in all_orders().iter() {
            let n = f.order();
            if n == 0 {
                assert_eq!(f.i(0.0), 1.0);
            } else {
                assert_eq!(f.i(0.0), 0.0);
            }
            assert_eq!(f.k(0.0), f64::INFINITY);
            assert_eq!(f.kc(0.0), f64::INFINITY);
            assert_eq!(f.i(f64::INFINITY), f64::INFINITY);
            assert_eq!(f.ic(f64::INFINITY), 0.0);
            assert_eq!(f.k(f64::INFINITY), 0.0);
            assert_eq!(f.kc(f64::INFINITY), 0.0);
            for x in [-1.0, -1.0e-300, f64::NEG_INFINITY, f64::NAN].iter() {
                assert!(f.i(*x).is_nan());
                assert!(f.ic(*x).is_nan());
                assert!(f.k(*x).is_nan());
                assert!(f.kc(*x).is_nan());
            }
        }
    }

    #[test]
    fn scaled_round_trip() {
        for f in all_orders().iter() {
            for x in [0.25, 0.9, 1.5, 7.0, 23.0, 40.0, 150.0, 600.0].iter() {
                let (i, ic) = (f.i(*x), f.ic(*x));
                let (k, kc) = (f.k(*x), f.kc(*x));
                if representable(i) && representable(ic) {
                    let error = (ic * x.exp() - i).abs() / i;
                    assert!(error < 1.0e-9);
                }
                if representable(k) && representable(kc) {
                    let error = (kc * (-x).exp() - k).abs() / k;
                    assert!(error < 1.0e-9);
                }
            }
        }
    }

    #[test]
    fn recurrence_law() {
        // i_(n-1) - i_(n+1) = (2n+1)/x i_n
        // k_(n+1) - k_(n-1) = (2n+1)/x k_n
        let functions = all_orders();
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);

        for _i in 0..20_000 {
            let n: usize = rng.gen_range(1, MAX_ORDER);
            let x = 1.0e-3 + 40.0 * rng.sample::<f64,_>(Exp1);
            let a = (2 * n + 1) as f64 / x;

            let (lower, middle, upper) = (functions[n-1].ic(x), functions[n].ic(x), functions[n+1].ic(x));
            if [lower, middle, upper].iter().all(|v| representable(*v)) {
                let error = ((lower - upper) - a * middle).abs() / lower.max(upper).max(a * middle);
                assert!(error < 1.0e-10);
            }

            let (lower, middle, upper) = (functions[n-1].kc(x), functions[n].kc(x), functions[n+1].kc(x));
            if [lower, middle, upper].iter().all(|v| representable(*v)) {
                let error = ((upper - lower) - a * middle).abs() / lower.max(upper).max(a * middle);
                assert!(error < 1.0e-10);
            }
        }
    }

    #[test]
    fn continuity() {
        let below = |x: f64| x * (1.0 - 1.0e-14);
        let above = |x: f64| x * (1.0 + 1.0e-14);

        for f in all_orders().iter() {
            let n = f.order() as f64;
            for x in [1.0, 0.5 * n * n, CORRECTION_CUTOFF].iter() {
                for (lo, hi) in [(f.i(below(*x)), f.i(above(*x))), (f.ic(below(*x)), f.ic(above(*x)))].iter() {
                    if !representable(*lo) || !representable(*hi) {
                        continue;
                    }
                    let error = (lo - hi).abs() / lo.max(*hi);
                    if error > 1.0e-9 {
                        println!("order {} discontinuous at x = {}: {:.12e} vs {:.12e}", n, x, lo, hi);
                    }
                    assert!(error < 1.0e-9);
                }
            }
        }
    }

    #[test]
    fn concurrent_evaluation() {
        use rayon::prelude::*;

        let functions = all_orders();
        let xs: Vec<f64> = (1..=400).map(|i| 0.37 * (i as f64)).collect();
        let evaluate = |x: f64| -> Vec<[f64; 4]> {
            functions.iter().map(|f| [f.i(x), f.ic(x), f.k(x), f.kc(x)]).collect()
        };

        let serial: Vec<Vec<[f64; 4]>> = xs.iter().map(|&x| evaluate(x)).collect();
        let parallel: Vec<Vec<[f64; 4]>> = xs.par_iter().map(|&x| evaluate(x)).collect();

        assert_eq!(serial, parallel);
    }

    #[test]
    fn shifted_exponent() {
        // e^712 overflows, i_2(712) = 1.14e306 does not
        let f = ModifiedSphericalBessel::of_order(2).unwrap();
        let value = f.i(712.0);
        let target = 1.1543299084936764144e306;
        let error = (value - target).abs() / target;
        println!("i(2, 712) = {:.6e}, expected {:.6e}, error {:.3e}", value, target, error);
        assert!(error < 1.0e-12);
    }
}
