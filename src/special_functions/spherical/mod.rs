//! Spherical Bessel functions of the first and second kind, j_n(x) and y_n(x)

use enum_dispatch::enum_dispatch;
use num_complex::Complex;

use crate::error::OrderError;

mod base;
mod general;

pub use base::*;
pub use general::*;

/// Evaluates the spherical Bessel functions of a particular,
/// fixed order n at real argument x.
///
/// All methods are total: negative or NaN arguments give NaN,
/// and the limits at x = 0 and x = ∞ are returned exactly.
#[enum_dispatch]
pub trait SphericalBesselFunction {
    /// The order n
    fn order(&self) -> usize;

    /// Returns the spherical Bessel function of the first kind, j_n(x)
    fn j(&self, x: f64) -> f64;

    /// Returns the spherical Bessel function of the second kind, y_n(x)
    fn y(&self, x: f64) -> f64;

    /// Returns the spherical Hankel function of the first kind,
    /// h^(1)_n(x) = j_n(x) + i y_n(x)
    fn h1(&self, x: f64) -> Complex<f64> {
        Complex::new(self.j(x), self.y(x))
    }

    /// Returns the spherical Hankel function of the second kind,
    /// h^(2)_n(x) = j_n(x) - i y_n(x)
    fn h2(&self, x: f64) -> Complex<f64> {
        Complex::new(self.j(x), -self.y(x))
    }
}

/// Spherical Bessel functions of fixed order.
///
/// # Examples
///
/// ```
/// use sphbessel::{SphericalBessel, SphericalBesselFunction};
/// let f = SphericalBessel::of_order(2).unwrap();
/// let j = f.j(3.0);
/// assert!((j - 0.2986374970757335).abs() < 1.0e-14);
/// ```
#[enum_dispatch(SphericalBesselFunction)]
#[derive(Copy,Clone,Debug)]
pub enum SphericalBessel {
    Order0(SphericalOrder0),
    Order1(SphericalOrder1),
    General(SphericalGeneral),
}

impl SphericalBessel {
    /// Returns the functions of order `n`, failing if `n`
    /// exceeds `MAX_ORDER`.
    pub fn of_order(n: usize) -> Result<Self, OrderError> {
        let f = match OrderError::check(n)? {
            0 => SphericalBessel::from(*SphericalOrder0::instance()),
            1 => SphericalBessel::from(*SphericalOrder1::instance()),
            n => SphericalBessel::from(
                SphericalGeneral::new(n, SphericalOrder0::instance(), SphericalOrder1::instance())
            ),
        };
        Ok(f)
    }
}
