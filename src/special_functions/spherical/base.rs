//! Closed forms for j_n, y_n at orders 0 and 1

use crate::constants::*;
use crate::special_functions::PowerSeries;
use super::SphericalBesselFunction;

/// j_0(x) = sin(x)/x, y_0(x) = -cos(x)/x
#[derive(Copy,Clone,Debug)]
pub struct SphericalOrder0 {}

/// j_1(x) = sin(x)/x^2 - cos(x)/x, y_1(x) = -cos(x)/x^2 - sin(x)/x
#[derive(Copy,Clone,Debug)]
pub struct SphericalOrder1 {
    series: PowerSeries,
}

/// Process-wide order-0 instance, shared by all higher orders
static ORDER_0: SphericalOrder0 = SphericalOrder0 {};

impl SphericalOrder0 {
    pub(super) fn instance() -> &'static Self {
        &ORDER_0
    }
}

impl SphericalOrder1 {
    /// Returns the process-wide order-1 instance
    pub(super) fn instance() -> &'static Self {
        use std::sync::OnceLock;
        static ORDER_1: OnceLock<SphericalOrder1> = OnceLock::new();
        ORDER_1.get_or_init(|| SphericalOrder1 {
            series: PowerSeries::for_order(1, -1.0),
        })
    }
}

impl SphericalBesselFunction for SphericalOrder0 {
    fn order(&self) -> usize {
        0
    }

    fn j(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 {
            f64::NAN
        } else if x < TINY_ARGUMENT {
            1.0
        } else if x.is_infinite() {
            0.0
        } else {
            x.sin() / x
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
            -x.cos() / x
        }
    }
}

impl SphericalBesselFunction for SphericalOrder1 {
    fn order(&self) -> usize {
        1
    }

    fn j(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 {
            f64::NAN
        } else if x < TINY_ARGUMENT {
            x / 3.0
        } else if x < 1.0 {
            // the closed form cancels catastrophically
            self.series.evaluate_at(x)
        } else if x.is_infinite() {
            0.0
        } else {
            let (s, c) = x.sin_cos();
            (s / x - c) / x
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
            let (s, c) = x.sin_cos();
            -c / (x * x) - s / x
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    static MAX_ERROR: f64 = 1.0e-14;

    #[test]
    fn limits() {
        let j0 = SphericalOrder0::instance();
        let j1 = SphericalOrder1::instance();
        assert_eq!(j0.j(0.0), 1.0);
        assert_eq!(j0.j(1.0e-200), 1.0);
        assert_eq!(j1.j(0.0), 0.0);
        assert_eq!(j0.y(0.0), f64::NEG_INFINITY);
        assert_eq!(j1.y(0.0), f64::NEG_INFINITY);
        assert_eq!(j0.j(f64::INFINITY), 0.0);
        assert_eq!(j1.j(f64::INFINITY), 0.0);
        assert_eq!(j0.y(f64::INFINITY), 0.0);
        assert_eq!(j1.y(f64::INFINITY), 0.0);
        assert!(j0.j(-1.0).is_nan());
        assert!(j1.y(-1.0).is_nan());
        assert!(j1.j(f64::NAN).is_nan());
    }

    #[test]
    fn j0_3() {
        let target = 0.047040002686622407367;
        let value = SphericalOrder0::instance().j(3.0);
        let error = (target - value).abs() / target;
        println!("j(0, {}) = {:.6e}, expected {:.6e}, error {:.3e}", 3.0, value, target, error);
        assert!(error < MAX_ERROR);
    }

    #[test]
    fn j1_small() {
        // power series branch, where sin(x)/x^2 - cos(x)/x loses all digits
        let target = 3.3333333333e-6;
        let value = SphericalOrder1::instance().j(1.0e-5);
        let error = (target - value).abs() / target;
        println!("j(1, {}) = {:.6e}, expected {:.6e}, error {:.3e}", 1.0e-5, value, target, error);
        assert!(error < MAX_ERROR);
    }

    #[test]
    fn y1_3() {
        let target = 0.062959163602315976774;
        let value = SphericalOrder1::instance().y(3.0);
        let error = (target - value).abs() / target;
        println!("y(1, {}) = {:.6e}, expected {:.6e}, error {:.3e}", 3.0, value, target, error);
        assert!(error < MAX_ERROR);
    }
}
