//! Closed forms for i_n, k_n at orders 0 and 1

use crate::constants::*;
use crate::special_functions::PowerSeries;
use super::{ModifiedSphericalBesselFunction, restore_exponent};

/// i_0(x) = sinh(x)/x, k_0(x) = e^-x / x
#[derive(Copy,Clone,Debug)]
pub struct ModifiedOrder0 {}

/// i_1(x) = cosh(x)/x - sinh(x)/x^2, k_1(x) = e^-x (1/x + 1/x^2)
#[derive(Copy,Clone,Debug)]
pub struct ModifiedOrder1 {
    series: PowerSeries,
}

static ORDER_0: ModifiedOrder0 = ModifiedOrder0 {};

impl ModifiedOrder0 {
    /// Returns the process-wide order-0 instance
    pub(super) fn instance() -> &'static Self {
        &ORDER_0
    }
}

impl ModifiedOrder1 {
    /// Returns the process-wide order-1 instance
    pub(super) fn instance() -> &'static Self {
        use std::sync::OnceLock;
        static ORDER_1: OnceLock<ModifiedOrder1> = OnceLock::new();
        ORDER_1.get_or_init(|| ModifiedOrder1 {
            series: PowerSeries::for_order(1, 1.0),
        })
    }
}

impl ModifiedSphericalBesselFunction for ModifiedOrder0 {
    fn order(&self) -> usize {
        0
    }

    fn i(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 {
            f64::NAN
        } else if x < TINY_ARGUMENT {
            1.0
        } else if x.is_infinite() {
            f64::INFINITY
        } else if x < 1.0 {
            x.sinh() / x
        } else {
            restore_exponent(self.ic(x), x)
        }
    }

    fn ic(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 {
            f64::NAN
        } else if x < TINY_ARGUMENT {
            1.0
        } else if x.is_infinite() {
            0.0
        } else {
            -(-2.0 * x).exp_m1() / (2.0 * x)
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
            (-x).exp() / x
        }
    }

    fn kc(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 {
            f64::NAN
        } else if x == 0.0 {
            f64::INFINITY
        } else if x.is_infinite() {
            0.0
        } else {
            1.0 / x
        }
    }
}

impl ModifiedSphericalBesselFunction for ModifiedOrder1 {
    fn order(&self) -> usize {
        1
    }

    fn i(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 {
            f64::NAN
        } else if x < TINY_ARGUMENT {
            x / 3.0
        } else if x.is_infinite() {
            f64::INFINITY
        } else if x < 1.0 {
            self.series.evaluate_at(x)
        } else {
            restore_exponent(self.ic(x), x)
        }
    }

    fn ic(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 {
            f64::NAN
        } else if x < TINY_ARGUMENT {
            x / 3.0
        } else if x.is_infinite() {
            0.0
        } else if x < 1.0 {
            self.series.evaluate_at(x) * (-x).exp()
        } else {
            let e = (-2.0 * x).exp();
            0.5 * (1.0 + e) / x + 0.5 * (-2.0 * x).exp_m1() / (x * x)
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
            (-x).exp() * self.kc(x)
        }
    }

    fn kc(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 {
            f64::NAN
        } else if x == 0.0 {
            f64::INFINITY
        } else if x.is_infinite() {
            0.0
        } else {
            (1.0 + 1.0 / x) / x
        }
    }
}
