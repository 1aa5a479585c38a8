//! Names for the six real-valued functions, so that they can be
//! selected at runtime

use std::fmt;
use std::str::FromStr;

use crate::error::OrderError;
use crate::special_functions::*;

/// One of j_n, y_n, i_n, i_n e^-x, k_n or k_n e^x.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Function {
    J,
    Y,
    I,
    IScaled,
    K,
    KScaled,
}

/// Returned when a string does not name a known function
#[derive(Debug,Clone,PartialEq)]
pub struct UnknownFunction(pub String);

impl fmt::Display for UnknownFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}' does not name a function, expected one of j, y, i, ic, k, kc", self.0)
    }
}

impl std::error::Error for UnknownFunction {}

impl FromStr for Function {
    type Err = UnknownFunction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "j" => Ok(Function::J),
            "y" => Ok(Function::Y),
            "i" => Ok(Function::I),
            "ic" => Ok(Function::IScaled),
            "k" => Ok(Function::K),
            "kc" => Ok(Function::KScaled),
            _ => Err(UnknownFunction(s.to_owned())),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Function::J => "j",
            Function::Y => "y",
            Function::I => "i",
            Function::IScaled => "ic",
            Function::K => "k",
            Function::KScaled => "kc",
        };
        write!(f, "{}", name)
    }
}

impl Function {
    /// Evaluates the function of order `n` at `x`.
    ///
    /// Builds fresh instances on every call: where many
    /// evaluations at fixed order are needed, build them once
    /// and use [`Function::apply`].
    pub fn evaluate(&self, n: usize, x: f64) -> Result<f64, OrderError> {
        let plain = SphericalBessel::of_order(n)?;
        let modified = ModifiedSphericalBessel::of_order(n)?;
        Ok(self.apply(&plain, &modified, x))
    }

    /// Evaluates the function at `x`, using whichever of the
    /// two families it belongs to.
    pub fn apply(&self, plain: &SphericalBessel, modified: &ModifiedSphericalBessel, x: f64) -> f64 {
        match self {
            Function::J => plain.j(x),
            Function::Y => plain.y(x),
            Function::I => modified.i(x),
            Function::IScaled => modified.ic(x),
            Function::K => modified.k(x),
            Function::KScaled => modified.kc(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        for name in ["j", "y", "i", "ic", "k", "kc"].iter() {
            let f: Function = name.parse().unwrap();
            assert_eq!(f.to_string(), *name);
        }
        assert!("jn".parse::<Function>().is_err());
        assert!("".parse::<Function>().is_err());
    }

    #[test]
    fn evaluate() {
        let value = Function::KScaled.evaluate(1, 10.0).unwrap();
        assert!((value - 0.11).abs() < 1.0e-15);

        let value = Function::J.evaluate(0, 0.0).unwrap();
        assert_eq!(value, 1.0);

        let err = Function::Y.evaluate(101, 1.0).unwrap_err();
        assert_eq!(err.order(), 101);
    }
}
