//! Spherical Bessel functions j_n, y_n and modified spherical
//! Bessel functions i_n, k_n, for integer orders 0 <= n <= 100
//! and real, non-negative argument.
//!
//! Each order is evaluated by a method chosen according to the
//! argument (power series, backward or forward recurrence, or a
//! large-argument expansion), giving close to full double precision
//! over the whole of [0, ∞).
//!
//! ```
//! use sphbessel::*;
//!
//! let j = SphericalBessel::of_order(5).unwrap();
//! let k = ModifiedSphericalBessel::of_order(5).unwrap();
//!
//! println!("j_5(3) = {:.6e}", j.j(3.0));
//! println!("k_5(800) e^800 = {:.6e}", k.kc(800.0));
//! assert!(SphericalBessel::of_order(101).is_err());
//! ```

pub mod constants;
pub mod error;
pub mod special_functions;
mod function;

pub use error::*;
pub use function::*;
pub use special_functions::*;
