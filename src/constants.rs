//! Numerical constants, calibrated for IEEE double precision

/// Largest order supported by both the plain and modified families
pub const MAX_ORDER: usize = 100;
/// Below this, the 0/0-prone closed forms are replaced by their limits
pub const TINY_ARGUMENT: f64 = 1.0e-100;
/// Starting value for backward (Miller) recurrence
pub const RECURRENCE_SEED: f64 = 1.0e-280;
/// Backward recurrence renormalizes once a running value exceeds this
pub const RENORMALIZATION_THRESHOLD: f64 = 1.0e200;
/// Number of terms (after the leading one) in the small-argument power series
pub const SERIES_TERMS: usize = 10;
/// Maximum number of terms in the large-argument expansion of i_n
pub const ASYMPTOTIC_TERMS: usize = 20;
/// Subtracted from x before exponentiating, so that e^x overflows
/// no earlier than the function itself
pub const EXPONENT_SHIFT: f64 = 20.0;
/// e^EXPONENT_SHIFT
pub const EXP_EXPONENT_SHIFT: f64 = 485165195.4097903;
/// Beyond this, the exp(-2x) correction to the expansion of i_n is
/// below double precision and dropped
pub const CORRECTION_CUTOFF: f64 = 24.0;
