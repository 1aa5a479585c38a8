//! Output-related errors

use std::fmt;
use std::error::Error;

use sphbessel::{OrderError, UnknownFunction};

pub enum OutputError {
    Conversion(String, String),
    Order(OrderError),
    Write(String),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputError::Conversion(s, t) => write!(f, "'{}' does not specify a valid {}", s, t),
            OutputError::Order(e) => write!(f, "cannot tabulate: {}", e),
            OutputError::Write(s) => write!(f, "failed to write table to '{}'", s),
        }
    }
}

impl fmt::Debug for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Error for OutputError {}

impl From<OrderError> for OutputError {
    fn from(e: OrderError) -> Self {
        OutputError::Order(e)
    }
}

impl From<UnknownFunction> for OutputError {
    fn from(e: UnknownFunction) -> Self {
        OutputError::Conversion(e.0, "function, expected one of j, y, i, ic, k, kc".to_owned())
    }
}

impl OutputError {
    pub fn conversion(field: &str, target: &str) -> Self {
        Self::Conversion(field.to_owned(), target.to_owned())
    }
}
