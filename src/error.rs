//! Construction-time errors

use std::fmt;
use std::error::Error;

use crate::constants::MAX_ORDER;

/// Why did a factory refuse to build an instance?
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum OrderErrorKind {
    Unsupported,
}

/// Error returned when a function of unsupported order is requested.
#[derive(Copy,Clone,PartialEq)]
pub struct OrderError {
    kind: OrderErrorKind,
    order: usize,
}

impl fmt::Debug for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            OrderErrorKind::Unsupported => write!(f, "order {} is not supported, must be between 0 and {} inclusive", self.order, MAX_ORDER),
        }
    }
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for OrderError {}

impl OrderError {
    pub fn unsupported(order: usize) -> Self {
        Self {
            kind: OrderErrorKind::Unsupported,
            order,
        }
    }

    /// Checks that `order` lies within the supported range
    pub fn check(order: usize) -> Result<usize, Self> {
        if order <= MAX_ORDER {
            Ok(order)
        } else {
            Err(Self::unsupported(order))
        }
    }

    pub fn kind(&self) -> OrderErrorKind {
        self.kind
    }

    /// The order that was requested
    pub fn order(&self) -> usize {
        self.order
    }
}
