//! Contract violations reported by the radix sorter.
//!
//! The sorter has no transient failure modes. Every variant is a caller
//! error: a base outside the supported range, a configuration the selected
//! strategy cannot serve, or input the configuration does not accept. The
//! `try_*` entry points return these; the plain entry points panic with the
//! same message.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

use crate::Strategy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadixError {
    /// Base below 2.
    BaseTooSmall { base: usize },

    /// Base above the supported maximum.
    BaseTooLarge { base: usize, max: usize },

    /// A negative key was given while negative handling is disabled.
    NegativeElement {
        /// Position of the first negative key in the input.
        index: usize,
    },

    /// Negative handling was requested from a strategy without it.
    NegativeModeUnsupported { strategy: Strategy },

    /// A `[start, end)` range that does not fit the input.
    InvalidRange { start: usize, end: usize, len: usize },

    /// Strategy name not recognised by `Strategy::from_str`.
    UnknownStrategy(String),
}

impl Display for RadixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::BaseTooSmall { base } => write!(f, "radix base must be at least 2, got {base}"),
            Self::BaseTooLarge { base, max } => {
                write!(f, "radix base {base} exceeds the supported maximum {max}")
            }
            Self::NegativeElement { index } => write!(
                f,
                "negative key at index {index} but negative-number handling is disabled"
            ),
            Self::NegativeModeUnsupported { strategy } => write!(
                f,
                "strategy {} does not support negative-number handling",
                crate::strategy_name(*strategy)
            ),
            Self::InvalidRange { start, end, len } => write!(
                f,
                "range {start}..{end} is out of bounds for input of length {len}"
            ),
            Self::UnknownStrategy(name) => {
                write!(f, "unknown strategy {name:?}, expected \"msd\" or \"lsd\"")
            }
        }
    }
}

impl Error for RadixError {}
