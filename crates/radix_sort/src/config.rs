use std::str::FromStr;

use crate::RadixError;
use crate::algorithms::digit::MAX_BASE;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// Most significant digit first, recursing into each bucket.
    Msd,
    /// Least significant digit first, one full pass per digit position.
    Lsd,
}

pub const ALL_STRATEGIES: [Strategy; 2] = [Strategy::Msd, Strategy::Lsd];

pub fn strategy_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Msd => "msd",
        Strategy::Lsd => "lsd",
    }
}

impl FromStr for Strategy {
    type Err = RadixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_STRATEGIES
            .iter()
            .copied()
            .find(|&strategy| strategy_name(strategy).eq_ignore_ascii_case(s))
            .ok_or_else(|| RadixError::UnknownStrategy(s.to_string()))
    }
}

/// Settings for one sorter: radix, strategy and whether keys may be negative.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortConfig {
    pub base: usize,
    pub strategy: Strategy,
    pub negative_numbers: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            base: 10,
            strategy: Strategy::Msd,
            negative_numbers: false,
        }
    }
}

impl SortConfig {
    pub const fn new(base: usize) -> Self {
        Self {
            base,
            strategy: Strategy::Msd,
            negative_numbers: false,
        }
    }

    pub const fn with_base(mut self, base: usize) -> Self {
        self.base = base;
        self
    }

    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub const fn with_negative_numbers(mut self, enabled: bool) -> Self {
        self.negative_numbers = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), RadixError> {
        if self.base < 2 {
            return Err(RadixError::BaseTooSmall { base: self.base });
        }
        if self.base > MAX_BASE {
            return Err(RadixError::BaseTooLarge {
                base: self.base,
                max: MAX_BASE,
            });
        }
        if self.negative_numbers && self.strategy == Strategy::Lsd {
            return Err(RadixError::NegativeModeUnsupported {
                strategy: self.strategy,
            });
        }
        Ok(())
    }
}
