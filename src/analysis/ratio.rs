//! Exact rational comparisons for threshold rules
//!
//! Rates and per-match averages are kept as integer fractions so that a rule
//! such as "at least 1.5 goals per match" holds exactly at 3/2 instead of
//! depending on floating-point rounding.

use serde::Serialize;
use std::cmp::Ordering;

/// Non-negative fraction `num / den`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ratio {
    num: u64,
    den: u64,
}

impl Ratio {
    pub fn new(num: u32, den: u32) -> Self {
        Ratio {
            num: num as u64,
            den: den as u64,
        }
    }

    /// `pct` percent as a fraction
    pub fn percent(pct: u32) -> Self {
        Ratio::new(pct, 100)
    }

    /// Decimal threshold given in tenths, e.g. `tenths(28)` is 2.8
    pub fn tenths(value: u32) -> Self {
        Ratio::new(value, 10)
    }

    /// Floating-point value for display (0 when undefined)
    pub fn value(&self) -> f64 {
        if self.den == 0 {
            0.0
        } else {
            self.num as f64 / self.den as f64
        }
    }

    /// Value expressed as a percentage, for display
    pub fn as_percent(&self) -> f64 {
        self.value() * 100.0
    }

    /// `self >= threshold`; an undefined ratio never reaches a threshold
    pub fn at_least(&self, threshold: Ratio) -> bool {
        if self.den == 0 || threshold.den == 0 {
            return false;
        }
        self.num * threshold.den >= threshold.num * self.den
    }

    /// Compare by value; undefined ratios count as zero
    pub fn compare(&self, other: &Ratio) -> Ordering {
        match (self.den, other.den) {
            (0, 0) => Ordering::Equal,
            (0, _) => 0u64.cmp(&other.num),
            (_, 0) => self.num.cmp(&0),
            _ => (self.num * other.den).cmp(&(other.num * self.den)),
        }
    }

    pub fn sum(&self, other: Ratio) -> Ratio {
        if self.den == 0 {
            return other;
        }
        if other.den == 0 {
            return *self;
        }
        Ratio {
            num: self.num * other.den + other.num * self.den,
            den: self.den * other.den,
        }
    }

    /// Arithmetic mean of two ratios
    pub fn mean(&self, other: Ratio) -> Ratio {
        let total = self.sum(other);
        Ratio {
            num: total.num,
            den: total.den * 2,
        }
    }
}
