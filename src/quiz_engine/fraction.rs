use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::EngineError;

/// An ordered numerator/denominator pair.
///
/// Answer fractions are always stored in lowest terms (see [`Fraction::simplified`]);
/// the displayed, scaled-up form of a reduction exercise is kept as plain
/// integers by the generator and never round-trips through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Fraction { numerator, denominator }
    }

    /// Return this fraction reduced to lowest terms.
    ///
    /// Fails only on a zero denominator, which the generators never produce;
    /// hitting that branch means an invariant was violated upstream.
    pub fn simplified(self) -> Result<Fraction, EngineError> {
        if self.denominator == 0 {
            return Err(EngineError::InvalidFraction {
                numerator: self.numerator,
                denominator: self.denominator,
            });
        }
        let d = gcd(self.numerator, self.denominator);
        Ok(Fraction {
            numerator: self.numerator / d,
            denominator: self.denominator / d,
        })
    }

    /// True when numerator and denominator share no factor greater than 1.
    pub fn is_reduced(self) -> bool {
        gcd(self.numerator, self.denominator) == 1
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Euclidean gcd; `gcd(a, 0) = a`.
pub fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}
