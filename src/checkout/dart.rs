//! Checkout tokens.
//!
//! A checkout suggestion is a space-separated list of tokens, each naming
//! one dart the way the throw history labels it: `20`, `D20`, `T20`, `Bull`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{format_dart, BoardNumber, DartsError, Multiplier, Segment, Throw};

/// One planned dart in a checkout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dart {
    pub segment: Segment,
    pub multiplier: Multiplier,
}

impl Dart {
    #[must_use]
    pub const fn new(segment: Segment, multiplier: Multiplier) -> Self {
        Self { segment, multiplier }
    }

    #[must_use]
    pub const fn single(n: BoardNumber) -> Self {
        Self::new(Segment::Number(n), Multiplier::Single)
    }

    #[must_use]
    pub const fn double(n: BoardNumber) -> Self {
        Self::new(Segment::Number(n), Multiplier::Double)
    }

    #[must_use]
    pub const fn triple(n: BoardNumber) -> Self {
        Self::new(Segment::Number(n), Multiplier::Triple)
    }

    #[must_use]
    pub const fn bull() -> Self {
        Self::new(Segment::Bull, Multiplier::Single)
    }

    /// Points this dart scores.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.segment.base_value() * self.multiplier.factor()
    }

    /// Whether the dart may end a leg: any double, or the Bull.
    #[must_use]
    pub fn is_finishing(self) -> bool {
        matches!(
            (self.segment, self.multiplier),
            (Segment::Number(_), Multiplier::Double) | (Segment::Bull, Multiplier::Single)
        )
    }

    /// The throw this dart produces when hit.
    #[must_use]
    pub fn to_throw(self) -> Throw {
        Throw::new(self.segment, self.multiplier)
    }
}

impl std::fmt::Display for Dart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_dart(self.segment, self.multiplier))
    }
}

impl FromStr for Dart {
    type Err = DartsError;

    /// Parse `Bull`, `Dn`, `Tn` or `n` (n in 1-20).
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || DartsError::InvalidToken(token.to_string());

        if token == "Bull" {
            return Ok(Self::bull());
        }

        let (multiplier, digits) = match token.as_bytes().first() {
            Some(b'D') => (Multiplier::Double, &token[1..]),
            Some(b'T') => (Multiplier::Triple, &token[1..]),
            Some(_) => (Multiplier::Single, token),
            None => return Err(invalid()),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let n: u8 = digits.parse().map_err(|_| invalid())?;
        let segment = Segment::number(n).map_err(|_| invalid())?;

        Ok(Self::new(segment, multiplier))
    }
}
