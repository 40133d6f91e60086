//! Board segments and ring multipliers.
//!
//! ## Segment
//!
//! Closed set of things a dart can hit: a numbered wedge (1-20), the Bull,
//! or nothing at all. The wedge number is a [`BoardNumber`], which cannot
//! hold anything outside 1-20, so no segment scores more than 60.
//!
//! ## Multiplier
//!
//! The ring the player selected before throwing: single, double or triple.

use serde::{Deserialize, Serialize};

use super::error::DartsError;

/// Base value of the Bull.
pub const BULL_VALUE: u32 = 50;

/// Highest numbered wedge.
pub const MAX_NUMBER: u8 = 20;

/// A wedge number, always in 1-20.
///
/// Deserialization goes through [`BoardNumber::new`], so out-of-range
/// numbers are rejected there too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BoardNumber(u8);

impl BoardNumber {
    /// ```
    /// use rust_darts::core::BoardNumber;
    ///
    /// assert_eq!(BoardNumber::new(20).unwrap().get(), 20);
    /// assert!(BoardNumber::new(0).is_err());
    /// assert!(BoardNumber::new(21).is_err());
    /// ```
    pub fn new(n: u8) -> Result<Self, DartsError> {
        if (1..=MAX_NUMBER).contains(&n) {
            Ok(Self(n))
        } else {
            Err(DartsError::InvalidSegment(n))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// 1 through 20, ascending.
    pub fn all() -> impl DoubleEndedIterator<Item = BoardNumber> {
        (1..=MAX_NUMBER).map(Self)
    }
}

impl TryFrom<u8> for BoardNumber {
    type Error = DartsError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<BoardNumber> for u8 {
    fn from(n: BoardNumber) -> Self {
        n.0
    }
}

impl std::fmt::Display for BoardNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a dart landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// Numbered wedge, 1-20.
    Number(BoardNumber),
    /// Center target, base value 50.
    Bull,
    /// Off the board (or a bounce-out), value 0.
    Miss,
}

impl Segment {
    /// Create a numbered segment, rejecting anything outside 1-20.
    ///
    /// ```
    /// use rust_darts::core::Segment;
    ///
    /// assert_eq!(Segment::number(20).unwrap().base_value(), 20);
    /// assert!(Segment::number(0).is_err());
    /// assert!(Segment::number(21).is_err());
    /// ```
    pub fn number(n: u8) -> Result<Self, DartsError> {
        BoardNumber::new(n).map(Self::Number)
    }

    /// Value of a single hit on this segment.
    #[must_use]
    pub const fn base_value(self) -> u32 {
        match self {
            Self::Number(n) => n.get() as u32,
            Self::Bull => BULL_VALUE,
            Self::Miss => 0,
        }
    }

    /// All segments in input-pad order: 1..=20, Bull, Miss.
    pub fn board() -> impl Iterator<Item = Segment> {
        BoardNumber::all()
            .map(Segment::Number)
            .chain([Segment::Bull, Segment::Miss])
    }

    #[must_use]
    pub const fn is_miss(self) -> bool {
        matches!(self, Self::Miss)
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bull => f.write_str("Bull"),
            Self::Miss => f.write_str("Miss"),
        }
    }
}

/// Ring multiplier applied to a segment's base value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Multiplier {
    #[default]
    Single = 1,
    Double = 2,
    Triple = 3,
}

impl Multiplier {
    /// All multipliers, lowest first.
    pub const ALL: [Multiplier; 3] = [Self::Single, Self::Double, Self::Triple];

    /// Numeric factor (1, 2 or 3).
    #[must_use]
    pub const fn factor(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u8> for Multiplier {
    type Error = DartsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Single),
            2 => Ok(Self::Double),
            3 => Ok(Self::Triple),
            other => Err(DartsError::InvalidMultiplier(other)),
        }
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x", self.factor())
    }
}
