//! Recorded darts.
//!
//! A `Throw` is immutable once created: segment, multiplier, the value it
//! scored and its display label are all fixed at construction.

use serde::{Deserialize, Serialize};

use super::segment::{Multiplier, Segment};

/// Highest value a single dart can score (Triple-20).
pub const MAX_THROW_VALUE: u32 = 180;

/// Display label for a dart.
///
/// - `Miss`
/// - `Bull`, or `{m}x Bull` for a multiplied Bull
/// - `n`, `Dn`, `Tn` for numbered segments
///
/// A triple Bull does not exist on a real board, but a multiplied Bull is
/// still accepted and labeled `3x Bull` (value 150).
///
/// ```
/// use rust_darts::core::{format_dart, Multiplier, Segment};
///
/// assert_eq!(format_dart(Segment::number(20).unwrap(), Multiplier::Triple), "T20");
/// assert_eq!(format_dart(Segment::Bull, Multiplier::Double), "2x Bull");
/// assert_eq!(format_dart(Segment::Miss, Multiplier::Triple), "Miss");
/// ```
#[must_use]
pub fn format_dart(segment: Segment, multiplier: Multiplier) -> String {
    match (segment, multiplier) {
        (Segment::Miss, _) => "Miss".to_string(),
        (Segment::Bull, Multiplier::Single) => "Bull".to_string(),
        (Segment::Bull, m) => format!("{}x Bull", m.factor()),
        (Segment::Number(n), Multiplier::Single) => n.to_string(),
        (Segment::Number(n), Multiplier::Double) => format!("D{n}"),
        (Segment::Number(n), Multiplier::Triple) => format!("T{n}"),
    }
}

/// A scored dart.
///
/// Deserializing keeps only the segment and multiplier; value and label are
/// recomputed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ThrowRecord")]
pub struct Throw {
    segment: Segment,
    multiplier: Multiplier,
    value: u32,
    display: String,
}

impl Throw {
    /// Create a throw, computing its value and label.
    #[must_use]
    pub fn new(segment: Segment, multiplier: Multiplier) -> Self {
        Self {
            segment,
            multiplier,
            value: segment.base_value() * multiplier.factor(),
            display: format_dart(segment, multiplier),
        }
    }

    #[must_use]
    pub fn segment(&self) -> Segment {
        self.segment
    }

    #[must_use]
    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    /// Points scored: base value times multiplier.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Label shown in the throw history.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether this dart counts as a finishing dart under double-out.
    ///
    /// Any double qualifies, as does the plain Bull (50 is the inner bull).
    #[must_use]
    pub fn is_double_out(&self) -> bool {
        match self.segment {
            Segment::Number(_) => self.multiplier == Multiplier::Double,
            Segment::Bull => self.multiplier == Multiplier::Single,
            Segment::Miss => false,
        }
    }
}

#[derive(Deserialize)]
struct ThrowRecord {
    segment: Segment,
    multiplier: Multiplier,
}

impl From<ThrowRecord> for Throw {
    fn from(record: ThrowRecord) -> Self {
        Self::new(record.segment, record.multiplier)
    }
}

impl std::fmt::Display for Throw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}
