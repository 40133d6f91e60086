//! Curated checkout table.
//!
//! Hand-authored finishing sequences for scores 2-170, one or a few per
//! score. This is reference data, not a solver: many legal alternatives are
//! missing and the bogey numbers (159, 162, 163, 165, 166, 168, 169) have no
//! entry at all. See [`super::generator`] for the exhaustive alternative.
//!
//! The table is parsed and validated once, on first use, and shared for the
//! life of the process.

use std::str::FromStr;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::dart::Dart;
use crate::core::{DartsError, DARTS_PER_TURN};

/// Highest score that can be finished in three darts (T20 T20 Bull).
pub const MAX_CHECKOUT: u32 = 170;

/// Lowest score that can be finished (D1).
pub const MIN_CHECKOUT: u32 = 2;

/// Sentinel entry marking a score that cannot be finished.
pub const NO_FINISH: &str = "No finish";

/// Source data, highest score first.
const CURATED: &[(u32, &[&str])] = &[
    (170, &["T20 T20 Bull"]),
    (167, &["T20 T19 Bull"]),
    (164, &["T20 T18 Bull"]),
    (161, &["T20 T17 Bull"]),
    (160, &["T20 T20 D20"]),
    (158, &["T20 T20 D19"]),
    (157, &["T20 T19 D20"]),
    (156, &["T20 T20 D18"]),
    (155, &["T20 T19 D19"]),
    (154, &["T20 T18 D20"]),
    (153, &["T20 T19 D18"]),
    (152, &["T20 T20 D16"]),
    (151, &["T20 T17 D20"]),
    (150, &["T20 T18 D18"]),
    (149, &["T20 T19 D16"]),
    (148, &["T20 T16 D20"]),
    (147, &["T20 T17 D18"]),
    (146, &["T20 T18 D16"]),
    (145, &["T20 T15 D20"]),
    (144, &["T20 T20 D12"]),
    (143, &["T20 T17 D16"]),
    (142, &["T20 T14 D20"]),
    (141, &["T20 T19 D12"]),
    (140, &["T20 T16 D16"]),
    (139, &["T19 T14 D20"]),
    (138, &["T20 T18 D12"]),
    (137, &["T20 T19 D10"]),
    (136, &["T20 T20 D8"]),
    (135, &["T20 T17 D12", "Bull T15 D20"]),
    (134, &["T20 T14 D16"]),
    (133, &["T20 T19 D8"]),
    (132, &["Bull Bull D16", "T20 T16 D12"]),
    (131, &["T20 T13 D16"]),
    (130, &["T20 T18 D8"]),
    (129, &["T19 T16 D12"]),
    (128, &["T18 T14 D16"]),
    (127, &["T20 T17 D8"]),
    (126, &["T19 T19 D6"]),
    (125, &["T20 T19 D4"]),
    (124, &["T20 T16 D8"]),
    (123, &["T19 T16 D9"]),
    (122, &["T18 T20 D4"]),
    (121, &["T20 T11 D14", "Bull T13 D16"]),
    (120, &["T20 20 D20"]),
    (119, &["T19 T10 D16"]),
    (118, &["T20 18 D20"]),
    (117, &["T20 17 D20"]),
    (116, &["T20 16 D20"]),
    (115, &["T20 15 D20"]),
    (114, &["T20 14 D20"]),
    (113, &["T20 13 D20"]),
    (112, &["T20 12 D20"]),
    (111, &["T20 11 D20"]),
    (110, &["T20 10 D20"]),
    (109, &["T20 9 D20"]),
    (108, &["T20 8 D20"]),
    (107, &["T19 10 D20"]),
    (106, &["T20 6 D20"]),
    (105, &["T20 13 D16"]),
    (104, &["T18 18 D16"]),
    (103, &["T17 12 D20"]),
    (102, &["T20 10 D16"]),
    (101, &["T17 10 D20"]),
    (100, &["T20 D20"]),
    (99, &["T19 10 D16"]),
    (98, &["T20 D19"]),
    (97, &["T19 D20"]),
    (96, &["T20 D18"]),
    (95, &["T19 D19"]),
    (94, &["T18 D20"]),
    (93, &["T19 D18"]),
    (92, &["T20 D16"]),
    (91, &["T17 D20"]),
    (90, &["T18 D18"]),
    (89, &["T19 D16"]),
    (88, &["T16 D20"]),
    (87, &["T17 D18"]),
    (86, &["T18 D16"]),
    (85, &["T15 D20"]),
    (84, &["T20 D12"]),
    (83, &["T17 D16"]),
    (82, &["Bull D16"]),
    (81, &["T19 D12"]),
    (80, &["T20 D10"]),
    (79, &["T13 D20"]),
    (78, &["T18 D12"]),
    (77, &["T19 D10"]),
    (76, &["T20 D8"]),
    (75, &["T17 D12"]),
    (74, &["T14 D16"]),
    (73, &["T19 D8"]),
    (72, &["T16 D12"]),
    (71, &["T13 D16"]),
    (70, &["T18 D8"]),
    (69, &["T19 D6"]),
    (68, &["T20 D4"]),
    (67, &["T17 D8"]),
    (66, &["T10 D18"]),
    (65, &["T19 D4"]),
    (64, &["T16 D8"]),
    (63, &["T13 D12"]),
    (62, &["T10 D16"]),
    (61, &["T15 D8"]),
    (60, &["20 D20"]),
    (59, &["19 D20"]),
    (58, &["18 D20"]),
    (57, &["17 D20"]),
    (56, &["16 D20"]),
    (55, &["15 D20"]),
    (54, &["14 D20"]),
    (53, &["13 D20"]),
    (52, &["12 D20"]),
    (51, &["11 D20"]),
    (50, &["10 D20"]),
    (49, &["9 D20"]),
    (48, &["16 D16"]),
    (47, &["15 D16"]),
    (46, &["14 D16"]),
    (45, &["13 D16"]),
    (44, &["12 D16"]),
    (43, &["11 D16"]),
    (42, &["10 D16"]),
    (41, &["9 D16"]),
    (40, &["D20"]),
    (39, &["7 D16"]),
    (38, &["D19"]),
    (37, &["5 D16"]),
    (36, &["D18"]),
    (35, &["3 D16"]),
    (34, &["D17"]),
    (33, &["1 D16"]),
    (32, &["D16"]),
    (31, &["15 D8"]),
    (30, &["D15"]),
    (29, &["13 D8"]),
    (28, &["D14"]),
    (27, &["11 D8"]),
    (26, &["D13"]),
    (25, &["9 D8"]),
    (24, &["D12"]),
    (23, &["7 D8"]),
    (22, &["D11"]),
    (21, &["5 D8"]),
    (20, &["D10"]),
    (19, &["3 D8"]),
    (18, &["D9"]),
    (17, &["1 D8"]),
    (16, &["D8"]),
    (15, &["7 D4"]),
    (14, &["D7"]),
    (13, &["5 D4"]),
    (12, &["D6"]),
    (11, &["3 D4"]),
    (10, &["D5"]),
    (9, &["1 D4"]),
    (8, &["D4"]),
    (7, &["3 D2"]),
    (6, &["D3"]),
    (5, &["1 D2"]),
    (4, &["D2"]),
    (3, &["1 D1"]),
    (2, &["D1"]),
    (1, &[NO_FINISH]),
];

/// A finishing sequence of one to three darts.
///
/// Deserialization applies the same shape check as [`Checkout::new`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CheckoutRecord")]
pub struct Checkout {
    darts: SmallVec<[Dart; 3]>,
}

#[derive(Deserialize)]
struct CheckoutRecord {
    darts: SmallVec<[Dart; 3]>,
}

impl TryFrom<CheckoutRecord> for Checkout {
    type Error = DartsError;

    fn try_from(record: CheckoutRecord) -> Result<Self, Self::Error> {
        Self::new(&record.darts)
    }
}

impl Checkout {
    /// Build a checkout from its darts.
    ///
    /// Only the shape is checked here (1-3 darts, last one a double or
    /// Bull); use [`Checkout::is_valid_for`] to check the total.
    pub fn new(darts: &[Dart]) -> Result<Self, DartsError> {
        let well_formed = !darts.is_empty()
            && darts.len() <= DARTS_PER_TURN
            && darts.last().is_some_and(|d| d.is_finishing());

        if !well_formed {
            let sequence = darts.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
            let score = darts.iter().map(|d| d.value()).sum();
            return Err(DartsError::InvalidCheckout { score, sequence });
        }

        Ok(Self { darts: SmallVec::from_slice(darts) })
    }

    /// Build from darts already known to form a legal finish.
    pub(super) fn from_legal(darts: &[Dart]) -> Self {
        debug_assert!(darts.last().is_some_and(|d| d.is_finishing()));
        Self { darts: SmallVec::from_slice(darts) }
    }

    #[must_use]
    pub fn darts(&self) -> &[Dart] {
        &self.darts
    }

    /// Number of darts needed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.darts.len()
    }

    /// Always false; a checkout has at least one dart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.darts.is_empty()
    }

    /// Points the sequence scores.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.darts.iter().map(|d| d.value()).sum()
    }

    /// Whether the sequence finishes exactly from `score`.
    #[must_use]
    pub fn is_valid_for(&self, score: u32) -> bool {
        self.total() == score
    }
}

impl std::fmt::Display for Checkout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, dart) in self.darts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{dart}")?;
        }
        Ok(())
    }
}

impl FromStr for Checkout {
    type Err = DartsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let darts = s
            .split_whitespace()
            .map(Dart::from_str)
            .collect::<Result<SmallVec<[Dart; 3]>, _>>()?;
        Self::new(&darts)
    }
}

/// Score -> suggested finishes.
///
/// ## Example
///
/// ```
/// use rust_darts::checkout::CheckoutTable;
///
/// let table = CheckoutTable::curated();
/// let outs: Vec<String> = table.lookup(170).iter().map(ToString::to_string).collect();
/// assert_eq!(outs, ["T20 T20 Bull"]);
/// assert!(table.lookup(169).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CheckoutTable {
    entries: FxHashMap<u32, Vec<Checkout>>,
}

impl CheckoutTable {
    /// Build a table from `(score, sequences)` pairs.
    ///
    /// Every sequence must parse, add up to its score and end on a double
    /// or Bull. A score whose only sequence is [`NO_FINISH`] is stored with
    /// no suggestions.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, DartsError>
    where
        I: IntoIterator<Item = &'a (u32, &'a [&'a str])>,
    {
        let mut table = FxHashMap::default();

        for &(score, sequences) in entries {
            let mut checkouts = Vec::with_capacity(sequences.len());
            for &sequence in sequences.iter().filter(|&&s| s != NO_FINISH) {
                let invalid = || DartsError::InvalidCheckout {
                    score,
                    sequence: sequence.to_string(),
                };
                let checkout: Checkout = sequence.parse().map_err(|_| invalid())?;
                if !checkout.is_valid_for(score) {
                    return Err(invalid());
                }
                checkouts.push(checkout);
            }
            table.insert(score, checkouts);
        }

        Ok(Self { entries: table })
    }

    /// The built-in curated table, parsed on first use.
    ///
    /// The entries are compiled in and checked by this module's tests, so a
    /// validation failure here is a build defect rather than a runtime
    /// condition. It is logged and an empty table is returned instead of
    /// panicking.
    pub fn curated() -> &'static CheckoutTable {
        static TABLE: OnceLock<CheckoutTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            Self::from_entries(CURATED).unwrap_or_else(|err| {
                log::error!("curated checkout table rejected: {err}");
                Self::default()
            })
        })
    }

    /// Suggestions stored for `score`, best first. Empty when the score has
    /// no entry or is marked as no finish.
    #[must_use]
    pub fn lookup(&self, score: u32) -> &[Checkout] {
        self.entries.get(&score).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `score` has an entry (possibly a no-finish entry).
    #[must_use]
    pub fn contains(&self, score: u32) -> bool {
        self.entries.contains_key(&score)
    }

    /// Number of scores with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over scored entries in ascending score order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[Checkout])> {
        let mut scores: Vec<_> = self.entries.keys().copied().collect();
        scores.sort_unstable();
        scores.into_iter().map(move |s| (s, self.lookup(s)))
    }
}
