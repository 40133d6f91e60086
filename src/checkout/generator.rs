//! Exhaustive checkout generation.
//!
//! Enumerates every legal finish instead of relying on the curated table:
//! one to three darts over singles 1-20, doubles, triples and the Bull,
//! with the last dart a double or the Bull.
//!
//! ## Ordering
//!
//! Fewest darts first. Within a dart count, set-up darts are tried from the
//! highest value down and finishing doubles from D20 down to D1, then Bull.
//! The first two darts of a three-dart finish are treated as unordered, so
//! `T20 T19 D4` is produced but `T19 T20 D4` is not.

use super::dart::Dart;
use super::table::{Checkout, MAX_CHECKOUT, MIN_CHECKOUT};
use crate::core::{BoardNumber, Multiplier, Segment};

/// Every dart that scores, highest value first (triples before doubles
/// before singles on ties).
fn scoring_darts() -> Vec<Dart> {
    let mut darts: Vec<Dart> = BoardNumber::all()
        .flat_map(|n| Multiplier::ALL.map(|m| Dart::new(Segment::Number(n), m)))
        .chain(std::iter::once(Dart::bull()))
        .collect();
    darts.sort_by(|a, b| b.value().cmp(&a.value()).then(b.multiplier.cmp(&a.multiplier)));
    darts
}

/// Legal last darts: D20 down to D1, then Bull.
fn finishing_darts() -> Vec<Dart> {
    BoardNumber::all()
        .rev()
        .map(Dart::double)
        .chain(std::iter::once(Dart::bull()))
        .collect()
}

/// Up to `limit` finishes for `score` using at most `max_darts` darts.
///
/// ```
/// use rust_darts::checkout::generator::finishes;
///
/// let outs: Vec<String> = finishes(170, 3, 10).iter().map(ToString::to_string).collect();
/// assert_eq!(outs, ["T20 T20 Bull"]);
///
/// assert_eq!(finishes(40, 1, 10)[0].to_string(), "D20");
/// assert!(finishes(169, 3, 10).is_empty());
/// ```
#[must_use]
pub fn finishes(score: u32, max_darts: usize, limit: usize) -> Vec<Checkout> {
    let mut out = Vec::new();
    if !(MIN_CHECKOUT..=MAX_CHECKOUT).contains(&score) || limit == 0 {
        return out;
    }

    let setup = scoring_darts();
    let finish = finishing_darts();

    if max_darts >= 1 {
        for &last in finish.iter().filter(|d| d.value() == score) {
            out.push(Checkout::from_legal(&[last]));
            if out.len() == limit {
                return out;
            }
        }
    }

    if max_darts >= 2 {
        for &first in &setup {
            let Some(rest) = score.checked_sub(first.value()) else {
                continue;
            };
            for &last in finish.iter().filter(|d| d.value() == rest) {
                out.push(Checkout::from_legal(&[first, last]));
                if out.len() == limit {
                    return out;
                }
            }
        }
    }

    if max_darts >= 3 {
        for (i, &first) in setup.iter().enumerate() {
            let Some(after_first) = score.checked_sub(first.value()) else {
                continue;
            };
            for &second in &setup[i..] {
                let Some(rest) = after_first.checked_sub(second.value()) else {
                    continue;
                };
                for &last in finish.iter().filter(|d| d.value() == rest) {
                    out.push(Checkout::from_legal(&[first, second, last]));
                    if out.len() == limit {
                        return out;
                    }
                }
            }
        }
    }

    out
}
