//! Combinatorics of the roll space.
//!
//! With `n` dice left in the pyramid, a complete leg is a sequence of `n` rolls. Two spaces are
//! supported. Under [Replacement::With] every roll may independently be any of the `n × 3`
//! (marker, face) pairs, giving `(3n)^n` sequences. Under [Replacement::Without] each marker
//! rolls exactly once, as when dice leave a physical pyramid, giving `n! × 3^n` sequences.
//! Sequences are numbered and decoded positionally, so neither space is materialised.

use crate::dice::{Die, Pyramid, DICE_VALUES};
use crate::marker::Marker;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Replacement {
    /// Any marker may appear at any position, repeats included.
    #[default]
    With,
    /// Every marker in the pyramid appears exactly once.
    Without,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("the roll space of {dice} dice exceeds {} sequences", u64::MAX)]
pub struct TooManySequences {
    pub dice: usize,
}

/// Decodes the `combination` number into one ordinal per position, where the ordinal at each
/// position ranges over `0..cardinalities[position]`. The first position varies fastest.
pub fn pick(cardinalities: &[usize], combination: u64, ordinals: &mut [usize]) {
    let mut residual = combination;
    for (index, &cardinality) in cardinalities.iter().enumerate() {
        let cardinality = cardinality as u64;
        let (quotient, remainder) = (residual / cardinality, residual % cardinality);
        residual = quotient;
        ordinals[index] = remainder as usize;
    }
}

pub fn count_combinations(cardinalities: &[usize]) -> Option<u64> {
    cardinalities
        .iter()
        .try_fold(1u64, |product, &cardinality| product.checked_mul(cardinality as u64))
}

fn cardinalities(dice: usize, replacement: Replacement) -> Vec<usize> {
    let faces = DICE_VALUES.len();
    match replacement {
        Replacement::With => vec![dice * faces; dice],
        Replacement::Without => (1..=dice).rev().map(|remaining| remaining * faces).collect(),
    }
}

/// Number of complete roll sequences for a pyramid holding `dice` dice. An empty pyramid has
/// exactly one (empty) sequence.
pub fn count_sequences(dice: usize, replacement: Replacement) -> Result<u64, TooManySequences> {
    count_combinations(&cardinalities(dice, replacement)).ok_or(TooManySequences { dice })
}

/// Every ordered roll sequence that can empty a given pyramid.
#[derive(Debug)]
pub struct RollSpace<'a> {
    markers: &'a [Marker],
    replacement: Replacement,
    cardinalities: Vec<usize>,
    sequences: u64,
}
impl<'a> RollSpace<'a> {
    pub fn new(pyramid: &'a Pyramid, replacement: Replacement) -> Result<Self, TooManySequences> {
        let markers = pyramid.markers();
        let sequences = count_sequences(markers.len(), replacement)?;
        Ok(Self {
            markers,
            replacement,
            cardinalities: cardinalities(markers.len(), replacement),
            sequences,
        })
    }

    pub fn sequences(&self) -> u64 {
        self.sequences
    }

    pub fn dice(&self) -> usize {
        self.markers.len()
    }

    pub fn replacement(&self) -> Replacement {
        self.replacement
    }

    /// Writes the numbered `sequence` into `rolls`, using `ordinals` and `bitmap` as scratch.
    /// All three slices must be [dice](Self::dice) long.
    pub fn fill(&self, sequence: u64, ordinals: &mut [usize], bitmap: &mut [bool], rolls: &mut [Die]) {
        debug_assert_eq!(ordinals.len(), self.markers.len());
        debug_assert_eq!(bitmap.len(), self.markers.len());
        debug_assert_eq!(rolls.len(), self.markers.len());
        debug_assert!(sequence < self.sequences);
        let faces = DICE_VALUES.len();
        pick(&self.cardinalities, sequence, ordinals);
        match self.replacement {
            Replacement::With => {
                for (roll, &ordinal) in rolls.iter_mut().zip(ordinals.iter()) {
                    *roll = Die {
                        marker: self.markers[ordinal / faces],
                        value: DICE_VALUES[ordinal % faces],
                    };
                }
            }
            Replacement::Without => {
                bitmap.fill(true);
                for (roll, &ordinal) in rolls.iter_mut().zip(ordinals.iter()) {
                    let chosen = nth_available(bitmap, ordinal / faces);
                    bitmap[chosen] = false;
                    *roll = Die {
                        marker: self.markers[chosen],
                        value: DICE_VALUES[ordinal % faces],
                    };
                }
            }
        }
    }
}

/// Index of the `nth` set flag in the bitmap.
fn nth_available(bitmap: &[bool], nth: usize) -> usize {
    debug_assert!(
        nth < bitmap.iter().filter(|available| **available).count(),
        "no available slot at {nth} in {bitmap:?}"
    );
    bitmap
        .iter()
        .enumerate()
        .filter(|(_, available)| **available)
        .nth(nth)
        .map(|(index, _)| index)
        .expect("fewer available slots than requested")
}

impl<'a> IntoIterator for RollSpace<'a> {
    type Item = Vec<Die>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            ordinals: vec![0; self.dice()],
            bitmap: vec![true; self.dice()],
            space: self,
            sequence: 0,
        }
    }
}

pub struct Iter<'a> {
    space: RollSpace<'a>,
    ordinals: Vec<usize>,
    bitmap: Vec<bool>,
    sequence: u64,
}
impl Iterator for Iter<'_> {
    type Item = Vec<Die>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.sequence == self.space.sequences {
            return None;
        }
        let mut rolls = self
            .space
            .markers
            .iter()
            .map(|&marker| Die::new(marker, DICE_VALUES[0]))
            .collect::<Vec<_>>();
        self.space.fill(
            self.sequence,
            &mut self.ordinals,
            &mut self.bitmap,
            &mut rolls,
        );
        self.sequence += 1;
        Some(rolls)
    }
}

/// Materialises the entire roll space, with replacement. Its size is `(3n)^n` for `n` dice, so
/// this is only sensible for small pyramids.
pub fn all_sequences(pyramid: &Pyramid) -> Result<Vec<Vec<Die>>, TooManySequences> {
    Ok(RollSpace::new(pyramid, Replacement::With)?.into_iter().collect())
}
