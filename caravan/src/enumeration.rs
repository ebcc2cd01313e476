//! Exact leg analysis by exhaustive enumeration of the roll space.
//!
//! Every sequence is replayed against a private copy of the track and the podium is read once,
//! after the final roll. The placing probabilities are the exact fractions of sequences in which
//! each marker finishes first and second.

use crate::comb::{Replacement, RollSpace};
use crate::dice::{Die, Pyramid, DICE_VALUES};
use crate::error::AnalysisError;
use crate::probs::{LegProbs, Tally};
use crate::track::Track;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{dice} dice exceed the enumeration limit of {max_dice}")]
pub struct TooManyDice {
    pub dice: usize,
    pub max_dice: usize,
}

#[derive(Debug, Clone)]
pub struct ExhaustiveEngine {
    replacement: Replacement,
    max_dice: usize,
}
impl ExhaustiveEngine {
    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = replacement;
        self
    }

    /// Refuses pyramids holding more than `max_dice` dice. Unbounded by default.
    pub fn with_max_dice(mut self, max_dice: usize) -> Self {
        self.max_dice = max_dice;
        self
    }

    pub fn replacement(&self) -> Replacement {
        self.replacement
    }

    pub fn max_dice(&self) -> usize {
        self.max_dice
    }

    pub fn analyse(&self, track: &Track, pyramid: &Pyramid) -> Result<LegProbs, AnalysisError> {
        if pyramid.len() > self.max_dice {
            return Err(TooManyDice {
                dice: pyramid.len(),
                max_dice: self.max_dice,
            }
            .into());
        }
        let roster = track.roster()?;
        let space = RollSpace::new(pyramid, self.replacement)?;
        debug!(
            "enumerating {} sequences of {} dice ({:?} replacement)",
            space.sequences(),
            space.dice(),
            self.replacement
        );

        let mut tally = Tally::new(roster);
        let mut ordinals = vec![0; space.dice()];
        let mut bitmap = vec![true; space.dice()];
        let mut rolls: Vec<_> = pyramid
            .markers()
            .iter()
            .map(|&marker| Die::new(marker, DICE_VALUES[0]))
            .collect();
        let mut working = track.clone();
        for sequence in 0..space.sequences() {
            space.fill(sequence, &mut ordinals, &mut bitmap, &mut rolls);
            working.copy_from(track);
            for die in &rolls {
                working.advance(die)?;
            }
            tally.record(&working.podium());
        }
        debug!("enumerated {} outcomes", tally.outcomes());
        Ok(tally.into_probs())
    }
}

impl Default for ExhaustiveEngine {
    fn default() -> Self {
        Self {
            replacement: Replacement::default(),
            max_dice: usize::MAX,
        }
    }
}

/// Exact placing probabilities over every sequence in the with-replacement roll space of the
/// pyramid. The cost grows as `(3n)^n` in the number of dice `n`.
pub fn analyse_exhaustive(track: &Track, pyramid: &Pyramid) -> Result<LegProbs, AnalysisError> {
    ExhaustiveEngine::default().analyse(track, pyramid)
}
