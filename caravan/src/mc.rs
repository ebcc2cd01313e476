//! Monte Carlo leg analysis. Each trial shakes the remaining dice out of a private copy of the
//! pyramid, moves them on a private copy of the track and records the podium once the pyramid
//! is empty.

use crate::dice::Pyramid;
use crate::error::AnalysisError;
use crate::probs::{LegProbs, Tally};
use crate::track::{InvalidMarker, Podium, Track};
use thiserror::Error;
use tinyrand::{Rand, StdRand};
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("at least one trial is required, got {trials}")]
pub struct InvalidTrials {
    pub trials: u64,
}

/// Completes the leg in place: draws from `pyramid` until it is empty, advancing `track` with
/// every die, and returns the resulting podium.
pub fn run_once(
    track: &mut Track,
    pyramid: &mut Pyramid,
    rand: &mut impl Rand,
) -> Result<Podium, InvalidMarker> {
    while let Some(die) = pyramid.draw(rand) {
        track.advance(&die)?;
    }
    Ok(track.podium())
}

/// Estimates the placing probabilities from `trials` simulated completions of the leg. Neither
/// `track` nor `pyramid` is modified.
pub fn analyse_sampled(
    track: &Track,
    pyramid: &Pyramid,
    trials: u64,
    rand: &mut impl Rand,
) -> Result<LegProbs, AnalysisError> {
    if trials == 0 {
        return Err(InvalidTrials { trials }.into());
    }
    let roster = track.roster()?;
    debug!("simulating {trials} trials of {} dice", pyramid.len());

    let mut tally = Tally::new(roster);
    let mut working_track = track.clone();
    let mut working_pyramid = pyramid.clone();
    for _ in 0..trials {
        working_track.copy_from(track);
        working_pyramid.copy_from(pyramid);
        let podium = run_once(&mut working_track, &mut working_pyramid, rand)?;
        tally.record(&podium);
    }
    Ok(tally.into_probs())
}

pub struct MonteCarloEngine<R: Rand> {
    trials: u64,
    rand: R,
}
impl<R: Rand> MonteCarloEngine<R> {
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_rand<S: Rand>(self, rand: S) -> MonteCarloEngine<S> {
        MonteCarloEngine {
            trials: self.trials,
            rand,
        }
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn validate(&self) -> Result<(), InvalidTrials> {
        if self.trials == 0 {
            return Err(InvalidTrials {
                trials: self.trials,
            });
        }
        Ok(())
    }

    pub fn simulate(&mut self, track: &Track, pyramid: &Pyramid) -> Result<LegProbs, AnalysisError> {
        self.validate()?;
        analyse_sampled(track, pyramid, self.trials, &mut self.rand)
    }
}

impl Default for MonteCarloEngine<StdRand> {
    fn default() -> Self {
        Self {
            trials: 10_000,
            rand: StdRand::default(),
        }
    }
}
