//! Leg-outcome analysis for a camel racing board game. Given the stacked placement of the
//! camels on the track and the dice still in the pyramid, derives the probability of each camel
//! leading the race, or running second, once the leg completes. Probabilities are computed
//! exactly, by enumerating every roll sequence, or estimated by Monte Carlo simulation.

pub mod comb;
pub mod dice;
pub mod enumeration;
pub mod error;
pub mod file;
pub mod leg;
pub mod marker;
pub mod mc;
pub mod print;
pub mod probs;
pub mod random;
pub mod roster;
pub mod timed;
pub mod track;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
