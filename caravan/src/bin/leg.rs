use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tinyrand::{Seeded, StdRand};
use tracing::{debug, info, warn};

use caravan::comb::{count_sequences, Replacement};
use caravan::enumeration::ExhaustiveEngine;
use caravan::file::{ReadJsonFile, WriteJsonFile};
use caravan::leg::{Leg, LegSnapshot};
use caravan::mc::MonteCarloEngine;
use caravan::print::tabulate;
use caravan::roster::Roster;
use caravan::timed::Timed;
use caravan::track::TRACK_POSITIONS;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to load a saved leg from
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// seed for starting a fresh race
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// number of dice to roll before analysing a fresh race
    #[clap(short = 'r', long, default_value = "0")]
    rolls: usize,

    /// racing markers, one character each
    #[clap(short = 'm', long, default_value = "rbgyp")]
    markers: String,

    /// number of cells on the track
    #[clap(short = 'p', long, default_value_t = TRACK_POSITIONS)]
    positions: usize,

    /// number of Monte Carlo trials
    #[clap(short = 't', long, default_value = "100000")]
    trials: u64,

    /// largest pyramid that will be enumerated exhaustively
    #[clap(long, default_value = "5")]
    max_dice: usize,

    /// enumerate each remaining die exactly once, as the physical pyramid does
    #[clap(long)]
    without_replacement: bool,

    /// file to save the analysed leg to
    #[clap(long)]
    save: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.file.is_none() && self.seed.is_none()
            || self.file.is_some() && self.seed.is_some()
        {
            bail!("either the -f or the -s flag must be specified");
        }
        if self.file.is_some() && self.rolls != 0 {
            bail!("the -r flag only applies to a fresh race");
        }
        if self.trials == 0 {
            bail!("at least one trial is required");
        }
        if self.positions == 0 {
            bail!("the track must have at least one position");
        }
        Ok(())
    }

    fn replacement(&self) -> Replacement {
        if self.without_replacement {
            Replacement::Without
        } else {
            Replacement::With
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let leg = prepare_leg(&args)?;
    if let Some(path) = args.save.as_ref() {
        leg.snapshot().write_json_file(path)?;
        info!("saved leg to {}", path.display());
    }

    let pyramid: String = leg
        .pyramid()
        .markers()
        .iter()
        .map(|&marker| char::from(marker))
        .collect();
    let tents: Vec<_> = leg.tents().iter().map(ToString::to_string).collect();
    info!("track: {}", leg.track());
    info!("pyramid: [{pyramid}], tents: [{}]", tents.join(", "));

    let replacement = args.replacement();
    match count_sequences(leg.pyramid().len(), replacement) {
        Ok(sequences) => info!("{sequences} roll sequences with {replacement:?} replacement"),
        Err(err) => warn!("{err}"),
    }

    let engine = ExhaustiveEngine::default()
        .with_replacement(replacement)
        .with_max_dice(args.max_dice);
    let exhaustive = match Timed::result(|| leg.analyse_exhaustive(&engine)) {
        Ok(exhaustive) => {
            info!(
                "exhaustive analysis took {:.3}s",
                exhaustive.elapsed.as_millis() as f64 / 1_000.
            );
            Some(exhaustive.value)
        }
        Err(err) => {
            warn!("skipping exhaustive analysis: {err}");
            None
        }
    };

    let mut engine = MonteCarloEngine::default()
        .with_trials(args.trials)
        .with_rand(StdRand::seed(args.seed.unwrap_or_default()));
    let sampled = Timed::result(|| leg.analyse_sampled(&mut engine))?;
    info!(
        "simulation of {} trials took {:.3}s",
        args.trials,
        sampled.elapsed.as_millis() as f64 / 1_000.
    );

    let mut analyses = vec![];
    if let Some(exhaustive) = exhaustive.as_ref() {
        analyses.push(("Exhaustive", exhaustive));
    }
    analyses.push(("Monte Carlo", &sampled.value));
    let table = tabulate(&analyses);
    info!("\n{}", Console::default().render(&table));
    Ok(())
}

fn prepare_leg(args: &Args) -> anyhow::Result<Leg> {
    if let Some(path) = args.file.as_ref() {
        let snapshot = LegSnapshot::read_json_file(path)?;
        return Ok(Leg::try_from(snapshot)?);
    }
    if let Some(seed) = args.seed {
        let roster = Roster::from_str(&args.markers)?;
        let mut rand = StdRand::seed(seed);
        let mut leg = Leg::starting(&roster, args.positions, &mut rand)?;
        for _ in 0..args.rolls {
            match leg.roll(&mut rand)? {
                None => break,
                Some(die) => debug!("rolled {die}"),
            }
        }
        return Ok(leg);
    }
    unreachable!()
}
