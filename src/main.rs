use std::io::{self, Write};

use clap::{Parser, Subcommand};
use tracing::Level;

use knightga::{
    error::{KnightError, OptionExt, Result, ResultExt},
    evolution::{
        options::{DEFAULT_GENERATIONS, DEFAULT_POPULATION_SIZE},
        worker, EvolutionOptions, LogLevel, PopulationEngine,
    },
    fitness::{KnightChallenge, DEFAULT_ATTACK_PENALTY},
    greedy::greedy_placement,
    operators::DEFAULT_MUTATION_RATE,
    report::{
        console::write_board,
        player::{step_interactively, StepOutcome},
        ConsoleReporter,
    },
    rng::RandomNumberGenerator,
    strategy::ElitePairingStrategy,
    Fitness,
};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct CommandArgs {
    /// Increase log output (-v per generation, -vv with boards)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Which placement strategy to run
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evolve placements with the genetic algorithm
    Ga(#[clap(flatten)] GaArg),
    /// Place knights with a single greedy scan
    Greedy,
}

#[derive(Debug, Clone, clap::Args)]
struct GaArg {
    /// Number of generations
    #[arg(long, default_value_t = DEFAULT_GENERATIONS)]
    generations: usize,
    /// Boards per generation
    #[arg(long, default_value_t = DEFAULT_POPULATION_SIZE)]
    population: usize,
    /// Boards kept unchanged each generation [default: population / 5]
    #[arg(long)]
    elite: Option<usize>,
    /// Per-cell flip probability applied to every child
    #[arg(long, default_value_t = DEFAULT_MUTATION_RATE)]
    mutation_rate: f64,
    /// Fitness deducted per attacking pair
    #[arg(long, default_value_t = DEFAULT_ATTACK_PENALTY, allow_negative_numbers = true)]
    attack_penalty: Fitness,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Print only the final board
    #[arg(long, conflicts_with = "step")]
    quiet: bool,
    /// Step through generations interactively: Enter advances, `q` quits
    #[arg(long)]
    step: bool,
}

impl Default for GaArg {
    fn default() -> Self {
        Self {
            generations: DEFAULT_GENERATIONS,
            population: DEFAULT_POPULATION_SIZE,
            elite: None,
            mutation_rate: DEFAULT_MUTATION_RATE,
            attack_penalty: DEFAULT_ATTACK_PENALTY,
            seed: None,
            quiet: false,
            step: false,
        }
    }
}

fn main() -> Result<()> {
    let args = CommandArgs::parse();

    let (max_level, log_level) = match args.verbose {
        0 => (Level::WARN, LogLevel::None),
        1 => (Level::INFO, LogLevel::Minimal),
        _ => (Level::DEBUG, LogLevel::Verbose),
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(max_level)
        .init();

    match args.mode.unwrap_or(Mode::Ga(GaArg::default())) {
        Mode::Ga(arg) => run_ga(&arg, log_level),
        Mode::Greedy => run_greedy(),
    }
}

fn run_greedy() -> Result<()> {
    let board = greedy_placement();
    let mut out = io::stdout().lock();
    writeln!(out, "{}", board).context("Failed to write board")?;
    writeln!(out, "Total knights placed: {}", board.knight_count())
        .context("Failed to write knight count")?;
    Ok(())
}

fn run_ga(arg: &GaArg, log_level: LogLevel) -> Result<()> {
    let mut options = EvolutionOptions::builder()
        .num_generations(arg.generations)
        .population_size(arg.population)
        .mutation_rate(arg.mutation_rate)
        .log_level(log_level)
        .build();
    options.set_elite_count(arg.elite);

    let mut engine = PopulationEngine::new(
        ElitePairingStrategy::new(),
        KnightChallenge::new(arg.attack_penalty)?,
        options,
    )?;
    let mut rng = match arg.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    if arg.step {
        return step_through(engine, rng);
    }

    let stdout = io::stdout().lock();
    let mut reporter = if arg.quiet {
        ConsoleReporter::final_only(stdout)
    } else {
        ConsoleReporter::new(stdout)
    };

    let result = engine.run(&mut rng, &mut reporter)?;
    reporter.report_final(&result)
}

fn step_through(
    engine: PopulationEngine<ElitePairingStrategy, KnightChallenge>,
    rng: RandomNumberGenerator,
) -> Result<()> {
    let mut handle = worker::spawn(engine, rng)?;
    let mut player = handle
        .player()
        .ok_or_else_knight(|| KnightError::Worker("generation records already taken".into()))?;

    let mut out = io::stdout().lock();
    if step_interactively(&mut player, io::stdin().lock(), &mut out)? == StepOutcome::Quit {
        handle.cancel();
    }

    let result = handle.join()?;
    drop(player);
    writeln!(out, "Best board after {} generations:", result.generations)
        .context("Failed to write summary")?;
    write_board(&mut out, result.best.grid(), result.fitness, result.knights)
}

