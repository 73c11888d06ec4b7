use clap::Parser;
use playmind::{
    config::{Config, ConfigStore, FileConfigStore},
    error::QuizError,
    input::{AnswerProvider, ConsolePrompter},
    level::{Level, RandomOperands},
    operation::Operation,
    report,
    session::{QuizSession, SessionResult, SessionSettings},
};
use rand::{rngs::StdRng, SeedableRng};
use std::{
    error::Error,
    io::{BufRead, Write},
    path::PathBuf,
    process,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const GOODBYE: &str = "Goodbye!";
const INTERRUPTED: &str = "\n\n Game Interrupted, Quitting.";

/// train your mind doing mental calculations
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A command line game to practice your math skills: addition, subtraction, multiplication and division drills at five difficulty levels."
)]
pub struct Cli {
    /// operation to drill (asked interactively when omitted)
    #[clap(short = 'o', long, value_enum)]
    operation: Option<Operation>,

    /// difficulty level, 1 (one-digit operands) to 5 (five-digit operands)
    #[clap(short = 'l', long, value_parser = clap::value_parser!(u8).range(1..=5))]
    level: Option<u8>,

    /// number of questions
    #[clap(short = 'n', long = "questions")]
    num_questions: Option<u32>,

    /// seed for reproducible questions
    #[clap(long)]
    seed: Option<u64>,

    /// start right away without the readiness prompt
    #[clap(short = 'y', long)]
    yes: bool,

    /// also print the result as JSON
    #[clap(long)]
    json: bool,

    /// path to a JSON config file with default selections
    #[clap(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Command line selections as a config layer
    fn overrides(&self) -> Result<Config, QuizError> {
        Ok(Config {
            operation: self.operation,
            level: self.level.map(|l| Level::new(i64::from(l))).transpose()?,
            num_questions: self.num_questions,
            seed: self.seed,
            skip_confirm: self.yes,
        })
    }

    fn load_config(&self) -> Result<Config, QuizError> {
        let store = match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        };
        debug!(path = %store.path().display(), "loading config");
        Ok(store.load()?.merged_with(self.overrides()?))
    }
}

#[derive(Debug)]
enum GameOutcome {
    Finished(SessionResult),
    Declined,
}

fn play_game<R: BufRead, W: Write>(
    config: &Config,
    console: &mut ConsolePrompter<R, W>,
) -> Result<GameOutcome, QuizError> {
    console.say("\n\t\tPLAYMIND")?;

    let operation = match config.operation {
        Some(op) => op,
        None => {
            let names: Vec<String> = Operation::ALL.iter().map(|o| o.to_string()).collect();
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            Operation::from_choice(console.choose_option("\n\tChoose the operation", &names)?)?
        }
    };

    let level = match config.level {
        Some(level) => level,
        None => Level::new(console.choose_option("\n\tChoose the level", Level::labels())?)?,
    };

    let num_questions = match config.num_questions {
        Some(n) => i64::from(n),
        None => {
            let n = console
                .ask_int_at_most("\n How many questions? (5, 10, 100): ", u64::from(u32::MAX))?;
            n as i64
        }
    };

    let settings = SessionSettings::new(operation, level, num_questions)?;

    if !config.skip_confirm && !console.confirm_ready()? {
        return Ok(GameOutcome::Declined);
    }

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = QuizSession::new(settings, RandomOperands::new(rng));
    Ok(GameOutcome::Finished(session.play(console)?))
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("playmind=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Ctrl-C ends the game the same way as closing the input.
fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        eprintln!("{INTERRUPTED}");
        process::exit(1);
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    install_interrupt_handler()?;
    let cli = Cli::parse();
    let config = cli.load_config()?;

    let mut console = ConsolePrompter::stdio();
    match play_game(&config, &mut console) {
        Ok(GameOutcome::Finished(result)) => {
            let out = console.writer_mut();
            write!(out, "{}", report::render(&result))?;
            if cli.json {
                writeln!(out, "{}", report::to_json(&result)?)?;
            }
            out.flush()?;
            Ok(())
        }
        Ok(GameOutcome::Declined) => {
            console.say(GOODBYE)?;
            Ok(())
        }
        Err(e) if e.is_interrupt() => {
            eprintln!("{INTERRUPTED}");
            process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
