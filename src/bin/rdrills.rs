use std::error;
use std::io::{self, Write};
use std::result;

use clap::{Parser, Subcommand};
use program::perror;

extern crate rdrills;
use rdrills::core::{closures, logger, BufferedNumbers, Drill, RangeConfig};

type Error = Box<dyn error::Error>;
type Result<T> = result::Result<T, Error>;

#[derive(Parser)]
#[command(name = "rdrills", about = "Small drills on closures, spreading and lazy ranges")]
struct Cli {
    /// Raise the stderr log level (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    drill: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that each deferred computation kept its own loop value
    Closures {
        /// Capture one shared counter instead of a per-iteration binding
        #[arg(long)]
        shared: bool,
    },
    /// Check forwarding of a spread argument list through a variadic tail
    Spread,
    /// Print an inclusive range, one number per line
    Numbers {
        #[arg(long, allow_negative_numbers = true)]
        start: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        end: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        step: Option<i64>,
        /// Read the values through a precomputed 0..=100 buffer
        #[arg(long)]
        buffered: bool,
    },
    /// Run every drill with its defaults
    All,
}

fn range_config(start: Option<i64>, end: Option<i64>, step: Option<i64>) -> RangeConfig {
    let mut config = RangeConfig::default();
    if let Some(start) = start {
        config = config.with_start(start);
    }
    if let Some(end) = end {
        config = config.with_end(end);
    }
    if let Some(step) = step {
        config = config.with_step(step);
    }

    config
}

fn print_lines<I: IntoIterator<Item = String>>(lines: I) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    Ok(())
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Closures { shared: false } => print_lines(Drill::Closures.run()?),
        Command::Closures { shared: true } => {
            print_lines(vec![closures::check_shared()?.to_string()])
        }
        Command::Spread => print_lines(Drill::Spread.run()?),
        Command::Numbers {
            start,
            end,
            step,
            buffered,
        } => {
            let config = range_config(start, end, step);
            if buffered {
                let numbers = BufferedNumbers::new(config)?;
                print_lines(numbers.iter().map(|n| n.to_string()))
            } else {
                print_lines(config.iter()?.map(|n| n.to_string()))
            }
        }
        Command::All => {
            for drill in Drill::ALL.iter() {
                print_lines(drill.run()?)?;
            }
            Ok(())
        }
    }
}

fn fail_if_err(r: Result<()>) {
    if let Err(e) = r {
        perror(e)
    }
}

fn main() {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);
    fail_if_err(run(cli.drill));
}
