//! Command-line front end: solve the equations given as arguments or in a file.
//!
//! ```text
//! gauss "-2*x1 + 3*x2 + x3 = -1" "-4*x1 + 5*x2 + 4*x3 = -7" "4*x1 - 9*x2 + 2*x3 = -9"
//! gauss --style fraction --file system.txt
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use gauss::prelude::*;
use gauss::report::render;
use tracing::{debug, info, Level};

#[derive(Parser, Debug)]
#[command(
    name = "gauss",
    version,
    about = "Solve a system of linear equations exactly over the rationals"
)]
struct Cli {
    /// Equations such as "2x + 3y = 4" (options must come before these)
    #[arg(allow_hyphen_values = true)]
    equations: Vec<String>,

    /// Read further equations from a file, one per line ("-" for stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// How solution values are printed
    #[arg(long, value_enum, default_value_t = StyleChoice::Decimal)]
    style: StyleChoice,

    /// Pivot selection during elimination
    #[arg(long, value_enum, default_value_t = PivotingChoice::Partial)]
    pivoting: PivotingChoice,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleChoice {
    Decimal,
    Fraction,
}

impl From<StyleChoice> for ValueStyle {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::Decimal => ValueStyle::Decimal,
            StyleChoice::Fraction => ValueStyle::Fraction,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PivotingChoice {
    Partial,
    FirstNonZero,
}

impl From<PivotingChoice> for Pivoting {
    fn from(choice: PivotingChoice) -> Self {
        match choice {
            PivotingChoice::Partial => Pivoting::Partial,
            PivotingChoice::FirstNonZero => Pivoting::FirstNonZero,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_equations(path: &Path) -> Result<EquationSystem, Error> {
    let text = if path == Path::new("-") {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    }
    .map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(EquationSystem::parse_lines(text.lines())?)
}

fn run(cli: &Cli) -> Result<String, Error> {
    let mut system = EquationSystem::new();
    for text in &cli.equations {
        system.push(Equation::parse(text)?);
    }
    if let Some(path) = &cli.file {
        let from_file = read_equations(path)?;
        debug!(path = %path.display(), equations = from_file.len(), "read equation file");
        system.extend(from_file);
    }

    info!(equations = system.len(), pivoting = ?cli.pivoting, "solving system");
    let config = EliminationConfig::with_pivoting(cli.pivoting.into());
    let solution = system.solve_with(&config)?;
    Ok(render(&solution, cli.style.into()))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(report) => print!("{report}"),
        Err(err) => eprintln!("{err}"),
    }
}
