use clap::{ArgAction, Parser, Subcommand};
use cubeanim::{apply_single_move, solve_and_animate, Cube, Move, SolveConfig, SolverKind};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scramble a solved cube, solve it and print every frame as JSON
    Solve {
        scramble: String,
        /// iddfs or mitm
        #[arg(long, default_value = "mitm")]
        solver: SolverKind,
        /// Longest solution to search for
        #[arg(long, default_value_t = SolveConfig::default().max_depth)]
        max_depth: u8,
        #[arg(long)]
        pretty: bool,
    },
    /// Apply moves one at a time to a JSON cube state (solved if omitted)
    Apply {
        moves: String,
        #[arg(long)]
        state: Option<PathBuf>,
    },
    /// Print the face-label encoding of a scrambled cube
    Encode { scramble: String },
    /// Draw the unfolded net of a scrambled cube
    Show { scramble: String },
}

fn scrambled(scramble: &str) -> anyhow::Result<Cube> {
    Ok(Cube::solved().apply_all(Move::parse_sequence(scramble)?))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    simple_logger::SimpleLogger::new().with_level(level).init()?;

    match cli.command {
        Commands::Solve {
            scramble,
            solver,
            max_depth,
            pretty,
        } => {
            let config = SolveConfig { solver, max_depth };
            log::info!("Solving with {:?}", config);
            let report = solve_and_animate(&scramble, config.solver().as_ref())?;
            if pretty {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", serde_json::to_string(&report)?);
            }
        }
        Commands::Apply { moves, state } => {
            let mut cube = match state {
                Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
                None => Cube::solved(),
            };
            for token in moves.split_whitespace() {
                cube = apply_single_move(&cube, token)?;
            }
            println!("{}", serde_json::to_string(&cube)?);
        }
        Commands::Encode { scramble } => {
            println!("{}", scrambled(&scramble)?.to_canonical_string()?);
        }
        Commands::Show { scramble } => {
            print!("{}", scrambled(&scramble)?);
        }
    }

    Ok(())
}
