//! Tic-tac-toe engine CLI
//!
//! Query the best move for a position, run minimax and alpha-beta side by
//! side, or play a game against the engine.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use tictactoe::rules::winning_line;
use tictactoe::{
    best_move, compare, Algorithm, Board, ComparisonReport, Control, GameMode, GameResult,
    GameSession, Mark, SearchOutcome, SessionConfig, BOARD_SIZE,
};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Minimax and alpha-beta search for tic-tac-toe", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best move for a position
    BestMove(BestMoveArgs),

    /// Run minimax and alpha-beta on the same position and compare them
    Compare(PositionArgs),

    /// Play a game (human moves are read from stdin as cell indices 0-8)
    Play(PlayArgs),
}

#[derive(Args, Debug)]
struct PositionArgs {
    /// Board as nine cells in row-major order: X, O, '.' for empty.
    /// Row separators '/' or '|' are allowed, e.g. "XX./OO./..."
    board: Board,

    /// Side to search for (defaults to the side to move, X first)
    #[arg(long)]
    side: Option<Mark>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl PositionArgs {
    fn side(&self) -> Mark {
        self.side.unwrap_or_else(|| self.board.side_to_move())
    }
}

#[derive(Args, Debug)]
struct BestMoveArgs {
    #[command(flatten)]
    position: PositionArgs,

    /// Search algorithm: minimax or alpha-beta
    #[arg(long, short = 'a', default_value_t = Algorithm::AlphaBeta)]
    algorithm: Algorithm,
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// JSON session config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mode preset: human-vs-human, human-vs-ai or ai-vs-ai
    #[arg(long)]
    mode: Option<GameMode>,

    /// Who plays X: human or ai
    #[arg(long)]
    x: Option<Control>,

    /// Who plays O: human or ai
    #[arg(long)]
    o: Option<Control>,

    /// Algorithm for X when AI-controlled
    #[arg(long)]
    x_algorithm: Option<Algorithm>,

    /// Algorithm for O when AI-controlled
    #[arg(long)]
    o_algorithm: Option<Algorithm>,

    /// Print the final session as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::BestMove(args) => run_best_move(args),
        Commands::Compare(args) => run_compare(args),
        Commands::Play(args) => run_play(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run_best_move(args: BestMoveArgs) -> Result<()> {
    let side = args.position.side();
    let outcome = best_move(&args.position.board, side, args.algorithm)
        .with_context(|| format!("cannot search position {}", args.position.board.to_compact()))?;

    if args.position.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    print_section("Position");
    print!("{}", args.position.board);
    print_outcome(&outcome);
    Ok(())
}

fn run_compare(args: PositionArgs) -> Result<()> {
    let side = args.side();
    let report = compare(&args.board, side)
        .with_context(|| format!("cannot compare on position {}", args.board.to_compact()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    print!("{}", args.board);
    print_report(&report);
    Ok(())
}

fn run_play(args: PlayArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::from_json_file(path)?,
        None => SessionConfig::default(),
    };
    if let Some(mode) = args.mode {
        config = config.with_mode(mode);
    }
    if let Some(control) = args.x {
        config.x.control = control;
    }
    if let Some(control) = args.o {
        config.o.control = control;
    }
    if let Some(algorithm) = args.x_algorithm {
        config.x.algorithm = algorithm;
    }
    if let Some(algorithm) = args.o_algorithm {
        config.o.algorithm = algorithm;
    }

    let mut session = GameSession::new(config);
    print_section(&format!("New game ({})", session.mode()));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_over() {
        println!();
        print!("{}", session.board());

        let mark = session.current_turn();
        if session.is_ai_turn() {
            let outcome = session.ai_move()?;
            println!("{mark} ({}) plays {}", outcome.algorithm, outcome.best_move);
            print_kv("Nodes explored", &outcome.nodes_explored.to_string());
            print_kv("Execution time", &format!("{:.2}ms", outcome.execution_time_ms));
            continue;
        }

        print!("{mark} to move (0-8): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            bail!("input closed before the game finished");
        };
        let line = line?;
        let position = match line.trim().parse::<usize>() {
            Ok(position) => position,
            Err(_) => {
                println!("Enter a cell index between 0 and 8");
                continue;
            }
        };

        let replies_before = session.history().len();
        if let Err(e) = session.play(position) {
            println!("{e}");
            continue;
        }
        // The AI may have answered immediately
        if session.history().len() > replies_before + 1 {
            if let Some(outcome) = session.last_search() {
                println!("{} ({}) plays {}", outcome.side, outcome.algorithm, outcome.best_move);
            }
        }
    }

    println!();
    print!("{}", session.board());
    match session.outcome() {
        Some(GameResult::Winner(mark)) => match winning_line(session.board()) {
            Some([a, b, c]) => println!("{mark} wins on {a}-{b}-{c}"),
            None => println!("{mark} wins"),
        },
        Some(GameResult::Draw) => println!("Draw"),
        None => {}
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        let stats = session.stats();
        print_section("Stats");
        print_kv("Total moves", &stats.total_moves.to_string());
        print_kv("X moves", &stats.x_moves.to_string());
        print_kv("O moves", &stats.o_moves.to_string());
    }
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome) {
    print_subsection(&format!("{} ({})", outcome.algorithm, outcome.side));
    print_kv(
        "Best move",
        &format!(
            "{} (row {}, col {})",
            outcome.best_move,
            outcome.best_move / BOARD_SIZE,
            outcome.best_move % BOARD_SIZE
        ),
    );
    print_kv("Score", &outcome.score.to_string());
    print_kv("Nodes explored", &outcome.nodes_explored.to_string());
    print_kv("Execution time", &format!("{:.2}ms", outcome.execution_time_ms));
}

fn print_report(report: &ComparisonReport) {
    print_outcome(&report.minimax);
    print_outcome(&report.alpha_beta);
    print_subsection("Improvement");
    print_kv("Nodes reduced", &report.improvement.nodes_reduced.to_string());
    print_kv("Time reduced", &format!("{:.2}ms", report.improvement.time_reduced_ms));
    print_kv(
        "Improvement",
        &format!("{}%", report.improvement.percentage_improvement),
    );
}

/// Print a section header
fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a subsection header
fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{}:", key), value);
}
