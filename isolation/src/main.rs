mod display;
mod game;

use clap::{Args, Parser, Subcommand, ValueEnum};
use display::render;
use game::{play_game, EndReason};
use isolation_agents::{
    countdown, Agent, CenterScore, Evaluator, GreedyAgent, ImprovedScore, Method, NullScore,
    OpenMoveScore, RandomAgent, ReflectionAgent, SearchAgent, SearchConfig,
};
use isolation_core::{perft, perft_divide, Board, GameState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::process;
use std::time::{Duration, Instant};

#[derive(Debug, Parser)]
#[command(name = "isolation", version, about = "Knight's isolation agents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play one game between two agents
    Play {
        #[arg(long, value_enum, default_value_t = AgentKind::Alphabeta)]
        p1: AgentKind,
        #[arg(long, value_enum, default_value_t = AgentKind::Greedy)]
        p2: AgentKind,
        #[command(flatten)]
        board: BoardArgs,
        #[command(flatten)]
        search: SearchArgs,
        /// Milliseconds per move
        #[arg(long, default_value_t = 150)]
        time_limit: u64,
        /// Seed for reproducible random choices
        #[arg(long)]
        seed: Option<u64>,
        /// Only print the result
        #[arg(long)]
        quiet: bool,
    },
    /// Search one position and report the chosen move
    Search {
        #[arg(long, default_value = "alphabeta")]
        method: Method,
        #[command(flatten)]
        board: BoardArgs,
        #[command(flatten)]
        search: SearchArgs,
        /// Milliseconds for the search
        #[arg(long, default_value_t = 1000)]
        time_limit: u64,
    },
    /// Count move paths to a fixed depth
    Perft {
        depth: u8,
        #[command(flatten)]
        board: BoardArgs,
        /// Break the count down by first move
        #[arg(long)]
        divide: bool,
    },
}

#[derive(Debug, Args)]
struct BoardArgs {
    #[arg(long, default_value_t = 7)]
    width: u8,
    #[arg(long, default_value_t = 7)]
    height: u8,
    /// Moves played so far, e.g. "3,3 0,0 1,2"
    #[arg(long, default_value = "")]
    moves: String,
}

impl BoardArgs {
    fn board(&self) -> Result<Board, Box<dyn Error>> {
        let moves = Board::parse_moves(&self.moves)?;
        Ok(Board::from_moves(self.width, self.height, &moves)?)
    }
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Deepest search depth
    #[arg(long, default_value_t = 3)]
    depth: u32,
    /// Search only at the given depth instead of deepening up to it
    #[arg(long)]
    fixed_depth: bool,
    /// Milliseconds left at which a search gives up
    #[arg(long, default_value_t = 10.0)]
    threshold: f64,
    #[arg(long, value_enum, default_value_t = Heuristic::Improved)]
    heuristic: Heuristic,
}

impl SearchArgs {
    fn config(&self, method: Method) -> SearchConfig {
        SearchConfig {
            depth: self.depth,
            method,
            iterative: !self.fixed_depth,
            threshold_ms: self.threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Heuristic {
    Null,
    Open,
    Improved,
    Center,
}

impl Heuristic {
    fn evaluator(self) -> Box<dyn Evaluator<Board>> {
        match self {
            Heuristic::Null => Box::new(NullScore),
            Heuristic::Open => Box::new(OpenMoveScore),
            Heuristic::Improved => Box::new(ImprovedScore),
            Heuristic::Center => Box::new(CenterScore),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    Minimax,
    Alphabeta,
    Greedy,
    Random,
    Reflection,
}

fn build_agent(
    kind: AgentKind,
    search: &SearchArgs,
    rng: StdRng,
) -> Result<Box<dyn Agent<Board>>, Box<dyn Error>> {
    let method = match kind {
        AgentKind::Minimax => Method::Minimax,
        AgentKind::Alphabeta => Method::AlphaBeta,
        AgentKind::Greedy => return Ok(Box::new(GreedyAgent::new(search.heuristic.evaluator()))),
        AgentKind::Random => return Ok(Box::new(RandomAgent::with_rng(rng))),
        AgentKind::Reflection => return Ok(Box::new(ReflectionAgent::new())),
    };
    let config = search.config(method);
    config.validate()?;
    Ok(Box::new(SearchAgent::with_rng(
        config,
        search.heuristic.evaluator(),
        rng,
    )))
}

fn seeded(seed: Option<u64>, offset: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(offset)),
        None => StdRng::from_entropy(),
    }
}

fn run_play(
    p1: AgentKind,
    p2: AgentKind,
    board: &BoardArgs,
    search: &SearchArgs,
    time_limit: u64,
    seed: Option<u64>,
    quiet: bool,
) -> Result<(), Box<dyn Error>> {
    let start = board.board()?;
    let mut agents = [
        build_agent(p1, search, seeded(seed, 0))?,
        build_agent(p2, search, seeded(seed, 1))?,
    ];

    println!("Player 1: {}", agents[0].name());
    println!("Player 2: {}", agents[1].name());
    if !quiet {
        println!("{}", render(&start));
    }

    let record = play_game(
        start,
        &mut agents,
        Duration::from_millis(time_limit),
        |board, player, mv| {
            if !quiet {
                println!("{} plays {}", player, mv);
                println!("{}", render(board));
            }
        },
    );

    let reason = match record.reason {
        EndReason::NoMoves => "opponent has no legal moves".to_string(),
        EndReason::Timeout => "opponent ran out of time".to_string(),
        EndReason::IllegalMove(mv) => format!("opponent played illegal move {mv}"),
    };
    println!(
        "{} ({}) wins: {}",
        record.winner,
        agents[record.winner.index()].name(),
        reason
    );
    let history: Vec<String> = record.history.iter().map(|mv| mv.to_string()).collect();
    println!("Moves: {}", history.join(" "));
    Ok(())
}

fn run_search(
    method: Method,
    board: &BoardArgs,
    search: &SearchArgs,
    time_limit: u64,
) -> Result<(), Box<dyn Error>> {
    let state = board.board()?;
    let config = search.config(method);
    config.validate()?;

    println!("{}", render(&state));

    let mut agent = SearchAgent::new(config, search.heuristic.evaluator());
    let legal = state.legal_moves();
    let clock = countdown(Duration::from_millis(time_limit));
    let start = Instant::now();
    let decision = agent.decide(&state, &legal, &clock);
    let elapsed = start.elapsed();

    println!("Agent: {}", Agent::<Board>::name(&agent));
    println!("Best move: {}", decision.best_move);
    match decision.score {
        Some(score) => println!("Score: {score}"),
        None => println!("Score: -"),
    }
    println!("Source: {:?}", decision.source);
    println!("Depth: {}", decision.depth);
    println!("Nodes: {}", decision.stats.nodes);
    println!("Evaluations: {}", decision.stats.evaluations);
    if decision.stopped {
        println!("Stopped early by the time limit");
    }
    println!("Time: {:.2?}", elapsed);
    Ok(())
}

fn run_perft(depth: u8, board: &BoardArgs, divide: bool) -> Result<(), Box<dyn Error>> {
    let state = board.board()?;
    println!("Running perft({})...", depth);
    let start = Instant::now();

    if divide {
        let results = perft_divide(&state, depth);
        let mut total = 0;
        for (mv, count) in &results {
            println!("{}: {}", mv, count);
            total += count;
        }
        println!("\nTotal: {}", total);
    } else {
        println!("Nodes: {}", perft(&state, depth));
    }

    println!("Time: {:.2?}", start.elapsed());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Command::Play {
            p1,
            p2,
            board,
            search,
            time_limit,
            seed,
            quiet,
        } => run_play(*p1, *p2, board, search, *time_limit, *seed, *quiet),
        Command::Search {
            method,
            board,
            search,
            time_limit,
        } => run_search(*method, board, search, *time_limit),
        Command::Perft {
            depth,
            board,
            divide,
        } => run_perft(*depth, board, *divide),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
