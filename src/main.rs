use anyhow::Context;
use clap::Parser;
use crossterm::style::Stylize;
use log::info;

use slider_search::config::{self, Difficulty};
use slider_search::{compare, generate_solvable_board, Board, Comparison, SearchResult};

const SHOWN_STEPS: usize = 5;

#[derive(Debug, Parser)]
#[command(name = "slider-search", about = "Scramble a sliding puzzle and compare BFS, DFS and A*")]
struct Args {
    /// Board width and height
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// Preset shuffle length [default: medium]
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Exact shuffle length, overriding --difficulty
    #[arg(long)]
    shuffle_moves: Option<usize>,

    /// Scramble seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Depth bound for iterative deepening
    #[arg(long)]
    max_depth: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let shuffle_moves = args
        .shuffle_moves
        .unwrap_or_else(|| config::shuffle_moves(args.size, args.difficulty));
    let seed = args.seed.unwrap_or_else(rand::random);
    let max_depth = args
        .max_depth
        .unwrap_or_else(|| config::iddfs_depth(shuffle_moves));

    info!(
        "size {}, {} shuffle moves, seed {}, depth bound {}",
        args.size, shuffle_moves, seed, max_depth
    );

    let goal = Board::goal(args.size).context("invalid board size")?;
    let initial = generate_solvable_board(args.size, shuffle_moves, seed)
        .context("failed to scramble board")?;

    println!("{}", "Initial State:".bold());
    print!("{}", initial);
    println!();
    println!("{}", "Goal State:".bold());
    print!("{}", goal);
    println!();

    let comparison = compare(&initial, &goal, max_depth).context("comparison failed")?;

    for report in comparison.reports() {
        print_steps(&report.strategy.to_string(), &report.result);
        println!();
    }
    print_table(&comparison);

    Ok(())
}

fn flat(board: &Board) -> String {
    let tiles: Vec<String> = board.tiles().iter().map(u8::to_string).collect();
    format!("[{}]", tiles.join(","))
}

fn print_steps(name: &str, result: &SearchResult) {
    println!("{}", format!("{} Algorithm:", name).bold());
    let total = result.move_count();
    let path = result.path();

    let line = |i: usize| {
        let step = &path[i];
        let desc = match step.action {
            _ if i == total => "SOLVED!".green().to_string(),
            Some(mv) => mv.describe().to_string(),
            None => String::new(),
        };
        println!("Step {}: {} -> {}", i, flat(&step.board), desc);
    };

    if total == 0 {
        line(0);
        return;
    }

    for i in 1..=total.min(SHOWN_STEPS) {
        line(i);
    }
    if total > 2 * SHOWN_STEPS {
        println!("... [{} more steps] ...", total - 2 * SHOWN_STEPS);
    }
    for i in (SHOWN_STEPS + 1).max(total.saturating_sub(SHOWN_STEPS - 1))..=total {
        line(i);
    }
}

fn print_table(comparison: &Comparison) {
    println!(
        "{:<10} {:>6} {:>10} {:>12}",
        "Algorithm", "Moves", "Time (ms)", "Nodes Exp."
    );
    for report in comparison.reports() {
        println!(
            "{:<10} {:>6} {:>10.2} {:>12}",
            report.strategy.to_string(),
            report.move_count,
            report.elapsed_ms(),
            report.nodes_expanded
        );
    }
    println!();

    if let Some(fastest) = comparison.fastest() {
        let text = format!(
            "Winner (Fastest): {} - {:.2} ms",
            fastest.strategy,
            fastest.elapsed_ms()
        );
        println!("{}", text.green());
    }
    if let Some(fewest) = comparison.fewest_nodes() {
        let text = format!(
            "Winner (Least Nodes Explored): {} - {} nodes",
            fewest.strategy, fewest.nodes_expanded
        );
        println!("{}", text.green());
    }
}
