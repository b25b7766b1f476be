use backtracker::problems::NQueens;
use backtracker::search::{
    Algorithm, IterativeConfig, ParallelConfig, SearchConfig, TraversalOrder, search,
};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "backtracker")]
#[command(about = "backtracker - generic backtracking search")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// CLI algorithm selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliAlgorithm {
    /// Plain recursion, no deduplication
    Recursive,
    /// Single-threaded DFS/BFS with footprints
    Iterative,
    /// Coordinator plus worker threads
    Parallel,
}

impl From<CliAlgorithm> for Algorithm {
    fn from(cli: CliAlgorithm) -> Self {
        match cli {
            CliAlgorithm::Recursive => Algorithm::Recursive,
            CliAlgorithm::Iterative => Algorithm::Iterative,
            CliAlgorithm::Parallel => Algorithm::Parallel,
        }
    }
}

/// CLI traversal order for the iterative strategy
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliOrder {
    /// Depth-first
    Dfs,
    /// Breadth-first
    Bfs,
}

impl From<CliOrder> for TraversalOrder {
    fn from(cli: CliOrder) -> Self {
        match cli {
            CliOrder::Dfs => TraversalOrder::DepthFirst,
            CliOrder::Bfs => TraversalOrder::BreadthFirst,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Place N queens on an N x N board so that none attack each other
    Nqueens {
        /// Board size
        #[arg(long, short = 'n', default_value = "8")]
        size: usize,

        /// Search strategy
        #[arg(long, value_enum, default_value = "iterative")]
        algorithm: CliAlgorithm,

        // --- Iterative search options ---
        /// Traversal order (iterative only)
        #[arg(long, value_enum, default_value = "dfs")]
        order: CliOrder,
        /// Do not expand nodes at this depth (iterative only)
        #[arg(long)]
        max_depth: Option<usize>,

        // --- Iterative and parallel options ---
        /// Stop after this many solutions (iterative and parallel only)
        #[arg(long)]
        max_solutions: Option<usize>,

        // --- Parallel search options ---
        /// Maximum number of worker threads, at least 1 (defaults to the CPU count)
        #[arg(long, short = 'j', value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        workers: Option<usize>,

        /// Print every solution board
        #[arg(long)]
        print_boards: bool,
    },
}

/// Reject limits the selected strategy would ignore.
fn check_option_scope(
    algorithm: CliAlgorithm,
    max_depth: Option<usize>,
    max_solutions: Option<usize>,
) -> Result<(), String> {
    let iterative = matches!(algorithm, CliAlgorithm::Iterative);
    let recursive = matches!(algorithm, CliAlgorithm::Recursive);

    if max_depth.is_some() && !iterative {
        return Err("--max-depth is only supported by the iterative algorithm".to_string());
    }
    if max_solutions.is_some() && recursive {
        return Err("--max-solutions is not supported by the recursive algorithm".to_string());
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_nqueens(
    size: usize,
    config: &SearchConfig,
    print_boards: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Solving {}-queens with {} search", size, config.algorithm);

    let result = search([NQueens::new(size)], config)?;

    println!("Found {} solutions", result.solutions.len());

    if print_boards {
        let mut boards: Vec<&NQueens> = result.solutions.iter().collect();
        boards.sort_by(|a, b| a.queens().cmp(b.queens()));
        for board in boards {
            println!("{:?}", board.queens());
            print!("{}", board.render());
            println!();
        }
    }

    print!("{}", result.statistics.format_summary());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Nqueens {
            size,
            algorithm,
            order,
            max_depth,
            max_solutions,
            workers,
            print_boards,
        } => {
            check_option_scope(algorithm, max_depth, max_solutions)?;

            let config = SearchConfig::default()
                .with_algorithm(algorithm.into())
                .with_iterative(
                    IterativeConfig::default()
                        .with_order(order.into())
                        .with_max_depth_option(max_depth)
                        .with_max_solutions_option(max_solutions),
                )
                .with_parallel(
                    ParallelConfig::default()
                        .with_workers_option(workers)
                        .with_max_solutions_option(max_solutions),
                );

            run_nqueens(size, &config, print_boards)
        }
    }
}
