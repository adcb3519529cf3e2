use clap::{Parser, Subcommand, ValueEnum};
use exact_combinatorics::{
    get_combination, parser::parse_operand, Arithmetic, BigArithmetic, FactorialCache,
    NativeArithmetic, ParallelBigArithmetic,
};
use std::time::Instant;

/// Arithmetic used for factorials and binomial coefficients
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Backend {
    /// 64-bit machine integers, saturating on overflow
    Native,
    /// Exact big integers with a memoized factorial
    Big,
    /// Exact big integers with a parallel factorial product
    Parallel,
}

/// Exact factorials, binomial coefficients and combination listings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Arithmetic backend
    #[arg(short, long, value_enum, default_value_t = Backend::Big)]
    backend: Backend,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute n!
    Factorial {
        /// Operand, as a decimal integer
        #[arg(allow_hyphen_values = true)]
        n: String,
    },

    /// Count the combinations of SIZE items out of ITEMS
    Count {
        #[arg(allow_hyphen_values = true)]
        items: i64,
        #[arg(allow_hyphen_values = true)]
        size: i64,
    },

    /// List every combination of SIZE items out of {1..ITEMS}
    Enumerate {
        items: usize,
        size: usize,

        /// Print at most this many combinations
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

type CommandResult = Result<(), Box<dyn std::error::Error>>;

fn report<A: Arithmetic>(cache: &FactorialCache<A>, start_time: Instant) {
    println!("Cached factorials: {}", cache.len());
    println!(
        "Computation time: {:.3} ms",
        start_time.elapsed().as_secs_f64() * 1000.0
    );
}

fn factorial<A: Arithmetic>(arithmetic: A, operand: &str) -> CommandResult {
    let cache = FactorialCache::new(arithmetic);
    let start_time = Instant::now();

    let n = parse_operand(operand)?;
    let value = cache.factorial(n)?;
    println!("{}! = {}", n, value);

    report(&cache, start_time);
    Ok(())
}

fn count<A: Arithmetic>(arithmetic: A, items: i64, size: i64) -> CommandResult {
    let cache = FactorialCache::new(arithmetic);
    let start_time = Instant::now();

    let value = cache.combination_count(items, size)?;
    println!("C({}, {}) = {}", items, size, value);

    report(&cache, start_time);
    Ok(())
}

fn enumerate(items: usize, size: usize, limit: Option<usize>) {
    println!("Enumerating {}-combinations of {{1..{}}}...", size, items);
    let start_time = Instant::now();

    let combinations = get_combination(items, size);
    let elapsed = start_time.elapsed();

    let sorted = combinations.to_sorted_vec();
    let shown = limit.unwrap_or(sorted.len()).min(sorted.len());
    for combination in &sorted[..shown] {
        println!("  {}", combination);
    }
    if shown < sorted.len() {
        println!("  ... {} more", sorted.len() - shown);
    }

    println!("Total combinations: {}", sorted.len());
    println!("Computation time: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
}

fn main() {
    let args = Args::parse();

    let result = match (&args.command, args.backend) {
        (Command::Factorial { n }, Backend::Native) => factorial(NativeArithmetic, n),
        (Command::Factorial { n }, Backend::Big) => factorial(BigArithmetic, n),
        (Command::Factorial { n }, Backend::Parallel) => factorial(ParallelBigArithmetic, n),
        (Command::Count { items, size }, Backend::Native) => count(NativeArithmetic, *items, *size),
        (Command::Count { items, size }, Backend::Big) => count(BigArithmetic, *items, *size),
        (Command::Count { items, size }, Backend::Parallel) => {
            count(ParallelBigArithmetic, *items, *size)
        }
        (Command::Enumerate { items, size, limit }, _) => {
            enumerate(*items, *size, *limit);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
