use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use poly_vector_benchmark::error::SweepError;
use poly_vector_benchmark::report::{print_results_table, render_chart};
use poly_vector_benchmark::sweep::{run_sweep, SweepConfig};

/// Sweep the poly_vector benchmark executable over a range of element counts
/// and compare the poly_vec and unique_ptr_vec traversal timings.
#[derive(Parser)]
#[command(name = "benchmark_sweep")]
struct Args {
    /// Location of the benchmark executable
    #[arg(short, long)]
    benchmark_exe: PathBuf,

    /// Low mark for the element count
    #[arg(short, long, default_value_t = 1000)]
    lower: u64,

    /// High mark for the element count (exclusive)
    #[arg(short, long, default_value_t = 100_000)]
    upper: u64,

    /// Step for the element count
    #[arg(short, long, default_value_t = 1000)]
    step: u64,

    /// Number of trials averaged per element count and variant
    #[arg(short, long, default_value_t = 16)]
    trials: u64,

    /// Number of traversal iterations per trial
    #[arg(short, long, default_value_t = 16)]
    iterations: u64,
}

fn run(args: &Args) -> Result<(), SweepError> {
    let config = SweepConfig {
        executable: args.benchmark_exe.clone(),
        lower: args.lower,
        upper: args.upper,
        step: args.step,
        trials: args.trials,
        iterations: args.iterations,
    };
    config.validate()?;

    let series = run_sweep(&config)?;
    print_results_table(&series);
    render_chart(&series);
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        let _ = Args::command().print_help();
        std::process::exit(1);
    }
}
