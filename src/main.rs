use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use simdmul::config::{DEFAULT_ITERATIONS, DEFAULT_VECTOR_LENGTH};
use simdmul::{report, BenchConfig, Harness, InputPattern};

#[derive(Parser, Debug)]
#[command(name = "simdmul")]
#[command(about = "Times scalar vs. 4-lane SIMD f32 multiplication")]
#[command(version)]
struct Cli {
    /// Elements per input vector (multiple of 4)
    #[arg(short = 'n', long, default_value_t = DEFAULT_VECTOR_LENGTH)]
    vector_length: usize,

    /// Number of timed iterations
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Dump input and output vectors
    #[arg(long)]
    verbose_vectors: bool,

    /// Print scalar time, SIMD time and delta for every iteration
    #[arg(short = 'v', long)]
    verbose_iterations: bool,

    /// Fill inputs with seeded random values instead of ramps
    #[arg(long)]
    seed: Option<u64>,

    /// Wait for a line on stdin before exiting
    #[arg(long)]
    wait: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> BenchConfig {
        let pattern = match self.seed {
            Some(seed) => InputPattern::Random { seed },
            None => InputPattern::Ramp,
        };

        BenchConfig::new(self.vector_length, self.iterations)
            .with_pattern(pattern)
            .with_verbose_vectors(self.verbose_vectors)
            .with_verbose_iterations(self.verbose_iterations)
    }
}

fn wait_for_enter() -> Result<()> {
    println!("Press enter to exit...");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = cli.config();
    let mut harness = Harness::new(config.clone()).context("invalid benchmark configuration")?;

    if config.verbose_vectors {
        println!("{}", report::format_vector("v1", harness.inputs().v1()));
        println!("{}", report::format_vector("v2", harness.inputs().v2()));
    }

    let total = config.iterations;
    let verbose_iterations = config.verbose_iterations;
    let summary = harness.run_with(|timing, delta| {
        println!("{}", report::format_progress(timing, total));
        if verbose_iterations {
            println!("{}", report::format_iteration(timing, delta));
        }
    })?;

    if config.verbose_vectors {
        println!("{}", report::format_vector("res", harness.scalar_output()));
        println!("{}", report::format_vector("res_simd", harness.vector_output()));
    }

    println!("{}", report::format_summary(&summary));

    harness
        .verify()
        .context("scalar and SIMD kernels disagree")?;

    if cli.wait {
        wait_for_enter()?;
    }

    Ok(())
}
