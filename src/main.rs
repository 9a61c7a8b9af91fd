//! Mulcheck CLI - big integer multiplication checker
//!
//! Usage: mulcheck <COMMAND>
//!
//! Commands:
//!   verify    Check that the recorded product matches num1 * num2
//!   generate  Write random operands and their FFT-computed product
//!
//! Exit status: 0 verified match, 1 mismatch, 2 I/O, parse, or usage error.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Mulcheck - big integer multiplication checker
#[derive(Parser, Debug)]
#[command(name = "mulcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output machine-readable JSON events
    #[arg(long, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that the recorded product matches num1 * num2
    Verify {
        /// Directory holding the three input files
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// First operand file (overrides the directory layout)
        #[arg(long)]
        num1: Option<PathBuf>,

        /// Second operand file (overrides the directory layout)
        #[arg(long)]
        num2: Option<PathBuf>,

        /// Recorded product file (overrides the directory layout)
        #[arg(long)]
        result: Option<PathBuf>,
    },

    /// Write random operands and their FFT-computed product
    Generate {
        /// Directory to write the three files into
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Digits per operand [default: 1000000]
        #[arg(long)]
        digits: Option<usize>,

        /// RNG seed for reproducible operands
        #[arg(long)]
        seed: Option<u64>,

        /// Worker threads for the FFT [default: all cores]
        #[arg(short, long)]
        threads: Option<usize>,

        /// First operand file (overrides the directory layout)
        #[arg(long)]
        num1: Option<PathBuf>,

        /// Second operand file (overrides the directory layout)
        #[arg(long)]
        num2: Option<PathBuf>,

        /// Recorded product file (overrides the directory layout)
        #[arg(long)]
        result: Option<PathBuf>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("✗ Error: {}", err);
        std::process::exit(2);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Verify { dir, num1, num2, result } => {
            cmd_verify(dir, num1, num2, result, cli.json)
        }
        Commands::Generate { dir, digits, seed, threads, num1, num2, result } => {
            cmd_generate(dir, digits, seed, threads, num1, num2, result, cli.json)
        }
    }
}

fn cmd_verify(
    dir: Option<PathBuf>,
    num1: Option<PathBuf>,
    num2: Option<PathBuf>,
    result: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    use mulcheck::config::PathArgs;
    use mulcheck::parser::load_operand;
    use mulcheck::verify::check_product;

    let args = PathArgs { dir, num1, num2, result };
    let (paths, _) = args.resolve()?;

    if !json {
        println!("🔢 Mulcheck Verify");
    }

    let num1 = load_operand(&paths.num1)?;
    if !json {
        println!("📖 Read {} ({} digits)", paths.num1.display(), num1.digits);
    }

    let num2 = load_operand(&paths.num2)?;
    if !json {
        println!("📖 Read {} ({} digits)", paths.num2.display(), num2.digits);
    }

    let expected = load_operand(&paths.result)?;
    if !json {
        println!("📖 Read {} ({} digits)", paths.result.display(), expected.digits);
        println!("🧮 Multiplying ({} x {} digits)...", num1.digits, num2.digits);
    }

    let report = check_product(&num1, &num2, &expected);

    if json {
        let output = serde_json::json!({
            "event": "verify",
            "outcome": if report.verdict.is_match() { "match" } else { "mismatch" },
            "num1_digits": report.num1_digits,
            "num2_digits": report.num2_digits,
            "result_digits": report.expected_digits,
            "elapsed_ms": report.elapsed.as_millis() as u64,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("✓ Compared in {:.3}s", report.elapsed.as_secs_f64());
        println!();
        if report.verdict.is_match() {
            println!("✅ Success: the recorded product is correct.");
        } else {
            println!("❌ Error: the recorded product does NOT match.");
        }
    }

    if !report.verdict.is_match() {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_generate(
    dir: Option<PathBuf>,
    digits: Option<usize>,
    seed: Option<u64>,
    threads: Option<usize>,
    num1: Option<PathBuf>,
    num2: Option<PathBuf>,
    result: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    use mulcheck::config::PathArgs;
    use mulcheck::generate::{default_threads, generate, GenerateOptions, DEFAULT_DIGITS};

    let args = PathArgs { dir, num1, num2, result };
    let (paths, config) = args.resolve()?;

    let options = GenerateOptions {
        digits: digits.or(config.generate.digits).unwrap_or(DEFAULT_DIGITS),
        seed: seed.or(config.generate.seed),
        threads: threads.or(config.generate.threads).unwrap_or_else(default_threads),
    };

    if !json {
        println!("🎲 Mulcheck Generate");
        println!("Digits: {}", options.digits);
        if let Some(seed) = options.seed {
            println!("Seed: {}", seed);
        }
        println!("Threads: {}", options.threads);
        println!();
    }

    let report = generate(&paths, &options)?;

    if json {
        let output = serde_json::json!({
            "event": "generate",
            "digits": report.digits,
            "product_digits": report.product_digits,
            "seed": report.seed,
            "threads": report.threads,
            "transform_ms": report.timings.transform.as_millis() as u64,
            "carry_ms": report.timings.carry.as_millis() as u64,
            "elapsed_ms": report.elapsed.as_millis() as u64,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("✓ Wrote {}", paths.num1.display());
        println!("✓ Wrote {}", paths.num2.display());
        println!("✓ Wrote {} ({} digits)", paths.result.display(), report.product_digits);
        println!();
        println!("📊 Timing:");
        println!("  FFT transform: {:.3}s", report.timings.transform.as_secs_f64());
        println!("  Carry pass:    {:.3}s", report.timings.carry.as_secs_f64());
        println!("  Total:         {:.3}s", report.elapsed.as_secs_f64());
    }

    Ok(())
}
