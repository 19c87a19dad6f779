use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;
use heck::{ToKebabCase, ToTitleCase};
use sortvis::render::render;
use sortvis::{run_headless, Driver, DriverOptions, RunOutcome};
use sortvis_engine::{is_ascending, Algorithm};

/// sortvis — watch sorting algorithms advance one comparison at a time.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Sorting algorithm, by name ("gnome"), label ("gnome-sort") or index
    #[arg(long, short, default_value = "bubble", value_parser = parse_algorithm)]
    algorithm: Algorithm,

    /// Number of keys to sort
    #[arg(long, short = 'n', default_value_t = 99)]
    size: usize,

    /// Upper bound of each key's random height
    #[arg(long, default_value_t = 360)]
    max_height: i32,

    /// Delay between steps in milliseconds (clamped to 1..=1000)
    #[arg(long, default_value_t = 100)]
    delay: u64,

    /// Seed for key generation and shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many steps
    #[arg(long, default_value_t = 1_000_000)]
    max_steps: u64,

    /// Height of the rendered chart in lines
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Render a frame every N steps (0 renders the final frame only)
    #[arg(long, default_value_t = 0)]
    every: u64,

    /// List the available algorithms and exit
    #[arg(long)]
    list: bool,
}

/// Accepts anything [`Algorithm`]'s `FromStr` does, plus kebab/snake case
/// labels such as `insertion-sort`.
fn parse_algorithm(input: &str) -> Result<Algorithm> {
    input
        .parse()
        .or_else(|_| input.to_title_case().parse())
        .map_err(|_| anyhow!("unknown algorithm '{input}', see --list"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        for alg in Algorithm::ALL {
            println!("{}  {:<10} {}", alg.index(), alg.name().to_kebab_case(), alg.label());
        }
        return Ok(());
    }

    let options = DriverOptions {
        algorithm: cli.algorithm,
        size: cli.size,
        max_height: cli.max_height,
        step_delay: Duration::from_millis(cli.delay),
        seed: cli.seed,
        start_paused: false,
    };
    let mut driver = Driver::new(&options)?;

    eprintln!(
        "sortvis: sorting {} keys with {} (seed {})",
        cli.size,
        cli.algorithm,
        driver.seed()
    );

    let outcome = run_headless(&mut driver, cli.max_steps, |driver| {
        if cli.every > 0 && driver.tally().steps() % cli.every == 0 {
            print!("{}", render(&driver.frame()?, cli.rows));
        }
        Ok(())
    })?;

    print!("{}", render(&driver.frame()?, cli.rows));
    println!("{}", driver.tally());

    match outcome {
        RunOutcome::Sorted if is_ascending(driver.keys()) => {
            eprintln!("sortvis: sorted");
        }
        RunOutcome::Sorted => {
            eprintln!("sortvis: {} reports sorted but keys are out of order", cli.algorithm);
        }
        RunOutcome::BudgetExhausted => {
            eprintln!("sortvis: gave up after {} steps", cli.max_steps);
        }
    }
    Ok(())
}
