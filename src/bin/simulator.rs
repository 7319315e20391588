#[macro_use]
extern crate log;

use std::time::Instant;

use log::Level;
use simulator::schedule::{Private, Schedule, Shared};
use simulator::{Policy, Summary, System};

const USAGE: &str = "
Usage: simulator [options]

Options:
    --config <path>          Sweep configuration file in TOML.
    --from <rate>            First arrival rate [default: 10].
    --to <rate>              Last arrival rate [default: 30].
    --step <rate>            Increment of the arrival rate [default: 1].
    --service <time>         Mean service time [default: 0.04].
    --workers <count>        Number of workers [default: 1].
    --policy <name>          Scheduling policy, private or shared [default: private].
    --target <count>         Completions per run [default: 10000].
    --seed <number>          Seed of the random stream [default: system clock].
    --limit <count>          Maximal number of events per run.
    --output <path>          Text file to append the reports to [default: simulation_output].

    --verbose                Display progress information.
    --trace                  Display every processed event.
    --help                   Display this message.
";

pub type Error = Box<dyn std::error::Error>;
pub type Result<T> = std::result::Result<T, Error>;

macro_rules! raise(
    ($($arg:tt)*) => (return Err(format!($($arg)*).into()));
);

mod config;
mod logger;
mod output;

use config::Rates;

fn main() {
    start().unwrap_or_else(|error| fail(error));
}

fn start() -> Result<()> {
    let arguments = arguments::parse(std::env::args()).map_err(|error| error.to_string())?;

    if arguments.get::<bool>("help").unwrap_or(false) {
        help();
    }

    if arguments.get::<bool>("trace").unwrap_or(false) {
        logger::setup(Level::Trace);
    } else if arguments.get::<bool>("verbose").unwrap_or(false) {
        logger::setup(Level::Info);
    } else {
        logger::setup(Level::Warn);
    }

    let file = match arguments.get::<String>("config") {
        Some(path) => config::open(path)?,
        _ => config::Config::default(),
    };

    macro_rules! pick(
        ($name:expr, $field:ident: $kind:ty) => (
            arguments.get::<$kind>($name).or_else(|| file.$field.clone())
        );
    );

    let rates = {
        let default = file.rates.unwrap_or_default();
        Rates {
            from: arguments.get::<f64>("from").unwrap_or(default.from),
            to: arguments.get::<f64>("to").unwrap_or(default.to),
            step: arguments.get::<f64>("step").unwrap_or(default.step),
        }
    };
    let policy = match pick!("policy", policy: String) {
        Some(policy) => policy.parse::<Policy>()?,
        _ => Policy::Private,
    };
    let template = simulator::Config {
        mean_service_time: pick!("service", service: f64).unwrap_or(0.04),
        workers: pick!("workers", workers: usize).unwrap_or(1),
        policy: policy,
        target: pick!("target", target: u64).unwrap_or(10000),
        seed: pick!("seed", seed: u64),
        ..simulator::Config::default()
    };
    let limit = pick!("limit", limit: u64);
    let path = pick!("output", output: String).unwrap_or_else(|| "simulation_output".to_string());
    let mut outputs = output::new(path)?;

    let mut failed = 0;
    let start = Instant::now();
    for rate in rates.values()? {
        let config = simulator::Config { arrival_rate: rate, ..template };
        info!(target: "Simulator", "Running at rate {} with offered load {:.3} per worker...",
              rate, config.load());
        let summary = match config.policy {
            Policy::Private => drive::<Private>(&config, limit),
            Policy::Shared => drive::<Shared>(&config, limit),
        };
        match summary {
            Ok(summary) => {
                for output in &mut outputs {
                    output.next(&config, &summary)?;
                }
            },
            Err(error) => {
                error!(target: "Simulator", "Failed to simulate at rate {} ({}).", rate, error);
                failed += 1;
            },
        }
    }
    info!(target: "Simulator", "Well done in {:.2} seconds.", start.elapsed().as_secs_f64());

    if failed > 0 {
        raise!("{} configuration point(s) failed", failed);
    }
    Ok(())
}

fn drive<S: Schedule>(config: &simulator::Config, limit: Option<u64>) -> Result<Summary> {
    let mut system = System::<S, _>::new(config, config.source())?;
    let mut count = 0;
    while !system.done() {
        if let Some(limit) = limit {
            if count >= limit {
                raise!("gave up after {} events at time {:.4} with {} processes waiting", count,
                       system.clock(), system.waiting());
            }
        }
        system.step()?;
        count += 1;
    }
    Ok(system.summary()?)
}

fn help() -> ! {
    println!("{}", USAGE.trim());
    std::process::exit(0);
}

#[allow(unused_must_use)]
fn fail(error: Error) -> ! {
    use std::io::Write;
    if let Some(mut output) = term::stderr() {
        output.fg(term::color::RED);
        output.write_all(format!("Error: {}.\n", error).as_bytes());
        output.reset();
    } else {
        eprintln!("Error: {}.", error);
    }
    std::process::exit(1);
}
