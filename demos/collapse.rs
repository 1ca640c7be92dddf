use clap::Parser;

use boundnet::interval::{footprint_size, intervals};
use boundnet::parse::{parse_network, to_cidr};
use boundnet::solver::{DpSolver, Solver, TreeSolver};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// IPv4 prefixes to collapse, e.g. `192.168.0.0/24`.
    #[arg(value_name = "CIDR", required = true)]
    prefixes: Vec<String>,

    /// Maximum number of output blocks.
    #[clap(short, long, value_name = "INT", default_value = "4")]
    max: usize,

    /// Solver to use: `dp` or `tree`.
    #[clap(long, value_name = "NAME", default_value = "dp")]
    solver: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    let input = args
        .prefixes
        .iter()
        .map(|s| parse_network(s))
        .collect::<Result<Vec<_>, _>>()?;
    println!(
        "{} input networks, footprint {}",
        input.len(),
        footprint_size(&intervals(&input))
    );

    let solver: Box<dyn Solver> = match args.solver.as_str() {
        "dp" => Box::new(DpSolver),
        "tree" => Box::new(TreeSolver),
        other => color_eyre::eyre::bail!("unknown solver {:?}", other),
    };

    let cover = solver.solve(&input, args.max)?;
    println!(
        "collapsed to {} blocks, footprint {}",
        cover.len(),
        footprint_size(&intervals(&cover))
    );
    for network in &cover {
        match to_cidr(*network) {
            Ok(cidr) => println!("  {} = {}", cidr, network),
            Err(_) => println!("  {}", network),
        }
    }

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
