use life_stats_plot::cli::{parse_cli, CliArgs};
use life_stats_plot::display::show_figure;
use life_stats_plot::figure::Figure;
use life_stats_plot::{StatsError, StatsTable};
use std::process;
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = parse_cli();
    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), StatsError> {
    info!("read data from {}", args.stats_file.display());
    let table = StatsTable::from_csv(&args.stats_file)?;
    info!("loaded {} generations", table.len());
    let figure = Figure::from_table(&table);
    show_figure(&figure)
}
