use super::{DEFAULT_STATS_FILE, VERSION};
use clap::{App, Arg, ArgMatches};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::warn;

/// Resolved command line: the stats file plus any ignored extra arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub stats_file: PathBuf,
    pub extra: Vec<String>,
}

fn build_app() -> App<'static, 'static> {
    let arg_csvin = Arg::with_name("input_csvfile")
        .help("csv file with generation, entropy and live_cells columns")
        .index(1)
        .default_value(DEFAULT_STATS_FILE);
    let arg_extra = Arg::with_name("extra")
        .help("ignored")
        .index(2)
        .multiple(true)
        .hidden(true);
    App::new("stats_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot the entropy and live cell count over the generations")
        .arg(arg_csvin)
        .arg(arg_extra)
}

/// Takes the CLI arguments of the running process, exits on --help, --version or bad input.
pub fn parse_cli() -> CliArgs {
    from_matches(&build_app().get_matches())
}

/// Same as parse_cli but over an explicit argument list, the first item is the program name.
pub fn parse_cli_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_app().get_matches_from_safe(args)?;
    Ok(from_matches(&matches))
}

fn from_matches(cli_args: &ArgMatches) -> CliArgs {
    let stats_file = PathBuf::from(
        cli_args
            .value_of("input_csvfile")
            .unwrap_or(DEFAULT_STATS_FILE),
    );
    let extra: Vec<String> = cli_args
        .values_of("extra")
        .map(|values| values.map(String::from).collect())
        .unwrap_or_default();
    if !extra.is_empty() {
        warn!("ignoring extra arguments: {}", extra.join(" "));
    }
    CliArgs { stats_file, extra }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats_file() {
        let args = parse_cli_from(vec!["stats_plot"]).unwrap();
        assert_eq!(args.stats_file, PathBuf::from("stats.csv"));
        assert!(args.extra.is_empty());
    }

    #[test]
    fn test_positional_path() {
        let args = parse_cli_from(vec!["stats_plot", "runs/glider.csv"]).unwrap();
        assert_eq!(args.stats_file, PathBuf::from("runs/glider.csv"));
    }

    #[test]
    fn test_extra_arguments_are_kept_but_ignored() {
        let args = parse_cli_from(vec!["stats_plot", "a.csv", "b.csv", "c.csv"]).unwrap();
        assert_eq!(args.stats_file, PathBuf::from("a.csv"));
        assert_eq!(args.extra, vec!["b.csv".to_string(), "c.csv".to_string()]);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(parse_cli_from(vec!["stats_plot", "--svgfile", "out.svg"]).is_err());
    }
}
