use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use travelog_core::RatingScale;

/// CLI arguments for travelog
#[derive(Debug, Parser)]
#[command(
    name = "travelog",
    version,
    about = "Aggregate and inspect visited-city exports from travelog profiles"
)]
pub struct CliArgs {
    /// Path to a travelog.toml config file
    #[arg(short = 'c', long = "config", env = "TRAVELOG_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// Most recently added city first
    Newest,
    /// Input order
    Oldest,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Group records per city and print the summaries
    Aggregate {
        /// JSON (or .json.gz) export: a record array or a profile document
        input: PathBuf,

        /// Scale the input ratings were entered on (five or ten)
        #[arg(short = 's', long = "scale", env = "TRAVELOG_RATING_SCALE")]
        scale: Option<RatingScale>,

        /// Display order of the summaries
        #[arg(long = "order", value_enum)]
        order: Option<Order>,

        /// Only show cities whose name contains this text (accent-insensitive)
        #[arg(long = "city")]
        city: Option<String>,

        /// Print JSON instead of a table
        #[arg(long = "json", conflicts_with = "table")]
        json: bool,

        /// Print a table even when the config file asks for JSON
        #[arg(long = "table")]
        table: bool,
    },

    /// Show totals for an export
    Stats {
        input: PathBuf,

        #[arg(short = 's', long = "scale", env = "TRAVELOG_RATING_SCALE")]
        scale: Option<RatingScale>,
    },

    /// Show how a country string resolves to a code
    Country {
        /// Code or name (e.g. FR, France, "United States of America")
        query: String,
    },

    /// Report cities with more than one manual rating; exits 2 if any
    Lint { input: PathBuf },

    /// Write a default travelog.toml to the current directory
    InitConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parses_aggregate_flags() {
        let args = CliArgs::parse_from([
            "travelog", "aggregate", "cities.json", "--scale", "ten", "--order", "oldest", "--json",
        ]);
        match args.command {
            Commands::Aggregate { input, scale, order, json, table, city } => {
                assert_eq!(input, PathBuf::from("cities.json"));
                assert_eq!(scale, Some(RatingScale::Ten));
                assert_eq!(order, Some(Order::Oldest));
                assert!(json);
                assert!(!table);
                assert!(city.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn json_and_table_conflict() {
        let res = CliArgs::try_parse_from(["travelog", "aggregate", "x.json", "--json", "--table"]);
        assert!(res.is_err());
    }

    #[test]
    fn rejects_unknown_scale() {
        assert!(CliArgs::try_parse_from(["travelog", "stats", "x.json", "-s", "seven"]).is_err());
    }
}
