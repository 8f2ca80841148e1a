//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Coinage - exact, currency-safe money arithmetic.
///
/// Values are written as `"<CODE> <amount>"`, e.g. `"GBP 20.50"`. Where an
/// operand may be absent, write `none`.
#[derive(Parser, Debug)]
#[command(name = "coinage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to an extra configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of `coinage`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a value and print its canonical form
    Parse {
        /// Value such as "GBP 20"
        money: String,
    },

    /// Print zero in a currency
    Zero {
        /// Currency code
        code: String,
    },

    /// Add two values (an absent operand is ignored)
    Add(BinaryArgs),

    /// Subtract the second value from the first
    Subtract(BinaryArgs),

    /// Print the larger of two values (ties print the first)
    Max(BinaryArgs),

    /// Print the smaller of two values (ties print the first)
    Min(BinaryArgs),

    /// Print whether a value is zero (absent counts as zero)
    IsZero {
        /// Value or `none`
        value: String,
    },

    /// Sum any number of values, skipping absent ones
    Total {
        /// Values or `none`
        values: Vec<String>,
    },

    /// Show the metadata of one currency
    Currency {
        /// Currency code
        code: String,
    },

    /// List every known currency code
    Currencies,
}

/// Two possibly-absent operands.
#[derive(Parser, Debug)]
pub struct BinaryArgs {
    /// First value or `none`
    pub a: String,
    /// Second value or `none`
    pub b: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_binary_command() {
        let cli = Cli::try_parse_from(["coinage", "add", "GBP 20", "none"]).unwrap();
        match cli.command {
            Command::Add(args) => {
                assert_eq!(args.a, "GBP 20");
                assert_eq!(args.b, "none");
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["coinage", "currencies", "--config", "coinage.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("coinage.toml")));
        assert!(matches!(cli.command, Command::Currencies));
    }

    #[test]
    fn test_negative_amount_is_not_a_flag() {
        let cli = Cli::try_parse_from(["coinage", "parse", "GBP -10"]).unwrap();
        assert!(matches!(cli.command, Command::Parse { ref money } if money == "GBP -10"));
    }
}
