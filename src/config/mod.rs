pub mod toml_config;

pub use toml_config::{BasketFile, LineItemConfig, StrategyConfig};

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::app::report::OutputFormat;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_non_empty_string, Validate};
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "basket-shipping")]
    #[command(about = "Quote shipping charges for a basket described in TOML")]
    pub struct CliConfig {
        /// Path to the basket file
        #[arg(short, long, default_value = "basket.toml")]
        pub basket: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        pub format: OutputFormat,

        /// Fail when a line's region has no configured price instead of charging zero
        #[arg(long)]
        pub strict: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        /// Emit logs as JSON lines
        #[arg(long)]
        pub json_logs: bool,
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_non_empty_string("basket", &self.basket.to_string_lossy())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = CliConfig::parse_from(["basket-shipping"]);
            assert_eq!(config.basket, PathBuf::from("basket.toml"));
            assert_eq!(config.format, OutputFormat::Table);
            assert!(!config.strict);
        }

        #[test]
        fn test_flags() {
            let config = CliConfig::parse_from([
                "basket-shipping",
                "--basket",
                "orders/42.toml",
                "--format",
                "csv",
                "--strict",
                "--json-logs",
            ]);
            assert_eq!(config.basket, PathBuf::from("orders/42.toml"));
            assert_eq!(config.format, OutputFormat::Csv);
            assert!(config.strict);
            assert!(config.json_logs);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_unknown_format_is_rejected() {
            assert!(CliConfig::try_parse_from(["basket-shipping", "--format", "xml"]).is_err());
            let json = CliConfig::parse_from(["basket-shipping", "--format", "json"]);
            assert_eq!(json.format, OutputFormat::Json);
        }

        #[test]
        fn test_empty_basket_path_is_invalid() {
            assert!(CliConfig::try_parse_from(["basket-shipping", "--basket", ""]).is_err());

            let config = CliConfig {
                basket: PathBuf::new(),
                ..CliConfig::parse_from(["basket-shipping"])
            };
            assert!(config.validate().is_err());
        }
    }
}
