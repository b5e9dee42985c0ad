use basket_shipping::utils::error::ErrorSeverity;
use basket_shipping::utils::{logger, validation::Validate};
use basket_shipping::{render, BasketFile, CliConfig, ShippingCalculator, ShippingError};
use clap::Parser;

fn run(config: &CliConfig) -> Result<String, ShippingError> {
    tracing::info!("📁 Loading basket from: {}", config.basket.display());
    let file = BasketFile::from_file(&config.basket)?;
    file.validate()?;

    let basket = file.build_basket()?;
    tracing::info!("🧺 Basket has {} line items", basket.line_items.len());

    let calculator = ShippingCalculator::new();
    if config.strict {
        calculator.try_calculate_shipping(Some(&basket))?;
    }

    let quote = calculator.quote(Some(&basket));
    tracing::info!("✅ Shipping total: {}", quote.total);
    render(&quote, config.format)
}

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Shipping quote failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2, // unpriced region under --strict
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
