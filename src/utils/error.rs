use crate::domain::model::Region;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShippingError {
    #[error("No shipping cost configured for region {region}")]
    UnpricedRegion { region: Region },

    #[error("Shipping total overflowed after {lines} line items")]
    AmountOverflow { lines: usize },

    #[error("Line item references unknown shipping strategy '{name}'")]
    UnknownStrategy { name: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Pricing,
    Configuration,
    System,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ShippingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShippingError::UnpricedRegion { .. } | ShippingError::AmountOverflow { .. } => {
                ErrorCategory::Pricing
            }
            ShippingError::UnknownStrategy { .. }
            | ShippingError::InvalidConfigValue { .. }
            | ShippingError::ConfigParse { .. } => ErrorCategory::Configuration,
            ShippingError::Io(_) => ErrorCategory::System,
            ShippingError::Serialization(_) | ShippingError::Csv(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Pricing => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ShippingError::UnpricedRegion { region } => format!(
                "Add a cost entry for {} to the strategy's region table, or run without --strict",
                region
            ),
            ShippingError::AmountOverflow { .. } => {
                "Check the basket file for oversized rates or costs".to_string()
            }
            ShippingError::UnknownStrategy { name } => format!(
                "Define [strategies.{}] or point the line item at an existing strategy",
                name
            ),
            ShippingError::InvalidConfigValue { field, .. } => {
                format!("Fix the value of '{}' in the basket file", field)
            }
            ShippingError::ConfigParse { .. } => {
                "Check the basket file is valid TOML with a `type` on every strategy".to_string()
            }
            ShippingError::Io(_) => "Check the file path exists and is readable".to_string(),
            ShippingError::Serialization(_) | ShippingError::Csv(_) => {
                "Retry with --format table".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Pricing => format!("Shipping could not be priced: {}", self),
            ErrorCategory::Configuration => format!("Basket file is not usable: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
            ErrorCategory::Output => format!("Could not render the quote: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShippingError>;
