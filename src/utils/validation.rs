use crate::domain::model::RegionShippingCost;
use crate::utils::error::{Result, ShippingError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Largest rate, cost or deduction a configuration may carry.
pub const MAX_CONFIGURED_AMOUNT: Decimal = dec!(1000000000);

pub fn validate_amount(field_name: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(ShippingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Amount cannot be negative".to_string(),
        });
    }
    if value > MAX_CONFIGURED_AMOUNT {
        return Err(ShippingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Amount cannot exceed {}", MAX_CONFIGURED_AMOUNT),
        });
    }
    Ok(())
}

/// Rejects tables that price the same region twice. Lookup itself would
/// silently take the first entry.
pub fn validate_region_costs(field_name: &str, costs: &[RegionShippingCost]) -> Result<()> {
    for (index, cost) in costs.iter().enumerate() {
        validate_amount(&format!("{}[{}].amount", field_name, index), cost.amount)?;

        if costs[..index]
            .iter()
            .any(|earlier| earlier.destination_region == cost.destination_region)
        {
            return Err(ShippingError::InvalidConfigValue {
                field: field_name.to_string(),
                value: cost.destination_region.to_string(),
                reason: "Region is listed more than once".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShippingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
