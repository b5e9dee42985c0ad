use crate::core::{Basket, LineItem, Result, SharedShipping, ShippingKind, ShippingStrategy};
use crate::domain::ports::Sealed;
use crate::utils::validation::{validate_amount, Validate};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Same charge for every line, whatever the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRateShipping {
    pub flat_rate: Decimal,
}

impl FlatRateShipping {
    pub fn new(flat_rate: Decimal) -> Self {
        Self { flat_rate }
    }

    pub fn shared(self) -> SharedShipping {
        Arc::new(self)
    }
}

impl Sealed for FlatRateShipping {}

impl ShippingStrategy for FlatRateShipping {
    fn amount(&self, _line_item: &LineItem, _basket: Option<&Basket>) -> Decimal {
        self.flat_rate
    }

    fn try_amount(&self, line_item: &LineItem, basket: Option<&Basket>) -> Result<Decimal> {
        Ok(self.amount(line_item, basket))
    }

    fn description(&self, _line_item: &LineItem, _basket: Option<&Basket>) -> String {
        "Flat rate shipping".to_string()
    }

    fn kind(&self) -> ShippingKind {
        ShippingKind::FlatRate
    }
}

impl Validate for FlatRateShipping {
    fn validate(&self) -> Result<()> {
        validate_amount("flat_rate", self.flat_rate)
    }
}
