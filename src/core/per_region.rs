use crate::core::region_costs::RegionCostTable;
use crate::core::{
    Basket, LineItem, Result, SharedShipping, ShippingError, ShippingKind, ShippingStrategy,
};
use crate::domain::ports::Sealed;
use crate::utils::validation::{validate_region_costs, Validate};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Prices a line by looking up its delivery region.
///
/// A region missing from the table is charged zero by `amount` (with a
/// warning); `try_amount` reports it as `ShippingError::UnpricedRegion`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerRegionShipping {
    pub per_region_costs: RegionCostTable,
}

impl PerRegionShipping {
    pub fn new(per_region_costs: impl Into<RegionCostTable>) -> Self {
        Self {
            per_region_costs: per_region_costs.into(),
        }
    }

    pub fn shared(self) -> SharedShipping {
        Arc::new(self)
    }

    pub(crate) fn lookup(&self, line_item: &LineItem) -> Result<Decimal> {
        self.per_region_costs
            .amount_for(line_item.delivery_region)
            .ok_or(ShippingError::UnpricedRegion {
                region: line_item.delivery_region,
            })
    }

    pub(crate) fn lookup_or_zero(&self, line_item: &LineItem) -> Decimal {
        self.lookup(line_item).unwrap_or_else(|e| {
            tracing::warn!("{}, charging zero", e);
            Decimal::ZERO
        })
    }
}

impl Sealed for PerRegionShipping {}

impl ShippingStrategy for PerRegionShipping {
    fn amount(&self, line_item: &LineItem, _basket: Option<&Basket>) -> Decimal {
        self.lookup_or_zero(line_item)
    }

    fn try_amount(&self, line_item: &LineItem, _basket: Option<&Basket>) -> Result<Decimal> {
        self.lookup(line_item)
    }

    fn description(&self, line_item: &LineItem, _basket: Option<&Basket>) -> String {
        format!("Shipping to {}", line_item.delivery_region)
    }

    fn kind(&self) -> ShippingKind {
        ShippingKind::PerRegion
    }
}

impl Validate for PerRegionShipping {
    fn validate(&self) -> Result<()> {
        validate_region_costs("per_region_costs", self.per_region_costs.entries())
    }
}
