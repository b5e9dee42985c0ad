use crate::core::per_region::PerRegionShipping;
use crate::core::region_costs::RegionCostTable;
use crate::core::{Basket, LineItem, Result, SharedShipping, ShippingKind, ShippingStrategy};
use crate::domain::ports::{same_strategy, Sealed};
use crate::utils::validation::{validate_amount, Validate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

/// Per-region pricing with a discount for consolidated shipments.
///
/// Line items that share a delivery region, a supplier and the very same
/// strategy instance form a group. The first member of the group in basket
/// order (the anchor) pays the region price; every other member pays the
/// region price minus `deducted_amount`, floored at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRegionShipping {
    pub per_region: PerRegionShipping,
    pub deducted_amount: Decimal,
}

impl GroupRegionShipping {
    pub const DEFAULT_DEDUCTED_AMOUNT: Decimal = dec!(0.5);

    pub fn new(per_region_costs: impl Into<RegionCostTable>) -> Self {
        Self::with_deduction(per_region_costs, Self::DEFAULT_DEDUCTED_AMOUNT)
    }

    pub fn with_deduction(per_region_costs: impl Into<RegionCostTable>, deducted_amount: Decimal) -> Self {
        Self {
            per_region: PerRegionShipping::new(per_region_costs),
            deducted_amount,
        }
    }

    pub fn shared(self) -> SharedShipping {
        Arc::new(self)
    }

    /// First line in the basket that groups with `line_item`, if any.
    /// Membership is judged by the line's own strategy instance.
    pub fn group_anchor<'b>(line_item: &LineItem, basket: Option<&'b Basket>) -> Option<&'b LineItem> {
        basket?.line_items.iter().find(|candidate| {
            candidate.delivery_region == line_item.delivery_region
                && candidate.supplier_id == line_item.supplier_id
                && same_strategy(&candidate.shipping, &line_item.shipping)
        })
    }

    /// True when a group exists and `line_item` is not its anchor. A line
    /// that is not itself in the basket still counts as a follower.
    pub fn is_discounted(line_item: &LineItem, basket: Option<&Basket>) -> bool {
        Self::group_anchor(line_item, basket).is_some_and(|anchor| !std::ptr::eq(anchor, line_item))
    }

    fn apply_deduction(&self, base: Decimal, line_item: &LineItem, basket: Option<&Basket>) -> Decimal {
        if !Self::is_discounted(line_item, basket) {
            return base;
        }

        let discounted = base - self.deducted_amount;
        if discounted < Decimal::ZERO {
            tracing::debug!(
                "Group deduction {} exceeds {} for {}, clamping to zero",
                self.deducted_amount,
                base,
                line_item.delivery_region
            );
            return Decimal::ZERO;
        }
        discounted
    }
}

impl Sealed for GroupRegionShipping {}

impl ShippingStrategy for GroupRegionShipping {
    fn amount(&self, line_item: &LineItem, basket: Option<&Basket>) -> Decimal {
        let base = self.per_region.lookup_or_zero(line_item);
        self.apply_deduction(base, line_item, basket)
    }

    fn try_amount(&self, line_item: &LineItem, basket: Option<&Basket>) -> Result<Decimal> {
        let base = self.per_region.lookup(line_item)?;
        Ok(self.apply_deduction(base, line_item, basket))
    }

    fn description(&self, line_item: &LineItem, _basket: Option<&Basket>) -> String {
        format!("Group shipping to {}", line_item.delivery_region)
    }

    fn kind(&self) -> ShippingKind {
        ShippingKind::GroupRegion
    }
}

impl Validate for GroupRegionShipping {
    fn validate(&self) -> Result<()> {
        self.per_region.validate()?;
        validate_amount("deducted_amount", self.deducted_amount)
    }
}
