use crate::domain::model::{Basket, LineItem};
use crate::utils::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingKind {
    FlatRate,
    PerRegion,
    GroupRegion,
}

impl ShippingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingKind::FlatRate => "flat_rate",
            ShippingKind::PerRegion => "per_region",
            ShippingKind::GroupRegion => "group_region",
        }
    }
}

/// Pricing policy attached to a line item.
///
/// Sealed: the crate ships exactly three policies (flat rate, per region,
/// grouped region). The basket is passed as context and may be absent.
pub trait ShippingStrategy: Sealed + Send + Sync {
    fn amount(&self, line_item: &LineItem, basket: Option<&Basket>) -> Decimal;

    /// Like `amount`, but reports a missing region price instead of
    /// falling back to zero.
    fn try_amount(&self, line_item: &LineItem, basket: Option<&Basket>) -> Result<Decimal>;

    fn description(&self, line_item: &LineItem, basket: Option<&Basket>) -> String;

    fn kind(&self) -> ShippingKind;
}

pub type SharedShipping = Arc<dyn ShippingStrategy>;

/// Instance identity, not configuration equality.
pub fn same_strategy(a: &SharedShipping, b: &SharedShipping) -> bool {
    Arc::ptr_eq(a, b)
}
