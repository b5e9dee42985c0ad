use crate::domain::ports::SharedShipping;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    #[serde(alias = "UK")]
    Uk,
    #[serde(alias = "Europe")]
    Europe,
    #[serde(alias = "RestOfTheWorld")]
    RestOfTheWorld,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Uk => "UK",
            Region::Europe => "Europe",
            Region::RestOfTheWorld => "RestOfTheWorld",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionShippingCost {
    #[serde(alias = "region")]
    pub destination_region: Region,
    pub amount: Decimal,
}

impl RegionShippingCost {
    pub fn new(destination_region: Region, amount: Decimal) -> Self {
        Self {
            destination_region,
            amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(pub u64);

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One basket line. The shipping strategy is shared: line items pointing at
/// the same `Arc` form a grouping scope for group-region pricing.
#[derive(Clone)]
pub struct LineItem {
    pub id: Option<LineItemId>,
    pub delivery_region: Region,
    pub supplier_id: Option<SupplierId>,
    pub shipping: SharedShipping,
}

impl LineItem {
    pub fn new(shipping: SharedShipping) -> Self {
        Self {
            id: None,
            delivery_region: Region::default(),
            supplier_id: None,
            shipping,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(LineItemId(id));
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.delivery_region = region;
        self
    }

    pub fn with_supplier(mut self, supplier: u64) -> Self {
        self.supplier_id = Some(SupplierId(supplier));
        self
    }
}

impl fmt::Debug for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineItem")
            .field("id", &self.id)
            .field("delivery_region", &self.delivery_region)
            .field("supplier_id", &self.supplier_id)
            .field("shipping", &self.shipping.kind())
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Basket {
    pub line_items: Vec<LineItem>,
}

impl Basket {
    pub fn new(line_items: Vec<LineItem>) -> Self {
        Self { line_items }
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}
