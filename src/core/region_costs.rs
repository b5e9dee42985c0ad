use crate::domain::model::{Region, RegionShippingCost};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ordered region price list. Lookup is first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCostTable {
    entries: Vec<RegionShippingCost>,
}

impl RegionCostTable {
    pub fn new(entries: Vec<RegionShippingCost>) -> Self {
        Self { entries }
    }

    pub fn amount_for(&self, region: Region) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|cost| cost.destination_region == region)
            .map(|cost| cost.amount)
    }

    pub fn entries(&self) -> &[RegionShippingCost] {
        &self.entries
    }
}

impl From<Vec<RegionShippingCost>> for RegionCostTable {
    fn from(entries: Vec<RegionShippingCost>) -> Self {
        Self::new(entries)
    }
}

impl<const N: usize> From<[(Region, Decimal); N]> for RegionCostTable {
    fn from(pairs: [(Region, Decimal); N]) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(region, amount)| RegionShippingCost::new(region, amount))
                .collect(),
        )
    }
}
