pub mod calculator;
pub mod flat_rate;
pub mod group_region;
pub mod per_region;
pub mod region_costs;

pub use crate::domain::model::{Basket, LineItem, Region, RegionShippingCost};
pub use crate::domain::ports::{SharedShipping, ShippingKind, ShippingStrategy};
pub use crate::utils::error::{Result, ShippingError};

pub use calculator::{LineQuote, ShippingCalculator, ShippingQuote};
pub use flat_rate::FlatRateShipping;
pub use group_region::GroupRegionShipping;
pub use per_region::PerRegionShipping;
pub use region_costs::RegionCostTable;
