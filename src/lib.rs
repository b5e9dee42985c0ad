pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::report::{render, OutputFormat};
pub use config::BasketFile;
pub use core::{
    Basket, FlatRateShipping, GroupRegionShipping, LineItem, LineQuote, PerRegionShipping,
    Region, RegionCostTable, RegionShippingCost, SharedShipping, ShippingCalculator,
    ShippingKind, ShippingQuote, ShippingStrategy,
};
pub use domain::model::{LineItemId, SupplierId};
pub use utils::error::{Result, ShippingError};
