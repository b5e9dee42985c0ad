use crate::core::{
    Basket, FlatRateShipping, GroupRegionShipping, LineItem, PerRegionShipping, Region,
    RegionShippingCost, SharedShipping,
};
use crate::domain::model::{LineItemId, SupplierId};
use crate::utils::error::{Result, ShippingError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// A basket and the shipping strategies its lines use, as written in TOML.
///
/// ```toml
/// [strategies.standard]
/// type = "per_region"
/// costs = [{ region = "uk", amount = "0.75" }, { region = "europe", amount = "1.5" }]
///
/// [[line_items]]
/// id = 1
/// region = "europe"
/// shipping = "standard"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BasketFile {
    #[serde(default)]
    pub strategies: BTreeMap<String, StrategyConfig>,
    #[serde(default)]
    pub line_items: Vec<LineItemConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyConfig {
    FlatRate {
        rate: Decimal,
    },
    PerRegion {
        costs: Vec<RegionShippingCost>,
    },
    GroupRegion {
        costs: Vec<RegionShippingCost>,
        deducted_amount: Option<Decimal>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineItemConfig {
    pub id: Option<u64>,
    #[serde(default, alias = "delivery_region")]
    pub region: Region,
    #[serde(alias = "supplier_id")]
    pub supplier: Option<u64>,
    pub shipping: String,
}

impl StrategyConfig {
    pub fn build(&self) -> SharedShipping {
        match self {
            StrategyConfig::FlatRate { rate } => FlatRateShipping::new(*rate).shared(),
            StrategyConfig::PerRegion { costs } => PerRegionShipping::new(costs.clone()).shared(),
            StrategyConfig::GroupRegion {
                costs,
                deducted_amount,
            } => GroupRegionShipping::with_deduction(
                costs.clone(),
                deducted_amount.unwrap_or(GroupRegionShipping::DEFAULT_DEDUCTED_AMOUNT),
            )
            .shared(),
        }
    }

    fn validate_named(&self, name: &str) -> Result<()> {
        let checked = match self {
            StrategyConfig::FlatRate { rate } => FlatRateShipping::new(*rate).validate(),
            StrategyConfig::PerRegion { costs } => PerRegionShipping::new(costs.clone()).validate(),
            StrategyConfig::GroupRegion {
                costs,
                deducted_amount,
            } => GroupRegionShipping::with_deduction(
                costs.clone(),
                deducted_amount.unwrap_or(GroupRegionShipping::DEFAULT_DEDUCTED_AMOUNT),
            )
            .validate(),
        };

        // Prefix the field with the strategy it came from.
        checked.map_err(|e| match e {
            ShippingError::InvalidConfigValue {
                field,
                value,
                reason,
            } => ShippingError::InvalidConfigValue {
                field: format!("strategies.{}.{}", name, field),
                value,
                reason,
            },
            other => other,
        })
    }
}

impl BasketFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ShippingError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Builds the basket. Each named strategy becomes one shared instance, so
    /// line items naming the same strategy can group with each other.
    pub fn build_basket(&self) -> Result<Basket> {
        let shared: HashMap<&str, SharedShipping> = self
            .strategies
            .iter()
            .map(|(name, strategy)| (name.as_str(), strategy.build()))
            .collect();

        let line_items = self
            .line_items
            .iter()
            .map(|line| -> Result<LineItem> {
                let shipping = shared.get(line.shipping.as_str()).cloned().ok_or_else(|| {
                    ShippingError::UnknownStrategy {
                        name: line.shipping.clone(),
                    }
                })?;

                Ok(LineItem {
                    id: line.id.map(LineItemId),
                    delivery_region: line.region,
                    supplier_id: line.supplier.map(SupplierId),
                    shipping,
                })
            })
            .collect::<Result<Vec<LineItem>>>()?;

        tracing::debug!(
            "Built basket with {} line items over {} strategies",
            line_items.len(),
            shared.len()
        );
        Ok(Basket::new(line_items))
    }
}

impl Validate for BasketFile {
    fn validate(&self) -> Result<()> {
        if self.strategies.is_empty() {
            return Err(ShippingError::InvalidConfigValue {
                field: "strategies".to_string(),
                value: String::new(),
                reason: "At least one shipping strategy must be defined".to_string(),
            });
        }

        for (name, strategy) in &self.strategies {
            validate_non_empty_string("strategies", name)?;
            strategy.validate_named(name)?;
        }

        for line in &self.line_items {
            if !self.strategies.contains_key(&line.shipping) {
                return Err(ShippingError::UnknownStrategy {
                    name: line.shipping.clone(),
                });
            }
        }

        Ok(())
    }
}
