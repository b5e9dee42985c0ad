use crate::core::{Basket, LineItem, Region, Result, ShippingError, ShippingKind};
use crate::domain::model::{LineItemId, SupplierId};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineQuote {
    pub id: Option<LineItemId>,
    pub region: Region,
    pub supplier_id: Option<SupplierId>,
    pub shipping: ShippingKind,
    pub description: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingQuote {
    pub lines: Vec<LineQuote>,
    pub total: Decimal,
}

/// Sums each line's own strategy over a basket.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShippingCalculator;

impl ShippingCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Total shipping for the basket. An absent or empty basket costs zero.
    /// A total past `Decimal::MAX` saturates; `try_calculate_shipping`
    /// reports it instead.
    pub fn calculate_shipping(&self, basket: Option<&Basket>) -> Decimal {
        let total =
            Self::saturating_sum(Self::lines(basket).map(|line| Self::price_line(line, basket)));
        tracing::debug!("Basket shipping total: {}", total);
        total
    }

    /// Same as `calculate_shipping` but stops at the first line whose region
    /// has no configured price, and fails instead of overflowing.
    pub fn try_calculate_shipping(&self, basket: Option<&Basket>) -> Result<Decimal> {
        let mut total = Decimal::ZERO;
        for (index, line) in Self::lines(basket).enumerate() {
            let amount = line.shipping.try_amount(line, basket)?;
            total = total
                .checked_add(amount)
                .ok_or(ShippingError::AmountOverflow { lines: index + 1 })?;
        }
        Ok(total)
    }

    pub fn quote(&self, basket: Option<&Basket>) -> ShippingQuote {
        let lines: Vec<LineQuote> = Self::lines(basket)
            .map(|line| LineQuote {
                id: line.id,
                region: line.delivery_region,
                supplier_id: line.supplier_id,
                shipping: line.shipping.kind(),
                description: line.shipping.description(line, basket),
                amount: Self::price_line(line, basket),
            })
            .collect();
        let total = Self::saturating_sum(lines.iter().map(|line| line.amount));

        ShippingQuote { lines, total }
    }

    fn lines<'b>(basket: Option<&'b Basket>) -> impl Iterator<Item = &'b LineItem> {
        basket.into_iter().flat_map(|basket| basket.line_items.iter())
    }

    fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
        amounts.fold(Decimal::ZERO, |total, amount| {
            total.checked_add(amount).unwrap_or_else(|| {
                tracing::warn!("Shipping total overflowed, saturating at {}", Decimal::MAX);
                Decimal::MAX
            })
        })
    }

    fn price_line(line: &LineItem, basket: Option<&Basket>) -> Decimal {
        let amount = line.shipping.amount(line, basket);
        tracing::debug!(
            "Priced line {:?} ({:?}, {}) at {}",
            line.id,
            line.shipping.kind(),
            line.delivery_region,
            amount
        );
        amount
    }
}
