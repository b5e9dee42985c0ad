use crate::core::{LineQuote, ShippingQuote};
use crate::utils::error::{Result, ShippingError};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

pub fn render(quote: &ShippingQuote, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(quote)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(quote)?),
        OutputFormat::Csv => render_csv(quote),
    }
}

fn optional<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string())
}

fn table_row(line: &LineQuote) -> String {
    format!(
        "{:<6}{:<16}{:<10}{:<14}{:>8}  {}",
        optional(&line.id),
        line.region.to_string(),
        optional(&line.supplier_id),
        line.shipping.as_str(),
        line.amount.to_string(),
        line.description
    )
}

pub fn render_table(quote: &ShippingQuote) -> String {
    let mut rows = vec![format!(
        "{:<6}{:<16}{:<10}{:<14}{:>8}  {}",
        "ID", "REGION", "SUPPLIER", "SHIPPING", "AMOUNT", "DESCRIPTION"
    )];
    rows.extend(quote.lines.iter().map(table_row));
    rows.push(format!("{:<46}{:>8}", "TOTAL", quote.total.to_string()));
    rows.join("\n")
}

pub fn render_csv(quote: &ShippingQuote) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["id", "region", "supplier", "shipping", "description", "amount"])?;

    for line in &quote.lines {
        writer.write_record([
            line.id.map(|id| id.to_string()).unwrap_or_default(),
            line.region.to_string(),
            line.supplier_id.map(|s| s.to_string()).unwrap_or_default(),
            line.shipping.as_str().to_string(),
            line.description.clone(),
            line.amount.to_string(),
        ])?;
    }
    let total = quote.total.to_string();
    writer.write_record(["", "", "", "", "total", total.as_str()])?;

    let bytes = writer.into_inner().map_err(|e| ShippingError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
