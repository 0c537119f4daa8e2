//! # Financial Computation
//!
//! Line amounts and document totals, computed with exact decimal arithmetic.
//!
//! ```text
//! amount        = round(quantity * rate, 2)          (unless overridden)
//! subtotal      = Σ amount
//! serviceCharge = round(subtotal * serviceCharge% / 100, 2)
//! tax           = round((subtotal + serviceCharge) * tax% / 100, 2)
//! total         = subtotal + serviceCharge + tax + shipping
//! ```
//!
//! Rounding is half-up to 2 places and happens at every derived step, so
//! the figures a renderer displays always add up to the displayed total.
//! Figures too large for a 96-bit decimal are reported as errors, never
//! wrapped or saturated.
//! An invoice without line items totals exactly zero, shipping included.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::VellumError;
use crate::model::LineItem;

/// Monetary values carry 2 decimal places.
pub const MONEY_PLACES: u32 = 2;

/// Round a monetary value half-up to 2 places and fix its scale at 2, so
/// `2250` serializes as `"2250.00"`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_PLACES);
    rounded
}

/// `round(base * percent / 100, 2)`, or `None` if it does not fit.
pub fn percent_of(base: Decimal, percent: Decimal) -> Option<Decimal> {
    base.checked_mul(percent)?
        .checked_div(Decimal::ONE_HUNDRED)
        .map(round_money)
}

/// Sum of figures, or `None` on overflow.
fn checked_sum(figures: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    figures
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, figure| acc.checked_add(figure))
}

/// A line item after validation and amount derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedLine {
    pub id: String,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
    /// The amount came from an explicit override.
    pub overridden: bool,
}

/// Document totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: Decimal,
    pub service_charge: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl Totals {
    /// All figures zero, at money scale.
    pub fn zero() -> Self {
        let zero = round_money(Decimal::ZERO);
        Self {
            subtotal: zero,
            service_charge: zero,
            tax: zero,
            shipping: zero,
            total: zero,
        }
    }
}

/// Id used for an item: the explicit id when present, else `item-N` (1-based).
pub fn item_id(index: usize, item: &LineItem) -> String {
    match item.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("item-{}", index + 1),
    }
}

/// Validate one line item and derive its amount.
///
/// Quantity defaults to 1 and rate to 0 when absent. Negative values are
/// rejected, never clamped.
pub fn price_item(index: usize, item: &LineItem) -> Result<PricedLine, VellumError> {
    let id = item_id(index, item);
    let quantity = item.quantity.unwrap_or(Decimal::ONE);
    let rate = item.rate.unwrap_or(Decimal::ZERO);

    if quantity.is_sign_negative() && !quantity.is_zero() {
        return Err(VellumError::invalid_item(
            id,
            format!("quantity must not be negative (got {})", quantity),
        ));
    }
    if rate.is_sign_negative() && !rate.is_zero() {
        return Err(VellumError::invalid_item(
            id,
            format!("rate must not be negative (got {})", rate),
        ));
    }

    if item.amount_override {
        let Some(amount) = item.amount else {
            return Err(VellumError::invalid_item(
                id,
                "amountOverride is set but no amount was supplied",
            ));
        };
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(VellumError::invalid_item(
                id,
                format!("override amount must not be negative (got {})", amount),
            ));
        }
        if amount.normalize().scale() > MONEY_PLACES {
            return Err(VellumError::invalid_item(
                id,
                format!("override amount {} has more than 2 decimal places", amount),
            ));
        }
        return Ok(PricedLine {
            id,
            quantity,
            rate,
            amount,
            overridden: true,
        });
    }

    let Some(computed) = quantity.checked_mul(rate).map(round_money) else {
        return Err(VellumError::invalid_item(
            id,
            format!("amount out of range ({} x {})", quantity, rate),
        ));
    };

    if let Some(amount) = item.amount
        && amount != computed
    {
        return Err(VellumError::invalid_item(
            id,
            format!(
                "amount {} does not match quantity x rate ({}); set amountOverride to keep it",
                amount, computed
            ),
        ));
    }

    Ok(PricedLine {
        id,
        quantity,
        rate,
        amount: computed,
        overridden: false,
    })
}

/// Price every item, rejecting duplicate ids.
pub fn price_items(items: &[LineItem]) -> Result<Vec<PricedLine>, VellumError> {
    let mut seen = HashSet::new();
    let mut priced = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let line = price_item(index, item)?;
        if !seen.insert(line.id.clone()) {
            return Err(VellumError::invalid_item(
                line.id,
                "id is used by more than one line item",
            ));
        }
        priced.push(line);
    }
    Ok(priced)
}

/// Totals over already priced lines.
///
/// `service_charge_percent` must already be zero for templates that do not
/// bill a service charge.
pub fn summarize(
    lines: &[PricedLine],
    tax_rate_percent: Decimal,
    shipping: Decimal,
    service_charge_percent: Decimal,
) -> Result<Totals, VellumError> {
    check_charge("taxRate", tax_rate_percent)?;
    check_charge("shipping", shipping)?;
    check_charge("serviceCharge", service_charge_percent)?;

    if lines.is_empty() {
        return Ok(Totals::zero());
    }

    let out_of_range = |figure| VellumError::AmountOutOfRange { figure };
    let subtotal = checked_sum(lines.iter().map(|l| l.amount))
        .map(round_money)
        .ok_or_else(|| out_of_range("subtotal"))?;
    let service_charge = percent_of(subtotal, service_charge_percent)
        .ok_or_else(|| out_of_range("serviceCharge"))?;
    let tax = subtotal
        .checked_add(service_charge)
        .and_then(|base| percent_of(base, tax_rate_percent))
        .ok_or_else(|| out_of_range("tax"))?;
    let shipping = round_money(shipping);
    let total = checked_sum([subtotal, service_charge, tax, shipping])
        .map(round_money)
        .ok_or_else(|| out_of_range("total"))?;

    Ok(Totals {
        subtotal,
        service_charge,
        tax,
        shipping,
        total,
    })
}

/// Price the items and compute document totals in one step.
pub fn compute_totals(
    items: &[LineItem],
    tax_rate_percent: Decimal,
    shipping: Decimal,
    service_charge_percent: Decimal,
) -> Result<Totals, VellumError> {
    let lines = price_items(items)?;
    summarize(&lines, tax_rate_percent, shipping, service_charge_percent)
}

/// Reject a negative charge input.
pub fn check_charge(field: &'static str, value: Decimal) -> Result<(), VellumError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(VellumError::InvalidCharge { field, value });
    }
    Ok(())
}

// ============================================================================
// DISPLAY
// ============================================================================

/// Format a monetary value with a currency symbol and thousands separators:
/// `format_money(dec!(2880.675), "$") == "$2,880.68"`.
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    let rounded = round_money(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!(
        "{}{}{}.{}",
        if negative { "-" } else { "" },
        symbol,
        grouped,
        frac_part
    )
}

/// Quantities print without trailing zeros: `2.50` → `2.5`, `3.00` → `3`.
pub fn format_quantity(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}

/// Percentages print without trailing zeros and with a `%` sign.
pub fn format_percent(percent: Decimal) -> String {
    format!("{}%", percent.normalize())
}
