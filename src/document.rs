//! # Resolved Document
//!
//! The engine's output: a fully populated tree a renderer can lay out without
//! doing any defaulting of its own. Every leaf holds a concrete value.
//! Absence is expressed by leaving an optional section out of `sections`, by
//! an empty list (item notes) or by an explicit variant ([`Logo::Monogram`]),
//! never by `null`.
//!
//! Money figures serialize as exact decimal strings (`"2880.68"`); every
//! figure also carries a display string with the currency symbol.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Totals;
use crate::sections::ResolvedSection;
use crate::style::ResolvedStyle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDocument {
    pub template: TemplateRef,
    pub style: ResolvedStyle,
    pub header: Header,
    pub parties: Parties,
    pub metadata: Metadata,
    pub table: ItemTable,
    /// Rendered optional sections, in skeleton order.
    pub sections: Vec<ResolvedSection>,
    pub footer: Footer,
}

/// Which template produced the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRef {
    /// The id the caller asked for, verbatim.
    pub requested: String,
    pub id: String,
    pub name: String,
    /// The requested id was unknown and the generic template was used.
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// "INVOICE", "MEDICAL INVOICE", ...
    pub title: String,
    pub company_name: String,
    pub tagline: String,
    pub logo: Logo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Logo {
    /// Reference to an uploaded image (URL or data URI).
    Image { src: String },
    /// Initials drawn in place of a logo image.
    Monogram { initials: String },
}

impl Logo {
    /// An image if a reference is given, otherwise the company's initials.
    pub fn for_company(reference: Option<&str>, company_name: &str) -> Self {
        match reference.map(str::trim).filter(|r| !r.is_empty()) {
            Some(src) => Logo::Image { src: src.to_string() },
            None => Logo::Monogram {
                initials: initials(company_name),
            },
        }
    }
}

/// Up to two uppercase initials: "Acme Widget Co." → "AW".
fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        name.trim().chars().take(1).collect()
    } else {
        letters
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parties {
    pub from: PartyBlock,
    pub to: PartyBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyBlock {
    /// "From", "Provider", "Bill To", "Patient Information", ...
    pub label: String,
    pub name: String,
    pub address_lines: Vec<String>,
    pub email: String,
    pub phone: String,
}

/// Invoice identifiers. `fields` is the labelled list in display order; the
/// named fields carry the same values for programmatic access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub fields: Vec<MetaField>,
    pub invoice_number: String,
    /// Display form (template date format).
    pub issue_date: String,
    pub due_date: String,
    pub payment_terms: String,
    pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub symbol: String,
    pub code: String,
}

/// The line-item table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTable {
    pub columns: Columns,
    pub rows: Vec<ItemRow>,
    /// Sample rows shown while `rows` is empty. Never part of the totals.
    pub placeholder_rows: Vec<DisplayRow>,
    pub totals: TotalsBlock,
}

/// Column headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Columns {
    pub description: String,
    pub quantity: String,
    pub rate: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRow {
    pub id: String,
    pub description: String,
    /// Secondary lines under the description (details, SKU).
    pub notes: Vec<String>,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
    pub amount_override: bool,
    pub display: DisplayRow,
}

/// Display strings for one table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub description: String,
    pub quantity: String,
    pub rate: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsBlock {
    pub figures: Totals,
    /// Summary rows to print, in order, ending with the total.
    pub lines: Vec<TotalLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalLine {
    pub kind: TotalKind,
    pub label: String,
    pub amount: Decimal,
    pub display: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TotalKind {
    Subtotal,
    ServiceCharge,
    Tax,
    Shipping,
    Total,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub lines: Vec<String>,
}
