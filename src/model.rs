//! Canonical input model for one invoice.
//!
//! These types mirror what a form or a saved draft produces. Every field is
//! optional and unknown fields are ignored, so partially filled drafts still
//! deserialize; the [`defaults`](crate::defaults) resolver fills the gaps.
//!
//! ```
//! use vellum::model::InvoiceRecord;
//!
//! let record: InvoiceRecord = serde_json::from_str(r#"{
//!     "company": {"name": "Acme Catering"},
//!     "items": [{"description": "Dinner service", "quantity": 50, "rate": 45}],
//!     "taxRate": 8.5
//! }"#).unwrap();
//! assert_eq!(record.items.len(), 1);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One invoice as captured by the form or loaded from a draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceRecord {
    pub company: CompanyInfo,
    pub client: ClientInfo,
    pub invoice_number: Option<String>,
    /// Issue date, preferably `YYYY-MM-DD`.
    pub issue_date: Option<String>,
    /// Due date, preferably `YYYY-MM-DD`.
    pub due_date: Option<String>,
    /// Payment terms, e.g. "Net 30" or "Due on receipt".
    pub payment_terms: Option<String>,
    pub currency_symbol: Option<String>,
    pub currency_code: Option<String>,
    /// Tax rate in percent (8.5 means 8.5%).
    pub tax_rate: Option<Decimal>,
    /// Flat shipping cost.
    pub shipping: Option<Decimal>,
    /// Service charge in percent. Only applied by templates that bill one.
    pub service_charge: Option<Decimal>,
    pub items: Vec<LineItem>,
    pub style: StylePreferences,
    /// Section name (camelCase, e.g. `paymentInformation`) to toggle.
    pub sections: BTreeMap<String, SectionToggle>,
    /// Footer override.
    pub footer: Option<TextInput>,
    /// Template the draft was last rendered with. Only read by
    /// [`suggest`](crate::suggest).
    pub template: Option<String>,
}

/// Issuing business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyInfo {
    pub name: Option<String>,
    /// Multi-line address; lines are separated by line breaks.
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tagline: Option<String>,
    /// Logo reference (URL or data URI).
    pub logo: Option<String>,
}

/// Billed party.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A single billed line.
///
/// `amount` is derived as `round(quantity * rate, 2)`. A supplied amount is
/// only kept verbatim when `amount_override` is set; otherwise it must agree
/// with the derived value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
    pub id: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<Decimal>,
    pub rate: Option<Decimal>,
    pub amount: Option<Decimal>,
    pub amount_override: bool,
    pub details: Option<String>,
    pub sku: Option<String>,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            description: Some(description.into()),
            quantity: Some(quantity),
            rate: Some(rate),
            ..Default::default()
        }
    }

    /// Set an explicit id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Pin the amount to `amount`, bypassing `quantity * rate`.
    pub fn with_override(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self.amount_override = true;
        self
    }
}

/// Style choices made in the form. Enumerated axes are plain strings so that
/// stale or hand-edited drafts with unknown values still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylePreferences {
    /// "none" | "small" | "medium" | "large"
    pub corner_radius: Option<String>,
    /// "left" | "center" | "right"
    pub logo_position: Option<String>,
    /// "striped" | "minimal" | "bordered"
    pub table_style: Option<String>,
    /// "minimal" | "standard" | "detailed" | "modern"
    pub layout: Option<String>,
    pub colors: ColorPreferences,
    pub typography: TypographyPreferences,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorPreferences {
    pub primary: Option<String>,
    pub accent: Option<String>,
    pub text: Option<String>,
    pub background: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyPreferences {
    pub font_family: Option<String>,
    /// Base size in points.
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeightInput>,
}

/// Font weight as sent by the form: either a CSS keyword or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeightInput {
    Numeric(u16),
    Named(String),
}

/// Visibility and copy override for one optional section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionToggle {
    /// `None` keeps the template's default visibility.
    pub visible: Option<bool>,
    pub text: Option<TextInput>,
}

impl SectionToggle {
    pub fn shown() -> Self {
        Self {
            visible: Some(true),
            text: None,
        }
    }

    pub fn hidden() -> Self {
        Self {
            visible: Some(false),
            text: None,
        }
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            visible: Some(true),
            text: Some(TextInput::Text(text.into())),
        }
    }
}

/// Free text supplied either as one string or as a list of lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    Lines(Vec<String>),
    Text(String),
}

impl TextInput {
    /// Normalize to an ordered list of lines.
    ///
    /// A single string is split on line breaks (`\n` or `\r\n`) and nothing
    /// else. Trailing whitespace is trimmed and leading/trailing blank lines
    /// are dropped; an all-blank input yields an empty list.
    pub fn to_lines(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            TextInput::Lines(lines) => lines.iter().flat_map(|l| l.lines()).collect(),
            TextInput::Text(text) => text.lines().collect(),
        };
        let lines: Vec<String> = raw.iter().map(|l| l.trim_end().to_string()).collect();

        let first = lines.iter().position(|l| !l.trim().is_empty());
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        match (first, last) {
            (Some(first), Some(last)) => lines[first..=last].to_vec(),
            _ => Vec::new(),
        }
    }
}
