//! # Engine Configuration
//!
//! [`EngineDefaults`] is the single engine-wide fallback table: the value a
//! field gets when neither the record nor the template provides one.
//! Templates override it per field; records override both.
//!
//! The table can be replaced from a JSON file (`--defaults` on the CLI).
//! Missing keys keep their built-in values:
//!
//! ```json
//! {
//!   "companyName": "ACME Invoicing",
//!   "currencySymbol": "€",
//!   "currencyCode": "EUR",
//!   "copy": { "notes": ["Prices include all applicable fees."] }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::defaults::Field;
use crate::error::VellumError;
use crate::sections::SectionKind;

/// Engine-wide default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineDefaults {
    pub company_name: String,
    pub company_address: String,
    pub company_email: String,
    pub company_phone: String,
    pub company_tagline: String,
    pub client_name: String,
    pub client_address: String,
    pub client_email: String,
    pub client_phone: String,
    pub invoice_number: String,
    pub payment_terms: String,
    pub currency_symbol: String,
    pub currency_code: String,
    pub item_description: String,
    /// Days until due when the payment terms do not say ("Net N").
    pub due_in_days: u32,
    /// Section copy used when a template has none of its own.
    pub copy: BTreeMap<SectionKind, Vec<String>>,
}

impl Default for EngineDefaults {
    fn default() -> Self {
        let mut copy = BTreeMap::new();
        copy.insert(
            SectionKind::PaymentInformation,
            vec![
                "Payment is due within {{payment_terms}} of the invoice date.".to_string(),
                "Please include invoice {{invoice_number}} with your payment.".to_string(),
            ],
        );
        copy.insert(
            SectionKind::TermsAndConditions,
            vec![
                "Payment is due by {{due_date}}.".to_string(),
                "Late payments may be subject to a fee of 1.5% per month.".to_string(),
            ],
        );
        copy.insert(
            SectionKind::Signature,
            vec!["Authorized Signature".to_string(), "Date".to_string()],
        );

        Self {
            company_name: "Your Company Name".into(),
            company_address: "123 Business Street\nCity, State 12345".into(),
            company_email: "billing@yourcompany.com".into(),
            company_phone: "(555) 123-4567".into(),
            company_tagline: "Quality work, delivered on time".into(),
            client_name: "Client Name".into(),
            client_address: "456 Client Avenue\nCity, State 67890".into(),
            client_email: "client@example.com".into(),
            client_phone: "(555) 987-6543".into(),
            invoice_number: "INV-0001".into(),
            payment_terms: "Net 30".into(),
            currency_symbol: "$".into(),
            currency_code: "USD".into(),
            item_description: "Item description".into(),
            due_in_days: 30,
            copy,
        }
    }
}

impl EngineDefaults {
    /// Load from a JSON file. Keys that are absent keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, VellumError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// The engine default for a text field.
    ///
    /// Date fields have no static default; they are derived from the render
    /// date by the resolver, so this returns `None` for them.
    pub fn value(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::CompanyName => &self.company_name,
            Field::CompanyAddress => &self.company_address,
            Field::CompanyEmail => &self.company_email,
            Field::CompanyPhone => &self.company_phone,
            Field::CompanyTagline => &self.company_tagline,
            Field::ClientName => &self.client_name,
            Field::ClientAddress => &self.client_address,
            Field::ClientEmail => &self.client_email,
            Field::ClientPhone => &self.client_phone,
            Field::InvoiceNumber => &self.invoice_number,
            Field::PaymentTerms => &self.payment_terms,
            Field::CurrencySymbol => &self.currency_symbol,
            Field::CurrencyCode => &self.currency_code,
            Field::ItemDescription => &self.item_description,
            Field::IssueDate | Field::DueDate => return None,
        };
        Some(value.as_str())
    }

    /// Engine-wide copy for a section, if any.
    pub fn copy_for(&self, kind: SectionKind) -> Option<&[String]> {
        self.copy
            .get(&kind)
            .map(Vec::as_slice)
            .filter(|lines| lines.iter().any(|l| !l.trim().is_empty()))
    }
}
