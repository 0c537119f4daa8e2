//! # Default Resolver
//!
//! Every field resolves with the same precedence:
//!
//! 1. the explicit value from the record, if it is not empty;
//! 2. the template's default for that field;
//! 3. the engine-wide default from [`EngineDefaults`].
//!
//! "Empty" means absent or blank after trimming whitespace. Numbers are never
//! empty: a quantity or rate of `0` is a real value.
//!
//! Dates have no static default. The issue date falls back to the render
//! date, and the due date to the issue date plus the days implied by the
//! payment terms.

use chrono::{DateTime, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::EngineDefaults;
use crate::error::VellumError;
use crate::template::{Registry, TemplateDescriptor};

/// A resolvable text field of the invoice record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CompanyName,
    CompanyAddress,
    CompanyEmail,
    CompanyPhone,
    CompanyTagline,
    ClientName,
    ClientAddress,
    ClientEmail,
    ClientPhone,
    InvoiceNumber,
    IssueDate,
    DueDate,
    PaymentTerms,
    CurrencySymbol,
    CurrencyCode,
    /// Description used for line items that have none.
    ItemDescription,
}

impl Field {
    pub const ALL: &'static [Field] = &[
        Field::CompanyName,
        Field::CompanyAddress,
        Field::CompanyEmail,
        Field::CompanyPhone,
        Field::CompanyTagline,
        Field::ClientName,
        Field::ClientAddress,
        Field::ClientEmail,
        Field::ClientPhone,
        Field::InvoiceNumber,
        Field::IssueDate,
        Field::DueDate,
        Field::PaymentTerms,
        Field::CurrencySymbol,
        Field::CurrencyCode,
        Field::ItemDescription,
    ];

    /// camelCase name, as used in the record JSON.
    pub fn key(self) -> &'static str {
        match self {
            Field::CompanyName => "companyName",
            Field::CompanyAddress => "companyAddress",
            Field::CompanyEmail => "companyEmail",
            Field::CompanyPhone => "companyPhone",
            Field::CompanyTagline => "companyTagline",
            Field::ClientName => "clientName",
            Field::ClientAddress => "clientAddress",
            Field::ClientEmail => "clientEmail",
            Field::ClientPhone => "clientPhone",
            Field::InvoiceNumber => "invoiceNumber",
            Field::IssueDate => "issueDate",
            Field::DueDate => "dueDate",
            Field::PaymentTerms => "paymentTerms",
            Field::CurrencySymbol => "currencySymbol",
            Field::CurrencyCode => "currencyCode",
            Field::ItemDescription => "itemDescription",
        }
    }

    /// Whether the default comes from the render date rather than a table.
    pub fn is_date(self) -> bool {
        matches!(self, Field::IssueDate | Field::DueDate)
    }
}

/// The explicit value if it is non-empty after trimming.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Resolves field values for one template.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    template: &'a TemplateDescriptor,
    defaults: &'a EngineDefaults,
    today: NaiveDate,
}

impl<'a> Resolver<'a> {
    pub fn new(template: &'a TemplateDescriptor, defaults: &'a EngineDefaults, today: NaiveDate) -> Self {
        Self {
            template,
            defaults,
            today,
        }
    }

    /// Resolve a field: explicit > template > engine default.
    ///
    /// For [`Field::IssueDate`] the fallback is the render date and for
    /// [`Field::DueDate`] it is the render date plus the default payment
    /// terms, both as `YYYY-MM-DD`.
    pub fn resolve(&self, field: Field, explicit: Option<&str>) -> String {
        if let Some(value) = non_blank(explicit) {
            return value.to_string();
        }
        if let Some(value) = self.fallback(field) {
            return value.to_string();
        }
        match field {
            Field::IssueDate => iso(self.today),
            Field::DueDate => {
                let terms = self.resolve(Field::PaymentTerms, None);
                iso(self.due_after(self.today, &terms))
            }
            // Engine::new checks every non-date field has a fallback.
            _ => String::new(),
        }
    }

    /// Template or engine default, ignoring the record.
    pub fn fallback(&self, field: Field) -> Option<&'a str> {
        self.template
            .field_default(field)
            .or_else(|| non_blank(self.defaults.value(field)))
    }

    /// Due date for an issue date under the given payment terms.
    ///
    /// Terms whose day count runs past the calendar are treated like
    /// unrecognized terms and use the engine's `due_in_days`.
    pub fn due_after(&self, issue: NaiveDate, terms: &str) -> NaiveDate {
        let offset = |days: u32| issue.checked_add_days(Days::new(u64::from(days)));
        terms_days(terms)
            .and_then(offset)
            .or_else(|| offset(self.defaults.due_in_days))
            .unwrap_or(issue)
    }

    /// Due date: explicit value, else issue date plus the payment terms.
    ///
    /// An issue date that is not ISO cannot be offset, so the render date is
    /// used as the base instead.
    pub fn due_date(&self, explicit: Option<&str>, issue: &str, terms: &str) -> String {
        if let Some(value) = non_blank(explicit) {
            return value.to_string();
        }
        let base = parse_date(issue).unwrap_or(self.today);
        iso(self.due_after(base, terms))
    }

    /// Display form of a date using the template's date format.
    pub fn display_date(&self, raw: &str) -> String {
        match parse_date(raw) {
            Some(date) => date.format(self.template.date_format).to_string(),
            None => raw.trim().to_string(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// `YYYY-MM-DD`
pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Check that every non-date field resolves for every template without
/// record input.
pub fn check_required(registry: &Registry, defaults: &EngineDefaults) -> Result<(), VellumError> {
    for template in registry.iter() {
        let resolver = Resolver::new(template, defaults, NaiveDate::MIN);
        for field in Field::ALL.iter().filter(|f| !f.is_date()) {
            if resolver.fallback(*field).is_none() {
                return Err(VellumError::MissingRequiredField {
                    template: template.id.to_string(),
                    field: field.key(),
                });
            }
        }
    }
    Ok(())
}

/// Days implied by payment terms: `Net 30` → 30, `Due on receipt` → 0.
pub fn terms_days(terms: &str) -> Option<u32> {
    let terms = terms.trim().to_lowercase();
    match terms.as_str() {
        "due on receipt" | "upon receipt" | "on receipt" | "immediate" => return Some(0),
        _ => {}
    }
    let rest = terms.strip_prefix("net")?.trim_start_matches([' ', '-']);
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::catalog;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_precedence() {
        let defaults = EngineDefaults::default();
        let medical = Resolver::new(&catalog::MEDICAL, &defaults, day("2024-03-01"));
        let standard = Resolver::new(&catalog::STANDARD, &defaults, day("2024-03-01"));

        assert_eq!(medical.resolve(Field::CompanyName, Some("Dr. Vega")), "Dr. Vega");
        assert_eq!(medical.resolve(Field::CompanyName, None), "Your Medical Practice");
        assert_eq!(standard.resolve(Field::CompanyName, None), "Your Company Name");
    }

    #[test]
    fn test_blank_is_empty() {
        let defaults = EngineDefaults::default();
        let r = Resolver::new(&catalog::STANDARD, &defaults, day("2024-03-01"));
        assert_eq!(r.resolve(Field::ClientName, Some("   ")), "Client Name");
        assert_eq!(r.resolve(Field::ClientName, Some("")), "Client Name");
        assert_eq!(r.resolve(Field::ClientName, Some("  Ada ")), "Ada");
        assert_eq!(r.resolve(Field::InvoiceNumber, Some("0")), "0");
    }

    #[test]
    fn test_date_defaults() {
        let defaults = EngineDefaults::default();
        let r = Resolver::new(&catalog::STANDARD, &defaults, day("2024-03-01"));
        assert_eq!(r.resolve(Field::IssueDate, None), "2024-03-01");
        assert_eq!(r.resolve(Field::DueDate, None), "2024-03-31");

        let saas = Resolver::new(&catalog::SAAS, &defaults, day("2024-03-01"));
        assert_eq!(saas.resolve(Field::DueDate, None), "2024-03-01");
    }

    #[test]
    fn test_terms_days() {
        assert_eq!(terms_days("Net 30"), Some(30));
        assert_eq!(terms_days("net-15"), Some(15));
        assert_eq!(terms_days("NET45 days"), Some(45));
        assert_eq!(terms_days("Due on receipt"), Some(0));
        assert_eq!(terms_days("2/10 net 30"), None);
        assert_eq!(terms_days("whenever"), None);
    }

    #[test]
    fn test_due_after_uses_engine_days_for_unknown_terms() {
        let defaults = EngineDefaults {
            due_in_days: 10,
            ..Default::default()
        };
        let r = Resolver::new(&catalog::STANDARD, &defaults, day("2024-01-01"));
        assert_eq!(r.due_after(day("2024-01-01"), "custom"), day("2024-01-11"));
        assert_eq!(r.due_after(day("2024-01-01"), "Net 45"), day("2024-02-15"));
    }

    #[test]
    fn test_due_after_huge_terms() {
        let defaults = EngineDefaults::default();
        let r = Resolver::new(&catalog::STANDARD, &defaults, day("2024-03-01"));
        assert_eq!(terms_days("Net 999999999"), Some(999_999_999));
        assert_eq!(r.due_after(day("2024-03-01"), "Net 999999999"), day("2024-03-31"));
        assert_eq!(r.due_date(None, "2024-03-01", "Net 4294967295"), "2024-03-31");
        assert_eq!(r.due_after(NaiveDate::MAX, "Net 30"), NaiveDate::MAX);
    }

    #[test]
    fn test_due_date_follows_issue_date() {
        let defaults = EngineDefaults::default();
        let r = Resolver::new(&catalog::STANDARD, &defaults, day("2024-03-01"));
        assert_eq!(r.due_date(None, "2024-01-10", "Net 15"), "2024-01-25");
        assert_eq!(r.due_date(Some("2024-02-02"), "2024-01-10", "Net 15"), "2024-02-02");
        assert_eq!(r.due_date(Some(" "), "2024-01-10", "Due on receipt"), "2024-01-10");
        assert_eq!(r.due_date(None, "sometime", "Net 15"), "2024-03-16");
    }

    #[test]
    fn test_check_required() {
        let registry = Registry::builtin().unwrap();
        assert!(check_required(&registry, &EngineDefaults::default()).is_ok());

        let defaults = EngineDefaults {
            client_email: "   ".into(),
            ..Default::default()
        };
        let err = check_required(&registry, &defaults).unwrap_err();
        assert!(matches!(
            err,
            VellumError::MissingRequiredField { ref template, field: "clientEmail" } if template == "standard"
        ));
    }

    #[test]
    fn test_display_date() {
        let defaults = EngineDefaults::default();
        let today = day("2024-03-01");
        let standard = Resolver::new(&catalog::STANDARD, &defaults, today);
        let medical = Resolver::new(&catalog::MEDICAL, &defaults, today);
        assert_eq!(standard.display_date("2024-01-05"), "January 5, 2024");
        assert_eq!(medical.display_date("2024-01-05"), "01/05/2024");
        assert_eq!(standard.display_date("2024-01-05T10:00:00Z"), "January 5, 2024");
        assert_eq!(standard.display_date(" next Tuesday "), "next Tuesday");
    }

    #[test]
    fn test_every_field_resolves_for_every_template() {
        let defaults = EngineDefaults::default();
        for template in catalog::TEMPLATES {
            let r = Resolver::new(template, &defaults, day("2024-03-01"));
            for field in Field::ALL {
                assert!(
                    !r.resolve(*field, None).trim().is_empty(),
                    "{} resolves {} to blank",
                    template.id,
                    field.key()
                );
            }
        }
    }
}
