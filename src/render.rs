//! # Template Dispatcher
//!
//! [`Engine::render`] is the single entry point: it looks up the template,
//! resolves every field, style and total, composes the optional sections and
//! assembles a [`ResolvedDocument`].
//!
//! ```
//! use rust_decimal::Decimal;
//! use vellum::Engine;
//! use vellum::model::{InvoiceRecord, LineItem};
//!
//! let engine = Engine::builtin().unwrap();
//! let record = InvoiceRecord {
//!     items: vec![LineItem::new("Widget", Decimal::from(2), Decimal::new(19999, 2))],
//!     tax_rate: Some(Decimal::new(85, 1)),
//!     ..Default::default()
//! };
//! let doc = engine.render(&record, "standard").unwrap();
//! assert_eq!(doc.table.totals.figures.total, Decimal::new(43397, 2));
//! ```
//!
//! Rendering is pure given `(record, template id, render date)`. The render
//! date only matters when the record has no issue or due date.

use chrono::{Local, NaiveDate};
use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::config::EngineDefaults;
use crate::defaults::{Field, Resolver, check_required};
use crate::document::{
    Columns, Currency, DisplayRow, Footer, Header, ItemRow, ItemTable, Logo, MetaField, Metadata,
    Parties, PartyBlock, ResolvedDocument, TemplateRef, TotalKind, TotalLine, TotalsBlock,
};
use crate::error::VellumError;
use crate::model::{InvoiceRecord, LineItem};
use crate::money::{
    PricedLine, Totals, check_charge, format_money, format_percent, format_quantity, price_items,
    summarize,
};
use crate::sections::{SectionContext, Vars, compose_sections, interpolate};
use crate::style::resolve_style;
use crate::template::{Labels, Registry, TemplateDescriptor};

/// The invoice rendering engine: a validated template registry plus the
/// engine-wide defaults. Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Engine {
    registry: Registry,
    defaults: EngineDefaults,
}

impl Engine {
    /// Engine over the built-in catalog and built-in defaults.
    pub fn builtin() -> Result<Self, VellumError> {
        Self::new(Registry::builtin()?, EngineDefaults::default())
    }

    /// Engine over the built-in catalog with custom engine-wide defaults.
    pub fn with_defaults(defaults: EngineDefaults) -> Result<Self, VellumError> {
        Self::new(Registry::builtin()?, defaults)
    }

    /// Build an engine, checking every template can resolve every required
    /// field without record input.
    pub fn new(registry: Registry, defaults: EngineDefaults) -> Result<Self, VellumError> {
        check_required(&registry, &defaults)?;
        Ok(Self { registry, defaults })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn defaults(&self) -> &EngineDefaults {
        &self.defaults
    }

    /// Resolve one field: explicit > template default > engine default.
    pub fn resolve(&self, field: Field, explicit: Option<&str>, template_id: &str) -> String {
        let descriptor = self.registry.lookup(template_id).descriptor;
        Resolver::new(descriptor, &self.defaults, today()).resolve(field, explicit)
    }

    /// Render a record with today's date as the render date.
    pub fn render(
        &self,
        record: &InvoiceRecord,
        template_id: &str,
    ) -> Result<ResolvedDocument, VellumError> {
        self.render_on(record, template_id, today())
    }

    /// Render many `(record, template id)` jobs in parallel.
    ///
    /// Results are returned in input order; one failing job does not affect
    /// the others.
    pub fn render_batch(
        &self,
        jobs: &[(InvoiceRecord, String)],
        date: NaiveDate,
    ) -> Vec<Result<ResolvedDocument, VellumError>> {
        jobs.par_iter()
            .map(|(record, template_id)| self.render_on(record, template_id, date))
            .collect()
    }

    /// Render a record as of a given render date.
    pub fn render_on(
        &self,
        record: &InvoiceRecord,
        template_id: &str,
        date: NaiveDate,
    ) -> Result<ResolvedDocument, VellumError> {
        let lookup = self.registry.lookup(template_id);
        let template = lookup.descriptor;
        if lookup.fallback {
            tracing::warn!(
                requested = %template_id,
                fallback = template.id,
                "Unknown template, rendering with the generic template"
            );
        }

        let resolver = Resolver::new(template, &self.defaults, date);
        let fields = ResolvedFields::resolve(&resolver, record);

        // Money first: nothing is assembled for an invalid record.
        let lines = price_items(&record.items)?;
        let charges = Charges::for_record(template, record)?;
        let totals = summarize(&lines, charges.tax_rate, charges.shipping, charges.service_charge)?;

        let issue_display = resolver.display_date(&fields.issue_date);
        let due_display = resolver.display_date(&fields.due_date);
        let total_display = format_money(totals.total, &fields.currency_symbol);
        let vars = fields.vars(&issue_display, &due_display, &total_display);

        let sections = compose_sections(
            &record.sections,
            &SectionContext {
                descriptor: template,
                defaults: &self.defaults,
                vars: &vars,
                totals: &totals,
                tax_rate: charges.tax_rate,
                currency_symbol: &fields.currency_symbol,
            },
        );

        let labels = &template.labels;
        let footer_lines = match record.footer.as_ref().map(|f| f.to_lines()) {
            Some(lines) if !lines.is_empty() => lines,
            _ => template.footer.iter().map(|l| l.to_string()).collect(),
        };

        Ok(ResolvedDocument {
            template: TemplateRef {
                requested: template_id.to_string(),
                id: template.id.to_string(),
                name: template.name.to_string(),
                fallback: lookup.fallback,
            },
            style: resolve_style(&record.style, &template.style),
            header: Header {
                title: labels.document_title.to_string(),
                company_name: fields.company_name.clone(),
                tagline: fields.company_tagline.clone(),
                logo: Logo::for_company(record.company.logo.as_deref(), &fields.company_name),
            },
            parties: Parties {
                from: PartyBlock {
                    label: labels.from.to_string(),
                    name: fields.company_name.clone(),
                    address_lines: split_lines(&fields.company_address),
                    email: fields.company_email.clone(),
                    phone: fields.company_phone.clone(),
                },
                to: PartyBlock {
                    label: labels.bill_to.to_string(),
                    name: fields.client_name.clone(),
                    address_lines: split_lines(&fields.client_address),
                    email: fields.client_email.clone(),
                    phone: fields.client_phone.clone(),
                },
            },
            metadata: Metadata {
                fields: vec![
                    meta(labels.invoice_number, &fields.invoice_number),
                    meta(labels.issue_date, &issue_display),
                    meta(labels.due_date, &due_display),
                    meta(labels.payment_terms, &fields.payment_terms),
                ],
                invoice_number: fields.invoice_number.clone(),
                issue_date: issue_display,
                due_date: due_display,
                payment_terms: fields.payment_terms.clone(),
                currency: Currency {
                    symbol: fields.currency_symbol.clone(),
                    code: fields.currency_code.clone(),
                },
            },
            table: ItemTable {
                columns: columns(labels),
                rows: item_rows(&record.items, &lines, &fields),
                placeholder_rows: placeholder_rows(template, &lines, &fields.currency_symbol),
                totals: totals_block(template, &totals, &charges, &fields.currency_symbol),
            },
            sections,
            footer: Footer {
                lines: footer_lines.iter().map(|l| interpolate(l, &vars)).collect(),
            },
        })
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Every text field of the record after default resolution.
struct ResolvedFields {
    company_name: String,
    company_address: String,
    company_email: String,
    company_phone: String,
    company_tagline: String,
    client_name: String,
    client_address: String,
    client_email: String,
    client_phone: String,
    invoice_number: String,
    /// Raw (usually ISO) dates.
    issue_date: String,
    due_date: String,
    payment_terms: String,
    currency_symbol: String,
    currency_code: String,
    item_description: String,
}

impl ResolvedFields {
    fn resolve(resolver: &Resolver<'_>, record: &InvoiceRecord) -> Self {
        let company = &record.company;
        let client = &record.client;
        let r = |field, explicit: &Option<String>| resolver.resolve(field, explicit.as_deref());

        let payment_terms = r(Field::PaymentTerms, &record.payment_terms);
        let issue_date = r(Field::IssueDate, &record.issue_date);
        let due_date = resolver.due_date(record.due_date.as_deref(), &issue_date, &payment_terms);

        Self {
            company_name: r(Field::CompanyName, &company.name),
            company_address: r(Field::CompanyAddress, &company.address),
            company_email: r(Field::CompanyEmail, &company.email),
            company_phone: r(Field::CompanyPhone, &company.phone),
            company_tagline: r(Field::CompanyTagline, &company.tagline),
            client_name: r(Field::ClientName, &client.name),
            client_address: r(Field::ClientAddress, &client.address),
            client_email: r(Field::ClientEmail, &client.email),
            client_phone: r(Field::ClientPhone, &client.phone),
            invoice_number: r(Field::InvoiceNumber, &record.invoice_number),
            issue_date,
            due_date,
            payment_terms,
            currency_symbol: r(Field::CurrencySymbol, &record.currency_symbol),
            currency_code: r(Field::CurrencyCode, &record.currency_code),
            item_description: resolver.resolve(Field::ItemDescription, None),
        }
    }

    /// Placeholder values for copy lines and the footer.
    fn vars(&self, issue_date: &str, due_date: &str, total: &str) -> Vars {
        let mut vars = Vars::new();
        vars.insert("company_name", self.company_name.clone());
        vars.insert("company_email", self.company_email.clone());
        vars.insert("company_phone", self.company_phone.clone());
        vars.insert("client_name", self.client_name.clone());
        vars.insert("invoice_number", self.invoice_number.clone());
        vars.insert("issue_date", issue_date.to_string());
        vars.insert("due_date", due_date.to_string());
        vars.insert("payment_terms", self.payment_terms.clone());
        vars.insert("currency_code", self.currency_code.clone());
        vars.insert("total", total.to_string());
        vars
    }
}

/// Charge inputs after applying the template's charge policy.
struct Charges {
    tax_rate: Decimal,
    shipping: Decimal,
    /// Zero when the template does not bill a service charge.
    service_charge: Decimal,
    bills_service_charge: bool,
    always_show_shipping: bool,
}

impl Charges {
    fn for_record(template: &TemplateDescriptor, record: &InvoiceRecord) -> Result<Self, VellumError> {
        // Validated even when the template ignores it.
        if let Some(pct) = record.service_charge {
            check_charge("serviceCharge", pct)?;
        }
        let policy = &template.charges;
        Ok(Self {
            tax_rate: record.tax_rate.unwrap_or(policy.tax_rate),
            shipping: record.shipping.unwrap_or(Decimal::ZERO),
            service_charge: policy
                .service_charge
                .map(|default| record.service_charge.unwrap_or(default))
                .unwrap_or(Decimal::ZERO),
            bills_service_charge: policy.service_charge.is_some(),
            always_show_shipping: policy.always_show_shipping,
        })
    }
}

fn meta(label: &str, value: &str) -> MetaField {
    MetaField {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

fn columns(labels: &Labels) -> Columns {
    Columns {
        description: labels.description.to_string(),
        quantity: labels.quantity.to_string(),
        rate: labels.rate.to_string(),
        amount: labels.amount.to_string(),
    }
}

fn item_rows(items: &[LineItem], lines: &[PricedLine], fields: &ResolvedFields) -> Vec<ItemRow> {
    let symbol = &fields.currency_symbol;
    items
        .iter()
        .zip(lines)
        .map(|(item, line)| {
            let description = item
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .unwrap_or(fields.item_description.as_str())
                .to_string();

            let mut notes = item.details.as_deref().map(split_lines).unwrap_or_default();
            if let Some(sku) = item.sku.as_deref().map(str::trim)
                && !sku.is_empty()
            {
                notes.push(format!("SKU: {}", sku));
            }

            ItemRow {
                id: line.id.clone(),
                display: DisplayRow {
                    description: description.clone(),
                    quantity: format_quantity(line.quantity),
                    rate: format_money(line.rate, symbol),
                    amount: format_money(line.amount, symbol),
                },
                description,
                notes,
                quantity: line.quantity,
                rate: line.rate,
                amount: line.amount,
                amount_override: line.overridden,
            }
        })
        .collect()
}

fn placeholder_rows(template: &TemplateDescriptor, lines: &[PricedLine], symbol: &str) -> Vec<DisplayRow> {
    if !lines.is_empty() {
        return Vec::new();
    }
    template
        .placeholder_rows
        .iter()
        .map(|p| DisplayRow {
            description: p.description.to_string(),
            quantity: p.quantity.to_string(),
            rate: format!("{}{}", symbol, p.rate),
            amount: format!("{}{}", symbol, p.amount),
        })
        .collect()
}

fn totals_block(
    template: &TemplateDescriptor,
    totals: &Totals,
    charges: &Charges,
    symbol: &str,
) -> TotalsBlock {
    let labels = &template.labels;
    let line = |kind, label: String, amount: Decimal| TotalLine {
        kind,
        label,
        amount,
        display: format_money(amount, symbol),
    };

    let mut lines = vec![line(TotalKind::Subtotal, labels.subtotal.to_string(), totals.subtotal)];
    if charges.bills_service_charge {
        lines.push(line(
            TotalKind::ServiceCharge,
            format!("{} ({})", labels.service_charge, format_percent(charges.service_charge)),
            totals.service_charge,
        ));
    }
    if !charges.tax_rate.is_zero() {
        lines.push(line(
            TotalKind::Tax,
            format!("{} ({})", labels.tax, format_percent(charges.tax_rate)),
            totals.tax,
        ));
    }
    if charges.always_show_shipping || !totals.shipping.is_zero() {
        lines.push(line(TotalKind::Shipping, labels.shipping.to_string(), totals.shipping));
    }
    lines.push(line(TotalKind::Total, labels.total.to_string(), totals.total));

    TotalsBlock {
        figures: *totals,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SectionToggle, TextInput};
    use crate::sections::{SectionBody, SectionKind};
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn engine() -> Engine {
        Engine::builtin().unwrap()
    }

    #[test]
    fn test_empty_record_renders_every_template() {
        let engine = engine();
        for template in engine.registry().iter() {
            let doc = engine
                .render_on(&InvoiceRecord::default(), template.id, day("2024-03-01"))
                .unwrap();
            assert_eq!(doc.template.id, template.id);
            assert!(!doc.template.fallback);
            assert_eq!(doc.table.totals.figures, Totals::zero());
            assert!(doc.table.rows.is_empty());
            assert!(!doc.table.placeholder_rows.is_empty());
            assert!(!doc.footer.lines.is_empty());
        }
    }

    #[test]
    fn test_hospitality_worked_example() {
        let record = InvoiceRecord {
            items: vec![LineItem::new("Dinner service", d("50"), d("45"))],
            tax_rate: Some(d("8.5")),
            ..Default::default()
        };
        let doc = engine().render_on(&record, "hospitality", day("2024-03-01")).unwrap();
        let figures = doc.table.totals.figures;
        assert_eq!(figures.subtotal, d("2250.00"));
        assert_eq!(figures.service_charge, d("405.00"));
        assert_eq!(figures.tax, d("225.68"));
        assert_eq!(figures.total, d("2880.68"));

        let labels: Vec<_> = doc.table.totals.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Subtotal", "Service Charge (18%)", "Tax (8.5%)", "Total"]);
        assert_eq!(doc.table.totals.lines[3].display, "$2,880.68");
        assert_eq!(doc.parties.to.label, "Guest Information");
        assert!(doc.table.placeholder_rows.is_empty());
    }

    #[test]
    fn test_service_charge_ignored_outside_hospitality() {
        let record = InvoiceRecord {
            items: vec![LineItem::new("Dinner service", d("50"), d("45"))],
            service_charge: Some(d("18")),
            ..Default::default()
        };
        let doc = engine().render_on(&record, "standard", day("2024-03-01")).unwrap();
        assert_eq!(doc.table.totals.figures.service_charge, Decimal::ZERO);
        assert_eq!(doc.table.totals.figures.total, d("2250.00"));
    }

    #[test]
    fn test_negative_inputs_are_rejected() {
        let engine = engine();
        let record = InvoiceRecord {
            items: vec![LineItem::new("Refund", d("-1"), d("10"))],
            ..Default::default()
        };
        let err = engine.render_on(&record, "standard", day("2024-03-01")).unwrap_err();
        assert!(matches!(err, VellumError::InvalidLineItem { ref id, .. } if id == "item-1"));

        let record = InvoiceRecord {
            shipping: Some(d("-5")),
            ..Default::default()
        };
        let err = engine.render_on(&record, "retail", day("2024-03-01")).unwrap_err();
        assert!(matches!(err, VellumError::InvalidCharge { field: "shipping", .. }));

        let record = InvoiceRecord {
            service_charge: Some(d("-5")),
            ..Default::default()
        };
        let err = engine.render_on(&record, "standard", day("2024-03-01")).unwrap_err();
        assert!(matches!(err, VellumError::InvalidCharge { field: "serviceCharge", .. }));
    }

    #[test]
    fn test_unknown_template_falls_back() {
        let doc = engine()
            .render_on(&InvoiceRecord::default(), "not-a-real-template", day("2024-03-01"))
            .unwrap();
        assert_eq!(doc.template.requested, "not-a-real-template");
        assert_eq!(doc.template.id, "standard");
        assert!(doc.template.fallback);
    }

    #[test]
    fn test_dates_and_metadata() {
        let record = InvoiceRecord {
            issue_date: Some("2024-01-10".into()),
            payment_terms: Some("Net 15".into()),
            ..Default::default()
        };
        let doc = engine().render_on(&record, "standard", day("2024-03-01")).unwrap();
        assert_eq!(doc.metadata.issue_date, "January 10, 2024");
        assert_eq!(doc.metadata.due_date, "January 25, 2024");
        assert_eq!(
            doc.metadata.fields,
            vec![
                meta("Invoice #", "INV-0001"),
                meta("Issue Date", "January 10, 2024"),
                meta("Due Date", "January 25, 2024"),
                meta("Terms", "Net 15"),
            ]
        );
    }

    #[test]
    fn test_parties_and_logo() {
        let mut record = InvoiceRecord::default();
        record.company.name = Some("Acme Catering".into());
        record.client.address = Some("1 Main St\n\nSpringfield".into());
        let doc = engine().render_on(&record, "medical", day("2024-03-01")).unwrap();

        assert_eq!(doc.header.title, "MEDICAL INVOICE");
        assert_eq!(doc.header.logo, Logo::Monogram { initials: "AC".into() });
        assert_eq!(doc.parties.from.label, "Provider");
        assert_eq!(doc.parties.to.name, "Patient Name");
        assert_eq!(doc.parties.to.address_lines, vec!["1 Main St", "Springfield"]);
    }

    #[test]
    fn test_item_rows() {
        let mut item = LineItem::new("", d("2.50"), d("1000"));
        item.details = Some("Phase one\nPhase two".into());
        item.sku = Some("SKU-9".into());
        let record = InvoiceRecord {
            items: vec![item, LineItem::new("Flat fee", d("1"), d("10")).with_override(d("7.5"))],
            ..Default::default()
        };
        let doc = engine().render_on(&record, "freelancer", day("2024-03-01")).unwrap();
        let rows = &doc.table.rows;

        assert_eq!(rows[0].description, "Development work");
        assert_eq!(rows[0].notes, vec!["Phase one", "Phase two", "SKU: SKU-9"]);
        assert_eq!(
            rows[0].display,
            DisplayRow {
                description: "Development work".into(),
                quantity: "2.5".into(),
                rate: "$1,000.00".into(),
                amount: "$2,500.00".into(),
            }
        );
        assert_eq!(rows[1].id, "item-2");
        assert!(rows[1].amount_override);
        assert_eq!(rows[1].amount, d("7.5"));
        assert_eq!(doc.table.totals.figures.total, d("2507.50"));
        assert_eq!(doc.table.columns.quantity, "Hours");
    }

    #[test]
    fn test_copy_interpolation_and_footer_override() {
        let mut record = InvoiceRecord::default();
        record.company.phone = Some("(800) 555-0100".into());
        record
            .sections
            .insert("notes".into(), SectionToggle::with_text("Total due: {{total}}"));
        record.footer = Some(TextInput::Lines(vec!["Bye, {{client_name}}".into()]));
        let doc = engine().render_on(&record, "medical", day("2024-03-01")).unwrap();

        let terms = doc
            .sections
            .iter()
            .find(|s| s.kind == SectionKind::TermsAndConditions)
            .unwrap();
        assert_eq!(
            terms.body,
            SectionBody::Lines {
                lines: vec!["Questions about this bill? Contact our billing office at (800) 555-0100.".into()]
            }
        );
        let notes = doc.sections.iter().find(|s| s.kind == SectionKind::Notes).unwrap();
        assert_eq!(
            notes.body,
            SectionBody::Lines {
                lines: vec!["Total due: $0.00".into()]
            }
        );
        assert_eq!(doc.footer.lines, vec!["Bye, Patient Name"]);
    }

    #[test]
    fn test_record_values_are_not_template_copy() {
        let mut record = InvoiceRecord::default();
        record.company.name = Some("{{invoice_number}}".into());
        record.invoice_number = Some("INV-9".into());
        let doc = engine().render_on(&record, "modern", day("2024-03-01")).unwrap();
        assert_eq!(doc.footer.lines, vec!["Thanks for choosing {{invoice_number}}."]);
    }

    #[test]
    fn test_huge_payment_terms_use_default_days() {
        let record = InvoiceRecord {
            issue_date: Some("2024-03-01".into()),
            payment_terms: Some("Net 999999999".into()),
            ..Default::default()
        };
        let doc = engine().render_on(&record, "standard", day("2024-03-01")).unwrap();
        assert_eq!(doc.metadata.payment_terms, "Net 999999999");
        assert_eq!(doc.metadata.due_date, "March 31, 2024");
    }

    #[test]
    fn test_render_is_idempotent() {
        let engine = engine();
        let record = InvoiceRecord {
            items: vec![LineItem::new("Widget", d("3"), d("9.99"))],
            tax_rate: Some(d("7.25")),
            ..Default::default()
        };
        let first = engine.render_on(&record, "retail", day("2024-03-01")).unwrap();
        let second = engine.render_on(&record, "retail", day("2024-03-01")).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_render_batch_keeps_order() {
        let engine = engine();
        let bad = InvoiceRecord {
            items: vec![LineItem::new("Bad", d("1"), d("-1"))],
            ..Default::default()
        };
        let jobs = vec![
            (InvoiceRecord::default(), "medical".to_string()),
            (bad, "standard".to_string()),
            (InvoiceRecord::default(), "saas".to_string()),
        ];
        let results = engine.render_batch(&jobs, day("2024-03-01"));
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().template.id, "medical");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().template.id, "saas");
    }

    #[test]
    fn test_resolve_uses_template_defaults() {
        let engine = engine();
        assert_eq!(engine.resolve(Field::ClientName, None, "saas"), "Client Name");
        assert_eq!(engine.resolve(Field::ClientName, None, "education"), "Student Name");
        assert_eq!(engine.resolve(Field::ClientName, Some("Ada"), "education"), "Ada");
        assert_eq!(engine.resolve(Field::ClientName, None, "unknown"), "Client Name");
    }
}
