//! # Engine Tests
//!
//! Properties every template must satisfy, checked across the whole catalog:
//!
//! - totals add up exactly
//! - an empty record renders without null leaves
//! - rendering is idempotent
//! - unknown template ids fall back to the generic template
//! - no items means zero totals
//! - section toggles are independent

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use vellum::model::{InvoiceRecord, LineItem, SectionToggle};
use vellum::money::round_money;
use vellum::sections::{ResolvedSection, SectionBody};
use vellum::{Engine, EngineDefaults, VellumError};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn render_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn engine() -> Engine {
    Engine::builtin().unwrap()
}

/// Paths of every `null` leaf in a JSON tree.
fn null_paths(value: &Value, path: &str, out: &mut Vec<String>) {
    match value {
        Value::Null => out.push(path.to_string()),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                null_paths(item, &format!("{}[{}]", path, i), out);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                null_paths(item, &format!("{}.{}", path, key), out);
            }
        }
        _ => {}
    }
}

/// Deterministic pseudo-random line items (linear congruential generator).
fn generated_items(seed: u64, count: usize) -> Vec<LineItem> {
    let mut state = seed;
    let mut next = move |modulus: u64| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) % modulus
    };
    (0..count)
        .map(|_| {
            let quantity = Decimal::new(next(2000) as i64, 2);
            let rate = Decimal::new(next(500_000) as i64, 3);
            LineItem::new("Generated", quantity, rate)
        })
        .collect()
}

// ============================================================================
// WORKED EXAMPLES
// ============================================================================

#[test]
fn test_simple_tax_example() {
    let record = InvoiceRecord {
        items: vec![LineItem::new("Widget", d("2"), d("199.99"))],
        tax_rate: Some(d("8.5")),
        shipping: Some(Decimal::ZERO),
        ..Default::default()
    };
    let doc = engine().render_on(&record, "standard", render_date()).unwrap();
    let figures = doc.table.totals.figures;

    assert_eq!(figures.subtotal, d("399.98"));
    assert_eq!(figures.tax, d("33.99"));
    assert_eq!(figures.total, d("433.97"));
}

#[test]
fn test_hospitality_example() {
    let record = InvoiceRecord {
        items: vec![LineItem::new("Dinner service", d("50"), d("45"))],
        tax_rate: Some(d("8.5")),
        service_charge: Some(d("18")),
        ..Default::default()
    };
    let doc = engine().render_on(&record, "hospitality", render_date()).unwrap();
    let json = serde_json::to_value(&doc.table.totals.figures).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "subtotal": "2250.00",
            "serviceCharge": "405.00",
            "tax": "225.68",
            "shipping": "0.00",
            "total": "2880.68",
        })
    );
}

// ============================================================================
// PROPERTIES ACROSS THE CATALOG
// ============================================================================

#[test]
fn test_total_correctness_for_every_template() {
    let engine = engine();
    for template in engine.registry().iter() {
        for seed in 0..25u64 {
            let record = InvoiceRecord {
                items: generated_items(seed, 1 + (seed as usize % 7)),
                tax_rate: Some(Decimal::new((seed * 37 % 2500) as i64, 2)),
                shipping: Some(Decimal::new((seed * 131 % 10_000) as i64, 2)),
                service_charge: Some(Decimal::new((seed * 53 % 3000) as i64, 2)),
                ..Default::default()
            };
            let doc = engine.render_on(&record, template.id, render_date()).unwrap();
            let t = doc.table.totals.figures;

            assert_eq!(
                t.total,
                t.subtotal + t.service_charge + t.tax + t.shipping,
                "{} seed {}",
                template.id,
                seed
            );
            for figure in [t.subtotal, t.service_charge, t.tax, t.shipping, t.total] {
                assert_eq!(figure, round_money(figure), "{} seed {}", template.id, seed);
            }
            let row_sum: Decimal = doc.table.rows.iter().map(|r| r.amount).sum();
            assert_eq!(t.subtotal, row_sum);
        }
    }
}

#[test]
fn test_default_completeness_for_every_template() {
    let engine = engine();
    for template in engine.registry().iter() {
        let doc = engine
            .render_on(&InvoiceRecord::default(), template.id, render_date())
            .unwrap();
        let json = serde_json::to_value(&doc).unwrap();

        let mut nulls = Vec::new();
        null_paths(&json, "$", &mut nulls);
        assert!(nulls.is_empty(), "{} has null leaves: {:?}", template.id, nulls);

        assert!(!doc.header.company_name.is_empty());
        assert!(!doc.parties.to.name.is_empty());
        assert!(!doc.parties.from.address_lines.is_empty());
        assert!(!doc.metadata.invoice_number.is_empty());
        assert!(!doc.metadata.currency.symbol.is_empty());
        for field in &doc.metadata.fields {
            assert!(!field.value.is_empty(), "{}: {} is blank", template.id, field.label);
        }
    }
}

#[test]
fn test_idempotence_for_every_template() {
    let engine = engine();
    let record = InvoiceRecord {
        items: generated_items(7, 4),
        tax_rate: Some(d("6.25")),
        ..Default::default()
    };
    for template in engine.registry().iter() {
        let first = serde_json::to_vec(&engine.render_on(&record, template.id, render_date()).unwrap()).unwrap();
        let second = serde_json::to_vec(&engine.render_on(&record, template.id, render_date()).unwrap()).unwrap();
        assert_eq!(first, second, "{} is not idempotent", template.id);
    }
}

#[test]
fn test_unknown_template_safety() {
    let engine = engine();
    let record = InvoiceRecord {
        items: vec![LineItem::new("Widget", d("1"), d("10"))],
        ..Default::default()
    };
    let fallback = engine
        .render_on(&record, "not-a-real-template", render_date())
        .unwrap();
    let generic = engine.render_on(&record, "standard", render_date()).unwrap();

    assert!(fallback.template.fallback);
    assert_eq!(fallback.template.requested, "not-a-real-template");
    assert_eq!(fallback.style, generic.style);
    assert_eq!(fallback.header, generic.header);
    assert_eq!(fallback.parties, generic.parties);
    assert_eq!(fallback.table, generic.table);
    assert_eq!(fallback.sections, generic.sections);
    assert_eq!(fallback.footer, generic.footer);
}

#[test]
fn test_zero_item_invariant_for_every_template() {
    let engine = engine();
    let record = InvoiceRecord {
        tax_rate: Some(d("10")),
        shipping: Some(d("25")),
        service_charge: Some(d("18")),
        ..Default::default()
    };
    for template in engine.registry().iter() {
        let doc = engine.render_on(&record, template.id, render_date()).unwrap();
        let t = doc.table.totals.figures;
        assert!(t.subtotal.is_zero() && t.tax.is_zero() && t.total.is_zero(), "{}", template.id);
        assert!(t.shipping.is_zero() && t.service_charge.is_zero(), "{}", template.id);
        assert!(!doc.table.placeholder_rows.is_empty());
    }
}

#[test]
fn test_section_toggle_independence_for_every_template() {
    let engine = engine();
    for template in engine.registry().iter() {
        // Turn everything on so hidden-by-default sections take part too.
        let mut all_on = InvoiceRecord::default();
        for kind in template.skeleton {
            all_on.sections.insert(kind.key().to_string(), SectionToggle::shown());
        }
        let base = engine.render_on(&all_on, template.id, render_date()).unwrap().sections;

        for section in &base {
            let mut record = all_on.clone();
            record
                .sections
                .insert(section.kind.key().to_string(), SectionToggle::hidden());
            let sections = engine.render_on(&record, template.id, render_date()).unwrap().sections;

            let expected: Vec<ResolvedSection> =
                base.iter().filter(|s| s.kind != section.kind).cloned().collect();
            assert_eq!(sections, expected, "{} without {}", template.id, section.kind.key());
        }

        for section in &base {
            let empty = match &section.body {
                SectionBody::Lines { lines } => lines.is_empty(),
                SectionBody::Signature { captions } => captions.is_empty(),
                SectionBody::TaxSummary { .. } => false,
            };
            assert!(!empty, "{} renders an empty {}", template.id, section.kind.key());
        }
    }
}

#[test]
fn test_sections_follow_skeleton_order() {
    let engine = engine();
    for template in engine.registry().iter() {
        let doc = engine
            .render_on(&InvoiceRecord::default(), template.id, render_date())
            .unwrap();
        let positions: Vec<usize> = doc
            .sections
            .iter()
            .map(|s| template.skeleton.iter().position(|k| *k == s.kind).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "{}", template.id);
    }
}

// ============================================================================
// ENGINE CONFIGURATION
// ============================================================================

#[test]
fn test_custom_engine_defaults() {
    let defaults: EngineDefaults = serde_json::from_str(
        r#"{"companyName": "ACME Invoicing", "currencySymbol": "€", "currencyCode": "EUR"}"#,
    )
    .unwrap();
    let engine = Engine::with_defaults(defaults).unwrap();
    let record = InvoiceRecord {
        items: vec![LineItem::new("Widget", d("1000"), d("1.5"))],
        ..Default::default()
    };

    let standard = engine.render_on(&record, "standard", render_date()).unwrap();
    assert_eq!(standard.header.company_name, "ACME Invoicing");
    assert_eq!(standard.metadata.currency.code, "EUR");
    assert_eq!(standard.table.totals.lines.last().unwrap().display, "€1,500.00");

    // Template defaults still win over engine defaults.
    let medical = engine.render_on(&record, "medical", render_date()).unwrap();
    assert_eq!(medical.header.company_name, "Your Medical Practice");
}

#[test]
fn test_engine_rejects_blank_required_default() {
    let defaults = EngineDefaults {
        currency_code: " ".into(),
        ..Default::default()
    };
    let err = Engine::with_defaults(defaults).unwrap_err();
    assert!(matches!(
        err,
        VellumError::MissingRequiredField {
            field: "currencyCode",
            ..
        }
    ));
}

#[test]
fn test_record_deserialized_from_form_json() {
    let record: InvoiceRecord = serde_json::from_str(
        r##"{
            "company": {"name": "Bright Smile Dental", "logo": "https://cdn.example/logo.png"},
            "client": {"name": "Sam Rivera"},
            "issueDate": "2024-02-10",
            "items": [
                {"id": "cleaning", "description": "Cleaning", "quantity": 1, "rate": "120"},
                {"description": "X-ray", "quantity": 2, "rate": 45.5, "amount": 91}
            ],
            "taxRate": 0,
            "style": {"cornerRadius": "huge", "tableStyle": "minimal", "colors": {"primary": "#ABC"}},
            "sections": {"notes": {"text": "Next visit in 6 months."}, "bogus": {"visible": true}}
        }"##,
    )
    .unwrap();
    let doc = engine().render_on(&record, "Medical", render_date()).unwrap();

    assert_eq!(doc.template.id, "medical");
    assert!(!doc.template.fallback);
    assert_eq!(doc.metadata.issue_date, "02/10/2024");
    assert_eq!(doc.metadata.due_date, "02/10/2024");
    assert_eq!(doc.table.rows[0].id, "cleaning");
    assert_eq!(doc.table.rows[1].id, "item-2");
    assert_eq!(doc.table.totals.figures.total, d("211.00"));
    assert_eq!(doc.style.radius_px, 8);
    assert_eq!(doc.style.colors.primary, "#abc");
    assert!(doc.sections.iter().any(|s| s.body
        == SectionBody::Lines {
            lines: vec!["Next visit in 6 months.".into()]
        }));
}

#[test]
fn test_mismatched_amount_is_rejected() {
    let record: InvoiceRecord = serde_json::from_str(
        r#"{"items": [{"description": "X-ray", "quantity": 2, "rate": 45.5, "amount": 90}]}"#,
    )
    .unwrap();
    let err = engine().render_on(&record, "standard", render_date()).unwrap_err();
    assert!(matches!(err, VellumError::InvalidLineItem { ref id, .. } if id == "item-1"));
    assert!(err.is_request_error());
}

#[test]
fn test_batch_survives_out_of_range_jobs() {
    let overflow = InvoiceRecord {
        items: vec![LineItem::new("Huge", d("79228162514264337593543950335"), d("2")).with_id("huge")],
        ..Default::default()
    };
    let long_terms = InvoiceRecord {
        issue_date: Some("2024-03-01".into()),
        payment_terms: Some("Net 999999999".into()),
        ..Default::default()
    };
    let half = d("50000000000000000000000000000");
    let big_subtotal = InvoiceRecord {
        items: vec![LineItem::new("A", Decimal::ONE, half), LineItem::new("B", Decimal::ONE, half)],
        ..Default::default()
    };
    let jobs = vec![
        (InvoiceRecord::default(), "medical".to_string()),
        (overflow, "standard".to_string()),
        (InvoiceRecord::default(), "saas".to_string()),
        (long_terms, "standard".to_string()),
        (big_subtotal, "retail".to_string()),
        (InvoiceRecord::default(), "hospitality".to_string()),
    ];

    let results = engine().render_batch(&jobs, render_date());
    assert_eq!(results.len(), 6);
    assert_eq!(results[0].as_ref().unwrap().template.id, "medical");
    assert!(matches!(
        results[1],
        Err(VellumError::InvalidLineItem { ref id, .. }) if id == "huge"
    ));
    assert_eq!(results[2].as_ref().unwrap().template.id, "saas");
    assert_eq!(results[3].as_ref().unwrap().metadata.due_date, "March 31, 2024");
    assert!(matches!(
        results[4],
        Err(VellumError::AmountOutOfRange { figure: "subtotal" })
    ));
    assert_eq!(results[5].as_ref().unwrap().template.id, "hospitality");
    for result in results.iter().filter_map(|r| r.as_ref().err()) {
        assert!(result.is_request_error());
    }
}
