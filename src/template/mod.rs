//! # Template Registry
//!
//! Each visual/industry variant is one [`TemplateDescriptor`] constant in
//! [`catalog`]. A descriptor is pure data: style defaults, label vocabulary,
//! field defaults, default copy and the skeleton of optional sections to
//! attempt. The rendering pipeline is shared; nothing in it branches on a
//! template id.
//!
//! ## Adding a New Template
//!
//! 1. Add a `pub const MY_TEMPLATE: TemplateDescriptor` to `catalog.rs`
//! 2. Append it to [`catalog::TEMPLATES`]
//!
//! The registry validates every descriptor when an engine is built, so a
//! malformed entry fails at startup rather than on a render request.

pub mod catalog;

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;

use crate::defaults::Field;
use crate::error::VellumError;
use crate::sections::SectionKind;
use crate::style::{CornerRadius, Layout, LogoPosition, TableStyle};

/// Id of the generic template used for unknown ids.
pub const GENERIC_TEMPLATE: &str = "standard";

/// Registry entry describing one visual/industry variant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    /// Lookup key (lowercase, kebab-case).
    pub id: &'static str,
    pub name: &'static str,
    pub industry: &'static str,
    pub style: StyleDefaults,
    pub labels: Labels,
    /// Template-specific field defaults, consulted before engine defaults.
    pub fields: &'static [(Field, &'static str)],
    pub charges: ChargePolicy,
    /// Optional sections to attempt, in display order.
    pub skeleton: &'static [SectionKind],
    /// Skeleton sections that start hidden unless the record enables them.
    pub hidden: &'static [SectionKind],
    /// Default copy per section, one entry per line.
    pub copy: &'static [(SectionKind, &'static [&'static str])],
    /// Section title overrides.
    pub titles: &'static [(SectionKind, &'static str)],
    pub footer: &'static [&'static str],
    /// `chrono` format used to display ISO dates.
    pub date_format: &'static str,
    /// Presentation-only rows shown while the invoice has no items.
    pub placeholder_rows: &'static [PlaceholderItem],
}

impl TemplateDescriptor {
    /// Template default for a field, if any.
    pub fn field_default(&self, field: Field) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| *value)
    }

    /// Default copy lines for a section, if any.
    pub fn copy_for(&self, kind: SectionKind) -> Option<&'static [&'static str]> {
        self.copy.iter().find(|(k, _)| *k == kind).map(|(_, lines)| *lines)
    }

    pub fn title_for(&self, kind: SectionKind) -> &'static str {
        self.titles
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, title)| *title)
            .unwrap_or_else(|| kind.default_title())
    }

    /// Visibility of a skeleton section when the record says nothing.
    pub fn visible_by_default(&self, kind: SectionKind) -> bool {
        self.skeleton.contains(&kind) && !self.hidden.contains(&kind)
    }

    /// Structural checks run once at registry load.
    fn validate(&self) -> Result<(), VellumError> {
        let fail = |msg: String| -> Result<(), VellumError> {
            Err(VellumError::Registry(format!("template '{}': {}", self.id, msg)))
        };

        if self.id.trim().is_empty() || self.id != self.id.to_lowercase() || self.id.contains(' ') {
            return fail("id must be a non-empty lowercase key without spaces".into());
        }
        if self.name.trim().is_empty() {
            return fail("name must not be empty".into());
        }
        if self.skeleton.is_empty() {
            return fail("skeleton must list at least one section".into());
        }
        let mut seen = HashSet::new();
        for kind in self.skeleton {
            if !seen.insert(*kind) {
                return fail(format!("section '{}' appears twice in the skeleton", kind.key()));
            }
        }
        for kind in self.hidden {
            if !self.skeleton.contains(kind) {
                return fail(format!("hidden section '{}' is not in the skeleton", kind.key()));
            }
        }
        for (kind, lines) in self.copy {
            if lines.iter().all(|l| l.trim().is_empty()) {
                return fail(format!("default copy for '{}' is blank", kind.key()));
            }
            if !kind.is_text_bearing() {
                return fail(format!("section '{}' does not take copy", kind.key()));
            }
        }
        for (field, value) in self.fields {
            if value.trim().is_empty() {
                return fail(format!("default for '{}' is blank", field.key()));
            }
        }
        if self.charges.tax_rate.is_sign_negative()
            || self
                .charges
                .service_charge
                .is_some_and(|pct| pct.is_sign_negative())
        {
            return fail("charge defaults must not be negative".into());
        }
        if self.date_format.trim().is_empty() {
            return fail("date format must not be empty".into());
        }
        Ok(())
    }
}

/// Style values a template uses when the record does not choose one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDefaults {
    pub corner_radius: CornerRadius,
    pub logo_position: LogoPosition,
    pub table_style: TableStyle,
    pub layout: Layout,
    pub primary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub background: &'static str,
    pub font_family: &'static str,
    pub font_size: f32,
    pub font_weight: u16,
}

/// Label vocabulary ("Bill To" vs "Patient Information" vs ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Labels {
    pub document_title: &'static str,
    pub from: &'static str,
    pub bill_to: &'static str,
    pub invoice_number: &'static str,
    pub issue_date: &'static str,
    pub due_date: &'static str,
    pub payment_terms: &'static str,
    pub description: &'static str,
    pub quantity: &'static str,
    pub rate: &'static str,
    pub amount: &'static str,
    pub subtotal: &'static str,
    pub service_charge: &'static str,
    pub tax: &'static str,
    pub shipping: &'static str,
    pub total: &'static str,
}

impl Labels {
    pub const STANDARD: Self = Self {
        document_title: "INVOICE",
        from: "From",
        bill_to: "Bill To",
        invoice_number: "Invoice #",
        issue_date: "Issue Date",
        due_date: "Due Date",
        payment_terms: "Terms",
        description: "Description",
        quantity: "Qty",
        rate: "Rate",
        amount: "Amount",
        subtotal: "Subtotal",
        service_charge: "Service Charge",
        tax: "Tax",
        shipping: "Shipping",
        total: "Total",
    };
}

/// Which charges a template bills and their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargePolicy {
    /// Default service charge percent. `None` means the template never bills
    /// one, whatever the record says.
    pub service_charge: Option<Decimal>,
    /// Default tax rate percent when the record has none.
    pub tax_rate: Decimal,
    /// Show the shipping row even when shipping is zero.
    pub always_show_shipping: bool,
}

impl ChargePolicy {
    pub const STANDARD: Self = Self {
        service_charge: None,
        tax_rate: Decimal::ZERO,
        always_show_shipping: false,
    };
}

/// A presentation-only sample row for the empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderItem {
    pub description: &'static str,
    pub quantity: &'static str,
    /// Display text without currency symbol, e.g. "150.00".
    pub rate: &'static str,
    pub amount: &'static str,
}

/// Result of looking up a template id.
#[derive(Debug, Clone, Copy)]
pub struct Lookup {
    pub descriptor: &'static TemplateDescriptor,
    /// The requested id was unknown and the generic template was used.
    pub fallback: bool,
}

/// Read-only set of template descriptors, validated at construction.
#[derive(Debug, Clone)]
pub struct Registry {
    templates: Vec<&'static TemplateDescriptor>,
    generic: &'static TemplateDescriptor,
}

impl Registry {
    /// The built-in catalog.
    pub fn builtin() -> Result<Self, VellumError> {
        Self::new(catalog::TEMPLATES.to_vec())
    }

    /// Build a registry from descriptors, validating each one.
    ///
    /// Ids must be unique and the generic template must be present.
    pub fn new(templates: Vec<&'static TemplateDescriptor>) -> Result<Self, VellumError> {
        let mut ids = HashSet::new();
        for descriptor in &templates {
            descriptor.validate()?;
            if !ids.insert(descriptor.id) {
                return Err(VellumError::Registry(format!(
                    "duplicate template id '{}'",
                    descriptor.id
                )));
            }
        }
        let generic = templates
            .iter()
            .copied()
            .find(|d| d.id == GENERIC_TEMPLATE)
            .ok_or_else(|| {
                VellumError::Registry(format!(
                    "generic template '{}' is missing",
                    GENERIC_TEMPLATE
                ))
            })?;
        Ok(Self { templates, generic })
    }

    /// Get a template by id.
    ///
    /// Matching ignores case and surrounding whitespace, and treats `_` and
    /// spaces like `-` (`Real Estate` finds `real-estate`).
    pub fn get(&self, id: &str) -> Option<&'static TemplateDescriptor> {
        let key = normalize_id(id);
        self.templates.iter().copied().find(|d| d.id == key)
    }

    /// Get a template by id, falling back to the generic template.
    pub fn lookup(&self, id: &str) -> Lookup {
        match self.get(id) {
            Some(descriptor) => Lookup {
                descriptor,
                fallback: false,
            },
            None => Lookup {
                descriptor: self.generic,
                fallback: true,
            },
        }
    }

    pub fn generic(&self) -> &'static TemplateDescriptor {
        self.generic
    }

    /// All templates, in display order.
    pub fn iter(&self) -> impl Iterator<Item = &'static TemplateDescriptor> + '_ {
        self.templates.iter().copied()
    }

    /// All template ids, in display order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.templates.iter().map(|d| d.id).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn normalize_id(id: &str) -> String {
    id.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}
