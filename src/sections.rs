//! # Section Composer
//!
//! Decides which optional blocks appear on a document and what they say.
//!
//! For each kind in the template skeleton, in skeleton order:
//!
//! - visibility is the record's toggle if it has one, else the template
//!   default;
//! - text-bearing kinds take their lines from the toggle's override text,
//!   then the template copy, then the engine-wide copy, and are omitted when
//!   none of those exist;
//! - the tax summary is computed from the totals and has no copy.
//!
//! A section is either omitted or rendered; there is no partial state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::EngineDefaults;
use crate::model::SectionToggle;
use crate::money::{Totals, format_money, format_percent};
use crate::template::TemplateDescriptor;

/// Kinds of optional content block.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    PaymentInformation,
    TermsAndConditions,
    Notes,
    ProjectSummary,
    InsuranceInformation,
    EventDetails,
    SubscriptionDetails,
    ShippingDetails,
    /// Computed tax summary (rate, taxable base, tax amount).
    TaxLine,
    /// Signature lines; copy lines are the captions under each line.
    Signature,
}

impl SectionKind {
    pub const ALL: &'static [SectionKind] = &[
        SectionKind::PaymentInformation,
        SectionKind::TermsAndConditions,
        SectionKind::Notes,
        SectionKind::ProjectSummary,
        SectionKind::InsuranceInformation,
        SectionKind::EventDetails,
        SectionKind::SubscriptionDetails,
        SectionKind::ShippingDetails,
        SectionKind::TaxLine,
        SectionKind::Signature,
    ];

    /// Toggle name used in records (`paymentInformation`, `taxLine`, ...).
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::PaymentInformation => "paymentInformation",
            SectionKind::TermsAndConditions => "termsAndConditions",
            SectionKind::Notes => "notes",
            SectionKind::ProjectSummary => "projectSummary",
            SectionKind::InsuranceInformation => "insuranceInformation",
            SectionKind::EventDetails => "eventDetails",
            SectionKind::SubscriptionDetails => "subscriptionDetails",
            SectionKind::ShippingDetails => "shippingDetails",
            SectionKind::TaxLine => "taxLine",
            SectionKind::Signature => "signature",
        }
    }

    /// Parse a toggle name, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key().eq_ignore_ascii_case(name))
    }

    /// Whether the section's content comes from copy text.
    pub fn is_text_bearing(self) -> bool {
        !matches!(self, SectionKind::TaxLine)
    }

    pub fn default_title(self) -> &'static str {
        match self {
            SectionKind::PaymentInformation => "Payment Information",
            SectionKind::TermsAndConditions => "Terms & Conditions",
            SectionKind::Notes => "Notes",
            SectionKind::ProjectSummary => "Project Summary",
            SectionKind::InsuranceInformation => "Insurance Information",
            SectionKind::EventDetails => "Event Details",
            SectionKind::SubscriptionDetails => "Subscription Details",
            SectionKind::ShippingDetails => "Shipping Details",
            SectionKind::TaxLine => "Tax Summary",
            SectionKind::Signature => "Authorization",
        }
    }
}

/// A rendered optional section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSection {
    pub kind: SectionKind,
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SectionBody {
    /// Ordered lines of text.
    Lines { lines: Vec<String> },
    /// One signature line per caption.
    Signature { captions: Vec<String> },
    /// Display strings for the tax computation.
    #[serde(rename_all = "camelCase")]
    TaxSummary {
        rate: String,
        taxable_base: String,
        amount: String,
    },
}

// ============================================================================
// INTERPOLATION
// ============================================================================

/// Values substituted for `{{name}}` placeholders in copy.
pub type Vars = BTreeMap<&'static str, String>;

/// Replace `{{key}}` placeholders. Unknown placeholders are left as-is.
///
/// The text is scanned once, left to right. Substituted values are never
/// scanned again, so a value containing `{{...}}` is kept literally.
pub fn interpolate(text: &str, vars: &Vars) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let known = after
            .find("}}")
            .and_then(|end| vars.get(&after[..end]).map(|value| (end, value)));
        match known {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

// ============================================================================
// COMPOSITION
// ============================================================================

/// Everything besides the toggles that section content depends on.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    pub descriptor: &'a TemplateDescriptor,
    pub defaults: &'a EngineDefaults,
    pub vars: &'a Vars,
    pub totals: &'a Totals,
    /// Tax rate percent actually applied.
    pub tax_rate: Decimal,
    pub currency_symbol: &'a str,
}

/// Compose the optional sections of a document, in skeleton order.
pub fn compose_sections(
    toggles: &BTreeMap<String, SectionToggle>,
    ctx: &SectionContext<'_>,
) -> Vec<ResolvedSection> {
    let toggles = parse_toggles(toggles, ctx.descriptor);

    ctx.descriptor
        .skeleton
        .iter()
        .filter_map(|&kind| {
            let toggle = toggles.get(&kind).copied();
            let visible = toggle
                .and_then(|t| t.visible)
                .unwrap_or_else(|| ctx.descriptor.visible_by_default(kind));
            if !visible {
                return None;
            }
            compose_one(kind, toggle, ctx)
        })
        .collect()
}

/// Toggles keyed by kind. Names match without regard to case; when two names
/// map to the same kind, the one sorting last (byte order) wins.
fn parse_toggles<'t>(
    toggles: &'t BTreeMap<String, SectionToggle>,
    descriptor: &TemplateDescriptor,
) -> BTreeMap<SectionKind, &'t SectionToggle> {
    let mut parsed = BTreeMap::new();
    for (name, toggle) in toggles {
        match SectionKind::parse(name) {
            Some(kind) if descriptor.skeleton.contains(&kind) => {
                if parsed.insert(kind, toggle).is_some() {
                    tracing::debug!(
                        section = %name,
                        kind = kind.key(),
                        "Section toggle given more than once, using this one"
                    );
                }
            }
            Some(_) => {
                tracing::debug!(
                    section = %name,
                    template = descriptor.id,
                    "Ignoring toggle for section outside the template skeleton"
                );
            }
            None => {
                tracing::debug!(section = %name, "Ignoring unknown section toggle");
            }
        }
    }
    parsed
}

fn compose_one(
    kind: SectionKind,
    toggle: Option<&SectionToggle>,
    ctx: &SectionContext<'_>,
) -> Option<ResolvedSection> {
    let title = ctx.descriptor.title_for(kind).to_string();

    if !kind.is_text_bearing() {
        let base = ctx.totals.subtotal + ctx.totals.service_charge;
        return Some(ResolvedSection {
            kind,
            title,
            body: SectionBody::TaxSummary {
                rate: format_percent(ctx.tax_rate),
                taxable_base: format_money(base, ctx.currency_symbol),
                amount: format_money(ctx.totals.tax, ctx.currency_symbol),
            },
        });
    }

    let lines = section_copy(kind, toggle, ctx)?;
    let lines: Vec<String> = lines.iter().map(|l| interpolate(l, ctx.vars)).collect();

    let body = match kind {
        SectionKind::Signature => SectionBody::Signature { captions: lines },
        _ => SectionBody::Lines { lines },
    };
    Some(ResolvedSection { kind, title, body })
}

/// Raw copy lines: override text, then template copy, then engine copy.
fn section_copy(
    kind: SectionKind,
    toggle: Option<&SectionToggle>,
    ctx: &SectionContext<'_>,
) -> Option<Vec<String>> {
    if let Some(text) = toggle.and_then(|t| t.text.as_ref()) {
        let lines = text.to_lines();
        if !lines.is_empty() {
            return Some(lines);
        }
    }
    if let Some(lines) = ctx.descriptor.copy_for(kind) {
        return Some(lines.iter().map(|l| l.to_string()).collect());
    }
    ctx.defaults.copy_for(kind).map(<[String]>::to_vec)
}
