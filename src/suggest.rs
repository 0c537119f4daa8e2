//! # History Suggestions
//!
//! Form prefills derived from previously saved records. The caller supplies
//! the history (oldest first); nothing here reads or writes storage.
//!
//! Both suggestions are deterministic for a given history:
//!
//! - **template**: the most used known template. Ties go to the template
//!   that comes first in the registry.
//! - **tax rate**: the most used tax rate. Ties go to the rate used most
//!   recently.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::model::InvoiceRecord;
use crate::template::Registry;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Decimal>,
    /// Number of records considered.
    pub records: usize,
}

pub fn suggest(records: &[InvoiceRecord], registry: &Registry) -> Suggestions {
    Suggestions {
        template: most_used_template(records, registry).map(str::to_string),
        tax_rate: suggested_tax_rate(records),
        records: records.len(),
    }
}

/// Most used template id. Unknown ids are ignored.
pub fn most_used_template(records: &[InvoiceRecord], registry: &Registry) -> Option<&'static str> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for id in records.iter().filter_map(|r| r.template.as_deref()) {
        if let Some(descriptor) = registry.get(id) {
            *counts.entry(descriptor.id).or_default() += 1;
        }
    }

    let mut best: Option<(&'static str, usize)> = None;
    for id in registry.ids() {
        let count = counts.get(id).copied().unwrap_or(0);
        if count > 0 && best.is_none_or(|(_, n)| count > n) {
            best = Some((id, count));
        }
    }
    best.map(|(id, _)| id)
}

/// Most used tax rate. Negative rates are ignored.
pub fn suggested_tax_rate(records: &[InvoiceRecord]) -> Option<Decimal> {
    // rate -> (count, index of last use)
    let mut usage: HashMap<Decimal, (usize, usize)> = HashMap::new();
    for (index, rate) in records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.tax_rate.map(|rate| (i, rate)))
    {
        if rate.is_sign_negative() && !rate.is_zero() {
            continue;
        }
        let entry = usage.entry(rate.normalize()).or_insert((0, index));
        entry.0 += 1;
        entry.1 = index;
    }

    usage
        .into_iter()
        .max_by_key(|(_, (count, last))| (*count, *last))
        .map(|(rate, _)| rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn record(template: Option<&str>, tax: Option<&str>) -> InvoiceRecord {
        InvoiceRecord {
            template: template.map(str::to_string),
            tax_rate: tax.map(|t| Decimal::from_str(t).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_history() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(
            suggest(&[], &registry),
            Suggestions {
                template: None,
                tax_rate: None,
                records: 0
            }
        );
    }

    #[test]
    fn test_most_used_template() {
        let registry = Registry::builtin().unwrap();
        let history = vec![
            record(Some("medical"), None),
            record(Some("SaaS"), None),
            record(Some("saas"), None),
            record(Some("no-such-template"), None),
            record(Some("no-such-template"), None),
            record(Some("no-such-template"), None),
            record(None, None),
        ];
        assert_eq!(most_used_template(&history, &registry), Some("saas"));
    }

    #[test]
    fn test_template_tie_uses_registry_order() {
        let registry = Registry::builtin().unwrap();
        let history = vec![record(Some("saas"), None), record(Some("medical"), None)];
        assert_eq!(most_used_template(&history, &registry), Some("medical"));
    }

    #[test]
    fn test_suggested_tax_rate() {
        let history = vec![
            record(None, Some("8.5")),
            record(None, Some("8.50")),
            record(None, Some("7")),
            record(None, None),
            record(None, Some("-3")),
        ];
        assert_eq!(suggested_tax_rate(&history), Some(Decimal::from_str("8.5").unwrap()));
    }

    #[test]
    fn test_tax_tie_prefers_latest() {
        let history = vec![
            record(None, Some("5")),
            record(None, Some("7")),
            record(None, Some("7")),
            record(None, Some("5")),
        ];
        assert_eq!(suggested_tax_rate(&history), Some(Decimal::from(5)));
    }

    #[test]
    fn test_suggestions_serialize_without_nulls() {
        let registry = Registry::builtin().unwrap();
        let json = serde_json::to_value(suggest(&[record(None, None)], &registry)).unwrap();
        assert_eq!(json, serde_json::json!({"records": 1}));
    }
}
