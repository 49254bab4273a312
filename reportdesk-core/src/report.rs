//! Report catalog records.
//!
//! A [`ReportItem`] is owned by whatever list renders it. Components only
//! read `label` and `is_pro`; everything else rides along in `metadata` and is
//! handed back untouched through the action callbacks.
//!
//! # Example
//!
//! ```rust
//! use reportdesk_core::report::{ReportItem, ReportTier};
//!
//! let item = ReportItem::new("funnel", "Signup funnel").pro();
//! assert_eq!(item.tier(), ReportTier::Pro);
//! assert!(!item.tier().has_menu());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One selectable report in the catalog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportItem {
    /// Stable identifier
    pub id: String,
    /// Display label
    pub label: String,
    /// Pro-tier report (no secondary menu)
    #[serde(default)]
    pub is_pro: bool,
    /// Arbitrary caller-owned data, passed through untouched
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl ReportItem {
    /// Standard-tier item with empty metadata.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    /// Mark the item as pro-tier.
    #[must_use]
    pub fn pro(mut self) -> Self {
        self.is_pro = true;
        self
    }

    /// Attach a metadata entry.
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The tier derived from `is_pro`.
    pub fn tier(&self) -> ReportTier {
        if self.is_pro {
            ReportTier::Pro
        } else {
            ReportTier::Standard
        }
    }
}

/// Rendering and behavior variant of a report action item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportTier {
    /// Primary button plus a dropdown of secondary actions
    Standard,
    /// Primary button only
    Pro,
}

impl ReportTier {
    /// Whether the tier exposes the dropdown trigger at all.
    pub fn has_menu(self) -> bool {
        matches!(self, ReportTier::Standard)
    }

    /// Utility classes for the primary button. The two variants never overlap.
    pub fn button_class(self) -> &'static str {
        match self {
            ReportTier::Standard => {
                "report-btn report-btn-standard bg-white text-slate-800 border border-slate-200 hover:bg-slate-50"
            }
            ReportTier::Pro => {
                "report-btn report-btn-pro bg-gradient-to-r from-indigo-600 to-violet-600 text-white hover:opacity-90"
            }
        }
    }
}

/// Parse a catalog from its JSON form (an array of items).
pub fn parse_catalog(json: &str) -> Result<Vec<ReportItem>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Catalog shown when no catalog is configured.
pub fn default_catalog() -> Vec<ReportItem> {
    vec![
        ReportItem::new("traffic-overview", "Traffic overview").with_meta("category", "acquisition"),
        ReportItem::new("signup-funnel", "Signup funnel").with_meta("category", "conversion"),
        ReportItem::new("retention-cohorts", "Retention cohorts")
            .with_meta("category", "retention")
            .pro(),
        ReportItem::new("top-pages", "Top pages").with_meta("category", "content"),
        ReportItem::new("revenue-attribution", "Revenue attribution")
            .with_meta("category", "revenue")
            .pro(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tier_follows_is_pro() {
        assert_eq!(ReportItem::new("a", "A").tier(), ReportTier::Standard);
        assert_eq!(ReportItem::new("a", "A").pro().tier(), ReportTier::Pro);
    }

    #[test]
    fn button_classes_are_mutually_exclusive() {
        let standard = ReportTier::Standard.button_class();
        let pro = ReportTier::Pro.button_class();
        assert!(standard.contains("report-btn-standard"));
        assert!(!standard.contains("report-btn-pro"));
        assert!(pro.contains("report-btn-pro"));
        assert!(!pro.contains("report-btn-standard"));
    }

    #[test]
    fn catalog_json_uses_camel_case_and_keeps_metadata() {
        let json = r#"[
            {"id": "a", "label": "Alpha", "isPro": true, "metadata": {"owner": "ops"}},
            {"id": "b", "label": "Beta"}
        ]"#;
        let items = parse_catalog(json).expect("valid catalog");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].tier(), ReportTier::Pro);
        assert_eq!(items[0].metadata.get("owner"), Some(&Value::from("ops")));
        assert_eq!(items[1], ReportItem::new("b", "Beta"));
    }

    #[test]
    fn default_catalog_mixes_tiers() {
        let catalog = default_catalog();
        assert!(catalog.iter().any(|i| i.is_pro));
        assert!(catalog.iter().any(|i| !i.is_pro));
    }
}
