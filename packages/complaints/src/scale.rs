//! Ordinal label-to-color scale for complaint markers.
//!
//! Mirrors a d3 `category20` ordinal scale: the distinct resolution
//! descriptions, in first-occurrence order, are assigned colors from a
//! fixed 20-color palette, cycling when the domain is larger than the
//! palette.

use crate::ComplaintRecord;

/// The classic d3 "category20" palette.
pub const CATEGORY_PALETTE: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
    "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

/// A deterministic label-to-color mapping built from one dataset.
///
/// Stable only for a given input ordering; rebuilt on every data load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoricalScale {
    domain: Vec<String>,
}

impl CategoricalScale {
    /// Builds a scale from an ordered stream of labels, deduplicating to
    /// first-occurrence order.
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut domain: Vec<String> = Vec::new();
        for label in labels {
            if !domain.iter().any(|known| known == label) {
                domain.push(label.to_owned());
            }
        }
        Self { domain }
    }

    /// Builds a scale over the full complaint dataset, keyed on each
    /// record's resolution description. All records participate, including
    /// those that later fail coordinate validation, so the mapping does
    /// not shift when invalid records are filtered out.
    #[must_use]
    pub fn from_records(records: &[ComplaintRecord]) -> Self {
        Self::from_labels(records.iter().map(ComplaintRecord::scale_key))
    }

    /// The color for a label, or `None` for a label outside the domain.
    #[must_use]
    pub fn color(&self, label: &str) -> Option<&'static str> {
        self.domain
            .iter()
            .position(|known| known == label)
            .map(|i| CATEGORY_PALETTE[i % CATEGORY_PALETTE.len()])
    }

    /// The distinct labels, in first-occurrence order.
    #[must_use]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Number of distinct labels in the domain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    /// Whether the domain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_palette_colors_in_first_occurrence_order() {
        let scale = CategoricalScale::from_labels(["Closed", "Open", "Closed", "Pending"]);
        assert_eq!(scale.len(), 3);
        assert_eq!(scale.color("Closed"), Some(CATEGORY_PALETTE[0]));
        assert_eq!(scale.color("Open"), Some(CATEGORY_PALETTE[1]));
        assert_eq!(scale.color("Pending"), Some(CATEGORY_PALETTE[2]));
    }

    #[test]
    fn is_deterministic_for_identical_input() {
        let labels = ["a", "b", "c", "a", "b"];
        assert_eq!(
            CategoricalScale::from_labels(labels),
            CategoricalScale::from_labels(labels)
        );
    }

    #[test]
    fn domain_size_equals_distinct_label_count() {
        let scale = CategoricalScale::from_labels(["x", "x", "y", "x"]);
        assert_eq!(scale.domain(), ["x".to_owned(), "y".to_owned()]);
    }

    #[test]
    fn cycles_palette_beyond_twenty_labels() {
        let labels: Vec<String> = (0..25).map(|i| format!("label-{i}")).collect();
        let scale = CategoricalScale::from_labels(labels.iter().map(String::as_str));
        assert_eq!(scale.color("label-0"), scale.color("label-20"));
        assert_ne!(scale.color("label-0"), scale.color("label-1"));
    }

    #[test]
    fn unknown_label_has_no_color() {
        let scale = CategoricalScale::from_labels(["a"]);
        assert_eq!(scale.color("b"), None);
    }

    #[test]
    fn scale_from_records_uses_empty_key_for_missing_descriptions() {
        let records = vec![
            ComplaintRecord {
                resolution_description: Some("Closed".to_owned()),
                ..ComplaintRecord::default()
            },
            ComplaintRecord::default(),
        ];
        let scale = CategoricalScale::from_records(&records);
        assert_eq!(scale.len(), 2);
        assert_eq!(scale.color(""), Some(CATEGORY_PALETTE[1]));
    }
}
