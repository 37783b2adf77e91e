#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Percentage statistic derivation and choropleth color classification.
//!
//! Pure styling logic for the ACS "living in same house 1 year ago"
//! choropleth: derive the display percentage from a tract's population
//! counts, bucket it into one of six fixed fill colors, and build the
//! legend entries for those buckets. No I/O, no map state.

use serde::Serialize;

/// The six bucket fill colors, darkest (highest percentage) first.
pub const BUCKET_COLORS: [&str; 6] = [
    "#a50f15", "#de2d26", "#fb6a4a", "#fc9272", "#fcbba1", "#fee5d9",
];

/// Lower bounds of the legend buckets, in display order.
const LEGEND_BOUNDS: [u32; 6] = [0, 75, 80, 85, 90, 95];

/// Fill opacity for every shape with a non-zero (or unknown) percentage.
pub const FILL_OPACITY: f64 = 0.75;

/// The numerator/denominator/percentage triple derived from one tract's
/// ACS counts.
///
/// `percentage` is `None` when either count is missing or the denominator
/// is zero; the shape still renders (default bucket) and the popup shows
/// `N/A` instead of a number.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedStatistic {
    /// Population living in the same house one year ago.
    pub numerator: Option<f64>,
    /// Total population of the tract.
    pub denominator: Option<f64>,
    /// `round(100 * numerator / denominator)`, when computable.
    pub percentage: Option<f64>,
}

impl DerivedStatistic {
    /// Derives the percentage from the two counts. Never panics: a missing
    /// count or a zero denominator yields `percentage: None`.
    #[must_use]
    pub fn new(numerator: Option<f64>, denominator: Option<f64>) -> Self {
        let percentage = match (numerator, denominator) {
            (Some(n), Some(d)) if d != 0.0 => Some((n / d * 100.0).round()),
            _ => None,
        };
        Self {
            numerator,
            denominator,
            percentage,
        }
    }

    /// The percentage as popup text (`"95"`, or `"N/A"` when absent).
    #[must_use]
    pub fn percentage_text(&self) -> String {
        count_text(self.percentage)
    }

    /// The numerator as popup text.
    #[must_use]
    pub fn numerator_text(&self) -> String {
        count_text(self.numerator)
    }

    /// The denominator as popup text.
    #[must_use]
    pub fn denominator_text(&self) -> String {
        count_text(self.denominator)
    }
}

fn count_text(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_owned(), |v| format!("{v:.0}"))
}

/// Fill color and opacity for one shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillStyle {
    /// One of the six [`BUCKET_COLORS`].
    pub fill_color: &'static str,
    /// `0.0` for an exactly-zero percentage, otherwise [`FILL_OPACITY`].
    pub fill_opacity: f64,
}

/// Picks the bucket color: first matching threshold in descending order
/// `{95, 90, 85, 80, 75}`, else the lightest bucket. An unknown
/// percentage takes the lightest bucket.
#[must_use]
pub fn fill_color(percentage: Option<f64>) -> &'static str {
    match percentage {
        Some(p) if p > 95.0 => BUCKET_COLORS[0],
        Some(p) if p > 90.0 => BUCKET_COLORS[1],
        Some(p) if p > 85.0 => BUCKET_COLORS[2],
        Some(p) if p > 80.0 => BUCKET_COLORS[3],
        Some(p) if p > 75.0 => BUCKET_COLORS[4],
        _ => BUCKET_COLORS[5],
    }
}

/// Opacity is `0.0` iff the percentage is exactly zero, so empty tracts
/// render transparent. An unknown percentage stays visible at
/// [`FILL_OPACITY`].
#[must_use]
pub fn fill_opacity(percentage: Option<f64>) -> f64 {
    if percentage == Some(0.0) {
        0.0
    } else {
        FILL_OPACITY
    }
}

/// Combined color + opacity classification for one percentage value.
#[must_use]
pub fn classify(percentage: Option<f64>) -> FillStyle {
    FillStyle {
        fill_color: fill_color(percentage),
        fill_opacity: fill_opacity(percentage),
    }
}

/// One legend row: a bucket boundary label and its swatch color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    /// Boundary label, e.g. `"75% – 80%"` or `"95% +"`.
    pub label: String,
    /// Swatch color for the bucket.
    pub color: &'static str,
}

/// Builds the six legend entries in ascending bucket order. Each swatch is
/// classified from the bucket's lower bound plus one, so the `> threshold`
/// comparison lands in the right bucket.
#[must_use]
pub fn legend_entries() -> Vec<LegendEntry> {
    LEGEND_BOUNDS
        .iter()
        .enumerate()
        .map(|(i, &lower)| {
            let label = LEGEND_BOUNDS.get(i + 1).map_or_else(
                || format!("{lower}% +"),
                |upper| format!("{lower}% \u{2013} {upper}%"),
            );
            LegendEntry {
                label,
                color: fill_color(Some(f64::from(lower) + 1.0)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_whole_percentage() {
        let stat = DerivedStatistic::new(Some(1.0), Some(4.0));
        assert_eq!(stat.percentage, Some(25.0));
        assert_eq!(stat.percentage_text(), "25");
    }

    #[test]
    fn rounds_to_nearest_whole() {
        let stat = DerivedStatistic::new(Some(2.0), Some(3.0));
        assert_eq!(stat.percentage, Some(67.0));
    }

    #[test]
    fn zero_denominator_yields_no_percentage() {
        let stat = DerivedStatistic::new(Some(1.0), Some(0.0));
        assert_eq!(stat.percentage, None);
        assert_eq!(stat.percentage_text(), "N/A");
    }

    #[test]
    fn missing_count_yields_no_percentage() {
        assert_eq!(DerivedStatistic::new(None, Some(100.0)).percentage, None);
        assert_eq!(DerivedStatistic::new(Some(5.0), None).percentage, None);
    }

    #[test]
    fn top_bucket_above_95() {
        assert_eq!(fill_color(Some(100.0)), BUCKET_COLORS[0]);
        assert_eq!(fill_color(Some(96.0)), BUCKET_COLORS[0]);
    }

    #[test]
    fn boundary_values_fall_in_lower_bucket() {
        // 95 is not > 95, so it belongs to the 90-95 bucket.
        assert_eq!(fill_color(Some(95.0)), BUCKET_COLORS[1]);
        assert_eq!(fill_color(Some(75.0)), BUCKET_COLORS[5]);
    }

    #[test]
    fn unknown_percentage_takes_default_bucket() {
        assert_eq!(fill_color(None), BUCKET_COLORS[5]);
    }

    #[test]
    fn every_percentage_maps_to_a_bucket_color() {
        for p in 0..=100 {
            let color = fill_color(Some(f64::from(p)));
            assert!(BUCKET_COLORS.contains(&color));
        }
    }

    #[test]
    fn zero_percentage_is_transparent() {
        assert!((fill_opacity(Some(0.0)) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn nonzero_and_unknown_percentages_are_opaque() {
        assert!((fill_opacity(Some(50.0)) - FILL_OPACITY).abs() < f64::EPSILON);
        assert!((fill_opacity(None) - FILL_OPACITY).abs() < f64::EPSILON);
    }

    #[test]
    fn legend_has_six_buckets_in_order() {
        let entries = legend_entries();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].label, "0% \u{2013} 75%");
        assert_eq!(entries[1].label, "75% \u{2013} 80%");
        assert_eq!(entries[5].label, "95% +");
    }

    #[test]
    fn legend_swatches_match_classifier() {
        let entries = legend_entries();
        assert_eq!(entries[0].color, BUCKET_COLORS[5]);
        assert_eq!(entries[5].color, BUCKET_COLORS[0]);
    }
}
