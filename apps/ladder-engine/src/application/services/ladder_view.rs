//! Ladder display model.
//!
//! Turns a generated ladder and its summary into display rows: formatted
//! prices, signed percentage changes, sizes at the mode's precision, bar
//! widths, and the average-price marker placed between the rows that
//! bracket it.

use std::fmt::Write as _;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::format::{format_change, format_fixed};
use crate::domain::ladder::{Ladder, LadderMode, LadderSummary, Scenario, percent_change};

/// Decimal places used for prices and the average price.
const PRICE_PRECISION: u32 = 2;

/// Width of the widest bar in the text table.
const TABLE_BAR_WIDTH: u32 = 20;

/// One ladder level ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRow {
    /// Index of the level in generation order.
    pub level_index: usize,
    /// Formatted price.
    pub price: String,
    /// Signed percentage distance from the anchor.
    pub change: String,
    /// Formatted size.
    pub size: String,
    /// Bar width as a percentage of the largest level.
    pub bar_width_pct: Decimal,
}

/// An entry in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewEntry {
    /// A ladder level.
    Level(ViewRow),
    /// The volume-weighted average price marker.
    AveragePrice {
        /// Formatted average price.
        price: String,
    },
}

/// Summary lines shown under the ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSummary {
    /// Number of levels.
    pub order_count: usize,
    /// Label for the total ("total capital" / "total quantity").
    pub total_label: String,
    /// Formatted total size.
    pub total_size: String,
    /// Formatted multiplier.
    pub multiplier: String,
    /// Label for the average ("average entry price" / "average exit price").
    pub average_label: String,
    /// Formatted average price.
    pub average_price: String,
}

/// Complete display model for one ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderView {
    /// Ladder mode.
    pub mode: LadderMode,
    /// Rows and marker in display order.
    pub entries: Vec<ViewEntry>,
    /// Summary lines.
    pub summary: ViewSummary,
}

impl LadderView {
    /// Build the display model.
    ///
    /// Reverse pyramids are listed highest price first; the marker slot from
    /// `summary` (generation order) is mapped through that reversal.
    #[must_use]
    pub fn build(scenario: &Scenario, ladder: &Ladder, summary: &LadderSummary) -> Self {
        let mode = scenario.mode;
        let max_size = ladder.max_size();
        let level_count = ladder.len();

        let mut order: Vec<usize> = (0..level_count).collect();
        if mode.reversed_for_display() {
            order.reverse();
        }
        let marker_before = display_marker_slot(mode, level_count, summary.insertion_index);
        let average_price = format_fixed(summary.volume_weighted_average_price, PRICE_PRECISION);

        let mut entries = Vec::with_capacity(level_count + 1);
        for (display_index, level_index) in order.into_iter().enumerate() {
            if marker_before == Some(display_index) {
                entries.push(ViewEntry::AveragePrice {
                    price: average_price.clone(),
                });
            }

            let level = ladder.levels()[level_index];
            let change = percent_change(mode, scenario.anchor_price, level.price)
                .unwrap_or(Decimal::ZERO);
            let bar_width_pct = level
                .size
                .checked_div(max_size)
                .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::ZERO)
                .round_dp(2);

            entries.push(ViewEntry::Level(ViewRow {
                level_index,
                price: format_fixed(level.price, PRICE_PRECISION),
                change: format_change(mode.change_symbol(), change),
                size: format_fixed(level.size, mode.size_precision()),
                bar_width_pct,
            }));
        }

        Self {
            mode,
            entries,
            summary: ViewSummary {
                order_count: level_count,
                total_label: mode.size_label().to_string(),
                total_size: format_fixed(ladder.total_size(), mode.size_precision()),
                multiplier: scenario.multiplier.to_string(),
                average_label: mode.average_label().to_string(),
                average_price,
            },
        }
    }

    /// Rows only, in display order.
    pub fn rows(&self) -> impl Iterator<Item = &ViewRow> {
        self.entries.iter().filter_map(|entry| match entry {
            ViewEntry::Level(row) => Some(row),
            ViewEntry::AveragePrice { .. } => None,
        })
    }

    /// Plain-text table for terminals and `text/plain` clients.
    #[must_use]
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:>14}  {:>9}  {:>18}", "price", "change", "size");
        for entry in &self.entries {
            match entry {
                ViewEntry::Level(row) => {
                    let _ = writeln!(
                        out,
                        "{:>14}  {:>9}  {:>18}  {}",
                        row.price,
                        row.change,
                        row.size,
                        bar(row.bar_width_pct)
                    );
                }
                ViewEntry::AveragePrice { price } => {
                    let _ = writeln!(out, "{:->14}  average {price}", "");
                }
            }
        }
        let s = &self.summary;
        let _ = writeln!(out);
        let _ = writeln!(out, "orders: {}", s.order_count);
        let _ = writeln!(out, "{}: {}", s.total_label, s.total_size);
        let _ = writeln!(out, "multiplier: {}", s.multiplier);
        let _ = writeln!(out, "{}: {}", s.average_label, s.average_price);
        out
    }
}

/// Map a generation-order insertion index to the display row the marker
/// precedes.
fn display_marker_slot(
    mode: LadderMode,
    level_count: usize,
    insertion_index: Option<usize>,
) -> Option<usize> {
    let index = insertion_index.filter(|&i| i > 0 && i < level_count)?;
    if mode.reversed_for_display() {
        Some(level_count - index)
    } else {
        Some(index)
    }
}

fn bar(width_pct: Decimal) -> String {
    let cells = (width_pct * Decimal::from(TABLE_BAR_WIDTH) / Decimal::ONE_HUNDRED)
        .round()
        .to_usize()
        .unwrap_or(0);
    "#".repeat(cells.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ladder::{Multiplier, generate, summarize};
    use rust_decimal_macros::dec;

    fn scenario(mode: LadderMode, boundary: Decimal) -> Scenario {
        Scenario::new(
            mode,
            dec!(95000),
            dec!(1),
            5,
            Multiplier::new(dec!(0.5)).unwrap(),
            boundary,
        )
    }

    fn view(scenario: &Scenario) -> LadderView {
        let ladder = generate(scenario).unwrap();
        let summary = summarize(&ladder).unwrap();
        LadderView::build(scenario, &ladder, &summary)
    }

    #[test]
    fn pyramid_view_keeps_generation_order() {
        let view = view(&scenario(LadderMode::Pyramid, dec!(90000)));

        let prices: Vec<&str> = view.rows().map(|row| row.price.as_str()).collect();
        assert_eq!(
            prices,
            vec!["95000.00", "93750.00", "92500.00", "91250.00", "90000.00"]
        );

        let first = view.rows().next().unwrap();
        assert_eq!(first.change, "-0.00%");
        assert_eq!(first.size, "0.10");
        assert_eq!(first.bar_width_pct, dec!(33.33));

        let last = view.rows().last().unwrap();
        assert_eq!(last.change, "-5.26%");
        assert_eq!(last.size, "0.30");
        assert_eq!(last.bar_width_pct, dec!(100));
    }

    #[test]
    fn pyramid_marker_sits_between_bracketing_rows() {
        let view = view(&scenario(LadderMode::Pyramid, dec!(90000)));

        // average 91875 lies between 92500 and 91250
        assert_eq!(
            view.entries[3],
            ViewEntry::AveragePrice {
                price: "91875.00".to_string()
            }
        );
        assert!(matches!(&view.entries[2], ViewEntry::Level(row) if row.price == "92500.00"));
        assert!(matches!(&view.entries[4], ViewEntry::Level(row) if row.price == "91250.00"));
    }

    #[test]
    fn reverse_view_is_highest_first_with_mapped_marker() {
        let view = view(&scenario(LadderMode::ReversePyramid, dec!(100000)));

        let prices: Vec<&str> = view.rows().map(|row| row.price.as_str()).collect();
        assert_eq!(
            prices,
            vec!["100000.00", "98750.00", "97500.00", "96250.00", "95000.00"]
        );

        // average 98125 lies between 98750 and 97500
        assert_eq!(
            view.entries[2],
            ViewEntry::AveragePrice {
                price: "98125.00".to_string()
            }
        );

        let top = view.rows().next().unwrap();
        assert_eq!(top.change, "+5.26%");
        assert_eq!(top.size, "0.30000000");
        assert_eq!(top.level_index, 4);
    }

    #[test]
    fn summary_lines() {
        let view = view(&scenario(LadderMode::Pyramid, dec!(90000)));

        assert_eq!(
            view.summary,
            ViewSummary {
                order_count: 5,
                total_label: "total capital".to_string(),
                total_size: "1.00".to_string(),
                multiplier: "0.50".to_string(),
                average_label: "average entry price".to_string(),
                average_price: "91875.00".to_string(),
            }
        );
    }

    #[test]
    fn no_marker_without_slot() {
        assert_eq!(display_marker_slot(LadderMode::Pyramid, 5, None), None);
        assert_eq!(display_marker_slot(LadderMode::Pyramid, 5, Some(0)), None);
        assert_eq!(display_marker_slot(LadderMode::Pyramid, 5, Some(2)), Some(2));
        assert_eq!(
            display_marker_slot(LadderMode::ReversePyramid, 5, Some(1)),
            Some(4)
        );
    }

    #[test]
    fn table_contains_rows_marker_and_summary() {
        let table = view(&scenario(LadderMode::Pyramid, dec!(90000))).to_table();

        assert!(table.contains("95000.00"));
        assert!(table.contains("average 91875.00"));
        assert!(table.contains("orders: 5"));
        assert!(table.contains("total capital: 1.00"));
        assert!(table.contains("average entry price: 91875.00"));
        assert_eq!(table.lines().filter(|l| l.contains('#')).count(), 5);
    }

    #[test]
    fn extreme_magnitudes_render() {
        let scenario = Scenario::new(
            LadderMode::ReversePyramid,
            dec!(0.1),
            Decimal::from_i128_with_scale(10_i128.pow(27), 0),
            2,
            Multiplier::ZERO,
            Decimal::from_i128_with_scale(10_i128.pow(27), 0),
        );

        let view = view(&scenario);

        // percentage too large to represent falls back to zero
        let top = view.rows().next().unwrap();
        assert_eq!(top.change, "+0.00%");
        assert_eq!(top.bar_width_pct, dec!(100));
    }
}
