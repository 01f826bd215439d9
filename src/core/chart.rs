//! Horizontal bar charts rendered as plain text.
//!
//! ```text
//! Messages per author
//!   Alice │████████████████████████████████████████ 12
//!   Bob   │████████████████████ 6
//! ```

use std::fmt;

use unicode_width::UnicodeWidthStr;

use super::stats::Ranked;

/// Visual settings for a [`BarChart`].
#[derive(Debug, Clone, Copy)]
pub struct BarChartConfig {
    /// Columns used by the longest bar
    pub width: usize,
    pub filled_char: char,
    /// Fill for bars with a negative value
    pub negative_char: char,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: 40,
            filled_char: '\u{2588}',   // █
            negative_char: '\u{2592}', // ▒
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Bar {
    label: String,
    value: f64,
    display: String,
}

/// A titled list of labelled bars, scaled to the largest magnitude.
#[derive(Debug, Clone)]
pub struct BarChart {
    title: String,
    bars: Vec<Bar>,
    config: BarChartConfig,
}

impl BarChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            bars: Vec::new(),
            config: BarChartConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: BarChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Appends a bar. `display` is printed after the bar.
    pub fn push(&mut self, label: impl Into<String>, value: f64, display: impl Into<String>) {
        self.bars.push(Bar {
            label: label.into(),
            value,
            display: display.into(),
        });
    }

    /// Builds a chart from a count ranking, keeping its order.
    pub fn from_counts(title: impl Into<String>, ranking: &[Ranked<usize>]) -> Self {
        let mut chart = Self::new(title);
        for entry in ranking {
            chart.push(&entry.key, entry.value as f64, entry.value.to_string());
        }
        chart
    }

    /// Builds a chart from a score ranking, printing `precision` decimals.
    pub fn from_scores(title: impl Into<String>, ranking: &[Ranked<f64>], precision: usize) -> Self {
        let mut chart = Self::new(title);
        for entry in ranking {
            chart.push(&entry.key, entry.value, format!("{:.*}", precision, entry.value));
        }
        chart
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn bar_length(&self, value: f64, max: f64) -> usize {
        if max == 0.0 || value == 0.0 {
            return 0;
        }
        let length = (value.abs() / max * self.config.width as f64).round() as usize;
        // Non-zero values always get at least one cell
        length.max(1)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');

        if self.bars.is_empty() {
            out.push_str("  (no data)\n");
            return out;
        }

        let label_width = self
            .bars
            .iter()
            .map(|b| b.label.width())
            .max()
            .unwrap_or(0);
        let max = self.bars.iter().map(|b| b.value.abs()).fold(0.0, f64::max);

        for bar in &self.bars {
            let fill = if bar.value < 0.0 {
                self.config.negative_char
            } else {
                self.config.filled_char
            };
            let cells: String =
                std::iter::repeat_n(fill, self.bar_length(bar.value, max)).collect();
            let padding = label_width - bar.label.width();

            out.push_str(&format!(
                "  {}{} │{} {}\n",
                bar.label,
                " ".repeat(padding),
                cells,
                bar.display
            ));
        }

        out
    }
}

impl fmt::Display for BarChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
