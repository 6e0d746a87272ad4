use super::entities::{BarChartLayout, BarDatum, BarRow, ChartInput};
use super::value_objects::{ChartStyle, Color, Proportion};
use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use crate::log_trace;

/// Row count from which the `parallel` feature splits layout and geometry
/// work across threads.
pub const PARALLEL_THRESHOLD: usize = 100;

/// Pure normalization of chart input into bar rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarLayoutService;

impl BarLayoutService {
    pub fn new() -> Self {
        Self
    }

    /// Denominator for one pass: a positive, finite `explicit_max` wins,
    /// otherwise the largest usable value. Returns `0.0` when nothing is
    /// positive.
    pub fn effective_max(&self, items: &[BarDatum], explicit_max: Option<f64>) -> f64 {
        match explicit_max {
            Some(max) if max.is_finite() && max > 0.0 => max,
            _ => items
                .iter()
                .map(|item| usable_value(item.value))
                .fold(0.0, f64::max),
        }
    }

    /// `value / effective_max` clamped to `[0, 1]`; zero when the max is
    /// degenerate.
    pub fn proportion(&self, value: f64, effective_max: f64) -> Proportion {
        if !(effective_max.is_finite() && effective_max > 0.0) {
            return Proportion::ZERO;
        }
        Proportion::new(usable_value(value) / effective_max)
    }

    pub fn layout(&self, input: &ChartInput, style: &ChartStyle) -> BarChartLayout {
        let effective_max = self.effective_max(&input.items, input.explicit_max);
        log_trace!(
            LogComponent::Domain("BarLayout"),
            "{} items, effective max {}",
            input.items.len(),
            effective_max
        );

        let rows = self.rows(&input.items, effective_max, style);
        BarChartLayout {
            rows,
            effective_max,
        }
    }

    #[cfg(feature = "parallel")]
    fn rows(&self, items: &[BarDatum], effective_max: f64, style: &ChartStyle) -> Vec<BarRow> {
        use rayon::prelude::*;

        if items.len() >= PARALLEL_THRESHOLD {
            items
                .par_iter()
                .enumerate()
                .map(|(index, item)| self.row(index, item, effective_max, style))
                .collect()
        } else {
            self.rows_sequential(items, effective_max, style)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn rows(&self, items: &[BarDatum], effective_max: f64, style: &ChartStyle) -> Vec<BarRow> {
        self.rows_sequential(items, effective_max, style)
    }

    fn rows_sequential(
        &self,
        items: &[BarDatum],
        effective_max: f64,
        style: &ChartStyle,
    ) -> Vec<BarRow> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| self.row(index, item, effective_max, style))
            .collect()
    }

    fn row(&self, index: usize, item: &BarDatum, effective_max: f64, style: &ChartStyle) -> BarRow {
        BarRow {
            index,
            label: item.label.clone(),
            value: item.value,
            proportion: self.proportion(item.value, effective_max),
            color: resolve_color(item, style.accent),
            value_text: format_value(item.value, style.value_precision),
        }
    }
}

/// Negative and non-finite values contribute nothing to widths.
fn usable_value(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn resolve_color(item: &BarDatum, accent: Color) -> Color {
    match item.color.as_deref() {
        None => accent,
        Some(hint) => hint.parse().unwrap_or_else(|_| {
            get_logger().log_with_metadata(
                LogLevel::Warn,
                LogComponent::Domain("BarLayout"),
                &format!("bar '{}' has unsupported color, using accent", item.label),
                hint,
            );
            accent
        }),
    }
}

/// Display text for a value: shortest exact decimal unless a precision is
/// configured.
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    // -0.0 + 0.0 == +0.0
    let value = value + 0.0;
    match precision {
        Some(digits) => {
            let text = format!("{:.*}", digits, value);
            // values that round to zero keep no sign
            match text.strip_prefix('-') {
                Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
                _ => text,
            }
        }
        None => format!("{}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_value_matches_natural_notation() {
        assert_eq!(format_value(50.0, None), "50");
        assert_eq!(format_value(12.5, None), "12.5");
        assert_eq!(format_value(-3.0, None), "-3");
        assert_eq!(format_value(2.0 / 3.0, Some(2)), "0.67");
        assert_eq!(format_value(7.0, Some(1)), "7.0");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_value(-0.0, None), "0");
        assert_eq!(format_value(-0.0, Some(2)), "0.00");
        assert_eq!(format_value(-0.001, Some(1)), "0.0");
        assert_eq!(format_value(-0.06, Some(1)), "-0.1");
    }

    #[test]
    fn usable_value_drops_negative_and_non_finite() {
        assert_eq!(usable_value(-1.0), 0.0);
        assert_eq!(usable_value(f64::NAN), 0.0);
        assert_eq!(usable_value(f64::INFINITY), 0.0);
        assert_eq!(usable_value(4.5), 4.5);
    }
}
