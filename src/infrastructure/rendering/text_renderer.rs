use super::BarChartRenderer;
use crate::domain::{chart::BarChartLayout, errors::RenderingResult};

const FILLED: char = '█';
const EMPTY: char = '░';

/// Block-character renderer, one line per row:
///
/// ```text
/// alpha █████░░░░░ 10
/// beta  ██████████ 20
/// ```
#[derive(Debug, Clone)]
pub struct TextRenderer {
    bar_width: usize,
    frame: String,
}

impl TextRenderer {
    pub fn new(bar_width: usize) -> Self {
        Self {
            bar_width,
            frame: String::new(),
        }
    }

    /// Output of the last [`BarChartRenderer::render`] call.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn render_to_string(&self, layout: &BarChartLayout) -> String {
        let label_width = column_width(layout.rows.iter().map(|row| row.label.as_str()));
        let value_width = column_width(layout.rows.iter().map(|row| row.value_text.as_str()));

        layout
            .rows
            .iter()
            .map(|row| {
                let filled = ((row.proportion.value() * self.bar_width as f64).round() as usize)
                    .min(self.bar_width);
                let bar: String = std::iter::repeat_n(FILLED, filled)
                    .chain(std::iter::repeat_n(EMPTY, self.bar_width - filled))
                    .collect();
                format!(
                    "{:<lw$} {} {:>vw$}",
                    row.label,
                    bar,
                    row.value_text,
                    lw = label_width,
                    vw = value_width
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(20)
    }
}

impl BarChartRenderer for TextRenderer {
    fn render(&mut self, layout: &BarChartLayout) -> RenderingResult<()> {
        self.frame = self.render_to_string(layout);
        Ok(())
    }
}

fn column_width<'a>(cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(|cell| cell.chars().count()).max().unwrap_or(0)
}
