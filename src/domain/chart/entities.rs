use super::value_objects::{Color, Proportion};
use serde::{Deserialize, Serialize};

/// One labeled value to be drawn as a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    /// CSS hex hint; `None` means the style accent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl BarDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Everything a single render pass needs from the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInput {
    #[serde(default)]
    pub items: Vec<BarDatum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_max: Option<f64>,
}

impl ChartInput {
    pub fn new(items: Vec<BarDatum>) -> Self {
        Self {
            items,
            explicit_max: None,
        }
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.explicit_max = Some(max);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, crate::domain::errors::AppError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A laid-out row, ready for any rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarRow {
    pub index: usize,
    pub label: String,
    pub value: f64,
    pub proportion: Proportion,
    pub color: Color,
    pub value_text: String,
}

impl BarRow {
    /// Identity key for keyed rendering; labels alone may repeat.
    pub fn key(&self) -> String {
        format!("{}:{}", self.index, self.label)
    }
}

/// Result of normalizing a [`ChartInput`]. Rows keep input order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartLayout {
    pub rows: Vec<BarRow>,
    pub effective_max: f64,
}

impl BarChartLayout {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn to_json(&self) -> Result<String, crate::domain::errors::AppError> {
        Ok(serde_json::to_string(self)?)
    }
}
