use bar_chart_wasm::domain::chart::{BarDatum, BarLayoutService, ChartInput, ChartStyle};
use quickcheck_macros::quickcheck;

fn finite(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

fn items_from(values: &[f64]) -> Vec<BarDatum> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| BarDatum::new(format!("item-{i}"), *value))
        .collect()
}

#[quickcheck]
fn proportions_stay_in_unit_range(values: Vec<f64>, explicit_max: Option<f64>) -> bool {
    let input = ChartInput {
        items: items_from(&values),
        explicit_max,
    };
    BarLayoutService::new()
        .layout(&input, &ChartStyle::default())
        .rows
        .iter()
        .all(|row| (0.0..=1.0).contains(&row.proportion.value()))
}

#[quickcheck]
fn proportion_is_value_over_max_within_range(values: Vec<u32>) -> bool {
    let values: Vec<f64> = values.into_iter().map(f64::from).collect();
    let input = ChartInput::new(items_from(&values));
    let layout = BarLayoutService::new().layout(&input, &ChartStyle::default());

    layout.rows.iter().zip(&values).all(|(row, value)| {
        let expected = if layout.effective_max > 0.0 {
            value / layout.effective_max
        } else {
            0.0
        };
        (row.proportion.value() - expected).abs() < 1e-12
    })
}

#[quickcheck]
fn rows_follow_input_order(labels: Vec<String>) -> bool {
    let items: Vec<BarDatum> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| BarDatum::new(label.clone(), i as f64))
        .collect();
    let layout = BarLayoutService::new().layout(&ChartInput::new(items), &ChartStyle::default());

    layout.len() == labels.len()
        && layout
            .rows
            .iter()
            .enumerate()
            .all(|(i, row)| row.index == i && row.label == labels[i])
}

#[quickcheck]
fn layout_is_idempotent(values: Vec<f64>, explicit_max: Option<f64>) -> bool {
    let values: Vec<f64> = values.into_iter().map(finite).collect();
    let input = ChartInput {
        items: items_from(&values),
        explicit_max: explicit_max.map(finite),
    };
    let service = BarLayoutService::new();
    let style = ChartStyle::default();

    service.layout(&input, &style) == service.layout(&input, &style)
}

#[test]
fn large_inputs_keep_order() {
    let values: Vec<f64> = (0..500).map(|i| (i % 37) as f64).collect();
    let layout = BarLayoutService::new().layout(&ChartInput::new(items_from(&values)), &ChartStyle::default());

    assert_eq!(layout.len(), 500);
    assert_eq!(layout.effective_max, 36.0);
    for (i, row) in layout.rows.iter().enumerate() {
        assert_eq!(row.index, i);
        assert_eq!(row.label, format!("item-{i}"));
    }
}
