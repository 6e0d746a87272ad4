use bar_chart_wasm::domain::chart::{BarDatum, BarLayoutService, ChartInput, ChartStyle};

fn proportions(input: &ChartInput) -> Vec<f64> {
    BarLayoutService::new()
        .layout(input, &ChartStyle::default())
        .rows
        .iter()
        .map(|row| row.proportion.value())
        .collect()
}

#[test]
fn explicit_max_overrides_derived_max() {
    let input = ChartInput::new(vec![BarDatum::new("a", 50.0)]).with_max(100.0);
    let layout = BarLayoutService::new().layout(&input, &ChartStyle::default());

    assert_eq!(layout.effective_max, 100.0);
    assert_eq!(proportions(&input), vec![0.5]);
}

#[test]
fn derived_max_is_largest_value() {
    let input = ChartInput::new(vec![BarDatum::new("a", 10.0), BarDatum::new("b", 20.0)]);
    let service = BarLayoutService::new();

    assert_eq!(service.effective_max(&input.items, None), 20.0);
    assert_eq!(proportions(&input), vec![0.5, 1.0]);
}

#[test]
fn zero_explicit_max_falls_back_to_derived() {
    let input = ChartInput::new(vec![BarDatum::new("a", 5.0), BarDatum::new("b", 10.0)]).with_max(0.0);
    assert_eq!(proportions(&input), vec![0.5, 1.0]);
}

#[test]
fn unusable_explicit_max_falls_back_to_derived() {
    let service = BarLayoutService::new();
    let items = vec![BarDatum::new("a", 8.0)];

    for max in [-10.0, f64::NAN, f64::INFINITY] {
        assert_eq!(service.effective_max(&items, Some(max)), 8.0, "explicit max {max}");
    }
}

#[test]
fn values_above_explicit_max_fill_the_track() {
    let input = ChartInput::new(vec![BarDatum::new("over", 150.0), BarDatum::new("half", 50.0)])
        .with_max(100.0);
    assert_eq!(proportions(&input), vec![1.0, 0.5]);
}

#[test]
fn proportion_of_degenerate_max_is_zero() {
    let service = BarLayoutService::new();
    assert_eq!(service.proportion(3.0, 0.0).value(), 0.0);
    assert_eq!(service.proportion(3.0, -1.0).value(), 0.0);
    assert_eq!(service.proportion(3.0, f64::NAN).value(), 0.0);
    assert_eq!(service.proportion(3.0, 4.0).value(), 0.75);
}
