use bar_chart_wasm::domain::chart::{BarDatum, BarLayoutService, ChartInput, ChartStyle, Color};

fn colors(items: Vec<BarDatum>, style: &ChartStyle) -> Vec<String> {
    BarLayoutService::new()
        .layout(&ChartInput::new(items), style)
        .rows
        .iter()
        .map(|row| row.color.to_css())
        .collect()
}

#[test]
fn missing_color_uses_default_accent() {
    let colors = colors(vec![BarDatum::new("a", 1.0)], &ChartStyle::default());
    assert_eq!(colors, vec![Color::ACCENT.to_css()]);
}

#[test]
fn item_color_wins_over_accent() {
    let colors = colors(
        vec![BarDatum::new("a", 1.0).with_color("#f97316"), BarDatum::new("b", 2.0)],
        &ChartStyle::default(),
    );
    assert_eq!(colors, vec!["#f97316".to_string(), "#3b82f6".to_string()]);
}

#[test]
fn style_accent_replaces_default() {
    let style = ChartStyle {
        accent: Color::from_hex(0x10b981),
        ..ChartStyle::default()
    };
    let colors = colors(vec![BarDatum::new("a", 1.0)], &style);
    assert_eq!(colors, vec!["#10b981".to_string()]);
}

#[test]
fn unparseable_color_falls_back_to_accent() {
    let colors = colors(
        vec![BarDatum::new("a", 1.0).with_color("cornflower"), BarDatum::new("b", 1.0).with_color("#abc")],
        &ChartStyle::default(),
    );
    assert_eq!(colors, vec!["#3b82f6".to_string(), "#aabbcc".to_string()]);
}
