use bar_chart_wasm::domain::chart::{BarDatum, BarLayoutService, ChartInput, ChartStyle};
use bar_chart_wasm::infrastructure::rendering::CanvasRenderer;
use bar_chart_wasm::infrastructure::rendering::canvas_renderer::CANVAS_PADDING;

fn sample_layout() -> bar_chart_wasm::domain::chart::BarChartLayout {
    let input = ChartInput::new(vec![
        BarDatum::new("a", 10.0),
        BarDatum::new("b", 20.0).with_color("#ff0000"),
    ]);
    BarLayoutService::new().layout(&input, &ChartStyle::default())
}

#[test]
fn rows_are_stacked_with_gap() {
    let renderer = CanvasRenderer::new("chart", 400, ChartStyle::default());
    let geometry = renderer.compute_geometry(&sample_layout());

    assert_eq!(geometry.len(), 2);
    assert_eq!(geometry[0].row_y, CANVAS_PADDING);
    assert_eq!(geometry[1].row_y, CANVAS_PADDING + 24.0 + 8.0);
    assert_eq!(geometry[1].text_y, geometry[1].row_y + 12.0);
}

#[test]
fn bar_width_follows_proportion() {
    let renderer = CanvasRenderer::new("chart", 400, ChartStyle::default());
    let geometry = renderer.compute_geometry(&sample_layout());

    // 400 - 2 * 8 padding - 120 label - 64 value
    assert_eq!(geometry[0].track_x, 128.0);
    assert_eq!(geometry[0].track_width, 200.0);
    assert_eq!(geometry[0].bar_width, 100.0);
    assert_eq!(geometry[1].bar_width, 200.0);
    assert_eq!(geometry[1].value_x, 392.0);
    assert_eq!(geometry[0].color, "#3b82f6");
    assert_eq!(geometry[1].color, "#ff0000");
}

#[test]
fn narrow_canvas_collapses_track() {
    let renderer = CanvasRenderer::new("chart", 100, ChartStyle::default());
    let geometry = renderer.compute_geometry(&sample_layout());
    assert!(geometry.iter().all(|g| g.track_width == 0.0 && g.bar_width == 0.0));
}

#[test]
fn height_tracks_row_count() {
    let renderer = CanvasRenderer::new("chart", 400, ChartStyle::default());
    assert_eq!(renderer.content_height(0), 0.0);
    assert_eq!(renderer.content_height(1), 16.0 + 24.0);
    assert_eq!(renderer.content_height(3), 16.0 + 3.0 * 24.0 + 2.0 * 8.0);
}

#[test]
fn large_layouts_keep_row_order() {
    let items: Vec<BarDatum> = (0..250)
        .map(|i| BarDatum::new(format!("row-{i}"), (i % 17) as f64))
        .collect();
    let layout = BarLayoutService::new().layout(&ChartInput::new(items), &ChartStyle::default());
    let renderer = CanvasRenderer::new("chart", 400, ChartStyle::default());
    let geometry = renderer.compute_geometry(&layout);

    assert_eq!(geometry.len(), 250);
    for (i, row) in geometry.iter().enumerate() {
        assert_eq!(row.label, format!("row-{i}"));
        assert_eq!(row.row_y, CANVAS_PADDING + i as f64 * 32.0);
        assert_eq!(row.bar_width, 200.0 * (i % 17) as f64 / 16.0);
    }
}
