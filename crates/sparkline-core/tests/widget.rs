// File: crates/sparkline-core/tests/widget.rs
// Purpose: End-to-end widget renders against a retained surface (mount, update, errors, idempotence).

use sparkline_core::{
    Color, ContainerSize, FieldDescriptor, FormatterMap, QuerySchema, RenderConfig, RenderInput, ResultRow,
    ResultSet, SparklineWidget, SvgSurface, Visualization,
};

fn schema() -> QuerySchema {
    QuerySchema::new(
        vec![FieldDescriptor::dimension("day")],
        vec![FieldDescriptor::measure("visits"), FieldDescriptor::measure("revenue")],
    )
}

fn rows(points: &[(f64, f64)]) -> ResultSet {
    points
        .iter()
        .enumerate()
        .map(|(i, &(visits, revenue))| {
            ResultRow::new().with("day", i as f64).with("visits", visits).with("revenue", revenue)
        })
        .collect()
}

fn mounted() -> (SparklineWidget, SvgSurface) {
    let mut widget = SparklineWidget::new();
    let mut surface = SvgSurface::new(ContainerSize::new(400.0, 200.0));
    widget.initialize(&mut surface);
    (widget, surface)
}

#[test]
fn renders_value_and_sparkline() {
    let (mut widget, mut surface) = mounted();
    let data = rows(&[(10.0, 100.0), (20.0, 200.0), (30.0, 600.0)]);
    let schema = schema();
    let config = RenderConfig::default();

    let summary = widget.render(&mut surface, &RenderInput::new(&data, &schema, &config)).expect("render");
    assert_eq!(summary.average, 300.0);
    assert_eq!(summary.value_text, "300.0");
    assert_eq!(surface.value_text(), "300.0");
    assert_eq!(surface.value_color(), Some(Color::VALUE));

    let path = surface.sparkline().expect("sparkline drawn");
    assert_eq!(path.stroke, Color::SPARKLINE);
    assert_eq!(summary.geometry.points.len(), 3);
    let first = summary.geometry.points[0];
    let last = summary.geometry.points[2];
    assert!((first.x - 3.0).abs() < 1e-9);
    assert!((last.x - 357.0).abs() < 1e-9);
    assert!(first.y > last.y);
    assert!(path.d.starts_with('M'));

    let markup = surface.to_markup();
    assert!(markup.contains("class=\"vis-value\" style=\"color: #424242\">300.0</div>"));
    assert!(markup.contains("class=\"sparkline-path\""));
    assert!(markup.contains("stroke: #60B17D"));
}

#[test]
fn empty_result_shows_zero_and_no_path() {
    let (mut widget, mut surface) = mounted();
    let data = ResultSet::default();
    let schema = schema();
    let config = RenderConfig::default().with_value_format(None);

    let summary = widget.render(&mut surface, &RenderInput::new(&data, &schema, &config)).expect("render");
    assert_eq!(summary.average, 0.0);
    assert_eq!(surface.value_text(), "0");
    assert!(surface.sparkline().is_none());
    assert!(summary.geometry.is_empty());
}

#[test]
fn single_row_shows_value_without_path() {
    let (mut widget, mut surface) = mounted();
    let data = rows(&[(5.0, 12.5)]);
    let schema = schema();
    let config = RenderConfig::default();

    let summary = widget.render(&mut surface, &RenderInput::new(&data, &schema, &config)).expect("render");
    assert_eq!(summary.average, 12.5);
    assert!(surface.sparkline().is_none());
}

#[test]
fn new_render_replaces_previous_path() {
    let (mut widget, mut surface) = mounted();
    let schema = schema();
    let config = RenderConfig::default();

    let first = rows(&[(1.0, 1.0), (2.0, 1.0)]);
    widget.render(&mut surface, &RenderInput::new(&first, &schema, &config)).expect("render");
    assert!(surface.sparkline().is_some());

    let second = rows(&[(3.0, 4.0)]);
    widget.render(&mut surface, &RenderInput::new(&second, &schema, &config)).expect("render");
    assert!(surface.sparkline().is_none(), "stale path must be cleared");
    assert_eq!(surface.value_text(), "4.0");
}

#[test]
fn configuration_error_leaves_surface_untouched() {
    let (mut widget, mut surface) = mounted();
    let good = schema();
    let config = RenderConfig::default();
    let data = rows(&[(1.0, 10.0), (3.0, 30.0)]);
    widget.render(&mut surface, &RenderInput::new(&data, &good, &config)).expect("render");
    let before = surface.clone();

    let bad = QuerySchema::new(
        vec![FieldDescriptor::dimension("day"), FieldDescriptor::dimension("region")],
        vec![FieldDescriptor::measure("visits")],
    );
    let other = rows(&[(9.0, 90.0), (1.0, 10.0), (5.0, 50.0)]);
    let err = widget
        .render(&mut surface, &RenderInput::new(&other, &bad, &config))
        .expect_err("2 dims / 1 measure must be rejected");
    assert_eq!((err.dimensions, err.measures), (2, 1));
    assert_eq!(surface, before);
}

#[test]
fn container_size_applies_only_to_accepted_renders() {
    let (mut widget, mut surface) = mounted();
    let good = schema();
    let config = RenderConfig::default();
    let data = rows(&[(1.0, 10.0), (3.0, 30.0)]);
    widget.render(&mut surface, &RenderInput::new(&data, &good, &config)).expect("render");
    let before = surface.to_svg_document();

    let bad = QuerySchema::new(vec![], vec![FieldDescriptor::measure("visits")]);
    let small = ContainerSize::new(100.0, 50.0);
    widget
        .render(&mut surface, &RenderInput::new(&data, &bad, &config).with_container(small))
        .expect_err("0 dims / 1 measure must be rejected");
    assert_eq!(surface.size(), ContainerSize::new(400.0, 200.0));
    assert_eq!(surface.to_svg_document(), before);

    let summary = widget
        .render(&mut surface, &RenderInput::new(&data, &good, &config).with_container(small))
        .expect("render");
    assert_eq!(surface.size(), small);
    // 90% of 100 wide, 3 px padding
    assert!((summary.geometry.points[1].x - 87.0).abs() < 1e-9);
}

#[test]
fn identical_updates_are_idempotent() {
    let (mut widget, mut surface) = mounted();
    let data = rows(&[(3.0, 1.0), (1.0, 2.0), (4.0, 3.0), (1.0, 4.0), (5.0, 5.0)]);
    let schema = schema();
    let config = RenderConfig::default();

    widget.render(&mut surface, &RenderInput::new(&data, &schema, &config)).expect("render");
    let markup_a = surface.to_markup();
    let path_a = surface.sparkline().map(|p| p.d.clone());
    widget.render(&mut surface, &RenderInput::new(&data, &schema, &config)).expect("render");
    assert_eq!(surface.to_markup(), markup_a);
    assert_eq!(surface.sparkline().map(|p| p.d.clone()), path_a);
}

#[test]
fn host_formatter_and_custom_colors_are_applied() {
    let (mut widget, mut surface) = mounted();
    let data = rows(&[(1.0, 1500.0), (2.0, 2500.0)]);
    let schema = schema();
    let config = RenderConfig {
        sparkline_color: "#ff0000".parse().unwrap(),
        value_color: "#00ff00".parse().unwrap(),
        value_format: Some("#,##0.0".to_string()),
    };
    let host = FormatterMap::new().with("revenue", |v| format!("${v:.0}"));

    widget
        .render(&mut surface, &RenderInput::new(&data, &schema, &config).with_formatters(&host))
        .expect("render");
    assert_eq!(surface.value_text(), "$2000");
    assert_eq!(surface.value_color(), Some(Color::rgb(0, 255, 0)));
    assert_eq!(surface.sparkline().map(|p| p.stroke), Some(Color::rgb(255, 0, 0)));
}

#[test]
fn render_mounts_an_unmounted_surface() {
    let mut widget = SparklineWidget::new();
    let mut surface = SvgSurface::default();
    assert!(!surface.is_mounted());
    let data = rows(&[(1.0, 1.0), (2.0, 2.0)]);
    let schema = schema();
    let config = RenderConfig::default();
    widget.render(&mut surface, &RenderInput::new(&data, &schema, &config)).expect("render");
    assert!(surface.is_mounted());
}

#[test]
fn descriptor_registers_three_options() {
    let widget = SparklineWidget::new();
    let d = widget.descriptor();
    assert_eq!(d.id, "single_value_sparkline_avg");
    assert_eq!(d.label, "Single Value Sparkline (Avg)");
    assert_eq!(d.option("sparkline_color").map(|o| o.default), Some("#60B17D"));
    assert_eq!(d.option("value_color").map(|o| o.default), Some("#424242"));
    assert_eq!(d.option("value_format").and_then(|o| o.placeholder), Some("#,##0.0"));

    let json = d.to_json();
    assert_eq!(json["options"]["sparkline_color"]["display"], "color");
    assert_eq!(json["options"]["value_color"]["type"], "string");
}
