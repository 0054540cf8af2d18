//! Integration tests for the ChartBuilder API
//!
//! These tests drive the public API from a row-list document to JSON.

use float_cmp::assert_approx_eq;

use stitchgraph::{ChartBuilder, StitchGraphError, config::AppConfig, pattern::Topology};

#[test]
fn test_builder_default() {
    let builder = ChartBuilder::default();

    assert_approx_eq!(f32, builder.table().stitch_spacing(), 30.0);
}

#[test]
fn test_chain_row_end_to_end() {
    let source = r#"{"rows": [{"stitches": ["ch", "ch", "ch"], "isRound": false}]}"#;

    let builder = ChartBuilder::default();
    let pattern = builder.parse(source).expect("Failed to parse");
    let layout = builder.layout(&pattern);

    assert_eq!(layout.len(), 1);
    let row = &layout.rows()[0];
    assert_eq!(row.number(), 1);
    assert_eq!(row.topology(), Topology::Linear);
    let positions: Vec<(f32, f32, f32)> = row
        .stitches()
        .iter()
        .map(|s| (s.x(), s.y(), s.angle_degrees()))
        .collect();
    assert_eq!(
        positions,
        vec![(0.0, 0.0, 0.0), (30.0, 0.0, 0.0), (60.0, 0.0, 0.0)]
    );
}

#[test]
fn test_unknown_token_does_not_fail() {
    let source = r#"[{"stitches": ["sc", "xyz", "sc"]}]"#;

    let builder = ChartBuilder::default();
    let pattern = builder.parse(source).expect("Unknown tokens are accepted");
    let layout = builder.layout(&pattern);

    let unknown = &layout.rows()[0].stitches()[1];
    assert_eq!(unknown.stitch_type().tag(), "xyz");
    assert_eq!(unknown.span(), 1);
    assert_approx_eq!(f32, unknown.x(), 30.0);
}

#[test]
fn test_render_json() {
    let source = r#"[{"rowNumber": 3, "stitches": ["mr"], "isRound": true}]"#;

    let builder = ChartBuilder::default().with_pretty(false);
    let pattern = builder.parse(source).expect("Failed to parse");
    let json = builder
        .render_json(&builder.layout(&pattern))
        .expect("Failed to export");

    assert!(json.starts_with("{\"rows\":["));
    assert!(json.contains("\"topology\":\"radial\""));
    assert!(json.contains("\"rowNumber\":3"));
    assert!(json.contains("\"id\":\"row0-unit0\""));
}

#[test]
fn test_parse_error_keeps_source() {
    let source = r#"[{"stitches": "sc"}]"#;

    let builder = ChartBuilder::default();
    match builder.parse(source) {
        Err(StitchGraphError::Parse { err, src }) => {
            assert_eq!(src, source);
            assert_eq!(err.diagnostics().len(), 1);
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_builder_from_config() {
    let config: AppConfig = toml::from_str(
        r#"
        [layout]
        stitch_spacing = 10.0
        "#,
    )
    .expect("Valid TOML");

    let builder = ChartBuilder::new(&config).expect("Valid configuration");
    let pattern = builder
        .parse(r#"[{"stitches": ["sc", "sc"]}]"#)
        .expect("Failed to parse");
    let layout = builder.layout(&pattern);

    assert_approx_eq!(f32, layout.rows()[0].stitches()[1].x(), 10.0);
}

#[test]
fn test_builder_rejects_invalid_config() {
    let config: AppConfig = toml::from_str(
        r#"
        [stitches.sc]
        span = 0
        "#,
    )
    .expect("Valid TOML");

    assert!(matches!(
        ChartBuilder::new(&config),
        Err(StitchGraphError::Config(_))
    ));
}

#[test]
fn test_builder_reusability() {
    let builder = ChartBuilder::default();

    let first = builder
        .parse(r#"[{"stitches": ["dc", "dc"]}]"#)
        .expect("Failed to parse first");
    let second = builder
        .parse(r#"[{"stitches": ["tr"], "isRound": true}]"#)
        .expect("Failed to parse second");

    assert_eq!(builder.layout(&first).rows()[0].stitches().len(), 2);
    assert_eq!(
        builder.layout(&second).rows()[0].topology(),
        Topology::Radial
    );
}
