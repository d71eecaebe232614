//! Loading shapes from configuration files.

use geode::*;

use approx::assert_abs_diff_eq;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Geofence {
    name: String,
    area: Circle,
}

#[derive(Debug, Deserialize)]
struct FenceConfig {
    depot: Point,
    fence: Vec<Geofence>,
    #[serde(default)]
    regions: Vec<Rectangle>,
}

const FENCES_TOML: &str = r#"
depot = { latitude = 51.5074, longitude = -0.1278 }

[[fence]]
name = "inner"
area = { center = { latitude = 0, longitude = 0 }, radius = 200 }

[[fence]]
name = "outer"
area = { center = { latitude = 0.0, longitude = "0.5 degrees" }, radius = "250 miles" }

[[fence]]
name = "tagged"
area = { center = { latitude = { value = 0.01, unit = "radians" }, longitude = 0 }, radius = { value = 2, unit = "degrees" } }

[[regions]]
corners = [
    { latitude = 2, longitude = 0 },
    { latitude = 0, longitude = 2 },
]
"#;

// ─────────────────────────────────────────────────────────────────────────────
// TOML
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_geofence_toml() {
    let config: FenceConfig = toml::from_str(FENCES_TOML).unwrap();

    assert_eq!(config.depot.latitude(), Measure::degrees(51.5074));
    assert_eq!(config.fence.len(), 3);

    let inner = &config.fence[0];
    assert_eq!(inner.name, "inner");
    assert_eq!(inner.area.radius(), Measure::kilometers(200.0));
    assert!(inner.area.contains(&Point::new(1, 1).unwrap()));
    assert!(!inner.area.contains(&Point::new(2, 2).unwrap()));

    let outer = &config.fence[1];
    assert_eq!(outer.area.center().longitude(), Measure::degrees(0.5));
    assert_abs_diff_eq!(outer.area.radius().value(), 402.336, epsilon = 1e-9);

    let tagged = &config.fence[2];
    assert_eq!(tagged.area.center().latitude().unit(), Unit::Degree);
    assert_abs_diff_eq!(tagged.area.center().latitude().value(), 0.5729577951308232, epsilon = 1e-12);
    assert_abs_diff_eq!(tagged.area.radius().value(), 222.3901604670658, epsilon = 1e-9);

    let region = &config.regions[0];
    assert_eq!(region.min(), Point::new(0, 0).unwrap());
    assert_eq!(region.max(), Point::new(2, 2).unwrap());
}

#[test]
fn toml_rejects_out_of_range_point() {
    let bad = r#"
depot = { latitude = 91, longitude = 0 }
fence = []
"#;
    let err = toml::from_str::<FenceConfig>(bad).unwrap_err();
    assert!(err.to_string().contains("Invalid coordinate"));
}

#[test]
fn toml_rejects_unknown_unit() {
    let bad = r#"
depot = { latitude = 0, longitude = 0 }

[[fence]]
name = "odd"
area = { center = { latitude = 0, longitude = 0 }, radius = "3 leagues" }
"#;
    let err = toml::from_str::<FenceConfig>(bad).unwrap_err();
    assert!(err.to_string().contains("Unknown unit 'league'"));
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn point_json_roundtrip() {
    let original = Point::new(30.5, -12.25).unwrap();
    let json = serde_json::to_string(&original).unwrap();
    assert_eq!(
        json,
        r#"{"latitude":{"value":30.5,"unit":"degree"},"longitude":{"value":-12.25,"unit":"degree"}}"#
    );
    let restored: Point = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn point_json_converts_tagged_coordinates() {
    let json = r#"{"latitude": {"value": 0.5, "unit": "radians"}, "longitude": "100 kilometers"}"#;
    let point: Point = serde_json::from_str(json).unwrap();
    assert_abs_diff_eq!(point.latitude().value(), 28.64788975654116, epsilon = 1e-12);
    assert_abs_diff_eq!(point.longitude().value(), 0.899320363724538, epsilon = 1e-12);
}

#[test]
fn point_json_accepts_bare_numbers() {
    let point: Point = serde_json::from_str(r#"{"latitude": 10, "longitude": -20.5}"#).unwrap();
    assert_eq!(point, Point::new(10, -20.5).unwrap());
}

#[test]
fn point_json_rejects_out_of_range() {
    let result = serde_json::from_str::<Point>(r#"{"latitude": 0, "longitude": 181}"#);
    assert!(result.unwrap_err().to_string().contains("Invalid coordinate"));
}

#[test]
fn line_json_is_rebuilt_from_endpoints() {
    let line = Line::from_point(Point::new(0, 0).unwrap(), 45, 100).unwrap();
    let json = serde_json::to_string(&line).unwrap();
    assert!(json.contains("\"bearing\""));
    assert!(json.contains("\"distance\""));

    let restored: Line = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.origin(), line.origin());
    assert_eq!(restored.terminus(), line.terminus());
    assert_abs_diff_eq!(restored.bearing().value(), 45.0, epsilon = 1e-9);
    assert_abs_diff_eq!(restored.distance().value(), 100.0, epsilon = 1e-9);
}

#[test]
fn rectangle_json_recomputes_dimensions() {
    let json = r#"{"corners": [{"latitude": 1, "longitude": 0}, {"latitude": 0, "longitude": 1}]}"#;
    let rect: Rectangle = serde_json::from_str(json).unwrap();
    assert_eq!(rect.min(), Point::new(0, 0).unwrap());
    assert_abs_diff_eq!(rect.height().value(), 111.1950802335329, epsilon = 1e-9);

    let restored: Rectangle = serde_json::from_str(&serde_json::to_string(&rect).unwrap()).unwrap();
    assert_eq!(restored, rect);
}

#[test]
fn circle_json_roundtrip() {
    let circle = Circle::new(Point::new(45, 7).unwrap(), Measure::miles(10.0)).unwrap();
    let json = serde_json::to_string(&circle).unwrap();
    let restored: Circle = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, circle);
}
