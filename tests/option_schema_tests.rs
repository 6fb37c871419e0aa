use highstock_options::core::{Color, JsFunction, Number};
use highstock_options::options::{
    PlotOptionsArearangeStates, PlotOptionsArearangeStatesHover, PlotOptionsAreasplineStates,
    PlotOptionsAreasplineStatesHover, PlotOptionsGaugeStates, PlotOptionsGaugeStatesHover,
    PlotOptionsPyramidEvents, PlotOptionsSolidgaugePoint, PointEvents, SeriesData,
    SeriesDataMarker, StatesHoverHalo, StatesHoverMarker,
};
use highstock_options::render::to_json_value;
use serde_json::json;

#[test]
fn default_nodes_serialize_empty() {
    assert_eq!(to_json_value(&PlotOptionsArearangeStates::default()).expect("json"), json!({}));
    assert_eq!(to_json_value(&PlotOptionsAreasplineStates::default()).expect("json"), json!({}));
    assert_eq!(to_json_value(&PlotOptionsPyramidEvents::default()).expect("json"), json!({}));
    assert_eq!(to_json_value(&PlotOptionsSolidgaugePoint::default()).expect("json"), json!({}));
    assert_eq!(to_json_value(&SeriesData::default()).expect("json"), json!({}));
}

#[test]
fn pyramid_events_use_library_keys() {
    let events = PlotOptionsPyramidEvents {
        after_animate: Some(JsFunction::new("a")),
        checkbox_click: Some(JsFunction::new("b")),
        click: Some(JsFunction::new("c")),
        hide: Some(JsFunction::new("d")),
        legend_item_click: Some(JsFunction::new("e")),
        mouse_out: Some(JsFunction::new("f")),
        mouse_over: Some(JsFunction::new("g")),
        show: Some(JsFunction::new("h")),
    };
    assert_eq!(
        to_json_value(&events).expect("json"),
        json!({
            "afterAnimate": "a",
            "checkboxClick": "b",
            "click": "c",
            "hide": "d",
            "legendItemClick": "e",
            "mouseOut": "f",
            "mouseOver": "g",
            "show": "h"
        })
    );
}

#[test]
fn area_hover_nests_marker_and_halo() {
    let states = PlotOptionsAreasplineStates {
        hover: Some(PlotOptionsAreasplineStatesHover {
            enabled: Some(true),
            marker: Some(StatesHoverMarker {
                fill_color: Some(Color::rgb(255, 255, 255)),
                radius_plus: Some(Number::Int(2)),
                ..Default::default()
            }),
            halo: Some(StatesHoverHalo {
                size: Some(Number::Int(10)),
                opacity: Some(Number::Float(0.25)),
                attributes: None,
            }),
            ..Default::default()
        }),
    };
    assert_eq!(
        to_json_value(&states).expect("json"),
        json!({
            "hover": {
                "enabled": true,
                "marker": { "fillColor": "#FFFFFF", "radiusPlus": 2 },
                "halo": { "opacity": 0.25, "size": 10 }
            }
        })
    );
}

#[test]
fn gauge_and_arearange_hover() {
    let gauge = PlotOptionsGaugeStates {
        hover: Some(PlotOptionsGaugeStatesHover {
            brightness: Some(Number::Float(0.2)),
            ..Default::default()
        }),
    };
    assert_eq!(
        to_json_value(&gauge).expect("json"),
        json!({ "hover": { "brightness": 0.2 } })
    );

    let arearange = PlotOptionsArearangeStates {
        hover: Some(PlotOptionsArearangeStatesHover {
            line_width: Some(Number::Int(3)),
            ..Default::default()
        }),
    };
    assert_eq!(
        to_json_value(&arearange).expect("json"),
        json!({ "hover": { "lineWidth": 3 } })
    );
}

#[test]
fn series_data_full_object() {
    let data = SeriesData {
        color: Some(Color::rgb(0xFF, 0x00, 0xFF)),
        data_labels: Some(json!({ "enabled": true })),
        drilldown: Some("fruits".to_owned()),
        events: Some(PointEvents {
            select: Some(JsFunction::new("function() {}")),
            ..Default::default()
        }),
        id: Some("p1".to_owned()),
        is_intermediate_sum: Some(false),
        is_sum: Some(true),
        legend_index: Some(Number::Int(2)),
        marker: Some(SeriesDataMarker {
            symbol: Some("triangle-down".to_owned()),
            ..Default::default()
        }),
        name: Some("Point 2".to_owned()),
        sliced: Some(true),
        x: Some(Number::Int(1)),
        y: Some(Number::Int(5)),
        low: None,
        high: None,
    };
    assert_eq!(
        to_json_value(&data).expect("json"),
        json!({
            "color": "#FF00FF",
            "dataLabels": { "enabled": true },
            "drilldown": "fruits",
            "events": { "select": "function() {}" },
            "id": "p1",
            "isIntermediateSum": false,
            "isSum": true,
            "legendIndex": 2,
            "marker": { "symbol": "triangle-down" },
            "name": "Point 2",
            "sliced": true,
            "x": 1,
            "y": 5
        })
    );
}

#[test]
fn invalid_color_fails_serialization() {
    let data = SeriesData::new().with_color(Color::rgba(0, 0, 0, 3.0));
    assert!(to_json_value(&data).is_err());
    assert!(data.validate().is_err());
}

#[test]
fn colors_parse_from_library_strings() {
    let marker: SeriesDataMarker =
        serde_json::from_value(json!({ "fillColor": "#abc", "lineColor": "rgba(1, 2, 3, 0.5)" }))
            .expect("marker");
    assert_eq!(marker.fill_color, Some(Color::rgb(0xAA, 0xBB, 0xCC)));
    assert_eq!(marker.line_color, Some(Color::rgba(1, 2, 3, 0.5)));
}

#[test]
fn typed_root_nodes_win_over_extra_keys() {
    use highstock_options::options::ChartOptions;
    use highstock_options::render::{ScriptConfig, to_js_literal, to_json_string};

    let options = ChartOptions::new()
        .with_title("Typed")
        .with_extra("title", json!({ "text": "Extra" }))
        .with_extra("navigator", json!({ "enabled": true }));

    assert_eq!(
        to_json_string(&options).expect("json"),
        r#"{"title":{"text":"Typed"},"navigator":{"enabled":true}}"#
    );
    assert_eq!(
        to_js_literal(&options, &ScriptConfig::default()).expect("literal"),
        r#"{"title":{"text":"Typed"},"navigator":{"enabled":true}}"#
    );
}
