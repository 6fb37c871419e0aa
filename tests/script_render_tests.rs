use highstock_options::core::{Color, JsFunction, Number};
use highstock_options::options::{
    ChartOptions, ColumnrangeOptions, DataPoint, PlotOptions, PlotOptionsColumnrangePoint,
    PointEvents, Series, SeriesData, SeriesType,
};
use highstock_options::render::{ChartConstructor, ReadyHandler, ScriptConfig, StockChart};
use serde_json::json;

fn sample_options() -> ChartOptions {
    ChartOptions::new()
        .with_title("Temperature range")
        .with_plot_options(PlotOptions {
            columnrange: Some(ColumnrangeOptions {
                point: Some(PlotOptionsColumnrangePoint {
                    events: Some(PointEvents {
                        click: Some(JsFunction::new("function() { alert(this.low); }")),
                        ..Default::default()
                    }),
                }),
            }),
            ..Default::default()
        })
        .with_series(
            Series::new("Daily")
                .with_type(SeriesType::Columnrange)
                .with_data([
                    DataPoint::Range(Number::Int(0), Number::Float(-2.5), Number::Int(4)),
                    SeriesData::new()
                        .with_x(1)
                        .with_range(-1, 6)
                        .with_color(Color::rgba(200, 0, 0, 0.5))
                        .into(),
                ]),
        )
}

#[test]
fn immediate_script_without_variable_is_a_single_constructor_call() {
    let chart = StockChart::new("temps", ChartOptions::new()).expect("chart");
    let config = ScriptConfig::default()
        .with_ready_handler(ReadyHandler::Immediate)
        .with_variable_name(None);
    let script = chart.to_script(&config).expect("script");
    assert_eq!(
        script,
        r#"new Highcharts.StockChart({"chart":{"renderTo":"temps"}});"#
    );
}

#[test]
fn script_embeds_function_handlers_verbatim() {
    let chart = StockChart::new("temps", sample_options()).expect("chart");
    let script = chart.to_script(&ScriptConfig::default()).expect("script");

    assert!(script.starts_with("var chart;\ndocument.addEventListener('DOMContentLoaded'"));
    assert!(script.contains("chart = new Highcharts.StockChart({"));
    assert!(script.contains(r#""click":function() { alert(this.low); }"#));
    assert!(!script.contains(r#""function() {"#));
    assert!(script.contains(r#""color":"rgba(200, 0, 0, 0.5)""#));
    assert!(script.contains(r#""data":[[0,-2.5,4],{"#));
}

#[test]
fn jquery_handler_and_plain_constructor() {
    let chart = StockChart::new("temps", ChartOptions::new()).expect("chart");
    let config = ScriptConfig::default()
        .with_constructor(ChartConstructor::Chart)
        .with_ready_handler(ReadyHandler::JQuery)
        .with_variable_name(Some("temps".to_owned()));
    let script = chart.to_script(&config).expect("script");
    assert_eq!(
        script,
        "var temps;\n$(document).ready(function() { temps = new Highcharts.Chart({\"chart\":{\"renderTo\":\"temps\"}}); });"
    );
}

#[test]
fn html_wraps_container_and_script() {
    let chart = StockChart::new("temps", ChartOptions::new()).expect("chart");
    let html = chart.to_html(&ScriptConfig::default()).expect("html");
    assert!(html.starts_with("<div id=\"temps\"></div>\n<script type=\"text/javascript\">\n"));
    assert!(html.ends_with("\n</script>"));
}

#[test]
fn invalid_point_blocks_rendering() {
    let options = ChartOptions::new().with_series(
        Series::new("Broken").with_data([DataPoint::Y(Number::Float(f64::NAN))]),
    );
    let chart = StockChart::new("temps", options).expect("chart");
    let err = chart
        .to_script(&ScriptConfig::default())
        .expect_err("nan point");
    assert!(err.to_string().contains("series `Broken` point 0"));
}

#[test]
fn existing_chart_settings_are_kept_when_pinning_container() {
    let mut options = ChartOptions::new().with_extra("navigator", json!({ "enabled": false }));
    options.chart = Some(highstock_options::options::ChartSettings {
        render_to: Some("elsewhere".to_owned()),
        height: Some(Number::Int(400)),
        ..Default::default()
    });
    let chart = StockChart::new("temps", options).expect("chart");
    let resolved = chart.resolved_options().expect("resolved");
    let value = highstock_options::render::to_json_value(&resolved).expect("json");
    assert_eq!(
        value,
        json!({
            "chart": { "renderTo": "temps", "height": 400 },
            "navigator": { "enabled": false }
        })
    );
}

#[test]
fn plain_json_round_trips_through_options() {
    let options = sample_options();
    let json = highstock_options::render::to_json_pretty(&options).expect("json");
    let parsed: ChartOptions = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed, options);
}

#[test]
fn option_text_never_becomes_raw_script() {
    let options = ChartOptions::new()
        .with_title("\u{F8FF}js\u{F8FF}alert(1)")
        .with_series(Series::new("\u{F8FF}js\u{F8FF}</script><script>x()"));
    let chart = StockChart::new("temps", options).expect("chart");
    let html = chart.to_html(&ScriptConfig::default()).expect("html");

    assert!(html.contains(r#""title":{"text":"\uf8ffjs\uf8ffalert(1)"}"#));
    assert!(html.contains(r#""name":"\uf8ffjs\uf8ff<\/script><script>x()""#));
    assert_eq!(html.matches("</script>").count(), 1);
}

#[test]
fn handlers_and_lookalike_text_in_one_literal() {
    let options = sample_options().with_extra(
        "subtitle",
        json!({ "text": "\u{F8FF}js:0000000000000000:0" }),
    );
    let literal = highstock_options::render::to_js_literal(&options, &ScriptConfig::default())
        .expect("literal");
    assert!(literal.contains(r#""click":function() { alert(this.low); }"#));
    assert!(literal.contains(r#""subtitle":{"text":"\uf8ffjs:0000000000000000:0"}"#));
}
