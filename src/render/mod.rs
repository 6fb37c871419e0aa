//! Output of option trees as JSON, JavaScript literals and page snippets.

pub mod script;
pub mod script_config;
pub mod stock_chart;

pub use script::{to_js_literal, to_json_pretty, to_json_string, to_json_value};
pub use script_config::{ChartConstructor, ReadyHandler, ScriptConfig};
pub use stock_chart::StockChart;
