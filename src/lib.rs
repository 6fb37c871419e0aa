//! highstock-options: typed option trees for the Highstock/Highcharts
//! JavaScript charting library.
//!
//! Each type mirrors one node of the library's configuration schema. Trees are
//! assembled in Rust, then handed to the library as JSON or as a JavaScript
//! literal carrying raw event handlers.

pub mod core;
pub mod error;
pub mod options;
pub mod render;
pub mod telemetry;

pub use crate::core::{Color, JsFunction, Number};
pub use error::{OptionsError, OptionsResult};
pub use options::ChartOptions;
pub use render::{ScriptConfig, StockChart};
