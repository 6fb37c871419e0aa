//! Option nodes of the library's configuration tree.
//!
//! Every property is optional; an unset property is left out of the output and
//! the library falls back to its own default.

pub mod chart;
pub mod events;
pub mod point;
pub mod series_data;
pub mod states;

pub use chart::{
    ArearangeOptions, AreasplineOptions, ChartOptions, ChartSettings, ColumnrangeOptions,
    GaugeOptions, PlotOptions, PyramidOptions, Series, SeriesType, SolidgaugeOptions, Title,
};
pub use events::{
    PlotOptionsColumnrangePointEvents, PlotOptionsPyramidEvents, PlotOptionsSolidgaugePointEvents,
    PointEvents, SeriesDataEvents,
};
pub use point::{PlotOptionsColumnrangePoint, PlotOptionsSolidgaugePoint};
pub use series_data::{DataPoint, SeriesData, SeriesDataMarker};
pub use states::{
    PlotOptionsArearangeStates, PlotOptionsArearangeStatesHover, PlotOptionsAreasplineStates,
    PlotOptionsAreasplineStatesHover, PlotOptionsGaugeStates, PlotOptionsGaugeStatesHover,
    StatesHoverHalo, StatesHoverMarker,
};
