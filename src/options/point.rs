use serde::{Deserialize, Serialize};

use super::events::{PlotOptionsColumnrangePointEvents, PlotOptionsSolidgaugePointEvents};

/// Properties for each single point of a column range series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOptionsColumnrangePoint {
    /// Events for each single point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<PlotOptionsColumnrangePointEvents>,
}

/// Properties for each single point of a solid gauge series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOptionsSolidgaugePoint {
    /// Events for each single point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<PlotOptionsSolidgaugePointEvents>,
}
