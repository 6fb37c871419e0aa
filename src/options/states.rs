//! Per-state series options (`plotOptions.<type>.states`).
//!
//! Only the hover state is configurable for these series types; the library
//! applies its own defaults to anything left unset.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Number};

/// A wrapper object for all the series options in specific states.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOptionsArearangeStates {
    /// Options for the hovered series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<PlotOptionsArearangeStatesHover>,
}

/// A wrapper object for all the series options in specific states.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOptionsAreasplineStates {
    /// Options for the hovered series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<PlotOptionsAreasplineStatesHover>,
}

/// A wrapper object for all the series options in specific states.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOptionsGaugeStates {
    /// Options for the hovered series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<PlotOptionsGaugeStatesHover>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOptionsArearangeStatesHover {
    /// Enable separate styles for the hovered series. Library default: `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Pixel width of the graph line while hovered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<Number>,
    /// Pixels added to the normal line width while hovered. Library default: `1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width_plus: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<StatesHoverMarker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halo: Option<StatesHoverHalo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOptionsAreasplineStatesHover {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width_plus: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<StatesHoverMarker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halo: Option<StatesHoverHalo>,
}

/// Gauges have no graph line; hover only toggles and brightens the dial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOptionsGaugeStatesHover {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// How much to brighten the point on hover, in `[-1, 1]`. Library default: `0.1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<Number>,
}

/// Point marker appearance while its series is hovered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatesHoverMarker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width_plus: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_plus: Option<Number>,
}

/// The translucent halo drawn around a hovered point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatesHoverHalo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Number>,
    /// SVG attributes passed straight to the halo element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<serde_json::Map<String, serde_json::Value>>,
}
