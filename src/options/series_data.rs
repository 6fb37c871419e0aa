use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{Color, Number};
use crate::error::{OptionsError, OptionsResult};

use super::events::SeriesDataEvents;

/// One point configuration object inside `series.data`.
///
/// Range series read `low`/`high` instead of `y`. Line-like series need their
/// data sorted by x for tooltip interpolation; column and scatter series do not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesData {
    /// Individual color for the point. Defaults to the global `colors` array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Individual data label, same shape as `plotOptions.series.dataLabels`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_labels: Option<serde_json::Value>,
    /// The `id` of a series in `drilldown.series` to drill into from this point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drilldown: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<SeriesDataEvents>,
    /// Lets render-time code fetch the point with `chart.get()`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Waterfall only: summary column since the last intermediate sum. `y` is ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_intermediate_sum: Option<bool>,
    /// Waterfall only: total across the whole series. `y` is ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_sum: Option<bool>,
    /// Pies only: sequential index of the slice in the legend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_index: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<SeriesDataMarker>,
    /// Shown in the legend, tooltip and data label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Pies only: draw the slice offset from the center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sliced: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<Number>,
}

impl SeriesData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_x(mut self, x: impl Into<Number>) -> Self {
        self.x = Some(x.into());
        self
    }

    #[must_use]
    pub fn with_y(mut self, y: impl Into<Number>) -> Self {
        self.y = Some(y.into());
        self
    }

    #[must_use]
    pub fn with_range(mut self, low: impl Into<Number>, high: impl Into<Number>) -> Self {
        self.low = Some(low.into());
        self.high = Some(high.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_events(mut self, events: SeriesDataEvents) -> Self {
        self.events = Some(events);
        self
    }

    pub fn validate(&self) -> OptionsResult<()> {
        for (value, name) in [
            (self.x, "x"),
            (self.y, "y"),
            (self.low, "low"),
            (self.high, "high"),
            (self.legend_index, "legendIndex"),
        ] {
            if let Some(number) = value {
                number.validate().map_err(|err| {
                    OptionsError::InvalidData(format!("point `{name}`: {err}"))
                })?;
            }
        }
        if let (Some(low), Some(high)) = (self.low, self.high) {
            if low.as_f64() > high.as_f64() {
                return Err(OptionsError::InvalidData(format!(
                    "point low {low} must be <= high {high}"
                )));
            }
        }
        if let Some(color) = self.color {
            color.validate()?;
        }
        if let Some(marker) = &self.marker {
            marker.validate()?;
        }
        if self.is_sum == Some(true) && self.is_intermediate_sum == Some(true) {
            warn!(
                id = self.id.as_deref().unwrap_or_default(),
                "point sets both isSum and isIntermediateSum; the library honours isSum"
            );
        }
        Ok(())
    }
}

/// Marker drawn for a single point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDataMarker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    /// Image markers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<Number>,
    /// A predefined shape (`circle`, `square`, `diamond`, `triangle`,
    /// `triangle-down`) or `url(...)` for an image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Image markers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Number>,
}

impl SeriesDataMarker {
    pub fn validate(&self) -> OptionsResult<()> {
        for color in [self.fill_color, self.line_color].into_iter().flatten() {
            color.validate()?;
        }
        for (value, name) in [
            (self.height, "height"),
            (self.line_width, "lineWidth"),
            (self.radius, "radius"),
            (self.width, "width"),
        ] {
            if let Some(number) = value {
                if !number.as_f64().is_finite() || number.as_f64() < 0.0 {
                    return Err(OptionsError::InvalidData(format!(
                        "marker `{name}` must be finite and >= 0"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// One entry of `series.data`, in any of the shapes the library accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataPoint {
    /// A bare y value; x is derived from `pointStart`/`pointInterval` or categories.
    Y(Number),
    /// `[name, y]`: the name labels the point and x is derived as for `Y`.
    Named(String, Number),
    /// `[x, low, high]` for range series.
    Range(Number, Number, Number),
    /// `[x, y]`, or `[low, high]` for range series relying on `pointStart`.
    Pair(Number, Number),
    /// A full point configuration object.
    Object(Box<SeriesData>),
}

impl DataPoint {
    pub fn validate(&self) -> OptionsResult<()> {
        match self {
            Self::Y(y) | Self::Named(_, y) => y.validate(),
            Self::Pair(a, b) => {
                a.validate()?;
                b.validate()
            }
            Self::Range(x, low, high) => {
                x.validate()?;
                low.validate()?;
                high.validate()?;
                if low.as_f64() > high.as_f64() {
                    return Err(OptionsError::InvalidData(format!(
                        "range point low {low} must be <= high {high}"
                    )));
                }
                Ok(())
            }
            Self::Object(data) => data.validate(),
        }
    }

    /// The x value when the point states one explicitly.
    #[must_use]
    pub fn explicit_x(&self) -> Option<Number> {
        match self {
            Self::Pair(x, _) | Self::Range(x, _, _) => Some(*x),
            Self::Object(data) => data.x,
            Self::Y(_) | Self::Named(_, _) => None,
        }
    }
}

impl From<Number> for DataPoint {
    fn from(y: Number) -> Self {
        Self::Y(y)
    }
}

impl From<f64> for DataPoint {
    fn from(y: f64) -> Self {
        Self::Y(Number::Float(y))
    }
}

impl From<i64> for DataPoint {
    fn from(y: i64) -> Self {
        Self::Y(Number::Int(y))
    }
}

impl From<SeriesData> for DataPoint {
    fn from(data: SeriesData) -> Self {
        Self::Object(Box::new(data))
    }
}
