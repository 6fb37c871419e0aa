use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use crate::core::{Color, Number};
use crate::error::{OptionsError, OptionsResult};

use super::events::PlotOptionsPyramidEvents;
use super::point::{PlotOptionsColumnrangePoint, PlotOptionsSolidgaugePoint};
use super::series_data::DataPoint;
use super::states::{PlotOptionsArearangeStates, PlotOptionsAreasplineStates, PlotOptionsGaugeStates};

/// Series types the crate models options for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Line,
    Spline,
    Area,
    Areaspline,
    Arearange,
    Column,
    Columnrange,
    Candlestick,
    Ohlc,
    Scatter,
    Pie,
    Pyramid,
    Gauge,
    Solidgauge,
    Waterfall,
}

impl SeriesType {
    /// Range series take `[x, low, high]` points instead of bare y values.
    #[must_use]
    pub fn is_range(self) -> bool {
        matches!(self, Self::Arearange | Self::Columnrange)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArearangeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<PlotOptionsArearangeStates>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreasplineOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<PlotOptionsAreasplineStates>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<PlotOptionsGaugeStates>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PyramidOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<PlotOptionsPyramidEvents>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnrangeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<PlotOptionsColumnrangePoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidgaugeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<PlotOptionsSolidgaugePoint>,
}

/// `plotOptions`: defaults applied to every series of a given type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arearange: Option<ArearangeOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub areaspline: Option<AreasplineOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gauge: Option<GaugeOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pyramid: Option<PyramidOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columnrange: Option<ColumnrangeOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solidgauge: Option<SolidgaugeOptions>,
}

/// One entry of the top-level `series` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub series_type: Option<SeriesType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<DataPoint>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, series_type: SeriesType) -> Self {
        self.series_type = Some(series_type);
        self
    }

    #[must_use]
    pub fn with_data<I, P>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<DataPoint>,
    {
        self.data = data.into_iter().map(Into::into).collect();
        self
    }

    /// Checks every point, reporting the first failure with its index.
    ///
    /// Bare y values are rejected for range series since the library would
    /// silently draw nothing for them.
    pub fn validate(&self) -> OptionsResult<()> {
        let is_range = self.series_type.is_some_and(SeriesType::is_range);
        for (index, point) in self.data.iter().enumerate() {
            point.validate().map_err(|err| {
                OptionsError::InvalidData(format!(
                    "series `{}` point {index}: {err}",
                    self.label()
                ))
            })?;
            if is_range && matches!(point, DataPoint::Y(_) | DataPoint::Named(_, _)) {
                return Err(OptionsError::InvalidData(format!(
                    "series `{}` point {index}: range series need low and high values",
                    self.label()
                )));
            }
        }
        Ok(())
    }

    fn label(&self) -> &str {
        self.id
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("<unnamed>")
    }
}

/// The `chart` node: container and canvas settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSettings {
    /// Id of the HTML element the chart renders into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_to: Option<String>,
    /// Default series type for series without their own `type`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub default_series_type: Option<SeriesType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

const MODELED_ROOT_KEYS: [&str; 4] = ["chart", "title", "plotOptions", "series"];

/// Root of the options tree handed to the chart constructor.
///
/// `extra` keys naming a modeled node (`chart`, `title`, `plotOptions`,
/// `series`) are never written; the typed field always wins.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_options: Option<PlotOptions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<Series>,
    /// Unmodeled top-level nodes (`xAxis`, `rangeSelector`, ...), written
    /// after the modeled ones in insertion order.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl ChartOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.title = Some(Title {
            text: Some(text.into()),
        });
        self
    }

    #[must_use]
    pub fn with_plot_options(mut self, plot_options: PlotOptions) -> Self {
        self.plot_options = Some(plot_options);
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Sets a raw top-level option, e.g. `("rangeSelector", json!({ "selected": 1 }))`.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn validate(&self) -> OptionsResult<()> {
        if let Some(color) = self.chart.as_ref().and_then(|chart| chart.background_color) {
            color.validate()?;
        }
        for series in &self.series {
            series.validate()?;
        }
        Ok(())
    }
}

impl Serialize for ChartOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(chart) = &self.chart {
            map.serialize_entry("chart", chart)?;
        }
        if let Some(title) = &self.title {
            map.serialize_entry("title", title)?;
        }
        if let Some(plot_options) = &self.plot_options {
            map.serialize_entry("plotOptions", plot_options)?;
        }
        if !self.series.is_empty() {
            map.serialize_entry("series", &self.series)?;
        }
        for (key, value) in &self.extra {
            if MODELED_ROOT_KEYS.contains(&key.as_str()) {
                warn!(key = key.as_str(), "dropping extra option shadowing a modeled key");
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
