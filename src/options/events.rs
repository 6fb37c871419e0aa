use serde::{Deserialize, Serialize};

use crate::core::JsFunction;

/// Series-level event handlers for pyramid charts (`plotOptions.pyramid.events`).
///
/// Every handler is raw JavaScript; see [`JsFunction`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOptionsPyramidEvents {
    /// Fires after the initial animation finishes, or immediately when
    /// animation is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_animate: Option<JsFunction>,
    /// Fires when the legend checkbox is clicked. `event.checked` holds the
    /// checkbox state; returning `false` keeps the selection unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkbox_click: Option<JsFunction>,
    /// Fires when the series is clicked. `event.point` is the nearest point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click: Option<JsFunction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<JsFunction>,
    /// Not applicable to pies; the legend item is per point there.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_item_click: Option<JsFunction>,
    /// Fires when the mouse leaves the graph. With `stickyTracking` it is
    /// delayed until another graph is entered or the plot area is left.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouse_out: Option<JsFunction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouse_over: Option<JsFunction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<JsFunction>,
}

/// Handlers shared by every per-point `events` node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointEvents {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click: Option<JsFunction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouse_out: Option<JsFunction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouse_over: Option<JsFunction>,
    /// Fires when the point is removed via `point.remove()`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove: Option<JsFunction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<JsFunction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unselect: Option<JsFunction>,
    /// Fires when the point is updated via `point.update()`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<JsFunction>,
}

pub type PlotOptionsColumnrangePointEvents = PointEvents;
pub type PlotOptionsSolidgaugePointEvents = PointEvents;
pub type SeriesDataEvents = PointEvents;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::PlotOptionsPyramidEvents;

    #[test]
    fn checkbox_click_uses_camel_case_key() {
        let events = PlotOptionsPyramidEvents {
            checkbox_click: Some("function(e) { return false; }".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&events).expect("json");
        assert_eq!(
            value,
            json!({ "checkboxClick": "function(e) { return false; }" })
        );
    }
}
