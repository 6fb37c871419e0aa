use tracing::debug;

use crate::error::{OptionsError, OptionsResult};
use crate::options::{ChartOptions, ChartSettings};

use super::{ReadyHandler, ScriptConfig, to_js_literal};

/// A chart bound to an HTML container, ready to be emitted into a page.
#[derive(Debug, Clone, PartialEq)]
pub struct StockChart {
    container_id: String,
    options: ChartOptions,
}

impl StockChart {
    pub fn new(container_id: impl Into<String>, options: ChartOptions) -> OptionsResult<Self> {
        let container_id = container_id.into();
        if container_id.is_empty()
            || container_id
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&'))
        {
            return Err(OptionsError::InvalidData(format!(
                "container id `{container_id}` must be non-empty and free of whitespace and markup characters"
            )));
        }
        Ok(Self {
            container_id,
            options,
        })
    }

    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut ChartOptions {
        &mut self.options
    }

    /// Options as handed to the constructor, with `chart.renderTo` pinned to
    /// the container.
    pub fn resolved_options(&self) -> OptionsResult<ChartOptions> {
        self.options.validate()?;
        let mut options = self.options.clone();
        let chart = options.chart.get_or_insert_with(ChartSettings::default);
        chart.render_to = Some(self.container_id.clone());
        Ok(options)
    }

    /// Initialisation script constructing the chart.
    pub fn to_script(&self, config: &ScriptConfig) -> OptionsResult<String> {
        let options = self.resolved_options()?;
        let literal = to_js_literal(&options, config)?;
        let constructor = config.constructor.js_name();

        let construct = match &config.variable_name {
            Some(name) => format!("{name} = new {constructor}({literal});"),
            None => format!("new {constructor}({literal});"),
        };
        let body = match config.ready_handler {
            ReadyHandler::Immediate => construct,
            ReadyHandler::DomContentLoaded => format!(
                "document.addEventListener('DOMContentLoaded', function() {{ {construct} }});"
            ),
            ReadyHandler::JQuery => format!("$(document).ready(function() {{ {construct} }});"),
        };
        let script = match &config.variable_name {
            Some(name) => format!("var {name};\n{body}"),
            None => body,
        };

        debug!(
            container = self.container_id.as_str(),
            series = options.series.len(),
            points = options.series.iter().map(|s| s.data.len()).sum::<usize>(),
            bytes = script.len(),
            "rendered chart script"
        );
        Ok(script)
    }

    /// Container element followed by the initialisation script.
    pub fn to_html(&self, config: &ScriptConfig) -> OptionsResult<String> {
        let script = self.to_script(config)?;
        Ok(format!(
            "<div id=\"{}\"></div>\n<script type=\"text/javascript\">\n{script}\n</script>",
            self.container_id
        ))
    }
}
