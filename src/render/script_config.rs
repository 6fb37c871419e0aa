use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, OptionsResult};

const MAX_INDENT_WIDTH: usize = 16;

/// ECMAScript reserved words plus the strict-mode and global names that cannot
/// be bound with `var`.
const RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield", "arguments",
    "eval", "undefined", "NaN", "Infinity",
];

/// Which global constructor receives the options object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartConstructor {
    /// `Highcharts.StockChart`, with navigator and range selector.
    StockChart,
    /// `Highcharts.Chart`, the plain cartesian/polar chart.
    Chart,
}

impl ChartConstructor {
    #[must_use]
    pub fn js_name(self) -> &'static str {
        match self {
            Self::StockChart => "Highcharts.StockChart",
            Self::Chart => "Highcharts.Chart",
        }
    }
}

/// How the generated script waits for the page before constructing the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadyHandler {
    /// Run immediately; the container must already exist.
    Immediate,
    /// `document.addEventListener('DOMContentLoaded', ...)`.
    DomContentLoaded,
    /// `$(document).ready(...)`, for pages that already load jQuery.
    JQuery,
}

/// Output settings for JavaScript literal and script generation.
///
/// Serializable so host applications can keep it next to their other settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptConfig {
    #[serde(default = "default_constructor")]
    pub constructor: ChartConstructor,
    #[serde(default)]
    pub pretty: bool,
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    #[serde(default = "default_ready_handler")]
    pub ready_handler: ReadyHandler,
    /// Global variable the chart instance is assigned to, if any.
    #[serde(default = "default_variable_name")]
    pub variable_name: Option<String>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            constructor: default_constructor(),
            pretty: false,
            indent_width: default_indent_width(),
            ready_handler: default_ready_handler(),
            variable_name: default_variable_name(),
        }
    }
}

impl ScriptConfig {
    #[must_use]
    pub fn with_constructor(mut self, constructor: ChartConstructor) -> Self {
        self.constructor = constructor;
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[must_use]
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    #[must_use]
    pub fn with_ready_handler(mut self, ready_handler: ReadyHandler) -> Self {
        self.ready_handler = ready_handler;
        self
    }

    #[must_use]
    pub fn with_variable_name(mut self, variable_name: Option<String>) -> Self {
        self.variable_name = variable_name;
        self
    }

    pub fn validate(&self) -> OptionsResult<()> {
        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(OptionsError::InvalidData(format!(
                "indent width must be <= {MAX_INDENT_WIDTH}, got {}",
                self.indent_width
            )));
        }
        if let Some(name) = &self.variable_name {
            if !is_js_identifier(name) {
                return Err(OptionsError::InvalidData(format!(
                    "`{name}` is not a valid JavaScript identifier"
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> OptionsResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') && !RESERVED.contains(&name)
}

fn default_constructor() -> ChartConstructor {
    ChartConstructor::StockChart
}

fn default_indent_width() -> usize {
    2
}

fn default_ready_handler() -> ReadyHandler {
    ReadyHandler::DomContentLoaded
}

fn default_variable_name() -> Option<String> {
    Some("chart".to_owned())
}
