use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::core::function::{LiteralModeGuard, PLACEHOLDER_CHAR, RegisteredFunctions};
use crate::error::OptionsResult;

use super::ScriptConfig;

/// Serializes options as plain JSON. Function handlers become strings.
pub fn to_json_value<T: Serialize + ?Sized>(options: &T) -> OptionsResult<Value> {
    Ok(serde_json::to_value(options)?)
}

pub fn to_json_string<T: Serialize + ?Sized>(options: &T) -> OptionsResult<String> {
    Ok(serde_json::to_string(options)?)
}

pub fn to_json_pretty<T: Serialize + ?Sized>(options: &T) -> OptionsResult<String> {
    Ok(serde_json::to_string_pretty(options)?)
}

/// Writes options as a JavaScript object literal.
///
/// Identical to JSON except that [`crate::core::JsFunction`] values are emitted
/// verbatim. Every other string stays quoted, with `</` escaped so the literal
/// can sit inside a `<script>` element.
pub fn to_js_literal<T: Serialize + ?Sized>(
    options: &T,
    config: &ScriptConfig,
) -> OptionsResult<String> {
    config.validate()?;
    let (value, functions) = {
        let literal_mode = LiteralModeGuard::enter();
        let value = serde_json::to_value(options)?;
        (value, literal_mode.take_functions())
    };

    let mut writer = LiteralWriter {
        out: String::new(),
        pretty: config.pretty,
        indent_width: config.indent_width,
        functions,
    };
    writer.write_value(&value, 0)?;
    trace!(
        bytes = writer.out.len(),
        functions = writer.functions.len(),
        pretty = config.pretty,
        "rendered js literal"
    );
    Ok(writer.out)
}

struct LiteralWriter {
    out: String,
    pretty: bool,
    indent_width: usize,
    functions: RegisteredFunctions,
}

impl LiteralWriter {
    fn write_value(&mut self, value: &Value, depth: usize) -> OptionsResult<()> {
        match value {
            Value::String(text) => self.write_string(text)?,
            Value::Array(items) => {
                if items.is_empty() {
                    self.out.push_str("[]");
                    return Ok(());
                }
                self.out.push('[');
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        self.out.push(',');
                    }
                    self.newline(depth + 1);
                    self.write_value(item, depth + 1)?;
                }
                self.newline(depth);
                self.out.push(']');
            }
            Value::Object(map) => {
                if map.is_empty() {
                    self.out.push_str("{}");
                    return Ok(());
                }
                self.out.push('{');
                for (index, (key, item)) in map.iter().enumerate() {
                    if index > 0 {
                        self.out.push(',');
                    }
                    self.newline(depth + 1);
                    self.write_plain_string(key)?;
                    self.out.push(':');
                    if self.pretty {
                        self.out.push(' ');
                    }
                    self.write_value(item, depth + 1)?;
                }
                self.newline(depth);
                self.out.push('}');
            }
            scalar => self.out.push_str(&serde_json::to_string(scalar)?),
        }
        Ok(())
    }

    fn write_string(&mut self, text: &str) -> OptionsResult<()> {
        if let Some(body) = self.functions.resolve(text) {
            self.out.push_str(body);
            return Ok(());
        }
        self.write_plain_string(text)
    }

    fn write_plain_string(&mut self, text: &str) -> OptionsResult<()> {
        let quoted = serde_json::to_string(text)?.replace("</", "<\\/");
        if quoted.contains(PLACEHOLDER_CHAR) {
            self.out
                .push_str(&quoted.replace(PLACEHOLDER_CHAR, "\\uf8ff"));
        } else {
            self.out.push_str(&quoted);
        }
        Ok(())
    }

    fn newline(&mut self, depth: usize) {
        if self.pretty {
            self.out.push('\n');
            self.out
                .extend(std::iter::repeat_n(' ', depth * self.indent_width));
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{to_js_literal, to_json_string};
    use crate::core::JsFunction;
    use crate::options::PlotOptionsPyramidEvents;
    use crate::render::ScriptConfig;

    #[test]
    fn functions_are_written_unquoted() {
        let events = PlotOptionsPyramidEvents {
            checkbox_click: Some(JsFunction::new("function(e) { return false; }")),
            ..Default::default()
        };
        let literal = to_js_literal(&events, &ScriptConfig::default()).expect("literal");
        assert_eq!(literal, r#"{"checkboxClick":function(e) { return false; }}"#);

        let json = to_json_string(&events).expect("json");
        assert_eq!(json, r#"{"checkboxClick":"function(e) { return false; }"}"#);
    }

    #[test]
    fn pretty_output_indents_nested_nodes() {
        let literal = to_js_literal(
            &json!({ "a": [1, 2], "b": {} }),
            &ScriptConfig::default().with_pretty(true),
        )
        .expect("literal");
        assert_eq!(literal, "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {}\n}");
    }

    #[test]
    fn lookalike_function_text_stays_quoted() {
        let literal = to_js_literal(
            &json!({ "text": "\u{F8FF}js:0000000000000000:0</script>" }),
            &ScriptConfig::default(),
        )
        .expect("literal");
        assert_eq!(literal, r#"{"text":"\uf8ffjs:0000000000000000:0<\/script>"}"#);
    }

    #[test]
    fn closing_script_tags_are_escaped() {
        let literal =
            to_js_literal(&json!({ "text": "</script>" }), &ScriptConfig::default()).expect("literal");
        assert_eq!(literal, r#"{"text":"<\/script>"}"#);
    }
}
