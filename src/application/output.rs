//! Serialized forms of a render result: SVG document, bare path data, JSON.

use std::borrow::Cow;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::application::services::RenderResult;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::format_number;

/// Output format for rendered curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Standalone SVG document
    #[default]
    Svg,
    /// SVG path data only
    Path,
    /// Render result as JSON
    Json,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    result: &'a RenderResult,
    path_data: String,
}

/// Serialize `result` in the requested format.
pub fn format_result(result: &RenderResult, format: OutputFormat) -> ApplicationResult<String> {
    match format {
        OutputFormat::Svg => Ok(to_svg(result)),
        OutputFormat::Path => Ok(result.path_data()),
        OutputFormat::Json => {
            let output = JsonOutput {
                result,
                path_data: result.path_data(),
            };
            serde_json::to_string_pretty(&output).map_err(|e| ApplicationError::OperationFailed {
                context: format!("serialize {} as json", result.curve),
                source: Box::new(e),
            })
        }
    }
}

/// Standalone SVG document with the viewport as `viewBox`.
pub fn to_svg(result: &RenderResult) -> String {
    let v = &result.viewport;
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" "#,
            r#"fill="none" stroke-linecap="square" stroke="{}" stroke-width="{}">"#,
            r#"<path d="{}"/></svg>"#
        ),
        format_number(v.x),
        format_number(v.y),
        format_number(v.width),
        format_number(v.height),
        escape_attr(&result.color),
        format_number(result.stroke_width),
        result.path_data(),
    )
}

/// Escape a value for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
