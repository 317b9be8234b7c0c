//! Rich-text editor configuration: the styles drop-down and its formats.

use serde::Serialize;
use serde_json::{Map, Value};

/// One entry in the editor's styles drop-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, schemars::JsonSchema)]
pub struct StyleFormat {
    /// Label shown in the drop-down.
    pub title: &'static str,
    /// Block selector the format applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<&'static str>,
    /// Inline element the format wraps content in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<&'static str>,
    /// Classes the format adds.
    pub classes: &'static str,
    /// Whether the format wraps the selection in a container.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub wrapper: bool,
}

/// The theme's style formats, in drop-down order.
pub fn style_formats() -> Vec<StyleFormat> {
    vec![
        StyleFormat {
            title: "Intro Text",
            selector: Some("p"),
            inline: None,
            classes: "intro",
            wrapper: false,
        },
        StyleFormat {
            title: "Dropcap",
            selector: None,
            inline: Some("span"),
            classes: "dropcap",
            wrapper: false,
        },
        StyleFormat {
            title: "Highlight",
            selector: None,
            inline: Some("span"),
            classes: "highlight",
            wrapper: false,
        },
        StyleFormat {
            title: "Two Columns",
            selector: Some("p"),
            inline: None,
            classes: "twocolumn",
            wrapper: true,
        },
    ]
}

/// Prepend the styles drop-down to the editor's button row.
pub fn editor_buttons(mut buttons: Vec<String>) -> Vec<String> {
    buttons.insert(0, "styleselect".to_string());
    buttons
}

/// Inject the style formats into an editor settings map.
///
/// The editor expects `style_formats` as a JSON-encoded string, not a
/// nested object.
pub fn apply_style_formats(mut settings: Map<String, Value>) -> serde_json::Result<Map<String, Value>> {
    let encoded = serde_json::to_string(&style_formats())?;
    settings.insert("style_formats".to_string(), Value::String(encoded));
    Ok(settings)
}
