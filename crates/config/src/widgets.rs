//! Loading and validation of the JSON widget list.

use crate::schema::{IconSpec, LabelSpec, Size, WidgetSpec};
use dash_core::ConfigError;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Largest accepted cell width or height, in pixels.
pub const MAX_CELL_EXTENT: u32 = 16_384;

/// Loosely-typed view of one entry, before kind-specific validation.
#[derive(Debug, Deserialize)]
struct RawWidget {
    #[serde(rename = "type")]
    kind:      Option<String>,
    size:      Option<Value>,
    icon_path: Option<PathBuf>,
    command:   Option<String>,
    tooltip:   Option<String>,
    text:      Option<String>,
}

/// Read and validate the widget list at `path`.
///
/// Unlike the stylesheet there is no fallback here: a dashboard without its
/// widget list has nothing to show.
pub fn load_widgets(path: impl AsRef<Path>) -> Result<Vec<WidgetSpec>, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let specs = parse_widgets(&raw)?;
    tracing::info!("Loaded {} widget(s) from '{}'", specs.len(), path.display());
    Ok(specs)
}

/// Parse a widget list from JSON text.
pub fn parse_widgets(raw: &str) -> Result<Vec<WidgetSpec>, ConfigError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| ConfigError::Parse {
        line:    e.line(),
        column:  e.column(),
        message: e.to_string(),
    })?;

    let Value::Array(entries) = value else {
        return Err(ConfigError::NotAList);
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| validate(index, entry))
        .collect()
}

fn validate(index: usize, entry: Value) -> Result<WidgetSpec, ConfigError> {
    let raw: RawWidget =
        serde_json::from_value(entry).map_err(|e| ConfigError::InvalidField {
            index,
            field: "entry",
            message: e.to_string(),
        })?;

    let kind = raw.kind.ok_or(ConfigError::MissingField { index, field: "type" })?;
    let size = parse_size(index, raw.size)?;

    match kind.as_str() {
        "icon" => Ok(WidgetSpec::Icon(IconSpec {
            size,
            icon_path: raw
                .icon_path
                .ok_or(ConfigError::MissingField { index, field: "icon_path" })?,
            command: raw.command.unwrap_or_default(),
            tooltip: raw.tooltip.unwrap_or_default(),
        })),
        "label" => Ok(WidgetSpec::Label(LabelSpec {
            size,
            text: raw.text.unwrap_or_else(|| format!("Widget {}", index + 1)),
        })),
        _ => Err(ConfigError::UnknownType { index, kind }),
    }
}

fn parse_size(index: usize, size: Option<Value>) -> Result<Size, ConfigError> {
    let size = size.ok_or(ConfigError::MissingField { index, field: "size" })?;
    let [width, height] = serde_json::from_value::<[u32; 2]>(size).map_err(|e| {
        ConfigError::InvalidField {
            index,
            field: "size",
            message: e.to_string(),
        }
    })?;

    if width > MAX_CELL_EXTENT || height > MAX_CELL_EXTENT {
        return Err(ConfigError::InvalidField {
            index,
            field: "size",
            message: format!("{width}x{height} exceeds {MAX_CELL_EXTENT}px"),
        });
    }
    Ok(Size::new(width, height))
}
