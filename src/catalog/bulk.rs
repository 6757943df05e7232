use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{AppError, Context, Result};

/// Mark every preset in a bare-array list file as hidden, placing the
/// `isHidden` key directly after `name`. Returns the number of presets
/// rewritten.
pub fn hide_all(path: &Path) -> Result<usize> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preset list file {}", path.display()))?;
    let text = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    let value: Value = serde_json::from_str(text)
        .with_context(|| format!("Failed to parse preset list file {}", path.display()))?;
    let Value::Array(presets) = value else {
        return Err(AppError::message(format!(
            "preset list file {} must contain a top-level array",
            path.display()
        )));
    };

    let mut rewritten = Vec::with_capacity(presets.len());
    for preset in presets {
        let Value::Object(fields) = preset else {
            return Err(AppError::message(format!(
                "preset list file {} must contain only objects",
                path.display()
            )));
        };
        rewritten.push(Value::Object(hide_preset(fields)));
    }

    let count = rewritten.len();
    let json = serde_json::to_string_pretty(&rewritten)
        .context("Failed to serialize preset list")?;
    super::write_replacing(path, &json).map_err(|source| AppError::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(count)
}

fn hide_preset(fields: Map<String, Value>) -> Map<String, Value> {
    let mut ordered = Map::new();
    for (key, value) in fields {
        if key == "name" {
            ordered.insert("name".to_string(), value);
            ordered.insert("isHidden".to_string(), Value::Bool(true));
        } else if key != "isHidden" {
            ordered.insert(key, value);
        }
    }
    ordered
}
