//! `script.yaml` schema and validation.
//!
//! Every bundle declares itself through a `script.yaml` at its root. The file is
//! untrusted input: it is parsed as a generic YAML value first and then checked
//! field by field, so a single error names the offending field.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Marker file that identifies a configuration bundle.
pub const SCRIPT_FILE: &str = "script.yaml";

/// Validated contents of a `script.yaml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptDefinition {
    pub name: Option<String>,
    pub description: String,
    pub bootstrap: String,
    pub criteria: Option<Vec<String>>,
    pub version: Option<String>,
}

/// First schema violation found in a `script.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptValidationError {
    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("field \"description\" is required and must be a non-empty string")]
    InvalidDescription,

    #[error("field \"bootstrap\" is required and must be a non-empty string")]
    InvalidBootstrap,

    #[error("field \"criteria\" must be a list of strings")]
    CriteriaNotSequence,

    #[error("every element of \"criteria\" must be a string")]
    CriteriaElementType,

    #[error("neither \"name\" nor the folder name contains a letter or digit")]
    UnusableName,
}

impl ScriptValidationError {
    /// Name of the field the error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ScriptValidationError::Malformed(_) => None,
            ScriptValidationError::InvalidDescription => Some("description"),
            ScriptValidationError::InvalidBootstrap => Some("bootstrap"),
            ScriptValidationError::CriteriaNotSequence
            | ScriptValidationError::CriteriaElementType => Some("criteria"),
            ScriptValidationError::UnusableName => Some("name"),
        }
    }
}

/// Parse and validate raw `script.yaml` text.
///
/// Checks run in a fixed order (document, `description`, `bootstrap`, `criteria`
/// shape, `criteria` elements) and only the first violation is returned.
/// Invalid `name`/`version` values are dropped rather than rejected.
pub fn validate_script(raw: &str) -> Result<ScriptDefinition, ScriptValidationError> {
    let document: Value = serde_yaml::from_str(raw)
        .map_err(|err| ScriptValidationError::Malformed(err.to_string()))?;

    let mapping = match &document {
        Value::Mapping(mapping) => mapping,
        Value::Null => {
            return Err(ScriptValidationError::Malformed("document is empty".to_string()));
        }
        _ => {
            return Err(ScriptValidationError::Malformed(
                "expected a mapping at the document root".to_string(),
            ));
        }
    };

    let description =
        non_empty_string(mapping, "description").ok_or(ScriptValidationError::InvalidDescription)?;
    let bootstrap =
        non_empty_string(mapping, "bootstrap").ok_or(ScriptValidationError::InvalidBootstrap)?;

    let criteria = match mapping.get("criteria") {
        None => None,
        Some(Value::Sequence(items)) => {
            let strings: Option<Vec<String>> =
                items.iter().map(|item| item.as_str().map(str::to_string)).collect();
            Some(strings.ok_or(ScriptValidationError::CriteriaElementType)?)
        }
        Some(_) => return Err(ScriptValidationError::CriteriaNotSequence),
    };

    Ok(ScriptDefinition {
        name: non_empty_string(mapping, "name"),
        description,
        bootstrap,
        criteria,
        version: non_empty_string(mapping, "version"),
    })
}

fn non_empty_string(mapping: &Mapping, key: &str) -> Option<String> {
    match mapping.get(key) {
        Some(Value::String(value)) if !value.is_empty() => Some(value.clone()),
        _ => None,
    }
}
