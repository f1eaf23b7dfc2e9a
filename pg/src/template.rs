//! Step templates and flattening
//!
//! A template file looks like:
//!
//! ```text
//! {
//!   "steps": [
//!     { "contexto": "...", "tarefa": "Create {nomeEndpoint}" },
//!     { "regras": ["a", "b"], "limite": 3 }
//!   ]
//! }
//! ```
//!
//! Flattening turns it into plain text, one `===== Etapa N =====` section per
//! step and a `# field` header above each non-blank value.

use serde_json::{Map, Number, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{PromptGenError, Result};

/// Line separator used when joining flattened output
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// A single step field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Number),
    Bool(bool),
    Null,
    /// Arrays and objects, rendered as compact JSON
    Nested(Value),
}

impl FieldValue {
    /// Display form used in the flattened prompt
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Null => String::new(),
            Self::Nested(v) => v.to_string(),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            Value::Number(n) => Self::Number(n),
            Value::Bool(b) => Self::Bool(b),
            Value::Null => Self::Null,
            nested @ (Value::Array(_) | Value::Object(_)) => Self::Nested(nested),
        }
    }
}

/// One ordered group of named fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Step {
    pub fields: Vec<(String, FieldValue)>,
}

impl Step {
    fn from_map(map: Map<String, Value>) -> Self {
        Self {
            fields: map.into_iter().map(|(name, value)| (name, value.into())).collect(),
        }
    }
}

/// A parsed template: a non-empty, ordered list of steps
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub steps: Vec<Step>,
}

impl Template {
    /// Read and parse the template file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(?path, "Template::load: called");

        let content = fs::read_to_string(path).map_err(|e| PromptGenError::io(path, e))?;
        let template = Self::parse(&content, path)?;

        info!("Loaded template {} with {} steps", path.display(), template.steps.len());
        Ok(template)
    }

    /// Parse template JSON; `origin` is only used in error messages
    pub fn parse(content: &str, origin: impl AsRef<Path>) -> Result<Self> {
        let origin = origin.as_ref();
        let shape_err = |reason: &str| PromptGenError::InvalidShape {
            path: origin.to_path_buf(),
            reason: reason.to_string(),
        };

        let value: Value = serde_json::from_str(content).map_err(|source| PromptGenError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        let Value::Object(root) = value else {
            return Err(shape_err("expected a JSON object"));
        };

        // Last matching key wins, like the config loader
        let steps = root
            .into_iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case("steps"))
            .map(|(_, v)| v)
            .last()
            .unwrap_or(Value::Null);

        let items = match steps {
            Value::Null => Vec::new(),
            Value::Array(items) => items,
            _ => return Err(shape_err("'steps' must be an array")),
        };

        if items.is_empty() {
            return Err(PromptGenError::EmptyTemplate {
                path: origin.to_path_buf(),
            });
        }

        let steps = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(map) => Ok(Step::from_map(map)),
                _ => Err(shape_err(&format!("step {} is not an object", i + 1))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { steps })
    }

    /// Flatten all steps into a single text block
    pub fn flatten(&self) -> String {
        debug!(steps = self.steps.len(), "Template::flatten: called");
        let mut lines: Vec<String> = Vec::new();

        for (i, step) in self.steps.iter().enumerate() {
            lines.push(format!("===== Etapa {} =====", i + 1));

            for (name, value) in &step.fields {
                let text = value.to_display_string();
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    continue;
                }
                lines.push(format!("# {}", name));
                lines.push(trimmed.to_string());
                lines.push(String::new());
            }

            lines.push(String::new());
        }

        lines.join(LINE_ENDING)
    }
}

/// Load a template file and flatten it in one go
pub fn flatten_file(path: impl AsRef<Path>) -> Result<String> {
    Template::load(path).map(|t| t.flatten())
}
