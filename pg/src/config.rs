//! Prompt configuration loading and validation
//!
//! The config file is a flat JSON object with six string fields. Field names
//! are matched case-insensitively, so `NomeController` and `nomecontroller`
//! both fill `nomeController`.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{PromptGenError, Result};

/// Default config location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "../../../prompt-config.json";

/// Canonical field names, in validation order
pub const FIELD_NAMES: [&str; 6] = [
    "nomeController",
    "tipoEndpoint",
    "nomeEndpoint",
    "nomeMetodo",
    "colunas",
    "pastaDestino",
];

/// Substitution values for a single prompt
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromptConfig {
    /// Controller name, replaces `{nomeController}`
    pub nome_controller: String,

    /// HTTP verb of the endpoint, normalized before replacing `{tipoEndpoint}`
    pub tipo_endpoint: String,

    /// Endpoint name, replaces `{nomeEndpoint}` and names the output file
    pub nome_endpoint: String,

    /// Method name, replaces `{nomeMetodo}`
    pub nome_metodo: String,

    /// Free-form column list, replaces `{colunas}`
    pub colunas: String,

    /// Directory the prompt file is written to
    pub pasta_destino: String,
}

impl PromptConfig {
    /// Read, parse and validate the config file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(?path, "PromptConfig::load: called");

        if !path.is_file() {
            return Err(PromptGenError::NotFound {
                what: "Config file",
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| PromptGenError::io(path, e))?;
        let config = Self::from_json(&content, path)?;

        info!("Loaded prompt config from: {}", path.display());
        Ok(config)
    }

    /// Parse and validate config JSON; `origin` is only used in error messages
    pub fn from_json(content: &str, origin: impl AsRef<Path>) -> Result<Self> {
        let origin = origin.as_ref();
        let parse_err = |source: serde_json::Error| PromptGenError::Parse {
            path: origin.to_path_buf(),
            source,
        };

        let value: Value = serde_json::from_str(content).map_err(parse_err)?;
        let Value::Object(map) = value else {
            return Err(PromptGenError::InvalidShape {
                path: origin.to_path_buf(),
                reason: "expected a JSON object".to_string(),
            });
        };

        let config: Self = serde_json::from_value(Value::Object(canonicalize_keys(map))).map_err(parse_err)?;
        config.validate()?;
        Ok(config)
    }

    /// Fail on the first field that is blank after trimming
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.fields() {
            if value.trim().is_empty() {
                debug!(%field, "PromptConfig::validate: blank field");
                return Err(PromptGenError::Validation { field });
            }
        }
        Ok(())
    }

    /// Destination directory as a path
    pub fn destination(&self) -> PathBuf {
        PathBuf::from(&self.pasta_destino)
    }

    fn fields(&self) -> [(&'static str, &str); 6] {
        [
            (FIELD_NAMES[0], self.nome_controller.as_str()),
            (FIELD_NAMES[1], self.tipo_endpoint.as_str()),
            (FIELD_NAMES[2], self.nome_endpoint.as_str()),
            (FIELD_NAMES[3], self.nome_metodo.as_str()),
            (FIELD_NAMES[4], self.colunas.as_str()),
            (FIELD_NAMES[5], self.pasta_destino.as_str()),
        ]
    }
}

/// Rename known keys to their canonical casing and drop everything else.
/// The last key matching a field wins; a null counts as an empty value so it
/// fails validation for that field.
fn canonicalize_keys(map: Map<String, Value>) -> Map<String, Value> {
    let mut canonical = Map::new();
    for (key, value) in map {
        if let Some(name) = FIELD_NAMES.iter().find(|name| name.eq_ignore_ascii_case(&key)) {
            let value = if value.is_null() { Value::String(String::new()) } else { value };
            canonical.insert(name.to_string(), value);
        }
    }
    canonical
}
