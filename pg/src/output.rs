//! Prompt file output

use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::PromptConfig;
use crate::error::{PromptGenError, Result};

/// Output file name for an endpoint
pub fn output_file_name(nome_endpoint: &str) -> String {
    format!("{}_Prompt.txt", nome_endpoint)
}

/// Write `prompt` to `{pastaDestino}/{nomeEndpoint}_Prompt.txt`, creating the
/// directory if needed and replacing any existing file. Returns the path written.
pub fn write_prompt(config: &PromptConfig, prompt: &str) -> Result<PathBuf> {
    let dir = config.destination();
    debug!(?dir, prompt_len = prompt.len(), "write_prompt: called");

    fs::create_dir_all(&dir).map_err(|e| PromptGenError::io(&dir, e))?;

    let path = dir.join(output_file_name(&config.nome_endpoint));
    // UTF-8 without BOM
    fs::write(&path, prompt.as_bytes()).map_err(|e| PromptGenError::io(&path, e))?;

    info!("Wrote prompt to {}", path.display());
    Ok(path)
}
