//! The end-to-end generation pass

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::builder::build_prompt;
use crate::config::PromptConfig;
use crate::error::Result;
use crate::layout::Layout;
use crate::output::write_prompt;
use crate::selector::{Console, select_template};
use crate::template::flatten_file;

/// Load config, ask for a template, render it and write the prompt file.
///
/// Returns the path of the written prompt.
pub fn generate<R: BufRead, W: Write>(
    config_path: &Path,
    layout: &Layout,
    console: &mut Console<R, W>,
) -> Result<PathBuf> {
    let config = PromptConfig::load(config_path)?;
    let template_path = select_template(layout, console)?;
    let template = flatten_file(&template_path)?;
    let prompt = build_prompt(&config, &template);
    let path = write_prompt(&config, &prompt)?;

    info!(endpoint = %config.nome_endpoint, "Prompt generated");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptGenError;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        temp: TempDir,
        config_path: PathBuf,
        layout: Layout,
    }

    fn fixture() -> Fixture {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("out");
        let config = serde_json::json!({
            "nomeController": "User",
            "tipoEndpoint": "post",
            "nomeEndpoint": "CreateUser",
            "nomeMetodo": "Create",
            "colunas": "id,name",
            "pastaDestino": out.to_string_lossy(),
        });
        let config_path = temp.path().join("prompt-config.json");
        fs::write(&config_path, config.to_string()).unwrap();

        let template_dir = temp.path().join("Template");
        fs::create_dir(&template_dir).unwrap();
        fs::write(
            template_dir.join("a-crud.json"),
            r#"{"steps": [{"body": "{tipoEndpoint} {nomeEndpoint}: {colunas}", "empty": ""}, {"controller": "{nomeController}Controller.{nomeMetodo}"}]}"#,
        )
        .unwrap();
        fs::write(template_dir.join("b-other.json"), r#"{"steps": [{"x": "other"}]}"#).unwrap();

        Fixture {
            layout: Layout::new(&template_dir),
            temp,
            config_path,
        }
    }

    #[test]
    fn test_generate_end_to_end() {
        let fx = fixture();
        let mut output = Vec::new();
        let mut console = Console::new("1\n".as_bytes(), &mut output);

        let path = generate(&fx.config_path, &fx.layout, &mut console).unwrap();

        assert_eq!(path, fx.temp.path().join("out").join("CreateUser_Prompt.txt"));
        let prompt = fs::read_to_string(&path).unwrap();
        assert!(prompt.contains("Post CreateUser: id,name"));
        assert!(prompt.contains("UserController.Create"));
        assert!(prompt.contains("===== Etapa 2 ====="));
        assert!(!prompt.contains("# empty"));
    }

    #[test]
    fn test_missing_config_writes_nothing() {
        let fx = fixture();
        let mut output = Vec::new();
        let mut console = Console::new("1\n".as_bytes(), &mut output);

        let err = generate(&fx.temp.path().join("missing.json"), &fx.layout, &mut console).unwrap_err();

        assert!(matches!(err, PromptGenError::NotFound { .. }));
        assert!(!fx.temp.path().join("out").exists());
        assert!(output.is_empty());
    }

    #[test]
    fn test_empty_template_writes_nothing() {
        let fx = fixture();
        fs::write(fx.layout.template_dir.join("a-crud.json"), r#"{"steps": []}"#).unwrap();
        let mut output = Vec::new();
        let mut console = Console::new("1\n".as_bytes(), &mut output);

        let err = generate(&fx.config_path, &fx.layout, &mut console).unwrap_err();

        assert!(matches!(err, PromptGenError::EmptyTemplate { .. }));
        assert!(!fx.temp.path().join("out").exists());
    }
}
