//! CLI argument parsing for promptgen

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

#[derive(Parser, Debug)]
#[command(name = "promptgen")]
#[command(author, version, about = "Generate an LLM prompt file from a JSON step template", long_about = None)]
pub struct Cli {
    /// Path to the prompt config file
    #[arg(value_name = "CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Directory holding the *.json templates (defaults to ../../../Template next to the executable)
    #[arg(long, env = "PROMPTGEN_TEMPLATE_DIR", hide = true)]
    pub template_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::try_parse_from(["promptgen"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("../../../prompt-config.json"));
    }

    #[test]
    fn test_positional_config_path() {
        let cli = Cli::try_parse_from(["promptgen", "my-config.json"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("my-config.json"));
    }

    #[test]
    fn test_rejects_extra_positional() {
        assert!(Cli::try_parse_from(["promptgen", "a.json", "b.json"]).is_err());
    }
}
