//! Filesystem layout: where templates and the default config live

use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PromptGenError, Result};

/// Name of the template folder
pub const TEMPLATE_DIR_NAME: &str = "Template";

/// Extension of template files
pub const TEMPLATE_EXTENSION: &str = "json";

/// Resolved locations the pipeline reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Directory scanned for `*.json` templates
    pub template_dir: PathBuf,
}

impl Layout {
    /// Use an explicit template directory
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
        }
    }

    /// Templates live three levels above the executable's directory
    pub fn from_base_dir(base_dir: impl AsRef<Path>) -> Self {
        let template_dir = base_dir.as_ref().join("..").join("..").join("..").join(TEMPLATE_DIR_NAME);
        debug!(?template_dir, "Layout::from_base_dir: resolved template dir");
        Self { template_dir }
    }

    /// Resolve from the running executable, unless `override_dir` is given
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self> {
        if let Some(dir) = override_dir {
            debug!(?dir, "Layout::resolve: using template dir override");
            return Ok(Self::new(dir));
        }

        let exe = env::current_exe().map_err(|e| PromptGenError::io("<current executable>", e))?;
        let base_dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self::from_base_dir(base_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base_dir_walks_up_three_levels() {
        let layout = Layout::from_base_dir("/opt/promptgen/target/release");
        assert_eq!(
            layout.template_dir,
            PathBuf::from("/opt/promptgen/target/release/../../../Template")
        );
    }

    #[test]
    fn test_resolve_prefers_override() {
        let layout = Layout::resolve(Some(Path::new("/srv/templates"))).unwrap();
        assert_eq!(layout, Layout::new("/srv/templates"));
    }

    #[test]
    fn test_resolve_from_executable() {
        let layout = Layout::resolve(None).unwrap();
        assert!(layout.template_dir.ends_with(TEMPLATE_DIR_NAME));
    }
}
