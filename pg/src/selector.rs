//! Template discovery and interactive selection

use colored::Colorize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{PromptGenError, Result};
use crate::layout::{Layout, TEMPLATE_EXTENSION};

/// Operator-facing input and output streams
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line to the operator
    pub fn say(&mut self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Prompt until the operator enters a number in `1..=max`.
    ///
    /// Invalid entries are reported and re-prompted without limit. Closed
    /// input is an error, since no valid choice can ever arrive.
    pub fn read_choice(&mut self, max: usize) -> Result<usize> {
        debug!(%max, "Console::read_choice: called");
        loop {
            write!(self.output, "\nEnter the option number: ")?;
            self.output.flush()?;

            // Bytes, not read_line: undecodable input is just another invalid choice
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                let closed = io::Error::new(io::ErrorKind::UnexpectedEof, "input closed before a template was chosen");
                return Err(closed.into());
            }

            let line = String::from_utf8_lossy(&buf);
            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=max).contains(&choice) => return Ok(choice),
                _ => {
                    debug!(input = %line.trim(), "Console::read_choice: rejected input");
                    writeln!(self.output, "{}", "Invalid option. Try again.".yellow())?;
                }
            }
        }
    }
}

/// List `*.json` files directly inside `dir`, sorted by file name ignoring case
pub fn list_templates(dir: &Path) -> Result<Vec<PathBuf>> {
    debug!(?dir, "list_templates: called");
    if !dir.is_dir() {
        return Err(PromptGenError::NotFound {
            what: "Template directory",
            path: dir.to_path_buf(),
        });
    }

    let mut templates = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| PromptGenError::io(dir, e))? {
        let path = entry.map_err(|e| PromptGenError::io(dir, e))?.path();
        let is_template = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(TEMPLATE_EXTENSION));
        if is_template && path.is_file() {
            templates.push(path);
        }
    }

    if templates.is_empty() {
        return Err(PromptGenError::NotFound {
            what: "Template (*.json)",
            path: dir.to_path_buf(),
        });
    }

    templates.sort_by_cached_key(|path| {
        let name = file_name(path);
        (name.to_lowercase(), name)
    });
    Ok(templates)
}

/// Show the template menu and return the chosen template path
pub fn select_template<R: BufRead, W: Write>(layout: &Layout, console: &mut Console<R, W>) -> Result<PathBuf> {
    let templates = list_templates(&layout.template_dir)?;

    console.say("Select the template JSON file to use:")?;
    for (i, path) in templates.iter().enumerate() {
        console.say(format!("{}. {}", i + 1, file_name(path)))?;
    }

    let choice = console.read_choice(templates.len())?;
    let selected = templates[choice - 1].clone();
    console.say(format!("\nSelected file: {}", file_name(&selected)))?;

    info!("Selected template: {}", selected.display());
    Ok(selected)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
