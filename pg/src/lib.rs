//! promptgen - prompt files from JSON step templates
//!
//! Combines an operator-chosen template with values from a small JSON config
//! and writes the result as `{pastaDestino}/{nomeEndpoint}_Prompt.txt`.
//!
//! # Pipeline
//!
//! ```text
//! prompt-config.json ──► PromptConfig ─────────────┐
//!                                                  ▼
//! Template/*.json ──► menu ──► Template::flatten ──► build_prompt ──► write_prompt
//! ```
//!
//! # Example
//!
//! ```ignore
//! use promptgen::{Console, Layout, generate};
//!
//! let layout = Layout::resolve(None)?;
//! let path = generate("prompt-config.json".as_ref(), &layout, &mut Console::stdio())?;
//! ```

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod output;
pub mod pipeline;
pub mod selector;
pub mod template;

pub use builder::{build_prompt, normalize_http_verb};
pub use config::PromptConfig;
pub use error::{PromptGenError, Result};
pub use layout::Layout;
pub use output::write_prompt;
pub use pipeline::generate;
pub use selector::{Console, list_templates, select_template};
pub use template::{FieldValue, Step, Template};
