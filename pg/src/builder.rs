//! Placeholder substitution

use tracing::debug;

use crate::config::PromptConfig;

/// Verbs with a fixed canonical casing
const KNOWN_VERBS: [&str; 6] = ["Get", "Post", "Put", "Delete", "Patch", "Head"];

/// Normalize a free-form HTTP verb: `"POST"` -> `"Post"`, blank -> `"Get"`
pub fn normalize_http_verb(input: &str) -> String {
    let verb = input.trim();
    if verb.is_empty() {
        return "Get".to_string();
    }

    if let Some(known) = KNOWN_VERBS.iter().find(|known| known.eq_ignore_ascii_case(verb)) {
        return known.to_string();
    }

    let mut chars = verb.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Replace every known placeholder in `template` with its config value.
///
/// Replacements run in a fixed order and values are inserted verbatim, so a
/// value containing a later token is itself substituted.
pub fn build_prompt(config: &PromptConfig, template: &str) -> String {
    let verb = normalize_http_verb(&config.tipo_endpoint);
    debug!(%verb, template_len = template.len(), "build_prompt: called");

    template
        .replace("{nomeController}", &config.nome_controller)
        .replace("{nomeEndpoint}", &config.nome_endpoint)
        .replace("{tipoEndpoint}", &verb)
        .replace("{nomeMetodo}", &config.nome_metodo)
        .replace("{colunas}", &config.colunas)
}
